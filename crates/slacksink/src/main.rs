use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use slacksink::cli::{Cli, Color, Commands};
use slacksink::{Message, SlackClient};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt = Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Send {
                webhook_url,
                message,
                channel,
                username,
                icon_url,
                color,
                timeout_secs,
                fail_fast,
            } => {
                let url = webhook_url
                    .or_else(|| std::env::var("SLACK_WEBHOOK_URL").ok())
                    .context("No webhook URL given (use --webhook-url or $SLACK_WEBHOOK_URL)")?;

                let client = SlackClient::new(&url).context("Constructing Slack client")?;

                let mut msg = Message::new(message).fail_fast(fail_fast);
                if let Some(channel) = channel {
                    msg = msg.channel(channel);
                }
                if let Some(username) = username {
                    msg = msg.username(username);
                }
                if let Some(icon_url) = icon_url {
                    msg = msg.icon_url(icon_url);
                }
                if let Some(secs) = timeout_secs {
                    msg = msg.timeout(Duration::from_secs(secs));
                }

                match color {
                    Some(color) => {
                        client
                            .send_colored(&msg, color == Color::Good)
                            .await
                            .context("Sending colored Slack webhook")?;
                    }
                    None => {
                        client
                            .send(&msg)
                            .await
                            .context("Sending Slack webhook")?;
                    }
                }
            }
            Commands::Version { json } => {
                if json {
                    let info = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                        "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!(
                        "slacksink {} (commit: {}, built: {})",
                        env!("CARGO_PKG_VERSION"),
                        option_env!("GIT_SHA").unwrap_or("unknown"),
                        option_env!("BUILD_DATE").unwrap_or("unknown"),
                    );
                }
            }
        }
        Ok(())
    })
}
