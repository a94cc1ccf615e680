use clap::{Parser, Subcommand, ValueEnum};

/// Slacksink – post notifications to a Slack incoming webhook
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a message to the webhook
    Send {
        /// Webhook endpoint (falls back to $SLACK_WEBHOOK_URL)
        #[arg(short = 'u', long, value_name = "URL")]
        webhook_url: Option<String>,

        /// Message text
        #[arg(short, long)]
        message: String,

        /// Channel to post into (e.g. #alerts)
        #[arg(short, long)]
        channel: Option<String>,

        /// Username shown as the sender
        #[arg(long)]
        username: Option<String>,

        /// Icon URL used as the sender avatar
        #[arg(long)]
        icon_url: Option<String>,

        /// Render as a colorized status attachment
        #[arg(long, value_enum)]
        color: Option<Color>,

        /// Request timeout in seconds
        #[arg(short = 't', long, value_name = "SECS")]
        timeout_secs: Option<u64>,

        /// Exit non-zero when delivery fails instead of swallowing the error
        #[arg(long)]
        fail_fast: bool,
    },
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Green sidebar
    Good,
    /// Red sidebar
    Danger,
}
