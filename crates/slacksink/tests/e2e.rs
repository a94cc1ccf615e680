use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server(status: u16) -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    });
    (rt, server)
}

#[test]
fn send_exits_zero_on_success() {
    let (_rt, server) = start_server(200);

    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-u").arg(server.uri())
        .arg("-m").arg("deploy finished")
        .arg("-c").arg("#ops")
        .arg("--fail-fast");

    cmd.assert().success();
}

#[test]
fn colored_send_exits_zero_on_success() {
    let (_rt, server) = start_server(200);

    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-u").arg(server.uri())
        .arg("-m").arg("health check failed")
        .arg("--color").arg("danger")
        .arg("--fail-fast");

    cmd.assert().success();
}

#[test]
fn server_error_with_fail_fast_exits_nonzero() {
    let (_rt, server) = start_server(500);

    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-u").arg(server.uri())
        .arg("-m").arg("deploy finished")
        .arg("--fail-fast");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}

#[test]
fn server_error_without_fail_fast_exits_zero() {
    let (_rt, server) = start_server(500);

    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-u").arg(server.uri())
        .arg("-m").arg("deploy finished");

    cmd.assert().success();
}

#[test]
fn missing_webhook_url_is_an_error() {
    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-m").arg("deploy finished")
        .env_remove("SLACK_WEBHOOK_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("webhook URL"));
}

#[test]
fn webhook_url_falls_back_to_env() {
    let (_rt, server) = start_server(200);

    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("send")
        .arg("-m").arg("deploy finished")
        .arg("--fail-fast")
        .env("SLACK_WEBHOOK_URL", server.uri());

    cmd.assert().success();
}

#[test]
fn version_json() {
    let mut cmd = Command::cargo_bin("slacksink").unwrap();
    cmd.arg("version").arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}
