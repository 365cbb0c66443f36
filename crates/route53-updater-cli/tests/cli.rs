use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::{Command, Output};
use wiremock::matchers::{body_string_contains, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOSTNAME_PATH: &str = "/latest/meta-data/public-hostname";

const CHANGE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ChangeResourceRecordSetsResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <ChangeInfo>
    <Id>/change/C2682N5HXP0BZ4</Id>
    <Status>PENDING</Status>
    <SubmittedAt>2017-02-10T01:36:41.958Z</SubmittedAt>
  </ChangeInfo>
</ChangeResourceRecordSetsResponse>"#;

const ERROR_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Error>
    <Type>Sender</Type>
    <Code>InvalidChangeBatch</Code>
    <Message>RRSet of type CNAME with DNS name foo.example.com. is not permitted</Message>
  </Error>
  <RequestId>b25f48e8-0000-0000-0000-000000000000</RequestId>
</ErrorResponse>"#;

/// A command isolated from the caller's AWS and updater environment.
fn updater(server: &MockServer, config_dir: &tempfile::TempDir) -> Command {
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    let mut cmd = Command::cargo_bin("route53-updater").unwrap();
    for var in [
        "ROUTE53_ZONE_ID",
        "ROUTE53_HOSTNAME",
        "ROUTE53_DOMAIN",
        "ROUTE53_TTL",
        "ROUTE53_RR",
        "ROUTE53_RECORD_TYPE",
        "AWS_PROFILE",
        "AWS_SESSION_TOKEN",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("ROUTE53_UPDATER_CONFIG", &config_path)
        .env("ROUTE53_METADATA_URL", server.uri())
        .env("ROUTE53_ENDPOINT_URL", server.uri())
        .env("AWS_ACCESS_KEY_ID", "AKIDTEST")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .env("AWS_REGION", "us-east-1")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", config_dir.path().join("aws-config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", config_dir.path().join("aws-credentials"))
        .arg("--no-color");
    cmd
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap()
}

async fn mount_change(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path_regex(r"/hostedzone/Z1/rrset/?$"))
        .and(body_string_contains("<Action>UPSERT</Action>"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/xml")
                .set_body_string(CHANGE_RESPONSE),
        )
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn missing_zone_id_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args(["-hostname", "foo.example.com", "-domain", "example.com"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("you must specify a zone ID, hostname and domain"))
        .stderr(predicate::str::contains("-zoneid"));
}

#[tokio::test]
async fn malformed_ttl_is_a_usage_error() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args(["-zoneid=Z1", "-hostname=foo.example.com", "-domain=example.com", "-ttl=abc"]);

    run(cmd)
        .await
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'abc'"));
}

#[tokio::test]
async fn version_flag_exits_cleanly() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.arg("--version");

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("route53-updater"));
}

#[tokio::test]
async fn missing_domain_fails() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args(["-zoneid=Z1", "-hostname=foo.example.com", "-rr=1.2.3.4"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stderr(predicate::str::contains("-domain"));
}

#[tokio::test]
async fn explicit_record_is_upserted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HOSTNAME_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"/hostedzone/Z1/rrset/?$"))
        .and(body_string_contains("<Action>UPSERT</Action>"))
        .and(body_string_contains("<Name>foo.example.com</Name>"))
        .and(body_string_contains("<Type>A</Type>"))
        .and(body_string_contains("<TTL>120</TTL>"))
        .and(body_string_contains("<Value>1.2.3.4</Value>"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/xml")
                .set_body_string(CHANGE_RESPONSE),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args([
        "-zoneid=Z1",
        "-hostname=foo.example.com",
        "-domain=example.com",
        "-rr=1.2.3.4",
        "-ttl=120",
        "-recordtype=A",
        "--output",
        "json",
    ]);

    let output = run(cmd).await;
    output.clone().assert().success();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("C2682N5HXP0BZ4").count(), 1);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "PENDING");
}

#[tokio::test]
async fn metadata_hostname_becomes_cname() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HOSTNAME_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("ec2-54-1-2-3.compute-1.amazonaws.com"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"/hostedzone/Z1/rrset/?$"))
        .and(body_string_contains("<Type>CNAME</Type>"))
        .and(body_string_contains("<TTL>60</TTL>"))
        .and(body_string_contains(
            "<Value>ec2-54-1-2-3.compute-1.amazonaws.com</Value>",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/xml")
                .set_body_string(CHANGE_RESPONSE),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args(["-zoneid", "Z1", "-hostname", "foo.example.com", "-domain", "example.com"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("/change/C2682N5HXP0BZ4"))
        .stdout(predicate::str::contains("PENDING"));
}

#[tokio::test]
async fn metadata_failure_stops_before_upsert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(HOSTNAME_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_change(&server, 0).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args(["-zoneid=Z1", "-hostname=foo.example.com", "-domain=example.com"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("instance metadata returned HTTP 404"));
}

#[tokio::test]
async fn provider_error_is_printed_and_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"/hostedzone/Z1/rrset/?$"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "text/xml")
                .set_body_string(ERROR_RESPONSE),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args([
        "-zoneid=Z1",
        "-hostname=foo.example.com",
        "-domain=example.com",
        "-rr=1.2.3.4",
    ]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("InvalidChangeBatch"))
        .stderr(predicate::str::contains("is not permitted"));
}

#[tokio::test]
async fn repeated_runs_issue_identical_upserts() {
    let server = MockServer::start().await;
    mount_change(&server, 2).await;

    let dir = tempfile::tempdir().unwrap();
    for _ in 0..2 {
        let mut cmd = updater(&server, &dir);
        cmd.args([
            "-zoneid=Z1",
            "-hostname=foo.example.com",
            "-domain=example.com",
            "-rr=1.2.3.4",
        ]);
        run(cmd).await.assert().success();
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn dry_run_submits_nothing() {
    let server = MockServer::start().await;
    mount_change(&server, 0).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    cmd.args([
        "-zoneid=Z1",
        "-hostname=foo.example.com",
        "-domain=example.com",
        "-rr=1.2.3.4",
        "--dry-run",
    ]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Would submit: UPSERT foo.example.com 60 CNAME 1.2.3.4"));
}

#[tokio::test]
async fn config_file_supplies_zone_and_domain() {
    let server = MockServer::start().await;
    mount_change(&server, 0).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = updater(&server, &dir);
    let config_path = dir.path().join("from-file.toml");
    std::fs::write(&config_path, "zone_id = \"Z1\"\ndomain = \"example.com\"\nttl = 300\n").unwrap();

    cmd.args(["--config"])
        .arg(&config_path)
        .args(["-hostname=foo.example.com", "-rr=1.2.3.4", "--dry-run"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.example.com 300 CNAME"));
}
