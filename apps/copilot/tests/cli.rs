//! Integration tests for the copilot CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn copilot_cmd() -> Command {
    cargo_bin_cmd!("copilot")
}

#[test]
fn help_lists_commands() {
    let mut cmd = copilot_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("examples"));
}

#[test]
fn examples_prints_quick_start_queries() {
    let mut cmd = copilot_cmd();
    cmd.arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyze the prognosis"))
        .stdout(predicate::str::contains("risk factors"));
}

#[test]
fn blank_query_fails_without_contacting_a_server() {
    // Unroutable base URL: the command must fail on validation, not transport
    let mut cmd = copilot_cmd();
    cmd.env("COPILOT_BASE_URL", "http://127.0.0.1:9")
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a search query"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ask_renders_analysis_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/copilot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": "What is the prognosis?",
            "answer": "The patient is stable.",
            "citations": [
                {
                    "id": 12,
                    "text": "Essential hypertension",
                    "type": "condition",
                    "relevance": 0.92,
                    "source": "conditions.json"
                }
            ],
            "context_used": 3,
            "confidence": 0.9,
            "response_metadata": {
                "model": "gpt-4",
                "temperature": 0.1,
                "context_sources": ["conditions"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = copilot_cmd();
        cmd.env("COPILOT_BASE_URL", &uri)
            .args(["ask", "What is the prognosis?"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The patient is stable."))
            .stdout(predicate::str::contains("Condition"))
            .stdout(predicate::str::contains("conditions.json"))
            .stdout(predicate::str::contains("Model: gpt-4"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ask_surfaces_backend_error_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/copilot"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "error": "no data found" })),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = copilot_cmd();
        cmd.env("COPILOT_BASE_URL", &uri)
            .args(["ask", "anything"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Analysis Error"))
            .stderr(predicate::str::contains("no data found"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ask_json_dumps_raw_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/copilot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": "q",
            "answer": "ok",
            "citations": [],
            "context_used": 0,
            "confidence": 0.5
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = copilot_cmd();
        cmd.env("COPILOT_BASE_URL", &uri)
            .args(["ask", "--json", "q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"answer\": \"ok\""));
    })
    .await
    .unwrap();
}
