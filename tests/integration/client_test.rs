//! HTTP client against a canned local server

use std::net::TcpListener;
use std::time::Duration;

use txa::client::{AnalysisClient, HttpAnalysisClient};
use txa::controller::{RequestLifecycleController, RequestState};
use txa::error::{AnalysisError, GENERIC_ERROR_MESSAGE};
use txa::model::{AnalysisRequest, SummarizeRequest, SummaryMethod};

use crate::helpers::{closed_address, sample_json, sample_result, CannedServer, SAMPLE_TEXT};

fn client(base_url: &str) -> HttpAnalysisClient {
    HttpAnalysisClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn analyze_posts_text_and_decodes_result() {
    let server = CannedServer::respond(200, sample_json());
    let result = client(&server.base_url)
        .analyze(&AnalysisRequest::new(SAMPLE_TEXT))
        .await
        .unwrap();

    assert_eq!(result, sample_result());
    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/analyze/");
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, serde_json::json!({ "text": SAMPLE_TEXT }));
}

#[tokio::test]
async fn missing_optional_collections_decode_as_empty() {
    let body = r#"{
        "text_stats": {"word_count": 3, "sentence_count": 1, "avg_sentence_length": 3.0,
                       "avg_word_length": 4.0, "character_count": 14},
        "readability": {"flesch_kincaid_grade": 1.0, "reading_level": "Easy",
                        "description": "Easy."}
    }"#;
    let server = CannedServer::respond(200, body);
    let result = client(&server.base_url)
        .analyze(&AnalysisRequest::new("Dogs bark loudly."))
        .await
        .unwrap();

    assert!(result.word_frequency.is_empty());
    assert!(result.passive_sentences.is_empty());
    assert!(result.tense_analysis.future.is_empty());
}

#[tokio::test]
async fn string_detail_becomes_the_message() {
    let server = CannedServer::respond(
        400,
        r#"{"detail": "Text must be at least 10 characters long"}"#,
    );
    let err = client(&server.base_url)
        .analyze(&AnalysisRequest::new("short text"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AnalysisError::Service {
            status: 400,
            detail: Some("Text must be at least 10 characters long".into()),
        }
    );
    assert_eq!(err.user_message(), "Text must be at least 10 characters long");
}

#[tokio::test]
async fn validation_list_detail_is_flattened() {
    let server = CannedServer::respond(
        422,
        r#"{"detail": [{"loc": ["body", "text"], "msg": "Value error, Text cannot be empty", "type": "value_error"}]}"#,
    );
    let err = client(&server.base_url)
        .analyze(&AnalysisRequest::new("          "))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Text cannot be empty");
}

#[tokio::test]
async fn error_without_detail_uses_generic_message() {
    let server = CannedServer::respond(500, "Internal Server Error");
    let err = client(&server.base_url)
        .analyze(&AnalysisRequest::new(SAMPLE_TEXT))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Service { status: 500, detail: None }));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn success_with_wrong_shape_is_malformed() {
    let server = CannedServer::respond(200, r#"{"unexpected": true}"#);
    let err = client(&server.base_url)
        .analyze(&AnalysisRequest::new(SAMPLE_TEXT))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let err = client(&closed_address())
        .analyze(&AnalysisRequest::new(SAMPLE_TEXT))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[tokio::test]
async fn silent_server_times_out() {
    // accepted by the kernel backlog, never answered
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let client = HttpAnalysisClient::new(base_url, Duration::from_millis(200)).unwrap();

    let err = client
        .analyze(&AnalysisRequest::new(SAMPLE_TEXT))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
    drop(listener);
}

#[tokio::test]
async fn controller_run_end_to_end() {
    let server = CannedServer::respond(200, sample_json());
    let client = client(&server.base_url);
    let mut controller = RequestLifecycleController::new(10);

    let state = controller.run(&client, SAMPLE_TEXT).await.unwrap();
    assert_eq!(state, &RequestState::Success(sample_result()));
    assert_eq!(controller.input_text(), Some(SAMPLE_TEXT));
}

#[tokio::test]
async fn controller_run_surfaces_service_detail() {
    let server = CannedServer::respond(500, r#"{"detail": "Analysis failed: tagger missing"}"#);
    let client = client(&server.base_url);
    let mut controller = RequestLifecycleController::new(10);

    let state = controller.run(&client, SAMPLE_TEXT).await.unwrap();
    assert_eq!(
        state,
        &RequestState::Error("Analysis failed: tagger missing".into())
    );
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn summarize_sends_count_and_method() {
    let server = CannedServer::respond(
        200,
        r#"{"summary": "The cat sat on the mat.", "original_word_count": 14,
            "summary_word_count": 6, "reduction_percentage": 57.14}"#,
    );
    let request = SummarizeRequest::new(SAMPLE_TEXT)
        .sentences(1)
        .method(SummaryMethod::TextRank);
    let response = client(&server.base_url).summarize(&request).await.unwrap();

    assert_eq!(response.summary, "The cat sat on the mat.");
    assert_eq!(response.summary_word_count, 6);

    let captured = server.next_request();
    assert_eq!(captured.path, "/api/summarize/");
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body["sentence_count"], 1);
    assert_eq!(body["method"], "textrank");
}

#[tokio::test]
async fn health_reports_status() {
    let server = CannedServer::respond(200, r#"{"status": "healthy"}"#);
    let status = client(&server.base_url).health().await.unwrap();
    assert!(status.is_healthy());

    let request = server.next_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/health");
}
