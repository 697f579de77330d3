//! Contract tests for the HTTP backend gateway.

use rstest::rstest;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend::error::BackendError;
use crate::backend::gateway::{BatchGateway, RatingGateway, ResponseGateway};
use crate::backend::locator::BackendLocator;
use crate::backend::models::{ResponseId, Verdict};

use super::HttpBackendGateway;

struct GatewayFixture {
    server: MockServer,
    locator: BackendLocator,
    gateway: HttpBackendGateway,
}

async fn gateway_fixture() -> GatewayFixture {
    let server = MockServer::start().await;
    let locator = BackendLocator::parse(&server.uri()).expect("mock server URI should parse");
    let gateway = HttpBackendGateway::with_default_timeout().expect("gateway should build");
    GatewayFixture {
        server,
        locator,
        gateway,
    }
}

#[tokio::test]
async fn list_responses_returns_items() {
    let fixture = gateway_fixture().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!([
        {
            "id": 1,
            "prompt": "What is 2+2?",
            "model": "Groq LLaMA3",
            "response": "4",
            "correct_answer": "4",
            "rating": null,
            "num_ratings": 0,
            "positive_ratings": 0,
            "negative_ratings": 0,
            "cumulative_score": 0
        },
        {
            "id": "resp-2",
            "prompt": "What is the capital of France?",
            "model": "Qwen 3",
            "response": "Paris",
            "correct_answer": "Paris",
            "rating": 1,
            "num_ratings": 2,
            "positive_ratings": 2,
            "negative_ratings": 0,
            "cumulative_score": 2
        }
    ]));

    Mock::given(method("GET"))
        .and(path("/responses"))
        .respond_with(response)
        .mount(&fixture.server)
        .await;

    let items = fixture
        .gateway
        .list_responses(&fixture.locator)
        .await
        .expect("request should succeed");

    assert_eq!(items.len(), 2, "expected two responses");

    let first = items.first().expect("should have first response");
    assert_eq!(first.id, ResponseId::Number(1));
    assert_eq!(first.model.as_deref(), Some("Groq LLaMA3"));
    assert!(first.is_unrated());

    let second = items.get(1).expect("should have second response");
    assert_eq!(second.id, ResponseId::Text("resp-2".to_owned()));
    assert_eq!(second.rating, Some(1));
    assert_eq!(second.positive_ratings, Some(2));
}

#[tokio::test]
async fn list_responses_returns_empty_list() {
    let fixture = gateway_fixture().await;

    Mock::given(method("GET"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&fixture.server)
        .await;

    let items = fixture
        .gateway
        .list_responses(&fixture.locator)
        .await
        .expect("request should succeed");

    assert!(items.is_empty(), "expected empty collection");
}

#[tokio::test]
async fn list_responses_maps_status_errors() {
    let fixture = gateway_fixture().await;

    let response = ResponseTemplate::new(500).set_body_json(serde_json::json!({
        "detail": "database unavailable"
    }));

    Mock::given(method("GET"))
        .and(path("/responses"))
        .respond_with(response)
        .mount(&fixture.server)
        .await;

    let error = fixture
        .gateway
        .list_responses(&fixture.locator)
        .await
        .expect_err("request should fail");

    match error {
        BackendError::Api { message } => {
            assert!(message.contains("500"), "missing status: {message}");
            assert!(
                message.contains("database unavailable"),
                "missing detail: {message}"
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_responses_maps_malformed_payloads() {
    let fixture = gateway_fixture().await;

    Mock::given(method("GET"))
        .and(path("/responses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "a list"})),
        )
        .mount(&fixture.server)
        .await;

    let error = fixture
        .gateway
        .list_responses(&fixture.locator)
        .await
        .expect_err("request should fail");

    assert!(
        matches!(error, BackendError::Decode { .. }),
        "expected Decode error, got {error:?}"
    );
}

#[rstest]
#[case::approve(Verdict::Approve, "/rate/3/1")]
#[case::reject(Verdict::Reject, "/rate/3/-1")]
#[tokio::test]
async fn submit_rating_posts_signed_score(#[case] verdict: Verdict, #[case] expected_path: &str) {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path(expected_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "rated", "id": 3, "score": verdict.score()
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    fixture
        .gateway
        .submit_rating(&fixture.locator, &ResponseId::Number(3), verdict)
        .await
        .expect("rating should succeed");
}

#[tokio::test]
async fn submit_rating_sends_no_body() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/rate/5/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&fixture.server)
        .await;

    fixture
        .gateway
        .submit_rating(&fixture.locator, &ResponseId::Number(5), Verdict::Approve)
        .await
        .expect("rating should succeed");

    let requests = fixture
        .server
        .received_requests()
        .await
        .expect("requests should be recorded");
    let request = requests.first().expect("one request should be recorded");
    assert!(request.body.is_empty(), "rating request should carry no body");
}

#[tokio::test]
async fn submit_rating_maps_missing_response() {
    let fixture = gateway_fixture().await;

    let response = ResponseTemplate::new(404).set_body_json(serde_json::json!({
        "detail": "id 9 not found"
    }));

    Mock::given(method("POST"))
        .and(path("/rate/9/-1"))
        .respond_with(response)
        .mount(&fixture.server)
        .await;

    let error = fixture
        .gateway
        .submit_rating(&fixture.locator, &ResponseId::Number(9), Verdict::Reject)
        .await
        .expect_err("rating should fail");

    match error {
        BackendError::Api { message } => {
            assert!(message.contains("id 9 not found"), "missing detail: {message}");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn run_batch_reports_counts() {
    let fixture = gateway_fixture().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "status": "completed",
        "num_prompts": 12,
        "num_responses": 36
    }));

    Mock::given(method("POST"))
        .and(path("/run-batch"))
        .respond_with(response)
        .expect(1)
        .mount(&fixture.server)
        .await;

    let outcome = fixture
        .gateway
        .run_batch(&fixture.locator)
        .await
        .expect("batch trigger should succeed");

    assert_eq!(outcome.status, "completed");
    assert_eq!(outcome.num_prompts, 12);
    assert_eq!(outcome.num_responses, 36);
}
