#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use bingo_backend::infra::state::build_state;
use bingo_backend::state::app_state::AppState;
use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh application state over a private in-memory database with
/// migrations applied. Each test binary gets its own database, so tests
/// never see each other's rows.
pub async fn test_state() -> AppState {
    build_state().build().await.expect("build test app state")
}

pub async fn read_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("response body should be valid UTF-8");
    serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("failed to parse response body as JSON. Raw body: {body_str}"))
}

/// A 5x5 grid as wire JSON: cell (r, c) = base + 15c + r, FREE at the
/// center. Different bases give different (still range-shaped) grids.
pub fn grid_json(base: u8) -> Value {
    let rows: Vec<Vec<Value>> = (0..5u8)
        .map(|r| {
            (0..5u8)
                .map(|c| {
                    if (r, c) == (2, 2) {
                        Value::from("FREE")
                    } else {
                        Value::from(base + 15 * c + r)
                    }
                })
                .collect()
        })
        .collect();
    Value::from(rows)
}

/// Every number appearing in `grid_json(base)`.
pub fn grid_numbers(base: u8) -> Vec<Value> {
    let mut out = Vec::new();
    for c in 0..5u8 {
        for r in 0..5u8 {
            if (r, c) != (2, 2) {
                out.push(Value::from(base + 15 * c + r));
            }
        }
    }
    out
}

/// Assert the problem+json shape the error middleware produces.
pub async fn assert_problem_details<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_code: &str,
) where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected application/problem+json, got {content_type}"
    );

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header should be present");

    let body = read_json(resp).await;
    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(body.get(key).is_some(), "{key} field should be present");
    }
    assert_eq!(body["code"], expected_code);
    assert_eq!(body["status"], expected_status);
    assert_eq!(body["trace_id"], trace_header);
}
