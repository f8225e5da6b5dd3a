//! Tests for the response envelope and JSON encoder.

use axum::http::header::{HeaderValue, CONTENT_TYPE, LOCATION};
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

use marquee_api::response::{write_json, Envelope};

#[test]
fn envelope_serializes_as_single_entry_object() {
    let payload = json!({"id": 1, "title": "X"});
    let value = serde_json::to_value(Envelope::new("movie", &payload)).unwrap();

    assert_eq!(value, json!({"movie": {"id": 1, "title": "X"}}));
}

#[tokio::test]
async fn write_json_pretty_prints_with_trailing_newline() {
    let payload = json!({"id": 1});
    let response = write_json(
        StatusCode::OK,
        &Envelope::new("movie", &payload),
        std::iter::empty(),
    )
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    // 2-space indentation and a trailing newline for terminal readability.
    assert_eq!(text, "{\n  \"movie\": {\n    \"id\": 1\n  }\n}\n");
}

#[tokio::test]
async fn write_json_sets_extra_headers() {
    let payload = json!({"id": 7});
    let response = write_json(
        StatusCode::CREATED,
        &Envelope::new("movie", &payload),
        [(LOCATION, HeaderValue::from_static("/v1/movies/7"))],
    )
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/v1/movies/7");
}

#[tokio::test]
async fn later_headers_replace_earlier_same_named_ones() {
    let payload = json!({});
    let response = write_json(
        StatusCode::OK,
        &payload,
        [
            (LOCATION, HeaderValue::from_static("/v1/movies/1")),
            (LOCATION, HeaderValue::from_static("/v1/movies/2")),
        ],
    )
    .unwrap();

    let values: Vec<_> = response.headers().get_all(LOCATION).iter().collect();
    assert_eq!(values, vec!["/v1/movies/2"]);
}

#[tokio::test]
async fn movie_payload_uses_the_runtime_wire_format() {
    use chrono::Utc;
    use marquee_core::movie::Movie;
    use marquee_core::runtime::Runtime;

    let movie = Movie {
        id: 3,
        created_at: Utc::now(),
        title: "Heat".to_string(),
        year: 1995,
        runtime: Runtime::new(170),
        genres: vec!["crime".to_string()],
        version: 1,
    };

    let response = write_json(
        StatusCode::OK,
        &Envelope::new("movie", &movie),
        std::iter::empty(),
    )
    .unwrap();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["movie"]["runtime"], "170 mins");
    assert_eq!(body["movie"]["id"], 3);
}
