#![allow(dead_code)]

mod mocks;

pub use mocks::*;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use completion_gateway::{
    config::Config,
    gateway::CompletionGateway,
    llm::TextGenerator,
    server::{AppState, router},
};
use serde_json::Value;
use std::sync::Arc;

pub const DEV_ORIGIN: &str = "http://localhost:3000";

/// Router wired exactly like the real server, around the given generator.
pub fn create_test_app(generator: Arc<dyn TextGenerator>) -> Router {
    create_test_app_with_config(generator, &Config::default())
}

pub fn create_test_app_with_config(generator: Arc<dyn TextGenerator>, config: &Config) -> Router {
    let gateway = CompletionGateway::from_config(generator, config);
    router(AppState::new(gateway), &config.server).expect("router should build")
}

pub fn chat_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
