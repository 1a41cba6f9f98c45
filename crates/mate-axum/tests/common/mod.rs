//! Shared helpers for mate-axum integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use mate_axum::bootstrap::{AxumContext, CorsConfig};
use mate_axum::routes::create_router;
use mate_core::ports::{CompletionError, CompletionPort, CompletionRequest, CompletionResult};

/// Model id the fake context is built with.
pub const TEST_MODEL: &str = "test-model";

/// Outcome the fake upstream produces for every call.
#[derive(Clone)]
pub enum FakeReply {
    Text(String),
    Network(String),
    RateLimited,
}

/// Completion port that returns a canned reply and records every request.
pub struct FakeCompletion {
    reply: FakeReply,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(FakeReply::Text(text.to_string()))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for FakeCompletion {
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String> {
        self.seen.lock().unwrap().push(request);
        match &self.reply {
            FakeReply::Text(text) => Ok(text.clone()),
            FakeReply::Network(message) => Err(CompletionError::Network {
                message: message.clone(),
            }),
            FakeReply::RateLimited => Err(CompletionError::RateLimited {
                message: "You exceeded your current quota".to_string(),
            }),
        }
    }
}

/// Router wired to `fake`.
pub fn app_with(fake: Arc<FakeCompletion>) -> Router {
    let ctx = AxumContext::new(fake, TEST_MODEL);
    create_router(ctx, &CorsConfig::AllowAll)
}

/// `POST uri` with a JSON body.
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"))
}
