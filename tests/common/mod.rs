#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use triplec_site::api::email_relay::EmailRelay;
use triplec_site::config::SiteConfig;
use triplec_site::error::RelayError;
use triplec_site::models::contact_models::TemplateParams;
use triplec_site::repositories::catalog_repository::CatalogRepository;
use triplec_site::{api_router, AppState};

/// Relay double that records every payload and answers with a fixed outcome.
pub struct StubRelay {
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last: std::sync::Mutex<Option<TemplateParams>>,
}

impl StubRelay {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self { fail: false, calls: AtomicUsize::new(0), last: std::sync::Mutex::new(None) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { fail: true, calls: AtomicUsize::new(0), last: std::sync::Mutex::new(None) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailRelay for StubRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(params.clone());
        if self.fail {
            Err(RelayError::Rejected { status: 500, body: "relay down".to_string() })
        } else {
            Ok(())
        }
    }
}

pub fn state(relay: Arc<StubRelay>) -> Arc<AppState> {
    let config = SiteConfig::from_lookup(|key| match key {
        "CONTACT_TO_EMAIL" => Some("training@example.com".to_string()),
        _ => None,
    })
    .unwrap();
    let catalog = CatalogRepository::embedded().unwrap();
    Arc::new(AppState::new(config, catalog, relay))
}

pub fn app(relay: Arc<StubRelay>) -> Router {
    api_router(state(relay))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
