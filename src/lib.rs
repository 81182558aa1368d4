use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use governor::Quota;
use nonzero_ext::nonzero;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod catalog_handlers;
    pub mod contact_handlers;
    pub mod home_handlers;
}
pub mod utils {
    pub mod catalog_filter;
    pub mod catalog_view;
    pub mod contact_flow;
    pub mod countries;
    pub mod delivery_limiter;
    pub mod expansion;
    pub mod logos;
}
pub mod api {
    pub mod email_relay;
}
pub mod models {
    pub mod catalog_models;
    pub mod contact_models;
}
pub mod repositories {
    pub mod catalog_repository;
}

use api::email_relay::EmailRelay;
use config::SiteConfig;
use handlers::{catalog_handlers, contact_handlers, home_handlers};
use repositories::catalog_repository::CatalogRepository;
use utils::delivery_limiter::DeliveryLimiter;

pub struct AppState {
    pub config: SiteConfig,
    pub catalog: CatalogRepository,
    pub relay: Arc<dyn EmailRelay>,
    pub contact_limiter: DeliveryLimiter,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: CatalogRepository, relay: Arc<dyn EmailRelay>) -> Self {
        Self {
            config,
            catalog,
            relay,
            // 5 delivered messages per hour per email
            contact_limiter: DeliveryLimiter::new(Quota::per_hour(nonzero!(5u32))),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// JSON routes of the site. Static files, tracing and CORS are layered on in `main`.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/home", get(home_handlers::get_home))
        .route("/api/catalog", get(catalog_handlers::get_catalog))
        .route("/api/catalog/levels", get(catalog_handlers::get_levels))
        .route("/api/catalog/reservation", get(catalog_handlers::reserve_course))
        .route("/api/contact/form", get(contact_handlers::get_contact_form))
        .route("/api/contact/countries", get(contact_handlers::get_countries))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .with_state(state)
}
