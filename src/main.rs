use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;

use triplec_site::{
    api::email_relay::EmailJsRelay,
    api_router,
    config::SiteConfig,
    repositories::catalog_repository::CatalogRepository,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = SiteConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,triplec_site=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let catalog = CatalogRepository::load(config.catalog_path.as_deref())
        .context("Failed to load training catalog")?;
    let relay = Arc::new(EmailJsRelay::new(config.relay.clone()));
    let frontend_url = config.frontend_url.clone();
    let static_dir = config.static_dir.clone();
    let port = config.port;

    let state = Arc::new(AppState::new(config, catalog, relay));

    // Unknown paths fall back to index.html so client-side routes like /contact-us resolve.
    let static_files = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    let app = api_router(state)
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(frontend_url.parse::<axum::http::HeaderValue>().context("Invalid FRONTEND_URL")?))
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
        );

    use tokio::net::TcpListener;
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
