pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{
    Error, Result,
    config::{Config, ServerConfig},
    gateway::CompletionGateway,
    llm::OpenAiGenerator,
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    // Load the model once; every request shares this handle
    let generator = OpenAiGenerator::load(&config.model).await?;
    let gateway = CompletionGateway::from_config(Arc::new(generator), &config);

    let app = router(AppState::new(gateway), &config.server)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = build_cors(&config.allowed_origin)?;

    Ok(Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Grants cross-origin access to a single origin, with any method and header.
fn build_cors(origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .map_err(|_| Error::config(format!("invalid allowed_origin: {}", origin)))?;

    // A list (unlike `exact`) only answers when the request origin matches
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
