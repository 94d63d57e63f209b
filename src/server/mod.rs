// mcp server surface: json-rpc over http (POST /mcp) or stdio

pub mod auth;
pub mod rpc;
pub mod stdio;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::handlers::ToolRegistry;
use crate::types::HealthResponse;

pub use stdio::serve_stdio;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
    pub token: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<ToolRegistry>, token: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            token: token.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mcp_routes = Router::new()
        .route("/mcp", post(mcp))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(mcp_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve_http(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let tools = state.registry.len();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, tools, "mcp server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools: state.registry.len(),
    })
}

async fn mcp(State(state): State<AppState>, body: String) -> Response {
    match rpc::handle_message(&state.registry, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
