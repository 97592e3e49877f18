use super::types::{ChatRequest, ChatResponse, HealthResponse};
use crate::{Result, gateway::CompletionGateway};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    info!("Received chat request ({} chars)", request.prompt.chars().count());

    match state.gateway.generate(&request.prompt).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            error!("Failed to generate reply: {}", e);
            Err(e)
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.gateway.model_name().to_string(),
    })
}
