use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use uuid::Uuid;

use crate::config;
use crate::error::AppError;
use crate::generate::TextGenerator;
use crate::prompt::humanize_prompt;
use crate::types::{HealthResponse, HumanizeRequest, HumanizeResponse};

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

/// The whole HTTP surface: two routes behind the CORS policy, with the
/// default request body cap lifted so texts of any length are admitted.
/// Built as a function so tests can stand the app up with a stubbed
/// generator.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/humanize", post(humanize))
        .layer(DefaultBodyLimit::disable())
        .layer(config::cors_layer())
        .with_state(state)
}

pub async fn home() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "AI Humanizer API is running perfectly!",
    })
}

pub async fn humanize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HumanizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        "Humanize {}: {} bytes in, tone {:?}",
        request_id,
        req.text.len(),
        req.tone
    );

    let prompt = humanize_prompt(&req.text, &req.tone);
    let humanized_text = state.generator.generate(&prompt).await?;

    info!(
        "Humanize {}: {} bytes out",
        request_id,
        humanized_text.len()
    );

    Ok((
        StatusCode::OK,
        Json(HumanizeResponse {
            status: "success",
            original_text: req.text,
            selected_tone: req.tone,
            humanized_text,
        }),
    ))
}
