use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;

use crate::PlannerError;
use crate::models::{ItineraryPlan, ItineraryRequest};
use crate::pipeline::ItineraryPipeline;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ItineraryPipeline>,
}

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
            PlannerError::Generation { .. } | PlannerError::Api { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ApiError {
            error: self.user_message(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(pipeline: Arc<ItineraryPipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/itinerary", post(create_itinerary))
        .with_state(AppState { pipeline })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

async fn create_itinerary(
    State(state): State<AppState>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<ItineraryPlan>, PlannerError> {
    tracing::info!("Planning {} days to {}", request.duration_days, request.destination);
    let plan = state.pipeline.plan(&request).await?;
    Ok(Json(plan))
}
