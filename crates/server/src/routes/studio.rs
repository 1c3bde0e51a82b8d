//! Routes for the embedded UI Studio demo. All state is in-memory and
//! session-scoped; nothing here touches the database.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use services::services::{
    plan_validator::validate,
    studio::{PromptOutcome, VersionSummary},
    studio_session::{StudioSession, UiModel},
    ui_plan::UiPlan,
};
use ts_rs::TS;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// Request body for prompt submission
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PromptRequest {
    pub text: String,
}

/// Response for candidate plan validation
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PlanCheck {
    pub valid: bool,
    pub reason: Option<String>,
}

/// POST /api/studio/sessions
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<StudioSession>>, ApiError> {
    let session = state.studio().create_session();
    Ok(ResponseJson(ApiResponse::success(session)))
}

/// GET /api/studio/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<StudioSession>>, ApiError> {
    let session = state.studio().snapshot(session_id)?;
    Ok(ResponseJson(ApiResponse::success(session)))
}

/// POST /api/studio/sessions/{session_id}/prompts
pub async fn submit_prompt(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    axum::Json(payload): axum::Json<PromptRequest>,
) -> Result<ResponseJson<ApiResponse<PromptOutcome>>, ApiError> {
    let outcome = state.studio().submit_prompt(session_id, &payload.text)?;
    Ok(ResponseJson(ApiResponse::success(outcome)))
}

/// GET /api/studio/sessions/{session_id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<VersionSummary>>>, ApiError> {
    let versions = state.studio().list_versions(session_id)?;
    Ok(ResponseJson(ApiResponse::success(versions)))
}

/// POST /api/studio/sessions/{session_id}/versions/{index}/restore
pub async fn restore_version(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<ResponseJson<ApiResponse<UiModel>>, ApiError> {
    let model = state.studio().restore_version(session_id, index)?;
    Ok(ResponseJson(ApiResponse::success(model)))
}

/// POST /api/studio/validate
///
/// Checks a candidate plan without touching any session.
pub async fn validate_plan(
    axum::Json(payload): axum::Json<UiPlan>,
) -> ResponseJson<ApiResponse<PlanCheck>> {
    let check = match validate(&payload) {
        Ok(()) => PlanCheck {
            valid: true,
            reason: None,
        },
        Err(reason) => PlanCheck {
            valid: false,
            reason: Some(reason.to_string()),
        },
    };
    ResponseJson(ApiResponse::success(check))
}

pub fn router(_state: &AppState) -> Router<AppState> {
    Router::new().nest(
        "/studio",
        Router::new()
            .route("/sessions", post(create_session))
            .route("/sessions/{session_id}", get(get_session))
            .route("/sessions/{session_id}/prompts", post(submit_prompt))
            .route("/sessions/{session_id}/versions", get(list_versions))
            .route(
                "/sessions/{session_id}/versions/{index}/restore",
                post(restore_version),
            )
            .route("/validate", post(validate_plan)),
    )
}
