pub mod assets;
pub mod studio;

use axum::{Router, response::Json as ResponseJson, routing::get};
use utils::response::ApiResponse;

use crate::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .route("/health", get(health))
            .merge(assets::router(state))
            .merge(studio::router(state)),
    )
}

async fn health() -> ResponseJson<ApiResponse<&'static str>> {
    ResponseJson(ApiResponse::success("ok"))
}
