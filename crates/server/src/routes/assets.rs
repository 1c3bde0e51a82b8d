//! CRUD routes for the asset catalog.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::asset::{Asset, AssetStatus, CreateAsset, UpdateAsset};
use serde::Deserialize;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct AssetListQuery {
    pub status: Option<AssetStatus>,
}

/// GET /api/assets
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetListQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<Asset>>>, ApiError> {
    let assets = match query.status {
        Some(status) => Asset::find_by_status(&state.db().pool, status).await?,
        None => Asset::find_all(&state.db().pool).await?,
    };
    Ok(ResponseJson(ApiResponse::success(assets)))
}

/// POST /api/assets
pub async fn create_asset(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateAsset>,
) -> Result<ResponseJson<ApiResponse<Asset>>, ApiError> {
    let asset = Asset::create(&state.db().pool, Uuid::new_v4(), &payload).await?;
    tracing::info!(asset_id = %asset.id, name = %asset.name, "created asset");
    Ok(ResponseJson(ApiResponse::success(asset)))
}

/// GET /api/assets/{asset_id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Asset>>, ApiError> {
    let asset = Asset::find_by_id(&state.db().pool, asset_id)
        .await?
        .ok_or(ApiError::AssetNotFound(asset_id))?;
    Ok(ResponseJson(ApiResponse::success(asset)))
}

/// PUT /api/assets/{asset_id}
pub async fn update_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateAsset>,
) -> Result<ResponseJson<ApiResponse<Asset>>, ApiError> {
    let asset = Asset::update(&state.db().pool, asset_id, &payload)
        .await?
        .ok_or(ApiError::AssetNotFound(asset_id))?;
    Ok(ResponseJson(ApiResponse::success(asset)))
}

/// DELETE /api/assets/{asset_id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Asset::delete(&state.db().pool, asset_id).await?;
    if deleted == 0 {
        return Err(ApiError::AssetNotFound(asset_id));
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router(_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route(
            "/assets/{asset_id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
