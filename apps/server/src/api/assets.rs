use std::sync::Arc;

use crate::{
    auth::AuthenticatedUser,
    error::ApiResult,
    extract::ApiJson,
    main_lib::AppState,
    models::{Asset, AssetList, AssetPayload},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use coinfolio_core::constants::{REFERENCE_CURRENCY, REFERENCE_CURRENCY_ICON};

fn format_value(value: f64) -> String {
    format!("{} {}", value, REFERENCE_CURRENCY_ICON)
}

#[utoipa::path(get, path = "/api/v1/assets", responses((status = 200, body = AssetList)))]
pub async fn list_assets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<AssetList>> {
    let assets = state.asset_service.get_assets(&user.id)?;
    Ok(Json(AssetList {
        items: assets.into_iter().map(Asset::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses((status = 200, body = Asset), (status = 403), (status = 404))
)]
pub async fn get_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.get_owned_asset(&user.id, &id)?;
    Ok(Json(Asset::from(asset)))
}

#[utoipa::path(
    post,
    path = "/api/v1/assets",
    request_body = AssetPayload,
    responses((status = 201, body = Asset), (status = 422))
)]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(payload): ApiJson<AssetPayload>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let created = state
        .asset_service
        .create_asset(&user.id, payload.into_new_asset(&user.id))
        .await?;
    Ok((StatusCode::CREATED, Json(Asset::from(created))))
}

#[utoipa::path(
    put,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    request_body = AssetPayload,
    responses((status = 204), (status = 403), (status = 404), (status = 422))
)]
pub async fn update_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(payload): ApiJson<AssetPayload>,
) -> ApiResult<StatusCode> {
    state
        .asset_service
        .update_asset(&user.id, &id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses((status = 204), (status = 403), (status = 404))
)]
pub async fn delete_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/value",
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 422, description = "An asset has an unsupported currency"),
        (status = 502, description = "Price feed failure")
    )
)]
pub async fn total_value(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<String> {
    let assets = state.asset_service.get_assets(&user.id)?;
    let value = state
        .valuation_service
        .total_value_of(&assets, REFERENCE_CURRENCY)
        .await?;
    Ok(format_value(value))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}/value",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 403),
        (status = 404),
        (status = 422, description = "Unsupported currency"),
        (status = 502, description = "Price feed failure")
    )
)]
pub async fn asset_value(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<String> {
    let asset = state.asset_service.get_owned_asset(&user.id, &id)?;
    let value = state
        .valuation_service
        .asset_value(&asset, REFERENCE_CURRENCY)
        .await?;
    Ok(format_value(value))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/value", get(total_value))
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .route("/assets/{id}/value", get(asset_value))
}
