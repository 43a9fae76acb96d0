//! Baked good handlers: price-ordered listing and the single most expensive item.

use crate::error::AppError;
use crate::model::BakedGood;
use crate::service::QueryService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /baked_goods/by_price
pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<Json<Vec<BakedGood>>, AppError> {
    let goods = QueryService::list_baked_goods_by_price_desc(state.store.as_ref()).await?;
    tracing::debug!(count = goods.len(), "listed baked goods by price");
    Ok(Json(goods))
}

/// GET /baked_goods/most_expensive — 404 when no baked goods exist.
pub async fn most_expensive_baked_good(State(state): State<AppState>) -> Result<Json<BakedGood>, AppError> {
    let good = QueryService::most_expensive_baked_good(state.store.as_ref()).await?;
    Ok(Json(good))
}
