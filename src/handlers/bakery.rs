//! Bakery handlers: list and read-with-goods.

use crate::error::AppError;
use crate::model::{Bakery, BakeryWithGoods};
use crate::service::QueryService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

/// Path ids are BIGSERIAL keys; anything that is not an integer is a bad request.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid id: '{}'", id_str)))
}

/// GET /bakeries
pub async fn list_bakeries(State(state): State<AppState>) -> Result<Json<Vec<Bakery>>, AppError> {
    let bakeries = QueryService::list_bakeries(state.store.as_ref()).await?;
    tracing::debug!(count = bakeries.len(), "listed bakeries");
    Ok(Json(bakeries))
}

/// GET /bakeries/:id
pub async fn get_bakery(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BakeryWithGoods>, AppError> {
    let Path(id_str) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let id = parse_id(&id_str)?;
    let bakery = QueryService::get_bakery(state.store.as_ref(), id).await?;
    tracing::debug!(id, goods = bakery.baked_goods.len(), "read bakery");
    Ok(Json(bakery))
}
