//! Router assembly.

pub mod bakery;
pub mod common;

pub use bakery::api_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: health/readiness/version plus the bakery API, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http())
}
