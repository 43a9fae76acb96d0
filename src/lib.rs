//! Bakery API: read-only JSON routes over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{BakedGood, Bakery, BakeryWithGoods, NewBakedGood, NewBakery};
pub use routes::{api_routes, app, common_routes, common_routes_with_ready};
pub use service::{seed_sample_data, QueryService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, BakeryStore, MemoryStore, PgStore};

/// Install the fmt subscriber. `RUST_LOG` wins over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}
