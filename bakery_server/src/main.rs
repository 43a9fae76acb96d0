//! Bakery API server: reads config from env, ensures database and tables, optionally seeds, serves the router.
//!
//! Run from repo root: `cargo run -p bakery-server`

use bakery_api::{
    app, ensure_database_exists, ensure_tables, init_tracing, seed_sample_data, AppState, PgStore,
    ServerConfig,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("bakery_api=info,bakery_server=info,tower_http=info");

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    ensure_tables(&pool, &config.schema).await?;
    let store = PgStore::new(pool, &config.schema);
    if config.seed_sample_data {
        seed_sample_data(&store).await?;
    }

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(store))).await?;
    Ok(())
}
