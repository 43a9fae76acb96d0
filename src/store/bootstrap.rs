//! Database and table bootstrap: create the target database if missing, then `bakeries` and `baked_goods`.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Returns schema-qualified table name (e.g. "public.bakeries").
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Create `schema` if not exists, then both tables and their indexes. Idempotent.
/// `baked_goods.bakery_id` is a nullable foreign key into `bakeries.id`.
pub async fn ensure_tables(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let bakeries = qualified_table(schema, "bakeries");
    let baked_goods = qualified_table(schema, "baked_goods");

    let bakeries_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        bakeries
    );
    sqlx::query(&bakeries_ddl).execute(pool).await?;

    let baked_goods_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            bakery_id BIGINT REFERENCES {} (id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        baked_goods, bakeries
    );
    sqlx::query(&baked_goods_ddl).execute(pool).await?;

    for (index, column) in [
        ("baked_goods_bakery_id_idx", "bakery_id"),
        ("baked_goods_price_idx", "price"),
    ] {
        let sql = format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            quote_ident(index),
            baked_goods,
            quote_ident(column)
        );
        sqlx::query(&sql).execute(pool).await?;
    }

    tracing::info!(schema, "tables ensured");
    Ok(())
}

/// Connect to the `postgres` admin database and create the target database if it does not exist.
/// A URL without a database path names the server default, so there is nothing to create.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin_url, db_name)) = parse_db_name_from_url(database_url)? else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| invalid_url(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn invalid_url(reason: String) -> ConfigError {
    ConfigError::Invalid {
        key: "DATABASE_URL",
        reason,
    }
}

/// Splits into (admin url, database name). `None` when the URL has no path.
fn parse_db_name_from_url(url: &str) -> Result<Option<(String, String)>, ConfigError> {
    let scheme_end = url
        .find("://")
        .map(|i| i + 3)
        .ok_or_else(|| invalid_url(format!("'{}' has no scheme", url)))?;
    let Some(slash) = url.get(scheme_end..).and_then(|rest| rest.find('/')) else {
        return Ok(None);
    };
    let path_start = scheme_end + slash + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim().to_string();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok(Some((format!("{}postgres{}", base, query), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
