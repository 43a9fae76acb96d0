//! PostgreSQL-backed store. Identifiers come from config; values are always bound parameters.

use super::{qualified_table, BakeryStore};
use crate::error::AppError;
use crate::model::{BakedGood, Bakery, NewBakedGood, NewBakery};
use async_trait::async_trait;
use sqlx::PgPool;

const BAKERY_COLUMNS: &str = "id, name, created_at, updated_at";
const BAKED_GOOD_COLUMNS: &str = "id, name, price, bakery_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    bakeries: String,
    baked_goods: String,
}

impl PgStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStore {
            pool,
            bakeries: qualified_table(schema, "bakeries"),
            baked_goods: qualified_table(schema, "baked_goods"),
        }
    }
}

#[async_trait]
impl BakeryStore for PgStore {
    async fn list_bakeries(&self) -> Result<Vec<Bakery>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", BAKERY_COLUMNS, self.bakeries);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Bakery>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_bakery(&self, id: i64) -> Result<Option<Bakery>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", BAKERY_COLUMNS, self.bakeries);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Bakery>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_baked_goods_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE bakery_id = $1 ORDER BY id",
            BAKED_GOOD_COLUMNS, self.baked_goods
        );
        tracing::debug!(sql = %sql, bakery_id, "query");
        let rows = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(bakery_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_baked_goods_by_price_desc(&self) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY price DESC, id ASC",
            BAKED_GOOD_COLUMNS, self.baked_goods
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, BakedGood>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create_bakery(&self, new: NewBakery) -> Result<Bakery, AppError> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING {}",
            self.bakeries, BAKERY_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %new.name, "insert");
        let row = sqlx::query_as::<_, Bakery>(&sql)
            .bind(&new.name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_write)?;
        Ok(row)
    }

    async fn create_baked_good(&self, new: NewBakedGood) -> Result<BakedGood, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, price, bakery_id) VALUES ($1, $2, $3) RETURNING {}",
            self.baked_goods, BAKED_GOOD_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %new.name, price = new.price, bakery_id = ?new.bakery_id, "insert");
        let row = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(&new.name)
            .bind(new.price)
            .bind(new.bakery_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_write)?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
