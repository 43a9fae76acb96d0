//! Data store seam: the query service talks to `BakeryStore`, backed by PostgreSQL or memory.

mod bootstrap;
pub mod memory;
pub mod postgres;

pub use bootstrap::{ensure_database_exists, ensure_tables, qualified_table};
pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{BakedGood, Bakery, NewBakedGood, NewBakery};
use async_trait::async_trait;

/// Create, find, list, and order primitives over bakeries and baked goods.
///
/// Listing order is by id ascending unless the method says otherwise. Price ordering
/// breaks ties by id ascending, so a fixed data set always yields the same sequence.
#[async_trait]
pub trait BakeryStore: Send + Sync {
    async fn list_bakeries(&self) -> Result<Vec<Bakery>, AppError>;

    async fn find_bakery(&self, id: i64) -> Result<Option<Bakery>, AppError>;

    async fn list_baked_goods_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError>;

    async fn list_baked_goods_by_price_desc(&self) -> Result<Vec<BakedGood>, AppError>;

    async fn create_bakery(&self, new: NewBakery) -> Result<Bakery, AppError>;

    /// Fails with `Validation` when `bakery_id` names no existing bakery.
    async fn create_baked_good(&self, new: NewBakedGood) -> Result<BakedGood, AppError>;

    /// Reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
