//! In-memory store for tests and local runs without a database.

use super::BakeryStore;
use crate::error::AppError;
use crate::model::{BakedGood, Bakery, NewBakedGood, NewBakery};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    bakeries: Vec<Bakery>,
    baked_goods: Vec<BakedGood>,
}

/// Rows are kept in insertion order, which is also id order since ids are assigned sequentially from 1.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl BakeryStore for MemoryStore {
    async fn list_bakeries(&self) -> Result<Vec<Bakery>, AppError> {
        Ok(self.read()?.bakeries.clone())
    }

    async fn find_bakery(&self, id: i64) -> Result<Option<Bakery>, AppError> {
        Ok(self.read()?.bakeries.iter().find(|b| b.id == id).cloned())
    }

    async fn list_baked_goods_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        Ok(self
            .read()?
            .baked_goods
            .iter()
            .filter(|g| g.bakery_id == Some(bakery_id))
            .cloned()
            .collect())
    }

    async fn list_baked_goods_by_price_desc(&self) -> Result<Vec<BakedGood>, AppError> {
        let mut goods = self.read()?.baked_goods.clone();
        // stable: equal prices keep id order
        goods.sort_by(|a, b| b.price.total_cmp(&a.price));
        Ok(goods)
    }

    async fn create_bakery(&self, new: NewBakery) -> Result<Bakery, AppError> {
        let mut tables = self.write()?;
        let now = Utc::now();
        let bakery = Bakery {
            id: tables.bakeries.len() as i64 + 1,
            name: new.name,
            created_at: now,
            updated_at: now,
        };
        tables.bakeries.push(bakery.clone());
        Ok(bakery)
    }

    async fn create_baked_good(&self, new: NewBakedGood) -> Result<BakedGood, AppError> {
        let mut tables = self.write()?;
        if let Some(bakery_id) = new.bakery_id {
            if !tables.bakeries.iter().any(|b| b.id == bakery_id) {
                return Err(AppError::Validation(format!(
                    "bakery_id {} does not reference an existing bakery",
                    bakery_id
                )));
            }
        }
        let now = Utc::now();
        let good = BakedGood {
            id: tables.baked_goods.len() as i64 + 1,
            name: new.name,
            price: new.price,
            bakery_id: new.bakery_id,
            created_at: now,
            updated_at: now,
        };
        tables.baked_goods.push(good.clone());
        Ok(good)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
