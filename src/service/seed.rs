//! Sample data: two bakeries and three baked goods.

use crate::error::AppError;
use crate::model::{NewBakedGood, NewBakery};
use crate::store::BakeryStore;

/// Seed Northside and Southside with their goods. No-op when any bakery exists; returns whether it wrote.
pub async fn seed_sample_data(store: &dyn BakeryStore) -> Result<bool, AppError> {
    if !store.list_bakeries().await?.is_empty() {
        tracing::info!("bakeries present, skipping sample data");
        return Ok(false);
    }
    let north = store.create_bakery(NewBakery::new("Northside")).await?;
    let south = store.create_bakery(NewBakery::new("Southside")).await?;
    for good in [
        NewBakedGood::new("Croissant", 5.0, Some(north.id)),
        NewBakedGood::new("Bagel", 2.0, Some(north.id)),
        NewBakedGood::new("Banana Bread", 3.0, Some(south.id)),
    ] {
        store.create_baked_good(good).await?;
    }
    tracing::info!("sample data seeded");
    Ok(true)
}
