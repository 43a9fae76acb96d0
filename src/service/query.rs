//! Read operations over the data store. All are side-effect free and safe to retry.

use crate::error::AppError;
use crate::model::{BakedGood, Bakery, BakeryWithGoods};
use crate::store::BakeryStore;

pub struct QueryService;

impl QueryService {
    /// All bakeries in store order. Empty when none exist.
    pub async fn list_bakeries(store: &dyn BakeryStore) -> Result<Vec<Bakery>, AppError> {
        store.list_bakeries().await
    }

    /// One bakery with its baked goods attached.
    pub async fn get_bakery(store: &dyn BakeryStore, id: i64) -> Result<BakeryWithGoods, AppError> {
        let bakery = store
            .find_bakery(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("bakery {}", id)))?;
        let baked_goods = store.list_baked_goods_for_bakery(bakery.id).await?;
        Ok(BakeryWithGoods { bakery, baked_goods })
    }

    pub async fn list_baked_goods_by_price_desc(store: &dyn BakeryStore) -> Result<Vec<BakedGood>, AppError> {
        store.list_baked_goods_by_price_desc().await
    }

    /// The highest-priced good. `NotFound` when there are no baked goods at all.
    pub async fn most_expensive_baked_good(store: &dyn BakeryStore) -> Result<BakedGood, AppError> {
        store
            .list_baked_goods_by_price_desc()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("no baked goods".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewBakedGood, NewBakery};
    use crate::service::seed_sample_data;
    use crate::store::MemoryStore;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        seed_sample_data(&store).await.unwrap();
        store
    }

    fn names(goods: &[BakedGood]) -> Vec<&str> {
        goods.iter().map(|g| g.name.as_str()).collect()
    }

    #[tokio::test]
    async fn lists_every_bakery() {
        let store = seeded().await;
        let bakeries = QueryService::list_bakeries(&store).await.unwrap();
        let mut got: Vec<(i64, &str)> = bakeries.iter().map(|b| (b.id, b.name.as_str())).collect();
        got.sort();
        assert_eq!(got, [(1, "Northside"), (2, "Southside")]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryStore::new();
        assert!(QueryService::list_bakeries(&store).await.unwrap().is_empty());
        assert!(QueryService::list_baked_goods_by_price_desc(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_bakery_nests_its_goods() {
        let store = seeded().await;
        let found = QueryService::get_bakery(&store, 1).await.unwrap();
        assert_eq!(found.bakery.name, "Northside");
        assert_eq!(names(&found.baked_goods), ["Croissant", "Bagel"]);
        let prices: Vec<f64> = found.baked_goods.iter().map(|g| g.price).collect();
        assert_eq!(prices, [5.0, 2.0]);
    }

    #[tokio::test]
    async fn bakery_without_goods_has_empty_list() {
        let store = MemoryStore::new();
        let bakery = store.create_bakery(NewBakery::new("Eastside")).await.unwrap();
        let found = QueryService::get_bakery(&store, bakery.id).await.unwrap();
        assert!(found.baked_goods.is_empty());
    }

    #[tokio::test]
    async fn missing_bakery_is_not_found() {
        let store = seeded().await;
        let err = QueryService::get_bakery(&store, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn goods_sorted_by_price_descending() {
        let store = seeded().await;
        store
            .create_baked_good(NewBakedGood::new("Brioche", 4.25, None))
            .await
            .unwrap();
        let goods = QueryService::list_baked_goods_by_price_desc(&store).await.unwrap();
        assert_eq!(names(&goods), ["Croissant", "Brioche", "Banana Bread", "Bagel"]);
        assert!(goods.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[tokio::test]
    async fn most_expensive_is_the_maximum() {
        let store = seeded().await;
        let top = QueryService::most_expensive_baked_good(&store).await.unwrap();
        assert_eq!(top.name, "Croissant");
        assert_eq!(top.price, 5.0);
    }

    #[tokio::test]
    async fn most_expensive_on_tie_returns_max_price() {
        let store = seeded().await;
        store
            .create_baked_good(NewBakedGood::new("Cake", 5.0, Some(2)))
            .await
            .unwrap();
        let top = QueryService::most_expensive_baked_good(&store).await.unwrap();
        assert_eq!(top.price, 5.0);
    }

    #[tokio::test]
    async fn most_expensive_on_empty_store_is_not_found() {
        let store = MemoryStore::new();
        let err = QueryService::most_expensive_baked_good(&store).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
