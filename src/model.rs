//! Bakery and baked good records, their inputs, and the nested response shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A priced item. `bakery_id` is nullable in storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBakery {
    pub name: String,
}

impl NewBakery {
    pub fn new(name: impl Into<String>) -> Self {
        NewBakery { name: name.into() }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
}

impl NewBakedGood {
    pub fn new(name: impl Into<String>, price: f64, bakery_id: Option<i64>) -> Self {
        NewBakedGood {
            name: name.into(),
            price,
            bakery_id,
        }
    }
}

/// GET /bakeries/:id body: bakery fields plus its goods inline.
#[derive(Clone, Debug, Serialize)]
pub struct BakeryWithGoods {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}
