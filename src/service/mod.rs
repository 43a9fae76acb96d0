pub mod query;
pub mod seed;

pub use query::QueryService;
pub use seed::seed_sample_data;
