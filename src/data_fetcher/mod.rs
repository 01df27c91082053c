pub mod api;
pub mod models;

pub use api::{MlbStatsClient, StatsApi};
pub use models::StatGroup;
