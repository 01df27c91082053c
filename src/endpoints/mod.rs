//! The operations behind both transport surfaces.
//!
//! Each operation validates its parameters, queries the upstream service
//! through [`StatsApi`](crate::data_fetcher::StatsApi), applies the derived
//! stat calculator and shapes a response record. Transports only dispatch
//! through [`Operation::invoke`].

pub mod identity;
pub mod operation;
pub mod params;
pub mod player;
pub mod records;
pub mod season;
pub mod standings;
pub mod team;

pub use operation::Operation;
pub use params::OperationParams;
pub use season::{current_year, resolve_season};
