//! Typed schemas for MLB Stats API payloads.
//!
//! Only the fields the server uses are modelled; unknown fields are ignored
//! and missing counts default to zero.

pub mod people;
pub mod roster;
pub mod standings;
pub mod stats;
pub mod teams;

pub use people::{PeopleResponse, Person};
pub use roster::{Position, RosterPerson, RosterResponse, RosterSlot};
pub use standings::{DivisionRecord, StandingsResponse, StandingsTeamRecord};
pub use stats::{
    BattingCounts, DisplayName, PitchingCounts, StatBlock, StatGroup, StatSplit, StatsResponse,
    TeamRef,
};
pub use teams::{Team, TeamsResponse};
