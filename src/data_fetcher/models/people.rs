use super::stats::{StatBlock, StatsResponse, TeamRef};
use serde::{Deserialize, Serialize};

/// Response of `people/{id}` and `people/search`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PeopleResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "currentAge", default)]
    pub current_age: Option<u32>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
    /// Present only when stats are hydrated.
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

impl Person {
    /// Hydrated stat blocks in the same shape as a team stats response.
    pub fn stats_response(&self) -> StatsResponse {
        StatsResponse {
            stats: self.stats.clone(),
        }
    }
}

impl PeopleResponse {
    pub fn first(&self) -> Option<&Person> {
        self.people.first()
    }
}
