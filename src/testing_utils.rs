//! Test doubles and fixtures shared by unit and integration tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::data_fetcher::StatsApi;
use crate::data_fetcher::api::status_error;
use crate::data_fetcher::models::{
    PeopleResponse, RosterResponse, StandingsResponse, StatGroup, StatsResponse, TeamsResponse,
};
use crate::error::AppError;

/// Upstream query kinds the stub can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubQuery {
    Standings,
    TeamStats(StatGroup),
    Roster,
    PersonStats(StatGroup),
    SearchPeople,
    Teams,
    PersonCurrentTeam,
}

/// `StatsApi` stub that answers from canned JSON and records every call.
///
/// Queries without a canned body fail with an upstream 404, so a test only
/// has to register what it expects to be asked.
#[derive(Debug, Default)]
pub struct RecordingStatsApi {
    responses: HashMap<StubQuery, Value>,
    failure: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl RecordingStatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the body returned for `query`.
    pub fn with(mut self, query: StubQuery, body: Value) -> Self {
        self.responses.insert(query, body);
        self
    }

    /// Makes every query fail with the given upstream HTTP status.
    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    /// Descriptions of every call made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn respond<T: DeserializeOwned>(&self, query: StubQuery, call: String) -> Result<T, AppError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call.clone()),
            Err(poisoned) => poisoned.into_inner().push(call.clone()),
        }

        if let Some(status) = self.failure {
            return Err(status_error(status, "Stubbed failure", &call));
        }

        match self.responses.get(&query) {
            Some(body) => serde_json::from_value(body.clone())
                .map_err(|e| AppError::api_unexpected_structure(e.to_string(), call)),
            None => Err(AppError::api_not_found(call)),
        }
    }
}

#[async_trait]
impl StatsApi for RecordingStatsApi {
    async fn standings(&self, season: i32) -> Result<StandingsResponse, AppError> {
        self.respond(StubQuery::Standings, format!("standings({season})"))
    }

    async fn team_stats(
        &self,
        team_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<StatsResponse, AppError> {
        self.respond(
            StubQuery::TeamStats(group),
            format!("team_stats({team_id}, {}, {season})", group.as_str()),
        )
    }

    async fn roster(&self, team_id: u64, season: i32) -> Result<RosterResponse, AppError> {
        self.respond(StubQuery::Roster, format!("roster({team_id}, {season})"))
    }

    async fn person_stats(
        &self,
        player_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<PeopleResponse, AppError> {
        self.respond(
            StubQuery::PersonStats(group),
            format!("person_stats({player_id}, {}, {season})", group.as_str()),
        )
    }

    async fn search_people(&self, name: &str) -> Result<PeopleResponse, AppError> {
        self.respond(StubQuery::SearchPeople, format!("search_people({name})"))
    }

    async fn teams(&self, season: i32) -> Result<TeamsResponse, AppError> {
        self.respond(StubQuery::Teams, format!("teams({season})"))
    }

    async fn person_current_team(&self, player_id: u64) -> Result<PeopleResponse, AppError> {
        self.respond(
            StubQuery::PersonCurrentTeam,
            format!("person_current_team({player_id})"),
        )
    }
}

/// Two divisions' worth of standings with realistic run totals.
pub fn standings_json() -> Value {
    json!({
        "records": [
            {
                "standingsType": "regularSeason",
                "league": {"id": 103},
                "division": {"id": 201},
                "teamRecords": [
                    {"team": {"id": 147, "name": "New York Yankees"}, "wins": 94, "losses": 68,
                     "gamesPlayed": 162, "runsScored": 815, "runsAllowed": 668},
                    {"team": {"id": 110, "name": "Baltimore Orioles"}, "wins": 91, "losses": 71,
                     "gamesPlayed": 162, "runsScored": 786, "runsAllowed": 699}
                ]
            },
            {
                "standingsType": "regularSeason",
                "league": {"id": 104},
                "division": {"id": 204},
                "teamRecords": [
                    {"team": {"id": 143, "name": "Philadelphia Phillies"}, "wins": 95, "losses": 67,
                     "gamesPlayed": 162, "runsScored": 784, "runsAllowed": 671},
                    {"team": {"id": 121, "name": "New York Mets"}, "wins": 89, "losses": 73,
                     "gamesPlayed": 162, "runsScored": 768, "runsAllowed": 697}
                ]
            }
        ]
    })
}

/// A handful of clubs as returned by `teams?sportId=1`.
pub fn teams_json() -> Value {
    json!({
        "teams": [
            {"id": 147, "name": "New York Yankees", "teamName": "Yankees", "shortName": "NY Yankees",
             "locationName": "Bronx", "abbreviation": "NYY"},
            {"id": 111, "name": "Boston Red Sox", "teamName": "Red Sox", "shortName": "Boston",
             "locationName": "Boston", "abbreviation": "BOS"},
            {"id": 121, "name": "New York Mets", "teamName": "Mets", "shortName": "NY Mets",
             "locationName": "Flushing", "abbreviation": "NYM"},
            {"id": 145, "name": "Chicago White Sox", "teamName": "White Sox", "shortName": "Chi White Sox",
             "locationName": "Chicago", "abbreviation": "CWS"}
        ]
    })
}

/// A season hitting split with the given counting stats.
pub fn hitting_stats_json(stat: Value) -> Value {
    json!({
        "stats": [{
            "type": {"displayName": "season"},
            "group": {"displayName": "hitting"},
            "splits": [{"season": "2024", "stat": stat, "team": {"id": 147, "name": "New York Yankees"}}]
        }]
    })
}

/// A season pitching split with the given counting stats.
pub fn pitching_stats_json(stat: Value) -> Value {
    json!({
        "stats": [{
            "type": {"displayName": "season"},
            "group": {"displayName": "pitching"},
            "splits": [{"season": "2024", "stat": stat, "team": {"id": 147, "name": "New York Yankees"}}]
        }]
    })
}

/// A person record with the given hydrated stat blocks.
pub fn person_json(id: u64, full_name: &str, age: u32, stats: Value) -> Value {
    let blocks = stats.get("stats").cloned().unwrap_or_else(|| json!([]));
    json!({
        "people": [{
            "id": id,
            "fullName": full_name,
            "currentAge": age,
            "stats": blocks
        }]
    })
}
