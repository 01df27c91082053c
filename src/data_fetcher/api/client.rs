//! Upstream client for the MLB Stats API

use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_people_search_url, build_person_current_team_url, build_person_stats_url,
    build_roster_url, build_standings_url, build_team_stats_url, build_teams_url,
};
use crate::config::Config;
use crate::data_fetcher::models::{
    PeopleResponse, RosterResponse, StandingsResponse, StatGroup, StatsResponse, TeamsResponse,
};
use crate::error::AppError;

/// Read-only queries against the upstream statistics service.
///
/// Each method issues exactly one outbound request. Implementations must not
/// retry or cache.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Regular season standings of both leagues.
    async fn standings(&self, season: i32) -> Result<StandingsResponse, AppError>;

    /// Season totals of one stat group for a team.
    async fn team_stats(
        &self,
        team_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<StatsResponse, AppError>;

    /// 40-man roster of a team.
    async fn roster(&self, team_id: u64, season: i32) -> Result<RosterResponse, AppError>;

    /// A person with season statistics of one group hydrated.
    async fn person_stats(
        &self,
        player_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<PeopleResponse, AppError>;

    /// People whose names match `name`, in upstream relevance order.
    async fn search_people(&self, name: &str) -> Result<PeopleResponse, AppError>;

    /// Every MLB club for a season.
    async fn teams(&self, season: i32) -> Result<TeamsResponse, AppError>;

    /// A person with the current team hydrated.
    async fn person_current_team(&self, player_id: u64) -> Result<PeopleResponse, AppError>;
}

/// `StatsApi` over HTTP with a shared, pooled reqwest client.
#[derive(Debug, Clone)]
pub struct MlbStatsClient {
    client: Client,
    api_domain: String,
}

impl MlbStatsClient {
    /// Creates a client for the configured upstream with the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.api_base_url()))
    }

    pub fn new(client: Client, api_domain: impl Into<String>) -> Self {
        let api_domain = api_domain.into();
        Self {
            client,
            api_domain: api_domain.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }
}

#[async_trait]
impl StatsApi for MlbStatsClient {
    #[instrument(skip(self))]
    async fn standings(&self, season: i32) -> Result<StandingsResponse, AppError> {
        fetch(&self.client, &build_standings_url(&self.api_domain, season)).await
    }

    #[instrument(skip(self))]
    async fn team_stats(
        &self,
        team_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<StatsResponse, AppError> {
        let url = build_team_stats_url(&self.api_domain, team_id, group, season);
        fetch(&self.client, &url).await
    }

    #[instrument(skip(self))]
    async fn roster(&self, team_id: u64, season: i32) -> Result<RosterResponse, AppError> {
        fetch(&self.client, &build_roster_url(&self.api_domain, team_id, season)).await
    }

    #[instrument(skip(self))]
    async fn person_stats(
        &self,
        player_id: u64,
        group: StatGroup,
        season: i32,
    ) -> Result<PeopleResponse, AppError> {
        let url = build_person_stats_url(&self.api_domain, player_id, group, season);
        fetch(&self.client, &url).await
    }

    #[instrument(skip(self))]
    async fn search_people(&self, name: &str) -> Result<PeopleResponse, AppError> {
        fetch(&self.client, &build_people_search_url(&self.api_domain, name)?).await
    }

    #[instrument(skip(self))]
    async fn teams(&self, season: i32) -> Result<TeamsResponse, AppError> {
        fetch(&self.client, &build_teams_url(&self.api_domain, season)).await
    }

    #[instrument(skip(self))]
    async fn person_current_team(&self, player_id: u64) -> Result<PeopleResponse, AppError> {
        let url = build_person_current_team_url(&self.api_domain, player_id);
        fetch(&self.client, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> MlbStatsClient {
        MlbStatsClient::new(create_test_http_client(), format!("{}/", server.uri()))
    }

    #[tokio::test]
    async fn test_standings_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings"))
            .and(query_param("leagueId", "103,104"))
            .and(query_param("season", "2024"))
            .and(query_param("standingsType", "regularSeason"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [{"teamRecords": [{"team": {"id": 147, "name": "New York Yankees"},
                    "wins": 94, "losses": 68, "runsScored": 815, "runsAllowed": 668}]}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let standings = client_for(&mock_server).standings(2024).await.unwrap();
        assert_eq!(standings.team_records().count(), 1);
    }

    #[tokio::test]
    async fn test_team_stats_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/147/stats"))
            .and(query_param("group", "pitching"))
            .and(query_param("stats", "season"))
            .and(query_param("season", "2023"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let stats = client_for(&mock_server)
            .team_stats(147, StatGroup::Pitching, 2023)
            .await
            .unwrap();
        assert!(stats.stats.is_empty());
    }

    #[tokio::test]
    async fn test_roster_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/147/roster"))
            .and(query_param("rosterType", "40Man"))
            .and(query_param("season", "2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "roster": [{"person": {"id": 592450, "fullName": "Aaron Judge"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let roster = client_for(&mock_server).roster(147, 2024).await.unwrap();
        assert_eq!(roster.roster[0].person.full_name, "Aaron Judge");
    }

    #[tokio::test]
    async fn test_search_people_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/search"))
            .and(query_param("names", "Will Smith"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "people": [{"id": 669257, "fullName": "Will Smith"}, {"id": 519293, "fullName": "Will Smith"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let people = client_for(&mock_server).search_people("Will Smith").await.unwrap();
        assert_eq!(people.people.len(), 2);
    }

    #[tokio::test]
    async fn test_person_current_team_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/660271"))
            .and(query_param("hydrate", "currentTeam"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "people": [{"id": 660271, "fullName": "Shohei Ohtani",
                    "currentTeam": {"id": 119, "name": "Los Angeles Dodgers"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let people = client_for(&mock_server).person_current_team(660271).await.unwrap();
        assert_eq!(people.first().and_then(|p| p.current_team.clone()).map(|t| t.id), Some(119));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).teams(2024).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_from_config_normalizes_domain() {
        let config = Config {
            api_domain: "statsapi.mlb.com/api/v1/".to_string(),
            ..Config::default()
        };
        let client = MlbStatsClient::from_config(&config).unwrap();
        assert_eq!(client.api_domain(), "https://statsapi.mlb.com/api/v1");
    }
}
