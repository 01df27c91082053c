use tracing::info;

use super::records::{Standings, TeamRecord};
use super::season::resolve_season;
use crate::data_fetcher::StatsApi;
use crate::data_fetcher::models::StandingsTeamRecord;
use crate::error::AppError;
use crate::stats::calculator::{pythagorean_expectation, pythagorean_record};

/// Regular season standings of every MLB team with Pythagorean projections.
pub async fn standings(api: &dyn StatsApi, season: Option<i32>) -> Result<Standings, AppError> {
    let season = resolve_season(season);
    info!("Fetching standings for season {}", season);

    let response = api.standings(season).await?;
    let teams = response.team_records().map(team_record).collect();

    Ok(Standings { season, teams })
}

fn team_record(record: &StandingsTeamRecord) -> TeamRecord {
    let (pythagorean_wins, pythagorean_losses) =
        pythagorean_record(record.runs_scored, record.runs_allowed, record.games());
    TeamRecord {
        team_id: record.team.id,
        team_name: record.team.name.clone(),
        wins: record.wins,
        losses: record.losses,
        runs_scored: record.runs_scored,
        runs_allowed: record.runs_allowed,
        pythagorean_expectation: pythagorean_expectation(record.runs_scored, record.runs_allowed),
        pythagorean_wins,
        pythagorean_losses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::season::current_year;
    use crate::error::ErrorKind;
    use crate::testing_utils::{RecordingStatsApi, StubQuery, standings_json};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_standings_lists_every_team_in_order() {
        let api = RecordingStatsApi::new().with(StubQuery::Standings, standings_json());
        let standings = standings(&api, Some(2024)).await.unwrap();

        assert_eq!(standings.season, 2024);
        let ids: Vec<u64> = standings.teams.iter().map(|t| t.team_id).collect();
        assert_eq!(ids, vec![147, 110, 143, 121]);
        for team in &standings.teams {
            assert_eq!(team.wins + team.losses, 162);
            assert_eq!(team.pythagorean_wins + team.pythagorean_losses, 162);
            assert!((0.0..=1.0).contains(&team.pythagorean_expectation));
        }
        assert_eq!(api.calls(), vec!["standings(2024)".to_string()]);
    }

    #[tokio::test]
    async fn test_standings_defaults_to_current_year() {
        let api = RecordingStatsApi::new().with(StubQuery::Standings, standings_json());
        let omitted = standings(&api, None).await.unwrap();
        assert_eq!(omitted.season, current_year());

        let future = standings(&api, Some(current_year() + 5)).await.unwrap();
        assert_eq!(future.season, current_year());
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_standings_keeps_missing_team_name_empty() {
        let api = RecordingStatsApi::new().with(
            StubQuery::Standings,
            json!({"records": [{"teamRecords": [
                {"team": {"id": 147}, "wins": 94, "losses": 68,
                 "runsScored": 815, "runsAllowed": 668}
            ]}]}),
        );
        let standings = standings(&api, Some(2024)).await.unwrap();
        assert_eq!(standings.teams[0].team_name, None);

        let value = serde_json::to_value(&standings).unwrap();
        assert_eq!(value["teams"][0]["team_name"], Value::Null);
    }

    #[tokio::test]
    async fn test_standings_upstream_failure() {
        let api = RecordingStatsApi::new().failing_with(503);
        let err = standings(&api, Some(2024)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    }
}
