use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::records::{Roster, RosterEntry, TeamBattingStats, TeamPitchingStats};
use super::season::resolve_season;
use crate::data_fetcher::StatsApi;
use crate::data_fetcher::models::{BattingCounts, PitchingCounts, Position, StatGroup, StatSplit};
use crate::error::AppError;

/// Parses a raw split `stat` object into typed counts.
pub(super) fn parse_counts<T: DeserializeOwned + Default>(
    stat: &Value,
    context: &str,
) -> Result<T, AppError> {
    if stat.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(stat.clone())
        .map_err(|e| AppError::api_unexpected_structure(e.to_string(), context))
}

async fn team_split(
    api: &dyn StatsApi,
    team_id: u64,
    group: StatGroup,
    season: i32,
) -> Result<StatSplit, AppError> {
    let response = api.team_stats(team_id, group, season).await?;
    match response.first_split(group) {
        Some(split) => Ok(split.clone()),
        None => {
            warn!(
                "No {} split for team {} in season {}",
                group.as_str(),
                team_id,
                season
            );
            Err(AppError::team_stats_not_found(team_id, group.as_str(), season))
        }
    }
}

fn team_name(split: &StatSplit) -> Option<String> {
    split.team.as_ref().and_then(|team| team.name.clone())
}

/// Season batting totals and ratios for a team.
pub async fn team_batting(
    api: &dyn StatsApi,
    team_id: u64,
    season: Option<i32>,
) -> Result<TeamBattingStats, AppError> {
    let season = resolve_season(season);
    info!("Fetching team batting for team {} season {}", team_id, season);

    let split = team_split(api, team_id, StatGroup::Hitting, season).await?;
    let counts: BattingCounts = parse_counts(&split.stat, &format!("teams/{team_id}/stats"))?;

    Ok(TeamBattingStats {
        team_id,
        team_name: team_name(&split),
        season,
        line: (&counts).into(),
    })
}

/// Season pitching totals and ratios for a team.
pub async fn team_pitching(
    api: &dyn StatsApi,
    team_id: u64,
    season: Option<i32>,
) -> Result<TeamPitchingStats, AppError> {
    let season = resolve_season(season);
    info!("Fetching team pitching for team {} season {}", team_id, season);

    let split = team_split(api, team_id, StatGroup::Pitching, season).await?;
    let counts: PitchingCounts = parse_counts(&split.stat, &format!("teams/{team_id}/stats"))?;

    Ok(TeamPitchingStats {
        team_id,
        team_name: team_name(&split),
        season,
        line: (&counts).into(),
    })
}

/// 40-man roster of a team in upstream order.
pub async fn roster(
    api: &dyn StatsApi,
    team_id: u64,
    season: Option<i32>,
) -> Result<Roster, AppError> {
    let season = resolve_season(season);
    info!("Fetching roster for team {} season {}", team_id, season);

    let response = api.roster(team_id, season).await?;
    if response.roster.is_empty() {
        warn!("Empty roster for team {} in season {}", team_id, season);
        return Err(AppError::roster_not_found(team_id, season));
    }

    let players = response
        .roster
        .into_iter()
        .map(|slot| RosterEntry {
            player_id: slot.person.id,
            player_name: slot.person.full_name,
            age: slot.person.current_age,
            position: slot.position.as_ref().and_then(Position::label),
        })
        .collect();

    Ok(Roster {
        team_id,
        season,
        players,
    })
}
