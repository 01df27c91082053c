//! Name-to-identifier and player-to-team resolution.

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_fetcher::StatsApi;
use crate::data_fetcher::models::Team;
use crate::error::AppError;

/// One candidate for a name lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NameMatch {
    pub id: u64,
    pub name: String,
}

/// A player's current club.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerTeamAffiliation {
    pub player_id: u64,
    pub player_name: String,
    pub team_id: u64,
    pub team_name: Option<String>,
}

/// Players whose names match `name`, in the upstream's relevance order.
///
/// No match is an empty result, not an error. Several matches are returned
/// as-is; picking one is left to the caller.
pub async fn resolve_player_id(api: &dyn StatsApi, name: &str) -> Result<Vec<NameMatch>, AppError> {
    let people = api.search_people(name).await?;
    let matches: Vec<NameMatch> = people
        .people
        .into_iter()
        .map(|person| NameMatch {
            id: person.id,
            name: person.full_name,
        })
        .collect();
    debug!("Player lookup '{}' matched {} people", name, matches.len());
    Ok(matches)
}

/// Teams matching `name` among the clubs of `season`.
///
/// Exact case-insensitive matches on any known name form (full name, club
/// name, short name, location, abbreviation) win. Otherwise every team with
/// a name form containing `name` is returned, in upstream order.
pub async fn resolve_team_id(
    api: &dyn StatsApi,
    name: &str,
    season: i32,
) -> Result<Vec<NameMatch>, AppError> {
    let teams = api.teams(season).await?;
    let matches = match_teams(&teams.teams, name);
    debug!("Team lookup '{}' matched {} teams", name, matches.len());
    Ok(matches)
}

fn match_teams(teams: &[Team], name: &str) -> Vec<NameMatch> {
    let needle = name.trim().to_lowercase();
    let to_match = |team: &Team| NameMatch {
        id: team.id,
        name: team.name.clone(),
    };

    let exact: Vec<NameMatch> = teams
        .iter()
        .filter(|team| team.aliases().any(|alias| alias.to_lowercase() == needle))
        .map(to_match)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    teams
        .iter()
        .filter(|team| {
            team.aliases()
                .any(|alias| alias.to_lowercase().contains(&needle))
        })
        .map(to_match)
        .collect()
}

/// The club `player_id` currently belongs to.
///
/// Fails with `NotFound` when the player is unknown or has no current team
/// (retired, unsigned).
pub async fn resolve_current_team(
    api: &dyn StatsApi,
    player_id: u64,
) -> Result<PlayerTeamAffiliation, AppError> {
    let people = api.person_current_team(player_id).await?;
    let person = people
        .people
        .into_iter()
        .next()
        .ok_or_else(|| AppError::player_not_found(player_id))?;

    let Some(team) = person.current_team else {
        warn!("Player {} has no current team", player_id);
        return Err(AppError::no_current_team(player_id));
    };

    Ok(PlayerTeamAffiliation {
        player_id: person.id,
        player_name: person.full_name,
        team_id: team.id,
        team_name: team.name,
    })
}
