//! URL building utilities for MLB Stats API endpoints

use crate::constants::upstream::{
    AMERICAN_LEAGUE_ID, MLB_SPORT_ID, NATIONAL_LEAGUE_ID, ROSTER_TYPE,
};
use crate::data_fetcher::models::StatGroup;
use crate::error::AppError;

/// Builds the regular season standings URL covering both leagues.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://statsapi.mlb.com/api/v1", 2024);
/// assert_eq!(
///     url,
///     "https://statsapi.mlb.com/api/v1/standings?leagueId=103,104&season=2024&standingsType=regularSeason"
/// );
/// ```
pub fn build_standings_url(api_domain: &str, season: i32) -> String {
    format!(
        "{api_domain}/standings?leagueId={AMERICAN_LEAGUE_ID},{NATIONAL_LEAGUE_ID}&season={season}&standingsType=regularSeason"
    )
}

/// Builds a team season statistics URL for one stat group.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_team_stats_url;
/// use mlb_stats_mcp::data_fetcher::models::StatGroup;
///
/// let url = build_team_stats_url("https://statsapi.mlb.com/api/v1", 147, StatGroup::Hitting, 2024);
/// assert_eq!(
///     url,
///     "https://statsapi.mlb.com/api/v1/teams/147/stats?group=hitting&stats=season&season=2024"
/// );
/// ```
pub fn build_team_stats_url(api_domain: &str, team_id: u64, group: StatGroup, season: i32) -> String {
    format!(
        "{api_domain}/teams/{team_id}/stats?group={}&stats=season&season={season}",
        group.as_str()
    )
}

/// Builds a 40-man roster URL with the person record hydrated.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://statsapi.mlb.com/api/v1", 147, 2024);
/// assert_eq!(
///     url,
///     "https://statsapi.mlb.com/api/v1/teams/147/roster?rosterType=40Man&season=2024&hydrate=person"
/// );
/// ```
pub fn build_roster_url(api_domain: &str, team_id: u64, season: i32) -> String {
    format!("{api_domain}/teams/{team_id}/roster?rosterType={ROSTER_TYPE}&season={season}&hydrate=person")
}

/// Builds a person URL with season statistics for one group hydrated.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_person_stats_url;
/// use mlb_stats_mcp::data_fetcher::models::StatGroup;
///
/// let url = build_person_stats_url("https://statsapi.mlb.com/api/v1", 592450, StatGroup::Pitching, 2023);
/// assert_eq!(
///     url,
///     "https://statsapi.mlb.com/api/v1/people/592450?hydrate=stats(group=[pitching],type=season,season=2023)"
/// );
/// ```
pub fn build_person_stats_url(
    api_domain: &str,
    player_id: u64,
    group: StatGroup,
    season: i32,
) -> String {
    format!(
        "{api_domain}/people/{player_id}?hydrate=stats(group=[{}],type=season,season={season})",
        group.as_str()
    )
}

/// Builds a person URL with the current team hydrated.
pub fn build_person_current_team_url(api_domain: &str, player_id: u64) -> String {
    format!("{api_domain}/people/{player_id}?hydrate=currentTeam")
}

/// Builds the list of MLB clubs for a season.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://statsapi.mlb.com/api/v1", 2025);
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/teams?sportId=1&season=2025");
/// ```
pub fn build_teams_url(api_domain: &str, season: i32) -> String {
    format!("{api_domain}/teams?sportId={MLB_SPORT_ID}&season={season}")
}

/// Builds a people search URL. The name is percent-encoded.
///
/// Falls back to manual escaping of the characters that matter for a query
/// string when the domain itself does not parse as a URL.
///
/// # Example
/// ```
/// use mlb_stats_mcp::data_fetcher::api::build_people_search_url;
///
/// let url = build_people_search_url("https://statsapi.mlb.com/api/v1", "Shohei Ohtani").unwrap();
/// assert_eq!(url, "https://statsapi.mlb.com/api/v1/people/search?names=Shohei+Ohtani");
/// ```
///
/// # Errors
/// * `AppError::Config` - If `api_domain` is not a parseable base URL
pub fn build_people_search_url(api_domain: &str, name: &str) -> Result<String, AppError> {
    let base = format!("{api_domain}/people/search");
    reqwest::Url::parse_with_params(&base, &[("names", name)])
        .map(|url| url.to_string())
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{api_domain}': {e}")))
}
