use tracing::{debug, info};

use super::records::{PlayerBattingStats, PlayerPitchingStats, PlayerTeamAffiliation};
use super::season::resolve_season;
use super::team::parse_counts;
use crate::data_fetcher::StatsApi;
use crate::data_fetcher::models::{BattingCounts, PitchingCounts, Person, StatGroup};
use crate::error::AppError;
use crate::lookup::resolve_current_team;

async fn person_with_stats(
    api: &dyn StatsApi,
    player_id: u64,
    group: StatGroup,
    season: i32,
) -> Result<Person, AppError> {
    let response = api.person_stats(player_id, group, season).await?;
    response
        .people
        .into_iter()
        .next()
        .ok_or_else(|| AppError::player_not_found(player_id))
}

/// Season counts of `group` for a person. A season without a split reads as
/// all zeros.
fn season_counts<T>(person: &Person, group: StatGroup) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned + Default,
{
    let stats = person.stats_response();
    match stats.first_split(group) {
        Some(split) => parse_counts(&split.stat, &format!("people/{}", person.id)),
        None => {
            debug!(
                "No {} split for player {}, using zero line",
                group.as_str(),
                person.id
            );
            Ok(T::default())
        }
    }
}

/// Season batting line and ratios for a player.
pub async fn player_batting(
    api: &dyn StatsApi,
    player_id: u64,
    season: Option<i32>,
) -> Result<PlayerBattingStats, AppError> {
    let season = resolve_season(season);
    info!("Fetching player batting for player {} season {}", player_id, season);

    let person = person_with_stats(api, player_id, StatGroup::Hitting, season).await?;
    let counts: BattingCounts = season_counts(&person, StatGroup::Hitting)?;

    Ok(PlayerBattingStats {
        player_id: person.id,
        player_name: person.full_name,
        age: person.current_age,
        season,
        line: (&counts).into(),
    })
}

/// Season pitching line and ratios for a player.
pub async fn player_pitching(
    api: &dyn StatsApi,
    player_id: u64,
    season: Option<i32>,
) -> Result<PlayerPitchingStats, AppError> {
    let season = resolve_season(season);
    info!("Fetching player pitching for player {} season {}", player_id, season);

    let person = person_with_stats(api, player_id, StatGroup::Pitching, season).await?;
    let counts: PitchingCounts = season_counts(&person, StatGroup::Pitching)?;

    Ok(PlayerPitchingStats {
        player_id: person.id,
        player_name: person.full_name,
        age: person.current_age,
        season,
        line: (&counts).into(),
    })
}

/// The club a player currently belongs to.
pub async fn player_team(
    api: &dyn StatsApi,
    player_id: u64,
) -> Result<PlayerTeamAffiliation, AppError> {
    info!("Fetching current team for player {}", player_id);
    resolve_current_team(api, player_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing_utils::{
        RecordingStatsApi, StubQuery, hitting_stats_json, person_json, pitching_stats_json,
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_player_batting() {
        let api = RecordingStatsApi::new().with(
            StubQuery::PersonStats(StatGroup::Hitting),
            person_json(
                592450,
                "Aaron Judge",
                32,
                hitting_stats_json(json!({"atBats": 559, "hits": 180, "homeRuns": 58})),
            ),
        );
        let stats = player_batting(&api, 592450, Some(2024)).await.unwrap();
        assert_eq!(stats.player_name, "Aaron Judge");
        assert_eq!(stats.age, Some(32));
        assert_eq!(stats.line.home_runs, 58);
        assert_eq!(stats.line.batting_average, 180.0 / 559.0);
        assert_eq!(
            api.calls(),
            vec!["person_stats(592450, hitting, 2024)".to_string()]
        );
    }

    #[tokio::test]
    async fn test_player_without_at_bats_has_zero_ratios() {
        let api = RecordingStatsApi::new().with(
            StubQuery::PersonStats(StatGroup::Hitting),
            person_json(543037, "Gerrit Cole", 34, json!({})),
        );
        let stats = player_batting(&api, 543037, Some(2024)).await.unwrap();
        assert_eq!(stats.line.at_bats, 0);
        assert_eq!(stats.line.batting_average, 0.0);
        assert_eq!(stats.line.ops, 0.0);
    }

    #[tokio::test]
    async fn test_player_pitching() {
        let api = RecordingStatsApi::new().with(
            StubQuery::PersonStats(StatGroup::Pitching),
            person_json(
                543037,
                "Gerrit Cole",
                34,
                pitching_stats_json(json!({"outs": 285, "earnedRuns": 33, "strikeOuts": 99,
                    "baseOnBalls": 27, "hits": 79})),
            ),
        );
        let stats = player_pitching(&api, 543037, Some(2024)).await.unwrap();
        assert!((stats.line.innings_pitched - 95.0).abs() < 1e-9);
        assert!((stats.line.era - 9.0 * 33.0 / 95.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_player() {
        let api = RecordingStatsApi::new()
            .with(StubQuery::PersonStats(StatGroup::Pitching), json!({"people": []}));
        let err = player_pitching(&api, 1, Some(2024)).await.unwrap_err();
        assert!(matches!(err, AppError::PlayerNotFound { player_id: 1 }));

        let api = RecordingStatsApi::new();
        let err = player_batting(&api, 1, Some(2024)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_player_team() {
        let api = RecordingStatsApi::new().with(
            StubQuery::PersonCurrentTeam,
            json!({"people": [{"id": 665742, "fullName": "Juan Soto",
                "currentTeam": {"id": 121, "name": "New York Mets"}}]}),
        );
        let affiliation = player_team(&api, 665742).await.unwrap();
        assert_eq!(affiliation.team_id, 121);
        assert_eq!(affiliation.team_name.as_deref(), Some("New York Mets"));
    }
}
