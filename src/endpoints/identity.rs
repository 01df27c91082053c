use tracing::info;

use super::records::IdentifierLookup;
use super::season::current_year;
use crate::data_fetcher::StatsApi;
use crate::error::AppError;
use crate::lookup::{resolve_player_id, resolve_team_id};

/// Player identifiers matching a name. An unknown name is an empty lookup.
pub async fn player_id_lookup(
    api: &dyn StatsApi,
    player_name: &str,
) -> Result<IdentifierLookup, AppError> {
    info!("Looking up player id for '{}'", player_name);
    let matches = resolve_player_id(api, player_name).await?;
    Ok(IdentifierLookup::new(player_name.to_string(), matches))
}

/// Team identifiers matching a name among this season's clubs.
pub async fn team_id_lookup(
    api: &dyn StatsApi,
    team_name: &str,
) -> Result<IdentifierLookup, AppError> {
    info!("Looking up team id for '{}'", team_name);
    let matches = resolve_team_id(api, team_name, current_year()).await?;
    Ok(IdentifierLookup::new(team_name.to_string(), matches))
}
