//! Registry of the operations exposed on both transport surfaces.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use super::params::OperationParams;
use super::{identity, player, standings, team};
use crate::data_fetcher::StatsApi;
use crate::error::AppError;

/// Every operation the server offers, with its HTTP path and tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Standings,
    TeamBatting,
    TeamPitching,
    Roster,
    PlayerBatting,
    PlayerPitching,
    PlayerIdLookup,
    TeamIdLookup,
    PlayerTeam,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Standings,
        Operation::TeamBatting,
        Operation::TeamPitching,
        Operation::Roster,
        Operation::PlayerBatting,
        Operation::PlayerPitching,
        Operation::PlayerIdLookup,
        Operation::TeamIdLookup,
        Operation::PlayerTeam,
    ];

    /// Name of the tool on the streaming surface.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Operation::Standings => "get_mlb_standings",
            Operation::TeamBatting => "get_team_batting",
            Operation::TeamPitching => "get_team_pitching",
            Operation::Roster => "get_mlb_roster",
            Operation::PlayerBatting => "get_player_batting",
            Operation::PlayerPitching => "get_player_pitching",
            Operation::PlayerIdLookup => "lookup_player",
            Operation::TeamIdLookup => "lookup_team",
            Operation::PlayerTeam => "get_player_team",
        }
    }

    /// Route on the conventional surface.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Standings => "/mlb/standings",
            Operation::TeamBatting => "/mlb/teambatting",
            Operation::TeamPitching => "/mlb/teampitching",
            Operation::Roster => "/mlb/roster",
            Operation::PlayerBatting => "/mlb/playerbatting",
            Operation::PlayerPitching => "/mlb/playerpitching",
            Operation::PlayerIdLookup => "/mlb/playerid",
            Operation::TeamIdLookup => "/mlb/teamid",
            Operation::PlayerTeam => "/mlb/playerteam",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Standings => {
                "Regular season MLB standings for a season: wins, losses, runs scored and \
                 allowed, and Pythagorean expectation for every team. The season defaults to \
                 the current year when omitted, in the future, or before 1877."
            }
            Operation::TeamBatting => {
                "Season batting totals for a team with batting average, on-base percentage, \
                 slugging and OPS. Use lookup_team to find a team_id."
            }
            Operation::TeamPitching => {
                "Season pitching totals for a team with ERA, WHIP, strikeout and walk rates. \
                 Use lookup_team to find a team_id."
            }
            Operation::Roster => {
                "The 40-man roster of a team for a season: player ids, names, ages and positions."
            }
            Operation::PlayerBatting => {
                "Season batting line for a player with batting average, on-base percentage, \
                 slugging and OPS. Use lookup_player to find a player_id."
            }
            Operation::PlayerPitching => {
                "Season pitching line for a player with ERA, WHIP and per-nine rates. \
                 Use lookup_player to find a player_id."
            }
            Operation::PlayerIdLookup => {
                "Find player ids by name. Returns every match; several players can share a name."
            }
            Operation::TeamIdLookup => {
                "Find team ids by full name, club name, city or abbreviation."
            }
            Operation::PlayerTeam => "The team a player currently belongs to.",
        }
    }

    /// JSON Schema of the tool arguments.
    pub fn input_schema(&self) -> Value {
        let season = json!({
            "type": "integer",
            "description": "Season year. Defaults to the current year."
        });
        let team_id = json!({
            "type": "integer",
            "minimum": 1,
            "description": "MLB team id, e.g. 147 for the New York Yankees."
        });
        let player_id = json!({
            "type": "integer",
            "minimum": 1,
            "description": "MLB player id, e.g. 592450 for Aaron Judge."
        });

        match self {
            Operation::Standings => json!({
                "type": "object",
                "properties": {"season": season}
            }),
            Operation::TeamBatting | Operation::TeamPitching | Operation::Roster => json!({
                "type": "object",
                "properties": {"team_id": team_id, "season": season},
                "required": ["team_id"]
            }),
            Operation::PlayerBatting | Operation::PlayerPitching => json!({
                "type": "object",
                "properties": {"player_id": player_id, "season": season},
                "required": ["player_id"]
            }),
            Operation::PlayerIdLookup => json!({
                "type": "object",
                "properties": {
                    "player_name": {"type": "string", "minLength": 1, "description": "Full or partial player name."}
                },
                "required": ["player_name"]
            }),
            Operation::TeamIdLookup => json!({
                "type": "object",
                "properties": {
                    "team_name": {"type": "string", "minLength": 1, "description": "Full or partial team name."}
                },
                "required": ["team_name"]
            }),
            Operation::PlayerTeam => json!({
                "type": "object",
                "properties": {"player_id": player_id},
                "required": ["player_id"]
            }),
        }
    }

    pub fn from_tool_name(name: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.tool_name() == name)
    }

    /// Validates the parameters, runs the operation and returns its record
    /// as JSON. Parameter errors are raised before any upstream call.
    pub async fn invoke(
        &self,
        api: &dyn StatsApi,
        params: &OperationParams,
    ) -> Result<Value, AppError> {
        let result = self.dispatch(api, params).await;
        if let Err(e) = &result {
            warn!("{} failed: {}", self.tool_name(), e);
        }
        result
    }

    async fn dispatch(&self, api: &dyn StatsApi, params: &OperationParams) -> Result<Value, AppError> {
        match self {
            Operation::Standings => {
                let season = params.optional_season("season")?;
                to_json(standings::standings(api, season).await?)
            }
            Operation::TeamBatting => {
                let team_id = params.required_id("team_id")?;
                let season = params.optional_season("season")?;
                to_json(team::team_batting(api, team_id, season).await?)
            }
            Operation::TeamPitching => {
                let team_id = params.required_id("team_id")?;
                let season = params.optional_season("season")?;
                to_json(team::team_pitching(api, team_id, season).await?)
            }
            Operation::Roster => {
                let team_id = params.required_id("team_id")?;
                let season = params.optional_season("season")?;
                to_json(team::roster(api, team_id, season).await?)
            }
            Operation::PlayerBatting => {
                let player_id = params.required_id("player_id")?;
                let season = params.optional_season("season")?;
                to_json(player::player_batting(api, player_id, season).await?)
            }
            Operation::PlayerPitching => {
                let player_id = params.required_id("player_id")?;
                let season = params.optional_season("season")?;
                to_json(player::player_pitching(api, player_id, season).await?)
            }
            Operation::PlayerIdLookup => {
                let name = params.required_name("player_name")?;
                to_json(identity::player_id_lookup(api, &name).await?)
            }
            Operation::TeamIdLookup => {
                let name = params.required_name("team_name")?;
                to_json(identity::team_id_lookup(api, &name).await?)
            }
            Operation::PlayerTeam => {
                let player_id = params.required_id("player_id")?;
                to_json(player::player_team(api, player_id).await?)
            }
        }
    }
}

fn to_json<T: Serialize>(record: T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(record)?)
}
