//! Response records returned by every operation on both surfaces.

use serde::Serialize;

use crate::data_fetcher::models::{BattingCounts, PitchingCounts};
use crate::stats::calculator;

pub use crate::lookup::{NameMatch, PlayerTeamAffiliation};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Standings {
    pub season: i32,
    pub teams: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamRecord {
    pub team_id: u64,
    pub team_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub pythagorean_expectation: f64,
    pub pythagorean_wins: u32,
    pub pythagorean_losses: u32,
}

/// Counting stats and derived ratios of a batting season.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct BattingLine {
    pub games: u32,
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub walks: u32,
    pub intentional_walks: u32,
    pub strikeouts: u32,
    pub hit_by_pitch: u32,
    pub sac_flies: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
}

impl From<&BattingCounts> for BattingLine {
    fn from(c: &BattingCounts) -> Self {
        let obp = calculator::on_base_percentage(
            c.hits,
            c.base_on_balls,
            c.hit_by_pitch,
            c.at_bats,
            c.sac_flies,
        );
        let total_bases = calculator::total_bases(c.hits, c.doubles, c.triples, c.home_runs);
        let slg = calculator::slugging_percentage(total_bases, c.at_bats);
        BattingLine {
            games: c.games_played,
            plate_appearances: c.plate_appearances,
            at_bats: c.at_bats,
            runs: c.runs,
            hits: c.hits,
            doubles: c.doubles,
            triples: c.triples,
            home_runs: c.home_runs,
            rbi: c.rbi,
            walks: c.base_on_balls,
            intentional_walks: c.intentional_walks,
            strikeouts: c.strike_outs,
            hit_by_pitch: c.hit_by_pitch,
            sac_flies: c.sac_flies,
            stolen_bases: c.stolen_bases,
            caught_stealing: c.caught_stealing,
            ground_outs: c.ground_outs,
            air_outs: c.air_outs,
            batting_average: calculator::batting_average(c.hits, c.at_bats),
            on_base_percentage: obp,
            slugging_percentage: slg,
            ops: calculator::ops(obp, slg),
        }
    }
}

/// Counting stats and derived ratios of a pitching season. Batting ratios
/// here are those of opposing hitters.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PitchingLine {
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub blown_saves: u32,
    pub games: u32,
    pub games_started: u32,
    pub innings_pitched: f64,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub intentional_walks: u32,
    pub strikeouts: u32,
    pub hit_by_pitch: u32,
    pub batters_faced: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
    pub pitches: u32,
    pub strikes: u32,
    pub era: f64,
    pub whip: f64,
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
    pub strike_percentage: f64,
    pub strikeout_walk_ratio: f64,
    pub strikeouts_per_9: f64,
    pub walks_per_9: f64,
    pub hits_per_9: f64,
    pub home_runs_per_9: f64,
}

impl From<&PitchingCounts> for PitchingLine {
    fn from(c: &PitchingCounts) -> Self {
        let innings = match (c.outs, c.innings_pitched.as_deref()) {
            (Some(outs), _) => calculator::innings_from_outs(outs),
            (None, Some(text)) => calculator::parse_innings_pitched(text),
            (None, None) => 0.0,
        };
        let obp = calculator::on_base_percentage(
            c.hits,
            c.base_on_balls,
            c.hit_by_pitch,
            c.at_bats,
            c.sac_flies,
        );
        let total_bases = calculator::total_bases(c.hits, c.doubles, c.triples, c.home_runs);
        let slg = calculator::slugging_percentage(total_bases, c.at_bats);
        PitchingLine {
            wins: c.wins,
            losses: c.losses,
            saves: c.saves,
            blown_saves: c.blown_saves,
            games: c.games(),
            games_started: c.games_started,
            innings_pitched: innings,
            hits: c.hits,
            runs: c.runs,
            earned_runs: c.earned_runs,
            home_runs: c.home_runs,
            walks: c.base_on_balls,
            intentional_walks: c.intentional_walks,
            strikeouts: c.strike_outs,
            hit_by_pitch: c.hit_by_pitch,
            batters_faced: c.batters_faced,
            ground_outs: c.ground_outs,
            air_outs: c.air_outs,
            pitches: c.number_of_pitches,
            strikes: c.strikes,
            era: calculator::era(c.earned_runs, innings),
            whip: calculator::whip(c.base_on_balls, c.hits, innings),
            batting_average: calculator::batting_average(c.hits, c.at_bats),
            on_base_percentage: obp,
            slugging_percentage: slg,
            ops: calculator::ops(obp, slg),
            strike_percentage: calculator::strike_percentage(c.strikes, c.number_of_pitches),
            strikeout_walk_ratio: calculator::strikeout_walk_ratio(c.strike_outs, c.base_on_balls),
            strikeouts_per_9: calculator::per_nine(c.strike_outs, innings),
            walks_per_9: calculator::per_nine(c.base_on_balls, innings),
            hits_per_9: calculator::per_nine(c.hits, innings),
            home_runs_per_9: calculator::per_nine(c.home_runs, innings),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamBattingStats {
    pub team_id: u64,
    pub team_name: Option<String>,
    pub season: i32,
    #[serde(flatten)]
    pub line: BattingLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamPitchingStats {
    pub team_id: u64,
    pub team_name: Option<String>,
    pub season: i32,
    #[serde(flatten)]
    pub line: PitchingLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerBattingStats {
    pub player_id: u64,
    pub player_name: String,
    pub age: Option<u32>,
    pub season: i32,
    #[serde(flatten)]
    pub line: BattingLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerPitchingStats {
    pub player_id: u64,
    pub player_name: String,
    pub age: Option<u32>,
    pub season: i32,
    #[serde(flatten)]
    pub line: PitchingLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Roster {
    pub team_id: u64,
    pub season: i32,
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RosterEntry {
    pub player_id: u64,
    pub player_name: String,
    pub age: Option<u32>,
    pub position: Option<String>,
}

/// Result of a name lookup; zero, one or several matches are all valid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IdentifierLookup {
    pub query: String,
    pub ids: Vec<u64>,
    pub matches: Vec<NameMatch>,
}

impl IdentifierLookup {
    pub fn new(query: String, matches: Vec<NameMatch>) -> Self {
        Self {
            query,
            ids: matches.iter().map(|m| m.id).collect(),
            matches,
        }
    }
}
