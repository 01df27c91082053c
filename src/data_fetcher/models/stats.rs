use serde::{Deserialize, Serialize};

/// Statistic group requested from the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => crate::constants::upstream::HITTING_GROUP,
            StatGroup::Pitching => crate::constants::upstream::PITCHING_GROUP,
        }
    }
}

/// Response of `teams/{id}/stats` and the `stats` hydration on people.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

/// One block per requested group and type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatBlock {
    #[serde(default)]
    pub group: Option<DisplayName>,
    #[serde(rename = "type", default)]
    pub stat_type: Option<DisplayName>,
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayName {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// A single season split. The `stat` payload is kept raw and parsed into a
/// batting or pitching line by the caller, which knows the group it asked for.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatSplit {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub stat: serde_json::Value,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

/// Minimal team reference embedded in many upstream payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl StatsResponse {
    /// First split of the block matching `group`, or of the first block when
    /// the upstream omits group labels.
    pub fn first_split(&self, group: StatGroup) -> Option<&StatSplit> {
        let labelled = self.stats.iter().find(|block| {
            block
                .group
                .as_ref()
                .is_some_and(|g| g.display_name.eq_ignore_ascii_case(group.as_str()))
        });
        labelled
            .or_else(|| self.stats.iter().find(|block| block.group.is_none()))
            .and_then(|block| block.splits.first())
    }
}

/// Raw counting statistics of a hitting split. Every count defaults to zero;
/// upstream rate strings such as `avg` and `ops` are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BattingCounts {
    pub games_played: u32,
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub base_on_balls: u32,
    pub intentional_walks: u32,
    pub strike_outs: u32,
    pub hit_by_pitch: u32,
    pub sac_flies: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
}

/// Raw counting statistics of a pitching split.
///
/// `innings_pitched` arrives in baseball thirds notation ("123.2"); `outs`
/// is preferred when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PitchingCounts {
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub blown_saves: u32,
    pub games_played: u32,
    pub games_pitched: u32,
    pub games_started: u32,
    pub innings_pitched: Option<String>,
    pub outs: Option<u32>,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub home_runs: u32,
    pub base_on_balls: u32,
    pub intentional_walks: u32,
    pub strike_outs: u32,
    pub hit_by_pitch: u32,
    pub at_bats: u32,
    pub sac_flies: u32,
    pub batters_faced: u32,
    pub ground_outs: u32,
    pub air_outs: u32,
    pub number_of_pitches: u32,
    pub strikes: u32,
}

impl PitchingCounts {
    /// Appearances, taken from `gamesPitched` when the upstream reports it.
    pub fn games(&self) -> u32 {
        if self.games_pitched > 0 {
            self.games_pitched
        } else {
            self.games_played
        }
    }
}
