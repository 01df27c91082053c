use super::stats::TeamRef;
use serde::{Deserialize, Serialize};

/// Response of the `standings` endpoint: one record per division.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StandingsResponse {
    #[serde(default)]
    pub records: Vec<DivisionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DivisionRecord {
    #[serde(rename = "teamRecords", default)]
    pub team_records: Vec<StandingsTeamRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StandingsTeamRecord {
    pub team: TeamRef,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: Option<u32>,
    #[serde(rename = "runsScored", default)]
    pub runs_scored: u32,
    #[serde(rename = "runsAllowed", default)]
    pub runs_allowed: u32,
}

impl StandingsTeamRecord {
    /// Games played, derived from the decision count when absent.
    pub fn games(&self) -> u32 {
        self.games_played
            .unwrap_or_else(|| self.wins.saturating_add(self.losses))
    }
}

impl StandingsResponse {
    /// Every team record in upstream order (league, then division).
    pub fn team_records(&self) -> impl Iterator<Item = &StandingsTeamRecord> {
        self.records.iter().flat_map(|r| r.team_records.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_standings_and_flatten_in_order() {
        let response: StandingsResponse = serde_json::from_value(json!({
            "records": [
                {
                    "standingsType": "regularSeason",
                    "league": {"id": 103},
                    "division": {"id": 201},
                    "teamRecords": [
                        {"team": {"id": 110, "name": "Baltimore Orioles"}, "wins": 91, "losses": 71,
                         "gamesPlayed": 162, "runsScored": 786, "runsAllowed": 699},
                        {"team": {"id": 147, "name": "New York Yankees"}, "wins": 94, "losses": 68,
                         "runsScored": 815, "runsAllowed": 668}
                    ]
                },
                {
                    "league": {"id": 104},
                    "teamRecords": [
                        {"team": {"id": 143, "name": "Philadelphia Phillies"}, "wins": 95, "losses": 67}
                    ]
                }
            ]
        }))
        .unwrap();

        let ids: Vec<u64> = response.team_records().map(|t| t.team.id).collect();
        assert_eq!(ids, vec![110, 147, 143]);

        let yankees = response.team_records().nth(1).unwrap();
        assert_eq!(yankees.games(), 162);
        let phillies = response.team_records().nth(2).unwrap();
        assert_eq!(phillies.runs_scored, 0);
        assert_eq!(phillies.games(), 162);
    }

    #[test]
    fn test_games_from_huge_decision_counts() {
        let record: StandingsTeamRecord = serde_json::from_value(json!({
            "team": {"id": 1}, "wins": u32::MAX, "losses": 5
        }))
        .unwrap();
        assert_eq!(record.games(), u32::MAX);
    }
}
