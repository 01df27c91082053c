use serde::{Deserialize, Serialize};

/// Response of `teams/{id}/roster`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterSlot {
    pub person: RosterPerson,
    #[serde(default)]
    pub position: Option<Position>,
}

/// Person as hydrated on a roster slot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterPerson {
    pub id: u64,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "currentAge", default)]
    pub current_age: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Position {
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Position {
    /// Abbreviation when present, otherwise the full position name.
    pub fn label(&self) -> Option<String> {
        self.abbreviation.clone().or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_roster_slot() {
        let response: RosterResponse = serde_json::from_value(json!({
            "roster": [
                {
                    "person": {"id": 592450, "fullName": "Aaron Judge", "currentAge": 32},
                    "jerseyNumber": "99",
                    "position": {"code": "9", "name": "Outfielder", "abbreviation": "RF"}
                },
                {"person": {"id": 1, "fullName": "No Position"}}
            ],
            "teamId": 147,
            "rosterType": "40Man"
        }))
        .unwrap();
        assert_eq!(response.roster.len(), 2);
        let judge = &response.roster[0];
        assert_eq!(judge.person.current_age, Some(32));
        assert_eq!(judge.position.as_ref().and_then(Position::label).as_deref(), Some("RF"));
        assert!(response.roster[1].position.is_none());
    }

    #[test]
    fn test_missing_roster_defaults_to_empty() {
        let response: RosterResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.roster.is_empty());
    }
}
