use serde::{Deserialize, Serialize};

/// Response of `teams?sportId=1`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Team {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(rename = "locationName", default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl Team {
    /// Every name form the team is known by, full name first.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(
            [
                &self.team_name,
                &self.short_name,
                &self.location_name,
                &self.abbreviation,
            ]
            .into_iter()
            .filter_map(|alias| alias.as_deref()),
        )
    }
}
