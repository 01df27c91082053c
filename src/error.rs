use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Request validation
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    // Lookups that reached the upstream service but matched nothing
    #[error("No {group} statistics found for team {team_id} in season {season}")]
    TeamStatsNotFound {
        team_id: u64,
        group: String,
        season: i32,
    },

    #[error("Player not found: player_id={player_id}")]
    PlayerNotFound { player_id: u64 },

    #[error("No roster found for team {team_id} in season {season}")]
    RosterNotFound { team_id: u64, season: i32 },

    #[error("Player {player_id} has no current team")]
    NoCurrentTeam { player_id: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

/// Machine-readable classification reported to callers on both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing, mistyped or empty request parameter. Caller fault.
    InvalidParameter,
    /// Well-formed identifier or name with no upstream record.
    NotFound,
    /// Upstream unreachable or answered with an error or unusable body.
    UpstreamUnavailable,
    /// Start-up and local failures; operations never produce this kind.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidParameter => "invalid_parameter",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::Internal => "internal",
        }
    }
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid parameter error for the named request parameter
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a team statistics not found error
    pub fn team_stats_not_found(team_id: u64, group: impl Into<String>, season: i32) -> Self {
        Self::TeamStatsNotFound {
            team_id,
            group: group.into(),
            season,
        }
    }

    /// Create a player not found error
    pub fn player_not_found(player_id: u64) -> Self {
        Self::PlayerNotFound { player_id }
    }

    /// Create a roster not found error
    pub fn roster_not_found(team_id: u64, season: i32) -> Self {
        Self::RosterNotFound { team_id, season }
    }

    /// Create a no current team error
    pub fn no_current_team(player_id: u64) -> Self {
        Self::NoCurrentTeam { player_id }
    }

    /// Classify the error for callers of either transport surface
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            AppError::ApiNotFound { .. }
            | AppError::TeamStatsNotFound { .. }
            | AppError::PlayerNotFound { .. }
            | AppError::RosterNotFound { .. }
            | AppError::NoCurrentTeam { .. } => ErrorKind::NotFound,
            AppError::ApiFetch(_)
            | AppError::ApiParse(_)
            | AppError::ApiServerError { .. }
            | AppError::ApiClientError { .. }
            | AppError::ApiRateLimit { .. }
            | AppError::ApiServiceUnavailable { .. }
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. }
            | AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. } => ErrorKind::UpstreamUnavailable,
            AppError::Io(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::Config(_)
            | AppError::LogSetup(_) => ErrorKind::Internal,
        }
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if error was raised by request validation before any upstream call
    pub fn is_invalid_parameter(&self) -> bool {
        self.kind() == ErrorKind::InvalidParameter
    }
}
