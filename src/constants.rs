//! Application-wide constants and configuration defaults
//!
//! This module centralizes magic numbers, upstream identifiers and default
//! settings so they are not scattered across the fetcher and server code.

/// Default listening host for both transport surfaces
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listening port for both transport surfaces
pub const DEFAULT_PORT: u16 = 8080;

/// Base URL of the MLB Stats API, including the version segment
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.mlb.com/api/v1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Default time a streaming session may stay silent before it is closed
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS: u64 = 300;

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "mlb_stats_mcp.log";

/// Upstream identifiers of the MLB Stats API
pub mod upstream {
    /// American League
    pub const AMERICAN_LEAGUE_ID: u32 = 103;

    /// National League
    pub const NATIONAL_LEAGUE_ID: u32 = 104;

    /// Sport identifier for Major League Baseball
    pub const MLB_SPORT_ID: u32 = 1;

    /// Roster type used for roster lookups
    pub const ROSTER_TYPE: &str = "40Man";

    /// Stat group name for batting statistics
    pub const HITTING_GROUP: &str = "hitting";

    /// Stat group name for pitching statistics
    pub const PITCHING_GROUP: &str = "pitching";
}

/// Season resolution bounds
pub mod season {
    /// First season of organized major league play; seasons at or before this
    /// year fall back to the current season
    pub const FIRST_SEASON: i32 = 1876;
}

/// Environment variable names for configuration overrides
pub mod env_vars {
    /// Override listening host
    pub const HOST: &str = "MLB_MCP_HOST";

    /// Override listening port
    pub const PORT: &str = "MLB_MCP_PORT";

    /// Override upstream API base URL
    pub const API_DOMAIN: &str = "MLB_STATS_API_DOMAIN";

    /// Override log file path
    pub const LOG_FILE: &str = "MLB_MCP_LOG_FILE";

    /// Override HTTP timeout (seconds)
    pub const HTTP_TIMEOUT: &str = "MLB_MCP_HTTP_TIMEOUT";

    /// Override streaming session idle timeout (seconds)
    pub const SESSION_IDLE_TIMEOUT: &str = "MLB_MCP_SESSION_IDLE_TIMEOUT";
}

/// Model Context Protocol constants for the streaming surface
pub mod mcp {
    /// Protocol revision announced during `initialize`
    pub const PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name announced during `initialize`
    pub const SERVER_NAME: &str = "mlb-stats-mcp";

    /// Interval between SSE keep-alive comments
    pub const KEEP_ALIVE_SECONDS: u64 = 15;

    /// Buffered outbound messages per session
    pub const SESSION_CHANNEL_CAPACITY: usize = 64;

    /// Route that opens a session stream
    pub const SSE_PATH: &str = "/mcp/sse";

    /// Route that receives client messages for a session
    pub const MESSAGES_PATH: &str = "/mcp/messages";
}
