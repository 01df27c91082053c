use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Configuration commands run once and exit without starting the server.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || args.save_config
}

/// MLB Stats MCP Server
///
/// Serves Major League Baseball statistics from the public MLB Stats API over
/// two surfaces: plain HTTP GET endpoints under /mlb/ and a Model Context
/// Protocol tool server streamed over SSE at /mcp/sse.
///
/// Seasons are optional everywhere and default to the current year.
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Host address to listen on. Overrides config file and environment.
    #[arg(long = "host", help_heading = "Server")]
    pub host: Option<String>,

    /// Port to listen on. Overrides config file and environment.
    #[arg(long = "port", short = 'p', help_heading = "Server")]
    pub port: Option<u16>,

    /// Base URL of the upstream statistics API, e.g. https://statsapi.mlb.com/api/v1
    #[arg(long = "api-domain", help_heading = "Server", value_name = "URL")]
    pub api_domain: Option<String>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective configuration (including command-line overrides)
    /// to the config file and exit.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Enable debug level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(api_domain) = &self.api_domain {
            config.api_domain = api_domain.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
