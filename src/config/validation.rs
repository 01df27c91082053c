use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Host cannot be empty and port cannot be zero
/// - API domain cannot be empty and must parse as a URL, with `https://` assumed
///   when no scheme is given
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Timeouts must be at least one second
pub fn validate_config(
    host: &str,
    port: u16,
    api_domain: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    session_idle_timeout_seconds: u64,
) -> Result<(), AppError> {
    if host.trim().is_empty() {
        return Err(AppError::config_error("Host cannot be empty"));
    }

    if port == 0 {
        return Err(AppError::config_error("Port must be between 1 and 65535"));
    }

    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    // Check if API domain looks like a valid URL or domain
    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    let base_url = if api_domain.starts_with("http://") || api_domain.starts_with("https://") {
        api_domain.to_string()
    } else {
        format!("https://{api_domain}")
    };
    reqwest::Url::parse(&base_url).map_err(|e| {
        AppError::config_error(format!("API domain '{api_domain}' is not a valid URL: {e}"))
    })?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if session_idle_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "Session idle timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
