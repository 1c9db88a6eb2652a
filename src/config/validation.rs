use crate::config::types::{Config, ScanConfig, ScrapeConfig, UserAgentConfig};
use crate::ConfigError;
use std::time::Duration;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scan_config(&config.scan)?;
    validate_scrape_config(&config.scrape)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates discovery settings
fn validate_scan_config(config: &ScanConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.crawl_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "crawl_timeout_secs must be > 0".to_string(),
        ));
    }

    if config.sitemap_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "sitemap_timeout_secs must be > 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates scrape settings
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    validate_delay(config.delay_secs)?;

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be > 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates a politeness delay, also used for the `--delay` override
///
/// Returns the delay as a `Duration`; values too large to represent are
/// rejected here rather than at sleep time.
pub fn validate_delay(delay_secs: f64) -> Result<Duration, ConfigError> {
    if !delay_secs.is_finite() || delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            delay_secs
        )));
    }
    Duration::try_from_secs_f64(delay_secs).map_err(|e| {
        ConfigError::Validation(format!(
            "delay of {} seconds is out of range: {}",
            delay_secs, e
        ))
    })
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}
