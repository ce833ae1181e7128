use crate::config::types::{
    Config, ExtractionConfig, FetchConfig, LanguageConfig, OutputConfig, TargetConfig,
};
use crate::{ConfigError, ConfigResult};
use regex::Regex;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_target_config(&config.target)?;
    validate_fetch_config(&config.fetch)?;
    validate_extraction_config(&config.extraction)?;
    validate_language_config(&config.language)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target page and domain filter
fn validate_target_config(config: &TargetConfig) -> ConfigResult<()> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid target url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Target url '{}' must use http or https",
            config.url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Target url '{}' has no host",
            config.url
        )));
    }

    if let Some(filter) = &config.domain_filter {
        if filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "domain-filter cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates user agent and timeout settings
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.user_agent_name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent-name cannot be empty".to_string(),
        ));
    }

    if !config
        .user_agent_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent-name must contain only alphanumeric characters, '-' and '_', got '{}'",
            config.user_agent_name
        )));
    }

    if config.user_agent_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates that both extraction patterns compile
fn validate_extraction_config(config: &ExtractionConfig) -> ConfigResult<()> {
    validate_pattern("phone-pattern", &config.phone_pattern)?;
    validate_pattern("zip-pattern", &config.zip_pattern)?;
    Ok(())
}

fn validate_pattern(name: &str, pattern: &str) -> ConfigResult<()> {
    if pattern.is_empty() {
        return Err(ConfigError::InvalidPattern(format!("{} cannot be empty", name)));
    }

    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", name, e)))
}

/// Validates language data settings
fn validate_language_config(config: &LanguageConfig) -> ConfigResult<()> {
    if config.language.trim().is_empty() {
        return Err(ConfigError::Validation("language cannot be empty".to_string()));
    }

    // The language name becomes a file name under the data directory
    if config.language.contains(['/', '\\']) || config.language.contains("..") {
        return Err(ConfigError::Validation(format!(
            "language '{}' must be a plain name",
            config.language
        )));
    }

    if let Some(url) = &config.stopwords_url {
        Url::parse(url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid stopwords-url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.image_dir.is_empty() {
        return Err(ConfigError::Validation("image-dir cannot be empty".to_string()));
    }

    if config.report_dir.is_empty() {
        return Err(ConfigError::Validation(
            "report-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
