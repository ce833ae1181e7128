use serde::Deserialize;

/// Target page fetched when no configuration file is given
pub const DEFAULT_TARGET_URL: &str = "https://casl.website";

/// Default phone number pattern: `(###)###-####` with optional parens, dashes and spaces
pub const DEFAULT_PHONE_PATTERN: &str = r"\(?\d{3}\)?-? *\d{3}-? *-?\d{4}";

/// Default US zip code pattern: five digits with an optional +4 suffix
pub const DEFAULT_ZIP_PATTERN: &str = r"\b\d{5}(?:-\d{4})?\b";

/// Main configuration structure for Site-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The page to harvest and the filter applied to its links
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// URL of the page to fetch
    #[serde(default = "default_target_url")]
    pub url: String,

    /// Substring a resolved page link must contain to be kept.
    /// Defaults to the host of `url`.
    #[serde(rename = "domain-filter", default)]
    pub domain_filter: Option<String>,
}

/// HTTP client identification and limits
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(rename = "user-agent-name", default = "default_agent_name")]
    pub user_agent_name: String,

    #[serde(rename = "user-agent-version", default = "default_agent_version")]
    pub user_agent_version: String,

    /// URL with information about the harvester, appended to the user agent
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,

    /// Per-request timeout in seconds. Unset means the client default.
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,
}

/// Regular expressions applied to the page text
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    #[serde(rename = "phone-pattern", default = "default_phone_pattern")]
    pub phone_pattern: String,

    #[serde(rename = "zip-pattern", default = "default_zip_pattern")]
    pub zip_pattern: String,
}

/// Stop-word language and where its data lives
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory holding `stopwords/<language>` files
    #[serde(rename = "data-dir", default)]
    pub data_dir: Option<String>,

    /// Where to fetch the stop-word list from when it is missing on disk
    #[serde(rename = "stopwords-url", default)]
    pub stopwords_url: Option<String>,

    /// Extra `word<TAB>TAG` entries for the part-of-speech tagger
    #[serde(rename = "lexicon-path", default)]
    pub lexicon_path: Option<String>,
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory downloaded images are written to
    #[serde(rename = "image-dir", default = "default_image_dir")]
    pub image_dir: String,

    /// Directory the timestamped report is written to
    #[serde(rename = "report-dir", default = "default_report_dir")]
    pub report_dir: String,
}

impl TargetConfig {
    /// Returns the configured domain filter, falling back to the target's host
    pub fn effective_domain_filter(&self) -> Option<String> {
        match &self.domain_filter {
            Some(filter) => Some(filter.clone()),
            None => url::Url::parse(&self.url)
                .ok()
                .and_then(|u| crate::url::extract_domain(&u)),
        }
    }
}

impl FetchConfig {
    /// Formats the user agent string: `Name/Version (+ContactURL)`
    pub fn user_agent(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.user_agent_name, self.user_agent_version, contact
            ),
            None => format!("{}/{}", self.user_agent_name, self.user_agent_version),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: default_target_url(),
            domain_filter: None,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent_name: default_agent_name(),
            user_agent_version: default_agent_version(),
            contact_url: None,
            timeout_secs: None,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            phone_pattern: default_phone_pattern(),
            zip_pattern: default_zip_pattern(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            data_dir: None,
            stopwords_url: None,
            lexicon_path: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            report_dir: default_report_dir(),
        }
    }
}

fn default_target_url() -> String {
    DEFAULT_TARGET_URL.to_string()
}

fn default_agent_name() -> String {
    "site-harvest".to_string()
}

fn default_agent_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_phone_pattern() -> String {
    DEFAULT_PHONE_PATTERN.to_string()
}

fn default_zip_pattern() -> String {
    DEFAULT_ZIP_PATTERN.to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_image_dir() -> String {
    "images".to_string()
}

fn default_report_dir() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let config = Config::default();
        assert_eq!(config.target.url, "https://casl.website");
        assert_eq!(config.output.image_dir, "images");
        assert_eq!(config.language.language, "english");
        assert_eq!(config.extraction.zip_pattern, DEFAULT_ZIP_PATTERN);
    }

    #[test]
    fn test_domain_filter_defaults_to_host() {
        let target = TargetConfig {
            url: "https://WWW.Example.com/about".to_string(),
            domain_filter: None,
        };
        assert_eq!(
            target.effective_domain_filter(),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn test_explicit_domain_filter_wins() {
        let target = TargetConfig {
            url: "https://example.com/".to_string(),
            domain_filter: Some("example".to_string()),
        };
        assert_eq!(target.effective_domain_filter(), Some("example".to_string()));
    }

    #[test]
    fn test_user_agent_format() {
        let mut fetch = FetchConfig::default();
        fetch.user_agent_name = "Harvester".to_string();
        fetch.user_agent_version = "1.0".to_string();
        assert_eq!(fetch.user_agent(), "Harvester/1.0");

        fetch.contact_url = Some("https://example.com/about".to_string());
        assert_eq!(fetch.user_agent(), "Harvester/1.0 (+https://example.com/about)");
    }
}
