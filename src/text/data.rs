//! Language data loading
//!
//! The stop-word list must be present before the first analysis. When a
//! data directory is configured and the list is missing from it, the list
//! is fetched once (or written from the built-in copy) and cached there.

use crate::config::LanguageConfig;
use crate::scrape::fetch_text;
use crate::text::{LexiconTagger, StopWords};
use crate::{HarvestError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use url::Url;

/// Where the stop-word list for a language lives under a data directory
pub fn stopwords_path(data_dir: &Path, language: &str) -> PathBuf {
    data_dir.join("stopwords").join(language)
}

/// Makes sure the stop-word list is available and loads it
///
/// | data-dir | file present | stopwords-url | Result |
/// |----------|--------------|---------------|--------|
/// | unset | - | - | built-in list |
/// | set | yes | - | file contents |
/// | set | no | set | fetched, cached, loaded |
/// | set | no | unset | built-in list cached, loaded |
///
/// Languages without a built-in list need a data file or a URL.
pub async fn ensure_stopwords(client: &Client, config: &LanguageConfig) -> Result<StopWords> {
    let Some(data_dir) = &config.data_dir else {
        return builtin_stopwords(&config.language);
    };

    let path = stopwords_path(Path::new(data_dir), &config.language);

    if path.exists() {
        let stopwords = non_empty(
            StopWords::parse(&std::fs::read_to_string(&path)?),
            &path.display().to_string(),
        )?;
        tracing::debug!("Loaded {} stop words from {}", stopwords.len(), path.display());
        return Ok(stopwords);
    }

    tracing::info!(
        "Stop-word list for '{}' not found at {}",
        config.language,
        path.display()
    );

    let stopwords = match &config.stopwords_url {
        Some(raw_url) => {
            let url = Url::parse(raw_url)?;
            tracing::info!("Downloading stop words from {}", url);
            let content = fetch_text(client, &url).await?;
            non_empty(StopWords::parse(&content), url.as_str())?
        }
        None => builtin_stopwords(&config.language)?,
    };

    write_cache_file(&path, &stopwords.to_file_contents())?;
    tracing::info!("Stop words saved to {}", path.display());

    Ok(stopwords)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

fn non_empty(stopwords: StopWords, source: &str) -> Result<StopWords> {
    if stopwords.is_empty() {
        return Err(HarvestError::LanguageData(format!(
            "stop-word list from {} is empty",
            source
        )));
    }
    Ok(stopwords)
}

/// Writes next to the target and renames into place, so a failed write
/// never leaves a partial list behind
fn write_cache_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let partial = partial_path(path);
    std::fs::write(&partial, content)?;
    std::fs::rename(&partial, path)?;
    Ok(())
}

/// Builds the part-of-speech tagger, including any configured lexicon file
pub fn load_tagger(config: &LanguageConfig) -> Result<LexiconTagger> {
    let tagger = LexiconTagger::new();
    match &config.lexicon_path {
        Some(path) => {
            let tagger = tagger.with_lexicon_file(Path::new(path))?;
            tracing::debug!("Tagger lexicon has {} entries", tagger.lexicon_len());
            Ok(tagger)
        }
        None => Ok(tagger),
    }
}

fn builtin_stopwords(language: &str) -> Result<StopWords> {
    StopWords::builtin(language).ok_or_else(|| {
        HarvestError::LanguageData(format!(
            "no built-in stop-word list for '{}'; configure data-dir and stopwords-url",
            language
        ))
    })
}
