//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge defaults + `config.toml` + `config.<env>.toml` + `APP_*`
//! env vars (`__` separates nested keys, e.g. `APP_VOCABULARY__PATH`).
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against the directory of the loaded config file.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Layered configuration: defaults, `config.toml`, `config.<env>.toml`, `APP_*` env vars.
pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load with `path` as the base file. The environment overlay is looked up
    /// next to it and relative paths in the settings resolve against its directory.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file(path));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(path.with_file_name("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(path.with_file_name("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(path.with_file_name("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let config = Self { figment, base_dir };
        config.settings()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed, validated settings with data paths resolved against the config directory.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))?;
        settings.validate()?;
        settings.vocabulary.path = resolve_with_base(&self.base_dir, settings.vocabulary.path.to_string_lossy());
        settings.lexicon.path = resolve_with_base(&self.base_dir, settings.lexicon.path.to_string_lossy());
        Ok(settings)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vocabulary: VocabularySettings,
    pub lexicon: LexiconSettings,
    pub tokenizer: TokenizerSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        self.vocabulary.validate()?;
        if self.lexicon.path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("lexicon.path must not be empty".into()));
        }
        Ok(())
    }
}

/// Where the word list lives and how its columns are named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularySettings {
    pub path: PathBuf,
    pub headword_column: String,
    pub level_column: String,
    pub delimiter: char,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/cefr-vocab.csv"),
            headword_column: "headword".to_string(),
            level_column: "CEFR".to_string(),
            delimiter: ',',
        }
    }
}

impl VocabularySettings {
    pub fn validate(&self) -> Result<()> {
        let headword = self.headword_column.trim();
        let level = self.level_column.trim();
        if headword.is_empty() || level.is_empty() {
            return Err(Error::InvalidConfig("vocabulary column names must not be empty".into()));
        }
        if headword.eq_ignore_ascii_case(level) {
            return Err(Error::InvalidConfig(format!(
                "vocabulary headword and level columns are both '{}'",
                headword
            )));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| Error::InvalidConfig(format!("delimiter {:?} is not a single ASCII character", self.delimiter)))
    }
}

/// English lemma list the lemmatizer checks candidate base forms against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSettings {
    pub path: PathBuf,
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self { path: PathBuf::from("data/lexicon.csv") }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerSettings {
    pub strip_digits: bool,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self { strip_digits: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

/// Expand a user-provided path string:
/// - Expands ${VAR} and $VAR environment variables
/// - Expands leading '~' to the user's home directory
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
