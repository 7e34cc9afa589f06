use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://alfa-leetcode-api.onrender.com/select";
pub const DEFAULT_TAG_PREFIX: &str = "leetcode/";
const DEFAULT_CONFIG_FILE: &str = "leetcode_puller";
const ENV_PREFIX: &str = "LEETCODE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Query endpoint, called as `<api_url>?titleSlug=<slug>`.
    pub api_url: String,
    /// Prepended to every topic tag slug. May be empty.
    pub tag_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then a TOML file, then `LEETCODE_*` environment variables.
    ///
    /// An explicit `file` must exist; otherwise `./leetcode_puller.toml` is
    /// read if present.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("tag_prefix", DEFAULT_TAG_PREFIX)?
            .add_source(source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(Config::try_deserialize)
            .context("Failed to load settings")
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, api_url: Option<String>, tag_prefix: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(prefix) = tag_prefix {
            self.tag_prefix = prefix;
        }
        self
    }
}
