use crate::convert::RouteConverter;
use crate::trie::{Params, Trie, TrieError};

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error("failed to read rewrite table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rewrite table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One `from -> to` entry of a rewrite table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewriteRule {
    pub from: String,
    pub to: String,
}

/// A rewrite table, deserialized from TOML:
///
/// ```toml
/// [[rule]]
/// from = "/host/:id"
/// to = "/api/v1/test/host/:id"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RewriteConfig {
    #[serde(default, rename = "rule")]
    pub rules: Vec<RewriteRule>,
}

impl RewriteConfig {
    pub fn from_toml(s: &str) -> Result<Self, RewriteError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RewriteError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Address rewriting driven by a trie of source patterns.
#[derive(Debug, Default)]
pub struct Rewriter {
    trie: Trie<RouteConverter>,
}

impl Rewriter {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Rules are registered in table order, which is also their precedence.
    pub fn from_config(config: &RewriteConfig) -> Result<Self, RewriteError> {
        let mut rewriter = Self::new();
        for rule in config.rules.iter() {
            rewriter.add_rule(&rule.from, &rule.to)?;
        }
        Ok(rewriter)
    }

    pub fn add_rule(&mut self, from: &str, to: &str) -> Result<&mut Self, RewriteError> {
        self.trie.try_insert(from, RouteConverter::new(from, to))?;
        Ok(self)
    }

    /// Rewrites `addr` with the first matching rule; a rule whose source
    /// does not occur in `addr` counts as a miss.
    pub fn rewrite(&self, addr: &str) -> Result<String, RewriteError> {
        let mut params = Params::new();
        let conv = self
            .trie
            .match_path(addr, Some(&mut params))?
            .ok_or(TrieError::NotMatch)?;
        let out = conv
            .try_convert(addr, &params)
            .ok_or(TrieError::NotMatch)?;
        debug!(from = addr, to = out.as_str(), "address rewritten");
        Ok(out)
    }
}
