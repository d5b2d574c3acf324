use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::ranking::DEFAULT_MIN_SCORE;
use crate::matching::scoring::ScoringTables;
use crate::models::posting::CompanyTarget;

/// What to fetch and how to score it. Loaded once at startup, read-only after.
///
/// A profile file may set any subset of fields; the rest fall back to the
/// compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherProfile {
    pub targets: Vec<CompanyTarget>,
    pub scoring: ScoringTables,
    pub min_score: u32,
}

impl Default for MatcherProfile {
    fn default() -> Self {
        Self {
            targets: vec![
                CompanyTarget::new("greenhouse", "limosa"),
                CompanyTarget::new("greenhouse", "mda-space"),
                CompanyTarget::new("lever", "clearpath-robotics"),
                CompanyTarget::new("ashby", "draganfly"),
            ],
            scoring: ScoringTables::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl MatcherProfile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid matcher profile JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read matcher profile {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse matcher profile {}", path.display()))
    }

    /// Profile from `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
