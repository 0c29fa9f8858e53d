//! Ignore-spec document handling for `cover-ignore-core`.
//!
//! This module defines the data structure of the YAML ignore specification
//! and handles its deserialization. The document names the module it applies
//! to and carries an ordered list of regular-expression patterns; any
//! coverage-profile line matching one of them is dropped from the output.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The top-level ignore specification document.
///
/// Conventionally stored as `.coverage-ignore.yaml` next to the coverage
/// profile it applies to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IgnoreSpec {
    /// Module identifier the spec applies to. Informational only; the
    /// filtering logic never reads it.
    pub module: String,
    /// Ordered list of regular-expression patterns. Order affects only
    /// short-circuit evaluation, never the retained-line set.
    pub ignore_rules: Vec<String>,
}

impl IgnoreSpec {
    /// Loads an ignore specification from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading ignore spec from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ignore spec {}", path.display()))?;
        let spec = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse ignore spec {}", path.display()))?;
        info!(
            "Loaded {} ignore rules for module '{}'.",
            spec.ignore_rules.len(),
            spec.module
        );
        Ok(spec)
    }

    /// Parses an ignore specification from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let spec: IgnoreSpec =
            serde_yml::from_str(text).context("Failed to parse ignore spec YAML")?;
        debug!("Parsed ignore spec with {} rules.", spec.ignore_rules.len());
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_str() -> Result<()> {
        let yaml = r#"
module: github.com/example/project
ignore_rules:
  - "_test\\.go:"
  - "^mode:"
"#;
        let spec = IgnoreSpec::from_yaml_str(yaml)?;
        assert_eq!(spec.module, "github.com/example/project");
        assert_eq!(spec.ignore_rules, vec!["_test\\.go:", "^mode:"]);
        Ok(())
    }

    #[test]
    fn test_from_yaml_str_missing_rules_defaults_empty() -> Result<()> {
        let spec = IgnoreSpec::from_yaml_str("module: example\n")?;
        assert_eq!(spec.module, "example");
        assert!(spec.ignore_rules.is_empty());
        Ok(())
    }

    #[test]
    fn test_from_yaml_str_rejects_malformed_document() {
        assert!(IgnoreSpec::from_yaml_str("ignore_rules: {not: [a, list").is_err());
    }
}
