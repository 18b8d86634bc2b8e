//! Pipeline configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_SOURCE: &str = "f1.txt";
pub const DEFAULT_FILTER: &str = "f2.txt";
pub const DEFAULT_OUTPUT: &str = "out.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Word list loaded into the reference set.
    pub source_path: String,

    /// Word list streamed against the reference set.
    pub filter_path: String,

    /// Destination for the sorted intersection (truncated on write).
    pub output_path: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE.to_string(),
            filter_path: DEFAULT_FILTER.to_string(),
            output_path: DEFAULT_OUTPUT.to_string(),
        }
    }
}

/// Partial configuration as read from a YAML document. Unset keys leave the
/// current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDoc {
    pub source: Option<String>,
    pub filter: Option<String>,
    pub output: Option<String>,
}

impl ConfigDoc {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl PipelineConfig {
    pub fn new(
        source_path: impl Into<String>,
        filter_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            filter_path: filter_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `WORDCMP_SOURCE`: reference word list
    /// - `WORDCMP_FILTER`: word list tested against the reference
    /// - `WORDCMP_OUTPUT`: output file
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("WORDCMP_SOURCE") {
            cfg.source_path = s;
        }

        if let Ok(s) = std::env::var("WORDCMP_FILTER") {
            cfg.filter_path = s;
        }

        if let Ok(s) = std::env::var("WORDCMP_OUTPUT") {
            cfg.output_path = s;
        }

        cfg
    }

    /// Overlay the keys set in `doc`.
    pub fn apply_doc(&mut self, doc: &ConfigDoc) {
        if let Some(s) = &doc.source {
            self.source_path = s.clone();
        }
        if let Some(s) = &doc.filter {
            self.filter_path = s.clone();
        }
        if let Some(s) = &doc.output {
            self.output_path = s.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_names() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.source_path, "f1.txt");
        assert_eq!(cfg.filter_path, "f2.txt");
        assert_eq!(cfg.output_path, "out.txt");
    }

    #[test]
    fn yaml_doc_overrides_only_set_keys() {
        let doc = ConfigDoc::from_yaml_str("source: words/a.txt\noutput: result.txt\n").unwrap();
        let mut cfg = PipelineConfig::default();
        cfg.apply_doc(&doc);
        assert_eq!(cfg.source_path, "words/a.txt");
        assert_eq!(cfg.filter_path, "f2.txt");
        assert_eq!(cfg.output_path, "result.txt");
    }

    #[test]
    fn yaml_doc_rejects_unknown_keys() {
        let err = ConfigDoc::from_yaml_str("sources: a.txt\n").unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn config_serde_roundtrip_fills_missing_fields() {
        let cfg: PipelineConfig = serde_json::from_str(r#"{"output_path":"x.txt"}"#).unwrap();
        assert_eq!(cfg.output_path, "x.txt");
        assert_eq!(cfg.source_path, DEFAULT_SOURCE);
    }
}
