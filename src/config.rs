use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use crate::{
    error::Result,
    scoring::ScoringVocabulary,
    text::{Stopwords, DEFAULT_STOPWORDS},
};

pub const DEFAULT_MAX_RANKED_TERMS: usize = 10;
pub const DEFAULT_PROTECTED_SECTIONS: &[&str] = &["education", "certificates"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub stopwords: Vec<String>,
    /// How many ranked terms are handed to the rewrite step.
    pub max_ranked_terms: usize,
    pub scoring_vocabulary: ScoringVocabulary,
    /// Root of an NLTK-style data directory. Falls back to `~/nltk_data`.
    pub resource_dir: Option<PathBuf>,
    pub resource_mirror: Option<String>,
    /// Resume sections kept out of the keyword analysis and the rewrite.
    pub protected_sections: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            max_ranked_terms: DEFAULT_MAX_RANKED_TERMS,
            scoring_vocabulary: ScoringVocabulary::default(),
            resource_dir: None,
            resource_mirror: None,
            protected_sections: DEFAULT_PROTECTED_SECTIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn stopword_set(&self) -> Stopwords {
        Stopwords::new(&self.stopwords)
    }

    pub fn resource_root(&self) -> Option<PathBuf> {
        self.resource_dir.clone().or_else(crate::resources::default_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"max_ranked_terms": 5}"#).expect("Failed to parse");

        assert_eq!(config.max_ranked_terms, 5);
        assert_eq!(config.scoring_vocabulary, ScoringVocabulary::Raw);
        assert_eq!(config.protected_sections, vec!["education", "certificates"]);
        assert!(config.stopword_set().contains("the"));
    }

    #[test]
    fn overrides_stopwords_and_vocabulary() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"stopwords": ["Rust"], "scoring_vocabulary": "lemmatized", "resource_dir": "/data"}"#,
        )
        .expect("Failed to parse");

        let stopwords = config.stopword_set();
        assert!(stopwords.contains("rust"));
        assert!(!stopwords.contains("the"));
        assert_eq!(config.scoring_vocabulary, ScoringVocabulary::Lemmatized);
        assert_eq!(config.resource_root(), Some(PathBuf::from("/data")));
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"resource_mirror": "http://localhost:8000/nltk"}"#)
            .expect("Failed to write config");

        let config = EngineConfig::from_path(&path).expect("Failed to load config");
        assert_eq!(
            config.resource_mirror.as_deref(),
            Some("http://localhost:8000/nltk")
        );
    }
}
