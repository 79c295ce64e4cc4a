mod tfidf;

pub use tfidf::TfIdfScorer;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    text::Normalizer,
};

pub type TermScores = HashMap<String, f64>;

pub trait Analyzer {
    fn analyze(&self, text: &str) -> Vec<String>;
}

/// Which vocabulary the scorer counts.
///
/// `Raw` weights lower-cased words of two or more word characters, so a matched lemma such as
/// `run` gets no weight from a document that only says `running`. `Lemmatized` runs the scorer
/// over the same normalized terms the matcher uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringVocabulary {
    #[default]
    Raw,
    Lemmatized,
}

pub struct WordAnalyzer {
    regex: Regex,
}

impl WordAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"\b\w\w+\b")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.regex
            .find_iter(&text)
            .map(|word| word.as_str().to_string())
            .collect()
    }
}

impl Analyzer for Normalizer {
    fn analyze(&self, text: &str) -> Vec<String> {
        self.normalize(text)
    }
}
