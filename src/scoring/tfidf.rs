use std::collections::HashMap;
use tracing::debug;

use super::{Analyzer, TermScores};
use crate::error::{Error, Result};

/// TF-IDF over a small, fixed set of documents.
///
/// Term frequency is the raw count, inverse document frequency is smoothed as
/// `ln((1 + n) / (1 + df)) + 1` and every document's weights are scaled to unit length. Weights are
/// only comparable within one call.
pub struct TfIdfScorer<'a> {
    analyzer: &'a dyn Analyzer,
}

impl<'a> TfIdfScorer<'a> {
    pub const fn new(analyzer: &'a dyn Analyzer) -> Self {
        Self { analyzer }
    }

    pub fn score(&self, documents: &[&str]) -> Result<Vec<TermScores>> {
        if documents.iter().all(|document| document.trim().is_empty()) {
            return Err(Error::InsufficientCorpus(
                "no non-empty document to score".to_string(),
            ));
        }

        let counts: Vec<HashMap<String, u32>> = documents
            .iter()
            .map(|document| term_counts(self.analyzer.analyze(document)))
            .collect();

        let mut document_frequency: HashMap<&str, u32> = HashMap::new();
        for term in counts.iter().flat_map(HashMap::keys) {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }

        if document_frequency.is_empty() {
            return Err(Error::InsufficientCorpus(
                "documents share an empty vocabulary".to_string(),
            ));
        }

        debug!(
            documents = documents.len(),
            vocabulary = document_frequency.len(),
            "scoring documents"
        );

        let num_docs = documents.len() as f64;

        Ok(counts
            .iter()
            .map(|document| {
                let weights = document.iter().map(|(term, &tf)| {
                    let df = f64::from(document_frequency[term.as_str()]);
                    (term.clone(), calculate_tf_idf(f64::from(tf), df, num_docs))
                });
                l2_normalize(weights.collect())
            })
            .collect())
    }
}

fn term_counts(terms: Vec<String>) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn calculate_tf_idf(tf: f64, df: f64, n: f64) -> f64 {
    tf * (((1.0 + n) / (1.0 + df)).ln() + 1.0)
}

fn l2_normalize(mut scores: TermScores) -> TermScores {
    let norm = scores.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm > 0.0 {
        for weight in scores.values_mut() {
            *weight /= norm;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WordAnalyzer;

    const EPSILON: f64 = 1e-9;

    fn score(documents: &[&str]) -> Result<Vec<TermScores>> {
        let analyzer = WordAnalyzer::new().expect("Failed to create analyzer");
        TfIdfScorer::new(&analyzer).score(documents)
    }

    #[test]
    fn matches_smoothed_idf_with_l2_norm() {
        let scores = score(&["rust rust go", "go python"]).expect("Failed to score");

        let rust = 2.0 * ((3.0_f64 / 2.0).ln() + 1.0);
        let go = 1.0;
        let norm = rust.hypot(go);

        assert!((scores[0]["rust"] - rust / norm).abs() < EPSILON);
        assert!((scores[0]["go"] - go / norm).abs() < EPSILON);
        assert!(!scores[0].contains_key("python"));
    }

    #[test]
    fn unique_terms_outweigh_shared_ones() {
        let scores = score(&["rust cloud", "cloud python"]).expect("Failed to score");
        assert!(scores[0]["rust"] > scores[0]["cloud"]);
        assert!(scores[1]["python"] > scores[1]["cloud"]);
    }

    #[test]
    fn weights_do_not_depend_on_document_order() {
        let a = "senior rust engineer with rust and cloud";
        let b = "cloud platform engineer";

        let forward = score(&[a, b]).expect("Failed to score");
        let backward = score(&[b, a]).expect("Failed to score");

        assert_eq!(forward[0].len(), backward[1].len());
        for (term, weight) in &forward[0] {
            assert!((weight - backward[1][term]).abs() < EPSILON, "{term}");
        }
    }

    #[test]
    fn documents_have_unit_length() {
        let scores = score(&["one two three two", "three four"]).expect("Failed to score");
        for document in scores {
            let length = document.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!((length - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn empty_document_gets_empty_map() {
        let scores = score(&["rust engineer", ""]).expect("Failed to score");
        assert_eq!(scores.len(), 2);
        assert!(scores[1].is_empty());
    }

    #[test]
    fn empty_corpus_is_insufficient() {
        assert!(matches!(score(&[]), Err(Error::InsufficientCorpus(_))));
        assert!(matches!(score(&["", "  "]), Err(Error::InsufficientCorpus(_))));
        assert!(matches!(score(&["a b c", "!"]), Err(Error::InsufficientCorpus(_))));
    }
}
