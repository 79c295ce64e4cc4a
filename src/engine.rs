use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::EngineConfig,
    error::Result,
    lexicon::SynonymExpander,
    matcher,
    ranking::{self, RankedTerm},
    resources::Resources,
    resume,
    scoring::{Analyzer, ScoringVocabulary, TermScores, TfIdfScorer, WordAnalyzer},
    text::{Normalizer, TermSet},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub matched: Vec<String>,
    pub ranked: Vec<RankedTerm>,
    pub max_ranked_terms: usize,
}

impl KeywordReport {
    pub fn top_terms(&self, n: usize) -> Vec<&str> {
        self.ranked.iter().take(n).map(|r| r.term.as_str()).collect()
    }

    /// The ranked terms handed to the rewrite step, capped at `max_ranked_terms`.
    pub fn emphasis_terms(&self) -> Vec<&str> {
        self.top_terms(self.max_ranked_terms)
    }
}

/// Every call builds its own term sets and weight maps. The engine itself only holds read-only
/// state, so one instance can serve concurrent requests.
pub struct KeywordEngine {
    normalizer: Normalizer,
    words: WordAnalyzer,
    resources: Resources,
    config: EngineConfig,
}

impl KeywordEngine {
    pub fn new(resources: Resources, config: EngineConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(resources.clone(), config.stopword_set())?,
            words: WordAnalyzer::new()?,
            resources,
            config,
        })
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.normalizer.normalize(text)
    }

    pub fn synonyms(&self, term: &str) -> TermSet {
        SynonymExpander::new(self.resources.lexicon()).synonyms(term)
    }

    pub fn match_terms(&self, job_text: &str, resume_text: &str) -> TermSet {
        let job_terms = self.normalizer.term_set(job_text);
        let resume_terms = self.normalizer.term_set(resume_text);
        let expander = SynonymExpander::new(self.resources.lexicon());

        matcher::match_terms(&job_terms, &resume_terms, &expander)
    }

    pub fn score(&self, documents: &[&str]) -> Result<Vec<TermScores>> {
        TfIdfScorer::new(self.analyzer()).score(documents)
    }

    pub fn rank(&self, matched: &TermSet, job_text: &str, resume_text: &str) -> Result<Vec<RankedTerm>> {
        if matched.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.score(&[job_text, resume_text])?;

        Ok(ranking::rank(matched, [&scores[0], &scores[1]]))
    }

    /// The `top_n` most frequent raw words of `text`, stopwords excluded.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        resume::extract_keywords(text, &self.words, self.normalizer.stopwords(), top_n)
    }

    pub fn analyze(&self, job_text: &str, resume_text: &str) -> Result<KeywordReport> {
        let matched = self.match_terms(job_text, resume_text);
        let ranked = self.rank(&matched, job_text, resume_text)?;

        info!(
            matched = matched.len(),
            ranked = ranked.len(),
            "analyzed job description against resume"
        );
        debug!(top = ?ranked.first(), "highest ranked term");

        Ok(KeywordReport {
            matched: matched.into_iter().collect(),
            ranked,
            max_ranked_terms: self.config.max_ranked_terms,
        })
    }

    fn analyzer(&self) -> &dyn Analyzer {
        match self.config.scoring_vocabulary {
            ScoringVocabulary::Raw => &self.words,
            ScoringVocabulary::Lemmatized => &self.normalizer,
        }
    }
}
