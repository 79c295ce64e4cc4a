use tracing::debug;

use crate::{lexicon::SynonymExpander, text::TermSet};

/// Only the job side is expanded with synonyms.
pub fn match_terms(
    job_terms: &TermSet,
    resume_terms: &TermSet,
    expander: &SynonymExpander<'_>,
) -> TermSet {
    if job_terms.is_empty() || resume_terms.is_empty() {
        return TermSet::new();
    }

    let expanded = expander.expand(job_terms);
    let matched: TermSet = expanded.intersection(resume_terms).cloned().collect();

    debug!(
        job_terms = job_terms.len(),
        expanded = expanded.len(),
        resume_terms = resume_terms.len(),
        matched = matched.len(),
        "matched terms"
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lexicon::{Lexicon, SenseGroup},
        tagger::PosCategory,
    };

    struct FakeLexicon;

    impl Lexicon for FakeLexicon {
        fn lemmatize(&self, word: &str, _pos: PosCategory) -> String {
            word.to_string()
        }

        fn sense_groups(&self, word: &str) -> Vec<SenseGroup> {
            match word {
                "develop" => vec![SenseGroup {
                    pos: PosCategory::Verb,
                    members: vec!["develop".into(), "build".into()],
                }],
                "analytics" => vec![SenseGroup {
                    pos: PosCategory::Noun,
                    members: vec!["analytics".into(), "analysis".into()],
                }],
                _ => Vec::new(),
            }
        }
    }

    fn terms(words: &[&str]) -> TermSet {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn intersects_after_expanding_job_terms() {
        let expander = SynonymExpander::new(&FakeLexicon);
        let matched = match_terms(
            &terms(&["develop", "software", "data"]),
            &terms(&["build", "software", "data", "experience"]),
            &expander,
        );
        assert_eq!(matched, terms(&["build", "data", "software"]));
    }

    #[test]
    fn resume_side_is_not_expanded() {
        let expander = SynonymExpander::new(&FakeLexicon);
        let matched = match_terms(&terms(&["analysis"]), &terms(&["analytics"]), &expander);
        assert!(matched.is_empty());
    }

    #[test]
    fn result_is_subset_of_both_sides() {
        let expander = SynonymExpander::new(&FakeLexicon);
        let job = terms(&["develop", "rust", "cloud"]);
        let resume = terms(&["build", "rust", "python"]);
        let matched = match_terms(&job, &resume, &expander);

        assert!(matched.is_subset(&resume));
        assert!(matched.is_subset(&expander.expand(&job)));
    }

    #[test]
    fn empty_sides_match_nothing() {
        let expander = SynonymExpander::new(&FakeLexicon);
        assert!(match_terms(&TermSet::new(), &terms(&["rust"]), &expander).is_empty());
        assert!(match_terms(&terms(&["rust"]), &TermSet::new(), &expander).is_empty());
    }
}
