mod ranked_term;

pub use ranked_term::RankedTerm;

use crate::{scoring::TermScores, text::TermSet};

/// A term missing from a weight map counts as 0.0 there. Equal scores are ordered by term.
pub fn rank(matched: &TermSet, [job_scores, resume_scores]: [&TermScores; 2]) -> Vec<RankedTerm> {
    let mut ranked: Vec<RankedTerm> = matched
        .iter()
        .map(|term| {
            let job = job_scores.get(term).copied().unwrap_or(0.0);
            let resume = resume_scores.get(term).copied().unwrap_or(0.0);
            RankedTerm::new(term.clone(), (job + resume) / 2.0)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.term.cmp(&b.term))
    });

    ranked
}
