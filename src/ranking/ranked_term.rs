use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

impl RankedTerm {
    pub const fn new(term: String, score: f64) -> Self {
        Self { term, score }
    }
}
