//! Keyword relevance between a job description and a resume.
//!
//! Both documents are normalized to lemmas, the job terms are widened with their WordNet synonyms,
//! the overlap with the resume terms is taken, and the overlap is ranked by the mean TF-IDF weight
//! of each term in the two documents.

pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod ranking;
pub mod resources;
pub mod resume;
pub mod scoring;
pub mod tagger;
pub mod text;

pub use config::EngineConfig;
pub use engine::{KeywordEngine, KeywordReport};
pub use error::{Error, Result};
pub use resources::Resources;
