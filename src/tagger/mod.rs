pub(crate) mod perceptron;

pub use perceptron::PerceptronTagger;

use serde::{Deserialize, Serialize};

pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosCategory {
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Maps a Penn Treebank tag to a category.
    ///
    /// `JJ*` is an adjective, `VB*` a verb, `NN*` a noun and `RB*` an adverb. Every other tag
    /// (pronouns, determiners, modals, punctuation, ...) falls back to `Noun`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some("JJ") => Self::Adjective,
            Some("VB") => Self::Verb,
            Some("RB") => Self::Adverb,
            _ => Self::Noun,
        }
    }

    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
        }
    }
}
