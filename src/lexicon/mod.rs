mod morphy;
mod synonyms;
pub(crate) mod wordnet;

pub use synonyms::SynonymExpander;
pub use wordnet::WordNet;

use crate::tagger::PosCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseGroup {
    pub pos: PosCategory,
    pub members: Vec<String>,
}

pub trait Lexicon: Send + Sync {
    /// Dictionary base form of `word` read as `pos`. Words the lexicon does not know come back unchanged.
    fn lemmatize(&self, word: &str, pos: PosCategory) -> String;

    fn sense_groups(&self, word: &str) -> Vec<SenseGroup>;
}
