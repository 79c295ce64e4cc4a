mod normalizer;
mod stopwords;
mod tokenizer;

pub use normalizer::Normalizer;
pub use stopwords::{Stopwords, DEFAULT_STOPWORDS};
pub use tokenizer::{is_punctuation, Tokenizer};

use std::collections::BTreeSet;

pub type TermSet = BTreeSet<String>;
