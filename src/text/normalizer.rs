use tracing::debug;

use super::{is_punctuation, Stopwords, TermSet, Tokenizer};
use crate::{error::Result, resources::Resources, tagger::PosCategory};

pub struct Normalizer {
    tokenizer: Tokenizer,
    stopwords: Stopwords,
    resources: Resources,
}

impl Normalizer {
    pub fn new(resources: Resources, stopwords: Stopwords) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            stopwords,
            resources,
        })
    }

    /// Lemmas of `text` in document order, duplicates kept.
    ///
    /// Each token is tagged, mapped to one of the four lexicon categories and reduced with the
    /// matching rules. A token is dropped when it is punctuation or when either its surface form or
    /// its lemma is a stopword.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());
        let tags = self.resources.tagger().tag(&tokens);
        let lexicon = self.resources.lexicon();

        let lemmas: Vec<String> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !is_punctuation(token) && !self.stopwords.contains(token))
            .map(|(i, token)| {
                let pos = tags.get(i).map_or(PosCategory::Noun, |tag| PosCategory::from_tag(tag));
                lexicon.lemmatize(token, pos).to_lowercase()
            })
            .filter(|lemma| !lemma.is_empty() && !self.stopwords.contains(lemma))
            .collect();

        debug!(tokens = tokens.len(), lemmas = lemmas.len(), "normalized text");

        lemmas
    }

    pub fn term_set(&self, text: &str) -> TermSet {
        self.normalize(text).into_iter().collect()
    }

    pub const fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, SenseGroup};
    use crate::tagger::PosTagger;

    struct SuffixTagger;

    impl PosTagger for SuffixTagger {
        fn tag(&self, tokens: &[String]) -> Vec<String> {
            tokens
                .iter()
                .map(|t| {
                    if t.ends_with("ing") || t == "are" {
                        "VBG"
                    } else if t.ends_with("ly") {
                        "RB"
                    } else {
                        "NNS"
                    }
                })
                .map(String::from)
                .collect()
        }
    }

    struct TableLexicon;

    impl Lexicon for TableLexicon {
        fn lemmatize(&self, word: &str, pos: PosCategory) -> String {
            match (word, pos) {
                ("cats", PosCategory::Noun) => "cat",
                ("running", PosCategory::Verb) => "run",
                ("are", PosCategory::Verb) => "be",
                ("apis", PosCategory::Noun) => "API",
                _ => word,
            }
            .to_string()
        }

        fn sense_groups(&self, _word: &str) -> Vec<SenseGroup> {
            Vec::new()
        }
    }

    fn normalizer(stopwords: Stopwords) -> Normalizer {
        Normalizer::new(Resources::new(SuffixTagger, TableLexicon), stopwords)
            .expect("Failed to create normalizer")
    }

    #[test]
    fn lemmatizes_by_part_of_speech() {
        let lemmas = normalizer(Stopwords::default()).normalize("Cats are running quickly!");
        assert_eq!(lemmas, vec!["cat", "run", "quickly"]);
    }

    #[test]
    fn lemma_stopwords_are_dropped() {
        // "are" is tagged as a verb and reduced to "be" before the second check.
        let lemmas = normalizer(Stopwords::new(["be"])).normalize("cats are");
        assert_eq!(lemmas, vec!["cat"]);
    }

    #[test]
    fn lemmas_are_case_folded() {
        let lemmas = normalizer(Stopwords::default()).normalize("APIs");
        assert_eq!(lemmas, vec!["api"]);
    }

    #[test]
    fn is_deterministic() {
        let normalizer = normalizer(Stopwords::default());
        let text = "The cats, running and running, are quickly running.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(normalizer(Stopwords::default()).term_set("").is_empty());
    }

    #[test]
    fn term_set_collapses_duplicates() {
        let terms = normalizer(Stopwords::default()).term_set("cats cats running");
        assert_eq!(terms.len(), 2);
        assert!(terms.contains("cat"));
        assert!(terms.contains("run"));
    }
}
