use std::collections::BTreeSet;

use super::Lexicon;

pub struct SynonymExpander<'a> {
    lexicon: &'a dyn Lexicon,
}

impl<'a> SynonymExpander<'a> {
    pub const fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lower-cased members of every sense group of `term`. Multi-word members are joined by a
    /// single space. A term the lexicon does not know has no synonyms.
    pub fn synonyms(&self, term: &str) -> BTreeSet<String> {
        self.lexicon
            .sense_groups(term)
            .into_iter()
            .flat_map(|group| group.members)
            .map(|member| normalize_member(&member))
            .filter(|member| !member.is_empty())
            .collect()
    }

    pub fn expand<'t>(&self, terms: impl IntoIterator<Item = &'t String>) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();

        for term in terms {
            expanded.extend(self.synonyms(term));
            expanded.insert(term.clone());
        }

        expanded
    }
}

fn normalize_member(member: &str) -> String {
    member
        .split(['_', ' '])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
