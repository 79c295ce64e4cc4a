use crate::error::{Error, Result};
use regex::Regex;

const SPLIT_PUNCTUATION: &[char] = &[
    ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '<', '>', '"', '`', '\'',
];
const ELLIPSIS: &str = "...";

/// English word tokenizer in the Penn Treebank style.
///
/// Brackets, braces, double quotes, `;`, `!` and `?` are split off wherever they appear, `,` and
/// `:` whenever a non-digit follows. Clitics are split (`don't` -> `do n't`). `full-stack`,
/// `ci/cd`, `1,000` and `10:30` stay in one token.
pub struct Tokenizer {
    clitic: Regex,
    separators: Regex,
    comma_colon: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            clitic: compile(r"(?i)^(.+?)(n't|'s|'m|'d|'ll|'re|'ve)$")?,
            separators: compile(r#"[\[\](){}<>";!?]"#)?,
            comma_colon: compile(r"([:,])([^\d])")?,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = self.separators.replace_all(text, " $0 ");
        let text = self.comma_colon.replace_all(&text, " $1 $2");
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }

        tokens
    }

    fn split_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        let mut core = chunk;

        while let Some(c) = core.chars().next().filter(|c| SPLIT_PUNCTUATION.contains(c)) {
            tokens.push(c.to_string());
            core = &core[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        loop {
            if let Some(rest) = core.strip_suffix(ELLIPSIS) {
                trailing.push(ELLIPSIS.to_string());
                core = rest;
            } else if let Some(c) = core.chars().last().filter(|c| SPLIT_PUNCTUATION.contains(c)) {
                trailing.push(c.to_string());
                core = &core[..core.len() - c.len_utf8()];
            } else if let Some(rest) = core.strip_suffix('.').filter(|rest| !is_abbreviation(rest)) {
                trailing.push(".".to_string());
                core = rest;
            } else {
                break;
            }
        }

        if !core.is_empty() {
            match self.clitic.captures(core) {
                Some(caps) => {
                    tokens.push(caps[1].to_string());
                    tokens.push(caps[2].to_string());
                }
                None => tokens.push(core.to_string()),
            }
        }

        tokens.extend(trailing.into_iter().rev());
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))
}

/// `e.g` and `u.s` keep their final period, `node.js` and `etc` do not.
fn is_abbreviation(stem: &str) -> bool {
    stem.rsplit_once('.')
        .is_some_and(|(_, last)| last.chars().count() == 1)
}

pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        Tokenizer::new()
            .expect("Failed to create tokenizer")
            .tokenize(text)
    }

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(
            tokenize("Rust, Go and (some) Python."),
            vec!["Rust", ",", "Go", "and", "(", "some", ")", "Python", "."]
        );
    }

    #[test]
    fn splits_clitics() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("it's we're I'll"), vec!["it", "'s", "we", "'re", "I", "'ll"]);
    }

    #[test]
    fn keeps_internal_punctuation() {
        assert_eq!(
            tokenize("full-stack CI/CD 1,000 node.js"),
            vec!["full-stack", "CI/CD", "1,000", "node.js"]
        );
    }

    #[test]
    fn splits_unspaced_commas_and_colons() {
        assert_eq!(tokenize("rust,python"), vec!["rust", ",", "python"]);
        assert_eq!(
            tokenize("skills:rust,python,data"),
            vec!["skills", ":", "rust", ",", "python", ",", "data"]
        );
    }

    #[test]
    fn keeps_digit_separators() {
        assert_eq!(tokenize("1,000 users at 10:30"), vec!["1,000", "users", "at", "10:30"]);
    }

    #[test]
    fn splits_json_punctuation() {
        assert_eq!(
            tokenize(r#"{"k":"v"}"#),
            vec!["{", "\"", "k", "\"", ":", "\"", "v", "\"", "}"]
        );
        assert_eq!(
            tokenize(r#"["rust","sql"]"#),
            vec!["[", "\"", "rust", "\"", ",", "\"", "sql", "\"", "]"]
        );
    }

    #[test]
    fn keeps_abbreviation_periods() {
        assert_eq!(tokenize("e.g. U.S."), vec!["e.g.", "U.S."]);
        assert_eq!(tokenize("uses node.js."), vec!["uses", "node.js", "."]);
    }

    #[test]
    fn splits_ellipsis_and_quotes() {
        assert_eq!(
            tokenize("\"wait...\""),
            vec!["\"", "wait", "...", "\""]
        );
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn punctuation_tokens() {
        assert!(is_punctuation("..."));
        assert!(is_punctuation(","));
        assert!(!is_punctuation("n't"));
        assert!(!is_punctuation("c++"));
    }
}
