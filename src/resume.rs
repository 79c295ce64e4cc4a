use serde::{Deserialize, Serialize};
use serde_json::{ser::Formatter, Map, Serializer, Value};
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};

use crate::{
    error::{Error, Result},
    scoring::{Analyzer, WordAnalyzer},
    text::Stopwords,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resume(Map<String, Value>);

impl Resume {
    pub fn from_path(path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        Self::from_value(value)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(sections) => Ok(Self(sections)),
            other => Err(Error::Generic(format!(
                "Resume must be a JSON object, found {other}"
            ))),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the resume into `(open, protected)` sections.
    ///
    /// Every protected name appears in the protected half, as an empty list when the resume lacks it.
    pub fn separate_protected(&self, protected: &[String]) -> (Self, Self) {
        let guarded: Map<String, Value> = protected
            .iter()
            .map(|name| {
                let section = self
                    .0
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| Value::Array(Vec::new()));
                (name.clone(), section)
            })
            .collect();

        let open: Map<String, Value> = self
            .0
            .iter()
            .filter(|(name, _)| !protected.contains(*name))
            .map(|(name, section)| (name.clone(), section.clone()))
            .collect();

        (Self(open), Self(guarded))
    }

    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Single-line JSON of the sections with `", "` and `": "` separators, the form in which the
    /// engine reads a resume.
    pub fn to_text(&self) -> Result<String> {
        let mut out = Vec::new();
        self.0
            .serialize(&mut Serializer::with_formatter(&mut out, SpacedFormatter))?;

        String::from_utf8(out).map_err(|e| Error::Generic(format!("Resume text is not UTF-8: {e}")))
    }
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// The `top_n` most frequent words of `text` longer than two characters, stopwords excluded.
/// Equally frequent words are ordered alphabetically.
pub fn extract_keywords(
    text: &str,
    words: &WordAnalyzer,
    stopwords: &Stopwords,
    top_n: usize,
) -> Vec<String> {
    let mut frequency: HashMap<String, usize> = HashMap::new();

    for word in words.analyze(text) {
        if word.chars().count() > 2 && !stopwords.contains(&word) {
            *frequency.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked.into_iter().take(top_n).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"{
        "summary": "Backend engineer building data pipelines",
        "skills": ["Rust", "SQL", "Kafka"],
        "education": [{"school": "State University", "degree": "BSc"}]
    }"#;

    fn protected() -> Vec<String> {
        vec!["education".to_string(), "certificates".to_string()]
    }

    #[test]
    fn separates_protected_sections() {
        let resume = Resume::from_json(RESUME).expect("Failed to parse resume");
        let (open, guarded) = resume.separate_protected(&protected());

        assert_eq!(open.len(), 2);
        assert!(open.section("education").is_none());
        assert!(guarded.section("education").is_some());
        assert_eq!(guarded.section("certificates"), Some(&Value::Array(Vec::new())));
    }

    #[test]
    fn text_excludes_protected_sections() {
        let resume = Resume::from_json(RESUME).expect("Failed to parse resume");
        let (open, _) = resume.separate_protected(&protected());
        let text = open.to_text().expect("Failed to serialize");

        assert!(text.contains("data pipelines"));
        assert!(text.contains("Kafka"));
        assert!(!text.contains("State University"));
    }

    #[test]
    fn text_separates_fields_with_spaces() {
        let resume = Resume::from_json(r#"{"skills":["Rust","SQL"],"summary":"Backend"}"#)
            .expect("Failed to parse resume");

        assert_eq!(
            resume.to_text().expect("Failed to serialize"),
            r#"{"skills": ["Rust", "SQL"], "summary": "Backend"}"#
        );
    }

    #[test]
    fn merge_restores_protected_sections() {
        let resume = Resume::from_json(RESUME).expect("Failed to parse resume");
        let (mut open, guarded) = resume.separate_protected(&["education".to_string()]);
        open.merge(guarded);

        assert_eq!(open, resume);
    }

    #[test]
    fn rejects_non_object_resume() {
        assert!(Resume::from_json("[1, 2]").is_err());
        assert!(Resume::from_json("not json").is_err());
    }

    #[test]
    fn extracts_most_frequent_keywords() {
        let text = "Rust services in Rust; Kafka and Rust with Kafka. SQL is a plus. Go";
        let words = WordAnalyzer::new().expect("Failed to create analyzer");
        let keywords = extract_keywords(text, &words, &Stopwords::default(), 3);

        assert_eq!(keywords, vec!["rust", "kafka", "plus"]);
    }
}
