use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::info;

use super::PosTagger;
use crate::error::{Error, Result};

pub const MODEL_NAME: &str = "averaged_perceptron_tagger_eng";
pub const MODEL_FILES: [&str; 3] = ["weights", "tagdict", "classes"];

const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];
const FALLBACK_TAG: &str = "NN";

type Weights = HashMap<String, HashMap<String, f64>>;

/// Reads the JSON export of NLTK's `averaged_perceptron_tagger_eng` model. Words found in the
/// tag dictionary take its tag directly; every other word is scored with a feature set built from
/// its own shape, the two previous predicted tags and the surrounding words.
#[derive(Debug, Clone)]
pub struct PerceptronTagger {
    weights: Weights,
    tagdict: HashMap<String, String>,
    classes: Vec<String>,
}

impl PerceptronTagger {
    pub fn new(weights: Weights, tagdict: HashMap<String, String>, mut classes: Vec<String>) -> Self {
        classes.sort();
        classes.dedup();

        Self {
            weights,
            tagdict,
            classes,
        }
    }

    pub fn model_path(dir: &Path, file: &str) -> PathBuf {
        dir.join(format!("{MODEL_NAME}.{file}.json"))
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        let weights: Weights = read_json(&Self::model_path(dir, "weights"))?;
        let tagdict: HashMap<String, String> = read_json(&Self::model_path(dir, "tagdict"))?;
        let classes: Vec<String> = read_json(&Self::model_path(dir, "classes"))?;

        if classes.is_empty() {
            return Err(Error::resource_unavailable(
                MODEL_NAME,
                Self::model_path(dir, "classes"),
                "model has no tag classes",
            ));
        }

        info!(
            features = weights.len(),
            tagdict = tagdict.len(),
            classes = classes.len(),
            "loaded perceptron tagger"
        );

        Ok(Self::new(weights, tagdict, classes))
    }

    fn predict(&self, features: &[String]) -> String {
        let mut scores: HashMap<&str, f64> = HashMap::new();

        for feature in features {
            if let Some(label_weights) = self.weights.get(feature) {
                for (label, weight) in label_weights {
                    *scores.entry(label.as_str()).or_insert(0.0) += weight;
                }
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for label in &self.classes {
            let score = scores.get(label.as_str()).copied().unwrap_or(0.0);
            best = match best {
                Some((_, best_score)) if score < best_score => best,
                // Equal scores go to the greater label, classes are sorted ascending.
                _ => Some((label.as_str(), score)),
            };
        }

        best.map_or_else(|| FALLBACK_TAG.to_string(), |(label, _)| label.to_string())
    }
}

impl PosTagger for PerceptronTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        let context: Vec<String> = START
            .iter()
            .map(|s| (*s).to_string())
            .chain(tokens.iter().map(|t| normalize_word(t)))
            .chain(END.iter().map(|s| (*s).to_string()))
            .collect();

        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();
        let mut tags = Vec::with_capacity(tokens.len());

        for (i, word) in tokens.iter().enumerate() {
            let tag = match self.tagdict.get(word) {
                Some(tag) => tag.clone(),
                None => self.predict(&features(i, word, &context, &prev, &prev2)),
            };

            prev2 = std::mem::replace(&mut prev, tag.clone());
            tags.push(tag);
        }

        tags
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).map_err(|e| Error::resource_unavailable(MODEL_NAME, path, e))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::resource_unavailable(MODEL_NAME, path, e))
}

fn normalize_word(word: &str) -> String {
    if word.contains('-') && !word.starts_with('-') {
        "!HYPHEN".to_string()
    } else if word.chars().count() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
        "!YEAR".to_string()
    } else if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        "!DIGITS".to_string()
    } else {
        word.to_lowercase()
    }
}

fn suffix(word: &str) -> &str {
    word.char_indices()
        .rev()
        .nth(2)
        .map_or(word, |(idx, _)| &word[idx..])
}

fn features(i: usize, word: &str, context: &[String], prev: &str, prev2: &str) -> Vec<String> {
    let i = i + START.len();
    let first = word.chars().next().map(String::from).unwrap_or_default();

    vec![
        "bias".to_string(),
        format!("i suffix {}", suffix(word)),
        format!("i pref1 {first}"),
        format!("i-1 tag {prev}"),
        format!("i-2 tag {prev2}"),
        format!("i tag+i-2 tag {prev} {prev2}"),
        format!("i word {}", context[i]),
        format!("i-1 tag+i word {prev} {}", context[i]),
        format!("i-1 word {}", context[i - 1]),
        format!("i-1 suffix {}", suffix(&context[i - 1])),
        format!("i-2 word {}", context[i - 2]),
        format!("i+1 word {}", context[i + 1]),
        format!("i+1 suffix {}", suffix(&context[i + 1])),
        format!("i+2 word {}", context[i + 2]),
    ]
}
