use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use tracing::{info, warn};

use super::{morphy, Lexicon, SenseGroup};
use crate::{
    error::{Error, Result},
    tagger::PosCategory,
};

pub const RESOURCE_NAME: &str = "wordnet";

type SynsetOffset = u64;

#[derive(Debug, Default)]
struct PosTable {
    index: HashMap<String, Vec<SynsetOffset>>,
    synsets: HashMap<SynsetOffset, Vec<String>>,
    exceptions: HashMap<String, Vec<String>>,
}

#[derive(Debug, Default)]
pub struct WordNet {
    tables: [PosTable; 4],
}

impl WordNet {
    pub fn dictionary_files() -> Vec<String> {
        PosCategory::ALL
            .iter()
            .flat_map(|pos| {
                let suffix = pos.file_suffix();
                [
                    format!("index.{suffix}"),
                    format!("data.{suffix}"),
                    format!("{suffix}.exc"),
                ]
            })
            .collect()
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut wordnet = Self::default();

        for pos in PosCategory::ALL {
            let suffix = pos.file_suffix();
            let index = open(dir, &format!("index.{suffix}"))?;
            let data = open(dir, &format!("data.{suffix}"))?;
            let exceptions = open(dir, &format!("{suffix}.exc"))?;

            wordnet
                .load(pos, index, data, exceptions)
                .map_err(|e| Error::resource_unavailable(RESOURCE_NAME, dir, e))?;
        }

        info!(
            lemmas = wordnet.tables.iter().map(|t| t.index.len()).sum::<usize>(),
            synsets = wordnet.tables.iter().map(|t| t.synsets.len()).sum::<usize>(),
            "loaded wordnet from {}",
            dir.display()
        );

        Ok(wordnet)
    }

    pub fn load(
        &mut self,
        pos: PosCategory,
        index: impl BufRead,
        data: impl BufRead,
        exceptions: impl BufRead,
    ) -> io::Result<()> {
        let table = &mut self.tables[pos as usize];

        for_each_entry(index, pos, "index", parse_index_line, |(lemma, offsets)| {
            table.index.entry(lemma).or_default().extend(offsets);
        })?;
        for_each_entry(data, pos, "data", parse_data_line, |(offset, members)| {
            table.synsets.insert(offset, members);
        })?;
        for_each_entry(exceptions, pos, "exc", parse_exception_line, |(form, bases)| {
            table.exceptions.entry(form).or_default().extend(bases);
        })?;

        Ok(())
    }

    fn table(&self, pos: PosCategory) -> &PosTable {
        &self.tables[pos as usize]
    }

    fn morphy(&self, word: &str, pos: PosCategory) -> Vec<String> {
        let table = self.table(pos);

        morphy::base_forms(
            word,
            pos,
            table.exceptions.get(word).map(Vec::as_slice),
            |form| table.index.contains_key(form),
        )
    }
}

impl Lexicon for WordNet {
    fn lemmatize(&self, word: &str, pos: PosCategory) -> String {
        self.morphy(word, pos)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    fn sense_groups(&self, word: &str) -> Vec<SenseGroup> {
        let word = word.to_lowercase();
        let mut groups = Vec::new();

        for pos in PosCategory::ALL {
            let table = self.table(pos);
            let mut seen: Vec<SynsetOffset> = Vec::new();

            for form in self.morphy(&word, pos) {
                for offset in table.index.get(&form).into_iter().flatten() {
                    if seen.contains(offset) {
                        continue;
                    }
                    seen.push(*offset);

                    if let Some(members) = table.synsets.get(offset) {
                        groups.push(SenseGroup {
                            pos,
                            members: members.clone(),
                        });
                    }
                }
            }
        }

        groups
    }
}

fn open(dir: &Path, name: &str) -> Result<BufReader<File>> {
    let path = dir.join(name);
    File::open(&path)
        .map(BufReader::new)
        .map_err(|e| Error::resource_unavailable(RESOURCE_NAME, path, e))
}

fn for_each_entry<T>(
    reader: impl BufRead,
    pos: PosCategory,
    kind: &str,
    parse: fn(&str) -> Option<T>,
    mut insert: impl FnMut(T),
) -> io::Result<()> {
    let mut skipped = 0_usize;

    for line in reader.lines() {
        let line = line?;

        // License header lines are indented.
        if line.starts_with(' ') || line.trim().is_empty() {
            continue;
        }

        match parse(&line) {
            Some(entry) => insert(entry),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            skipped,
            "skipped malformed {kind}.{} lines",
            pos.file_suffix()
        );
    }

    Ok(())
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset...`
fn parse_index_line(line: &str) -> Option<(String, Vec<SynsetOffset>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = fields.first()?;
    let synset_cnt: usize = fields.get(2)?.parse().ok()?;
    let start = fields.len().checked_sub(synset_cnt)?;

    if start < 4 {
        return None;
    }

    let offsets = fields[start..]
        .iter()
        .map(|field| field.parse().ok())
        .collect::<Option<Vec<_>>>()?;

    Some(((*lemma).to_string(), offsets))
}

/// `synset_offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt ... | gloss`
fn parse_data_line(line: &str) -> Option<(SynsetOffset, Vec<String>)> {
    let mut fields = line.split_whitespace();
    let offset = fields.next()?.parse().ok()?;
    fields.next()?;
    fields.next()?;
    let word_count = usize::from_str_radix(fields.next()?, 16).ok()?;

    let members = (0..word_count)
        .map(|_| {
            let word = fields.next()?;
            fields.next()?;
            Some(strip_syntactic_marker(word).to_string())
        })
        .collect::<Option<Vec<_>>>()?;

    Some((offset, members))
}

fn parse_exception_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut fields = line.split_whitespace();
    let form = fields.next()?.to_string();
    let bases: Vec<String> = fields.map(str::to_string).collect();

    if bases.is_empty() {
        return None;
    }

    Some((form, bases))
}

/// Adjectives may carry a position marker such as `(a)`, `(p)` or `(ip)`.
fn strip_syntactic_marker(word: &str) -> &str {
    word.split_once('(').map_or(word, |(word, _)| word)
}
