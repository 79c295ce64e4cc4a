use reqwest::blocking::Client;
use std::{
    fs::{create_dir_all, rename, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;

use super::{TAGGER_DIR, WORDNET_DIR};
use crate::{
    error::{Error, Result},
    lexicon::wordnet::RESOURCE_NAME as WORDNET,
    tagger::perceptron::{MODEL_FILES, MODEL_NAME},
};

const TEMP_FILE_SUFFIX: &str = ".tmp";
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub resource: &'static str,
    pub relative: String,
}

impl ResourceFile {
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }
}

pub fn required_files() -> Vec<ResourceFile> {
    let wordnet = crate::lexicon::WordNet::dictionary_files()
        .into_iter()
        .map(|file| ResourceFile {
            resource: WORDNET,
            relative: format!("{WORDNET_DIR}/{file}"),
        });

    let tagger = MODEL_FILES.iter().map(|file| ResourceFile {
        resource: MODEL_NAME,
        relative: format!("{TAGGER_DIR}/{MODEL_NAME}.{file}.json"),
    });

    wordnet.chain(tagger).collect()
}

pub fn missing_files(root: &Path) -> Vec<ResourceFile> {
    required_files()
        .into_iter()
        .filter(|file| !file.path(root).is_file())
        .collect()
}

/// Makes sure every resource file exists under `root`, fetching missing ones from `mirror`.
pub fn install(root: &Path, mirror: Option<&str>) -> Result<()> {
    let missing = missing_files(root);

    let Some(first) = missing.first() else {
        info!("lexical resources already installed in {}", root.display());
        return Ok(());
    };

    let Some(mirror) = mirror else {
        return Err(Error::resource_unavailable(
            first.resource,
            first.path(root),
            format!("{} file(s) missing and no resource mirror configured", missing.len()),
        ));
    };

    let client = Client::builder().timeout(DOWNLOAD_TIMEOUT).build()?;

    for file in &missing {
        download(&client, mirror, root, file)?;
    }

    info!(files = missing.len(), "installed lexical resources into {}", root.display());

    Ok(())
}

fn download(client: &Client, mirror: &str, root: &Path, file: &ResourceFile) -> Result<()> {
    let url = format!("{}/{}", mirror.trim_end_matches('/'), file.relative);
    let path = file.path(root);
    let unavailable = |reason: String| Error::resource_unavailable(file.resource, &path, reason);

    info!("fetching {url}");

    let body = client
        .get(&url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::bytes)
        .map_err(|e| unavailable(format!("failed to fetch {url}: {e}")))?;

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let temp_path = PathBuf::from(format!("{}{}", path.display(), TEMP_FILE_SUFFIX));
    let mut temp = File::create(&temp_path)?;
    temp.write_all(&body)?;
    temp.flush()?;
    drop(temp);

    rename(temp_path, &path)?;

    Ok(())
}
