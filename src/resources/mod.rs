mod install;

pub use install::{install, missing_files, required_files, ResourceFile};

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

use crate::{
    error::Result,
    lexicon::{Lexicon, WordNet},
    tagger::{PerceptronTagger, PosTagger},
};

pub const WORDNET_DIR: &str = "corpora/wordnet";
pub const TAGGER_DIR: &str = "taggers/averaged_perceptron_tagger_eng";

/// The read-only tagger and lexicon shared by every request.
#[derive(Clone)]
pub struct Resources {
    tagger: Arc<dyn PosTagger>,
    lexicon: Arc<dyn Lexicon>,
}

impl Resources {
    pub fn new(tagger: impl PosTagger + 'static, lexicon: impl Lexicon + 'static) -> Self {
        Self {
            tagger: Arc::new(tagger),
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        info!("loading lexical resources from {}", root.display());

        let tagger = PerceptronTagger::from_dir(&tagger_dir(root))?;
        let lexicon = WordNet::from_dir(&wordnet_dir(root))?;

        Ok(Self::new(tagger, lexicon))
    }

    pub fn tagger(&self) -> &dyn PosTagger {
        self.tagger.as_ref()
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources").finish_non_exhaustive()
    }
}

pub fn wordnet_dir(root: &Path) -> PathBuf {
    root.join(WORDNET_DIR)
}

pub fn tagger_dir(root: &Path) -> PathBuf {
    root.join(TAGGER_DIR)
}

pub fn default_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("nltk_data"))
}
