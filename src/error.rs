use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Resource '{resource}' unavailable at {}: {reason}", path.display())]
    ResourceUnavailable {
        resource: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Insufficient corpus: {0}")]
    InsufficientCorpus(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn resource_unavailable(
        resource: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
