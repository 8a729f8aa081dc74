use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read source file '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write destination file '{path}': {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decryption or encryption failed: {0}")]
    CipherFailure(String),

    #[error("couldn't find the secrets file for stage '{stage}': {file}")]
    SecretsFileMissing { stage: String, file: String },

    #[error("no password provided: pass --password or set STAGECRYPT_PASSWORD")]
    PasswordRequired,

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub(crate) fn source_unavailable(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn destination_unwritable(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::DestinationUnwritable {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
