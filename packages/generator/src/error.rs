use reprgen_syntax::SyntaxError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Destination '{0}' was produced more than once in this session")]
    DuplicateDestination(String),

    #[error("Generation session aborted by host")]
    Aborted,

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl GenerateError {
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateDestination(id.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
