use thiserror::Error;

use crate::oracle::ElementKind;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("no collision-free name for {kind} `{owner} {name}` after {attempts} attempts")]
    NameGenerationExhausted {
        kind: ElementKind,
        owner: String,
        name: String,
        attempts: usize,
    },
    #[error("failed to read or write rename mapping: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed rename mapping: {0}")]
    Mapping(#[from] serde_json::Error),
}
