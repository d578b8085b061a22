use thiserror::Error;

/// Which table a store error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Post,
    Comment,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Post => write!(f, "post"),
            RecordKind::Comment => write!(f, "comment"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No {kind} with id {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("A {kind} with id {id} already exists")]
    DuplicateId { kind: RecordKind, id: String },

    #[error("Invalid vote option: {0:?}")]
    InvalidVoteOption(String),
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: &str) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn duplicate(kind: RecordKind, id: &str) -> Self {
        StoreError::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
