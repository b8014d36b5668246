use thiserror::Error;

/// Failures of the raw key-value backend. `Progress` never lets these escape;
/// they are logged and replaced by default state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Catalog/index bugs. These indicate broken static data, not a runtime
/// condition, and are surfaced to the caller rather than recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no idiom with id {0} in the catalog")]
    UnknownIdiom(u32),
    #[error("idiom {idiom_id} has only {available} distractor labels at position {position}")]
    InsufficientDistractors {
        idiom_id: u32,
        position: usize,
        available: usize,
    },
    #[error("blank position {0} is outside 0..4")]
    InvalidBlank(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date key {0:?}, expected YYYY-MM-DD")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("option index {0} is outside the four choices")]
    InvalidOption(usize),
}
