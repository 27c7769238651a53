use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced through the public contract.
///
/// The pipeline itself degrades rather than fails: malformed URLs proceed
/// with a sentinel identifier and metadata lookups fall back to synthesized
/// data. `NotFound` is the only condition callers are expected to handle.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Metadata lookup failed: {0}")]
    Lookup(String),
}
