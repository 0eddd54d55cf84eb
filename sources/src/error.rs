use thiserror::Error;

/// Errors raised by the feed and sink collaborators.
///
#[derive(Debug, Error)]
pub enum SourcesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("database error: {0}")]
    Database(#[from] klickhouse::KlickhouseError),

    #[error("the archive {0:?} has no .acmi member")]
    NoAcmiMember(String),
}
