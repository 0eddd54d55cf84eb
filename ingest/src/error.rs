//! CLI-level failures that aren't already covered by `acmi-engine`'s
//! `EngineError` or `acmi-sources`'s `SourcesError`.
//!

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Status {
    #[error("no database configured; set [database] in the config file or pass --dry-run")]
    NoDatabase,
    #[error("no tacview host configured; pass an address or set [tacview] in the config file")]
    NoTacviewHost,
    #[error("{0} lines were rejected while enriching {1}")]
    RejectedLines(usize, String),
}
