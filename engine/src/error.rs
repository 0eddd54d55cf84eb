use acmi_formats::FormatsError;
use thiserror::Error;

/// Errors raised while driving one line through the enrichment engine.
///
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Format(#[from] FormatsError),

    #[error("malformed tac_id {0:?}: not a base-16 integer")]
    BadTacId(String),

    #[error("key/value chunk missing '=': {0:?}")]
    BadKeyValue(String),

    #[error("update line arrived before the reference header was complete")]
    MissingReference,

    #[error("invalid reference timestamp: {0:?}")]
    BadTimestamp(String),

    #[error("death marker references unknown tac_id {0:#x}")]
    UnknownDeathTarget(u64),
}
