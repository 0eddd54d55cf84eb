use thiserror::Error;

/// Errors raised while decoding the ACMI wire grammar.
///
#[derive(Debug, Error, PartialEq)]
pub enum FormatsError {
    #[error("unexpected coordinate field count: {0}")]
    BadCoordCount(usize),
    #[error("invalid float in coordinate field: {0}")]
    BadFloat(String),
    #[error("invalid hex tac_id: {0}")]
    BadTacId(String),
    #[error("key/value chunk missing '=': {0}")]
    BadKeyValue(String),
}
