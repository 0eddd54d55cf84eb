use thiserror::Error;

/// Common configuration/runtime errors shared by binaries linking against this crate.
///
#[derive(Debug, Error)]
pub enum Status {
    #[error("Missing configuration file, use -c or create {0}")]
    MissingConfig(String),
    #[error("Bad config file version, expected {0}")]
    BadFileVersion(usize),
    #[error("Error reading configuration parameter: {0}")]
    MissingConfigParameter(String),
}
