//! Configuration and runtime context.
//!

use serde::Deserialize;

use acmi_common::Versioned;

/// `acmi.hcl` config filename, looked up under the OS config directory
/// unless `-c`/`--config` gives an explicit path.
pub const CONFIG_FILE: &str = "acmi.hcl";

/// Current on-disk config version this binary understands.
pub const CVERSION: usize = 1;

#[derive(Debug, Default, Deserialize)]
pub struct IngestConfig {
    pub version: usize,
    pub database: Option<DatabaseConfig>,
    /// Base directory under which a bare filename is resolved.
    pub datalake: Option<String>,
    pub tacview: Option<TacviewConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Table enriched records are inserted into.
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "objects".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct TacviewConfig {
    pub host: String,
    pub port: u16,
}

impl Versioned for IngestConfig {
    fn version(&self) -> usize {
        self.version
    }
}

impl IngestConfig {
    /// Resolve `path` against `datalake` when it is a bare filename with no
    /// directory component.
    pub fn resolve_path(&self, path: &str) -> String {
        let has_dir = path.contains(std::path::MAIN_SEPARATOR) || path.contains('/');
        match (&self.datalake, has_dir) {
            (Some(dir), false) => format!("{dir}/{path}"),
            _ => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("/data/acmi"), "flight1.acmi", "/data/acmi/flight1.acmi")]
    #[case(Some("/data/acmi"), "sub/flight1.acmi", "sub/flight1.acmi")]
    #[case(None, "flight1.acmi", "flight1.acmi")]
    fn resolve_path_only_prefixes_bare_filenames(#[case] datalake: Option<&str>, #[case] path: &str, #[case] expected: &str) {
        let cfg = IngestConfig {
            datalake: datalake.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_path(path), expected);
    }
}
