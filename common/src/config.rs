//! Configuration loading.
//!
//! This is a configuration file/struct neutral loading engine: it only
//! knows the base directory and a filename, and `load()` reads either the
//! file it is given or the default one for the platform.
//!

use std::fmt::Debug;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::Status;

/// Directory tag under the OS config root, e.g. `~/.config/acmi-enrich` on Unix.
const TAG: &str = "acmi-enrich";

/// Implemented by every config struct so [`ConfigEngine`] can check the
/// on-disk version against the value the binary was compiled with.
///
pub trait Versioned {
    fn version(&self) -> usize;
}

/// Loads a `T: Versioned` from an HCL file, falling back to the OS default
/// config path when no explicit path is given.
///
#[derive(Debug)]
pub struct ConfigEngine<T> {
    basedir: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigEngine<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    fn new() -> Self {
        let basedir = match BaseDirs::new() {
            Some(base) => base.config_local_dir().join(TAG),
            None => PathBuf::from(".").join(TAG),
        };
        ConfigEngine {
            basedir,
            _marker: PhantomData,
        }
    }

    /// Returns the default config directory for the current platform.
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the default config file path (`<config_path>/<name>`).
    ///
    pub fn default_file(&self, name: &str) -> PathBuf {
        self.config_path().join(name)
    }

    /// Load `name` from `dir`, or the default location if `dir` is `None`.
    ///
    #[tracing::instrument(skip(expect_version))]
    pub fn load(dir: Option<&str>, name: &str, expect_version: usize) -> eyre::Result<T> {
        trace!("loading config {name}");

        let eng = ConfigEngine::<T>::new();
        let fname = match dir {
            Some(dir) => PathBuf::from(dir).join(name),
            None => eng.default_file(name),
        };

        if !fname.exists() {
            return Err(Status::MissingConfig(fname.to_string_lossy().to_string()).into());
        }

        let data = fs::read_to_string(&fname)?;
        debug!("raw config = {data}");

        let cfg: T = hcl::from_str(&data)?;
        if cfg.version() != expect_version {
            return Err(Status::BadFileVersion(expect_version).into());
        }
        Ok(cfg)
    }
}
