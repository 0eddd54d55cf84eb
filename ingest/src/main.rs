//! # ingest
//!
//! Command-line driver for the ACMI stream enrichment engine. Reads a
//! saved recording or a live Tacview real-time telemetry stream, enriches
//! every object through `acmi-engine`, and writes the result to the
//! configured ClickHouse sink (or keeps it in memory with `--dry-run`).
//!

use std::io;

use clap::{crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::trace;

use acmi_common::{init_logging, ConfigEngine};

use crate::cli::{CompletionOpts, Opts, SubCommand};
use crate::config::{IngestConfig, CONFIG_FILE, CVERSION};

mod cli;
mod cmds;
mod config;
mod error;

/// Binary name.
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version.
pub const VERSION: &str = crate_version!();

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.use_tree)?;

    match &opts.subcmd {
        SubCommand::Completion(CompletionOpts { shell }) => {
            let mut cmd = Opts::command();
            generate(*shell, &mut cmd, NAME, &mut io::stdout());
            return Ok(());
        }
        SubCommand::Stats(fopts) => {
            // `stats` never touches the database, so it tolerates a
            // missing config file.
            let cfg = load_config(&opts).unwrap_or_default();
            return cmds::stats::run(&cfg, fopts).await;
        }
        _ => {}
    }

    let cfg = load_config(&opts)?;

    trace!(binary = NAME, version = VERSION, "starting");
    match &opts.subcmd {
        SubCommand::File(fopts) => cmds::file::run(&cfg, fopts, opts.dry_run).await,
        SubCommand::Stream(sopts) => cmds::stream::run(&cfg, sopts, opts.dry_run).await,
        SubCommand::Stats(_) | SubCommand::Completion(_) => unreachable!("handled above"),
    }
}

fn load_config(opts: &Opts) -> Result<IngestConfig> {
    match &opts.config {
        // `-c` names a config file directly; split it into directory + name
        // for `ConfigEngine`, which always looks up a name under a directory.
        Some(path) => {
            let p = std::path::Path::new(path);
            let dir = p.parent().filter(|d| !d.as_os_str().is_empty()).map(|d| d.to_string_lossy().to_string());
            let name = p.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| CONFIG_FILE.to_string());
            ConfigEngine::<IngestConfig>::load(dir.as_deref(), &name, CVERSION)
        }
        None => ConfigEngine::<IngestConfig>::load(None, CONFIG_FILE, CVERSION),
    }
}
