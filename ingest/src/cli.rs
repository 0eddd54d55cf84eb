//! Command-line surface for `ingest`.
//!

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};
use clap_complete::Shell;

#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// Alternate config file path (default: the OS config directory's `acmi.hcl`).
    #[clap(short = 'c', long)]
    pub config: Option<String>,
    /// Enrich but do not write to the configured sink (records stay in memory).
    #[clap(short = 'n', long)]
    pub dry_run: bool,
    /// Use the hierarchical tree logger instead of plain `tracing` output.
    #[clap(short = 't', long)]
    pub use_tree: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Enrich a saved `.acmi`/`.zip.acmi` recording and write it to the sink.
    File(FileOpts),
    /// Enrich a live Tacview real-time telemetry stream.
    Stream(StreamOpts),
    /// Enrich a recording in memory and print summary counters, no sink required.
    Stats(FileOpts),
    /// Generate shell completion script.
    Completion(CompletionOpts),
}

#[derive(Debug, Parser)]
pub struct FileOpts {
    /// Path to the recording, or a bare filename resolved under the
    /// configured datalake directory.
    pub path: String,
    /// Session id recorded on every enriched object.
    #[clap(long, default_value_t = 1)]
    pub session_id: i64,
}

#[derive(Debug, Parser)]
pub struct StreamOpts {
    /// `host:port` of the Tacview real-time telemetry server; falls back to
    /// the configured default when omitted.
    pub addr: Option<String>,
    /// Client nickname announced during the handshake.
    #[clap(long, default_value = "acmi-ingest")]
    pub client_name: String,
    #[clap(long, default_value_t = 1)]
    pub session_id: i64,
}

#[derive(Debug, Parser)]
pub struct CompletionOpts {
    /// Shell to generate a completion script for.
    pub shell: Shell,
}
