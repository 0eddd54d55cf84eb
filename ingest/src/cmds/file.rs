//! `ingest file` — enrich a saved recording and write it to the sink.
//!

use acmi_sources::{ClickHouseSink, FileFeed, MemorySink};

use crate::cli::FileOpts;
use crate::config::IngestConfig;
use crate::error::Status;

use super::{drive, report};

#[tracing::instrument(skip(cfg))]
pub async fn run(cfg: &IngestConfig, opts: &FileOpts, dry_run: bool) -> eyre::Result<()> {
    let path = cfg.resolve_path(&opts.path);
    let mut feed = FileFeed::open(&path)?;

    if dry_run {
        let mut sink = MemorySink::new();
        let (stats, _session) = drive(&mut feed, &mut sink, opts.session_id).await?;
        report(&stats);
        println!("written={} (dry-run, in-memory)", sink.records().len());
    } else {
        let db = cfg.database.as_ref().ok_or(Status::NoDatabase)?;
        let mut sink = ClickHouseSink::connect(&db.url, &db.database, &db.user, &db.password, &db.table).await?;
        let (stats, _session) = drive(&mut feed, &mut sink, opts.session_id).await?;
        report(&stats);
    }

    Ok(())
}
