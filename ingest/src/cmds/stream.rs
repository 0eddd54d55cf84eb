//! `ingest stream` — enrich a live Tacview real-time telemetry stream.
//!

use acmi_sources::{ClickHouseSink, MemorySink, TcpFeed};

use crate::cli::StreamOpts;
use crate::config::IngestConfig;
use crate::error::Status;

use super::{drive, report};

#[tracing::instrument(skip(cfg))]
pub async fn run(cfg: &IngestConfig, opts: &StreamOpts, dry_run: bool) -> eyre::Result<()> {
    let addr = match &opts.addr {
        Some(a) => a.clone(),
        None => {
            let tv = cfg.tacview.as_ref().ok_or(Status::NoTacviewHost)?;
            format!("{}:{}", tv.host, tv.port)
        }
    };

    let mut feed = TcpFeed::connect(&addr, &opts.client_name).await?;

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
