//! `ingest stats` — enrich a recording in memory and print summary counters.
//! Needs no sink configuration, so it works without a config file present.
//!

use acmi_sources::{FileFeed, MemorySink};

use crate::cli::FileOpts;
use crate::config::IngestConfig;

use super::{drive, report};

#[tracing::instrument(skip(cfg))]
pub async fn run(cfg: &IngestConfig, opts: &FileOpts) -> eyre::Result<()> {
    let path = cfg.resolve_path(&opts.path);
    let mut feed = FileFeed::open(&path)?;
    let mut sink = MemorySink::new();

    let (stats, session) = drive(&mut feed, &mut sink, opts.session_id).await?;
    report(&stats);

    let weapons = session.records().filter(|r| r.is_weapon).count();
    let ground = session.records().filter(|r| r.is_ground).count();
    let air = session.records().filter(|r| r.is_air).count();
    let with_parent = session.records().filter(|r| r.parent.is_some()).count();
    let with_impact = session.records().filter(|r| r.impacted.is_some()).count();

    println!("objects={}", session.object_count());
    println!("weapon={weapons} ground={ground} air={air}");
    println!("parented={with_parent} impacted={with_impact}");

    Ok(())
}
