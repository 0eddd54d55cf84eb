//! Drives a `Session` through a `ReferenceFeed` and into a `Sink`. This is
//! the glue connecting them; none of the enrichment logic lives here.
//!

use tracing::warn;

use acmi_engine::Session;
use acmi_sources::{ReferenceFeed, Sink};

pub mod file;
pub mod stats;
pub mod stream;

/// Counters for one `drive` run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub lines: usize,
    pub rejected: usize,
    pub impacts: usize,
}

/// Read every line `feed` yields, enrich it through a fresh `Session`, and
/// write every resulting record to `sink`. A malformed or out-of-order line
/// is logged and skipped; it never aborts the run.
///
#[tracing::instrument(skip(feed, sink))]
pub async fn drive<F, S>(feed: &mut F, sink: &mut S, session_id: i64) -> eyre::Result<(RunStats, Session)>
where
    F: ReferenceFeed,
    S: Sink,
{
    let mut session = Session::new(session_id);
    let mut stats = RunStats::default();

    while let Some(line) = feed.next_line().await? {
        stats.lines += 1;
        match session.process_line(&line) {
            Ok(outcome) => {
                if outcome.impact_detected {
                    stats.impacts += 1;
                }
                if let Some(rec) = outcome.record {
                    sink.write(&rec).await?;
                }
            }
            Err(e) => {
                warn!(error = %e, %line, "rejected malformed or out-of-order line");
                stats.rejected += 1;
            }
        }
    }

    Ok((stats, session))
}

pub fn report(stats: &RunStats) {
    println!(
        "lines={} rejected={} impacts={}",
        stats.lines, stats.rejected, stats.impacts
    );
}
