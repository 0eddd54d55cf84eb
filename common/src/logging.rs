//! Common logging initialiser.
//!

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Initialise `tracing` for a binary: an `RUST_LOG`-driven filter, plus an
/// optional hierarchical layer for interactive terminals.
///
#[tracing::instrument]
pub fn init_logging(use_tree: bool) -> eyre::Result<()> {
    let filter = EnvFilter::from_default_env();

    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_span_retrace(true)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    tracing_subscriber::registry().with(filter).with(tree).init();
    Ok(())
}
