//! External collaborators the enrichment core is deliberately blind to:
//! where lines come from, and where enriched records go.
//!

pub use error::SourcesError;
pub use feed::{FileFeed, ReferenceFeed, TcpFeed};
pub use sink::{ClickHouseSink, MemorySink, Sink};

mod error;
mod feed;
mod sink;
