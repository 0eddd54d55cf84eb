//! The relational sink: where enriched records go once the core is done
//! with them.
//!

use acmi_formats::ObjectRec;
use klickhouse::{Client, ClientOptions, QueryBuilder};
use tracing::trace;

use crate::error::SourcesError;

/// Destination for enriched [`ObjectRec`] values. The core never generates
/// a surrogate `id`; a `Sink` implementation owns that (and the mapping of
/// `parent`/`impacted` tac_ids to its own identifier space, if it keeps
/// one separate from tac_id).
///
#[allow(async_fn_in_trait)]
pub trait Sink {
    async fn write(&mut self, rec: &ObjectRec) -> Result<(), SourcesError>;
}

/// An in-memory sink, useful for tests and for `acmi-ingest stats`.
///
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<ObjectRec>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ObjectRec] {
        &self.records
    }
}

impl Sink for MemorySink {
    async fn write(&mut self, rec: &ObjectRec) -> Result<(), SourcesError> {
        self.records.push(rec.clone());
        Ok(())
    }
}

/// Writes enriched records to a ClickHouse table.
///
#[derive(Debug)]
pub struct ClickHouseSink {
    client: Client,
    table: String,
}

impl ClickHouseSink {
    #[tracing::instrument(skip(password))]
    pub async fn connect(url: &str, database: &str, user: &str, password: &str, table: &str) -> Result<Self, SourcesError> {
        let client = Client::connect(
            url,
            ClientOptions {
                username: user.to_string(),
                password: password.to_string(),
                default_database: database.to_string(),
                ..Default::default()
            },
        )
        .await?;

        Ok(ClickHouseSink {
            client,
            table: table.to_string(),
        })
    }
}

impl Sink for ClickHouseSink {
    #[tracing::instrument(skip(self, rec), fields(tac_id = rec.tac_id))]
    async fn write(&mut self, rec: &ObjectRec) -> Result<(), SourcesError> {
        let q = QueryBuilder::new(&format!(
            "INSERT INTO {} \
             (tac_id, session_id, name, type, color, country, coalition, pilot, \
              lat, lon, alt, velocity_kts, parent, parent_dist, impacted, impacted_dist, \
              alive, updates, first_seen, last_seen) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)",
            self.table
        ))
        .arg(rec.tac_id as i64)
        .arg(rec.session_id)
        .arg(rec.name.clone().unwrap_or_default())
        .arg(rec.type_.clone().unwrap_or_default())
        .arg(rec.color.clone().unwrap_or_default())
        .arg(rec.country.clone().unwrap_or_default())
        .arg(rec.coalition.clone().unwrap_or_default())
        .arg(rec.pilot.clone().unwrap_or_default())
        .arg(rec.lat)
        .arg(rec.lon)
        .arg(rec.alt)
        .arg(rec.velocity_kts)
        .arg(rec.parent.map(|p| p as i64).unwrap_or(-1))
        .arg(rec.parent_dist)
        .arg(rec.impacted.map(|p| p as i64).unwrap_or(-1))
        .arg(rec.impacted_dist)
        .arg(rec.alive as u8)
        .arg(rec.updates)
        .arg(rec.first_seen)
        .arg(rec.last_seen);

        trace!("inserting into {}", self.table);
        self.client.query(q).execute().await?;
        Ok(())
    }
}
