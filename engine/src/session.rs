//! The enrichment session: the explicit, owned replacement for a
//! module-scope object store.
//!

use acmi_formats::{ObjectRec, Reference};

use crate::error::EngineError;
use crate::line_parser::{self, LineOutcome};
use crate::store::Store;

/// Owns the [`Reference`] and [`Store`] for one recording session and is
/// the sole entry point external collaborators drive a line stream
/// through. Nothing about parsing, velocity or matching reaches outside
/// this object; a caller only ever sees [`LineOutcome`].
///
pub struct Session {
    reference: Reference,
    store: Store,
}

impl Session {
    pub fn new(session_id: i64) -> Self {
        let mut reference = Reference::new();
        reference.session_id = session_id;
        Self {
            reference,
            store: Store::new(),
        }
    }

    /// Feed one already-trimmed line through the engine.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, EngineError> {
        line_parser::process_line(line, &mut self.reference, &mut self.store)
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn get(&self, tac_id: u64) -> Option<&ObjectRec> {
        self.store.get(tac_id)
    }

    /// Every record observed so far, live or dead, in Store iteration order.
    pub fn records(&self) -> impl Iterator<Item = &ObjectRec> {
        self.store.values()
    }

    pub fn object_count(&self) -> usize {
        self.store.len()
    }
}
