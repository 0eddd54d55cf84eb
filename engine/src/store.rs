//! Process-wide tac_id → record mapping.
//!

use std::collections::HashMap;

use acmi_formats::ObjectRec;

/// Owns every [`ObjectRec`] seen during a session. Records are never
/// evicted: parent/impact matching needs historical presence, so the Store
/// only grows.
///
#[derive(Debug, Default)]
pub struct Store {
    objects: HashMap<u64, ObjectRec>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the record for `tac_id`, creating it with [`ObjectRec::new`] if
    /// this is the first sighting. Returns the record and whether it was
    /// just created.
    ///
    pub fn get_or_create(&mut self, tac_id: u64, session_id: i64, now: f64) -> (&mut ObjectRec, bool) {
        let mut created = false;
        let rec = self.objects.entry(tac_id).or_insert_with(|| {
            created = true;
            ObjectRec::new(tac_id, session_id, now)
        });
        (rec, created)
    }

    pub fn get(&self, tac_id: u64) -> Option<&ObjectRec> {
        self.objects.get(&tac_id)
    }

    pub fn get_mut(&mut self, tac_id: u64) -> Option<&mut ObjectRec> {
        self.objects.get_mut(&tac_id)
    }

    pub fn values(&self) -> impl Iterator<Item = &ObjectRec> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
