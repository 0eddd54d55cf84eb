//! Session-wide reference state.
//!

use chrono::{DateTime, Utc};

/// Session-wide state carried by header (`0,KEY=VALUE`) and time-advance
/// (`#...`) lines.
///
/// All per-record latitudes and longitudes in the stream are deltas from
/// [`Reference::lat`]/[`Reference::lon`]; the line parser adds them before
/// storing an absolute position on an [`crate::ObjectRec`].
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reference {
    pub session_id: i64,
    pub file_version: f64,
    pub title: Option<String>,
    pub datasource: Option<String>,
    pub author: Option<String>,
    pub client_version: Option<String>,
    pub status: Option<String>,

    /// Reference latitude, degrees. Absolute once set.
    pub lat: f64,
    /// Reference longitude, degrees. Absolute once set.
    pub lon: f64,
    lat_set: bool,
    lon_set: bool,

    /// Wall-clock offset from the recording's origin, advanced by `#` lines.
    pub time_offset: f64,
    /// Delta between the two most recent `#` updates.
    pub time_since_last: f64,

    pub start_time: Option<DateTime<Utc>>,
}

impl Reference {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `lat`, `lon` and `start_time` have all been observed.
    ///
    pub fn all_refs(&self) -> bool {
        self.lat_set && self.lon_set && self.start_time.is_some()
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.lat = lat;
        self.lat_set = true;
    }

    pub fn set_lon(&mut self, lon: f64) {
        self.lon = lon;
        self.lon_set = true;
    }

    pub fn set_start_time(&mut self, t: DateTime<Utc>) {
        self.start_time = Some(t);
    }

    /// Advance `time_offset` to `new_offset`, updating `time_since_last`.
    ///
    /// `time_offset` is monotonically non-decreasing within a well-formed
    /// stream; this is not enforced here (a driver that wants to reject
    /// out-of-order `#` lines can check `time_since_last >= 0.0` itself).
    ///
    pub fn advance_time(&mut self, new_offset: f64) {
        self.time_since_last = new_offset - self.time_offset;
        self.time_offset = new_offset;
    }
}
