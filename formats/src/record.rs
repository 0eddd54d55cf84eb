//! The per-object record and its field-update operation.
//!

use std::collections::BTreeMap;

use serde::Serialize;

/// Sentinel used for `parent_dist`/`impacted_dist` before a match is found.
pub const NO_DIST: f64 = -1.0;

/// One tracked entity. Owned exclusively by the `Store` (`acmi-engine`);
/// every other component holds it by `tac_id` reference only.
///
/// Derives `Serialize` so a [`crate`] consumer (the sink collaborator) can
/// hand a snapshot of a record to a relational writer without borrowing
/// engine-internal state.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ObjectRec {
    // Identity
    pub tac_id: u64,
    /// Surrogate id assigned by the sink; 0 until assigned.
    pub id: u64,
    pub session_id: i64,

    // Timing
    pub first_seen: f64,
    pub last_seen: f64,
    pub secs_since_last_seen: f64,
    pub updates: u32,

    // Descriptors
    pub name: Option<String>,
    pub type_: Option<String>,
    pub color: Option<String>,
    pub country: Option<String>,
    pub coalition: Option<String>,
    pub pilot: Option<String>,
    pub grp: Option<String>,

    // Geometry
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub u_coord: f64,
    pub v_coord: f64,
    pub heading: f64,
    pub cart_coords: Option<(f64, f64, f64)>,

    // Derived flags
    pub alive: bool,
    pub written: bool,
    pub can_be_parent: bool,
    pub should_have_parent: bool,
    pub is_weapon: bool,
    pub is_ground: bool,
    pub is_air: bool,

    // Associations
    pub parent: Option<u64>,
    pub parent_dist: f64,
    pub impacted: Option<u64>,
    pub impacted_dist: f64,

    pub velocity_kts: f64,

    /// Descriptor keys the classifier doesn't recognise, kept verbatim for
    /// forward compatibility.
    pub extra: BTreeMap<String, String>,
}

impl ObjectRec {
    /// A freshly-created record as seen for the first time at `now`
    /// (`Reference::time_offset`). Matches the documented defaults:
    /// `alt` defaults to `1.0` (so altitude-less ships sort sanely),
    /// `alive = true`, `updates = 1`, distances unset (`NO_DIST`).
    ///
    pub fn new(tac_id: u64, session_id: i64, now: f64) -> Self {
        ObjectRec {
            tac_id,
            session_id,
            first_seen: now,
            last_seen: now,
            updates: 1,
            alt: 1.0,
            alive: true,
            parent_dist: NO_DIST,
            impacted_dist: NO_DIST,
            ..Default::default()
        }
    }

    /// Apply one `KEY=VALUE` chunk from the tail of an update line.
    /// Coordinate-shaped keys (`Lat`, `Lon`, `Alt`,
    /// `Roll`, `Pitch`, `Yaw`, `U`, `V`) are parsed as absolute floats;
    /// `Group` is stored as [`ObjectRec::grp`]; everything else is matched
    /// case-sensitively against the descriptor set, or falls through to
    /// [`ObjectRec::extra`] so an unknown key never aborts the stream.
    ///
    /// `Lat`/`Lon` set here are treated as already-absolute: the delta fold
    /// only applies to the `T=` chunk, which is parsed through
    /// [`crate::parse_coords`], not through this dispatch.
    ///
    pub fn apply_kv(&mut self, key: &str, value: &str) {
        match key {
            "Lat" => {
                if let Ok(v) = value.parse() {
                    self.lat = v;
                }
            }
            "Lon" => {
                if let Ok(v) = value.parse() {
                    self.lon = v;
                }
            }
            "Alt" => {
                if let Ok(v) = value.parse() {
                    self.alt = v;
                }
            }
            "Roll" => {
                if let Ok(v) = value.parse() {
                    self.roll = v;
                }
            }
            "Pitch" => {
                if let Ok(v) = value.parse() {
                    self.pitch = v;
                }
            }
            "Yaw" => {
                if let Ok(v) = value.parse() {
                    self.yaw = v;
                }
            }
            "U" => {
                if let Ok(v) = value.parse() {
                    self.u_coord = v;
                }
            }
            "V" => {
                if let Ok(v) = value.parse() {
                    self.v_coord = v;
                }
            }
            "Group" => self.grp = Some(value.to_string()),
            "Name" => self.name = Some(value.to_string()),
            "Type" => self.type_ = Some(value.to_string()),
            "Color" => self.color = Some(value.to_string()),
            "Country" => self.country = Some(value.to_string()),
            "Coalition" => self.coalition = Some(value.to_string()),
            "Pilot" => self.pilot = Some(value.to_string()),
            other => {
                self.extra.insert(other.to_string(), value.to_string());
            }
        }
    }
}
