//! The ACMI stream enrichment core.
//!
//! Line parsing, the object store, the geodesic transform, velocity and
//! contact matching live here. Everything a surrounding driver needs is
//! reachable through [`Session`]; the individual components are public so
//! a driver (or a test) can exercise them in isolation.
//!

pub use error::EngineError;
pub use geo::{dist, dist_arr, to_ecef, Ecef};
pub use line_parser::{process_line, LineOutcome};
pub use matcher::{find_contact, MatchMode};
pub use session::Session;
pub use store::Store;
pub use velocity::update_velocity;

mod error;
mod geo;
mod line_parser;
mod matcher;
mod session;
mod store;
mod velocity;
