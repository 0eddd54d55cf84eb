//! Velocity computation.
//!

use acmi_formats::ObjectRec;

use crate::geo::{dist, to_ecef};

/// Knots per meter/second (a knot is 1852/3600 m/s).
const MPS_TO_KNOTS: f64 = 1.94384;

/// Recompute `r.cart_coords` from its current `lat/lon/alt`, and update
/// `r.velocity_kts` if a velocity could be computed from the previous
/// position.
///
/// A prior non-zero velocity is never overwritten by a computed zero or by
/// "uncomputed" (no prior position, or a zero time delta) — the caller may
/// be re-observing a record that has momentarily stalled in the stream.
///
pub fn update_velocity(r: &mut ObjectRec) {
    let new_ecef = to_ecef(r.lat, r.lon, r.alt);

    let computed = if let (Some(prev), true) = (r.cart_coords, r.secs_since_last_seen > 0.0) {
        let d = dist(new_ecef, prev);
        Some((d / r.secs_since_last_seen) / MPS_TO_KNOTS)
    } else {
        None
    };

    r.cart_coords = Some(new_ecef);

    if let Some(v) = computed {
        if v != 0.0 {
            r.velocity_kts = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_sets_position_without_velocity() {
        let mut r = ObjectRec::new(0x102, 1, 0.0);
        r.lon = 1.0;
        r.lat = 2.0;
        r.alt = 100.0;
        update_velocity(&mut r);

        assert!(r.cart_coords.is_some());
        assert_eq!(r.velocity_kts, 0.0);
    }

    #[test]
    fn second_sighting_computes_knots() {
        let mut r = ObjectRec::new(0x102, 1, 0.0);
        r.lon = 1.0;
        r.lat = 2.0;
        r.alt = 100.0;
        update_velocity(&mut r);

        r.alt = 200.0;
        r.secs_since_last_seen = 1.0;
        update_velocity(&mut r);

        assert!((r.velocity_kts - 51.44).abs() < 0.1);
    }

    #[test]
    fn zero_time_delta_leaves_velocity_unchanged() {
        let mut r = ObjectRec::new(0x102, 1, 0.0);
        update_velocity(&mut r);
        r.velocity_kts = 12.0;

        r.lat = 5.0;
        r.secs_since_last_seen = 0.0;
        update_velocity(&mut r);

        assert_eq!(r.velocity_kts, 12.0);
    }

    #[test]
    fn computed_zero_does_not_clobber_prior_nonzero() {
        let mut r = ObjectRec::new(0x102, 1, 0.0);
        update_velocity(&mut r);
        r.velocity_kts = 42.0;

        r.secs_since_last_seen = 1.0;
        update_velocity(&mut r);

        assert_eq!(r.velocity_kts, 42.0, "same position must compute a zero delta");
    }
}
