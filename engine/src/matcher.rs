//! Contact Matcher: nearest eligible record under an eligibility mode.
//!

use acmi_formats::ObjectRec;

use crate::geo::dist_arr;
use crate::store::Store;

/// Acceptance threshold for `Parent` mode; `Impact` mode has none.
const PARENT_THRESHOLD_M: f64 = 200.0;

/// Recency window for `last_seen`; stationary, still-alive ground units are
/// exempt (they may not have reported in a while).
const RECENCY_WINDOW_S: f64 = 2.5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchMode {
    Impact,
    Parent,
}

fn accepted_colors<'a>(subject: &'a ObjectRec, mode: MatchMode) -> Vec<&'a str> {
    let color = subject.color.as_deref();
    match mode {
        MatchMode::Impact => {
            if color == Some("Blue") {
                vec!["Red"]
            } else {
                vec!["Blue"]
            }
        }
        MatchMode::Parent => match color {
            Some("Violet") => vec!["Red", "Blue", "Grey"],
            Some(c) => vec![c],
            None => vec![],
        },
    }
}

/// Find the nearest eligible contact for `subject` in `store`.
///
/// Returns `(tac_id, distance_m)` of the winner. `subject` must already
/// have `cart_coords` set (Velocity runs before the matcher on every
/// code path that calls it); a subject with no position cannot be matched
/// and yields `None`.
///
pub fn find_contact(subject: &ObjectRec, store: &Store, mode: MatchMode) -> Option<(u64, f64)> {
    if mode == MatchMode::Impact && !(subject.should_have_parent && subject.is_weapon) {
        return None;
    }

    let subject_pos = subject.cart_coords?;
    let accepted = accepted_colors(subject, mode);
    if accepted.is_empty() {
        return None;
    }

    let mut ids = Vec::new();
    let mut points = Vec::new();
    for n in store.values() {
        if !n.can_be_parent {
            continue;
        }
        if n.tac_id == subject.tac_id {
            continue;
        }
        let color_ok = n.color.as_deref().map(|c| accepted.contains(&c)).unwrap_or(false);
        if !color_ok {
            continue;
        }
        if mode == MatchMode::Impact && !n.is_air {
            continue;
        }
        let recent = n.last_seen >= subject.last_seen - RECENCY_WINDOW_S;
        let stationary_ground = n.is_ground && n.alive;
        if !(recent || stationary_ground) {
            continue;
        }
        if let Some(p) = n.cart_coords {
            ids.push(n.tac_id);
            points.push(p);
        }
    }

    if points.is_empty() {
        return None;
    }

    let dists = dist_arr(subject_pos, &points);
    let (winner, &best) = dists
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, d)| (i, d))?;

    if mode == MatchMode::Parent && best > PARENT_THRESHOLD_M {
        return None;
    }

    Some((ids[winner], best))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(tac_id: u64, color: &str, pos: (f64, f64, f64), last_seen: f64) -> ObjectRec {
        let mut r = ObjectRec::new(tac_id, 1, last_seen);
        r.type_ = Some("Air+FixedWing".to_string());
        r.color = Some(color.to_string());
        r.is_air = true;
        r.can_be_parent = true;
        r.cart_coords = Some(pos);
        r.last_seen = last_seen;
        r
    }

    fn weapon(tac_id: u64, color: &str, pos: (f64, f64, f64), last_seen: f64) -> ObjectRec {
        let mut r = ObjectRec::new(tac_id, 1, last_seen);
        r.type_ = Some("Weapon+Missile".to_string());
        r.color = Some(color.to_string());
        r.is_weapon = true;
        r.should_have_parent = true;
        r.can_be_parent = false;
        r.cart_coords = Some(pos);
        r.last_seen = last_seen;
        r
    }

    #[test]
    fn parent_match_within_threshold() {
        let mut store = Store::new();
        let parent = aircraft(1, "Red", (0.0, 0.0, 0.0), 10.0);
        store.get_or_create(1, 1, 0.0);
        *store.get_mut(1).unwrap() = parent;

        let child = weapon(2, "Red", (150.0, 0.0, 0.0), 10.0);

        let found = find_contact(&child, &store, MatchMode::Parent);
        let (id, d) = found.expect("expected a parent match");
        assert_eq!(id, 1);
        assert!((d - 150.0).abs() < 1e-6);
    }

    #[test]
    fn parent_rejected_beyond_threshold() {
        let mut store = Store::new();
        store.get_or_create(1, 1, 0.0);
        *store.get_mut(1).unwrap() = aircraft(1, "Red", (250.0, 0.0, 0.0), 10.0);

        let child = weapon(2, "Red", (0.0, 0.0, 0.0), 10.0);

        assert!(find_contact(&child, &store, MatchMode::Parent).is_none());
    }

    #[test]
    fn exactly_two_hundred_meters_is_accepted() {
        let mut store = Store::new();
        store.get_or_create(1, 1, 0.0);
        *store.get_mut(1).unwrap() = aircraft(1, "Red", (200.0, 0.0, 0.0), 10.0);

        let child = weapon(2, "Red", (0.0, 0.0, 0.0), 10.0);

        assert!(find_contact(&child, &store, MatchMode::Parent).is_some());
    }

    #[test]
    fn impact_matches_opposite_color_air_unit() {
        let mut store = Store::new();
        store.get_or_create(1, 1, 0.0);
        *store.get_mut(1).unwrap() = aircraft(1, "Blue", (50.0, 0.0, 0.0), 10.0);
        store.get_or_create(2, 1, 0.0);
        *store.get_mut(2).unwrap() = aircraft(2, "Red", (1_000.0, 0.0, 0.0), 10.0);

        let mut dying = weapon(3, "Red", (0.0, 0.0, 0.0), 10.0);
        dying.alive = false;

        let found = find_contact(&dying, &store, MatchMode::Impact);
        let (id, _) = found.expect("expected an impact match");
        assert_eq!(id, 1, "same-color candidate must be excluded");
    }

    #[test]
    fn non_weapon_subject_never_matches_in_impact_mode() {
        let store = Store::new();
        let plane = aircraft(1, "Red", (0.0, 0.0, 0.0), 10.0);
        assert!(find_contact(&plane, &store, MatchMode::Impact).is_none());
    }

    #[test]
    fn stale_ground_unit_is_still_eligible_if_alive() {
        let mut store = Store::new();
        let mut ground = aircraft(1, "Red", (10.0, 0.0, 0.0), 0.0);
        ground.is_air = false;
        ground.is_ground = true;
        ground.type_ = Some("Ground+Vehicle".to_string());
        store.get_or_create(1, 1, 0.0);
        *store.get_mut(1).unwrap() = ground;

        let mut child = weapon(2, "Red", (0.0, 0.0, 0.0), 100.0);
        child.should_have_parent = true;

        let found = find_contact(&child, &store, MatchMode::Parent);
        assert!(found.is_some(), "stale but alive ground unit must remain eligible");
    }
}
