//! Decode one ACMI text line into Store mutations.
//!

use acmi_formats::{can_be_parent, classify, parse_coords, should_have_parent, Category, ObjectRec, Reference};
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{trace, warn};

use crate::error::EngineError;
use crate::matcher::{self, MatchMode};
use crate::store::Store;
use crate::velocity;

/// The outcome of processing one line.
///
/// `record` is populated only for update/death lines; time-advance and
/// header lines carry no per-object result.
#[derive(Clone, Debug, Default)]
pub struct LineOutcome {
    pub record: Option<ObjectRec>,
    pub impact_detected: bool,
}

/// Process one already-trimmed line of the stream.
///
#[tracing::instrument(skip(reference, store))]
pub fn process_line(line: &str, reference: &mut Reference, store: &mut Store) -> Result<LineOutcome, EngineError> {
    if let Some(tail) = line.strip_prefix('#') {
        let offset: f64 = tail
            .parse()
            .map_err(|_| EngineError::BadKeyValue(tail.to_string()))?;
        reference.advance_time(offset);
        return Ok(LineOutcome::default());
    }

    if let Some(hex) = line.strip_prefix('-') {
        return process_death(hex, reference, store);
    }

    if let Some(rest) = line.strip_prefix("0,") {
        process_header(rest, reference)?;
        return Ok(LineOutcome::default());
    }

    process_update(line, reference, store)
}

fn split_kv(chunk: &str) -> Result<(&str, &str), EngineError> {
    chunk
        .split_once('=')
        .ok_or_else(|| EngineError::BadKeyValue(chunk.to_string()))
}

fn process_header(rest: &str, reference: &mut Reference) -> Result<(), EngineError> {
    for chunk in rest.split(',') {
        if chunk.is_empty() {
            continue;
        }
        let (key, value) = split_kv(chunk)?;
        match key {
            "ReferenceLatitude" => {
                let v: f64 = value.parse().map_err(|_| EngineError::BadKeyValue(chunk.to_string()))?;
                reference.set_lat(v);
            }
            "ReferenceLongitude" => {
                let v: f64 = value.parse().map_err(|_| EngineError::BadKeyValue(chunk.to_string()))?;
                reference.set_lon(v);
            }
            "ReferenceTime" | "RecordingTime" => {
                let dt: DateTime<Utc> = DateTime::parse_from_rfc3339(value)
                    .map_err(|_| EngineError::BadTimestamp(value.to_string()))?
                    .with_timezone(&Utc)
                    .trunc_subsecs(0);
                reference.set_start_time(dt);
            }
            "DataSource" => reference.datasource = Some(value.to_string()),
            "Title" => reference.title = Some(value.to_string()),
            "Author" => reference.author = Some(value.to_string()),
            "FileVersion" => {
                if let Ok(v) = value.parse() {
                    reference.file_version = v;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn process_death(hex: &str, reference: &Reference, store: &mut Store) -> Result<LineOutcome, EngineError> {
    let tac_id = u64::from_str_radix(hex, 16).map_err(|_| EngineError::BadTacId(hex.to_string()))?;

    let Some(existing) = store.get(tac_id) else {
        warn!(tac_id, "death marker for an id never seen before");
        return Err(EngineError::UnknownDeathTarget(tac_id));
    };

    let mut subject = existing.clone();
    subject.alive = false;
    subject.updates += 1;

    let outcome = matcher::find_contact(&subject, store, MatchMode::Impact);
    let impact_detected = outcome.is_some();
    if let Some((winner, d)) = outcome {
        trace!(tac_id, winner, dist = d, "impact recorded");
        subject.impacted = Some(winner);
        subject.impacted_dist = d;
    }

    if let Some(rec) = store.get_mut(tac_id) {
        *rec = subject.clone();
    }

    Ok(LineOutcome {
        record: Some(subject),
        impact_detected,
    })
}

fn process_update(line: &str, reference: &Reference, store: &mut Store) -> Result<LineOutcome, EngineError> {
    let mut parts = line.splitn(2, ',');
    let id_token = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default();

    let tac_id = u64::from_str_radix(id_token, 16).map_err(|_| EngineError::BadTacId(id_token.to_string()))?;

    if !reference.all_refs() {
        return Err(EngineError::MissingReference);
    }

    let mut chunks = rest.split(',');
    let t_chunk = chunks.next().unwrap_or_default();
    let t_value = t_chunk
        .strip_prefix("T=")
        .ok_or_else(|| EngineError::BadKeyValue(t_chunk.to_string()))?;
    let coords = parse_coords(t_value)?;

    let kv_tail: Vec<(&str, &str)> = chunks.map(split_kv).collect::<Result<_, _>>()?;

    let now = reference.time_offset;
    let (rec, is_new) = store.get_or_create(tac_id, reference.session_id, now);
    if !is_new {
        rec.secs_since_last_seen = now - rec.last_seen;
        rec.last_seen = now;
        rec.updates += 1;
    }

    if let Some(d) = coords.lon {
        rec.lon = reference.lon + d;
    }
    if let Some(d) = coords.lat {
        rec.lat = reference.lat + d;
    }
    if let Some(v) = coords.alt {
        rec.alt = v;
    }
    if let Some(v) = coords.roll {
        rec.roll = v;
    }
    if let Some(v) = coords.pitch {
        rec.pitch = v;
    }
    if let Some(v) = coords.yaw {
        rec.yaw = v;
    }
    if let Some(v) = coords.u_coord {
        rec.u_coord = v;
    }
    if let Some(v) = coords.v_coord {
        rec.v_coord = v;
    }
    if let Some(v) = coords.heading {
        rec.heading = v;
    }

    for (key, value) in kv_tail {
        rec.apply_kv(key, value);
    }

    if rec.updates == 1 {
        if let Some(type_str) = rec.type_.clone() {
            let category = classify(&type_str);
            rec.is_weapon = category == Category::Weapon;
            rec.is_ground = category == Category::Ground;
            rec.is_air = category == Category::Air;
            rec.can_be_parent = can_be_parent(&type_str);
            rec.should_have_parent = should_have_parent(&type_str);
        }
    }

    velocity::update_velocity(rec);

    let run_parent_match = rec.updates == 1 && rec.should_have_parent;
    let subject_snapshot = rec.clone();

    if run_parent_match {
        if let Some((winner, d)) = matcher::find_contact(&subject_snapshot, store, MatchMode::Parent) {
            if let Some(rec) = store.get_mut(tac_id) {
                rec.parent = Some(winner);
                rec.parent_dist = d;
            }
        }
    }

    let final_rec = store.get(tac_id).cloned();
    Ok(LineOutcome {
        record: final_rec,
        impact_detected: false,
    })
}
