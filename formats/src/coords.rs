//! The `T=` coordinate grammar.
//!
//! The number of `|`-separated fields in a `T=` value disambiguates which
//! positional slots are present. This module only decodes the string into
//! typed, possibly-missing slots — the
//! delta-to-absolute fold for `lon`/`lat` is the caller's job (it needs the
//! session's [`crate::Reference`]).
//!

use crate::FormatsError;

/// One `T=...` value, decoded. Fields absent from the wire value (either
/// because the length variant doesn't carry them, or because the
/// positional slot was empty, e.g. `||`) are `None` and must be left
/// unchanged on the target record.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordFields {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub alt: Option<f64>,
    pub roll: Option<f64>,
    pub pitch: Option<f64>,
    pub yaw: Option<f64>,
    pub u_coord: Option<f64>,
    pub v_coord: Option<f64>,
    pub heading: Option<f64>,
}

/// Parse one `T=` value (without the `T=` prefix) into [`CoordFields`].
///
/// Returns [`FormatsError::BadCoordCount`] for any field count other than
/// the four documented variants, and [`FormatsError::BadFloat`] for a
/// non-empty, non-numeric positional field.
///
pub fn parse_coords(value: &str) -> Result<CoordFields, FormatsError> {
    let parts: Vec<&str> = value.split('|').collect();

    let field = |s: &str| -> Result<Option<f64>, FormatsError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| FormatsError::BadFloat(s.to_string()))
        }
    };

    let mut c = CoordFields::default();
    match parts.len() {
        9 => {
            c.lon = field(parts[0])?;
            c.lat = field(parts[1])?;
            c.alt = field(parts[2])?;
            c.roll = field(parts[3])?;
            c.pitch = field(parts[4])?;
            c.yaw = field(parts[5])?;
            c.u_coord = field(parts[6])?;
            c.v_coord = field(parts[7])?;
            c.heading = field(parts[8])?;
        }
        6 => {
            c.lon = field(parts[0])?;
            c.lat = field(parts[1])?;
            c.alt = field(parts[2])?;
            c.roll = field(parts[3])?;
            c.pitch = field(parts[4])?;
            c.yaw = field(parts[5])?;
        }
        5 => {
            c.lon = field(parts[0])?;
            c.lat = field(parts[1])?;
            c.alt = field(parts[2])?;
            c.u_coord = field(parts[3])?;
            c.v_coord = field(parts[4])?;
        }
        3 => {
            c.lon = field(parts[0])?;
            c.lat = field(parts[1])?;
            c.alt = field(parts[2])?;
        }
        n => return Err(FormatsError::BadCoordCount(n)),
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_nine_fields() {
        let c = parse_coords("1.0|2.0|100|3|4|5|0.1|0.2|90").unwrap();
        assert_eq!(c.lon, Some(1.0));
        assert_eq!(c.lat, Some(2.0));
        assert_eq!(c.alt, Some(100.0));
        assert_eq!(c.heading, Some(90.0));
    }

    #[test]
    fn three_fields() {
        let c = parse_coords("1.0|2.0|100").unwrap();
        assert_eq!(c.lon, Some(1.0));
        assert_eq!(c.lat, Some(2.0));
        assert_eq!(c.alt, Some(100.0));
        assert_eq!(c.roll, None);
    }

    #[test]
    fn missing_positional_field_stays_none() {
        let c = parse_coords("|3.0|50").unwrap();
        assert_eq!(c.lon, None);
        assert_eq!(c.lat, Some(3.0));
        assert_eq!(c.alt, Some(50.0));
    }

    #[test]
    fn bad_count_is_error() {
        let err = parse_coords("1.0|2.0").unwrap_err();
        assert_eq!(err, FormatsError::BadCoordCount(2));
    }

    #[test]
    fn bad_float_is_error() {
        let err = parse_coords("x|2.0|100").unwrap_err();
        assert!(matches!(err, FormatsError::BadFloat(_)));
    }
}
