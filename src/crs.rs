//! Coordinate reference frame used to convert raw integer coordinates into
//! real-world units.

use crate::error::{DecodeError, Result};

/// Immutable descriptor of a table's coordinate reference system, as
/// extracted from Mobile Geodatabase metadata.
///
/// Constructed once per table and shared read-only across every decode call
/// on that table — `CRSFrame` holds no interior mutability and is `Copy`,
/// so it costs nothing to pass by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CRSFrame {
    x_origin: f64,
    y_origin: f64,
    z_origin: f64,
    xy_scale: f64,
    z_scale: f64,
}

impl CRSFrame {
    /// Builds a frame, rejecting non-positive scale factors.
    ///
    /// `xy_scale` and `z_scale` must be strictly positive: a zero or
    /// negative scale can never come from a valid table's metadata, so
    /// this is treated as a caller error rather than a malformed blob.
    pub fn new(
        x_origin: f64,
        y_origin: f64,
        z_origin: f64,
        xy_scale: f64,
        z_scale: f64,
    ) -> Result<Self> {
        if !(xy_scale > 0.0) {
            return Err(DecodeError::InvalidCrsFrame("xy_scale must be positive"));
        }
        if !(z_scale > 0.0) {
            return Err(DecodeError::InvalidCrsFrame("z_scale must be positive"));
        }
        Ok(CRSFrame {
            x_origin,
            y_origin,
            z_origin,
            xy_scale,
            z_scale,
        })
    }

    /// Converts a raw integer `x` into the frame's real-world units.
    ///
    /// The effective XY scale is `xy_scale * 2` — the format stores half
    /// the true scale, an empirical property of ST_Geometry metadata.
    pub fn real_x(&self, raw_x: i64) -> f64 {
        raw_x as f64 / (self.xy_scale * 2.0) + self.x_origin
    }

    /// Converts a raw integer `y` into the frame's real-world units.
    pub fn real_y(&self, raw_y: i64) -> f64 {
        raw_y as f64 / (self.xy_scale * 2.0) + self.y_origin
    }

    /// Converts a raw integer `z` into the frame's real-world units.
    pub fn real_z(&self, raw_z: i64) -> f64 {
        raw_z as f64 / self.z_scale + self.z_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_scale() {
        assert!(matches!(
            CRSFrame::new(0.0, 0.0, 0.0, 0.0, 1.0),
            Err(DecodeError::InvalidCrsFrame(_))
        ));
        assert!(matches!(
            CRSFrame::new(0.0, 0.0, 0.0, 1.0, -1.0),
            Err(DecodeError::InvalidCrsFrame(_))
        ));
    }

    #[test]
    fn transform_round_trips_within_one_unit() {
        let frame = CRSFrame::new(-20_037_700.0, -30_241_100.0, 0.0, 10_000.0, 1.0).unwrap();
        let raw_x: i64 = 138_461_522;
        let real_x = frame.real_x(raw_x);
        let back = (real_x - (-20_037_700.0)) * 10_000.0 * 2.0;
        assert!((back - raw_x as f64).abs() <= 1.0);
    }
}
