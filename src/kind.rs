//! Classification of the `geom_flags` varint into a shape and modifiers.

use crate::error::{DecodeError, Result};

/// The shape encoded in the lower 4 bits of `geom_flags`.
///
/// Whether a `Polyline` ends up a `LineString` or `MultiLineString`, and
/// whether a `Polygon` ends up single-ring or multi-ring, is decided later
/// by [`crate::parser`] after segmentation — this enum only carries the
/// coarse classification the flag byte itself encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Point,
    MultiPoint,
    Polyline,
    Polygon,
}

/// Bit 6 of `geom_flags` marks the presence of a Z value stream.
const HAS_Z_FLAG: u64 = 0x40;

/// Parsed classification of a `geom_flags` varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryKind {
    pub shape: Shape,
    pub has_z: bool,
}

impl GeometryKind {
    /// Splits `geom_flags` into shape (lower 4 bits) and modifiers (upper bits).
    pub fn from_flags(flags: u64) -> Result<Self> {
        let shape = match flags & 0x0F {
            1 => Shape::Point,
            2 => Shape::MultiPoint,
            4 => Shape::Polyline,
            8 => Shape::Polygon,
            other => return Err(DecodeError::UnsupportedGeometryKind(other as u8)),
        };
        let has_z = flags & HAS_Z_FLAG != 0;
        Ok(GeometryKind { shape, has_z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_shapes() {
        assert_eq!(GeometryKind::from_flags(1).unwrap().shape, Shape::Point);
        assert_eq!(
            GeometryKind::from_flags(2).unwrap().shape,
            Shape::MultiPoint
        );
        assert_eq!(
            GeometryKind::from_flags(4).unwrap().shape,
            Shape::Polyline
        );
        assert_eq!(GeometryKind::from_flags(8).unwrap().shape, Shape::Polygon);
    }

    #[test]
    fn detects_has_z() {
        let kind = GeometryKind::from_flags(0x40 | 8).unwrap();
        assert_eq!(kind.shape, Shape::Polygon);
        assert!(kind.has_z);

        let kind = GeometryKind::from_flags(4).unwrap();
        assert!(!kind.has_z);
    }

    #[test]
    fn rejects_unknown_shape() {
        assert!(matches!(
            GeometryKind::from_flags(3),
            Err(DecodeError::UnsupportedGeometryKind(3))
        ));
        assert!(matches!(
            GeometryKind::from_flags(0),
            Err(DecodeError::UnsupportedGeometryKind(0))
        ));
    }
}
