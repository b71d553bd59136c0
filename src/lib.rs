//! Decoder for the Esri ST_Geometry binary blob format used inside Mobile
//! Geodatabase files (SQLite databases holding spatial tables).
//!
//! Given a blob and a [`CRSFrame`] describing the table's coordinate
//! reference system, [`decode`] reconstructs a typed [`Geometry`] whose
//! coordinates are real-valued doubles in the CRS's native units.
//!
//! This crate does not touch SQLite, does not read table metadata or CRS
//! XML, and does not serialize geometries back out to WKT/WKB/GeoJSON —
//! those are the job of a ready-made-CRS-and-blob caller and of exporters
//! that consume the [`Geometry`] this crate produces.
#![allow(dead_code)]

mod crs;
mod error;
mod geometry;
mod kind;
mod options;
mod parser;
mod segmenter;
mod varint;

pub use crs::CRSFrame;
pub use error::{DecodeError, Result};
pub use geometry::{
    BoundingBox, Coordinate, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
pub use options::ParseOptions;
pub use parser::{decode, decode_with_options};

/// The four magic bytes every valid ST_Geometry blob begins with.
pub const MAGIC: [u8; 4] = [0x64, 0x11, 0x0F, 0x00];

/// Raw integer coordinates at or above this magnitude are absolute values;
/// below it they are part-metadata or zigzag-encoded deltas. Valid for the
/// Web-Mercator-like CRS families this format documents itself against —
/// see [`ParseOptions::absolute_threshold`] to override for others.
pub const ABSOLUTE_THRESHOLD: i64 = 100_000_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_documented_values() {
        assert_eq!(MAGIC, [0x64, 0x11, 0x0F, 0x00]);
        assert_eq!(ABSOLUTE_THRESHOLD, 100_000_000_000);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let crs = CRSFrame::new(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        let blob = [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00];
        assert!(matches!(
            decode(&blob, &crs),
            Err(DecodeError::BadMagic { .. })
        ));
    }

    #[test]
    fn empty_point_count_is_rejected_by_default() {
        let crs = CRSFrame::new(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        let mut blob = MAGIC.to_vec();
        blob.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            decode(&blob, &crs),
            Err(DecodeError::EmptyGeometry)
        ));
    }
}
