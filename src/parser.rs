//! Orchestrates a single decode: validates the header, classifies the
//! geometry, reads the bounding box and part-info region, and reconstructs
//! coordinates via [`crate::segmenter::PartSegmenter`].

use tracing::{debug, debug_span, trace, warn};

use crate::crs::CRSFrame;
use crate::error::{DecodeError, Result};
use crate::geometry::{
    Coordinate, Geometry, LineString, MultiLineString, MultiPoint, Point, Polygon,
};
use crate::kind::{GeometryKind, Shape};
use crate::options::ParseOptions;
use crate::segmenter::PartSegmenter;
use crate::varint::VarintReader;
use crate::MAGIC;

/// Decodes a blob using [`ParseOptions::default`].
pub fn decode(blob: &[u8], crs: &CRSFrame) -> Result<Geometry> {
    decode_with_options(blob, crs, &ParseOptions::default())
}

/// Decodes a blob with caller-controlled parsing behavior.
///
/// A pure function of `(blob, crs, options)`: no global state is touched,
/// so independent blobs may be decoded concurrently with no coordination.
pub fn decode_with_options(blob: &[u8], crs: &CRSFrame, options: &ParseOptions) -> Result<Geometry> {
    let _span = debug_span!("decode", blob_len = blob.len()).entered();
    let mut reader = VarintReader::new(blob);

    reader.read_tag(&MAGIC)?;
    let point_count = reader.read_u32_le()?;
    if point_count == 0 {
        // Every shape in this format requires at least one point, so an
        // empty blob is always an error rather than an empty-but-typed
        // geometry.
        return Err(DecodeError::EmptyGeometry);
    }
    let _size_hint = reader.read_varint()?;
    let flags = reader.read_varint()?;
    let kind = GeometryKind::from_flags(flags)?;
    trace!(?kind.shape, has_z = kind.has_z, point_count, "classified geometry");

    let geometry = match kind.shape {
        Shape::Point => decode_point(&mut reader, crs, kind.has_z)?,
        Shape::MultiPoint => decode_multipoint(&mut reader, crs, kind.has_z, point_count, options)?,
        Shape::Polyline | Shape::Polygon => {
            decode_lines_or_rings(&mut reader, crs, kind, point_count, options)?
        }
    };

    if reader.remaining() > 0 {
        if options.strict_trailing_bytes {
            return Err(DecodeError::TrailingBytes {
                remaining: reader.remaining(),
            });
        }
        warn!(remaining = reader.remaining(), "ignoring trailing bytes after decode");
    }

    debug!(has_z = geometry.has_z(), "decode finished");
    Ok(geometry)
}

fn decode_point(reader: &mut VarintReader, crs: &CRSFrame, has_z: bool) -> Result<Geometry> {
    let raw_x = reader.read_absolute()?;
    let raw_y = reader.read_absolute()?;
    let coordinate = if has_z {
        let raw_z = reader.read_absolute()?;
        Coordinate::xyz(crs.real_x(raw_x), crs.real_y(raw_y), crs.real_z(raw_z))
    } else {
        Coordinate::xy(crs.real_x(raw_x), crs.real_y(raw_y))
    };
    Ok(Geometry::Point(Point::new(coordinate, has_z)))
}

/// Reads the bounding box, consuming but never trusting it: `bounds` on the
/// result is always recomputed from the decoded coordinates.
fn skip_bounding_box(reader: &mut VarintReader) -> Result<()> {
    for _ in 0..4 {
        reader.read_absolute()?;
    }
    Ok(())
}

/// Skips the opaque part-info region, one varint at a time, until a value
/// at or above `threshold` is found — that value is the first coordinate's
/// raw `x`, per the consecutive-absolute-pair heuristic.
fn skip_part_info_and_read_first_x(reader: &mut VarintReader, threshold: i64) -> Result<i64> {
    loop {
        if reader.remaining() == 0 {
            return Err(DecodeError::InvalidCoordinateStream);
        }
        let value = reader.read_absolute()?;
        if value >= threshold {
            return Ok(value);
        }
        trace!(value, "skipped part-info varint");
    }
}

/// Reads the optional Z tail: `point_count` varints, first absolute, rest
/// zigzag deltas against a running `curr_z`, converted to real units.
fn read_z_stream(reader: &mut VarintReader, point_count: u32, crs: &CRSFrame) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(point_count as usize);
    let mut curr_z: i64 = 0;
    for i in 0..point_count {
        if reader.remaining() == 0 {
            return Err(DecodeError::TruncatedZStream {
                expected: point_count,
                found: i,
            });
        }
        let raw = reader.read_absolute()?;
        curr_z = if i == 0 {
            raw
        } else {
            curr_z + crate::varint::zigzag(raw as u64)
        };
        values.push(crs.real_z(curr_z));
    }
    Ok(values)
}

fn decode_multipoint(
    reader: &mut VarintReader,
    crs: &CRSFrame,
    has_z: bool,
    point_count: u32,
    options: &ParseOptions,
) -> Result<Geometry> {
    skip_bounding_box(reader)?;
    let first_x = skip_part_info_and_read_first_x(reader, options.absolute_threshold)?;
    let first_y = reader.read_absolute()?;

    // MultiPoint carries no line/ring topology, so every remaining pair is
    // an independent absolute coordinate: no delta encoding, no part
    // segmentation.
    let mut raw_points = Vec::with_capacity(point_count as usize);
    raw_points.push((first_x, first_y));
    for _ in 1..point_count {
        let x = reader.read_absolute()?;
        let y = reader.read_absolute()?;
        raw_points.push((x, y));
    }

    let z_values = if has_z {
        Some(read_z_stream(reader, point_count, crs)?)
    } else {
        None
    };

    let points = raw_points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| to_coordinate(crs, x, y, z_values.as_deref(), i))
        .collect();

    Ok(Geometry::MultiPoint(MultiPoint::new(points, has_z)))
}

fn decode_lines_or_rings(
    reader: &mut VarintReader,
    crs: &CRSFrame,
    kind: GeometryKind,
    point_count: u32,
    options: &ParseOptions,
) -> Result<Geometry> {
    skip_bounding_box(reader)?;
    let first_x = skip_part_info_and_read_first_x(reader, options.absolute_threshold)?;
    let first_y = reader.read_absolute()?;

    let mut segmenter = PartSegmenter::new(
        first_x,
        first_y,
        options.absolute_threshold,
        options.tolerate_trailing_singletons,
    );
    let remaining_pairs = point_count - 1;
    for i in 0..remaining_pairs {
        let v1 = reader.read_absolute()?;
        let v2 = reader.read_absolute()?;
        let is_last = i == remaining_pairs - 1;
        segmenter.push(v1, v2, is_last);
    }
    let raw_parts = segmenter.finish();

    let z_values = if kind.has_z {
        Some(read_z_stream(reader, point_count, crs)?)
    } else {
        None
    };

    // Parts are flattened left-to-right for z-assignment; each part
    // individually preserves its own XY order.
    let mut flat_index = 0usize;
    let mut real_parts: Vec<Vec<Coordinate>> = Vec::with_capacity(raw_parts.len());
    for part in raw_parts {
        let mut coords = Vec::with_capacity(part.len());
        for (x, y) in part {
            coords.push(to_coordinate(crs, x, y, z_values.as_deref(), flat_index));
            flat_index += 1;
        }
        real_parts.push(coords);
    }

    match kind.shape {
        Shape::Polyline => {
            if real_parts.len() == 1 {
                let points = real_parts.into_iter().next().expect("checked len == 1");
                Ok(Geometry::LineString(LineString::new(points, kind.has_z)))
            } else {
                let lines = real_parts
                    .into_iter()
                    .map(|points| LineString::new(points, kind.has_z))
                    .collect();
                Ok(Geometry::MultiLineString(MultiLineString::new(
                    lines,
                    kind.has_z,
                )))
            }
        }
        // All rings after the first are holes of a single Polygon;
        // MultiPolygon is never produced from segmentation alone.
        Shape::Polygon => Ok(Geometry::Polygon(Polygon::new(real_parts, kind.has_z))),
        Shape::Point | Shape::MultiPoint => unreachable!("dispatched separately"),
    }
}

fn to_coordinate(crs: &CRSFrame, raw_x: i64, raw_y: i64, z: Option<&[f64]>, index: usize) -> Coordinate {
    let x = crs.real_x(raw_x);
    let y = crs.real_y(raw_y);
    match z {
        Some(values) => Coordinate::xyz(x, y, values[index]),
        None => Coordinate::xy(x, y),
    }
}
