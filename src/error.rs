//! Error types produced while decoding an ST_Geometry blob.

/// The result type returned by every fallible operation in this crate.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Everything that can go wrong while decoding an ST_Geometry blob.
///
/// A malformed blob produces exactly one of these variants and nothing
/// else is recovered or retried internally — decoding is a pure function
/// of `(blob, CRSFrame)`, so a bad blob can never corrupt state used by
/// another call.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The first four bytes did not match [`crate::MAGIC`].
    #[error("bad magic at offset {at}: expected {expected:02x?}, found {found:02x?}")]
    BadMagic {
        at: usize,
        expected: [u8; 4],
        found: [u8; 4],
    },

    /// The buffer ended before a required field was fully read.
    #[error("truncated blob at offset {at}: needed {needed} byte(s), {available} available")]
    Truncated {
        at: usize,
        needed: usize,
        available: usize,
    },

    /// A varint ran past the 10-byte limit for a 64-bit value without terminating.
    #[error("varint at offset {at} did not terminate within 10 bytes")]
    VarintOverflow { at: usize },

    /// The lower 4 bits of `geom_flags` were not one of the known shapes.
    #[error("unsupported geometry kind: lower 4 bits = {0}")]
    UnsupportedGeometryKind(u8),

    /// `point_count == 0` for a shape that requires at least one point.
    #[error("empty geometry: point_count is 0")]
    EmptyGeometry,

    /// The part-info skip loop ran off the end of the blob before finding
    /// a value at or above the absolute-coordinate threshold.
    #[error("no absolute coordinate found before end of blob while skipping part-info region")]
    InvalidCoordinateStream,

    /// `has_z` was set but fewer than `point_count` z varints remained.
    #[error("truncated z stream: expected {expected} value(s), found {found}")]
    TruncatedZStream { expected: u32, found: u32 },

    /// Strict mode only: bytes remained in the buffer after decoding finished.
    #[error("{remaining} trailing byte(s) after decode in strict mode")]
    TrailingBytes { remaining: usize },

    /// A `CRSFrame` was constructed with a non-positive scale factor.
    #[error("invalid CRS frame: {0}")]
    InvalidCrsFrame(&'static str),
}
