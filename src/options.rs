//! Parser configuration knobs.
//!
//! ST_Geometry's reverse-engineered format leaves a couple of documented
//! configuration points and one open question about tie-breaking behavior.
//! `ParseOptions` is where a caller can adjust those without forking the
//! decoder.

/// Tunable behavior for [`crate::decode_with_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// When `true`, a non-empty remainder after decoding produces
    /// [`crate::DecodeError::TrailingBytes`]. Off by default: most callers
    /// only care that the geometry decoded correctly, not that every byte
    /// of the row's blob was consumed.
    pub strict_trailing_bytes: bool,

    /// The numeric threshold separating part-metadata varints (always
    /// small: counts, indices, byte offsets) from absolute coordinate
    /// values (always large, for the CRS families this format supports).
    /// Documented in the format as a property of Web-Mercator-like CRSes,
    /// not a universal constant — a different CRS family may need a
    /// different threshold.
    pub absolute_threshold: i64,

    /// When `true`, applies the optional refinement to the
    /// consecutive-absolute-pair segmentation rule: if the pair that would
    /// open a new part is the *last* pair in the stream, treat it as an
    /// encoding optimization instead of a boundary, so two-point lines
    /// ending on an absolute pair stay a single part instead of splitting
    /// into two one-point parts. Off by default, matching the literal
    /// reference behavior.
    pub tolerate_trailing_singletons: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_trailing_bytes: false,
            absolute_threshold: crate::ABSOLUTE_THRESHOLD,
            tolerate_trailing_singletons: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented() {
        let opts = ParseOptions::default();
        assert!(!opts.strict_trailing_bytes);
        assert_eq!(opts.absolute_threshold, 100_000_000_000);
        assert!(!opts.tolerate_trailing_singletons);
    }
}
