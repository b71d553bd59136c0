//! Stateful classifier that walks a stream of raw `(x, y)` integer pairs
//! and splits them into parts using the consecutive-absolute-pair rule.

use crate::varint::zigzag;

/// Observable state of the *previous* pair processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrevPair {
    /// The initial state: the first coordinate of the stream is always
    /// absolute, so the very first subsequent pair is compared against it.
    Absolute,
    Delta,
}

/// Splits a stream of raw coordinate pairs into parts.
///
/// The first absolute coordinate (already read by the caller before
/// segmentation begins) seeds the first part. Each subsequent pair is fed
/// in with [`PartSegmenter::push`]; call [`PartSegmenter::finish`] once all
/// pairs have been consumed to get the ordered list of parts.
pub struct PartSegmenter {
    curr_x: i64,
    curr_y: i64,
    state: PrevPair,
    threshold: i64,
    tolerate_trailing_singletons: bool,
    parts: Vec<Vec<(i64, i64)>>,
}

impl PartSegmenter {
    /// Starts a new segmenter, seeded with the stream's first (always
    /// absolute) coordinate.
    pub fn new(first_x: i64, first_y: i64, threshold: i64, tolerate_trailing_singletons: bool) -> Self {
        PartSegmenter {
            curr_x: first_x,
            curr_y: first_y,
            state: PrevPair::Absolute,
            threshold,
            tolerate_trailing_singletons,
            parts: vec![vec![(first_x, first_y)]],
        }
    }

    /// Feeds one raw `(v1, v2)` pair. `is_last` must be `true` only for the
    /// final pair in the stream — it gates the optional
    /// `tolerate_trailing_singletons` refinement.
    pub fn push(&mut self, v1: i64, v2: i64, is_last: bool) {
        if v1 >= self.threshold {
            self.curr_x = v1;
            self.curr_y = v2;
            let is_boundary = self.state == PrevPair::Absolute
                && !(self.tolerate_trailing_singletons && is_last);
            if is_boundary {
                self.parts.push(vec![(self.curr_x, self.curr_y)]);
            } else {
                self.current_part_mut().push((self.curr_x, self.curr_y));
            }
            self.state = PrevPair::Absolute;
        } else {
            let dx = zigzag(v1 as u64);
            let dy = zigzag(v2 as u64);
            self.curr_x += dx;
            self.curr_y += dy;
            self.current_part_mut().push((self.curr_x, self.curr_y));
            self.state = PrevPair::Delta;
        }
    }

    fn current_part_mut(&mut self) -> &mut Vec<(i64, i64)> {
        self.parts.last_mut().expect("segmenter always holds at least one part")
    }

    /// Closes the final part and returns the ordered list of parts.
    pub fn finish(self) -> Vec<Vec<(i64, i64)>> {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: i64 = 100_000_000_000;

    fn zz(d: i64) -> i64 {
        crate::varint::encode_zigzag(d) as i64
    }

    #[test]
    fn single_part_with_deltas_only() {
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, false);
        seg.push(zz(1), zz(1), false);
        seg.push(zz(1), zz(1), true);
        let parts = seg.finish();
        assert_eq!(parts, vec![vec![(0, 0), (1, 1), (2, 2)]]);
    }

    #[test]
    fn consecutive_absolutes_split_into_two_parts() {
        // 5 points total; after the first absolute: delta, delta, absolute, absolute, delta
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, false);
        seg.push(zz(1), zz(1), false); // delta -> part 0
        seg.push(zz(1), zz(1), false); // delta -> part 0
        seg.push(THRESHOLD, THRESHOLD + 1, false); // absolute, prev was delta -> appended to part 0
        seg.push(THRESHOLD + 5, THRESHOLD + 6, false); // absolute, prev was absolute -> new part 1
        seg.push(zz(1), zz(1), true); // delta -> part 1
        let parts = seg.finish();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[1][0], (THRESHOLD + 5, THRESHOLD + 6));
    }

    #[test]
    fn mid_stream_absolute_is_an_optimization_not_a_boundary() {
        // 4 points total, pattern delta, absolute, delta
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, false);
        seg.push(zz(1), zz(1), false); // delta
        seg.push(THRESHOLD + 9, THRESHOLD + 9, false); // absolute, prev delta -> no boundary
        seg.push(zz(1), zz(1), true); // delta
        let parts = seg.finish();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), 4);
    }

    #[test]
    fn literal_rule_splits_trailing_absolute_into_singleton() {
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, false);
        seg.push(THRESHOLD + 1, THRESHOLD + 1, true);
        let parts = seg.finish();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 1);
        assert_eq!(parts[1].len(), 1);
    }

    #[test]
    fn tolerant_refinement_keeps_trailing_absolute_in_one_part() {
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, true);
        seg.push(THRESHOLD + 1, THRESHOLD + 1, true);
        let parts = seg.finish();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), 2);
    }

    #[test]
    fn threshold_is_inclusive_on_the_absolute_side() {
        let mut seg = PartSegmenter::new(0, 0, THRESHOLD, false);
        seg.push(THRESHOLD, 0, true);
        let parts = seg.finish();
        // prev state was Absolute (seed), so this pair at exactly THRESHOLD
        // is itself classified absolute and opens a new part.
        assert_eq!(parts.len(), 2);
    }
}
