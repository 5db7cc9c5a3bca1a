//! Baseline-to-current coordinate translation

use super::ChangeTracker;
use crate::span::offset_by;

/// Which end of a range is being mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Start,
    End,
}

impl ChangeTracker {
    /// Re-anchor a baseline range onto current text
    ///
    /// Points in untouched text, including the boundaries of edited regions,
    /// map exactly; text inserted exactly at either end of the range stays
    /// outside the mapped range. Points strictly inside an edited region have
    /// no stable mapping and snap to the region: a start snaps to the region's
    /// current start, an end to `start + orig_length`.
    ///
    /// Returns `(mapped_start, mapped_length)`.
    pub fn translate(&self, start: usize, length: usize) -> (usize, usize) {
        let mapped_start = self.map_point(start, Boundary::Start);
        let mapped_end = self.map_point(start + length, Boundary::End);
        (mapped_start, mapped_end.saturating_sub(mapped_start))
    }

    fn map_point(&self, point: usize, boundary: Boundary) -> usize {
        let mut shift = 0isize;
        for span in &self.spans {
            let orig_start = offset_by(span.start, shift);
            let orig_end = orig_start + span.orig_length;
            // A pure insertion at the point stays outside the range
            let passed = match boundary {
                Boundary::Start => orig_end <= point,
                Boundary::End => orig_end <= point && orig_start < point,
            };
            if passed {
                shift += span.local_shift();
                continue;
            }
            // orig_start < point < orig_end
            if orig_start < point {
                return match boundary {
                    Boundary::Start => span.start,
                    Boundary::End => span.start + span.orig_length,
                };
            }
            break;
        }
        offset_by(point, -shift)
    }
}
