//! Edit application: absorb a seed span, walk forward, splice once

use tracing::trace;

use super::ChangeTracker;
use crate::span::{ModificationSpan, offset_by};

/// Progress of a single `apply` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Choosing the span the merged region grows from
    Seed,
    /// Absorbing gaps and spans the removal reaches
    Consuming,
    /// Nothing further touches the edit
    Done,
}

/// Running totals for the merged span
#[derive(Debug)]
struct Merge {
    start: usize,
    /// Absorbed current-text characters that survive the edit
    kept: usize,
    orig_length: usize,
    /// Removed characters not yet matched against a gap or span
    remaining: usize,
    /// End of the absorbed region, pre-edit coordinates
    cursor: usize,
    /// One past the last absorbed span
    next: usize,
}

impl ChangeTracker {
    /// Record that `removed_length` characters at `position` were replaced by
    /// `inserted_length` new ones
    ///
    /// `position` is in current-text coordinates as of this edit, and `seq`
    /// must not decrease across calls. Every span the edit overlaps or touches
    /// is coalesced into a single span tagged with `seq`; later spans shift by
    /// `inserted_length - removed_length`.
    ///
    /// # Panics
    ///
    /// Panics if the span list is internally inconsistent, i.e. the seed span
    /// cannot contain the edit position.
    pub fn apply(
        &mut self,
        seq: u64,
        position: usize,
        removed_length: usize,
        inserted_length: usize,
    ) {
        let first = self
            .spans
            .iter()
            .position(|span| span.end() >= position)
            .unwrap_or(self.spans.len());
        let removed_end = position + removed_length;

        let mut merge = Merge {
            start: position,
            kept: 0,
            orig_length: 0,
            remaining: removed_length,
            cursor: position,
            next: first,
        };

        let mut phase = Phase::Seed;
        while phase != Phase::Done {
            phase = match phase {
                Phase::Seed => {
                    let seed = self
                        .spans
                        .get(first)
                        .copied()
                        .filter(|span| span.start <= position);
                    if let Some(span) = seed {
                        let offset = position - span.start;
                        assert!(
                            offset <= span.length,
                            "edit at {position} does not fit inside span {span:?}"
                        );
                        let covered = removed_length.min(span.length - offset);
                        merge.start = span.start;
                        merge.kept = span.length - covered;
                        merge.orig_length = span.orig_length;
                        merge.remaining -= covered;
                        merge.cursor = span.end();
                        merge.next = first + 1;
                    }
                    Phase::Consuming
                }
                Phase::Consuming => match self.spans.get(merge.next) {
                    Some(span) if span.start <= removed_end => {
                        // Untouched text between spans is removed outright
                        let gap = span.start.saturating_sub(merge.cursor);
                        merge.orig_length += gap;
                        merge.remaining = merge.remaining.saturating_sub(gap);

                        let covered = merge.remaining.min(span.length);
                        merge.kept += span.length - covered;
                        merge.orig_length += span.orig_length;
                        merge.remaining -= covered;
                        merge.cursor = span.end();
                        merge.next += 1;
                        Phase::Consuming
                    }
                    _ => Phase::Done,
                },
                Phase::Done => Phase::Done,
            };
        }

        // Whatever removal is left reaches into plain baseline text
        let merged = ModificationSpan::new(
            seq,
            merge.start,
            merge.kept + inserted_length,
            merge.orig_length + merge.remaining,
        );
        trace!(
            seq,
            position,
            removed_length,
            inserted_length,
            absorbed = merge.next - first,
            start = merged.start,
            length = merged.length,
            orig_length = merged.orig_length,
            "applied edit"
        );

        self.spans.splice(first..merge.next, std::iter::once(merged));

        let delta = inserted_length as isize - removed_length as isize;
        if delta != 0 {
            for span in &mut self.spans[first + 1..] {
                span.start = offset_by(span.start, delta);
            }
        }
        self.seq = seq;
    }
}
