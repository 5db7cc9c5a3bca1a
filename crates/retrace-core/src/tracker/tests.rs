//! Tests for the change tracker

use super::*;
use proptest::prelude::*;

fn span(seq: u64, start: usize, length: usize, orig_length: usize) -> ModificationSpan {
    ModificationSpan::new(seq, start, length, orig_length)
}

/// Replace `removed` chars at `position` in `text`, mirroring one `apply`
fn splice_text(text: &mut String, position: usize, removed: usize, inserted: &str) {
    text.replace_range(position..position + removed, inserted);
}

#[test]
fn test_new_tracker_is_empty() {
    let tracker = ChangeTracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.seq(), 0);
    assert!(tracker.edits().is_empty());
    assert_eq!(tracker.translate(3, 4), (3, 4));
}

#[test]
fn test_single_replacement() {
    // "abcdef" -> "abXYZef"
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 2, 3);

    assert_eq!(tracker.spans(), &[span(1, 2, 3, 2)]);
    assert_eq!(tracker.seq(), 1);
    assert_eq!(
        tracker.edits(),
        vec![EditView {
            seq: 1,
            start: 2,
            length: 3,
            orig_start: 2,
            orig_length: 2,
        }]
    );
    assert_eq!(tracker.translate(0, 6), (0, 7));
}

#[test]
fn test_bridging_edit_merges_everything() {
    // "0123456789" -> "0X23456789" -> "0X2345Y789" -> "0QR789"
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 1, 1, 1);
    tracker.apply(2, 6, 1, 1);
    assert_eq!(tracker.len(), 2);

    tracker.apply(3, 1, 6, 2);
    assert_eq!(tracker.spans(), &[span(3, 1, 2, 6)]);

    let edit = tracker.edits()[0];
    assert_eq!(edit.orig_range(), 1..7);
    assert_eq!(edit.range(), 1..3);
}

#[test]
fn test_edit_in_gap_seeds_new_span() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 1, 1);
    tracker.apply(2, 10, 3, 0);

    assert_eq!(tracker.spans(), &[span(1, 2, 1, 1), span(2, 10, 0, 3)]);
    let edits = tracker.edits();
    assert_eq!(edits[1].orig_start, 10);
}

#[test]
fn test_earlier_edit_shifts_later_spans() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 10, 2, 5);
    tracker.apply(2, 3, 1, 0);

    assert_eq!(tracker.spans(), &[span(2, 3, 0, 1), span(1, 9, 5, 2)]);
    let edits = tracker.edits();
    assert_eq!(edits[0].orig_range(), 3..4);
    assert_eq!(edits[1].orig_range(), 10..12);
    assert_eq!(edits[1].range(), 9..14);
}

#[test]
fn test_touching_edits_coalesce() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 0, 3);
    // Typing right after the previous insertion
    tracker.apply(2, 5, 0, 2);
    assert_eq!(tracker.spans(), &[span(2, 2, 5, 0)]);

    // Typing right before it
    tracker.apply(3, 2, 0, 1);
    assert_eq!(tracker.spans(), &[span(3, 2, 6, 0)]);
}

#[test]
fn test_deletion_inside_span() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 1, 5);
    tracker.apply(2, 3, 2, 0);
    assert_eq!(tracker.spans(), &[span(2, 2, 3, 1)]);
}

#[test]
fn test_deleting_inserted_text_leaves_marker() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 0, 3);
    tracker.apply(2, 2, 3, 0);
    assert_eq!(tracker.spans(), &[span(2, 2, 0, 0)]);
    assert_eq!(tracker.net_shift(), 0);
}

#[test]
fn test_deletion_reaching_past_span_into_baseline() {
    // "abcdef" -> "abXYZdef" -> "abXYf"
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 1, 3);
    tracker.apply(2, 4, 3, 0);

    assert_eq!(tracker.spans(), &[span(2, 2, 2, 3)]);
    assert_eq!(tracker.edits()[0].orig_range(), 2..5);
}

#[test]
fn test_noop_edit_keeps_net_shift() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 4, 2, 7);
    let before = tracker.net_shift();

    tracker.apply(2, 20, 0, 0);
    tracker.apply(3, 5, 0, 0);
    assert_eq!(tracker.net_shift(), before);
    assert_eq!(tracker.seq(), 3);
}

#[test]
fn test_translate_boundaries_and_interior() {
    // "abcdef" -> "abXYZef"
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 2, 3);

    // Untouched on either side
    assert_eq!(tracker.translate(0, 2), (0, 2));
    assert_eq!(tracker.translate(4, 2), (5, 2));
    // Exactly the replaced range
    assert_eq!(tracker.translate(2, 2), (2, 3));
    // Start inside snaps to the region start
    assert_eq!(tracker.translate(3, 2), (2, 4));
    // End inside snaps to start + orig_length
    assert_eq!(tracker.translate(1, 2), (1, 3));
    assert_eq!(tracker.translate(3, 0), (2, 2));
}

#[test]
fn test_translate_after_pure_insertion() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 3, 0, 4);

    // Insertions at either boundary stay outside the range
    assert_eq!(tracker.translate(0, 3), (0, 3));
    assert_eq!(tracker.translate(3, 2), (7, 2));
    assert_eq!(tracker.translate(0, 5), (0, 9));
    assert_eq!(tracker.translate(1, 1), (1, 1));
}

#[test]
fn test_advance_makes_spans_shift_free() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(1, 2, 2, 3);
    tracker.apply(2, 10, 0, 4);
    let starts: Vec<_> = tracker.spans().iter().map(|s| s.start).collect();

    tracker.advance();

    assert_eq!(tracker.seq(), 2);
    assert_eq!(tracker.net_shift(), 0);
    assert!(tracker.spans().iter().all(|s| s.is_shift_free()));
    for edit in tracker.edits() {
        assert_eq!(edit.start, edit.orig_start);
        assert_eq!(edit.length, edit.orig_length);
    }
    let after: Vec<_> = tracker.spans().iter().map(|s| s.start).collect();
    assert_eq!(starts, after);
}

#[test]
fn test_merge_replays_other_tracker() {
    // Both trackers share the baseline "0123456789"
    let mut left = ChangeTracker::new();
    left.apply(1, 1, 1, 3);

    let mut right = ChangeTracker::new();
    right.apply(2, 1, 1, 3);
    right.apply(3, 8, 0, 2);

    left.merge(&right);
    // Right's spans are replayed in right's coordinates
    assert_eq!(left.seq(), 3);
    assert_eq!(left.spans(), &[span(2, 1, 5, 1), span(3, 8, 2, 0)]);
}

#[test]
fn test_merge_into_empty_copies_spans() {
    let mut source = ChangeTracker::new();
    source.apply(1, 0, 2, 1);
    source.apply(2, 5, 1, 3);
    source.apply(3, 12, 0, 1);

    let mut target = ChangeTracker::new();
    target.merge(&source);
    assert_eq!(target.spans(), source.spans());
    assert_eq!(target.seq(), source.seq());
}

#[test]
fn test_snapshot_round_trip() {
    let mut tracker = ChangeTracker::new();
    tracker.apply(4, 2, 2, 3);
    tracker.apply(5, 9, 1, 0);

    let json = serde_json::to_string(&tracker.snapshot()).unwrap();
    let snapshot: TrackerSnapshot = serde_json::from_str(&json).unwrap();
    let restored = ChangeTracker::from_snapshot(snapshot).unwrap();
    assert_eq!(restored, tracker);
}

#[test]
fn test_snapshot_rejects_overlap() {
    let snapshot = TrackerSnapshot {
        seq: 2,
        spans: vec![span(1, 0, 5, 5), span(2, 3, 1, 1)],
    };
    let err = ChangeTracker::try_from(snapshot).unwrap_err();
    assert!(matches!(err, crate::TrackerError::InvalidSnapshot(_)));
}

proptest! {
    #[test]
    fn test_random_edits_match_text(
        edits in prop::collection::vec((any::<prop::sample::Index>(), 0..4usize, "[a-z]{0,4}"), 1..24),
    ) {
        let baseline = "the quick brown fox jumps over the lazy dog".to_string();
        let mut current = baseline.clone();
        let mut tracker = ChangeTracker::new();

        for (seq, (at, removed, inserted)) in edits.iter().enumerate() {
            let position = at.index(current.len() + 1);
            let removed = (*removed).min(current.len() - position);
            splice_text(&mut current, position, removed, inserted);
            tracker.apply(seq as u64 + 1, position, removed, inserted.len());
        }

        prop_assert_eq!(
            tracker.net_shift(),
            baseline.len() as isize - current.len() as isize
        );
        for pair in tracker.spans().windows(2) {
            prop_assert!(pair[0].end() < pair[1].start);
        }

        // Untouched text between spans is identical on both sides
        let edits = tracker.edits();
        let (mut orig_cursor, mut cursor) = (0, 0);
        for edit in &edits {
            prop_assert_eq!(&baseline[orig_cursor..edit.orig_start], &current[cursor..edit.start]);
            orig_cursor = edit.orig_end();
            cursor = edit.end();
        }
        prop_assert_eq!(&baseline[orig_cursor..], &current[cursor..]);
    }

    #[test]
    fn test_translate_is_monotonic(
        edits in prop::collection::vec((0..60usize, 0..5usize, 0..5usize), 0..16),
        a in 0..80usize,
        b in 0..80usize,
    ) {
        let mut tracker = ChangeTracker::new();
        let mut len = 60usize;
        for (seq, (position, removed, inserted)) in edits.into_iter().enumerate() {
            let position = position.min(len);
            let removed = removed.min(len - position);
            tracker.apply(seq as u64 + 1, position, removed, inserted);
            len = len - removed + inserted;
        }

        let (low, high) = (a.min(b), a.max(b));
        prop_assert!(tracker.translate(low, 0).0 <= tracker.translate(high, 0).0);
    }
}
