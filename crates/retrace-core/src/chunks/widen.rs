//! Widening pass: pad chunks with context up to the display window

use tracing::warn;

use crate::error::TrackerResult;
use crate::view::EditView;

/// Widen every chunk, dropping any that cannot be widened consistently
pub(super) fn widen(
    chunks: &[EditView],
    max_chunk_size: usize,
    total_length: usize,
) -> Vec<EditView> {
    let mut widened = Vec::with_capacity(chunks.len());
    // Previous widened chunk's end
    let mut floor = 0;

    for (index, chunk) in chunks.iter().enumerate() {
        let next_start = chunks.get(index + 1).map_or(total_length, |next| next.start);
        let ceiling = total_length.min(next_start).max(chunk.end());
        let floor_here = floor.min(chunk.start);

        match widen_one(*chunk, max_chunk_size, floor_here, ceiling) {
            Ok(view) => {
                floor = view.end();
                widened.push(view);
            }
            // Baseline range would leave the document; only reachable from a
            // span list that violates the tracker's invariants
            Err(error) => {
                warn!(
                    start = chunk.start,
                    length = chunk.length,
                    %error,
                    "dropping inconsistent chunk"
                );
                floor = chunk.end();
            }
        }
    }

    widened
}

/// Pad one chunk within `[floor, ceiling)`
///
/// Padding is centered on the chunk. When the ceiling (document end or the
/// next chunk) cuts the end short, the start moves left by the lost room, down
/// to `floor`, so chunks near a boundary still show a full window of context.
fn widen_one(
    chunk: EditView,
    max_chunk_size: usize,
    floor: usize,
    ceiling: usize,
) -> TrackerResult<EditView> {
    let pad = max_chunk_size.saturating_sub(chunk.length);
    let ideal = chunk.start.saturating_sub(pad.div_ceil(2));
    let start = ideal.max(floor);
    let end = (start + max_chunk_size).min(ceiling).max(chunk.end());
    let start = floor.max(end.saturating_sub(max_chunk_size)).min(chunk.start);

    let mut view = chunk;
    view.set_start(start)?;
    view.set_end(end)?;
    Ok(view)
}
