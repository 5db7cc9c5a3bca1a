//! Grouping pass: cluster nearby spans, split oversized groups

use crate::view::EditView;

/// Cluster views into chunks no longer than `max_chunk_size`
///
/// A view joins the open chunk while the chunk, extended to the view's end,
/// still fits the window. Gaps count equally toward both lengths since
/// untouched text is identical on both sides.
pub(super) fn group(views: &[EditView], max_chunk_size: usize) -> Vec<EditView> {
    let mut chunks = Vec::with_capacity(views.len());
    let mut open: Option<EditView> = None;

    for view in views {
        open = Some(match open {
            Some(mut chunk) if view.end().saturating_sub(chunk.start) <= max_chunk_size => {
                let gap = view.start.saturating_sub(chunk.end());
                chunk.length = view.end() - chunk.start;
                chunk.orig_length += gap + view.orig_length;
                chunk.seq = chunk.seq.max(view.seq);
                chunk
            }
            Some(chunk) => {
                split(chunk, max_chunk_size, &mut chunks);
                *view
            }
            None => *view,
        });
    }
    if let Some(chunk) = open {
        split(chunk, max_chunk_size, &mut chunks);
    }

    chunks
}

/// Push `chunk`, cut into near-equal pieces if it exceeds the window
fn split(chunk: EditView, max_chunk_size: usize, out: &mut Vec<EditView>) {
    if chunk.length <= max_chunk_size {
        out.push(chunk);
        return;
    }

    let pieces = chunk.length.div_ceil(max_chunk_size);
    let mut start = chunk.start;
    let mut orig_start = chunk.orig_start;
    for index in 0..pieces {
        let length = share(chunk.length, pieces, index);
        let orig_length = share(chunk.orig_length, pieces, index);
        out.push(EditView {
            seq: chunk.seq,
            start,
            length,
            orig_start,
            orig_length,
        });
        start += length;
        orig_start += orig_length;
    }
}

/// Size of piece `index` when `total` is dealt out over `pieces`
fn share(total: usize, pieces: usize, index: usize) -> usize {
    total / pieces + usize::from(index < total % pieces)
}
