use std::ops::Range;

/// Split `0..len` into `num_chunks` contiguous ranges of `len / num_chunks`
/// elements, the last one absorbing the remainder.
///
/// `num_chunks` is clamped to `1..=len` so no chunk is empty. An empty input
/// yields no chunks.
pub fn partition(len: usize, num_chunks: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let num_chunks = num_chunks.clamp(1, len);
    let size = len / num_chunks;
    (0..num_chunks)
        .map(|idx| {
            let start = idx * size;
            let end = if idx + 1 == num_chunks { len } else { start + size };
            start..end
        })
        .collect()
}
