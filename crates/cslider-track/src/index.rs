//! Cyclic display-index arithmetic.
//!
//! Every index into the track is taken modulo the slide count. Signed
//! intermediates go through `rem_euclid` so negative offsets never leak out.

/// Normalize a signed index into `[0, len)`.
///
/// `len` must be non-zero.
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index on empty track");
    index.rem_euclid(len as isize) as usize
}

/// The display index following `index`, wrapping at the end.
#[inline]
pub fn next_index(index: usize, len: usize) -> usize {
    wrap_index(index as isize + 1, len)
}

/// The display index preceding `index`, wrapping at the start.
#[inline]
pub fn prev_index(index: usize, len: usize) -> usize {
    wrap_index(index as isize - 1, len)
}

/// Map a display index back to the host's original slide.
#[inline]
pub fn original_index(display_index: usize, original_count: usize) -> usize {
    display_index % original_count
}
