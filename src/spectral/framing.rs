//! Frame segmentation
//!
//! Rectangular chopping with a fixed hop: frame `i` covers
//! `audio[i * hop .. i * hop + window]`. Trailing samples that do not fill a
//! whole window are dropped, so the frame count is
//! `(len - window) / hop + 1` for `len >= window` and zero otherwise.

/// Number of whole frames that fit in `len` samples
///
/// Returns 0 if `window` or `hop` is zero, or if `len < window`.
pub fn frame_count(len: usize, window: usize, hop: usize) -> usize {
    if window == 0 || hop == 0 || len < window {
        return 0;
    }
    (len - window) / hop + 1
}

/// Iterate over the frames of `array` without copying
///
/// Yields nothing if `window` or `hop` is zero.
pub fn frames<T>(array: &[T], window: usize, hop: usize) -> impl Iterator<Item = &[T]> + '_ {
    let count = frame_count(array.len(), window, hop);
    (0..count).map(move |i| &array[i * hop..i * hop + window])
}

/// Copy the frames of `array` into owned rows
///
/// # Example
///
/// ```
/// use cepstra::spectral::framing::chop;
///
/// assert_eq!(chop(&[1, 2, 3], 2, 1), vec![vec![1, 2], vec![2, 3]]);
/// ```
pub fn chop<T: Clone>(array: &[T], window: usize, hop: usize) -> Vec<Vec<T>> {
    frames(array, window, hop).map(<[T]>::to_vec).collect()
}
