//! Resynchronization filter over an LCS result.
//!
//! The raw LCS maximizes length and will happily zig-zag through
//! coincidental single-line matches such as blank lines and closing braces.
//! Only runs of at least `resync_lines` consecutive matches are treated as
//! real alignment points; shorter runs are discarded, which consolidates
//! the noise into larger edit blocks.

/// Keep only runs of consecutive anchors at least `resync_lines` long.
///
/// A run is a maximal slice where both index arrays advance by exactly one
/// per step. With a threshold of 1 (or 0) the input is returned unchanged.
pub fn filter_anchors(
    lcs_a: &[usize],
    lcs_b: &[usize],
    resync_lines: u32,
) -> (Vec<usize>, Vec<usize>) {
    debug_assert_eq!(lcs_a.len(), lcs_b.len());

    if resync_lines <= 1 || lcs_a.is_empty() {
        return (lcs_a.to_vec(), lcs_b.to_vec());
    }

    let threshold = resync_lines as usize;
    let mut filtered_a = Vec::new();
    let mut filtered_b = Vec::new();

    let mut run_start = 0;
    while run_start < lcs_a.len() {
        let mut run_end = run_start;
        while run_end + 1 < lcs_a.len()
            && lcs_a[run_end + 1] == lcs_a[run_end] + 1
            && lcs_b[run_end + 1] == lcs_b[run_end] + 1
        {
            run_end += 1;
        }

        if run_end - run_start + 1 >= threshold {
            filtered_a.extend_from_slice(&lcs_a[run_start..=run_end]);
            filtered_b.extend_from_slice(&lcs_b[run_start..=run_end]);
        }

        run_start = run_end + 1;
    }

    (filtered_a, filtered_b)
}
