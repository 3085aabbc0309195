//! Walking the surviving anchors and reporting edit blocks.

use fcheck_common::{CompareOutcome, DiffBlock, DiffContext, LineBlockKind};

/// Walk the filtered anchors and invoke the sink for every gap between
/// them.
///
/// Cursors into both files advance past each anchor; the iteration past the
/// last anchor uses the file lengths as a synthetic final anchor so trailing
/// gaps are covered without stepping beyond the end. Returns `Different`
/// iff at least one block was reported.
pub fn emit_blocks<F>(
    context: &DiffContext<'_>,
    lcs_a: &[usize],
    lcs_b: &[usize],
    len_a: usize,
    len_b: usize,
    sink: &mut F,
) -> CompareOutcome
where
    F: FnMut(&DiffContext<'_>, &DiffBlock),
{
    debug_assert_eq!(lcs_a.len(), lcs_b.len());

    let length = lcs_a.len();
    if length == len_a && length == len_b {
        return CompareOutcome::Identical;
    }

    let mut start_a = 0usize;
    let mut start_b = 0usize;
    let mut reported = false;

    for i in 0..=length {
        let end_a = if i < length { lcs_a[i] } else { len_a };
        let end_b = if i < length { lcs_b[i] } else { len_b };

        let has_deletes = start_a < end_a;
        let has_adds = start_b < end_b;

        if has_deletes || has_adds {
            let kind = if has_deletes && has_adds {
                LineBlockKind::Change
            } else if has_adds {
                LineBlockKind::Add
            } else {
                LineBlockKind::Delete
            };
            let block = DiffBlock::Lines {
                kind,
                start_a,
                end_a,
                start_b,
                end_b,
            };
            sink(context, &block);
            reported = true;
        }

        start_a = end_a + 1;
        start_b = end_b + 1;
    }

    if reported {
        CompareOutcome::Different
    } else {
        CompareOutcome::Identical
    }
}
