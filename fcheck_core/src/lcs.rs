//! Hunt–McIlroy longest common subsequence over hashed lines.
//!
//! Candidate matches are restricted to lines with equal hashes via a
//! fixed-bucket map built over file B. Per-hash match lists are kept in
//! descending B-index order; walking a list in that order is what prevents
//! one line of A from matching several copies in B within a single step and
//! inflating the subsequence length.

use fcheck_common::Line;
use tracing::debug;

const BUCKET_COUNT: usize = 1021;

/// Sentinel for "no index": larger than any valid line index.
const NONE: usize = usize::MAX;

struct Entry {
    hash: u32,
    match_head: usize,
    next: usize,
}

struct MatchNode {
    index_in_b: usize,
    next: usize,
}

/// An accepted match during the threshold sweep: A-line `a_index` paired
/// with B-index `b_index`, extending the placement at `prev`.
struct Placement {
    a_index: usize,
    b_index: usize,
    prev: usize,
}

/// Maps a line hash to the B-indices where that hash occurs.
///
/// Entries and match nodes live in index-linked pools so the whole map is
/// released as one unit; the pools replace the pointer-chained nodes a
/// hand-managed implementation would use.
struct MatchMap {
    buckets: [usize; BUCKET_COUNT],
    entries: Vec<Entry>,
    matches: Vec<MatchNode>,
}

impl MatchMap {
    fn build(lines_b: &[Line]) -> Self {
        let mut map = Self {
            buckets: [NONE; BUCKET_COUNT],
            entries: Vec::new(),
            matches: Vec::with_capacity(lines_b.len()),
        };
        for (j, line) in lines_b.iter().enumerate() {
            let entry = map.insert(line.hash());
            let head = map.entries[entry].match_head;
            map.matches.push(MatchNode {
                index_in_b: j,
                next: head,
            });
            // Prepending while j ascends leaves each list in descending order.
            map.entries[entry].match_head = map.matches.len() - 1;
        }
        map
    }

    fn find(&self, hash: u32) -> Option<usize> {
        let mut cursor = self.buckets[hash as usize % BUCKET_COUNT];
        while cursor != NONE {
            if self.entries[cursor].hash == hash {
                return Some(cursor);
            }
            cursor = self.entries[cursor].next;
        }
        None
    }

    fn insert(&mut self, hash: u32) -> usize {
        if let Some(index) = self.find(hash) {
            return index;
        }
        let bucket = hash as usize % BUCKET_COUNT;
        self.entries.push(Entry {
            hash,
            match_head: NONE,
            next: self.buckets[bucket],
        });
        let index = self.entries.len() - 1;
        self.buckets[bucket] = index;
        index
    }

    /// B-indices recorded for `hash`, highest first.
    fn matches_for(&self, hash: u32) -> MatchIter<'_> {
        MatchIter {
            map: self,
            cursor: self.find(hash).map_or(NONE, |e| self.entries[e].match_head),
        }
    }
}

struct MatchIter<'a> {
    map: &'a MatchMap,
    cursor: usize,
}

impl Iterator for MatchIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == NONE {
            return None;
        }
        let node = &self.map.matches[self.cursor];
        self.cursor = node.next;
        Some(node.index_in_b)
    }
}

/// Compute a longest common subsequence of the two line sequences under
/// hash equality.
///
/// Returns parallel index vectors, strictly increasing in both files, with
/// `lines_a[lcs_a[i]]` hash-equal to `lines_b[lcs_b[i]]` for every `i`. If
/// either sequence is empty, the result is empty and the caller's block
/// emitter covers the non-empty side with a single add or delete.
pub fn find_lcs(lines_a: &[Line], lines_b: &[Line]) -> (Vec<usize>, Vec<usize>) {
    if lines_a.is_empty() || lines_b.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let map = MatchMap::build(lines_b);

    // thresholds[k] holds the smallest B-index that ends a common
    // subsequence of length k. Index 0 is a conceptual "-infinity" slot
    // that is never consulted; untouched slots act as "+infinity".
    let mut thresholds = vec![NONE; lines_a.len() + 1];
    // One record per accepted (A-line, B-index) placement, chained to the
    // placement that ended the subsequence one shorter. Records are
    // per-placement rather than per-A-line because one line can be placed
    // at several lengths (it may match B in multiple positions), and later
    // chains reference each of those placements.
    let mut placements: Vec<Placement> = Vec::new();
    let mut tail_for_length = vec![NONE; lines_a.len() + 1];
    let mut length = 0usize;

    for (i, line) in lines_a.iter().enumerate() {
        for j in map.matches_for(line.hash()) {
            // Smallest k in 1..=length with thresholds[k] >= j.
            let mut low = 1usize;
            let mut high = length;
            while low <= high {
                let mid = low + (high - low) / 2;
                if j > thresholds[mid] {
                    low = mid + 1;
                } else {
                    high = mid - 1;
                }
            }
            let k = low;

            if j < thresholds[k] {
                thresholds[k] = j;
                // The binary search guarantees j > thresholds[k - 1], and
                // descending match order means the k-1 tail always belongs
                // to an earlier A-line, so the chain stays strictly
                // increasing in both files.
                let prev = if k > 1 { tail_for_length[k - 1] } else { NONE };
                placements.push(Placement {
                    a_index: i,
                    b_index: j,
                    prev,
                });
                tail_for_length[k] = placements.len() - 1;
                if k > length {
                    length = k;
                }
            }
        }
    }

    debug!(
        "LCS length {} over {} x {} lines",
        length,
        lines_a.len(),
        lines_b.len()
    );

    let mut lcs_a = vec![0usize; length];
    let mut lcs_b = vec![0usize; length];
    if length > 0 {
        let mut cursor = tail_for_length[length];
        for slot in (0..length).rev() {
            let placement = &placements[cursor];
            lcs_a[slot] = placement.a_index;
            lcs_b[slot] = placement.b_index;
            cursor = placement.prev;
        }
    }

    (lcs_a, lcs_b)
}
