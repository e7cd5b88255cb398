use crate::algorithm::intern::Sym;

/// Pending DP work (in table cells) below which forking is not worth the
/// scheduling overhead. Also bounds recursion-induced parallelism.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_CELLS: usize = 64 * 1024;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DpDirection {
    Forward,
    Backward,
}

/// Linear-space LCS by divide and conquer.
///
/// Splits `a` at its midpoint, finds the partition of `b` that maximizes the
/// sum of the two halves' LCS lengths and recurses on both sides. Only two
/// DP rows per length computation are ever alive, so auxiliary space stays
/// O(len(b)) per frame.
pub(in crate::algorithm) fn lcs(a: &[Sym], b: &[Sym]) -> Vec<Sym> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    // Containment only, not positional feasibility; each recursion frame
    // checks against its own slice of `b`, which keeps the concatenated
    // result a valid common subsequence.
    if a.len() == 1 {
        return if b.contains(&a[0]) { vec![a[0]] } else { vec![] };
    }
    if b.len() == 1 {
        return if a.contains(&b[0]) { vec![b[0]] } else { vec![] };
    }

    let mid = a.len() / 2;
    let (first_half, second_half) = a.split_at(mid);

    let cells = a.len() * b.len();
    let (forward, backward) = join(
        cells,
        || lcs_lengths(first_half, b, DpDirection::Forward),
        || lcs_lengths(second_half, b, DpDirection::Backward),
    );

    // forward[p] is the LCS length of (first_half, b[..p]); backward[q] is
    // the LCS length of (second_half, the last q tokens of b). First maximum
    // wins on ties.
    let mut partition = 0;
    let mut best_total = 0;
    for p in 0..=b.len() {
        let total = forward[p] + backward[b.len() - p];
        if total > best_total {
            partition = p;
            best_total = total;
        }
    }

    let (mut left, mut right) = join(
        cells,
        || lcs(first_half, &b[..partition]),
        || lcs(second_half, &b[partition..]),
    );
    left.append(&mut right);
    left
}

/// Final row of the LCS length table for `a` against every prefix
/// (`Forward`) or suffix (`Backward`) of `b`. The two row buffers are owned
/// here and exchanged by `mem::swap` after each row; nothing is reallocated
/// inside the loop.
fn lcs_lengths(a: &[Sym], b: &[Sym], direction: DpDirection) -> Vec<u32> {
    let at = |s: &[Sym], i: usize| match direction {
        DpDirection::Forward => s[i],
        DpDirection::Backward => s[s.len() - 1 - i],
    };

    let mut previous = vec![0u32; b.len() + 1];
    let mut current = vec![0u32; b.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            current[j + 1] = if at(a, i) == at(b, j) {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(cells: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if cells >= MIN_PARALLEL_CELLS {
        rayon::join(left, right)
    } else {
        (left(), right())
    }
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(_cells: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (left(), right())
}
