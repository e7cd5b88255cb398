use std::collections::HashMap;

use crate::algorithm::{indices::TokenIndex, intern::Sym};

/// Candidate-chain approximation of the LCS, patience-diff style.
///
/// Scans `a` left to right and greedily extends a chain of matched `b`
/// positions, always picking the smallest occurrence strictly after the
/// previous pick. The result is a valid common subsequence of both inputs;
/// with repeated tokens its length is a lower bound of the true LCS length,
/// not the maximum.
pub(in crate::algorithm) fn lcs(a: &[Sym], b: &[Sym]) -> Vec<Sym> {
    let mut occurrences: HashMap<Sym, Vec<TokenIndex>> = HashMap::new();
    for (j, &sym) in b.iter().enumerate() {
        occurrences.entry(sym).or_default().push(TokenIndex::new(j));
    }

    let mut candidates: Vec<(TokenIndex, TokenIndex)> = vec![];
    let mut last_matched: Option<TokenIndex> = None;
    for (i, &sym) in a.iter().enumerate() {
        let Some(positions) = occurrences.get(&sym) else {
            continue;
        };
        // Smallest occurrence strictly after the previous selection.
        let next = match last_matched {
            None => positions.first().copied(),
            Some(last) => {
                let first_after = positions.partition_point(|&j| j <= last);
                positions.get(first_after).copied()
            }
        };
        if let Some(j) = next {
            candidates.push((TokenIndex::new(i), j));
            last_matched = Some(j);
        }
    }

    merge_candidates(&candidates)
        .iter()
        .map(|&(_, j)| b[j.raw()])
        .collect()
}

/// Merges a candidate chain in position order, dropping duplicates and any
/// pair that fails to advance strictly on both sides.
fn merge_candidates(candidates: &[(TokenIndex, TokenIndex)]) -> Vec<(TokenIndex, TokenIndex)> {
    let mut merged: Vec<(TokenIndex, TokenIndex)> = vec![];
    for &(i, j) in candidates {
        match merged.last() {
            Some(&(last_i, last_j)) if i <= last_i || j <= last_j => continue,
            _ => merged.push((i, j)),
        }
    }
    merged
}
