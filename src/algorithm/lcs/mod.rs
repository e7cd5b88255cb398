use super::{intern::Sym, LcsAlgorithm};

pub mod candidates;
pub mod hirschberg;

/// Computes a common subsequence of two interned token sequences with the
/// selected algorithm. Both variants degrade to the empty sequence when
/// either input is empty.
pub(super) fn lcs(a: &[Sym], b: &[Sym], algorithm: LcsAlgorithm) -> Vec<Sym> {
    match algorithm {
        LcsAlgorithm::Hirschberg => hirschberg::lcs(a, b),
        LcsAlgorithm::Candidates => candidates::lcs(a, b),
    }
}
