use std::time::{Duration, Instant};

use super::{
    intern::{intern_tokens, Sym},
    lcs,
    tokenize::partition_into_tokens,
    trim::{common_prefix_len, common_suffix_len},
    LcsAlgorithm, PartitionedText,
};

pub struct PreprocessedTestcase {
    symbols: [Vec<Sym>; 2],
}

impl PreprocessedTestcase {
    pub fn new(left: &str, right: &str) -> PreprocessedTestcase {
        let texts = [left, right];
        let bounds = [0, 1].map(|side| partition_into_tokens(texts[side]));
        let parts = [0, 1].map(|side| PartitionedText {
            text: texts[side],
            part_bounds: &bounds[side],
        });
        PreprocessedTestcase {
            symbols: intern_tokens(&parts),
        }
    }

    pub fn token_counts(&self) -> [usize; 2] {
        [0, 1].map(|side| self.symbols[side].len())
    }
}

/// Runs one variant over the preprocessed pair the way `compute_diff` would:
/// affix trimming, then interior alignment. Returns the common-subsequence
/// length (affixes included) and the time spent.
pub fn run_algorithm(input: &PreprocessedTestcase, algorithm: LcsAlgorithm) -> (usize, Duration) {
    let start = Instant::now();
    let prefix_len = common_prefix_len(&input.symbols[0], &input.symbols[1]);
    let suffix_len = common_suffix_len(
        &input.symbols[0][prefix_len..],
        &input.symbols[1][prefix_len..],
    );
    let interiors = [0, 1]
        .map(|side| &input.symbols[side][prefix_len..input.symbols[side].len() - suffix_len]);
    let common = lcs::lcs(interiors[0], interiors[1], algorithm);
    (prefix_len + common.len() + suffix_len, start.elapsed())
}
