mod indices;
mod intern;
mod lcs;
mod script;
mod tokenize;
mod trim;

#[cfg(test)]
mod test;

pub mod benchmark;

use self::{
    intern::intern_tokens,
    script::build_script,
    tokenize::partition_into_tokens,
    trim::{common_prefix_len, common_suffix_len},
};
use std::ops::Range;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DiffOp {
    Equal,
    Delete,
    Insert,
}

impl DiffOp {
    /// How many tokens the op consumes on each side (old, new).
    pub fn movement(&self) -> [usize; 2] {
        match self {
            DiffOp::Delete => [1, 0],
            DiffOp::Insert => [0, 1],
            DiffOp::Equal => [1, 1],
        }
    }
}

/// Which algorithm aligns the interior token sequences.
///
/// Both produce a valid common subsequence; only `Hirschberg` guarantees a
/// longest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LcsAlgorithm {
    /// Linear-space divide and conquer.
    Hirschberg,
    /// Greedy candidate chains. Faster, but its result is a lower bound when
    /// tokens repeat.
    Candidates,
}

/// One step of the edit script. The byte range points into the old input
/// for `Equal` and `Delete`, into the new input for `Insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub op: DiffOp,
    pub byte_range: Range<usize>,
}

#[derive(Debug, PartialEq)]
pub struct Diff<'a> {
    pub texts: [&'a str; 2],
    pub entries: Vec<ScriptEntry>,
    /// Wall time spent computing the script. Display only.
    pub elapsed: Duration,
}

impl<'a> Diff<'a> {
    /// The text an entry covers, taken from the side its op consumes.
    pub fn entry_text(&self, entry: &ScriptEntry) -> &'a str {
        let side = match entry.op {
            DiffOp::Insert => 1,
            DiffOp::Equal | DiffOp::Delete => 0,
        };
        &self.texts[side][entry.byte_range.clone()]
    }

    /// Replays the script for one side: `Equal` plus `Delete` text is the
    /// old input, `Equal` plus `Insert` text is the new input.
    pub fn reconstruct(&self, side: usize) -> String {
        let mut result = String::new();
        for entry in &self.entries {
            if entry.op.movement()[side] != 0 {
                result.push_str(self.entry_text(entry));
            }
        }
        result
    }
}

#[derive(Default, Clone)]
pub(crate) struct PartitionedText<'a> {
    pub text: &'a str,
    pub part_bounds: &'a [usize],
}

impl<'a> PartitionedText<'a> {
    pub fn part_count(&self) -> usize {
        if self.part_bounds.is_empty() {
            0
        } else {
            self.part_bounds.len() - 1
        }
    }

    pub fn get_part(&self, index: usize) -> &'a str {
        &self.text[self.part_bounds[index]..self.part_bounds[index + 1]]
    }

    /// Byte range covered by a contiguous run of parts.
    pub fn part_byte_range(&self, parts: Range<usize>) -> Range<usize> {
        self.part_bounds[parts.start]..self.part_bounds[parts.end]
    }
}

/// Diffs two texts: tokenize, trim the common affixes, align the interiors
/// with the selected LCS algorithm and build the edit script.
pub fn compute_diff<'a>(old: &'a str, new: &'a str, algorithm: LcsAlgorithm) -> Diff<'a> {
    let start = Instant::now();

    let texts = [old, new];
    let bounds = [0, 1].map(|side| partition_into_tokens(texts[side]));
    let parts = [0, 1].map(|side| PartitionedText {
        text: texts[side],
        part_bounds: &bounds[side],
    });
    let symbols = intern_tokens(&parts);

    let prefix_len = common_prefix_len(&symbols[0], &symbols[1]);
    let suffix_len = common_suffix_len(&symbols[0][prefix_len..], &symbols[1][prefix_len..]);
    let interiors =
        [0, 1].map(|side| &symbols[side][prefix_len..symbols[side].len() - suffix_len]);

    let common = lcs::lcs(interiors[0], interiors[1], algorithm);
    let entries = build_script(&parts, &symbols, prefix_len, &common, suffix_len);

    Diff {
        texts,
        entries,
        elapsed: start.elapsed(),
    }
}
