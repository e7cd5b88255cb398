use super::{intern::Sym, DiffOp, PartitionedText, ScriptEntry};

/// Builds the edit script from the affix lengths and the interior common
/// subsequence.
///
/// Each affix becomes a single `Equal` entry covering its whole run; the
/// interior is walked token by token against the common subsequence, so
/// interior entries are per-token. Adjacent `Equal` entries are not merged
/// here; renderers may coalesce them.
pub(super) fn build_script(
    parts: &[PartitionedText; 2],
    symbols: &[Vec<Sym>; 2],
    prefix_len: usize,
    common: &[Sym],
    suffix_len: usize,
) -> Vec<ScriptEntry> {
    let mut entries = vec![];
    if prefix_len > 0 {
        entries.push(ScriptEntry {
            op: DiffOp::Equal,
            byte_range: parts[0].part_byte_range(0..prefix_len),
        });
    }

    let interiors =
        [0, 1].map(|side| &symbols[side][prefix_len..symbols[side].len() - suffix_len]);
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < interiors[0].len() || j < interiors[1].len() {
        if k < common.len()
            && i < interiors[0].len()
            && j < interiors[1].len()
            && interiors[0][i] == common[k]
            && interiors[1][j] == common[k]
        {
            entries.push(ScriptEntry {
                op: DiffOp::Equal,
                byte_range: parts[0].part_byte_range(prefix_len + i..prefix_len + i + 1),
            });
            i += 1;
            j += 1;
            k += 1;
            continue;
        }
        // Not exclusive: a delete and an insert may both fire in one step.
        if i < interiors[0].len() && (k >= common.len() || interiors[0][i] != common[k]) {
            entries.push(ScriptEntry {
                op: DiffOp::Delete,
                byte_range: parts[0].part_byte_range(prefix_len + i..prefix_len + i + 1),
            });
            i += 1;
        }
        if j < interiors[1].len() && (k >= common.len() || interiors[1][j] != common[k]) {
            entries.push(ScriptEntry {
                op: DiffOp::Insert,
                byte_range: parts[1].part_byte_range(prefix_len + j..prefix_len + j + 1),
            });
            j += 1;
        }
    }

    if suffix_len > 0 {
        let part_count = parts[0].part_count();
        entries.push(ScriptEntry {
            op: DiffOp::Equal,
            byte_range: parts[0].part_byte_range(part_count - suffix_len..part_count),
        });
    }
    entries
}
