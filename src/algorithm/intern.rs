use string_interner::StringInterner;

use super::PartitionedText;

/// Interned token value. Two tokens are equal iff their symbols are equal,
/// so the LCS engine compares `Copy` symbols instead of string slices.
pub(super) type Sym = string_interner::symbol::SymbolU32;

pub(super) fn intern_tokens(parts: &[PartitionedText; 2]) -> [Vec<Sym>; 2] {
    let mut interner = StringInterner::default();
    let mut symbols: [Vec<Sym>; 2] = [vec![], vec![]];
    for (side, side_text) in parts.iter().enumerate() {
        for i in 0..side_text.part_count() {
            symbols[side].push(interner.get_or_intern(side_text.get_part(i)));
        }
    }
    symbols
}
