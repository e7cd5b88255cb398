/// Number of leading elements shared by both sequences.
pub(super) fn common_prefix_len<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new.iter()).take_while(|(a, b)| a == b).count()
}

/// Number of trailing elements shared by both sequences. Callers must pass
/// the prefix-trimmed ranges so the prefix and suffix windows cannot
/// overlap.
pub(super) fn common_suffix_len<T: Eq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}
