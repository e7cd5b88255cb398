use super::*;
use pretty_assertions::assert_eq;
use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

const BOTH: [LcsAlgorithm; 2] = [LcsAlgorithm::Hirschberg, LcsAlgorithm::Candidates];

fn tokens(text: &str) -> Vec<&str> {
    let bounds = tokenize::partition_into_tokens(text);
    (0..bounds.len() - 1)
        .map(|i| &text[bounds[i]..bounds[i + 1]])
        .collect()
}

fn entry_views<'a>(diff: &Diff<'a>) -> Vec<(DiffOp, &'a str)> {
    diff.entries
        .iter()
        .map(|entry| (entry.op, diff.entry_text(entry)))
        .collect()
}

/// Full-table LCS length, the quadratic-space textbook way. Only a test
/// oracle; the engine never materializes this table.
fn reference_lcs_len(a: &[&str], b: &[&str]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 0..a.len() {
        for j in 0..b.len() {
            table[i + 1][j + 1] = if a[i] == b[j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    table[a.len()][b.len()]
}

/// Number of tokens covered by `Equal` entries. Affix entries cover runs;
/// re-tokenizing a run always reproduces its original tokens because
/// adjacent tokens never share a mergeable class.
fn equal_token_count(diff: &Diff) -> usize {
    diff.entries
        .iter()
        .filter(|entry| entry.op == DiffOp::Equal)
        .map(|entry| tokens(diff.entry_text(entry)).len())
        .sum()
}

#[test]
fn tokenizes_word_space_and_punctuation_runs() {
    assert_eq!(tokens("foo bar, baz"), ["foo", " ", "bar", ",", " ", "baz"]);
}

#[rstest]
#[case("", 0)]
#[case("   \t\n", 1)]
#[case("a_1 b!!", 5)]
#[case("committer_list", 1)]
#[case("x+=1", 4)]
fn token_counts(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(tokens(text).len(), expected);
}

#[test]
fn tokens_concatenate_back_to_the_input() {
    let text = "fn main() {\n    println!(\"hi\");\n}\n";
    assert_eq!(tokens(text).concat(), text);
}

#[test]
fn identity_diff_is_a_single_equal_run() {
    for algorithm in BOTH {
        let diff = compute_diff("foo bar, baz", "foo bar, baz", algorithm);
        assert_eq!(entry_views(&diff), [(DiffOp::Equal, "foo bar, baz")]);
    }
}

#[test]
fn empty_inputs_yield_an_empty_script() {
    for algorithm in BOTH {
        assert!(compute_diff("", "", algorithm).entries.is_empty());
    }
}

#[test]
fn one_empty_side_is_all_inserts_or_all_deletes() {
    for algorithm in BOTH {
        let inserted = compute_diff("", "abc", algorithm);
        assert_eq!(entry_views(&inserted), [(DiffOp::Insert, "abc")]);
        let deleted = compute_diff("abc", "", algorithm);
        assert_eq!(entry_views(&deleted), [(DiffOp::Delete, "abc")]);
    }
}

#[test]
fn shared_prefix_becomes_one_equal_run() {
    for algorithm in BOTH {
        let diff = compute_diff("committer list", "committer count", algorithm);
        assert_eq!(
            entry_views(&diff),
            [
                (DiffOp::Equal, "committer "),
                (DiffOp::Delete, "list"),
                (DiffOp::Insert, "count"),
            ]
        );
    }
}

#[test]
fn underscored_identifiers_replace_as_single_tokens() {
    for algorithm in BOTH {
        let diff = compute_diff("committer_list", "committer_count", algorithm);
        assert_eq!(
            entry_views(&diff),
            [
                (DiffOp::Delete, "committer_list"),
                (DiffOp::Insert, "committer_count"),
            ]
        );
    }
}

#[test]
fn shared_suffix_becomes_one_equal_run() {
    for algorithm in BOTH {
        let diff = compute_diff("x a b", "y a b", algorithm);
        assert_eq!(
            entry_views(&diff),
            [
                (DiffOp::Delete, "x"),
                (DiffOp::Insert, "y"),
                (DiffOp::Equal, " a b"),
            ]
        );
    }
}

#[test]
fn overlapping_affixes_are_not_double_counted() {
    for algorithm in BOTH {
        let diff = compute_diff("a a", "a a a", algorithm);
        assert_eq!(
            entry_views(&diff),
            [
                (DiffOp::Equal, "a a"),
                (DiffOp::Insert, " "),
                (DiffOp::Insert, "a"),
            ]
        );
    }
}

#[rstest]
#[case("the quick brown fox", "the slow brown fox")]
#[case("a, b, c", "a; b; c")]
#[case("foo", "foo bar")]
#[case("one\ntwo\nthree", "one\nthree")]
#[case("a b a b a", "b a b a b")]
fn reconstructs_both_sides(#[case] old: &str, #[case] new: &str) {
    for algorithm in BOTH {
        let diff = compute_diff(old, new, algorithm);
        assert_eq!(diff.reconstruct(0), old);
        assert_eq!(diff.reconstruct(1), new);
    }
}

#[rstest]
#[case("a b a b a", "b a b a b")]
#[case("x y x y", "y x y x")]
#[case("foo bar foo", "bar foo bar")]
#[case("to be, or not to be", "not to be, to be")]
fn hirschberg_matches_the_reference_length(#[case] old: &str, #[case] new: &str) {
    let diff = compute_diff(old, new, LcsAlgorithm::Hirschberg);
    assert_eq!(
        equal_token_count(&diff),
        reference_lcs_len(&tokens(old), &tokens(new))
    );
}

#[test]
fn variants_agree_on_distinct_tokens() {
    // Every token occurs once per side, and the shared ones appear in the
    // same relative order, so the greedy chain finds the full LCS.
    let old = "a,b.c";
    let new = "a;b.d";
    let exact = equal_token_count(&compute_diff(old, new, LcsAlgorithm::Hirschberg));
    let greedy = equal_token_count(&compute_diff(old, new, LcsAlgorithm::Candidates));
    assert_eq!(exact, 3);
    assert_eq!(greedy, exact);
}

fn random_text(rng: &mut ChaCha8Rng) -> String {
    let pieces = ["foo", "bar", "x", "_id", " ", "  ", ",", ".", "\n"];
    let count = rng.gen_range(0..30);
    let mut text = String::new();
    for _ in 0..count {
        text.push_str(pieces[rng.gen_range(0..pieces.len())]);
    }
    text
}

#[test]
fn randomized_scripts_reconstruct_and_respect_variant_ordering() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..200 {
        let old = random_text(&mut rng);
        let new = random_text(&mut rng);

        let exact_diff = compute_diff(&old, &new, LcsAlgorithm::Hirschberg);
        let greedy_diff = compute_diff(&old, &new, LcsAlgorithm::Candidates);
        for diff in [&exact_diff, &greedy_diff] {
            assert_eq!(diff.reconstruct(0), old, "old side of {old:?} / {new:?}");
            assert_eq!(diff.reconstruct(1), new, "new side of {old:?} / {new:?}");
        }

        let exact = equal_token_count(&exact_diff);
        assert_eq!(
            exact,
            reference_lcs_len(&tokens(&old), &tokens(&new)),
            "exact length for {old:?} / {new:?}"
        );
        assert!(
            equal_token_count(&greedy_diff) <= exact,
            "greedy exceeded exact for {old:?} / {new:?}"
        );
    }
}
