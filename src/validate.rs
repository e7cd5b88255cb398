use super::algorithm::Diff;

/// Checks the script invariants: replaying `Equal` + `Delete` text must
/// reproduce the old input, `Equal` + `Insert` text the new input, and no
/// entry may cover an empty range.
pub fn validate(diff: &Diff, old: &str, new: &str) -> Vec<String> {
    let mut errors = vec![];

    for (side, expected) in [old, new].iter().enumerate() {
        let side_name = ["old", "new"][side];
        let replayed = diff.reconstruct(side);
        if replayed != *expected {
            errors.push(format!(
                "replaying the {side_name} side produced {replayed:?}, expected {expected:?}"
            ));
        }
    }

    for (index, entry) in diff.entries.iter().enumerate() {
        if entry.byte_range.is_empty() {
            errors.push(format!(
                "entry {index} ({:?}) covers an empty byte range",
                entry.op
            ));
        }
    }

    errors
}

pub fn print_errors(errors: &[String]) {
    if !errors.is_empty() {
        eprintln!("Diff validation errors:");
        for error in errors {
            eprintln!("  {error}");
        }
    }
}
