#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Other
    }
}

/// Partitions `text` into maximal word runs, maximal whitespace runs and
/// single other characters, returned as part bounds (byte offsets).
pub fn partition_into_tokens(text: &str) -> Vec<usize> {
    let mut token_bounds = vec![];
    let mut last_class = None;
    for (i, c) in text.char_indices() {
        let class = classify(c);
        // Only word and whitespace runs extend; everything else is one
        // character per token.
        let extends_run = class != CharClass::Other && last_class == Some(class);
        if !extends_run {
            token_bounds.push(i);
        }
        last_class = Some(class);
    }
    token_bounds.push(text.len());
    token_bounds
}
