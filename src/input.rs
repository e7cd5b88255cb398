use anyhow::{bail, Context as _, Result};
use std::fs;
use std::io::Read as _;

pub struct ProgramInput {
    pub texts: [String; 2],
    pub names: [String; 2],
}

/// Reads the two texts to compare from a pair of file paths. `-` reads that
/// side from stdin; at most one side can.
pub fn read_file_pair(paths: &[String]) -> Result<ProgramInput> {
    let [old_path, new_path] = paths else {
        bail!("expected exactly two files, got {}", paths.len());
    };
    if old_path == "-" && new_path == "-" {
        bail!("only one side can be read from stdin");
    }

    let read_side = |path: &String| -> Result<String> {
        if path == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        } else {
            fs::read_to_string(path).with_context(|| format!("reading {path}"))
        }
    };

    Ok(ProgramInput {
        texts: [read_side(old_path)?, read_side(new_path)?],
        names: [old_path.clone(), new_path.clone()],
    })
}

/// Wraps two literal command-line arguments as input.
pub fn literal_input(old: String, new: String) -> ProgramInput {
    ProgramInput {
        texts: [old, new],
        names: ["old".to_string(), "new".to_string()],
    }
}
