use std::{
    ffi::OsStr,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};
use regex::Regex;
use tokdiff::algorithm::{
    benchmark::{run_algorithm, PreprocessedTestcase},
    LcsAlgorithm,
};

#[derive(Debug)]
struct Testcase {
    name: String,
    left: PathBuf,
    right: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmType {
    Hirschberg,
    Candidates,
}

impl AlgorithmType {
    fn convert(&self) -> LcsAlgorithm {
        match self {
            AlgorithmType::Hirschberg => LcsAlgorithm::Hirschberg,
            AlgorithmType::Candidates => LcsAlgorithm::Candidates,
        }
    }
}

#[derive(Parser)]
struct Args {
    /// Directory of testcase pairs named NAME.left / NAME.right.
    testcase_directory: String,

    #[arg(short, long, default_value_t = String::from(""))]
    filter: String,

    /// Algorithms to run; both when empty.
    #[arg(value_enum)]
    algorithms: Vec<AlgorithmType>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let regex = Regex::new(&args.filter)?;

    let mut testcases = vec![];
    let directory = Path::new(&args.testcase_directory);
    for file in std::fs::read_dir(directory)? {
        let path = file?.path();
        if path.extension() != Some(OsStr::new("left")) {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let name = stem.to_string_lossy().into_owned();
        if !regex.is_match(&name) {
            continue;
        }
        testcases.push(Testcase {
            name,
            right: path.with_extension("right"),
            left: path,
        });
    }
    testcases.sort_by(|a, b| a.name.cmp(&b.name));

    let algorithms = if args.algorithms.is_empty() {
        vec![AlgorithmType::Hirschberg, AlgorithmType::Candidates]
    } else {
        args.algorithms
    };

    for testcase in &testcases {
        let left = read_to_string(&testcase.left)?;
        let right = read_to_string(&testcase.right)?;
        let input = PreprocessedTestcase::new(&left, &right);
        let [old_tokens, new_tokens] = input.token_counts();
        println!("{}: {old_tokens} x {new_tokens} tokens", testcase.name);
        for algorithm in &algorithms {
            let (length, elapsed) = run_algorithm(&input, algorithm.convert());
            println!(
                "  {algorithm:?}: common length {length}, {:.3} ms",
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    Ok(())
}
