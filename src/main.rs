use clap::Parser;
use std::io::stdout;
use std::path::PathBuf;
use tokdiff::{
    algorithm::compute_diff,
    config::{self, AlgorithmChoice, OutputMode},
    input::{literal_input, read_file_pair, ProgramInput},
    render::{print_two_line, print_unified, render_html},
    validate::{print_errors, validate},
    DynResult,
};

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
struct Args {
    /// Old and new file; "-" reads one side from stdin.
    #[arg(value_names = ["OLD", "NEW"], num_args = 2, conflicts_with = "text")]
    files: Vec<String>,

    /// Compare two literal strings instead of files.
    #[arg(long, value_names = ["OLD", "NEW"], num_args = 2)]
    text: Option<Vec<String>>,

    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmChoice>,

    #[arg(short, long, value_enum)]
    mode: Option<OutputMode>,

    /// Config file path (defaults to tokdiff/tokdiff.toml in the user
    /// config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn try_main() -> DynResult<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    let input: ProgramInput = if let Some([old, new]) = args.text.as_deref() {
        literal_input(old.clone(), new.clone())
    } else {
        read_file_pair(&args.files)?
    };

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let algorithm = args
        .algorithm
        .or(config.algorithm)
        .unwrap_or(AlgorithmChoice::Hirschberg);
    let mode = args.mode.or(config.mode).unwrap_or(OutputMode::Unified);

    let diff = compute_diff(&input.texts[0], &input.texts[1], algorithm.convert());

    print_errors(&validate(&diff, &input.texts[0], &input.texts[1]));
    eprintln!(
        "{} -> {}: computed in {:.3} ms",
        input.names[0],
        input.names[1],
        diff.elapsed.as_secs_f64() * 1000.0
    );

    match mode {
        OutputMode::Debug => println!("{diff:#?}"),
        OutputMode::Unified => print_unified(&diff, &mut stdout())?,
        OutputMode::Side => print_two_line(&diff, &mut stdout())?,
        OutputMode::Html => print!("{}", render_html(&diff)),
    }

    Ok(())
}

fn main() {
    // If main() itself returns Result, Rust prints the error with Debug,
    // not Display.
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
