//! Scansion CLI — meter and rhyme analysis for lyrics and verse.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use scansion_core::analyze::analyze_lines;
use scansion_core::dictionary::PhoneticDictionary;
use scansion_core::meter;
use scansion_core::rhyme;
use scansion_core::rhyme::quality::QualityLexicon;
use scansion_core::text::split_lines;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "scansion",
    about = "Phonetic meter and rhyme analysis for lyrics and verse",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Syllable counts, stress patterns, and metrical classification
    Meter(SharedArgs),
    /// Rhyme scheme, rhyme pairs, and quality warnings
    Rhyme(SharedArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Text to analyze (or use --file)
    text: Option<String>,

    /// Read the text from a UTF-8 file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Phonetic dictionary JSON
    #[arg(long, default_value = "data/phonetic-dictionary.json")]
    dict: PathBuf,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = match &cli.command {
        Command::Meter(a) | Command::Rhyme(a) if a.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Meter(args) => run_meter(args),
        Command::Rhyme(args) => run_rhyme(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Resolve the input text from the positional argument or --file.
fn load_text(args: &SharedArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        (Some(_), Some(_)) => bail!("Pass either literal text or --file, not both"),
        (None, None) => bail!("No input: pass literal text or --file <path>"),
    }
}

fn load_dictionary(args: &SharedArgs) -> Result<PhoneticDictionary> {
    let dict = PhoneticDictionary::load(&args.dict)
        .with_context(|| format!("failed to load dictionary {}", args.dict.display()))?;
    log::debug!("dictionary: {} words", dict.len());
    Ok(dict)
}

// ─── Meter runner ────────────────────────────────────────────────

fn run_meter(args: SharedArgs) -> Result<()> {
    let text = load_text(&args)?;
    let lines = split_lines(&text);
    if lines.is_empty() {
        println!("Nothing to analyze: input has no non-empty lines");
        return Ok(());
    }

    let dict = load_dictionary(&args)?;
    let analyzed = analyze_lines(&dict, &lines);
    let summary = meter::summarize(&analyzed);
    print!("{}", meter::report::render(&analyzed, &summary));

    Ok(())
}

// ─── Rhyme runner ────────────────────────────────────────────────

fn run_rhyme(args: SharedArgs) -> Result<()> {
    let text = load_text(&args)?;
    let lines = split_lines(&text);
    if lines.is_empty() {
        println!("Nothing to analyze: input has no non-empty lines");
        return Ok(());
    }
    if lines.len() < 2 {
        println!("Note: only one line supplied; end-rhyme scheme is trivial, internal rhymes only");
    }

    let dict = load_dictionary(&args)?;
    let lexicon = QualityLexicon::default();
    let analysis = rhyme::analyze(&dict, &lines, &lexicon);
    print!("{}", rhyme::report::render(&lines, &analysis));

    Ok(())
}
