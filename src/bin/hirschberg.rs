use clap::Parser;
use hirschberg::{
    alignment::{AlignmentError, GAP, LinearScoring, ScoringError, hirschberg::hirschberg_align_scored, nw::nw_align},
    data::err::{GetCode, OrFail},
};
use std::{
    fmt, fs,
    io::{self, BufWriter, Write},
    path::Path,
};

const PROGRAM: &str = "hirschberg";

/// Optimal global alignment of two sequences in linear space.
#[derive(Parser, Debug)]
#[command(name = PROGRAM, version, about, long_about = None)]
struct Cli {
    /// The first sequence, or a path to it with --files
    first: Option<String>,

    /// The second sequence, or a path to it with --files
    second: Option<String>,

    /// Treat the arguments as paths to plain or FASTA files
    #[arg(short, long)]
    files: bool,

    /// Score for aligning two identical symbols
    #[arg(long = "match", default_value_t = 1, allow_negative_numbers = true)]
    match_score: i32,

    /// Score for aligning two different symbols
    #[arg(long = "mismatch", default_value_t = -1, allow_negative_numbers = true)]
    mismatch_score: i32,

    /// Score for each gap position
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    gap: i32,

    /// Use the quadratic-space full matrix aligner
    #[arg(long)]
    full: bool,

    /// Print the optimal score before the alignment
    #[arg(short, long)]
    score: bool,

    /// Print the alignment states in CIGAR notation
    #[arg(short, long)]
    cigar: bool,
}

enum CliError {
    Io(io::Error),
    Scoring(ScoringError),
    Alignment(AlignmentError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Scoring(e) => write!(f, "{e}"),
            CliError::Alignment(e @ AlignmentError::MissingInput(_)) => {
                write!(f, "{e}\n\nUsage: {PROGRAM} [OPTIONS] <SEQ1> <SEQ2>")
            }
            CliError::Alignment(e) => write!(f, "{e}"),
        }
    }
}

impl GetCode for CliError {
    fn get_code(&self) -> i32 {
        match self {
            CliError::Io(e) => e.get_code(),
            CliError::Scoring(e) => e.get_code(),
            CliError::Alignment(e) => e.get_code(),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<ScoringError> for CliError {
    fn from(e: ScoringError) -> Self {
        CliError::Scoring(e)
    }
}

impl From<AlignmentError> for CliError {
    fn from(e: AlignmentError) -> Self {
        CliError::Alignment(e)
    }
}

/// Reads a sequence from a file, skipping FASTA header lines and dropping all
/// whitespace.
fn read_sequence(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let contents = fs::read(path)?;
    Ok(contents
        .split(|&b| b == b'\n')
        .filter(|line| !line.starts_with(b">"))
        .flatten()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect())
}

fn get_sequence(arg: Option<&str>, which: &'static str, from_file: bool) -> Result<Vec<u8>, CliError> {
    let arg = arg.ok_or(AlignmentError::MissingInput(which))?;
    let sequence = if from_file {
        read_sequence(arg)?
    } else {
        arg.as_bytes().to_vec()
    };
    if sequence.contains(&GAP) {
        return Err(AlignmentError::GapInInput(which).into());
    }
    Ok(sequence)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let x = get_sequence(cli.first.as_deref(), "first", cli.files)?;
    let y = get_sequence(cli.second.as_deref(), "second", cli.files)?;
    let scoring = LinearScoring::new(cli.match_score, cli.mismatch_score, cli.gap)?;

    let (aligned, score) = if cli.full {
        nw_align(&x, &y, &scoring)
    } else {
        hirschberg_align_scored(&x, &y, &scoring)
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if cli.score {
        writeln!(writer, "Optimal score alignment = {score}")?;
    }
    writeln!(writer, "{aligned}")?;
    if cli.cigar {
        writeln!(writer, "{}", aligned.to_states())?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{cli:?}");
    run(&cli).unwrap_or_fail();
}
