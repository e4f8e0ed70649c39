use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::debug;
use tempfile::NamedTempFile;

use unfoldtt::core::command::{self, Command};
use unfoldtt::core::expand::ExpandSummary;
use unfoldtt::error::ExpandError;

/// Expand folded columns of tab-separated text tables
///
/// A cell of the target column that packs several comma-separated values is
/// split into one output row per value, all other columns copied unchanged.
#[derive(Parser)]
#[command(name = "unfoldtt", version)]
struct Cli {
    /// Target column: I:<index> (1-based) or L:<label> (looked up in the first line)
    cmd: String,

    /// Input file; standard input when omitted
    file: Option<PathBuf>,

    /// Output file; standard output when omitted
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Overwrite the input file itself
    #[arg(long, requires = "file", conflicts_with = "output")]
    in_place: bool,

    /// Suppress advisory warnings
    #[arg(long)]
    silent: bool,

    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let command: Command = cli.cmd.parse()?;

    if let (Some(file), Some(output)) = (&cli.file, &cli.output) {
        // compared as absolute paths, symlinks not resolved
        if std::path::absolute(file)? == std::path::absolute(output)? {
            return Err(ExpandError::SameFilePath(output.clone()).into());
        }
    }

    let summary = if cli.in_place {
        let file = cli
            .file
            .as_ref()
            .expect("clap requires <FILE> with --in-place");
        let input = open_input(file)?;
        expand_to_file(file, input, &command)?
    } else {
        match (&cli.file, &cli.output) {
            (file, Some(output)) => {
                let input = open_or_stdin(file)?;
                expand_to_file(output, input, &command)?
            }
            (file, None) => {
                let input = open_or_stdin(file)?;
                let mut out = io::stdout().lock();
                let summary = command::run(&mut out, input, &command)?;
                out.flush()?;
                summary
            }
        }
    };

    if !cli.silent {
        command::report_advisories(&summary);
    }

    Ok(())
}

fn open_input(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn open_or_stdin(path: &Option<PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(open_input(path)?)),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Writes the whole transformed result into a temporary file next to
/// `target`, then atomically persists it over `target`. A failed run leaves
/// `target` untouched.
fn expand_to_file<R: BufRead>(
    target: &Path,
    input: R,
    command: &Command,
) -> anyhow::Result<ExpandSummary> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    debug!("Buffering output in {}", tmp.path().display());

    let summary = {
        let mut out = BufWriter::new(tmp.as_file_mut());
        let summary = command::run(&mut out, input, command)?;
        out.flush()?;
        summary
    };

    tmp.persist(target)?;
    Ok(summary)
}
