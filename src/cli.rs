//! Command-line front end: reads tokens, runs build → break → solve, prints
//! every longest chain.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_OVERLAP_WIDTH, OverlapConfig, ShortTokens};
use crate::graph::OverlapGraph;

#[derive(Parser, Debug)]
#[command(name = "overlap-dag")]
#[command(about = "Chain overlapping tokens into the longest possible string")]
#[command(version)]
pub struct Cli {
    /// File with one token per line (stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Number of characters consecutive tokens share
    #[arg(long, default_value_t = DEFAULT_OVERLAP_WIDTH)]
    pub overlap: usize,

    /// What to do with tokens shorter than the overlap
    #[arg(long, value_enum, default_value_t = ShortTokens::Reject)]
    pub short_tokens: ShortTokens,

    /// Print adjacency lists (after cycle breaking) before the result
    #[arg(long)]
    pub adjacency: bool,

    /// Print vertex and edge counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, install the log subscriber and run.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    execute(&cli, &mut stdout.lock())
}

/// Run the three graph stages for already-parsed arguments, writing results to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let tokens = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_tokens(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => read_tokens(io::stdin().lock()).context("failed to read stdin")?,
    };
    info!(tokens = tokens.len(), "tokens loaded");

    let config = OverlapConfig::with_width(cli.overlap)?.with_short_tokens(cli.short_tokens);
    let mut graph = OverlapGraph::with_config(config);
    graph.add_all(tokens)?;

    let removed = graph.break_cycles();
    if cli.stats {
        eprintln!("{} (removed {} edges)", graph.stats(), removed.len());
    }
    if cli.adjacency {
        out.write_all(graph.render_adjacency().as_bytes())?;
    }

    let longest = graph.find_longest_path()?;
    writeln!(out, "{longest}")?;
    Ok(())
}

/// Read one token per line, trimming whitespace and skipping blank lines.
pub fn read_tokens<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
