use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use termcoach::{
    aggregate, render_chart, segment, ConsolePrompter, HistoryStore, ReviewError, Session,
    TermStore, DEFAULT_PRACTICE_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "termcoach", about = "Glossary flashcard trainer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract term/definition pairs from a glossary text file
    Extract {
        /// Plain-text glossary excerpt
        input: PathBuf,
        /// Where to write the term table
        #[arg(long, default_value = "output.csv")]
        terms: PathBuf,
    },
    /// Run an interactive flashcard session
    Review {
        /// Term table produced by `extract`
        #[arg(long, default_value = "output.csv")]
        terms: PathBuf,
        /// Attempt history store
        #[arg(long, default_value = "history.csv")]
        history: PathBuf,
        /// Recorded attempts after which a term stops coming up
        #[arg(long, default_value_t = DEFAULT_PRACTICE_THRESHOLD)]
        threshold: u32,
    },
    /// Chart per-term success rates from the attempt history
    Stats {
        /// Attempt history store
        #[arg(long, default_value = "history.csv")]
        history: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { input, terms } => extract(&input, &terms),
        Command::Review {
            terms,
            history,
            threshold,
        } => review(&terms, &history, threshold),
        Command::Stats { history } => stats(&history),
    }
}

fn extract(input: &Path, terms: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read glossary text from {}", input.display()))?;

    let entries = segment(text.lines());
    TermStore::new(terms)
        .save(&entries)
        .with_context(|| format!("Failed to write term table to {}", terms.display()))?;

    println!("Extracted {} terms to {}", entries.len(), terms.display());
    Ok(())
}

fn review(terms: &Path, history: &Path, threshold: u32) -> Result<()> {
    let table = TermStore::new(terms)
        .load()
        .with_context(|| format!("Failed to load term table from {}", terms.display()))?;

    let mut session = Session::new(
        table,
        HistoryStore::new(history),
        threshold,
        ConsolePrompter,
        rand::rng(),
    );

    match session.run() {
        Ok(report) => {
            log::debug!("session recorded {} attempts", report.attempts);
            Ok(())
        }
        // ^D at a prompt ends the session; every completed attempt is already saved
        Err(ReviewError::InputClosed) => {
            println!();
            Ok(())
        }
        Err(err) => Err(err).context("Review session failed"),
    }
}

fn stats(history: &Path) -> Result<()> {
    let records = HistoryStore::new(history)
        .load()
        .with_context(|| format!("Failed to load history from {}", history.display()))?;

    if records.is_empty() {
        println!("No attempts recorded yet.");
        return Ok(());
    }

    print!("{}", render_chart(&aggregate(&records)));
    Ok(())
}
