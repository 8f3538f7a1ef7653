use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::segmenter::GlossaryEntry;
use crate::store::{AttemptRecord, HistoryStore, StoreError};

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("input stream closed")]
    InputClosed,
}

/// Console seam for the review loop. Implementations own all prompt text;
/// the session owns the flow.
pub trait Prompter {
    fn show_remaining(&mut self, count: usize);
    fn show_term(&mut self, term: &str);
    /// Returns the raw line entered at the "show answer" prompt
    fn read_reveal(&mut self) -> Result<String, ReviewError>;
    fn show_definition(&mut self, definition: &str);
    /// Returns the raw line entered at the correctness prompt
    fn read_assessment(&mut self) -> Result<String, ReviewError>;
    fn show_mastered(&mut self);
}

/// Terms still needing practice: those with fewer recorded attempts than
/// the threshold, in term-table order. Pure over its inputs.
pub fn prioritize<'a>(
    terms: &'a [GlossaryEntry],
    history: &[AttemptRecord],
    threshold: u32,
) -> Vec<&'a GlossaryEntry> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for attempt in history {
        *counts.entry(attempt.term.as_str()).or_insert(0) += 1;
    }

    terms
        .iter()
        .filter(|entry| counts.get(entry.term.as_str()).copied().unwrap_or(0) < threshold)
        .collect()
}

/// Summary of a finished review session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Attempts recorded before every term reached the threshold
    pub attempts: usize,
}

/// Interactive flashcard loop over a term table and its attempt history
pub struct Session<P: Prompter, R: Rng> {
    terms: Vec<GlossaryEntry>,
    history: HistoryStore,
    threshold: u32,
    prompter: P,
    rng: R,
}

impl<P: Prompter, R: Rng> Session<P, R> {
    pub fn new(
        terms: Vec<GlossaryEntry>,
        history: HistoryStore,
        threshold: u32,
        prompter: P,
        rng: R,
    ) -> Self {
        Self {
            terms,
            history,
            threshold,
            prompter,
            rng,
        }
    }

    /// Run until every term has at least `threshold` recorded attempts.
    ///
    /// One iteration shows a randomly chosen due term, reveals its
    /// definition when the reveal line is empty, reads the self-assessment
    /// (only a case-insensitive "y" counts as correct), and appends
    /// the attempt. The history store is re-read before each pick and
    /// rewritten in full after each attempt, so the store stays consistent
    /// between attempts.
    pub fn run(&mut self) -> Result<SessionReport, ReviewError> {
        let initial = self.history.load()?;
        let due = prioritize(&self.terms, &initial, self.threshold);
        self.prompter.show_remaining(due.len());

        let mut attempts = 0;
        loop {
            let history = self.history.load()?;
            let due = prioritize(&self.terms, &history, self.threshold);
            let Some(pick) = due.choose(&mut self.rng) else {
                self.prompter.show_mastered();
                break;
            };
            let (term, definition) = (pick.term.clone(), pick.definition.clone());

            self.prompter.show_term(&term);
            if self.prompter.read_reveal()?.is_empty() {
                self.prompter.show_definition(&definition);
            }

            let answer = self.prompter.read_assessment()?;
            let correct = answer.to_lowercase() == "y";
            self.history.append(AttemptRecord::now(term, correct))?;
            attempts += 1;
        }

        Ok(SessionReport { attempts })
    }
}
