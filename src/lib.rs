// Public API exports
pub mod review;
pub mod segmenter;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use segmenter::{segment, GlossaryEntry};

pub use store::{AttemptRecord, HistoryStore, StoreError, TermStore};

pub use review::{
    prioritize, ConsolePrompter, Prompter, ReviewError, Session, SessionReport,
    DEFAULT_PRACTICE_THRESHOLD,
};

pub use stats::{aggregate, overall_rate, render_chart, TermStats};
