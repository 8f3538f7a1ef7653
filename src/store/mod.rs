mod error;
mod history;
mod term_table;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use history::{AttemptRecord, HistoryStore};
pub use term_table::TermStore;
