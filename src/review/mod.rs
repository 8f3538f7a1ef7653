mod console;
mod session;


pub use console::ConsolePrompter;
pub use session::{prioritize, Prompter, ReviewError, Session, SessionReport};

/// Recorded attempts a term needs before it stops coming up for review
pub const DEFAULT_PRACTICE_THRESHOLD: u32 = 2;
