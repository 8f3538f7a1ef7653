mod scanner;


pub use scanner::{segment, GlossaryEntry};
