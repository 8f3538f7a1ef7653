use std::io::{self, BufRead, Write};

use crate::review::session::{Prompter, ReviewError};

/// Stdin/stdout prompter used by the CLI
pub struct ConsolePrompter;

impl ConsolePrompter {
    fn prompt(&self, text: &str) -> Result<String, ReviewError> {
        print!("{}", text);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ReviewError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

impl Prompter for ConsolePrompter {
    fn show_remaining(&mut self, count: usize) {
        println!("Terms left to learn: {}", count);
    }

    fn show_term(&mut self, term: &str) {
        println!("\nTerm: {}", term);
    }

    fn read_reveal(&mut self) -> Result<String, ReviewError> {
        self.prompt("Press Enter to show answer: ")
    }

    fn show_definition(&mut self, definition: &str) {
        println!("{}", definition);
    }

    fn read_assessment(&mut self) -> Result<String, ReviewError> {
        self.prompt("Did you get the answer right? (y/n): ")
    }

    fn show_mastered(&mut self) {
        println!("Congratulations! You seem to know all the terms.");
    }
}
