//! Interactive typing session against a loaded index.
//!
//! Mirrors incremental autocomplete at a terminal: each entered chunk
//! extends the current pattern instead of replacing it. `reset` clears the
//! pattern, `exit` (or EOF) ends the session.

use std::io::{self, BufRead, Write};

use crate::index::AutocompleteIndex;

/// Outcome of feeding one input chunk into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The pattern grew; suggestions should be shown.
    Extended,
    /// The pattern was cleared.
    Reset,
    /// The session is over.
    Exit,
}

/// One transition of the session state machine. Pure, so the table below is
/// testable without a terminal.
pub fn apply(pattern: &mut String, input: &str) -> Step {
    match input.trim() {
        "exit" => Step::Exit,
        "reset" => {
            pattern.clear();
            Step::Reset
        }
        chunk => {
            pattern.push_str(chunk);
            Step::Extended
        }
    }
}

/// Run the loop over stdin/stdout until `exit` or EOF.
pub fn run(index: &AutocompleteIndex, max_results: usize) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut pattern = String::new();
    let mut line = String::new();

    writeln!(
        stdout,
        "start typing to extend the pattern ('reset' clears, 'exit' quits)"
    )?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match apply(&mut pattern, &line) {
            Step::Exit => break,
            Step::Reset => {
                writeln!(stdout, "pattern cleared")?;
                continue;
            }
            Step::Extended => {}
        }

        let suggestions = index.query(&pattern, max_results);
        if suggestions.is_empty() {
            writeln!(stdout, "no suggestions for '{pattern}'")?;
        } else {
            writeln!(stdout, "suggestions for '{pattern}':")?;
            for suggestion in suggestions {
                writeln!(stdout, "  {}  ({})", suggestion.term, suggestion.weight)?;
            }
        }
    }
    Ok(())
}
