//! Terminal output formatting for the pxgrid CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for machine-readable
//! output (shell completions).

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Sampling photo.jpg (1280x853 -> 86x57 cells)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
