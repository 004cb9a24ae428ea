//! Terminal UI.

use console::{style, Term};
use std::io::Write;

use super::{OutputMode, UserInterface};

/// Terminal UI writing messages to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", style(msg).yellow()).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", style(msg).red().bold()).ok();
    }
}
