//! Line-oriented progress and result reporting.

use crate::invoker::Outcome;
use std::{fmt, io::Write};
use yansi::{Color, Paint};

/// Tally of recorded outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn add(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            outcome if outcome.is_pass() => self.passed += 1,
            _ => self.failed += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "test result: {}. {} passed; {} failed; {} skipped",
            if self.is_success() { "ok" } else { "FAILED" },
            self.passed,
            self.failed,
            self.skipped
        )
    }
}

/// Writes banners, pending lines and outcome lines to `W`.
///
/// Pending lines are only drawn in interactive mode; they are erased by the next write.
pub struct Reporter<W> {
    out: W,
    interactive: bool,
    color: bool,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, interactive: false, color: false, summary: Summary::default() }
    }

    /// Draws transient pending lines before each call.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Paints outcome marks.
    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Top-level banner of a network section.
    pub fn section(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.out, "\n{:=^64}", format!(" {title} "))
    }

    /// Banner of a contract or scope within a section.
    pub fn banner(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.out, "\n====== {title} ======")
    }

    pub fn text(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Shows that `description` is being evaluated.
    pub fn pending(&mut self, description: &str) -> std::io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        write!(self.out, "… {description}")?;
        self.out.flush()?;
        write!(self.out, "\r\x1b[2K")
    }

    /// Records the outcome of `description` and writes its final line.
    pub fn record(&mut self, description: &str, outcome: &Outcome) -> std::io::Result<()> {
        self.summary.add(outcome);
        let (mark, color) = match outcome {
            Outcome::Skipped => ("↷", Color::Yellow),
            outcome if outcome.is_pass() => ("✔", Color::Green),
            _ => ("✘", Color::Red),
        };
        if self.color {
            writeln!(self.out, "{} {description}: {outcome}", mark.fg(color))
        } else {
            writeln!(self.out, "{mark} {description}: {outcome}")
        }
    }

    /// Writes the summary line.
    pub fn finish(&mut self) -> std::io::Result<Summary> {
        writeln!(self.out, "\n{}", self.summary)?;
        self.out.flush()?;
        Ok(self.summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
