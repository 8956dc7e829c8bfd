//! Terminal palette for human-readable output.
//!
//! Standard ANSI bright colors only, so the output reads the same on any
//! terminal that supports color at all.

use colored::{ColoredString, Colorize};

use crate::whois::DomainStatus;

/// Semantic colors applied to any string-like value.
pub trait Palette {
    fn heading(&self) -> ColoredString;
    fn label(&self) -> ColoredString;
    fn value(&self) -> ColoredString;
    fn muted(&self) -> ColoredString;
    fn good(&self) -> ColoredString;
    fn caution(&self) -> ColoredString;
    fn danger(&self) -> ColoredString;

    /// Color that matches how worrying `status` is.
    fn for_status(&self, status: DomainStatus) -> ColoredString {
        match status {
            DomainStatus::Active => self.good(),
            DomainStatus::Suspended => self.caution(),
            DomainStatus::Deleted => self.danger(),
        }
    }
}

impl<S: AsRef<str>> Palette for S {
    fn heading(&self) -> ColoredString {
        self.as_ref().bright_magenta().bold()
    }

    fn label(&self) -> ColoredString {
        self.as_ref().bright_cyan().bold()
    }

    fn value(&self) -> ColoredString {
        self.as_ref().white()
    }

    fn muted(&self) -> ColoredString {
        self.as_ref().bright_black()
    }

    fn good(&self) -> ColoredString {
        self.as_ref().bright_green().bold()
    }

    fn caution(&self) -> ColoredString {
        self.as_ref().bright_yellow().bold()
    }

    fn danger(&self) -> ColoredString {
        self.as_ref().bright_red().bold()
    }
}
