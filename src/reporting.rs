//! Types for standardized reports to the user about conversion runs.
//!
//! Site-level skips are normal and silent per site; the report is where
//! their aggregate counts surface, so a user can see why a loc file came
//! out smaller than the input VCF.

/// The [`CommandOutput<U>`] type output is generic over some data output
/// from a command, and a [`Report`] that reports information to the user.
pub struct CommandOutput<U> {
    pub value: U,
    pub report: Report,
}

impl<U> CommandOutput<U> {
    pub fn new(value: U, report: Report) -> Self {
        Self { value, report }
    }
}

/// A type to (semi) standardize reporting to the user.
#[derive(Default)]
pub struct Report {
    entries: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, message: String) {
        self.entries.push(message)
    }

    /// Add a `count`-prefixed entry, skipping zero counts.
    pub fn add_count(&mut self, count: usize, message: &str) {
        if count > 0 {
            self.entries.push(format!("{} {}", count, message));
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
