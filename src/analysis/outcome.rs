//! Tagged result for one unit of work (a team fetch, a season's champion).
//!
//! Failures are recorded and logged instead of aborting the batch.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    /// Nothing to do for this unit (e.g. no champion on record).
    Skipped(String),
    /// The unit was attempted and produced nothing.
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Outcome::Skipped(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Outcome::Failed(reason.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Skipped(r) => Outcome::Skipped(r.clone()),
            Outcome::Failed(r) => Outcome::Failed(r.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Skipped(r) => Outcome::Skipped(r),
            Outcome::Failed(r) => Outcome::Failed(r),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Skipped(r) | Outcome::Failed(r) => Some(r),
        }
    }
}

impl<T, E: fmt::Display> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

/// Tally of outcomes across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub ok: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl OutcomeCounts {
    pub fn record<T>(&mut self, outcome: &Outcome<T>) {
        match outcome {
            Outcome::Ok(_) => self.ok += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.skipped + self.failed
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ok, {} skipped, {} failed",
            self.ok, self.skipped, self.failed
        )
    }
}
