//! Startup banner shown on standard output.

use std::fmt;

use crate::{NonEmptyStaticStr, NonEmptyString};

pub const DEFAULT_TITLE: NonEmptyStaticStr = NonEmptyStaticStr::new("Income Tax Filing System");
pub const DEFAULT_SUBTITLE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Using DTRules Decision Tables");

/// Payload of the single log line emitted once startup completes.
pub const INIT_MESSAGE: &str = "System initialized";

/// The two banner lines, title first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    title: NonEmptyString,
    subtitle: NonEmptyString,
}

impl Banner {
    #[must_use]
    pub fn new(title: NonEmptyString, subtitle: NonEmptyString) -> Self {
        Self { title, subtitle }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        self.subtitle.as_str()
    }

    /// Lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.subtitle.as_str()].into_iter()
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE.into(), DEFAULT_SUBTITLE.into())
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
