//! Help interception for a region of setting declarations.
//!
//! The check runs before anything in the region is converted, so a help
//! alias always wins over a malformed value or a valueless option elsewhere
//! on the command line.
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::resolve::is_present;
use crate::core::store::ArgumentStore;
use crate::error::{Error, Result};

/// One line of a help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    pub name: String,
    pub aliases: Vec<String>,
    pub hint: String,
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.hint)
    }
}

/// Every setting of a help-checked region, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HelpListing {
    entries: Vec<HelpEntry>,
}

impl HelpListing {
    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<HelpEntry> for HelpListing {
    fn from_iter<I: IntoIterator<Item = HelpEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One `name: hint` line per entry.
impl fmt::Display for HelpListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpState {
    Scanning,
    Done,
}

/// Guards a region of declarations with a single help check.
#[derive(Debug)]
pub struct HelpInterceptor<'a> {
    store: &'a ArgumentStore,
    aliases: Vec<String>,
    state: HelpState,
}

impl<'a> HelpInterceptor<'a> {
    pub fn new<S: AsRef<str>>(store: &'a ArgumentStore, aliases: &[S]) -> Self {
        Self {
            store,
            aliases: aliases.iter().map(|a| a.as_ref().to_string()).collect(),
            state: HelpState::Scanning,
        }
    }

    pub fn state(&self) -> HelpState {
        self.state
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_requested(&self) -> bool {
        is_present(self.store, self.aliases.as_slice())
    }

    /// Run the region's help check. With a help alias present this yields
    /// [`Error::HelpRequested`] carrying the region's listing; otherwise `Ok`.
    /// Once done, later calls are no-ops.
    pub fn check<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = HelpEntry>,
    {
        if self.state == HelpState::Done {
            return Ok(());
        }
        self.state = HelpState::Done;

        if !self.is_requested() {
            return Ok(());
        }
        let listing: HelpListing = entries.into_iter().collect();
        debug!(settings = listing.len(), "help requested");
        Err(Error::HelpRequested(listing))
    }
}
