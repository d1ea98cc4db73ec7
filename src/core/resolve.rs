//! Name and flag resolution over an [`ArgumentStore`].
//!
//! Resolution is a linear scan: the first token equal to any alias of a
//! setting decides its raw value, which is the token right after it. The
//! following token is taken as-is, even if it looks like another option.
use tracing::{debug, trace};

use crate::core::store::ArgumentStore;
use crate::error::{Error, Result};

/// Where a raw value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Declared default; no alias was present.
    Default,
    /// Token following the alias found at `alias_index`.
    Argument { alias_index: usize },
}

/// A raw, unconverted setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<'a> {
    pub value: &'a str,
    pub source: Source,
}

/// Position of the first token matching any of `aliases`.
fn position<S: AsRef<str>>(store: &ArgumentStore, aliases: &[S]) -> Option<usize> {
    store
        .tokens()
        .iter()
        .position(|token| aliases.iter().any(|alias| alias.as_ref() == token))
}

/// Resolve a setting to its raw value, reporting where the value came from.
pub fn find_value<'a, S: AsRef<str>>(
    store: &'a ArgumentStore,
    aliases: &[S],
    default_raw: &'a str,
) -> Result<Raw<'a>> {
    let tokens = store.tokens();
    let Some(index) = position(store, aliases) else {
        return Ok(Raw {
            value: default_raw,
            source: Source::Default,
        });
    };

    match tokens.get(index + 1) {
        Some(value) => Ok(Raw {
            value: value.as_str(),
            source: Source::Argument { alias_index: index },
        }),
        None => Err(Error::MissingValue {
            alias: tokens[index].clone(),
        }),
    }
}

/// Resolve a setting to its raw value: the token after the first matching
/// alias, or `default_raw` verbatim when no alias is present.
pub fn resolve<'a, S: AsRef<str>>(
    store: &'a ArgumentStore,
    aliases: &[S],
    default_raw: &'a str,
) -> Result<&'a str> {
    let raw = find_value(store, aliases, default_raw)?;
    if let Source::Argument { alias_index } = raw.source {
        debug!(alias = %store.tokens()[alias_index], value = raw.value, "matched option");
    }
    Ok(raw.value)
}

/// True if any token equals any alias. Consumes nothing.
pub fn is_present<S: AsRef<str>>(store: &ArgumentStore, aliases: &[S]) -> bool {
    let present = position(store, aliases).is_some();
    trace!(present, "flag lookup");
    present
}
