//! Binding one setting: resolve its raw value, convert it, and pair the
//! result with the setting's hint.
use tracing::debug;

use crate::core::convert::Converter;
use crate::core::resolve::{find_value, is_present, Source};
use crate::core::store::ArgumentStore;
use crate::error::Result;

/// A setting's resolved value together with its declared hint.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T> {
    pub value: T,
    pub hint: String,
}

/// Resolve one setting: look up its raw value (or default) and convert it.
pub fn bind<S, C>(
    store: &ArgumentStore,
    aliases: &[S],
    default_raw: &str,
    hint: &str,
    converter: &C,
) -> Result<Bound<C::Output>>
where
    S: AsRef<str>,
    C: Converter + ?Sized,
{
    let raw = find_value(store, aliases, default_raw)?;
    debug!(
        value = raw.value,
        from_default = matches!(raw.source, Source::Default),
        "binding setting"
    );
    Ok(Bound {
        value: converter.convert(raw.value)?,
        hint: hint.to_string(),
    })
}

/// Resolve a flag: true iff any alias is present.
pub fn bind_flag<S: AsRef<str>>(store: &ArgumentStore, aliases: &[S], hint: &str) -> Bound<bool> {
    Bound {
        value: is_present(store, aliases),
        hint: hint.to_string(),
    }
}
