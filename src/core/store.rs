//! The argument store: the raw tokens every setting is resolved against.
//!
//! An [`ArgumentStore`] is an ordinary owned value, so tests and embedding
//! callers can resolve against synthetic token lists. For programs that want
//! the classic "set the arguments once at startup" shape, a process-wide slot
//! is available through [`init`] / [`init_from_env`] and [`global`].
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{Error, Result};

/// Ordered raw argument tokens. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    tokens: Vec<String>,
}

impl ArgumentStore {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The process argument vector, program name included. Non UTF-8 arguments
    /// are converted lossily.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

static GLOBAL_STORE: OnceCell<ArgumentStore> = OnceCell::new();

/// Install the process-wide store. Fails if it was already installed.
pub fn init(store: ArgumentStore) -> Result<&'static ArgumentStore> {
    let count = store.len();
    GLOBAL_STORE
        .set(store)
        .map_err(|_| Error::AlreadyInitialized)?;
    debug!(tokens = count, "argument store initialized");
    global()
}

/// Install the process-wide store from [`std::env::args_os`].
pub fn init_from_env() -> Result<&'static ArgumentStore> {
    init(ArgumentStore::from_env())
}

/// The process-wide store, or [`Error::Uninitialized`] if [`init`] has not run.
pub fn global() -> Result<&'static ArgumentStore> {
    GLOBAL_STORE.get().ok_or(Error::Uninitialized)
}
