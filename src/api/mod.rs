//! Declarative resolution: build an ordered list of settings with [`Parser`],
//! resolve them all at once against an [`ArgumentStore`], and read typed values
//! and hints back from the [`Resolved`] set.
//!
//! Every declaration of a parser forms one help-checked region: when a help
//! alias is present, [`Parser::resolve_all`] returns [`Error::HelpRequested`]
//! before any setting is converted.
use std::any::Any;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::convert::Converter;
use crate::core::help::{HelpEntry, HelpInterceptor, HelpListing};
use crate::core::resolve::{find_value, is_present, Raw, Source};
use crate::core::store::ArgumentStore;
use crate::error::{Error, Result};
use crate::types::{FromValue, Kind, Value};

/// Parser-wide behavior; suitable for config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Aliases that request the help listing. Empty disables the help check.
    pub help_aliases: Vec<String>,
    /// Reject an option value that is itself a declared alias instead of
    /// consuming it.
    pub strict: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            help_aliases: vec!["--help".to_string(), "-h".to_string()],
            strict: false,
        }
    }
}

type ErasedConverter = Box<dyn Fn(&str) -> Result<Value> + Send + Sync>;

enum Target {
    Flag,
    Kind(Kind),
    Custom(ErasedConverter),
}

struct Declaration {
    name: String,
    aliases: Vec<String>,
    default: String,
    hint: String,
    target: Target,
}

impl Declaration {
    /// A setting declared without aliases is looked up by its own name.
    fn lookup_aliases(&self) -> &[String] {
        if self.aliases.is_empty() {
            std::slice::from_ref(&self.name)
        } else {
            &self.aliases
        }
    }

    fn help_entry(&self) -> HelpEntry {
        HelpEntry {
            name: self.name.clone(),
            aliases: self.lookup_aliases().to_vec(),
            hint: self.hint.clone(),
        }
    }
}

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|a| a.to_string()).collect()
}

/// Ordered setting declarations.
#[derive(Default)]
pub struct Parser {
    options: ParserOptions,
    declarations: Vec<Declaration>,
}

impl Parser {
    /// A parser with the default options: `--help` and `-h` request help.
    ///
    /// A setting that also uses `-h` (a common short form for `--height` or
    /// `--host`) is shadowed by help; pass other `help_aliases` through
    /// [`Parser::with_options`] in that case. [`Parser::help_collisions`]
    /// reports such aliases.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            declarations: Vec::new(),
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    fn declare(
        mut self,
        name: &str,
        aliases: &[&str],
        default: &str,
        hint: &str,
        target: Target,
    ) -> Self {
        self.declarations.push(Declaration {
            name: name.to_string(),
            aliases: owned(aliases),
            default: default.to_string(),
            hint: hint.to_string(),
            target,
        });
        self
    }

    /// Declare a setting of a built-in kind.
    pub fn setting(self, kind: Kind, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.declare(name, aliases, default, hint, Target::Kind(kind))
    }

    pub fn string(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::String, name, aliases, default, hint)
    }

    pub fn int(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::Int, name, aliases, default, hint)
    }

    pub fn float(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::Float, name, aliases, default, hint)
    }

    pub fn double(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::Double, name, aliases, default, hint)
    }

    pub fn string_vec(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::StringVec, name, aliases, default, hint)
    }

    pub fn int_vec(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::IntVec, name, aliases, default, hint)
    }

    pub fn float_vec(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::FloatVec, name, aliases, default, hint)
    }

    pub fn double_vec(self, name: &str, aliases: &[&str], default: &str, hint: &str) -> Self {
        self.setting(Kind::DoubleVec, name, aliases, default, hint)
    }

    /// Declare a boolean flag; its value is the presence of any alias.
    pub fn flag(self, name: &str, aliases: &[&str], hint: &str) -> Self {
        self.declare(name, aliases, "", hint, Target::Flag)
    }

    /// Declare a setting converted by a caller-supplied [`Converter`]. Read it
    /// back with [`Resolved::custom`].
    pub fn custom<C>(self, name: &str, aliases: &[&str], default: &str, hint: &str, converter: C) -> Self
    where
        C: Converter + Send + Sync + 'static,
        C::Output: Any + Send + Sync,
    {
        let erased: ErasedConverter = Box::new(move |raw: &str| {
            let value = converter.convert(raw)?;
            Ok(Value::Custom(Box::new(value)))
        });
        self.declare(name, aliases, default, hint, Target::Custom(erased))
    }

    /// The listing printed when help is requested.
    pub fn help_listing(&self) -> HelpListing {
        self.declarations.iter().map(Declaration::help_entry).collect()
    }

    /// Help aliases that are also declared as a setting alias. Such a setting
    /// can never be given on the command line, since its alias requests help.
    pub fn help_collisions(&self) -> Vec<&str> {
        self.options
            .help_aliases
            .iter()
            .filter(|help| {
                self.declarations
                    .iter()
                    .any(|d| d.lookup_aliases().contains(*help))
            })
            .map(String::as_str)
            .collect()
    }

    /// Resolve every declaration in order. The help check runs first; after it
    /// the first failing setting aborts the whole resolution.
    pub fn resolve_all(&self, store: &ArgumentStore) -> Result<Resolved> {
        if !self.options.help_aliases.is_empty() {
            let collisions = self.help_collisions();
            if !collisions.is_empty() {
                debug!(?collisions, "help aliases shadow declared setting aliases");
            }
            let mut help = HelpInterceptor::new(store, self.options.help_aliases.as_slice());
            help.check(self.declarations.iter().map(Declaration::help_entry))?;
        }

        let mut settings = Vec::with_capacity(self.declarations.len());
        for decl in &self.declarations {
            let value = match &decl.target {
                Target::Flag => Value::Bool(is_present(store, decl.lookup_aliases())),
                Target::Kind(kind) => kind.convert(self.raw_value(store, decl)?.value)?,
                Target::Custom(convert) => convert(self.raw_value(store, decl)?.value)?,
            };
            debug!(setting = %decl.name, kind = value.kind_name(), "resolved setting");
            settings.push(ResolvedSetting {
                name: decl.name.clone(),
                hint: decl.hint.clone(),
                value,
            });
        }
        Ok(Resolved { settings })
    }

    fn raw_value<'a>(&self, store: &'a ArgumentStore, decl: &'a Declaration) -> Result<Raw<'a>> {
        let raw = find_value(store, decl.lookup_aliases(), &decl.default)?;
        if let (true, Source::Argument { alias_index }) = (self.options.strict, raw.source) {
            if self.is_alias(raw.value) {
                return Err(Error::AmbiguousValue {
                    alias: store.tokens()[alias_index].clone(),
                    value: raw.value.to_string(),
                });
            }
        }
        Ok(raw)
    }

    fn is_alias(&self, token: &str) -> bool {
        self.options.help_aliases.iter().any(|a| a == token)
            || self
                .declarations
                .iter()
                .any(|d| d.lookup_aliases().iter().any(|a| a == token))
    }
}

/// One resolved setting.
#[derive(Debug)]
pub struct ResolvedSetting {
    pub name: String,
    pub hint: String,
    pub value: Value,
}

/// The outcome of [`Parser::resolve_all`], in declaration order.
#[derive(Debug, Default)]
pub struct Resolved {
    settings: Vec<ResolvedSetting>,
}

impl Resolved {
    fn find(&self, name: &str) -> Result<&ResolvedSetting> {
        self.settings
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::UnknownSetting {
                name: name.to_string(),
            })
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.find(name).ok().map(|s| &s.value)
    }

    pub fn hint(&self, name: &str) -> Option<&str> {
        self.find(name).ok().map(|s| s.hint.as_str())
    }

    /// Typed value of a built-in kind or flag.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T> {
        let setting = self.find(name)?;
        T::from_value(&setting.value).ok_or_else(|| Error::KindMismatch {
            name: name.to_string(),
            expected: T::KIND,
            actual: setting.value.kind_name(),
        })
    }

    /// Value produced by a custom converter.
    pub fn custom<T: Any>(&self, name: &str) -> Result<&T> {
        let setting = self.find(name)?;
        let value = match &setting.value {
            Value::Custom(boxed) => boxed.downcast_ref::<T>(),
            _ => None,
        };
        value.ok_or_else(|| Error::KindMismatch {
            name: name.to_string(),
            expected: std::any::type_name::<T>(),
            actual: setting.value.kind_name(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedSetting> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// A JSON object of `name: value` pairs in declaration order.
impl Serialize for Resolved {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.settings.len()))?;
        for setting in &self.settings {
            map.serialize_entry(&setting.name, &setting.value)?;
        }
        map.end()
    }
}
