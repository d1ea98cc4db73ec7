//! Declaration files: settings described in JSON, suitable for config files
//! and the `clom` binary.
use serde::{Deserialize, Serialize};

use crate::api::{Parser, ParserOptions};
use crate::types::Kind;

/// Declared kind of a setting in a declaration file; built-in kinds plus flags.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclKind {
    String,
    Int,
    Float,
    Double,
    StringVec,
    IntVec,
    FloatVec,
    DoubleVec,
    Flag,
}

impl DeclKind {
    /// The value kind, or `None` for a flag.
    pub fn value_kind(self) -> Option<Kind> {
        match self {
            DeclKind::String => Some(Kind::String),
            DeclKind::Int => Some(Kind::Int),
            DeclKind::Float => Some(Kind::Float),
            DeclKind::Double => Some(Kind::Double),
            DeclKind::StringVec => Some(Kind::StringVec),
            DeclKind::IntVec => Some(Kind::IntVec),
            DeclKind::FloatVec => Some(Kind::FloatVec),
            DeclKind::DoubleVec => Some(Kind::DoubleVec),
            DeclKind::Flag => None,
        }
    }
}

/// One setting declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDecl {
    pub name: String,
    /// Empty means the name itself is the only alias
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Raw default; ignored for flags
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub hint: String,
    pub kind: DeclKind,
}

fn default_help_aliases() -> Vec<String> {
    ParserOptions::default().help_aliases
}

/// A full declaration set, suitable for JSON files consumed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationFile {
    #[serde(default = "default_help_aliases")]
    pub help_aliases: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    pub settings: Vec<SettingDecl>,
}

impl DeclarationFile {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn options(&self) -> ParserOptions {
        ParserOptions {
            help_aliases: self.help_aliases.clone(),
            strict: self.strict,
        }
    }

    /// Build a [`Parser`] declaring every setting in file order.
    pub fn to_parser(&self) -> Parser {
        self.settings
            .iter()
            .fold(Parser::with_options(self.options()), |parser, decl| {
                let aliases: Vec<&str> = decl.aliases.iter().map(String::as_str).collect();
                match decl.kind.value_kind() {
                    Some(kind) => parser.setting(kind, &decl.name, &aliases, &decl.default, &decl.hint),
                    None => parser.flag(&decl.name, &aliases, &decl.hint),
                }
            })
    }
}
