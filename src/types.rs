//! Shared types: the value [`Kind`]s a setting can be declared with, the
//! dynamically typed [`Value`] a resolved setting holds, and [`FromValue`] for
//! getting typed values back out.
use std::any::Any;
use std::fmt;

use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::core::convert::{Converter, Double, Float, Int, List, Text};
use crate::error::Result;

/// Built-in target kinds for non-flag settings.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    String,
    Int,
    Float,
    Double,
    StringVec,
    IntVec,
    FloatVec,
    DoubleVec,
}

impl Kind {
    /// Convert a raw string with this kind's built-in converter.
    pub fn convert(self, raw: &str) -> Result<Value> {
        Ok(match self {
            Kind::String => Value::Str(Text.convert(raw)?),
            Kind::Int => Value::Int(Int.convert(raw)?),
            Kind::Float => Value::Float(Float.convert(raw)?),
            Kind::Double => Value::Double(Double.convert(raw)?),
            Kind::StringVec => Value::StrVec(List(Text).convert(raw)?),
            Kind::IntVec => Value::IntVec(List(Int).convert(raw)?),
            Kind::FloatVec => Value::FloatVec(List(Float).convert(raw)?),
            Kind::DoubleVec => Value::DoubleVec(List(Double).convert(raw)?),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::StringVec => "string-vec",
            Kind::IntVec => "int-vec",
            Kind::FloatVec => "float-vec",
            Kind::DoubleVec => "double-vec",
        };
        write!(f, "{}", s)
    }
}

/// A resolved setting value.
pub enum Value {
    Str(String),
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    StrVec(Vec<String>),
    IntVec(Vec<i32>),
    FloatVec(Vec<f32>),
    DoubleVec(Vec<f64>),
    /// Output of a caller-supplied converter.
    Custom(Box<dyn Any + Send + Sync>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Bool(_) => "flag",
            Value::StrVec(_) => "string-vec",
            Value::IntVec(_) => "int-vec",
            Value::FloatVec(_) => "float-vec",
            Value::DoubleVec(_) => "double-vec",
            Value::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Double(v) => f.debug_tuple("Double").field(v).finish(),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::StrVec(v) => f.debug_tuple("StrVec").field(v).finish(),
            Value::IntVec(v) => f.debug_tuple("IntVec").field(v).finish(),
            Value::FloatVec(v) => f.debug_tuple("FloatVec").field(v).finish(),
            Value::DoubleVec(v) => f.debug_tuple("DoubleVec").field(v).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Scalars print as-is, vectors space-separated; custom values print `<custom>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(v) => f.write_str(v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::StrVec(v) => join(f, v),
            Value::IntVec(v) => join(f, v),
            Value::FloatVec(v) => join(f, v),
            Value::DoubleVec(v) => join(f, v),
            Value::Custom(_) => f.write_str("<custom>"),
        }
    }
}

fn serialize_seq<S, T>(serializer: S, items: &[T]) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

/// Custom values have no known shape and serialize as `null`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Str(v) => serializer.serialize_str(v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::StrVec(v) => serialize_seq(serializer, v),
            Value::IntVec(v) => serialize_seq(serializer, v),
            Value::FloatVec(v) => serialize_seq(serializer, v),
            Value::DoubleVec(v) => serialize_seq(serializer, v),
            Value::Custom(_) => serializer.serialize_unit(),
        }
    }
}

/// Typed extraction from a [`Value`].
pub trait FromValue: Sized {
    /// Kind name used in mismatch errors.
    const KIND: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl FromValue for $ty {
            const KIND: &'static str = $kind;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

from_value!(String, Str, "string");
from_value!(i32, Int, "int");
from_value!(f32, Float, "float");
from_value!(f64, Double, "double");
from_value!(bool, Bool, "flag");
from_value!(Vec<String>, StrVec, "string-vec");
from_value!(Vec<i32>, IntVec, "int-vec");
from_value!(Vec<f32>, FloatVec, "float-vec");
from_value!(Vec<f64>, DoubleVec, "double-vec");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_convert_to_matching_values() {
        assert!(matches!(Kind::Int.convert("5").unwrap(), Value::Int(5)));
        assert!(matches!(Kind::String.convert("hi").unwrap(), Value::Str(s) if s == "hi"));
        match Kind::FloatVec.convert("0.3 2.0").unwrap() {
            Value::FloatVec(v) => assert_eq!(v, vec![0.3f32, 2.0]),
            other => panic!("unexpected {other:?}"),
        }
        assert!(Kind::Double.convert("x").is_err());
    }

    #[test]
    fn kinds_use_kebab_case_names() {
        let kind: Kind = serde_json::from_str("\"double-vec\"").unwrap();
        assert_eq!(kind, Kind::DoubleVec);
        assert_eq!(serde_json::to_string(&Kind::StringVec).unwrap(), "\"string-vec\"");
        assert_eq!(Kind::IntVec.to_string(), "int-vec");
    }

    #[test]
    fn display_and_json() {
        let v = Value::IntVec(vec![42, 36, 1]);
        assert_eq!(v.to_string(), "42 36 1");
        assert_eq!(serde_json::to_string(&v).unwrap(), "[42,36,1]");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        let custom = Value::Custom(Box::new('A'));
        assert_eq!(custom.to_string(), "<custom>");
        assert_eq!(serde_json::to_string(&custom).unwrap(), "null");
        assert_eq!(format!("{:?}", custom), "Custom(..)");
    }

    #[test]
    fn typed_extraction() {
        assert_eq!(i32::from_value(&Value::Int(3)), Some(3));
        assert_eq!(f64::from_value(&Value::Int(3)), None);
        assert_eq!(
            Vec::<String>::from_value(&Value::StrVec(vec!["a".into()])),
            Some(vec!["a".to_string()])
        );
        assert_eq!(<Vec<f64> as FromValue>::KIND, "double-vec");
        assert_eq!(Value::Bool(false).kind_name(), bool::KIND);
    }
}
