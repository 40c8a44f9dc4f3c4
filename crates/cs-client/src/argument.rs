//! Typed call arguments.
//!
//! Arguments are positional: the n-th argument binds to the n-th declared
//! parameter. Each one remembers the Rust type it was built from, which is
//! what body resolution matches against.

use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;
use callspec_schema::TypeToken;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

/// Runtime shape of an argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Json(serde_json::Value),
    Headers(IndexMap<String, String>),
    Bytes(Bytes),
}

/// One argument value plus the token of the type it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    value: ArgValue,
    type_token: TypeToken,
}

impl Argument {
    /// Serialize any value into an argument.
    pub fn value<T: Serialize + ?Sized + 'static>(value: &T) -> Result<Self> {
        Ok(Self {
            value: ArgValue::Json(serde_json::to_value(value)?),
            type_token: TypeToken::of::<T>(),
        })
    }

    /// A plain string argument.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: ArgValue::Text(value.into()),
            type_token: TypeToken::of::<String>(),
        }
    }

    /// A header map argument.
    pub fn headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::string_map(headers, TypeToken::of::<IndexMap<String, String>>())
    }

    /// A string map recorded under the token of the map type it came from.
    fn string_map<I, K, V>(entries: I, type_token: TypeToken) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            value: ArgValue::Headers(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            type_token,
        }
    }

    /// A raw bytes argument.
    pub fn bytes(value: impl Into<Bytes>) -> Self {
        Self {
            value: ArgValue::Bytes(value.into()),
            type_token: TypeToken::of::<Bytes>(),
        }
    }

    pub fn get(&self) -> &ArgValue {
        &self.value
    }

    pub fn type_token(&self) -> TypeToken {
        self.type_token
    }

    /// JSON null counts as not supplied.
    pub fn is_null(&self) -> bool {
        matches!(self.value, ArgValue::Json(serde_json::Value::Null))
    }

    /// Short name of the value shape, for error messages.
    pub(crate) fn shape(&self) -> &'static str {
        match &self.value {
            ArgValue::Text(_) => "text",
            ArgValue::Bytes(_) => "bytes",
            ArgValue::Headers(_) => "header map",
            ArgValue::Json(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object with non-string values",
            },
        }
    }

    /// Rendering used for path substitution.
    pub(crate) fn to_path_segment(&self) -> String {
        match &self.value {
            ArgValue::Text(text) => text.clone(),
            ArgValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            ArgValue::Headers(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
            .to_string(),
            ArgValue::Json(serde_json::Value::String(s)) => s.clone(),
            ArgValue::Json(other) => other.to_string(),
        }
    }

    /// The value as a string-to-string mapping, if it is one.
    pub(crate) fn as_header_map(&self) -> Option<IndexMap<String, String>> {
        match &self.value {
            ArgValue::Headers(map) => Some(map.clone()),
            ArgValue::Json(serde_json::Value::Object(object)) => object
                .iter()
                .map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect(),
            _ => None,
        }
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::text(value)
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::text(value)
    }
}

impl From<Bytes> for Argument {
    fn from(value: Bytes) -> Self {
        Argument::bytes(value)
    }
}

impl From<IndexMap<String, String>> for Argument {
    fn from(value: IndexMap<String, String>) -> Self {
        Argument::headers(value)
    }
}

impl From<HashMap<String, String>> for Argument {
    fn from(value: HashMap<String, String>) -> Self {
        Argument::string_map(value, TypeToken::of::<HashMap<String, String>>())
    }
}

impl From<BTreeMap<String, String>> for Argument {
    fn from(value: BTreeMap<String, String>) -> Self {
        Argument::string_map(value, TypeToken::of::<BTreeMap<String, String>>())
    }
}

macro_rules! scalar_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument {
                        value: ArgValue::Json(serde_json::Value::from(value)),
                        type_token: TypeToken::of::<$ty>(),
                    }
                }
            }
        )*
    };
}

scalar_argument!(bool, i32, i64, u32, u64, f64);

/// Positional argument list for one call.
///
/// `None` marks an argument that was not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Vec<Option<Argument>>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a supplied argument.
    pub fn arg(mut self, argument: impl Into<Argument>) -> Self {
        self.values.push(Some(argument.into()));
        self
    }

    /// Append an argument slot that was not supplied.
    pub fn none(mut self) -> Self {
        self.values.push(None);
        self
    }

    /// Append a serialized value.
    pub fn value<T: Serialize + ?Sized + 'static>(self, value: &T) -> Result<Self> {
        Ok(self.arg(Argument::value(value)?))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The argument at `position`, if supplied and not null.
    pub fn supplied(&self, position: usize) -> Option<&Argument> {
        self.values
            .get(position)
            .and_then(Option::as_ref)
            .filter(|arg| !arg.is_null())
    }
}

impl From<Vec<Option<Argument>>> for Arguments {
    fn from(values: Vec<Option<Argument>>) -> Self {
        Self { values }
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Some).collect(),
        }
    }
}
