//! Runtime type tokens.
//!
//! A [`TypeToken`] names a Rust type at runtime. Body parameters declare one,
//! arguments carry one, and every operation declares the token of the type
//! its response decodes into.

use std::any::{type_name, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// Opaque runtime descriptor of a Rust type.
///
/// Equality is type identity; the name is only for display.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully qualified type name, as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this token names `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TypeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Declared return type of an operation.
///
/// Wrapper types (like the call handle in `callspec-client`) report the token
/// of their type argument; plain types report themselves.
pub trait ReturnType {
    /// Token the execution layer decodes the response into.
    fn response_type() -> TypeToken;
}

macro_rules! raw_return_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ReturnType for $ty {
                fn response_type() -> TypeToken {
                    TypeToken::of::<$ty>()
                }
            }
        )*
    };
}

raw_return_type!(
    (),
    bool,
    String,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
);

impl<T: 'static> ReturnType for Vec<T> {
    fn response_type() -> TypeToken {
        TypeToken::of::<Vec<T>>()
    }
}

impl<T: 'static> ReturnType for Option<T> {
    fn response_type() -> TypeToken {
        TypeToken::of::<Option<T>>()
    }
}

impl<K: 'static, V: 'static, S: 'static> ReturnType for HashMap<K, V, S> {
    fn response_type() -> TypeToken {
        TypeToken::of::<HashMap<K, V, S>>()
    }
}

impl<K: 'static, V: 'static> ReturnType for BTreeMap<K, V> {
    fn response_type() -> TypeToken {
        TypeToken::of::<BTreeMap<K, V>>()
    }
}
