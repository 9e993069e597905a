// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Conversion of resolved nodes into requested Rust types.
//!
//! [`FromValue`] is a plain type assertion: the node must already have the
//! requested shape. Numbers and byte sequences additionally have converting
//! entry points ([`number`], [`bytes`]) which accept any input that can be
//! represented without loss.

use crate::error::{LookupError, LookupResult};
use crate::number::{Number, Numeric};
use crate::value::Value;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Types a [`Value`] can be asserted into without any conversion.
pub trait FromValue: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    fn from_value(value: &Value) -> LookupResult<Self>;
}

impl FromValue for Value {
    const NAME: &'static str = "value";

    fn from_value(value: &Value) -> LookupResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    const NAME: &'static str = "string";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::String(s) => Ok(s.to_string()),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

impl FromValue for bool {
    const NAME: &'static str = "bool";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

// Only native byte values; use `bytes` to also accept strings.
impl FromValue for Vec<u8> {
    const NAME: &'static str = "bytes";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Bytes(b) => Ok(b.to_vec()),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

impl FromValue for Number {
    const NAME: &'static str = "number";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Number(n) => Ok(*n),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

impl FromValue for Vec<Value> {
    const NAME: &'static str = "array";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Array(items) => Ok(items.as_ref().clone()),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

impl FromValue for BTreeMap<String, Value> {
    const NAME: &'static str = "object";

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Object(fields) => Ok(fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect()),
            _ => Err(LookupError::unexpected_type(Self::NAME, value)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const NAME: &'static str = T::NAME;

    fn from_value(value: &Value) -> LookupResult<Self> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

// A stored number is asserted only against its own width.
macro_rules! exact_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $t {
                const NAME: &'static str = stringify!($t);

                fn from_value(value: &Value) -> LookupResult<Self> {
                    match value {
                        Value::Number(Number::$variant(n)) => Ok(*n),
                        _ => Err(LookupError::unexpected_type(<Self as FromValue>::NAME, value)),
                    }
                }
            }
        )*
    };
}

exact_number!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

/// Bytes of a byte or string node. Strings yield their UTF-8 bytes unchanged.
pub fn bytes(value: &Value) -> LookupResult<Vec<u8>> {
    match value {
        Value::Bytes(b) => Ok(b.to_vec()),
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        _ => Err(LookupError::unable_to_convert(value, "bytes")),
    }
}

/// Convert a numeric node into `N` if the value survives the conversion.
pub fn number<N: Numeric>(value: &Value) -> LookupResult<N> {
    match value {
        Value::Number(n) => n
            .to::<N>()
            .ok_or_else(|| LookupError::unable_to_convert(value, N::NAME)),
        _ => Err(LookupError::unexpected_type(N::NAME, value)),
    }
}

/// Assert every element of an array node into `E`.
pub fn slice<E: FromValue>(value: &Value) -> LookupResult<Vec<E>> {
    elements(value, element::<E>)
}

/// Assert every field of an object node into `V`.
pub fn map<V: FromValue>(value: &Value) -> LookupResult<BTreeMap<String, V>> {
    fields(value, element::<V>)
}

/// Convert every element of an array node into the number type `N`.
pub fn numbers<N: Numeric>(value: &Value) -> LookupResult<Vec<N>> {
    elements(value, number_element::<N>)
}

/// Convert every field of an object node into the number type `N`.
pub fn number_map<N: Numeric>(value: &Value) -> LookupResult<BTreeMap<String, N>> {
    fields(value, number_element::<N>)
}

fn elements<E>(value: &Value, convert: fn(&Value) -> LookupResult<E>) -> LookupResult<Vec<E>> {
    match value {
        Value::Array(items) => items.iter().map(convert).collect(),
        _ => Err(LookupError::unexpected_type("array", value)),
    }
}

fn fields<V>(
    value: &Value,
    convert: fn(&Value) -> LookupResult<V>,
) -> LookupResult<BTreeMap<String, V>> {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(k, v)| Ok((k.to_string(), convert(v)?)))
            .collect(),
        _ => Err(LookupError::unexpected_type("object", value)),
    }
}

// A container fails as a whole when any element does not fit.
fn element<E: FromValue>(value: &Value) -> LookupResult<E> {
    E::from_value(value).map_err(|_| LookupError::unable_to_convert(value, E::NAME))
}

fn number_element<N: Numeric>(value: &Value) -> LookupResult<N> {
    number(value).map_err(|_| LookupError::unable_to_convert(value, N::NAME))
}
