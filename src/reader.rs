// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Typed lookups into a [`Value`] tree.
//!
//! Every accessor comes in three forms:
//!
//! - `name(tree, path)` returns a [`LookupResult`].
//! - `name_or_default(tree, path)` returns the type's default on any error.
//! - `name_or(tree, path, fallback)` returns `fallback` on any error.
//!
//! ```ignore
//! let tree = Value::from_json_str(r#"{"a": [{"b": {"c": [0, 1, 2]}}]}"#)?;
//! assert_eq!(mapreader::int(&tree, "a.0.b.c.1")?, 1);
//! assert_eq!(mapreader::string_or(&tree, "a.1", "none".into()), "none");
//! ```

use crate::coerce::{self, FromValue};
use crate::error::LookupResult;
use crate::number::Numeric;
use crate::path::resolve;
use crate::value::Value;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

fn or_default<T: Default>(result: LookupResult<T>) -> T {
    result.unwrap_or_default()
}

fn or<T>(result: LookupResult<T>, fallback: T) -> T {
    result.unwrap_or(fallback)
}

/// Value at `path` asserted to be exactly a `T`.
pub fn get<T: FromValue>(tree: &Value, path: &str) -> LookupResult<T> {
    T::from_value(resolve(tree, path)?)
}

pub fn get_or_default<T: FromValue + Default>(tree: &Value, path: &str) -> T {
    or_default(get(tree, path))
}

pub fn get_or<T: FromValue>(tree: &Value, path: &str, fallback: T) -> T {
    or(get(tree, path), fallback)
}

pub fn string(tree: &Value, path: &str) -> LookupResult<String> {
    get(tree, path)
}

pub fn string_or_default(tree: &Value, path: &str) -> String {
    or_default(string(tree, path))
}

pub fn string_or(tree: &Value, path: &str, fallback: String) -> String {
    or(string(tree, path), fallback)
}

pub fn boolean(tree: &Value, path: &str) -> LookupResult<bool> {
    get(tree, path)
}

pub fn boolean_or_default(tree: &Value, path: &str) -> bool {
    or_default(boolean(tree, path))
}

pub fn boolean_or(tree: &Value, path: &str, fallback: bool) -> bool {
    or(boolean(tree, path), fallback)
}

/// Bytes at `path`. String values yield their UTF-8 bytes.
///
/// Use `get::<Vec<u8>>` to reject strings.
pub fn bytes(tree: &Value, path: &str) -> LookupResult<Vec<u8>> {
    coerce::bytes(resolve(tree, path)?)
}

pub fn bytes_or_default(tree: &Value, path: &str) -> Vec<u8> {
    or_default(bytes(tree, path))
}

pub fn bytes_or(tree: &Value, path: &str, fallback: Vec<u8>) -> Vec<u8> {
    or(bytes(tree, path), fallback)
}

/// Any number at `path` that is exactly representable as an `i64`.
///
/// Handy for trees decoded from formats that store every number as a float.
pub fn int(tree: &Value, path: &str) -> LookupResult<i64> {
    number(tree, path)
}

pub fn int_or_default(tree: &Value, path: &str) -> i64 {
    or_default(int(tree, path))
}

pub fn int_or(tree: &Value, path: &str, fallback: i64) -> i64 {
    or(int(tree, path), fallback)
}

/// Any number at `path` that is exactly representable as an `f64`.
pub fn float(tree: &Value, path: &str) -> LookupResult<f64> {
    number(tree, path)
}

pub fn float_or_default(tree: &Value, path: &str) -> f64 {
    or_default(float(tree, path))
}

pub fn float_or(tree: &Value, path: &str, fallback: f64) -> f64 {
    or(float(tree, path), fallback)
}

/// Number at `path` converted to `N`.
///
/// The conversion succeeds only if converting the result back yields the
/// stored value: `1.0` reads as `1_i32`, while `1.5` and `300` (as `u8`) fail.
pub fn number<N: Numeric>(tree: &Value, path: &str) -> LookupResult<N> {
    coerce::number(resolve(tree, path)?)
}

pub fn number_or_default<N: Numeric>(tree: &Value, path: &str) -> N {
    or_default(number(tree, path))
}

pub fn number_or<N: Numeric>(tree: &Value, path: &str, fallback: N) -> N {
    or(number(tree, path), fallback)
}

/// Array at `path` with every element asserted to be an `E`.
///
/// A single element of another type fails the whole call.
pub fn slice<E: FromValue>(tree: &Value, path: &str) -> LookupResult<Vec<E>> {
    coerce::slice(resolve(tree, path)?)
}

pub fn slice_or_default<E: FromValue>(tree: &Value, path: &str) -> Vec<E> {
    or_default(slice(tree, path))
}

pub fn slice_or<E: FromValue>(tree: &Value, path: &str, fallback: Vec<E>) -> Vec<E> {
    or(slice(tree, path), fallback)
}

/// Object at `path` with every field asserted to be a `V`.
pub fn map<V: FromValue>(tree: &Value, path: &str) -> LookupResult<BTreeMap<String, V>> {
    coerce::map(resolve(tree, path)?)
}

pub fn map_or_default<V: FromValue>(tree: &Value, path: &str) -> BTreeMap<String, V> {
    or_default(map(tree, path))
}

pub fn map_or<V: FromValue>(
    tree: &Value,
    path: &str,
    fallback: BTreeMap<String, V>,
) -> BTreeMap<String, V> {
    or(map(tree, path), fallback)
}

/// Array at `path` with every element converted like [`number`].
pub fn numbers<N: Numeric>(tree: &Value, path: &str) -> LookupResult<Vec<N>> {
    coerce::numbers(resolve(tree, path)?)
}

pub fn numbers_or_default<N: Numeric>(tree: &Value, path: &str) -> Vec<N> {
    or_default(numbers(tree, path))
}

pub fn numbers_or<N: Numeric>(tree: &Value, path: &str, fallback: Vec<N>) -> Vec<N> {
    or(numbers(tree, path), fallback)
}

/// Object at `path` with every field converted like [`number`].
pub fn number_map<N: Numeric>(tree: &Value, path: &str) -> LookupResult<BTreeMap<String, N>> {
    coerce::number_map(resolve(tree, path)?)
}

pub fn number_map_or_default<N: Numeric>(tree: &Value, path: &str) -> BTreeMap<String, N> {
    or_default(number_map(tree, path))
}

pub fn number_map_or<N: Numeric>(
    tree: &Value,
    path: &str,
    fallback: BTreeMap<String, N>,
) -> BTreeMap<String, N> {
    or(number_map(tree, path), fallback)
}
