// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Resolution of dotted lookup paths such as `a.0.b`.
//!
//! Each `.` separated segment is used as a key when the current node is an
//! object and as a base 10 index when it is an array. `{"a": {"2": "x"}}` and
//! `{"a": [0, 1, "x"]}` therefore both resolve `a.2` to `"x"`.

use crate::error::{LookupError, LookupResult};
use crate::value::Value;

use alloc::string::ToString;

/// Walk `path` through `tree` and return the node at its last segment.
///
/// The node is returned as found; no type checks are applied.
pub fn resolve<'a>(tree: &'a Value, path: &str) -> LookupResult<&'a Value> {
    let mut segments = path.split('.').peekable();
    let mut current = tree;

    while let Some(segment) = segments.next() {
        let terminal = segments.peek().is_none();
        current = match current {
            Value::Object(fields) => {
                fields
                    .get(segment)
                    .ok_or_else(|| LookupError::KeyNotFound {
                        key: segment.to_string(),
                    })?
            }
            Value::Array(items) => index(items, segment)?,
            _ if !terminal => {
                return Err(LookupError::EndOfNestedStructures {
                    segment: segment.to_string(),
                })
            }
            _ => current,
        };
    }

    Ok(current)
}

// Bounds are checked against the array being indexed, not any ancestor.
fn index<'a>(items: &'a [Value], segment: &str) -> LookupResult<&'a Value> {
    let index = segment
        .parse::<i64>()
        .map_err(|_| LookupError::NonIntegerSliceAccess {
            segment: segment.to_string(),
        })?;

    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .ok_or(LookupError::IndexOutOfBounds {
            index,
            len: items.len(),
        })
}
