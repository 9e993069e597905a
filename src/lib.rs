// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Trees are shared between threads only when nodes are atomically counted.
#[cfg(feature = "arc")]
use alloc::sync::Arc as Rc;

#[cfg(not(feature = "arc"))]
use alloc::rc::Rc;

pub mod coerce;
mod error;
mod number;
mod path;
mod reader;
mod value;

pub use coerce::FromValue;
pub use error::{ErrorKind, LookupError, LookupResult};
pub use number::{Number, NumberKind, Numeric};
pub use path::resolve;
pub use reader::*;
pub use value::{Value, ValueKind};
