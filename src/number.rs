// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.
#![allow(clippy::float_cmp, clippy::as_conversions)]

use core::fmt::{self, Debug, Display, Formatter};

use num_traits::{cast, NumCast};
use serde::ser::Serializer;
use serde::Serialize;

/// A numeric leaf that remembers the width it was stored with.
#[derive(Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

/// Width and signedness of a stored [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl NumberKind {
    pub fn name(self) -> &'static str {
        match self {
            NumberKind::I8 => "i8",
            NumberKind::I16 => "i16",
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::U8 => "u8",
            NumberKind::U16 => "u16",
            NumberKind::U32 => "u32",
            NumberKind::U64 => "u64",
            NumberKind::F32 => "f32",
            NumberKind::F64 => "f64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, NumberKind::F32 | NumberKind::F64)
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::I8(_) => NumberKind::I8,
            Number::I16(_) => NumberKind::I16,
            Number::I32(_) => NumberKind::I32,
            Number::I64(_) => NumberKind::I64,
            Number::U8(_) => NumberKind::U8,
            Number::U16(_) => NumberKind::U16,
            Number::U32(_) => NumberKind::U32,
            Number::U64(_) => NumberKind::U64,
            Number::F32(_) => NumberKind::F32,
            Number::F64(_) => NumberKind::F64,
        }
    }

    /// Convert to `N` only if converting back reproduces the stored value.
    ///
    /// `Number::F64(1.0).to::<i32>()` is `Some(1)` while
    /// `Number::F64(1.5).to::<i32>()` and `Number::I64(300).to::<u8>()` are `None`.
    pub fn to<N: Numeric>(&self) -> Option<N> {
        N::from_number(self)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.to()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.to()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.to()
    }
}

// Converting to R and back to I must yield the input, otherwise information was lost.
// Out of range values fail either leg instead of wrapping or saturating.
// NaN never survives since it is unequal to itself.
fn round_trip<R, I>(input: I) -> Option<R>
where
    I: NumCast + PartialEq + Copy,
    R: NumCast + Copy,
{
    let converted: R = cast(input)?;
    match cast::<R, I>(converted) {
        Some(back) if back == input => Some(converted),
        _ => None,
    }
}

mod private {
    pub trait Sealed {}
}

/// Primitive numeric types a [`Number`] can be converted into.
pub trait Numeric: Copy + Default + PartialEq + Debug + private::Sealed + 'static {
    const NAME: &'static str;

    fn from_number(number: &Number) -> Option<Self>;
}

macro_rules! numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Numeric for $t {
                const NAME: &'static str = stringify!($t);

                fn from_number(number: &Number) -> Option<Self> {
                    match *number {
                        Number::I8(v) => round_trip(v),
                        Number::I16(v) => round_trip(v),
                        Number::I32(v) => round_trip(v),
                        Number::I64(v) => round_trip(v),
                        Number::U8(v) => round_trip(v),
                        Number::U16(v) => round_trip(v),
                        Number::U32(v) => round_trip(v),
                        Number::U64(v) => round_trip(v),
                        Number::F32(v) => round_trip(v),
                        Number::F64(v) => round_trip(v),
                    }
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}_{}", self.kind())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{v}"),
            Number::I16(v) => write!(f, "{v}"),
            Number::I32(v) => write!(f, "{v}"),
            Number::I64(v) => write!(f, "{v}"),
            Number::U8(v) => write!(f, "{v}"),
            Number::U16(v) => write!(f, "{v}"),
            Number::U32(v) => write!(f, "{v}"),
            Number::U64(v) => write!(f, "{v}"),
            Number::F32(v) if v.is_nan() => f.write_str("NaN"),
            Number::F32(v) => write!(f, "{v}"),
            Number::F64(v) if v.is_nan() => f.write_str("NaN"),
            Number::F64(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::I8(v) => serializer.serialize_i8(v),
            Number::I16(v) => serializer.serialize_i16(v),
            Number::I32(v) => serializer.serialize_i32(v),
            Number::I64(v) => serializer.serialize_i64(v),
            Number::U8(v) => serializer.serialize_u8(v),
            Number::U16(v) => serializer.serialize_u16(v),
            Number::U32(v) => serializer.serialize_u32(v),
            Number::U64(v) => serializer.serialize_u64(v),
            Number::F32(v) => serializer.serialize_f32(v),
            Number::F64(v) => serializer.serialize_f64(v),
        }
    }
}

macro_rules! from_primitive {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

from_primitive!(
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

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::I64(value as i64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::U64(value as u64)
    }
}
