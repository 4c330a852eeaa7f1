//! Numeric operand type shared by all calculator operations.
//!
//! A `Number` is either an integer or a floating value. Integer arithmetic
//! stays integral until it would overflow `i64`, at which point the result is
//! computed in floating point instead. Any floating operand makes the result
//! floating.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Integer or floating operand/result.
///
/// Equality is numeric and exact: `Number::Int(45) == Number::Float(45.0)`,
/// but an integer never equals a float it merely rounds to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Value as `f64` (lossy for integers beyond 2^53)
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// True for integer zero and for floating `+0.0`/`-0.0`
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    fn combine(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(v) => Number::Int(v),
                None => Number::Float(float_op(a as f64, b as f64)),
            },
            (a, b) => Number::Float(float_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// 2^63, exactly representable; `i64` covers `[-2^63, 2^63)`
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Order an integer against a float exactly, without rounding the integer.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }

    // |whole| < 2^63 or whole == -2^63, so the cast is exact
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        ord => Some(ord),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Number::Int(i64::from(*other))
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(i64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}
