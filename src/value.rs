//! Dynamic value representation for annotated rendering.
//!
//! This module provides the [`AnnoValue`] enum which represents any value the
//! renderer can format. It's the input side of the pipeline: build (or
//! serialize into) an `AnnoValue` tree, then hand it to a
//! [`Renderer`](crate::Renderer) together with an optional
//! [`NoteMap`](crate::NoteMap) overlay.
//!
//! ## Core Types
//!
//! - [`AnnoValue`]: An enum representing any renderable value (null, bool, number,
//!   string, array, object, date, bigint)
//! - [`Number`]: Represents numeric values including special values (Infinity, -Infinity, NaN)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_anno::{AnnoValue, Number};
//!
//! // From primitives
//! let null = AnnoValue::Null;
//! let boolean = AnnoValue::from(true);
//! let number = AnnoValue::from(42);
//! let text = AnnoValue::from("hello");
//!
//! // Using the anno! macro
//! use serde_anno::anno;
//! let obj = anno!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use serde_anno::AnnoValue;
//!
//! let value = AnnoValue::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde_anno::{to_value, AnnoValue};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 10, y: 20 };
//! let value: AnnoValue = to_value(&point).unwrap();
//!
//! if let AnnoValue::Object(obj) = value {
//!     assert_eq!(obj.len(), 2);
//! }
//! ```

use crate::AnnoMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any renderable value.
///
/// This enum is the renderer's input model. Scalars render to a single line;
/// arrays and objects render to one line per child plus bracket lines, and
/// may carry comments supplied through a [`NoteMap`](crate::NoteMap) overlay.
///
/// `Date` and `BigInt` have no dedicated layout of their own: the renderer
/// treats them as text (RFC 3339 form and decimal digits respectively) and
/// sends them through the quoting and escaping path.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{AnnoValue, Number};
///
/// let null = AnnoValue::Null;
/// let num = AnnoValue::Number(Number::Integer(42));
/// let text = AnnoValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AnnoValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<AnnoValue>),
    Object(AnnoMap),
    Date(DateTime<Utc>),
    BigInt(BigInt),
}

/// A numeric value that can be an integer, float, or JavaScript-style special value.
///
/// The renderer classifies numbers by *wholeness*, not by storage: a
/// `Float(5.0)` prints as `5`, while fractional floats print in fixed-point
/// form with the configured precision. Special values take the fixed-point
/// path and print in Rust's float spelling (`inf`, `-inf`, `NaN`).
///
/// # Examples
///
/// ```rust
/// use serde_anno::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert!(Number::Float(5.0).is_whole());
/// assert!(!float.is_whole());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Returns `true` if this number has no fractional part and is finite.
    ///
    /// This is the classification the renderer uses: whole numbers print in
    /// decimal form, everything else in fixed-point form with the configured
    /// precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::Number;
    ///
    /// assert!(Number::Integer(-3).is_whole());
    /// assert!(Number::Float(4.0).is_whole());
    /// assert!(!Number::Float(4.5).is_whole());
    /// assert!(!Number::Infinity.is_whole());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_whole(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(f) => f.is_finite() && f.fract() == 0.0,
            _ => false,
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range. Returns `None` for special values and
    /// out-of-range floats.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// Always succeeds, converting integers and special values to their
    /// corresponding f64 representations.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl AnnoValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, AnnoValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, AnnoValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, AnnoValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, AnnoValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, AnnoValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, AnnoValue::Object(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, AnnoValue::Date(_))
    }

    /// Returns `true` if the value is a big integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, AnnoValue::BigInt(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnoValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnoValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::{AnnoValue, Number};
    ///
    /// assert_eq!(AnnoValue::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(AnnoValue::Number(Number::Float(42.0)).as_i64(), Some(42));
    /// assert_eq!(AnnoValue::Number(Number::Float(42.5)).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnnoValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<AnnoValue>> {
        match self {
            AnnoValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&AnnoMap> {
        match self {
            AnnoValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            AnnoValue::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            AnnoValue::BigInt(bi) => Some(bi),
            _ => None,
        }
    }
}

/// The textual form of a value.
///
/// This is the spelling [`NoteMap`](crate::NoteMap) falls back to when
/// looking up a comment for an array element that has no exact-value entry:
/// scalars print bare (no quotes), arrays as `[a,b]`, objects as `{object}`.
impl fmt::Display for AnnoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnoValue::Null => write!(f, "null"),
            AnnoValue::Bool(b) => write!(f, "{}", b),
            AnnoValue::Number(n) => write!(f, "{}", n),
            AnnoValue::String(s) => write!(f, "{}", s),
            AnnoValue::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            AnnoValue::Object(_) => write!(f, "{{object}}"),
            AnnoValue::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
            AnnoValue::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl Serialize for AnnoValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AnnoValue::Null => serializer.serialize_unit(),
            AnnoValue::Bool(b) => serializer.serialize_bool(*b),
            AnnoValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            AnnoValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            AnnoValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            AnnoValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            AnnoValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            AnnoValue::String(s) => serializer.serialize_str(s),
            AnnoValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            AnnoValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            AnnoValue::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            AnnoValue::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for AnnoValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct AnnoValueVisitor;

        impl<'de> Visitor<'de> for AnnoValueVisitor {
            type Value = AnnoValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any renderable value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(AnnoValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(AnnoValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(AnnoValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(AnnoValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(AnnoValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(AnnoValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(AnnoValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(AnnoValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(AnnoValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(AnnoValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = AnnoMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(AnnoValue::Object(values))
            }
        }

        deserializer.deserialize_any(AnnoValueVisitor)
    }
}

// TryFrom implementations for extracting values from AnnoValue
impl TryFrom<AnnoValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: AnnoValue) -> crate::Result<Self> {
        match value {
            AnnoValue::Number(Number::Integer(i)) => Ok(i),
            AnnoValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AnnoValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: AnnoValue) -> crate::Result<Self> {
        match value {
            AnnoValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AnnoValue> for bool {
    type Error = crate::Error;

    fn try_from(value: AnnoValue) -> crate::Result<Self> {
        match value {
            AnnoValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AnnoValue> for String {
    type Error = crate::Error;

    fn try_from(value: AnnoValue) -> crate::Result<Self> {
        match value {
            AnnoValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating AnnoValue from primitives
impl From<bool> for AnnoValue {
    fn from(value: bool) -> Self {
        AnnoValue::Bool(value)
    }
}

impl From<i8> for AnnoValue {
    fn from(value: i8) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for AnnoValue {
    fn from(value: i16) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for AnnoValue {
    fn from(value: i32) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for AnnoValue {
    fn from(value: i64) -> Self {
        AnnoValue::Number(Number::Integer(value))
    }
}

impl From<u8> for AnnoValue {
    fn from(value: u8) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for AnnoValue {
    fn from(value: u16) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for AnnoValue {
    fn from(value: u32) -> Self {
        AnnoValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for AnnoValue {
    fn from(value: f32) -> Self {
        AnnoValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for AnnoValue {
    fn from(value: f64) -> Self {
        AnnoValue::Number(Number::Float(value))
    }
}

impl From<String> for AnnoValue {
    fn from(value: String) -> Self {
        AnnoValue::String(value)
    }
}

impl From<&str> for AnnoValue {
    fn from(value: &str) -> Self {
        AnnoValue::String(value.to_string())
    }
}

impl From<Vec<AnnoValue>> for AnnoValue {
    fn from(value: Vec<AnnoValue>) -> Self {
        AnnoValue::Array(value)
    }
}

impl From<AnnoMap> for AnnoValue {
    fn from(value: AnnoMap) -> Self {
        AnnoValue::Object(value)
    }
}

impl From<DateTime<Utc>> for AnnoValue {
    fn from(value: DateTime<Utc>) -> Self {
        AnnoValue::Date(value)
    }
}

impl From<BigInt> for AnnoValue {
    fn from(value: BigInt) -> Self {
        AnnoValue::BigInt(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = AnnoValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = AnnoValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = AnnoValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = AnnoValue::Number(Number::Float(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = AnnoValue::Number(Number::Integer(42));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42.0);

        let value = AnnoValue::Number(Number::Infinity);
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, f64::INFINITY);
    }

    #[test]
    fn test_tryfrom_bool() {
        let value = AnnoValue::Bool(true);
        let result: bool = TryFrom::try_from(value).unwrap();
        assert!(result);

        let value = AnnoValue::Number(Number::Integer(1));
        assert!(bool::try_from(value).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(AnnoValue::from(true), AnnoValue::Bool(true));
        assert_eq!(
            AnnoValue::from(42i32),
            AnnoValue::Number(Number::Integer(42))
        );
        assert_eq!(
            AnnoValue::from(3.5f64),
            AnnoValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            AnnoValue::from("test"),
            AnnoValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![AnnoValue::from(1i32), AnnoValue::from(2i32)];
        let value = AnnoValue::from(vec.clone());
        assert_eq!(value, AnnoValue::Array(vec));

        let mut map = AnnoMap::new();
        map.insert("key".to_string(), AnnoValue::from(42i32));
        let value = AnnoValue::from(map.clone());
        assert_eq!(value, AnnoValue::Object(map));
    }

    #[test]
    fn test_wholeness() {
        assert!(Number::Integer(0).is_whole());
        assert!(Number::Float(-12.0).is_whole());
        assert!(!Number::Float(0.25).is_whole());
        assert!(!Number::NaN.is_whole());
        assert!(!Number::NegativeInfinity.is_whole());
    }

    #[test]
    fn test_textual_form() {
        assert_eq!(AnnoValue::Null.to_string(), "null");
        assert_eq!(AnnoValue::from(true).to_string(), "true");
        assert_eq!(AnnoValue::from(3.1).to_string(), "3.1");
        assert_eq!(AnnoValue::from("plain").to_string(), "plain");
        assert_eq!(
            AnnoValue::Array(vec![AnnoValue::from(1), AnnoValue::from(2)]).to_string(),
            "[1,2]"
        );
        assert_eq!(AnnoValue::Object(AnnoMap::new()).to_string(), "{object}");
    }
}
