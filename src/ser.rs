//! Conversion from Rust data structures into [`AnnoValue`] trees.
//!
//! This module provides [`AnnoValueSerializer`], a serde `Serializer` whose
//! output is an [`AnnoValue`] rather than text. It's the bridge that lets
//! any `T: Serialize` flow into the renderer without hand-building a value
//! tree:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_anno::{to_value, AnnoValue};
//!
//! #[derive(Serialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//! let value = to_value(&server).unwrap();
//! assert!(value.is_object());
//! ```
//!
//! Most users never touch this type directly; the crate-root functions
//! ([`to_string`](crate::to_string), [`to_string_annotated`](crate::to_string_annotated),
//! [`to_value`](crate::to_value)) run it internally.
//!
//! ## Type mapping
//!
//! | Rust | Value |
//! |------|-------|
//! | `()`, `None`, unit structs | `Null` |
//! | `bool` | `Bool` |
//! | integers | `Number::Integer` (`u64` beyond `i64::MAX` degrades to `Float`) |
//! | `f32`/`f64` | `Number::Float` |
//! | `char`, `&str`, `String` | `String` |
//! | `&[u8]` | `Array` of integers |
//! | sequences, tuples | `Array` |
//! | maps, structs | `Object` (string keys required) |
//! | unit enum variants | `String` with the variant name |
//!
//! Data-carrying enum variants are not representable and return
//! [`Error::UnsupportedType`](crate::Error).

use crate::{AnnoMap, AnnoValue, Error, Number, Result};
use serde::{ser, Serialize};

/// Serializer that converts any `Serialize` type into an [`AnnoValue`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_anno::{AnnoValue, AnnoValueSerializer};
///
/// let value = 42i32.serialize(AnnoValueSerializer).unwrap();
/// assert_eq!(value.as_i64(), Some(42));
/// ```
pub struct AnnoValueSerializer;

/// Sequence builder for [`AnnoValueSerializer`].
pub struct SerializeVec {
    vec: Vec<AnnoValue>,
}

/// Map/struct builder for [`AnnoValueSerializer`].
pub struct SerializeMap {
    map: AnnoMap,
    current_key: Option<String>,
}

impl ser::Serializer for AnnoValueSerializer {
    type Ok = AnnoValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<AnnoValue> {
        Ok(AnnoValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<AnnoValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<AnnoValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<AnnoValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<AnnoValue> {
        Ok(AnnoValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<AnnoValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<AnnoValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<AnnoValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<AnnoValue> {
        if v <= i64::MAX as u64 {
            Ok(AnnoValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(AnnoValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<AnnoValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<AnnoValue> {
        Ok(AnnoValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<AnnoValue> {
        Ok(AnnoValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<AnnoValue> {
        Ok(AnnoValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<AnnoValue> {
        Ok(AnnoValue::Array(
            v.iter().map(|b| AnnoValue::from(*b)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<AnnoValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<AnnoValue> {
        Ok(AnnoValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<AnnoValue> {
        Ok(AnnoValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<AnnoValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<AnnoValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: AnnoMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_anno_value(key)? {
            AnnoValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = AnnoValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_anno_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<AnnoValue> {
        Ok(AnnoValue::Object(self.map))
    }
}

fn to_anno_value<T: Serialize + ?Sized>(value: &T) -> Result<AnnoValue> {
    value.serialize(AnnoValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_struct_becomes_object() {
        let value = to_anno_value(&Point { x: 1, y: 2 }).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("x").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(obj.get("y").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(to_anno_value(&()).unwrap(), AnnoValue::Null);
        assert_eq!(to_anno_value(&Option::<i32>::None).unwrap(), AnnoValue::Null);
        assert_eq!(
            to_anno_value(&Some(7)).unwrap(),
            AnnoValue::Number(Number::Integer(7))
        );
    }

    #[test]
    fn test_sequence_order_preserved() {
        let value = to_anno_value(&vec!["a", "b", "c"]).unwrap();
        let arr = value.as_array().unwrap();
        let texts: Vec<_> = arr.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_large_u64_degrades_to_float() {
        let value = to_anno_value(&u64::MAX).unwrap();
        match value {
            AnnoValue::Number(Number::Float(_)) => {}
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn test_unit_enum_variant_is_its_name() {
        #[derive(Serialize)]
        enum Mode {
            Fast,
        }
        assert_eq!(
            to_anno_value(&Mode::Fast).unwrap(),
            AnnoValue::String("Fast".to_string())
        );
    }

    #[test]
    fn test_data_variants_are_unsupported() {
        #[derive(Serialize)]
        enum Wrapped {
            Inner(i32),
        }
        assert!(to_anno_value(&Wrapped::Inner(1)).is_err());
    }
}
