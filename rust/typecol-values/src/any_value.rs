//! Runtime-typed scalar values.
//!
//! [`AnyValue`] is the untyped currency of this crate: it is what callers hand
//! to `set`/`insert`, what dynamic input sequences are made of, what generic
//! elements carry as payload, and what untyped read-outs return.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{config::ValuesConfig, kind::Kind};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum AnyValue {
    #[default]
    Null,
    Float32(f32),
    Float64(f64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    String(String),
    Bool(bool),
    DateTime(DateTime<Utc>),
    /// A complex number. Storable in generic containers, but not convertible
    /// to any primitive kind.
    Complex { re: f64, im: f64 },
    /// A value of a type outside the supported set, kept with its type name
    /// and textual rendering.
    Opaque { type_name: String, display: String },
}

impl AnyValue {
    pub fn opaque(type_name: impl Into<String>, display: impl Into<String>) -> AnyValue {
        AnyValue::Opaque {
            type_name: type_name.into(),
            display: display.into(),
        }
    }

    /// Name of the runtime type, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            AnyValue::Null => "null",
            AnyValue::Float32(_) => "float32",
            AnyValue::Float64(_) => "float64",
            AnyValue::Int8(_) => "int8",
            AnyValue::Int16(_) => "int16",
            AnyValue::Int32(_) => "int32",
            AnyValue::Int64(_) => "int64",
            AnyValue::UInt8(_) => "uint8",
            AnyValue::UInt16(_) => "uint16",
            AnyValue::UInt32(_) => "uint32",
            AnyValue::UInt64(_) => "uint64",
            AnyValue::String(_) => "string",
            AnyValue::Bool(_) => "bool",
            AnyValue::DateTime(_) => "datetime",
            AnyValue::Complex { .. } => "complex128",
            AnyValue::Opaque { type_name, .. } => type_name,
        }
    }

    /// The primitive kind matching the runtime type, or `None` for null,
    /// complex and opaque values.
    pub fn primitive_kind(&self) -> Option<Kind> {
        match self {
            AnyValue::Float32(_) | AnyValue::Float64(_) => Some(Kind::Float),
            AnyValue::Int8(_)
            | AnyValue::Int16(_)
            | AnyValue::Int32(_)
            | AnyValue::Int64(_)
            | AnyValue::UInt8(_)
            | AnyValue::UInt16(_)
            | AnyValue::UInt32(_)
            | AnyValue::UInt64(_) => Some(Kind::Int),
            AnyValue::String(_) => Some(Kind::String),
            AnyValue::Bool(_) => Some(Kind::Bool),
            AnyValue::DateTime(_) => Some(Kind::DateTime),
            AnyValue::Null | AnyValue::Complex { .. } | AnyValue::Opaque { .. } => None,
        }
    }

    #[inline]
    pub fn is_null_value(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    /// Returns the value as `f64` if the runtime type is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AnyValue::Float32(v) => Some(v as f64),
            AnyValue::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as `i64` if the runtime type is an integer.
    ///
    /// `u64` values above `i64::MAX` wrap around.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            AnyValue::Int8(v) => Some(v as i64),
            AnyValue::Int16(v) => Some(v as i64),
            AnyValue::Int32(v) => Some(v as i64),
            AnyValue::Int64(v) => Some(v),
            AnyValue::UInt8(v) => Some(v as i64),
            AnyValue::UInt16(v) => Some(v as i64),
            AnyValue::UInt32(v) => Some(v as i64),
            AnyValue::UInt64(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            AnyValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match *self {
            AnyValue::DateTime(v) => Some(v),
            _ => None,
        }
    }

    /// Null predicate for dynamically typed values.
    ///
    /// Floats are null when NaN, strings when they match a configured null
    /// token and datetimes when they equal the zero time. `AnyValue::Null` is
    /// null. Every other value, including complex and opaque ones, is valid.
    pub fn is_null(&self, config: &ValuesConfig) -> bool {
        match self {
            AnyValue::Null => true,
            AnyValue::Float32(v) => v.is_nan(),
            AnyValue::Float64(v) => v.is_nan(),
            AnyValue::String(s) => config.is_null_string(s),
            AnyValue::DateTime(t) => typecol_datetime::is_zero_time(t),
            _ => false,
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Null => f.write_str("null"),
            AnyValue::Float32(v) => write!(f, "{v}"),
            AnyValue::Float64(v) => write!(f, "{v}"),
            AnyValue::Int8(v) => write!(f, "{v}"),
            AnyValue::Int16(v) => write!(f, "{v}"),
            AnyValue::Int32(v) => write!(f, "{v}"),
            AnyValue::Int64(v) => write!(f, "{v}"),
            AnyValue::UInt8(v) => write!(f, "{v}"),
            AnyValue::UInt16(v) => write!(f, "{v}"),
            AnyValue::UInt32(v) => write!(f, "{v}"),
            AnyValue::UInt64(v) => write!(f, "{v}"),
            AnyValue::String(s) => f.write_str(s),
            AnyValue::Bool(v) => write!(f, "{v}"),
            AnyValue::DateTime(t) => f.write_str(&typecol_datetime::format_datetime(t)),
            AnyValue::Complex { re, im } => write!(f, "({re}{im:+}i)"),
            AnyValue::Opaque { display, .. } => f.write_str(display),
        }
    }
}

macro_rules! impl_from_primitive {
    ($T:ty, $variant:ident) => {
        impl From<$T> for AnyValue {
            fn from(value: $T) -> AnyValue {
                AnyValue::$variant(value)
            }
        }
    };
}

impl_from_primitive!(f32, Float32);
impl_from_primitive!(f64, Float64);
impl_from_primitive!(i8, Int8);
impl_from_primitive!(i16, Int16);
impl_from_primitive!(i32, Int32);
impl_from_primitive!(i64, Int64);
impl_from_primitive!(u8, UInt8);
impl_from_primitive!(u16, UInt16);
impl_from_primitive!(u32, UInt32);
impl_from_primitive!(u64, UInt64);
impl_from_primitive!(String, String);
impl_from_primitive!(bool, Bool);
impl_from_primitive!(DateTime<Utc>, DateTime);

impl From<isize> for AnyValue {
    fn from(value: isize) -> AnyValue {
        AnyValue::Int64(value as i64)
    }
}

impl From<usize> for AnyValue {
    fn from(value: usize) -> AnyValue {
        AnyValue::UInt64(value as u64)
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> AnyValue {
        AnyValue::String(value.to_string())
    }
}

impl<T: Into<AnyValue>> From<Option<T>> for AnyValue {
    fn from(value: Option<T>) -> AnyValue {
        value.map_or(AnyValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_null_predicate() {
        let config = ValuesConfig::default();
        assert!(AnyValue::Null.is_null(&config));
        assert!(AnyValue::from(f64::NAN).is_null(&config));
        assert!(AnyValue::from(f32::NAN).is_null(&config));
        assert!(AnyValue::from("n/a").is_null(&config));
        assert!(AnyValue::from(" ").is_null(&config));
        assert!(AnyValue::from(typecol_datetime::zero_time()).is_null(&config));

        assert!(!AnyValue::from(0.0).is_null(&config));
        assert!(!AnyValue::from(0i64).is_null(&config));
        assert!(!AnyValue::from(false).is_null(&config));
        assert!(!AnyValue::from("foo").is_null(&config));
        assert!(!AnyValue::from(typecol_datetime::unix_epoch()).is_null(&config));
        assert!(!AnyValue::Complex { re: 1.0, im: 2.0 }.is_null(&config));
        assert!(!AnyValue::opaque("point", "(1, 2)").is_null(&config));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AnyValue::from(1.5f32).as_f64(), Some(1.5));
        assert_eq!(AnyValue::from(7u8).as_i64(), Some(7));
        assert_eq!(AnyValue::from(u64::MAX).as_i64(), Some(-1));
        assert_eq!(AnyValue::from(7u8).as_f64(), None);
        assert_eq!(AnyValue::from("abc").as_str(), Some("abc"));
        assert_eq!(AnyValue::from(true).as_bool(), Some(true));
        assert_eq!(AnyValue::from(None::<i32>), AnyValue::Null);
        assert_eq!(AnyValue::from(Some(3i32)), AnyValue::Int32(3));
    }

    #[test]
    fn test_primitive_kind() {
        assert_eq!(AnyValue::from(1.0).primitive_kind(), Some(Kind::Float));
        assert_eq!(AnyValue::from(1usize).primitive_kind(), Some(Kind::Int));
        assert_eq!(AnyValue::from("x").primitive_kind(), Some(Kind::String));
        assert_eq!(AnyValue::from(true).primitive_kind(), Some(Kind::Bool));
        assert_eq!(
            AnyValue::from(typecol_datetime::unix_epoch()).primitive_kind(),
            Some(Kind::DateTime)
        );
        assert_eq!(AnyValue::Null.primitive_kind(), None);
        assert_eq!(AnyValue::Complex { re: 0.0, im: 0.0 }.primitive_kind(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AnyValue::from(1.5).to_string(), "1.5");
        assert_eq!(AnyValue::from(-3i16).to_string(), "-3");
        assert_eq!(AnyValue::from(true).to_string(), "true");
        assert_eq!(AnyValue::Complex { re: 1.0, im: -2.0 }.to_string(), "(1-2i)");
        assert_eq!(AnyValue::Complex { re: 1.0, im: 2.0 }.to_string(), "(1+2i)");
        let t = Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(AnyValue::from(t).to_string(), "2019-05-01 00:00:00 UTC");
        assert_eq!(AnyValue::opaque("point", "(1, 2)").type_name(), "point");
    }
}
