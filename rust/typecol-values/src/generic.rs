//! The generic kind: elements that carry their own runtime type.
//!
//! A generic element converts by resolving its payload to the matching
//! primitive element and delegating to that kind's row of the conversion
//! matrix. Null elements and payloads with no primitive counterpart
//! (`AnyValue::Null`, complex and opaque values) become the target kind's
//! null sentinel.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

/// A generic payload resolved to its primitive kind, with that kind's null
/// predicate applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Float(Element<f64>),
    Int(Element<i64>),
    String(Element<String>),
    Bool(Element<bool>),
    DateTime(Element<DateTime<Utc>>),
}

impl Primitive {
    /// Resolves a dynamically typed value, or returns `None` when its runtime
    /// type has no primitive kind.
    pub fn resolve(value: &AnyValue, config: &ValuesConfig) -> Option<Primitive> {
        let resolved = match value {
            AnyValue::Float32(_) | AnyValue::Float64(_) => {
                Primitive::Float(f64::new_element(value.as_f64()?, config))
            }
            AnyValue::Int8(_)
            | AnyValue::Int16(_)
            | AnyValue::Int32(_)
            | AnyValue::Int64(_)
            | AnyValue::UInt8(_)
            | AnyValue::UInt16(_)
            | AnyValue::UInt32(_)
            | AnyValue::UInt64(_) => Primitive::Int(i64::new_element(value.as_i64()?, config)),
            AnyValue::String(s) => Primitive::String(String::new_element(s.clone(), config)),
            AnyValue::Bool(b) => Primitive::Bool(bool::new_element(*b, config)),
            AnyValue::DateTime(t) => {
                Primitive::DateTime(DateTime::<Utc>::new_element(*t, config))
            }
            AnyValue::Null | AnyValue::Complex { .. } | AnyValue::Opaque { .. } => return None,
        };
        Some(resolved)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Primitive::Float(_) => Kind::Float,
            Primitive::Int(_) => Kind::Int,
            Primitive::String(_) => Kind::String,
            Primitive::Bool(_) => Kind::Bool,
            Primitive::DateTime(_) => Kind::DateTime,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Primitive::Float(e) => e.null,
            Primitive::Int(e) => e.null,
            Primitive::String(e) => e.null,
            Primitive::Bool(e) => e.null,
            Primitive::DateTime(e) => e.null,
        }
    }

    pub fn convert<U: KindValue>(&self, config: &ValuesConfig) -> Element<U> {
        match self {
            Primitive::Float(e) => U::convert_from(e, config),
            Primitive::Int(e) => U::convert_from(e, config),
            Primitive::String(e) => U::convert_from(e, config),
            Primitive::Bool(e) => U::convert_from(e, config),
            Primitive::DateTime(e) => U::convert_from(e, config),
        }
    }
}

/// Converts a generic element into a primitive kind.
pub fn convert_generic<U: KindValue>(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<U> {
    if e.null {
        return U::null_element(config);
    }
    match Primitive::resolve(&e.value, config) {
        Some(primitive) => primitive.convert(config),
        None => U::null_element(config),
    }
}

/// Converts a generic element into a string, rendering primitive payloads as
/// written rather than through their widened kind. Narrow floats and unsigned
/// integers above `i64::MAX` keep their own text.
pub fn generic_to_string(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<String> {
    match Primitive::resolve(&e.value, config) {
        Some(primitive) if !e.null && !primitive.is_null() => match primitive {
            Primitive::String(s) => s,
            _ => Element::valid(e.value.to_string()),
        },
        _ => String::null_element(config),
    }
}

/// Builds an element of kind `T` from an untyped value: null-ness follows
/// the generic predicate, the payload follows the conversion matrix.
pub fn element_from_any<T: KindValue>(value: &AnyValue, config: &ValuesConfig) -> Element<T> {
    let e = AnyValue::new_element(value.clone(), config);
    T::convert_from(&e, config)
}

impl KindValue for AnyValue {
    const KIND: Kind = Kind::Generic;

    /// Keeps the payload as is and applies [`AnyValue::is_null`].
    fn new_element(value: AnyValue, config: &ValuesConfig) -> Element<AnyValue> {
        let null = value.is_null(config);
        Element::new(value, null)
    }

    fn null_value(_config: &ValuesConfig) -> AnyValue {
        AnyValue::Null
    }

    fn to_any(&self) -> AnyValue {
        self.clone()
    }

    /// Orders by textual rendering.
    fn compare(a: &AnyValue, b: &AnyValue) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }

    fn to_float_element(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<f64> {
        convert_generic(e, config)
    }

    fn to_int_element(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<i64> {
        convert_generic(e, config)
    }

    fn to_string_element(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<String> {
        generic_to_string(e, config)
    }

    fn to_bool_element(e: &Element<AnyValue>, config: &ValuesConfig) -> Element<bool> {
        convert_generic(e, config)
    }

    fn to_datetime_element(
        e: &Element<AnyValue>,
        config: &ValuesConfig,
    ) -> Element<DateTime<Utc>> {
        convert_generic(e, config)
    }

    fn to_generic_element(e: &Element<AnyValue>, _config: &ValuesConfig) -> Element<AnyValue> {
        e.clone()
    }

    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<AnyValue> {
        S::to_generic_element(e, config)
    }

    fn into_values(values: TypedValues<AnyValue>) -> Values {
        Values::Generic(values)
    }
}
