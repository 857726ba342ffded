use std::{cmp::Ordering, fmt};

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    kind::Kind,
    values::{TypedValues, Values},
};

/// A single payload together with its null flag.
///
/// The payload is always present: null elements carry the null sentinel of
/// their kind (NaN, the configured filler, the zero time, `0` or `false`),
/// or, for generic elements, the original dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<T> {
    pub value: T,
    pub null: bool,
}

impl<T> Element<T> {
    #[inline]
    pub const fn new(value: T, null: bool) -> Element<T> {
        Element { value, null }
    }

    #[inline]
    pub const fn valid(value: T) -> Element<T> {
        Element { value, null: false }
    }

    #[inline]
    pub const fn null(value: T) -> Element<T> {
        Element { value, null: true }
    }

    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.null)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Element<U> {
        Element {
            value: f(self.value),
            null: self.null,
        }
    }
}

impl<T: KindValue> Element<T> {
    /// Converts this element into the target payload type using the
    /// conversion matrix.
    #[inline]
    pub fn convert<U: KindValue>(&self, config: &ValuesConfig) -> Element<U> {
        U::convert_from(self, config)
    }

    /// Returns the element as a dynamically typed pair.
    pub fn to_any(&self) -> Element<AnyValue> {
        Element::new(self.value.to_any(), self.null)
    }
}

/// Payload type of one column kind.
///
/// Implemented for `f64`, `i64`, `String`, `bool`, `DateTime<Utc>` and
/// [`AnyValue`]. Each implementation supplies the kind's null predicate, its
/// null sentinel and its row of the conversion matrix; `convert_from` selects
/// the matrix column.
pub trait KindValue: Clone + fmt::Debug + Send + Sync + Sized + 'static {
    const KIND: Kind;

    /// Builds an element from a raw payload, applying the kind's null predicate.
    fn new_element(value: Self, config: &ValuesConfig) -> Element<Self>;

    /// Payload carried by null elements of this kind.
    fn null_value(config: &ValuesConfig) -> Self;

    fn to_any(&self) -> AnyValue;

    /// Ordering used by `less`.
    fn compare(a: &Self, b: &Self) -> Ordering;

    fn to_float_element(e: &Element<Self>, config: &ValuesConfig) -> Element<f64>;

    fn to_int_element(e: &Element<Self>, config: &ValuesConfig) -> Element<i64>;

    fn to_string_element(e: &Element<Self>, config: &ValuesConfig) -> Element<String>;

    fn to_bool_element(e: &Element<Self>, config: &ValuesConfig) -> Element<bool>;

    fn to_datetime_element(e: &Element<Self>, config: &ValuesConfig) -> Element<DateTime<Utc>>;

    fn to_generic_element(e: &Element<Self>, config: &ValuesConfig) -> Element<AnyValue>;

    /// Converts an element of any kind into this kind.
    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<Self>;

    fn into_values(values: TypedValues<Self>) -> Values;

    fn null_element(config: &ValuesConfig) -> Element<Self> {
        Element::null(Self::null_value(config))
    }
}
