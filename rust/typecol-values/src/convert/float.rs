//! Float row of the conversion matrix.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

#[inline]
pub fn is_null_float(value: f64) -> bool {
    value.is_nan()
}

/// Truncates toward zero. Infinite values saturate at the `i64` bounds.
pub fn float_to_int(e: &Element<f64>) -> Element<i64> {
    if e.null || e.value.is_nan() {
        return Element::null(0);
    }
    Element::valid(e.value.trunc() as i64)
}

/// Shortest decimal rendering that reads back as the same value: `1.5`, `2`, `-0.25`.
pub fn float_to_string(e: &Element<f64>, config: &ValuesConfig) -> Element<String> {
    if e.null {
        return Element::null(config.null_filler.clone());
    }
    Element::valid(e.value.to_string())
}

pub fn float_to_bool(e: &Element<f64>) -> Element<bool> {
    if e.null {
        return Element::null(false);
    }
    Element::valid(e.value != 0.0)
}

/// Reads the payload as nanoseconds since the Unix epoch.
pub fn float_to_datetime(e: &Element<f64>) -> Element<DateTime<Utc>> {
    if e.null {
        return Element::null(typecol_datetime::zero_time());
    }
    match typecol_datetime::from_unix_nanoseconds_f64(e.value) {
        Some(t) => Element::valid(t),
        None => Element::null(typecol_datetime::zero_time()),
    }
}

impl KindValue for f64 {
    const KIND: Kind = Kind::Float;

    fn new_element(value: f64, _config: &ValuesConfig) -> Element<f64> {
        Element::new(value, is_null_float(value))
    }

    fn null_value(_config: &ValuesConfig) -> f64 {
        f64::NAN
    }

    fn to_any(&self) -> AnyValue {
        AnyValue::Float64(*self)
    }

    fn compare(a: &f64, b: &f64) -> Ordering {
        OrderedFloat(*a).cmp(&OrderedFloat(*b))
    }

    fn to_float_element(e: &Element<f64>, _config: &ValuesConfig) -> Element<f64> {
        e.clone()
    }

    fn to_int_element(e: &Element<f64>, _config: &ValuesConfig) -> Element<i64> {
        float_to_int(e)
    }

    fn to_string_element(e: &Element<f64>, config: &ValuesConfig) -> Element<String> {
        float_to_string(e, config)
    }

    fn to_bool_element(e: &Element<f64>, _config: &ValuesConfig) -> Element<bool> {
        float_to_bool(e)
    }

    fn to_datetime_element(e: &Element<f64>, _config: &ValuesConfig) -> Element<DateTime<Utc>> {
        float_to_datetime(e)
    }

    fn to_generic_element(e: &Element<f64>, _config: &ValuesConfig) -> Element<AnyValue> {
        e.to_any()
    }

    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<f64> {
        S::to_float_element(e, config)
    }

    fn into_values(values: TypedValues<f64>) -> Values {
        Values::Float(values)
    }
}
