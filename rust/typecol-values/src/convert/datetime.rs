//! DateTime row of the conversion matrix.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

#[inline]
pub fn is_null_datetime(value: &DateTime<Utc>) -> bool {
    typecol_datetime::is_zero_time(value)
}

/// Nanoseconds since the epoch, or `None` for null, zero-time and
/// out-of-range instants.
fn epoch_nanoseconds(e: &Element<DateTime<Utc>>) -> Option<i64> {
    if e.null || is_null_datetime(&e.value) {
        return None;
    }
    typecol_datetime::to_unix_nanoseconds(&e.value)
}

pub fn datetime_to_float(e: &Element<DateTime<Utc>>) -> Element<f64> {
    match epoch_nanoseconds(e) {
        Some(ns) => Element::valid(ns as f64),
        None => Element::null(f64::NAN),
    }
}

pub fn datetime_to_int(e: &Element<DateTime<Utc>>) -> Element<i64> {
    match epoch_nanoseconds(e) {
        Some(ns) => Element::valid(ns),
        None => Element::null(0),
    }
}

pub fn datetime_to_string(e: &Element<DateTime<Utc>>, config: &ValuesConfig) -> Element<String> {
    if e.null {
        return Element::null(config.null_filler.clone());
    }
    Element::valid(typecol_datetime::format_datetime(&e.value))
}

pub fn datetime_to_bool(e: &Element<DateTime<Utc>>) -> Element<bool> {
    if e.null || is_null_datetime(&e.value) {
        return Element::null(false);
    }
    Element::valid(true)
}

impl KindValue for DateTime<Utc> {
    const KIND: Kind = Kind::DateTime;

    fn new_element(value: DateTime<Utc>, _config: &ValuesConfig) -> Element<DateTime<Utc>> {
        let null = is_null_datetime(&value);
        Element::new(value, null)
    }

    fn null_value(_config: &ValuesConfig) -> DateTime<Utc> {
        typecol_datetime::zero_time()
    }

    fn to_any(&self) -> AnyValue {
        AnyValue::DateTime(*self)
    }

    fn compare(a: &DateTime<Utc>, b: &DateTime<Utc>) -> Ordering {
        a.cmp(b)
    }

    fn to_float_element(e: &Element<DateTime<Utc>>, _config: &ValuesConfig) -> Element<f64> {
        datetime_to_float(e)
    }

    fn to_int_element(e: &Element<DateTime<Utc>>, _config: &ValuesConfig) -> Element<i64> {
        datetime_to_int(e)
    }

    fn to_string_element(e: &Element<DateTime<Utc>>, config: &ValuesConfig) -> Element<String> {
        datetime_to_string(e, config)
    }

    fn to_bool_element(e: &Element<DateTime<Utc>>, _config: &ValuesConfig) -> Element<bool> {
        datetime_to_bool(e)
    }

    fn to_datetime_element(
        e: &Element<DateTime<Utc>>,
        _config: &ValuesConfig,
    ) -> Element<DateTime<Utc>> {
        e.clone()
    }

    fn to_generic_element(
        e: &Element<DateTime<Utc>>,
        _config: &ValuesConfig,
    ) -> Element<AnyValue> {
        e.to_any()
    }

    fn convert_from<S: KindValue>(
        e: &Element<S>,
        config: &ValuesConfig,
    ) -> Element<DateTime<Utc>> {
        S::to_datetime_element(e, config)
    }

    fn into_values(values: TypedValues<DateTime<Utc>>) -> Values {
        Values::DateTime(values)
    }
}
