//! Bool row of the conversion matrix.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

pub fn bool_to_float(e: &Element<bool>) -> Element<f64> {
    if e.null {
        return Element::null(f64::NAN);
    }
    Element::valid(if e.value { 1.0 } else { 0.0 })
}

pub fn bool_to_int(e: &Element<bool>) -> Element<i64> {
    if e.null {
        return Element::null(0);
    }
    Element::valid(e.value as i64)
}

pub fn bool_to_string(e: &Element<bool>, config: &ValuesConfig) -> Element<String> {
    if e.null {
        return Element::null(config.null_filler.clone());
    }
    Element::valid(e.value.to_string())
}

/// Both `true` and `false` map to the Unix epoch; only null stays null.
pub fn bool_to_datetime(e: &Element<bool>) -> Element<DateTime<Utc>> {
    if e.null {
        return Element::null(typecol_datetime::zero_time());
    }
    Element::valid(typecol_datetime::unix_epoch())
}

impl KindValue for bool {
    const KIND: Kind = Kind::Bool;

    fn new_element(value: bool, _config: &ValuesConfig) -> Element<bool> {
        Element::valid(value)
    }

    fn null_value(_config: &ValuesConfig) -> bool {
        false
    }

    fn to_any(&self) -> AnyValue {
        AnyValue::Bool(*self)
    }

    fn compare(a: &bool, b: &bool) -> Ordering {
        a.cmp(b)
    }

    fn to_float_element(e: &Element<bool>, _config: &ValuesConfig) -> Element<f64> {
        bool_to_float(e)
    }

    fn to_int_element(e: &Element<bool>, _config: &ValuesConfig) -> Element<i64> {
        bool_to_int(e)
    }

    fn to_string_element(e: &Element<bool>, config: &ValuesConfig) -> Element<String> {
        bool_to_string(e, config)
    }

    fn to_bool_element(e: &Element<bool>, _config: &ValuesConfig) -> Element<bool> {
        e.clone()
    }

    fn to_datetime_element(e: &Element<bool>, _config: &ValuesConfig) -> Element<DateTime<Utc>> {
        bool_to_datetime(e)
    }

    fn to_generic_element(e: &Element<bool>, _config: &ValuesConfig) -> Element<AnyValue> {
        e.to_any()
    }

    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<bool> {
        S::to_bool_element(e, config)
    }

    fn into_values(values: TypedValues<bool>) -> Values {
        Values::Bool(values)
    }
}
