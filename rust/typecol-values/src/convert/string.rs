//! String row of the conversion matrix.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

/// Parses a decimal or scientific number. NaN text counts as unparsable.
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

pub fn string_to_float(e: &Element<String>) -> Element<f64> {
    if e.null {
        return Element::null(f64::NAN);
    }
    match parse_float(&e.value) {
        Some(v) => Element::valid(v),
        None => Element::null(f64::NAN),
    }
}

/// Integers parse exactly; anything else goes through float parsing and is
/// truncated toward zero, so `"1.9"` becomes `1`.
pub fn string_to_int(e: &Element<String>) -> Element<i64> {
    if e.null {
        return Element::null(0);
    }
    if let Ok(v) = e.value.trim().parse::<i64>() {
        return Element::valid(v);
    }
    match parse_float(&e.value) {
        Some(v) => Element::valid(v.trunc() as i64),
        None => Element::null(0),
    }
}

/// Identity that re-applies the null tokens of `config`.
pub fn string_to_string(e: &Element<String>, config: &ValuesConfig) -> Element<String> {
    if e.null {
        return Element::null(config.null_filler.clone());
    }
    String::new_element(e.value.clone(), config)
}

/// Every non-null string is `true`.
pub fn string_to_bool(e: &Element<String>) -> Element<bool> {
    Element::new(!e.null, e.null)
}

pub fn string_to_datetime(e: &Element<String>, config: &ValuesConfig) -> Element<DateTime<Utc>> {
    if e.null {
        return Element::null(typecol_datetime::zero_time());
    }
    match typecol_datetime::parse_any(&e.value) {
        Some(t) => DateTime::<Utc>::new_element(t, config),
        None => Element::null(typecol_datetime::zero_time()),
    }
}

impl KindValue for String {
    const KIND: Kind = Kind::String;

    fn new_element(value: String, config: &ValuesConfig) -> Element<String> {
        if config.is_null_string(&value) {
            Element::null(config.null_filler.clone())
        } else {
            Element::valid(value)
        }
    }

    fn null_value(config: &ValuesConfig) -> String {
        config.null_filler.clone()
    }

    fn to_any(&self) -> AnyValue {
        AnyValue::String(self.clone())
    }

    fn compare(a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }

    fn to_float_element(e: &Element<String>, _config: &ValuesConfig) -> Element<f64> {
        string_to_float(e)
    }

    fn to_int_element(e: &Element<String>, _config: &ValuesConfig) -> Element<i64> {
        string_to_int(e)
    }

    fn to_string_element(e: &Element<String>, config: &ValuesConfig) -> Element<String> {
        string_to_string(e, config)
    }

    fn to_bool_element(e: &Element<String>, _config: &ValuesConfig) -> Element<bool> {
        string_to_bool(e)
    }

    fn to_datetime_element(e: &Element<String>, config: &ValuesConfig) -> Element<DateTime<Utc>> {
        string_to_datetime(e, config)
    }

    fn to_generic_element(e: &Element<String>, _config: &ValuesConfig) -> Element<AnyValue> {
        e.to_any()
    }

    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<String> {
        S::to_string_element(e, config)
    }

    fn into_values(values: TypedValues<String>) -> Values {
        Values::String(values)
    }
}
