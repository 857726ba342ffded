//! Int row of the conversion matrix.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
    values::{TypedValues, Values},
};

pub fn int_to_float(e: &Element<i64>) -> Element<f64> {
    if e.null {
        return Element::null(f64::NAN);
    }
    Element::valid(e.value as f64)
}

pub fn int_to_string(e: &Element<i64>, config: &ValuesConfig) -> Element<String> {
    if e.null {
        return Element::null(config.null_filler.clone());
    }
    Element::valid(e.value.to_string())
}

pub fn int_to_bool(e: &Element<i64>) -> Element<bool> {
    if e.null {
        return Element::null(false);
    }
    Element::valid(e.value != 0)
}

/// Reads the payload as nanoseconds since the Unix epoch.
pub fn int_to_datetime(e: &Element<i64>) -> Element<DateTime<Utc>> {
    if e.null {
        return Element::null(typecol_datetime::zero_time());
    }
    Element::valid(typecol_datetime::from_unix_nanoseconds(e.value))
}

impl KindValue for i64 {
    const KIND: Kind = Kind::Int;

    fn new_element(value: i64, _config: &ValuesConfig) -> Element<i64> {
        Element::valid(value)
    }

    fn null_value(_config: &ValuesConfig) -> i64 {
        0
    }

    fn to_any(&self) -> AnyValue {
        AnyValue::Int64(*self)
    }

    fn compare(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn to_float_element(e: &Element<i64>, _config: &ValuesConfig) -> Element<f64> {
        int_to_float(e)
    }

    fn to_int_element(e: &Element<i64>, _config: &ValuesConfig) -> Element<i64> {
        e.clone()
    }

    fn to_string_element(e: &Element<i64>, config: &ValuesConfig) -> Element<String> {
        int_to_string(e, config)
    }

    fn to_bool_element(e: &Element<i64>, _config: &ValuesConfig) -> Element<bool> {
        int_to_bool(e)
    }

    fn to_datetime_element(e: &Element<i64>, _config: &ValuesConfig) -> Element<DateTime<Utc>> {
        int_to_datetime(e)
    }

    fn to_generic_element(e: &Element<i64>, _config: &ValuesConfig) -> Element<AnyValue> {
        e.to_any()
    }

    fn convert_from<S: KindValue>(e: &Element<S>, config: &ValuesConfig) -> Element<i64> {
        S::to_int_element(e, config)
    }

    fn into_values(values: TypedValues<i64>) -> Values {
        Values::Int(values)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_int_to_float() {
        assert_eq!(int_to_float(&Element::valid(-3)), Element::valid(-3.0));
        let e = int_to_float(&Element::null(0));
        assert!(e.null);
        assert!(e.value.is_nan());
    }

    #[test]
    fn test_int_to_datetime_reads_nanoseconds() {
        let e = int_to_datetime(&Element::valid(1_556_668_800_000_000_000));
        assert_eq!(e, Element::valid(Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap()));

        let e = int_to_datetime(&Element::valid(1));
        assert_eq!(e.value.timestamp_subsec_nanos(), 1);
        assert_eq!(
            int_to_datetime(&Element::null(0)),
            Element::null(typecol_datetime::zero_time())
        );
    }

    #[test]
    fn test_int_to_bool_and_string() {
        let config = ValuesConfig::default();
        assert_eq!(int_to_bool(&Element::valid(0)), Element::valid(false));
        assert_eq!(int_to_bool(&Element::valid(-7)), Element::valid(true));
        assert_eq!(int_to_string(&Element::valid(-7), &config).value, "-7");
        assert_eq!(int_to_string(&Element::null(0), &config), Element::null("NaN".to_string()));
    }
}
