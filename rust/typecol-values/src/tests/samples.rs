use chrono::{DateTime, TimeZone, Utc};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::Element,
    kind::Kind,
    values::{
        BoolValues, DateTimeValues, FloatValues, GenericValues, IntValues, StringValues, Values,
    },
};

pub const MAY_FIRST_2019_NANOS: i64 = 1_556_668_800_000_000_000;

pub fn may_first_2019() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap()
}

/// A container of `kind` with both valid and null elements.
pub fn sample_values(kind: Kind, config: &ValuesConfig) -> Values {
    match kind {
        Kind::Float => FloatValues::from_raw([0.0, 1.5, -2.0, f64::NAN, 3.0], config).into(),
        Kind::Int => IntValues::from_elements(vec![
            Element::valid(0),
            Element::valid(7),
            Element::valid(-3),
            Element::null(0),
            Element::valid(MAY_FIRST_2019_NANOS),
        ])
        .into(),
        Kind::String => StringValues::from_raw(
            ["1.9", "abc", "2019-05-01", "", "true", " N/A "].map(String::from),
            config,
        )
        .into(),
        Kind::Bool => BoolValues::from_elements(vec![
            Element::valid(true),
            Element::valid(false),
            Element::null(false),
        ])
        .into(),
        Kind::DateTime => DateTimeValues::from_raw(
            [
                may_first_2019(),
                typecol_datetime::unix_epoch(),
                typecol_datetime::zero_time(),
            ],
            config,
        )
        .into(),
        Kind::Generic => GenericValues::from_raw(
            [
                AnyValue::from(1.5),
                AnyValue::from(3i32),
                AnyValue::from(u64::MAX),
                AnyValue::from("x"),
                AnyValue::from(true),
                AnyValue::from(may_first_2019()),
                AnyValue::Null,
                AnyValue::Complex { re: 1.0, im: 2.0 },
                AnyValue::opaque("point", "(1, 2)"),
                AnyValue::from("n/a"),
                AnyValue::from(f32::NAN),
            ],
            config,
        )
        .into(),
        Kind::None => GenericValues::new().into(),
    }
}

/// Payload equality that treats NaN as equal to NaN.
pub fn same_value(a: &AnyValue, b: &AnyValue) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) if x.is_nan() && y.is_nan() => true,
        _ => a == b,
    }
}

pub fn assert_same(a: &Values, b: &Values) {
    assert_eq!(a.kind(), b.kind());
    assert_eq!(a.len(), b.len());
    assert_eq!(a.null_positions(), b.null_positions());
    for (i, (x, y)) in a.values().iter().zip(b.values().iter()).enumerate() {
        assert!(same_value(x, y), "position {i}: {x:?} != {y:?}");
    }
}
