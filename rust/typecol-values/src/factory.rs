//! Construction of typed containers from untyped input.

use chrono::{DateTime, Utc};
use num_traits::AsPrimitive;
use typecol_common::{Result, error::Error};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    convert,
    kind::Kind,
    values::{
        BoolValues, DateTimeValues, FloatValues, GenericValues, IntValues, StringValues, Values,
    },
};

/// Untyped input accepted by [`from_input`].
///
/// Homogeneous sequences of primitive types map directly to a kind; dynamic
/// sequences become generic containers.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Null,
    Scalar(AnyValue),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    ISize(Vec<isize>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    USize(Vec<usize>),
    String(Vec<String>),
    Bool(Vec<bool>),
    DateTime(Vec<DateTime<Utc>>),
    Dynamic(Vec<AnyValue>),
    /// A sequence of sequences. Always rejected.
    Nested(Vec<Input>),
}

impl Input {
    /// Name of the input type, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Input::Null => "null",
            Input::Scalar(value) => value.type_name(),
            Input::Float32(_) => "[]float32",
            Input::Float64(_) => "[]float64",
            Input::Int8(_) => "[]int8",
            Input::Int16(_) => "[]int16",
            Input::Int32(_) => "[]int32",
            Input::Int64(_) => "[]int64",
            Input::ISize(_) => "[]isize",
            Input::UInt8(_) => "[]uint8",
            Input::UInt16(_) => "[]uint16",
            Input::UInt32(_) => "[]uint32",
            Input::UInt64(_) => "[]uint64",
            Input::USize(_) => "[]usize",
            Input::String(_) => "[]string",
            Input::Bool(_) => "[]bool",
            Input::DateTime(_) => "[]datetime",
            Input::Dynamic(_) => "[]any",
            Input::Nested(_) => "[][]any",
        }
    }
}

macro_rules! impl_input_from_vec {
    ($T:ty, $variant:ident) => {
        impl From<Vec<$T>> for Input {
            fn from(values: Vec<$T>) -> Input {
                Input::$variant(values)
            }
        }
    };
}

impl_input_from_vec!(f32, Float32);
impl_input_from_vec!(f64, Float64);
impl_input_from_vec!(i8, Int8);
impl_input_from_vec!(i16, Int16);
impl_input_from_vec!(i32, Int32);
impl_input_from_vec!(i64, Int64);
impl_input_from_vec!(isize, ISize);
impl_input_from_vec!(u8, UInt8);
impl_input_from_vec!(u16, UInt16);
impl_input_from_vec!(u32, UInt32);
impl_input_from_vec!(u64, UInt64);
impl_input_from_vec!(usize, USize);
impl_input_from_vec!(String, String);
impl_input_from_vec!(bool, Bool);
impl_input_from_vec!(DateTime<Utc>, DateTime);
impl_input_from_vec!(AnyValue, Dynamic);
impl_input_from_vec!(Input, Nested);

impl From<Vec<&str>> for Input {
    fn from(values: Vec<&str>) -> Input {
        Input::String(values.into_iter().map(str::to_string).collect())
    }
}

impl From<AnyValue> for Input {
    fn from(value: AnyValue) -> Input {
        Input::Scalar(value)
    }
}

macro_rules! impl_input_from_scalar {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Input {
                fn from(value: $T) -> Input {
                    Input::Scalar(value.into())
                }
            }
        )*
    };
}

impl_input_from_scalar!(
    f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String, bool, DateTime<Utc>
);

impl From<&str> for Input {
    fn from(value: &str) -> Input {
        Input::Scalar(value.into())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Input {
        value.map_or(Input::Null, Into::into)
    }
}

fn float_values<T: AsPrimitive<f64>>(values: Vec<T>, config: &ValuesConfig) -> Values {
    FloatValues::from_raw(values.into_iter().map(|v| v.as_()), config).into()
}

/// Unsigned values above `i64::MAX` wrap around.
fn int_values<T: AsPrimitive<i64>>(values: Vec<T>, config: &ValuesConfig) -> Values {
    IntValues::from_raw(values.into_iter().map(|v| v.as_()), config).into()
}

fn from_scalar(value: AnyValue, config: &ValuesConfig) -> Result<Values> {
    let values = match value {
        AnyValue::Null => GenericValues::new().into(),
        AnyValue::String(s) => StringValues::from_raw([s], config).into(),
        AnyValue::Bool(b) => BoolValues::from_raw([b], config).into(),
        AnyValue::DateTime(t) => DateTimeValues::from_raw([t], config).into(),
        AnyValue::Complex { .. } | AnyValue::Opaque { .. } => {
            return Err(Error::unsupported_type(value.type_name()));
        }
        _ => match (value.as_f64(), value.as_i64()) {
            (Some(v), _) => float_values(vec![v], config),
            (None, Some(v)) => int_values(vec![v], config),
            (None, None) => return Err(Error::unsupported_type(value.type_name())),
        },
    };
    Ok(values)
}

/// Builds a typed container from untyped input.
///
/// - `Input::Null` (and a null scalar) yields an empty generic container.
/// - A primitive scalar yields a container of length one.
/// - A homogeneous sequence yields a container of the matching kind, with
///   floats widened to `f64` and integers to `i64`.
/// - A dynamic sequence yields a generic container; each element's null flag
///   is computed independently.
///
/// Null predicates are applied while constructing. Complex and opaque scalars
/// and nested sequences fail with `UnsupportedType`.
pub fn from_input(data: impl Into<Input>, config: &ValuesConfig) -> Result<Values> {
    let values = match data.into() {
        Input::Null => GenericValues::new().into(),
        Input::Scalar(value) => from_scalar(value, config)?,
        Input::Float32(v) => float_values(v, config),
        Input::Float64(v) => float_values(v, config),
        Input::Int8(v) => int_values(v, config),
        Input::Int16(v) => int_values(v, config),
        Input::Int32(v) => int_values(v, config),
        Input::Int64(v) => int_values(v, config),
        Input::ISize(v) => int_values(v, config),
        Input::UInt8(v) => int_values(v, config),
        Input::UInt16(v) => int_values(v, config),
        Input::UInt32(v) => int_values(v, config),
        Input::UInt64(v) => int_values(v, config),
        Input::USize(v) => int_values(v, config),
        Input::String(v) => StringValues::from_raw(v, config).into(),
        Input::Bool(v) => BoolValues::from_raw(v, config).into(),
        Input::DateTime(v) => DateTimeValues::from_raw(v, config).into(),
        Input::Dynamic(v) => GenericValues::from_raw(v, config).into(),
        input @ Input::Nested(_) => return Err(Error::unsupported_type(input.type_name())),
    };
    Ok(values)
}

/// Like [`from_input`], but never fails.
///
/// Unsupported input yields an empty generic container; the error is logged
/// as a warning when `config.log_warnings` is set.
pub fn must_from_input(data: impl Into<Input>, config: &ValuesConfig) -> Values {
    match from_input(data, config) {
        Ok(values) => values,
        Err(e) => {
            if config.log_warnings {
                log::warn!("must_from_input(): {e}");
            }
            GenericValues::new().into()
        }
    }
}

/// Infers the kind that best describes a dynamic sequence.
///
/// Looks at no more than `config.interpolation_maximum` leading values and
/// counts the primitive kind of each. If the most common kind reaches
/// `config.interpolation_threshold` of the sample it is returned (the first
/// kind in `Kind::VALUE_KINDS` order wins ties). Otherwise, if floats and
/// integers together reach the threshold, `Kind::Float` is returned.
/// Everything else, including an empty sample, is `Kind::Generic`.
pub fn interpolate(values: &[AnyValue], config: &ValuesConfig) -> Kind {
    let sample = &values[..values.len().min(config.interpolation_maximum)];
    if sample.is_empty() {
        return Kind::Generic;
    }

    let candidates = [
        Kind::Float,
        Kind::Int,
        Kind::String,
        Kind::Bool,
        Kind::DateTime,
    ];
    let mut counts = [0usize; 5];
    for value in sample {
        if let Some(kind) = value.primitive_kind() {
            if let Some(i) = candidates.iter().position(|&k| k == kind) {
                counts[i] += 1;
            }
        }
    }

    let total = sample.len() as f64;
    let ratio = |count: usize| count as f64 / total;
    let threshold = config.interpolation_threshold;

    let best = (1..counts.len()).fold(0, |best, i| {
        if counts[i] > counts[best] { i } else { best }
    });
    if counts[best] > 0 && ratio(counts[best]) >= threshold {
        return candidates[best];
    }
    if ratio(counts[0] + counts[1]) >= threshold {
        return Kind::Float;
    }
    Kind::Generic
}

/// Like [`from_input`], but dynamic sequences are converted to the kind
/// chosen by [`interpolate`] when that kind is not generic.
pub fn from_input_interpolated(data: impl Into<Input>, config: &ValuesConfig) -> Result<Values> {
    match data.into() {
        Input::Dynamic(v) => {
            let kind = interpolate(&v, config);
            let values = from_input(Input::Dynamic(v), config)?;
            if kind == Kind::Generic {
                Ok(values)
            } else {
                convert::convert(&values, kind, config)
            }
        }
        input => from_input(input, config),
    }
}

/// Interprets raw text as the narrowest matching type: an integer, then a
/// float, then a boolean, then a date/time. Anything else stays a string.
pub fn interpolate_string(s: &str) -> AnyValue {
    if let Ok(v) = s.parse::<i64>() {
        return AnyValue::Int64(v);
    }
    if let Ok(v) = s.parse::<f64>() {
        return AnyValue::Float64(v);
    }
    if let Some(v) = parse_bool(s) {
        return AnyValue::Bool(v);
    }
    if let Some(t) = typecol_datetime::parse_any(s) {
        return AnyValue::DateTime(t);
    }
    AnyValue::String(s.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::element::Element;

    #[test]
    fn test_from_input_null() -> Result<()> {
        let config = ValuesConfig::default();
        let values = from_input(Input::Null, &config)?;
        assert_eq!(values.kind(), Kind::Generic);
        assert!(values.is_empty());

        let values = from_input(None::<f64>, &config)?;
        assert_eq!(values.kind(), Kind::Generic);
        assert!(values.is_empty());
        Ok(())
    }

    #[test]
    fn test_from_input_scalars() -> Result<()> {
        let config = ValuesConfig::default();
        let cases: Vec<(Input, Kind, AnyValue)> = vec![
            (1.5f32.into(), Kind::Float, AnyValue::Float64(1.5)),
            (2.0f64.into(), Kind::Float, AnyValue::Float64(2.0)),
            (3i8.into(), Kind::Int, AnyValue::Int64(3)),
            (4u32.into(), Kind::Int, AnyValue::Int64(4)),
            (5usize.into(), Kind::Int, AnyValue::Int64(5)),
            ("foo".into(), Kind::String, AnyValue::from("foo")),
            (true.into(), Kind::Bool, AnyValue::Bool(true)),
            (
                typecol_datetime::unix_epoch().into(),
                Kind::DateTime,
                AnyValue::DateTime(typecol_datetime::unix_epoch()),
            ),
        ];
        for (input, kind, value) in cases {
            let values = from_input(input, &config)?;
            assert_eq!(values.kind(), kind);
            assert_eq!(values.len(), 1);
            assert_eq!(values.value(0)?, value);
        }

        let values = from_input("n/a", &config)?;
        assert!(values.is_null(0)?);
        let values = from_input(f64::NAN, &config)?;
        assert!(values.is_null(0)?);
        Ok(())
    }

    #[test]
    fn test_from_input_sequences() -> Result<()> {
        let config = ValuesConfig::default();
        let values = from_input(vec![1u8, 2, 255], &config)?;
        assert_eq!(values.as_int().map(|v| v.vals()), Some(vec![1, 2, 255]));

        let values = from_input(vec![-1isize, 2], &config)?;
        assert_eq!(values.as_int().map(|v| v.vals()), Some(vec![-1, 2]));

        let values = from_input(vec![f64::NAN, 0.5], &config)?;
        assert_eq!(values.kind(), Kind::Float);
        assert_eq!(values.null_positions(), vec![0]);

        let values = from_input(vec![true, false], &config)?;
        assert_eq!(values.kind(), Kind::Bool);
        assert_eq!(values.null_count(), 0);

        let t = Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap();
        let values = from_input(vec![t, typecol_datetime::zero_time()], &config)?;
        assert_eq!(values.kind(), Kind::DateTime);
        assert_eq!(values.null_positions(), vec![1]);

        let values = from_input(Vec::<f64>::new(), &config)?;
        assert_eq!(values.kind(), Kind::Float);
        assert!(values.is_empty());
        Ok(())
    }

    #[test]
    fn test_from_input_dynamic() -> Result<()> {
        let config = ValuesConfig::default();
        let input = vec![
            AnyValue::from(1.0),
            AnyValue::from("n/a"),
            AnyValue::from(3u16),
            AnyValue::Null,
            AnyValue::Complex { re: 1.0, im: 1.0 },
        ];
        let values = from_input(input, &config)?;
        assert_eq!(values.kind(), Kind::Generic);
        assert_eq!(values.len(), 5);
        assert_eq!(values.null_positions(), vec![1, 3]);
        assert_eq!(values.value(2)?, AnyValue::UInt16(3));
        Ok(())
    }

    #[test]
    fn test_from_input_unsupported() {
        let config = ValuesConfig::default();
        let err = from_input(AnyValue::Complex { re: 1.0, im: 0.0 }, &config).unwrap_err();
        assert!(err.is_unsupported_type());
        assert_eq!(err.to_string(), "type not supported: complex128");

        let err = from_input(AnyValue::opaque("point", "(1, 2)"), &config).unwrap_err();
        assert_eq!(err.to_string(), "type not supported: point");

        let nested = Input::Nested(vec![vec![1.0f64].into()]);
        assert!(from_input(nested, &config).unwrap_err().is_unsupported_type());
    }

    #[test]
    fn test_must_from_input() {
        let config = ValuesConfig::default().with_log_warnings(false);
        let values = must_from_input(AnyValue::Complex { re: 1.0, im: 0.0 }, &config);
        assert_eq!(values.kind(), Kind::Generic);
        assert!(values.is_empty());

        let values = must_from_input(vec![1i64], &config);
        assert_eq!(values.kind(), Kind::Int);
    }

    #[test]
    fn test_interpolate() {
        let config = ValuesConfig::default();
        let ints: Vec<AnyValue> = (0..10).map(AnyValue::from).collect();
        assert_eq!(interpolate(&ints, &config), Kind::Int);

        let mut mixed: Vec<AnyValue> = (0..5).map(AnyValue::from).collect();
        mixed.extend((0..4).map(|i| AnyValue::from(i as f64 + 0.5)));
        mixed.push(AnyValue::from("x"));
        assert_eq!(interpolate(&mixed, &config), Kind::Float);

        let strings = vec![AnyValue::from("a"), AnyValue::from(1), AnyValue::from(true)];
        assert_eq!(interpolate(&strings, &config), Kind::Generic);
        assert_eq!(interpolate(&[], &config), Kind::Generic);

        // Only the sampled prefix counts.
        let mut long: Vec<AnyValue> = vec![AnyValue::from(true); 3];
        long.extend(vec![AnyValue::from("x"); 10]);
        let config = config.with_interpolation_maximum(3);
        assert_eq!(interpolate(&long, &config), Kind::Bool);
    }

    #[test]
    fn test_from_input_interpolated() -> Result<()> {
        let config = ValuesConfig::default();
        let values = from_input_interpolated(
            vec![AnyValue::from(1), AnyValue::from(2.5), AnyValue::from(3)],
            &config,
        )?;
        assert_eq!(values.kind(), Kind::Float);
        assert_eq!(values.as_float().map(|v| v.vals()), Some(vec![1.0, 2.5, 3.0]));

        let values = from_input_interpolated(
            vec![AnyValue::from("a"), AnyValue::from(1), AnyValue::from(true)],
            &config,
        )?;
        assert_eq!(values.kind(), Kind::Generic);

        let values = from_input_interpolated(vec!["x", "y"], &config)?;
        assert_eq!(values.kind(), Kind::String);
        Ok(())
    }

    #[test]
    fn test_interpolate_string() {
        assert_eq!(interpolate_string("42"), AnyValue::Int64(42));
        assert_eq!(interpolate_string("4.5"), AnyValue::Float64(4.5));
        assert_eq!(interpolate_string("true"), AnyValue::Bool(true));
        assert_eq!(interpolate_string("F"), AnyValue::Bool(false));
        assert_eq!(
            interpolate_string("2019-05-01"),
            AnyValue::DateTime(Utc.with_ymd_and_hms(2019, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(interpolate_string("foo"), AnyValue::from("foo"));
    }

    #[test]
    fn test_construction_copies_input() -> Result<()> {
        let config = ValuesConfig::default();
        let raw = vec![1.0, 2.0];
        let mut values = from_input(raw.clone(), &config)?;
        values.set(0, &AnyValue::from(9.0), &config)?;
        assert_eq!(raw, vec![1.0, 2.0]);
        assert_eq!(
            values.as_float().map(|v| v.elements()[0].clone()),
            Some(Element::valid(9.0))
        );
        Ok(())
    }
}
