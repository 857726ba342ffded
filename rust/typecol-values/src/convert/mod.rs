//! The conversion matrix.
//!
//! Every ordered pair of kinds has a total, element-level conversion. The
//! functions for one source kind live together in a submodule, and each
//! submodule also implements [`KindValue`](crate::element::KindValue) for the
//! payload type of its kind. The generic row is in [`crate::generic`].
//!
//! Conversions never fail: payloads that cannot be represented in the target
//! kind become that kind's null sentinel with the null flag set.

mod boolean;
mod datetime;
mod float;
mod int;
mod string;

pub use boolean::*;
pub use datetime::*;
pub use float::*;
pub use int::*;
pub use string::*;

use typecol_common::{Result, error::Error};

use crate::{config::ValuesConfig, kind::Kind, values::Values};

/// Converts `values` into a new container of the given `kind`.
///
/// Fails only when `kind` is [`Kind::None`].
pub fn convert(values: &Values, kind: Kind, config: &ValuesConfig) -> Result<Values> {
    let converted = match kind {
        Kind::None => return Err(Error::invalid_kind(kind.name())),
        Kind::Float => values.to_float(config).into(),
        Kind::Int => values.to_int(config).into(),
        Kind::String => values.to_string(config).into(),
        Kind::Bool => values.to_bool(config).into(),
        Kind::DateTime => values.to_datetime(config).into(),
        Kind::Generic => values.to_generic(config).into(),
    };
    log::debug!(
        "converted {} {} values to {}",
        values.len(),
        values.kind(),
        kind
    );
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::FloatValues;

    #[test]
    fn test_convert_to_none_is_rejected() {
        let config = ValuesConfig::default();
        let values: Values = FloatValues::from_raw([1.0, 2.0], &config).into();
        let err = convert(&values, Kind::None, &config).unwrap_err();
        assert!(err.is_invalid_kind());
    }

    #[test]
    fn test_convert_every_kind() -> Result<()> {
        let config = ValuesConfig::default();
        let values: Values = FloatValues::from_raw([1.0, f64::NAN], &config).into();
        for kind in Kind::VALUE_KINDS {
            let converted = convert(&values, kind, &config)?;
            assert_eq!(converted.kind(), kind);
            assert_eq!(converted.len(), 2);
            assert!(!converted.is_null(0)?);
            assert!(converted.is_null(1)?);
        }
        Ok(())
    }
}
