//! Typed, null-aware columnar values.
//!
//! A column holds elements of one [`Kind`]: float, int, string, bool,
//! datetime, or generic (dynamically typed). Every element is a payload plus
//! a null flag, and any column can be converted to any other kind by the
//! rules in [`convert`].
//!
//! Columns are built from untyped input by [`factory::from_input`]:
//!
//! ```
//! use typecol_values::{ValuesConfig, factory::from_input, kind::Kind};
//!
//! let config = ValuesConfig::default();
//! let values = from_input(vec!["1.5", "n/a", "3"], &config).unwrap();
//! assert_eq!(values.kind(), Kind::String);
//! assert_eq!(values.null_positions(), vec![1]);
//!
//! let floats = values.convert(Kind::Float, &config).unwrap();
//! assert_eq!(floats.value(0).unwrap().as_f64(), Some(1.5));
//! ```

pub mod any_value;
pub mod config;
pub mod convert;
pub mod element;
pub mod factory;
pub mod generic;
pub mod kind;
pub mod values;

pub use any_value::AnyValue;
pub use config::{ValuesConfig, default_config};
pub use element::{Element, KindValue};
pub use factory::{Input, from_input, must_from_input};
pub use kind::Kind;
pub use values::{
    BoolValues, DateTimeValues, FloatValues, GenericValues, IntValues, StringValues, TypedValues,
    Values,
};

#[cfg(test)]
mod tests;
