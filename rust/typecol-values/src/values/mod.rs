//! Typed containers.
//!
//! [`TypedValues<T>`] is the column of one kind; [`Values`] is the closed sum
//! over the six kinds. Both expose the same operation set, `Values` by
//! forwarding to the container it holds.

mod typed;

pub use typed::{
    BoolValues, DateTimeValues, FloatValues, GenericValues, IntValues, StringValues, TypedValues,
};

use typecol_common::{Result, error::Error};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    kind::Kind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Float(FloatValues),
    Int(IntValues),
    String(StringValues),
    Bool(BoolValues),
    DateTime(DateTimeValues),
    Generic(GenericValues),
}

macro_rules! dispatch {
    ($self:expr, $values:ident => $body:expr) => {
        match $self {
            Values::Float($values) => $body,
            Values::Int($values) => $body,
            Values::String($values) => $body,
            Values::Bool($values) => $body,
            Values::DateTime($values) => $body,
            Values::Generic($values) => $body,
        }
    };
}

macro_rules! impl_as_typed {
    ($as_fn:ident, $as_mut_fn:ident, $variant:ident, $T:ty) => {
        pub fn $as_fn(&self) -> Option<&$T> {
            match self {
                Values::$variant(values) => Some(values),
                _ => None,
            }
        }

        pub fn $as_mut_fn(&mut self) -> Option<&mut $T> {
            match self {
                Values::$variant(values) => Some(values),
                _ => None,
            }
        }
    };
}

impl Values {
    /// An empty container of the given kind.
    pub fn empty(kind: Kind) -> Result<Values> {
        let values = match kind {
            Kind::None => return Err(Error::invalid_kind(kind.name())),
            Kind::Float => FloatValues::new().into(),
            Kind::Int => IntValues::new().into(),
            Kind::String => StringValues::new().into(),
            Kind::Bool => BoolValues::new().into(),
            Kind::DateTime => DateTimeValues::new().into(),
            Kind::Generic => GenericValues::new().into(),
        };
        Ok(values)
    }

    pub fn kind(&self) -> Kind {
        dispatch!(self, values => values.kind())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, values => values.is_empty())
    }

    pub fn value(&self, pos: usize) -> Result<AnyValue> {
        dispatch!(self, values => values.value(pos).map(KindValue::to_any))
    }

    pub fn is_null(&self, pos: usize) -> Result<bool> {
        dispatch!(self, values => values.is_null(pos))
    }

    pub fn element(&self, pos: usize) -> Result<Element<AnyValue>> {
        dispatch!(self, values => values.element(pos).map(Element::to_any))
    }

    pub fn values(&self) -> Vec<AnyValue> {
        dispatch!(self, values => values.values())
    }

    pub fn subset(&self, positions: &[usize]) -> Result<Values> {
        dispatch!(self, values => values.subset(positions).map(Values::from))
    }

    pub fn copy(&self) -> Values {
        self.clone()
    }

    pub fn set(&mut self, pos: usize, value: &AnyValue, config: &ValuesConfig) -> Result<()> {
        dispatch!(self, values => values.set(pos, value, config))
    }

    pub fn insert(&mut self, pos: usize, value: &AnyValue, config: &ValuesConfig) -> Result<()> {
        dispatch!(self, values => values.insert(pos, value, config))
    }

    pub fn drop_at(&mut self, pos: usize) -> Result<()> {
        dispatch!(self, values => values.drop_at(pos))
    }

    /// Appends `other`, converted to the kind of `self`.
    pub fn append(&mut self, other: &Values, config: &ValuesConfig) {
        dispatch!(self, values => values.append(other, config))
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        dispatch!(self, values => values.swap(i, j))
    }

    pub fn less(&self, i: usize, j: usize) -> Result<bool> {
        dispatch!(self, values => values.less(i, j))
    }

    pub fn valid_positions(&self) -> Vec<usize> {
        dispatch!(self, values => values.valid_positions())
    }

    pub fn null_positions(&self) -> Vec<usize> {
        dispatch!(self, values => values.null_positions())
    }

    pub fn null_count(&self) -> usize {
        dispatch!(self, values => values.null_count())
    }

    /// Converts into the container of payload type `T`.
    pub fn convert_typed<T: KindValue>(&self, config: &ValuesConfig) -> TypedValues<T> {
        dispatch!(self, values => values.convert(config))
    }

    /// Converts into a container of `kind`. See [`crate::convert::convert`].
    pub fn convert(&self, kind: Kind, config: &ValuesConfig) -> Result<Values> {
        crate::convert::convert(self, kind, config)
    }

    pub fn to_float(&self, config: &ValuesConfig) -> FloatValues {
        self.convert_typed(config)
    }

    pub fn to_int(&self, config: &ValuesConfig) -> IntValues {
        self.convert_typed(config)
    }

    pub fn to_string(&self, config: &ValuesConfig) -> StringValues {
        self.convert_typed(config)
    }

    pub fn to_bool(&self, config: &ValuesConfig) -> BoolValues {
        self.convert_typed(config)
    }

    pub fn to_datetime(&self, config: &ValuesConfig) -> DateTimeValues {
        self.convert_typed(config)
    }

    pub fn to_generic(&self, config: &ValuesConfig) -> GenericValues {
        self.convert_typed(config)
    }

    impl_as_typed!(as_float, as_float_mut, Float, FloatValues);
    impl_as_typed!(as_int, as_int_mut, Int, IntValues);
    impl_as_typed!(as_string, as_string_mut, String, StringValues);
    impl_as_typed!(as_bool, as_bool_mut, Bool, BoolValues);
    impl_as_typed!(as_datetime, as_datetime_mut, DateTime, DateTimeValues);
    impl_as_typed!(as_generic, as_generic_mut, Generic, GenericValues);
}
