use chrono::{DateTime, Utc};
use itertools::Itertools;
use typecol_common::{Result, verify_index};

use crate::{
    any_value::AnyValue,
    config::ValuesConfig,
    element::{Element, KindValue},
    generic::element_from_any,
    kind::Kind,
};

use super::Values;

/// An owned column of elements of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValues<T> {
    elements: Vec<Element<T>>,
}

pub type FloatValues = TypedValues<f64>;
pub type IntValues = TypedValues<i64>;
pub type StringValues = TypedValues<String>;
pub type BoolValues = TypedValues<bool>;
pub type DateTimeValues = TypedValues<DateTime<Utc>>;
pub type GenericValues = TypedValues<AnyValue>;

impl<T> Default for TypedValues<T> {
    fn default() -> Self {
        TypedValues {
            elements: Vec::new(),
        }
    }
}

impl<T: KindValue> TypedValues<T> {
    pub fn new() -> TypedValues<T> {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> TypedValues<T> {
        TypedValues {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps already-built elements without re-applying the null predicate.
    pub fn from_elements(elements: Vec<Element<T>>) -> TypedValues<T> {
        TypedValues { elements }
    }

    /// Builds a container from raw payloads, applying the kind's null predicate
    /// to each one.
    pub fn from_raw(values: impl IntoIterator<Item = T>, config: &ValuesConfig) -> TypedValues<T> {
        values
            .into_iter()
            .map(|value| T::new_element(value, config))
            .collect()
    }

    /// Builds a container from untyped values, each converted as by [`Self::set`].
    pub fn from_any<'a>(
        values: impl IntoIterator<Item = &'a AnyValue>,
        config: &ValuesConfig,
    ) -> TypedValues<T> {
        values
            .into_iter()
            .map(|value| element_from_any(value, config))
            .collect()
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        T::KIND
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element<T>] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element<T>> {
        self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.elements.iter()
    }

    pub fn element(&self, pos: usize) -> Result<&Element<T>> {
        verify_index!(pos, self.len());
        Ok(&self.elements[pos])
    }

    pub fn value(&self, pos: usize) -> Result<&T> {
        self.element(pos).map(|e| &e.value)
    }

    pub fn is_null(&self, pos: usize) -> Result<bool> {
        self.element(pos).map(|e| e.null)
    }

    /// Untyped payloads in order. Null elements contribute their sentinel.
    pub fn values(&self) -> Vec<AnyValue> {
        self.elements.iter().map(|e| e.value.to_any()).collect()
    }

    /// Typed payloads in order. Null elements contribute their sentinel.
    pub fn vals(&self) -> Vec<T> {
        self.elements.iter().map(|e| e.value.clone()).collect()
    }

    /// Elements at `positions`, in the given order. Positions may repeat.
    ///
    /// Fails without a partial result if any position is out of range.
    pub fn subset(&self, positions: &[usize]) -> Result<TypedValues<T>> {
        let len = self.len();
        positions
            .iter()
            .map(|&pos| -> Result<Element<T>> {
                verify_index!(pos, len);
                Ok(self.elements[pos].clone())
            })
            .collect::<Result<Vec<_>>>()
            .map(TypedValues::from_elements)
    }

    /// Deep copy. The result shares no storage with `self`.
    pub fn copy(&self) -> TypedValues<T> {
        self.clone()
    }

    /// Overwrites the element at `pos` with `value` converted to this kind.
    pub fn set(&mut self, pos: usize, value: &AnyValue, config: &ValuesConfig) -> Result<()> {
        verify_index!(pos, self.len());
        self.elements[pos] = element_from_any(value, config);
        Ok(())
    }

    /// Inserts `value` converted to this kind before `pos`. `pos == len()` appends.
    pub fn insert(&mut self, pos: usize, value: &AnyValue, config: &ValuesConfig) -> Result<()> {
        verify_index!(pos, self.len() + 1);
        self.elements.insert(pos, element_from_any(value, config));
        Ok(())
    }

    pub fn push(&mut self, value: &AnyValue, config: &ValuesConfig) {
        self.elements.push(element_from_any(value, config));
    }

    pub fn push_element(&mut self, element: Element<T>) {
        self.elements.push(element);
    }

    /// Removes the element at `pos`, shifting later elements left.
    pub fn drop_at(&mut self, pos: usize) -> Result<()> {
        verify_index!(pos, self.len());
        self.elements.remove(pos);
        Ok(())
    }

    /// Appends every element of `other`, converted to this kind.
    pub fn append(&mut self, other: &Values, config: &ValuesConfig) {
        let converted = other.convert_typed::<T>(config);
        self.elements.extend(converted.elements);
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        verify_index!(i, self.len());
        verify_index!(j, self.len());
        self.elements.swap(i, j);
        Ok(())
    }

    /// Returns `true` if the payload at `i` orders before the payload at `j`.
    pub fn less(&self, i: usize, j: usize) -> Result<bool> {
        let a = self.value(i)?;
        let b = self.value(j)?;
        Ok(T::compare(a, b).is_lt())
    }

    pub fn valid_positions(&self) -> Vec<usize> {
        self.elements.iter().positions(|e| !e.null).collect()
    }

    pub fn null_positions(&self) -> Vec<usize> {
        self.elements.iter().positions(|e| e.null).collect()
    }

    pub fn null_count(&self) -> usize {
        self.elements.iter().filter(|e| e.null).count()
    }

    /// Converts every element into kind `U`, producing a new container.
    pub fn convert<U: KindValue>(&self, config: &ValuesConfig) -> TypedValues<U> {
        self.elements
            .iter()
            .map(|e| U::convert_from(e, config))
            .collect()
    }

    pub fn to_float(&self, config: &ValuesConfig) -> FloatValues {
        self.convert(config)
    }

    pub fn to_int(&self, config: &ValuesConfig) -> IntValues {
        self.convert(config)
    }

    pub fn to_string(&self, config: &ValuesConfig) -> StringValues {
        self.convert(config)
    }

    pub fn to_bool(&self, config: &ValuesConfig) -> BoolValues {
        self.convert(config)
    }

    pub fn to_datetime(&self, config: &ValuesConfig) -> DateTimeValues {
        self.convert(config)
    }

    pub fn to_generic(&self, config: &ValuesConfig) -> GenericValues {
        self.convert(config)
    }
}

impl<T> FromIterator<Element<T>> for TypedValues<T> {
    fn from_iter<I: IntoIterator<Item = Element<T>>>(iter: I) -> Self {
        TypedValues {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TypedValues<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: KindValue> From<TypedValues<T>> for Values {
    fn from(values: TypedValues<T>) -> Values {
        T::into_values(values)
    }
}
