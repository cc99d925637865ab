//! Generic validated field.
//!
//! A [`ValidatedField`] wraps a value together with the [`FieldRule`] that
//! governs it. The rule is fixed by the type parameter; the value can only be
//! produced by running the rule. Field types that allow reassignment (phones)
//! add their own checked setter on top of `new`.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Validation and formatting rule for a field type.
pub trait FieldRule {
    /// The parsed value held by the field.
    type Value: Clone + PartialEq + Eq + Hash;

    /// Parse and validate the raw text of a field.
    fn parse(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Produce the canonical textual form of a valid value.
    fn format(value: &Self::Value) -> String;
}

/// A value that is guaranteed to satisfy the rule `R`.
///
/// Equality and hashing are by value, so two fields built from the same
/// text compare equal wherever they are used as list elements.
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Build a field from raw text.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if `raw` is not a valid value.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            value: R::parse(raw)?,
            _rule: PhantomData,
        })
    }

    /// Borrow the parsed value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Convert into the parsed value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }
}

impl<R: FieldRule> Clone for ValidatedField<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> {}

impl<R: FieldRule> Hash for ValidatedField<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField")
            .field(&R::format(&self.value))
            .finish()
    }
}

// Display support - canonical form
impl<R: FieldRule> fmt::Display for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", R::format(&self.value))
    }
}

// Serde support - serialize as canonical string
impl<R: FieldRule> Serialize for ValidatedField<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        R::format(&self.value).serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for ValidatedField<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedField::new(&s).map_err(serde::de::Error::custom)
    }
}
