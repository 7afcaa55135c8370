//! Declarative field validation.
//!
//! A [`RuleSet`] is plain data: for every field an ordered list of [`Check`]s.
//! Targets expose their current state through [`Validatable`], and
//! [`RuleSet::validate`] reports every failing check as a [`FieldErrors`] map.
//! The engine never fails on its own; callers decide whether to raise the
//! aggregate [`EntityValidationError`].

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateLength;

/// Dynamic view of a single field value as seen by the checks.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The target has no such field.
    Missing,
    Null,
    Text(String),
    Bool(bool),
    Number(f64),
    Timestamp(NaiveDateTime),
    /// Any other shape, named for diagnostics.
    Other(&'static str),
}

impl FieldValue {
    fn is_absent(&self) -> bool {
        matches!(self, Self::Missing | Self::Null)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Other("number"), Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) => Self::Other("array"),
            Value::Object(_) => Self::Other("object"),
        }
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |s| Self::Text(s.to_string()))
    }
}

/// Anything whose fields can be inspected by name.
pub trait Validatable {
    fn field_value(&self, field: &str) -> FieldValue;
}

impl Validatable for serde_json::Map<String, serde_json::Value> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).map_or(FieldValue::Missing, FieldValue::from)
    }
}

/// A single declarative check with its message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NotEmpty,
    IsString,
    /// Maximum length in characters.
    MaxLength(u64),
    IsBoolean,
    IsDate,
}

impl Check {
    pub fn passes(&self, value: &FieldValue) -> bool {
        match self {
            Self::NotEmpty => match value {
                FieldValue::Missing | FieldValue::Null => false,
                FieldValue::Text(text) => !text.is_empty(),
                _ => true,
            },
            Self::IsString => matches!(value, FieldValue::Text(_)),
            Self::MaxLength(max) => match value {
                FieldValue::Text(text) => text.validate_length(None, Some(*max), None),
                _ => false,
            },
            Self::IsBoolean => matches!(value, FieldValue::Bool(_)),
            Self::IsDate => match value {
                FieldValue::Timestamp(_) => true,
                FieldValue::Text(text) => text.parse::<NaiveDateTime>().is_ok(),
                _ => false,
            },
        }
    }

    pub fn message(&self, field: &str) -> String {
        match self {
            Self::NotEmpty => format!("{field} should not be empty"),
            Self::IsString => format!("{field} must be a string"),
            Self::MaxLength(max) => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
            Self::IsBoolean => format!("{field} must be a boolean"),
            Self::IsDate => format!("{field} must be a Date instance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRules {
    field: &'static str,
    optional: bool,
    checks: Vec<Check>,
}

/// Ordered field rules, evaluated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds checks that always run for `field`.
    pub fn field<I>(self, field: &'static str, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.push(field, false, checks)
    }

    /// Adds checks that are skipped when `field` is missing or null.
    pub fn optional_field<I>(self, field: &'static str, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.push(field, true, checks)
    }

    fn push<I>(mut self, field: &'static str, optional: bool, checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
    {
        self.fields.push(FieldRules {
            field,
            optional,
            checks: checks.into_iter().collect(),
        });
        self
    }

    /// Runs every check against `target` and collects the failures.
    pub fn validate<T>(&self, target: &T) -> FieldErrors
    where
        T: Validatable + ?Sized,
    {
        let mut errors = FieldErrors::default();
        for rules in &self.fields {
            let value = target.field_value(rules.field);
            if rules.optional && value.is_absent() {
                continue;
            }
            for check in &rules.checks {
                if !check.passes(&value) {
                    errors.add(rules.field, check.message(rules.field));
                }
            }
        }
        errors
    }
}

/// Field name to ordered violation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Raises the aggregate error when any violation was recorded.
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError::new(self))
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, (field, messages)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl From<FieldErrors> for BTreeMap<String, Vec<String>> {
    fn from(value: FieldErrors) -> Self {
        value.0
    }
}

/// All violations found in one validation pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Validation Error: {errors}")]
pub struct EntityValidationError {
    errors: FieldErrors,
}

impl EntityValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}
