use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::category::{CATEGORY_RULES, NewCategory};
use crate::domain::types::{CategoryId, InvalidUuidError};
use crate::domain::validation::{EntityValidationError, FieldErrors, FieldValue, Validatable};

/// Untyped category input as received from outside.
///
/// Every field is kept as raw JSON so that wrongly typed values are reported
/// by the category rules instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryForm {
    #[serde(default)]
    pub category_id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub is_active: Value,
    #[serde(default)]
    pub created_at: Value,
}

impl CreateCategoryForm {
    /// Name as supplied, when it is text. Used for reporting.
    pub fn name_hint(&self) -> Option<&str> {
        self.name.as_str()
    }
}

impl Validatable for CreateCategoryForm {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "categoryId" => (&self.category_id).into(),
            "name" => (&self.name).into(),
            "description" => (&self.description).into(),
            // Absent activity flag defaults to active.
            "isActive" if self.is_active.is_null() => FieldValue::Bool(true),
            "isActive" => (&self.is_active).into(),
            "createdAt" => (&self.created_at).into(),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(#[from] EntityValidationError),
    #[error("Category form contains invalid data: {0}")]
    Identifier(#[from] InvalidUuidError),
}

impl CategoryFormError {
    /// Field level messages, when the failure came from validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(e) => Some(e.errors()),
            Self::Identifier(_) => None,
        }
    }
}

impl TryFrom<CreateCategoryForm> for NewCategory {
    type Error = CategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        CATEGORY_RULES.validate(&value).into_result()?;

        let category_id = match value.category_id {
            Value::Null => None,
            Value::String(id) => Some(CategoryId::new(id)?),
            other => return Err(InvalidUuidError::new(other.to_string()).into()),
        };

        Ok(Self {
            category_id,
            name: value.name.as_str().unwrap_or_default().to_string(),
            description: value.description.as_str().map(str::to_string),
            is_active: value.is_active.as_bool(),
            created_at: value
                .created_at
                .as_str()
                .and_then(|s| s.parse::<NaiveDateTime>().ok()),
        })
    }
}
