use std::sync::LazyLock;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;
use crate::domain::types::CategoryId;
use crate::domain::validation::{
    Check, EntityValidationError, FieldValue, RuleSet, Validatable,
};
use crate::dto::categories::CategoryDto;

pub const NAME_MAX_LENGTH: u64 = 255;
pub const DESCRIPTION_MAX_LENGTH: u64 = 255;

/// Rules every [`Category`] state must satisfy.
pub static CATEGORY_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            "name",
            [Check::NotEmpty, Check::IsString, Check::MaxLength(NAME_MAX_LENGTH)],
        )
        .optional_field(
            "description",
            [Check::IsString, Check::MaxLength(DESCRIPTION_MAX_LENGTH)],
        )
        .field("isActive", [Check::IsBoolean])
        .optional_field("createdAt", [Check::IsDate])
});

/// Data required to build a [`Category`]. Omitted fields get defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

impl NewCategory {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Catalog category.
///
/// Every constructor and mutator validates the resulting state against
/// [`CATEGORY_RULES`]. Mutators validate a candidate first and only commit it
/// when it passes, so a rejected change leaves the category untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    category_id: Option<CategoryId>,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl Category {
    /// Builds a category from `props`, keeping an absent id absent.
    pub fn new(props: NewCategory) -> Result<Self, EntityValidationError> {
        let category = Self {
            category_id: props.category_id,
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props
                .created_at
                .unwrap_or_else(|| Utc::now().naive_utc()),
        };
        category.validate()?;
        Ok(category)
    }

    /// Builds a category, assigning a fresh id when none was supplied.
    pub fn create(mut props: NewCategory) -> Result<Self, EntityValidationError> {
        props.category_id.get_or_insert_with(CategoryId::create);
        let category = Self::new(props).inspect_err(|e| {
            log::debug!("Rejected new category: {e}");
        })?;
        log::debug!("Created category {}", category.name);
        Ok(category)
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn change_name<S: Into<String>>(&mut self, name: S) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.commit(|candidate| candidate.name = name)
    }

    pub fn change_description<S: Into<String>>(
        &mut self,
        description: S,
    ) -> Result<(), EntityValidationError> {
        let description = description.into();
        self.commit(|candidate| candidate.description = Some(description))
    }

    pub fn activate(&mut self) -> Result<(), EntityValidationError> {
        self.commit(|candidate| candidate.is_active = true)
    }

    pub fn deactivate(&mut self) -> Result<(), EntityValidationError> {
        self.commit(|candidate| candidate.is_active = false)
    }

    /// Checks the current state against [`CATEGORY_RULES`].
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        CATEGORY_RULES.validate(self).into_result()
    }

    fn commit<F>(&mut self, change: F) -> Result<(), EntityValidationError>
    where
        F: FnOnce(&mut Self),
    {
        let mut candidate = self.clone();
        change(&mut candidate);
        if let Err(e) = candidate.validate() {
            log::debug!("Rejected change to category {}: {e}", self.name);
            return Err(e);
        }
        *self = candidate;
        Ok(())
    }
}

impl Validatable for Category {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "categoryId" => self.category_id.as_ref().map(CategoryId::as_str).into(),
            "name" => FieldValue::Text(self.name.clone()),
            "description" => self.description.as_deref().into(),
            "isActive" => FieldValue::Bool(self.is_active),
            "createdAt" => FieldValue::Timestamp(self.created_at),
            _ => FieldValue::Missing,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;
    type Json = CategoryDto;

    fn entity_id(&self) -> Option<&Self::Id> {
        self.category_id()
    }

    fn to_json(&self) -> Self::Json {
        CategoryDto::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    const SAMPLE_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn sample_timestamp() -> NaiveDateTime {
        DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    #[test]
    fn new_applies_defaults() {
        let category = Category::new(NewCategory::new("Movie")).unwrap();

        assert!(category.category_id().is_none());
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
    }

    #[test]
    fn new_keeps_all_supplied_values() {
        let category = Category::new(NewCategory {
            category_id: Some(CategoryId::new(SAMPLE_ID).unwrap()),
            name: "Movie".into(),
            description: Some("Movie description".into()),
            is_active: Some(false),
            created_at: Some(sample_timestamp()),
        })
        .unwrap();

        assert_eq!(category.category_id().unwrap().as_str(), SAMPLE_ID);
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), sample_timestamp());
    }

    #[test]
    fn new_validates() {
        let err = Category::new(NewCategory::new("")).unwrap_err();
        assert_eq!(err.errors().get("name").unwrap(), ["name should not be empty"]);
    }

    #[test]
    fn create_assigns_fresh_ids() {
        let first = Category::create(NewCategory::new("Movie")).unwrap();
        let second = Category::create(NewCategory::new("Movie")).unwrap();

        let first_id = first.category_id().unwrap();
        assert!(CategoryId::new(first_id.as_str()).is_ok());
        assert_ne!(first_id, second.category_id().unwrap());
    }

    #[test]
    fn create_keeps_supplied_id() {
        let mut props = NewCategory::new("Movie");
        props.category_id = Some(CategoryId::new(SAMPLE_ID).unwrap());

        let category = Category::create(props).unwrap();
        assert_eq!(category.category_id().unwrap().as_str(), SAMPLE_ID);
    }

    #[test]
    fn create_rejects_long_name() {
        let err = Category::create(NewCategory::new("a".repeat(256))).unwrap_err();
        assert_eq!(
            err.errors().get("name").unwrap(),
            ["name must be shorter than or equal to 255 characters"]
        );
    }

    #[test]
    fn create_rejects_long_description() {
        let mut props = NewCategory::new("Movie");
        props.description = Some("d".repeat(256));

        let err = Category::create(props).unwrap_err();
        assert_eq!(
            err.errors().get("description").unwrap(),
            ["description must be shorter than or equal to 255 characters"]
        );
        assert!(err.errors().get("name").is_none());
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut props = NewCategory::new("a".repeat(255));
        props.description = Some("d".repeat(255));
        assert!(Category::create(props).is_ok());
    }

    #[test]
    fn change_name_keeps_other_fields() {
        let mut category = Category::create(NewCategory::new("Movie")).unwrap();
        let before = category.clone();

        category.change_name("Music").unwrap();

        assert_eq!(category.name(), "Music");
        assert_eq!(category.category_id(), before.category_id());
        assert_eq!(category.description(), before.description());
        assert_eq!(category.is_active(), before.is_active());
        assert_eq!(category.created_at(), before.created_at());
    }

    #[test]
    fn rejected_change_leaves_state_untouched() {
        let mut category = Category::create(NewCategory::new("Movie")).unwrap();
        let before = category.clone();

        let err = category.change_name("").unwrap_err();
        assert_eq!(err.errors().get("name").unwrap(), ["name should not be empty"]);
        assert_eq!(category, before);

        assert!(category.change_description("x".repeat(300)).is_err());
        assert_eq!(category, before);
    }

    #[test]
    fn change_description_accepts_empty_text() {
        let mut category = Category::create(NewCategory::new("Movie")).unwrap();
        category.change_description("").unwrap();
        assert_eq!(category.description(), Some(""));
    }

    #[test]
    fn activate_and_deactivate_are_idempotent() {
        let mut category = Category::create(NewCategory::new("Movie")).unwrap();

        category.deactivate().unwrap();
        category.deactivate().unwrap();
        assert!(!category.is_active());

        category.activate().unwrap();
        category.activate().unwrap();
        assert!(category.is_active());
    }

    #[test]
    fn exposes_fields_to_rules() {
        let category = Category::new(NewCategory::new("Movie")).unwrap();

        assert_eq!(category.field_value("categoryId"), FieldValue::Null);
        assert_eq!(category.field_value("isActive"), FieldValue::Bool(true));
        assert_eq!(category.field_value("unknown"), FieldValue::Missing);
    }

    #[test]
    fn entity_id_matches_category_id() {
        let category = Category::create(NewCategory::new("Movie")).unwrap();
        assert_eq!(category.entity_id(), category.category_id());
    }
}
