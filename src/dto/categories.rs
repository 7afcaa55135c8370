use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Plain snapshot of a [`Category`] for serialization boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            category_id: value.category_id().map(|id| id.as_str().to_string()),
            name: value.name().to_string(),
            description: value.description().map(str::to_string),
            is_active: value.is_active(),
            created_at: value.created_at(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::entity::Entity;
    use serde_json::json;

    #[test]
    fn snapshot_of_new_category() {
        let category = Category::new(NewCategory::new("Movie")).unwrap();

        let json = category.to_json();
        assert_eq!(
            json,
            CategoryDto {
                category_id: None,
                name: "Movie".into(),
                description: None,
                is_active: true,
                created_at: category.created_at(),
            }
        );
    }

    #[test]
    fn serializes_with_camel_case_and_nulls() {
        let category = Category::new(NewCategory::new("Movie")).unwrap();
        let value = serde_json::to_value(category.to_json()).unwrap();

        assert_eq!(value["categoryId"], json!(null));
        assert_eq!(value["name"], json!("Movie"));
        assert_eq!(value["description"], json!(null));
        assert_eq!(value["isActive"], json!(true));
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn snapshot_is_detached_from_entity() {
        let mut category = Category::create(NewCategory::new("Movie")).unwrap();
        let snapshot = category.to_json();

        category.change_name("Music").unwrap();

        assert_eq!(snapshot.name, "Movie");
        assert_eq!(
            snapshot.category_id.as_deref(),
            category.category_id().map(|id| id.as_str())
        );
    }
}
