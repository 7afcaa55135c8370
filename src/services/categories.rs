use std::io::Read;

use serde::Serialize;

use crate::domain::category::{Category, NewCategory};
use crate::domain::entity::Entity;
use crate::domain::validation::FieldErrors;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::CreateCategoryForm;

use super::{ServiceError, ServiceResult};

/// Row-level import error used for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportRowError {
    pub row_number: usize,
    pub name: Option<String>,
    pub message: String,
    /// Field messages when the row failed validation; empty otherwise.
    pub errors: FieldErrors,
}

/// Aggregated import outcome report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub total_rows: usize,
    pub created: Vec<CategoryDto>,
    pub errors: Vec<ImportRowError>,
}

impl ImportReport {
    pub fn with_total(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    pub fn push_error(&mut self, row_number: usize, name: Option<String>, error: ServiceError) {
        let errors = match &error {
            ServiceError::Validation(errors) => errors.clone(),
            _ => FieldErrors::default(),
        };
        self.errors.push(ImportRowError {
            row_number,
            name,
            message: error.to_string(),
            errors,
        });
    }

    pub fn skipped(&self) -> usize {
        self.errors.len()
    }
}

/// Validates the form and creates a category with a fresh identity.
pub fn create_category(form: CreateCategoryForm) -> ServiceResult<CategoryDto> {
    let props = NewCategory::try_from(form).map_err(|e| {
        log::warn!("Invalid category input: {e}");
        ServiceError::from(e)
    })?;

    let category = Category::create(props).map_err(|e| {
        log::warn!("Failed to create category: {e}");
        ServiceError::from(e)
    })?;

    Ok(category.to_json())
}

/// Creates one category per element of a JSON array read from `reader`.
///
/// Rows are independent: a rejected row is recorded in the report and the
/// import continues.
pub fn import_categories<R: Read>(reader: R) -> ServiceResult<ImportReport> {
    let rows: Vec<serde_json::Value> = serde_json::from_reader(reader).map_err(|e| {
        log::error!("Failed to read category import document: {e}");
        ServiceError::Malformed(e.to_string())
    })?;

    let mut report = ImportReport::with_total(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let row_number = idx + 1;
        let form = match serde_json::from_value::<CreateCategoryForm>(row) {
            Ok(form) => form,
            Err(e) => {
                report.push_error(row_number, None, ServiceError::Malformed(e.to_string()));
                continue;
            }
        };

        let name = form.name_hint().map(str::to_string);
        match create_category(form) {
            Ok(category) => report.created.push(category),
            Err(e) => report.push_error(row_number, name, e),
        }
    }

    log::info!(
        "Imported {} of {} categories",
        report.created.len(),
        report.total_rows
    );
    Ok(report)
}
