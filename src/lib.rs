//! Core library exports for the catalog service.
//!
//! This crate exposes the catalog domain model (categories, identifiers and
//! declarative validation) together with the forms, DTOs and service layer
//! used by the catalog importer.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "cli")]
pub mod models;
#[cfg(feature = "data")]
pub mod services;
