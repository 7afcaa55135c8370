pub mod category;
pub mod entity;
pub mod types;
pub mod validation;
pub mod value_object;
