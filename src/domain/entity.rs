use serde::Serialize;

use crate::domain::value_object::ValueObject;

/// Domain object with an identity and mutable state.
pub trait Entity {
    /// Identity value; absent until assigned.
    type Id: ValueObject;
    /// Plain structural view handed to serialization boundaries.
    type Json: Serialize;

    fn entity_id(&self) -> Option<&Self::Id>;

    fn to_json(&self) -> Self::Json;
}
