//! Errors raised while serializing records.

/// An error that prevents a record from being serialized.
///
/// None of these are recoverable at this layer. Configuration errors indicate a field list that
/// does not match the entity it is registered for and surface on first use.
#[derive(Debug, Fail)]
pub enum SerializeError {
    /// The serializer was handed a record of a different entity.
    #[fail(display = "{} serializer cannot represent a {} record", expected, found)]
    EntityMismatch {
        /// The entity the serializer is configured for.
        expected: &'static str,
        /// The entity of the record.
        found: &'static str,
    },

    /// A field's source names an attribute the record does not define.
    #[fail(
        display = "field '{}' of {} serializer: {} has no attribute '{}'",
        field,
        serializer,
        entity,
        attribute
    )]
    UnknownAttribute {
        /// The serializer owning the field.
        serializer: &'static str,
        /// The output name of the field.
        field: &'static str,
        /// The entity that was asked for the attribute.
        entity: &'static str,
        /// The attribute that could not be found.
        attribute: String,
    },

    /// A dotted source path continues past an attribute that is not a to-one relation.
    #[fail(
        display = "field '{}' of {} serializer: '{}' on {} is not a relation",
        field,
        serializer,
        attribute,
        entity
    )]
    NotARelation {
        /// The serializer owning the field.
        serializer: &'static str,
        /// The output name of the field.
        field: &'static str,
        /// The entity holding the attribute.
        entity: &'static str,
        /// The attribute that was traversed.
        attribute: String,
    },

    /// The fetched attribute cannot be converted by the field.
    #[fail(
        display = "field '{}' of {} serializer: expected {}, found {}",
        field,
        serializer,
        expected,
        found
    )]
    InvalidValue {
        /// The serializer owning the field.
        serializer: &'static str,
        /// The output name of the field.
        field: &'static str,
        /// What the field can convert.
        expected: &'static str,
        /// What it was given.
        found: String,
    },

    /// The record failed to produce an attribute.
    #[fail(
        display = "field '{}' of {} serializer: failed to fetch '{}' from {}: {}",
        field,
        serializer,
        attribute,
        entity,
        message
    )]
    Fetch {
        /// The serializer owning the field.
        serializer: &'static str,
        /// The output name of the field.
        field: &'static str,
        /// The entity that failed.
        entity: &'static str,
        /// The attribute being fetched.
        attribute: String,
        /// The underlying failure.
        message: String,
    },
}

impl SerializeError {
    /// Indicates a mismatch between a serializer's field list and the records it is used on.
    pub fn is_configuration_error(&self) -> bool {
        match *self {
            SerializeError::EntityMismatch { .. }
            | SerializeError::UnknownAttribute { .. }
            | SerializeError::NotARelation { .. } => true,
            SerializeError::InvalidValue { .. } | SerializeError::Fetch { .. } => false,
        }
    }
}
