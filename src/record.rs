//! The interface serializers use to read persisted records.

use std::fmt;

use failure::Error;

use common::{IntoValue, Value};

/// An attribute fetched from a record.
pub enum Attribute<'a> {
    /// A scalar value. `Value::Null` is a present attribute holding null.
    Value(Value),
    /// A to-one relation, `None` if the relation is unset.
    One(Option<&'a dyn Record>),
    /// A to-many relation.
    Many(Vec<&'a dyn Record>),
    /// The record has no value for this attribute and the field should be left out.
    ///
    /// This is distinct from a null value: compact serializers omit the field, plain
    /// serializers render it as null.
    Skip,
}

impl<'a> Attribute<'a> {
    /// Creates a scalar attribute.
    pub fn value<T: IntoValue>(value: T) -> Self {
        Attribute::Value(value.into_value())
    }

    /// Creates a to-one relation attribute from an optional related record.
    pub fn one<R: Record>(related: Option<&'a R>) -> Self {
        Attribute::One(related.map(|r| r as &dyn Record))
    }

    /// Creates a to-many relation attribute from a slice of related records.
    pub fn many<R: Record>(related: &'a [R]) -> Self {
        Attribute::Many(related.iter().map(|r| r as &dyn Record).collect())
    }

    /// Indicates whether this attribute signals that the field should be skipped.
    pub fn is_skip(&self) -> bool {
        match *self {
            Attribute::Skip => true,
            _ => false,
        }
    }
}

impl<'a> fmt::Debug for Attribute<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Attribute::Value(ref value) => f.debug_tuple("Value").field(value).finish(),
            Attribute::One(Some(record)) => write!(f, "One({}:{})", record.entity(), record.pk()),
            Attribute::One(None) => write!(f, "One(None)"),
            Attribute::Many(ref records) => write!(f, "Many({} records)", records.len()),
            Attribute::Skip => write!(f, "Skip"),
        }
    }
}

/// A persisted domain entity that can be read by serializers.
///
/// Implementations map attribute names to values explicitly; there is no discovery of
/// attributes at runtime.
pub trait Record {
    /// The entity name of this record, e.g. `"call"`.
    fn entity(&self) -> &'static str;

    /// The primary key, used for hyperlinks and bare relation references.
    fn pk(&self) -> Value;

    /// Fetches a named attribute.
    ///
    /// Returns `Ok(None)` if the entity does not define an attribute with this name. Errors are
    /// reserved for failures of the underlying storage, such as a lazily loaded relation that
    /// could not be read.
    fn attribute(&self, name: &str) -> Result<Option<Attribute<'_>>, Error>;
}
