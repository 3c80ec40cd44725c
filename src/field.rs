//! Field descriptors.

use serializer::Serializer;

/// Whether a field is read from records, written from requests, or both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Emitted in output and accepted on input.
    ReadWrite,
    /// Emitted in output only.
    ReadOnly,
    /// Accepted on input only; never emitted.
    WriteOnly,
}

impl Default for Access {
    fn default() -> Access {
        Access::ReadWrite
    }
}

/// How a fetched attribute is converted into a JSON value.
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// Scalars pass through; relations render as the related primary key.
    Value,
    /// Coerces the attribute into an integer.
    Integer,
    /// Expands relations inline with a nested serializer.
    Nested(Box<Serializer>),
    /// Renders relations as hyperlinks to the given route.
    Link(&'static str),
    /// Renders a hyperlink to the record itself under the given route.
    Identity(&'static str),
}

/// A named binding of an output key to an attribute and a conversion.
#[derive(Clone, Debug)]
pub struct Field {
    name: &'static str,
    source: Vec<&'static str>,
    access: Access,
    kind: FieldKind,
}

impl Field {
    fn new(name: &'static str, kind: FieldKind) -> Field {
        Field {
            name,
            source: vec![name],
            access: Access::default(),
            kind,
        }
    }

    /// A field emitting the attribute of the same name.
    pub fn value(name: &'static str) -> Field {
        Field::new(name, FieldKind::Value)
    }

    /// A field coercing the attribute of the same name into an integer.
    pub fn integer(name: &'static str) -> Field {
        Field::new(name, FieldKind::Integer)
    }

    /// A relation field expanded with the given serializer.
    pub fn nested(name: &'static str, serializer: Serializer) -> Field {
        Field::new(name, FieldKind::Nested(Box::new(serializer)))
    }

    /// A relation field rendered as hyperlinks to `route`.
    pub fn link(name: &'static str, route: &'static str) -> Field {
        Field::new(name, FieldKind::Link(route))
    }

    /// A hyperlink to the serialized record itself.
    ///
    /// Identity fields do not read any attribute and are always read-only.
    pub fn identity(name: &'static str, route: &'static str) -> Field {
        Field {
            name,
            source: Vec::new(),
            access: Access::ReadOnly,
            kind: FieldKind::Identity(route),
        }
    }

    /// Reads the field from a different attribute.
    ///
    /// Dotted paths such as `"city.descr"` follow to-one relations.
    pub fn source(mut self, path: &'static str) -> Field {
        self.source = path.split('.').collect();
        self
    }

    /// Marks the field as read-only.
    pub fn read_only(mut self) -> Field {
        self.access = Access::ReadOnly;
        self
    }

    /// Marks the field as write-only, excluding it from all output.
    pub fn write_only(mut self) -> Field {
        self.access = Access::WriteOnly;
        self
    }

    /// The output key of this field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The attribute path this field reads from.
    pub fn source_path(&self) -> &[&'static str] {
        &self.source
    }

    /// The access mode of this field.
    pub fn access(&self) -> Access {
        self.access
    }

    /// The conversion applied by this field.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut FieldKind {
        &mut self.kind
    }

    /// Indicates whether this field appears in output.
    pub fn is_readable(&self) -> bool {
        self.access != Access::WriteOnly
    }

    /// Indicates whether this field is excluded from input.
    pub fn is_read_only(&self) -> bool {
        self.access == Access::ReadOnly
    }
}
