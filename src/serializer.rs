//! Serializers that turn records into ordered JSON objects.

use std::collections::BTreeMap;
use std::{fmt, mem, str};

use serde_json;

use common::{is_compactible, type_name, Number, Object, Value};
use error::SerializeError;
use failure::Error;
use field::{Field, FieldKind};
use record::{Attribute, Record};

// Bounds of `i64` as floats. The upper one is exclusive.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// An error used when parsing `Mode`.
#[derive(Debug, Fail)]
#[fail(display = "invalid serializer mode")]
pub struct ParseModeError;

/// Controls which fields make it into the output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every readable field is emitted, including nulls.
    Plain,
    /// Fields that are skipped, null or empty lists are left out.
    Compact,
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::Plain
    }
}

impl str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(string: &str) -> Result<Mode, Self::Err> {
        Ok(match string {
            "plain" => Mode::Plain,
            "compact" | "non_null" => Mode::Compact,
            _ => return Err(ParseModeError),
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mode::Plain => write!(f, "plain"),
            Mode::Compact => write!(f, "compact"),
        }
    }
}

impl_str_serde!(Mode);

/// Request scoped information available to serializers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    base_url: Option<String>,
}

impl Context {
    /// Creates a context that renders root-relative hyperlinks.
    pub fn new() -> Context {
        Context::default()
    }

    /// Creates a context that renders absolute hyperlinks below `base_url`.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Context {
        Context {
            base_url: Some(base_url.into()),
        }
    }

    /// The base URL for hyperlinks, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_ref().map(String::as_str)
    }

    /// Builds the hyperlink to a record under `route`.
    pub fn link(&self, route: &str, pk: &Value) -> String {
        let pk = match *pk {
            Value::String(ref s) => s.clone(),
            ref other => other.to_string(),
        };

        let base = self.base_url().map_or("", |b| b.trim_end_matches('/'));
        format!("{}/{}/{}/", base, route, pk)
    }
}

/// An ordered list of field descriptors bound to one entity.
#[derive(Clone, Debug)]
pub struct Serializer {
    entity: &'static str,
    mode: Mode,
    fields: Vec<Field>,
}

impl Serializer {
    /// Creates an empty serializer in plain mode.
    pub fn new(entity: &'static str) -> Serializer {
        Serializer {
            entity,
            mode: Mode::Plain,
            fields: Vec::new(),
        }
    }

    /// Creates an empty serializer in compact mode.
    pub fn compact(entity: &'static str) -> Serializer {
        Serializer::new(entity).with_mode(Mode::Compact)
    }

    /// Changes the mode of this serializer.
    pub fn with_mode(mut self, mode: Mode) -> Serializer {
        self.mode = mode;
        self
    }

    /// Applies per-entity mode overrides to this serializer and every nested one.
    pub fn with_modes(mut self, modes: &BTreeMap<String, Mode>) -> Serializer {
        if let Some(&mode) = modes.get(self.entity) {
            self.mode = mode;
        }
        for field in self.fields.iter_mut() {
            if let FieldKind::Nested(ref mut nested) = *field.kind_mut() {
                let inner = mem::replace(&mut **nested, Serializer::new(""));
                **nested = inner.with_modes(modes);
            }
        }
        self
    }

    /// Declares a field.
    ///
    /// Re-declaring a name replaces the earlier field but keeps its position.
    pub fn field(mut self, field: Field) -> Serializer {
        match self.fields.iter().position(|f| f.name() == field.name()) {
            Some(index) => self.fields[index] = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Declares a plain value field for each of the given names.
    pub fn values(self, names: &[&'static str]) -> Serializer {
        names
            .iter()
            .fold(self, |serializer, name| serializer.field(Field::value(*name)))
    }

    /// Marks the named fields as read-only.
    pub fn read_only(mut self, names: &[&'static str]) -> Serializer {
        for field in self.fields.iter_mut() {
            if names.contains(&field.name()) {
                *field = field.clone().read_only();
            }
        }
        self
    }

    /// The entity this serializer is configured for.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// The mode of this serializer.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// All declared fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a declared field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The names of all fields that appear in output.
    pub fn readable_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_readable())
            .map(Field::name)
            .collect()
    }

    /// The names of all read-only fields.
    pub fn read_only_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_read_only())
            .map(Field::name)
            .collect()
    }

    /// Serializes a record into an ordered object.
    pub fn to_representation(
        &self,
        record: &dyn Record,
        context: &Context,
    ) -> Result<Object, SerializeError> {
        self.represent(record, context, self.mode)
    }

    /// Serializes a sequence of records into an array of objects.
    pub fn serialize_many<'a, I, R>(
        &self,
        records: I,
        context: &Context,
    ) -> Result<Vec<Value>, SerializeError>
    where
        I: IntoIterator<Item = &'a R>,
        R: Record + 'a,
    {
        records
            .into_iter()
            .map(|record| self.to_representation(record, context).map(Value::Object))
            .collect()
    }

    /// Serializes a record into a JSON string.
    pub fn to_json(&self, record: &dyn Record, context: &Context) -> Result<String, Error> {
        let object = self.to_representation(record, context)?;
        Ok(serde_json::to_string(&object)?)
    }

    /// Serializes a record into a pretty JSON string.
    pub fn to_json_pretty(&self, record: &dyn Record, context: &Context) -> Result<String, Error> {
        let object = self.to_representation(record, context)?;
        Ok(serde_json::to_string_pretty(&object)?)
    }

    /// Walks the field list. A nested serializer compacts when it or any enclosing
    /// serializer is compact.
    fn represent(
        &self,
        record: &dyn Record,
        context: &Context,
        mode: Mode,
    ) -> Result<Object, SerializeError> {
        if record.entity() != self.entity {
            debug!(
                "{} serializer used on a {} record",
                self.entity,
                record.entity()
            );
            return Err(SerializeError::EntityMismatch {
                expected: self.entity,
                found: record.entity(),
            });
        }

        let mut rv = Object::new();

        for field in self.fields.iter().filter(|f| f.is_readable()) {
            let attribute = match self.fetch(record, field)? {
                Attribute::Skip if mode == Mode::Compact => {
                    trace!("{}.{}: skipped by record", self.entity, field.name());
                    continue;
                }
                Attribute::Skip => Attribute::Value(Value::Null),
                attribute => attribute,
            };

            let value = self.convert(record, field, attribute, context, mode)?;
            if mode == Mode::Compact && is_compactible(&value) {
                trace!("{}.{}: omitted empty value", self.entity, field.name());
                continue;
            }

            rv.insert(field.name().to_string(), value);
        }

        Ok(rv)
    }

    /// Follows the field's source path and returns the final attribute.
    ///
    /// An unset relation along the path resolves to null.
    fn fetch<'a>(
        &self,
        record: &'a dyn Record,
        field: &Field,
    ) -> Result<Attribute<'a>, SerializeError> {
        let (last, parents) = match field.source_path().split_last() {
            Some(split) => split,
            None => return Ok(Attribute::One(Some(record))),
        };

        let mut current = record;
        for segment in parents {
            match self.lookup(current, segment, field)? {
                Attribute::One(Some(next)) => current = next,
                Attribute::One(None) | Attribute::Value(Value::Null) => {
                    return Ok(Attribute::Value(Value::Null))
                }
                Attribute::Skip => return Ok(Attribute::Skip),
                Attribute::Value(_) | Attribute::Many(_) => {
                    debug!(
                        "{}.{}: cannot traverse {}.{}",
                        self.entity,
                        field.name(),
                        current.entity(),
                        segment
                    );
                    return Err(SerializeError::NotARelation {
                        serializer: self.entity,
                        field: field.name(),
                        entity: current.entity(),
                        attribute: segment.to_string(),
                    });
                }
            }
        }

        self.lookup(current, last, field)
    }

    fn lookup<'a>(
        &self,
        record: &'a dyn Record,
        name: &str,
        field: &Field,
    ) -> Result<Attribute<'a>, SerializeError> {
        match record.attribute(name) {
            Ok(Some(attribute)) => Ok(attribute),
            Ok(None) => {
                debug!(
                    "{}.{}: {} has no attribute {}",
                    self.entity,
                    field.name(),
                    record.entity(),
                    name
                );
                Err(SerializeError::UnknownAttribute {
                    serializer: self.entity,
                    field: field.name(),
                    entity: record.entity(),
                    attribute: name.to_string(),
                })
            }
            Err(err) => Err(SerializeError::Fetch {
                serializer: self.entity,
                field: field.name(),
                entity: record.entity(),
                attribute: name.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn convert(
        &self,
        record: &dyn Record,
        field: &Field,
        attribute: Attribute,
        context: &Context,
        mode: Mode,
    ) -> Result<Value, SerializeError> {
        match *field.kind() {
            FieldKind::Identity(route) => Ok(match record.pk() {
                Value::Null => Value::Null,
                pk => Value::String(context.link(route, &pk)),
            }),
            FieldKind::Value => Ok(match attribute {
                Attribute::Value(value) => value,
                Attribute::One(related) => related.map_or(Value::Null, |r| r.pk()),
                Attribute::Many(related) => Value::Array(related.iter().map(|r| r.pk()).collect()),
                Attribute::Skip => Value::Null,
            }),
            FieldKind::Integer => match attribute {
                Attribute::Value(value) => self.integer(field, value),
                other => Err(self.invalid(field, "an integer", format!("{:?}", other))),
            },
            FieldKind::Link(route) => Ok(match attribute {
                Attribute::Value(Value::Null) | Attribute::One(None) | Attribute::Skip => {
                    Value::Null
                }
                Attribute::Value(pk) => Value::String(context.link(route, &pk)),
                Attribute::One(Some(related)) => Value::String(context.link(route, &related.pk())),
                Attribute::Many(related) => Value::Array(
                    related
                        .iter()
                        .map(|r| Value::String(context.link(route, &r.pk())))
                        .collect(),
                ),
            }),
            FieldKind::Nested(ref nested) => {
                let mode = if nested.mode() == Mode::Compact {
                    Mode::Compact
                } else {
                    mode
                };
                match attribute {
                    Attribute::Value(Value::Null) | Attribute::One(None) | Attribute::Skip => {
                        Ok(Value::Null)
                    }
                    Attribute::One(Some(related)) => nested
                        .represent(related, context, mode)
                        .map(Value::Object),
                    Attribute::Many(related) => related
                        .iter()
                        .map(|r| nested.represent(*r, context, mode).map(Value::Object))
                        .collect::<Result<Vec<_>, _>>()
                        .map(Value::Array),
                    Attribute::Value(value) => {
                        Err(self.invalid(field, "a related record", type_name(&value).to_string()))
                    }
                }
            }
        }
    }

    /// Coerces a scalar into an integer. Floats are truncated toward zero and must
    /// fit an `i64`.
    fn integer(&self, field: &Field, value: Value) -> Result<Value, SerializeError> {
        let rv = match value {
            Value::Null => return Ok(Value::Null),
            Value::Number(ref n) if n.is_i64() || n.is_u64() => return Ok(value.clone()),
            Value::Number(ref n) => n
                .as_f64()
                .map(f64::trunc)
                .filter(|f| *f >= I64_LOWER && *f < I64_UPPER)
                .map(|f| Value::from(f as i64)),
            Value::String(ref s) => s.trim().parse::<i64>().ok().map(Value::from),
            Value::Bool(b) => Some(Value::Number(Number::from(b as i64))),
            _ => None,
        };

        rv.ok_or_else(|| self.invalid(field, "an integer", type_name(&value).to_string()))
    }

    fn invalid(&self, field: &Field, expected: &'static str, found: String) -> SerializeError {
        SerializeError::InvalidValue {
            serializer: self.entity,
            field: field.name(),
            expected,
            found,
        }
    }
}
