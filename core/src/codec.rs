#![deny(missing_docs)]

//! # Composed Object Codec
//!
//! Every spec entity is assembled from contributor groups: an optional
//! [`Reference`], one or more structural [`FieldGroup`]s and an
//! [`Extensions`] bag. This module drives the conversion between such an
//! entity and one flat JSON object.
//!
//! - **Encode**: groups contribute in a fixed order (reference, structural
//!   groups as the entity lists them, extensions) into an [`ObjectWriter`],
//!   which rejects any key written twice.
//! - **Decode**: the flat object is split into extensions, `$ref` and the
//!   rest. Structural groups then claim their keys from an [`ObjectReader`]
//!   through their static field tables, first group first. Anything left
//!   unclaimed is an unknown field.
//!
//! Entities nest (schemas through `not`, `items`, `properties`, ...). Both
//! directions stop at [`MAX_DEPTH`] composed levels and report an error
//! rather than exhausting the stack.

mod primitives;

use crate::error::{json_kind, SpecError, SpecResult};
use crate::extensions::Extensions;
use crate::reference::Reference;
use serde_json::{Map, Value};
use std::cell::Cell;

/// Deepest nesting of composed objects accepted by one encode or decode.
///
/// The outermost entity counts as level 1.
pub const MAX_DEPTH: usize = 32;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Holds one nesting level for as long as it is alive.
struct DepthGuard;

impl DepthGuard {
    fn enter(entity: &'static str) -> SpecResult<Self> {
        DEPTH.with(|depth| {
            let next = depth.get() + 1;
            if next > MAX_DEPTH {
                tracing::debug!(entity, limit = MAX_DEPTH, "nesting limit reached");
                return Err(SpecError::MalformedJson {
                    path: String::new(),
                    detail: format!("{} nested deeper than {} levels", entity, MAX_DEPTH),
                });
            }
            depth.set(next);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// When a structural field is left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Omit {
    /// Omit when unset or holding its zero value (`""`, `false`, `[]`, `{}`).
    WhenEmpty,
    /// Omit only when unset; an explicitly empty value is emitted.
    WhenAbsent,
}

/// One row of a group's known-field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON key, exactly as OpenAPI spells it.
    pub key: &'static str,
    /// Emptiness policy on encode.
    pub omit: Omit,
}

impl Field {
    /// A field omitted when empty.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            omit: Omit::WhenEmpty,
        }
    }

    /// A field whose explicitly empty value must survive a round trip.
    pub const fn keep_empty(key: &'static str) -> Self {
        Self {
            key,
            omit: Omit::WhenAbsent,
        }
    }
}

/// Conversion of a model value into JSON.
pub trait Encode {
    /// Produces the JSON value.
    fn encode(&self) -> SpecResult<Value>;

    /// Unset values never reach the output, whatever the field policy.
    fn is_absent(&self) -> bool {
        false
    }

    /// Zero values are dropped by fields declared [`Omit::WhenEmpty`].
    fn is_empty(&self) -> bool {
        false
    }
}

/// Conversion of a JSON value into a model value.
pub trait Decode: Sized {
    /// Consumes the JSON value.
    fn decode(value: Value) -> SpecResult<Self>;
}

/// Accumulates one flat output object, refusing duplicate keys.
#[derive(Debug)]
pub struct ObjectWriter {
    entity: &'static str,
    object: Map<String, Value>,
}

impl ObjectWriter {
    /// Starts an empty object for `entity`.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            object: Map::new(),
        }
    }

    /// Writes a raw entry.
    ///
    /// # Errors
    ///
    /// `SpecError::DuplicateKey` if another group already wrote `key`.
    pub fn insert(&mut self, key: &str, value: Value) -> SpecResult<()> {
        if self.object.contains_key(key) {
            tracing::debug!(entity = self.entity, key, "duplicate output key");
            return Err(SpecError::DuplicateKey {
                entity: self.entity,
                key: key.to_string(),
            });
        }
        self.object.insert(key.to_string(), value);
        Ok(())
    }

    /// Writes a structural field, applying its omission policy.
    pub fn field<T: Encode + ?Sized>(&mut self, field: &Field, value: &T) -> SpecResult<()> {
        if value.is_absent() || (field.omit == Omit::WhenEmpty && value.is_empty()) {
            return Ok(());
        }
        let encoded = value.encode().map_err(|e| e.at(field.key))?;
        self.insert(field.key, encoded)
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.object.len()
    }

    /// Returns true when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    /// Returns the finished object.
    pub fn finish(self) -> Map<String, Value> {
        self.object
    }
}

/// Remaining keys of a flat input object, waiting to be claimed by groups.
#[derive(Debug)]
pub struct ObjectReader {
    entity: &'static str,
    object: Map<String, Value>,
}

impl ObjectReader {
    /// Wraps the structural part of a flat object.
    pub fn new(entity: &'static str, object: Map<String, Value>) -> Self {
        Self { entity, object }
    }

    /// Entity being decoded.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Moves every key listed in `fields` into a dedicated source.
    ///
    /// Keys already claimed by an earlier group are gone, so the first group
    /// to list a key wins it.
    pub fn claim(&mut self, fields: &'static [Field]) -> FieldSource {
        let mut claimed = Map::new();
        for field in fields {
            if let Some(value) = self.object.remove(field.key) {
                claimed.insert(field.key.to_string(), value);
            }
        }
        FieldSource {
            entity: self.entity,
            fields,
            object: claimed,
        }
    }

    /// Claims and decodes one structural group.
    pub fn group<G: FieldGroup>(&mut self) -> SpecResult<G> {
        let mut source = self.claim(G::FIELDS);
        G::read(&mut source)
    }

    /// Removes and returns, in document order, every entry whose key matches `predicate`.
    ///
    /// Used for dynamic key classes that no static table can list.
    pub fn drain_matching(&mut self, predicate: impl Fn(&str) -> bool) -> Vec<(String, Value)> {
        let mut drained = Vec::new();
        let mut kept = Map::new();
        for (key, value) in std::mem::take(&mut self.object) {
            if predicate(&key) {
                drained.push((key, value));
            } else {
                kept.insert(key, value);
            }
        }
        self.object = kept;
        drained
    }

    /// Fails on the first key no group claimed.
    pub fn finish(self) -> SpecResult<()> {
        match self.object.into_iter().next() {
            None => Ok(()),
            Some((key, _)) => {
                tracing::debug!(entity = self.entity, key = %key, "rejecting unknown field");
                Err(SpecError::UnknownField {
                    entity: self.entity,
                    key,
                })
            }
        }
    }
}

/// Keys claimed by one group.
#[derive(Debug)]
pub struct FieldSource {
    entity: &'static str,
    fields: &'static [Field],
    object: Map<String, Value>,
}

impl FieldSource {
    /// Decodes `field` if present.
    pub fn optional<T: Decode>(&mut self, field: &Field) -> SpecResult<Option<T>> {
        debug_assert!(
            self.fields.iter().any(|f| f.key == field.key),
            "{} reads '{}' without listing it in its field table",
            self.entity,
            field.key
        );
        match self.object.remove(field.key) {
            None => Ok(None),
            Some(value) => T::decode(value).map(Some).map_err(|e| e.at(field.key)),
        }
    }

    /// Decodes `field`, falling back to the zero value when absent.
    pub fn value<T: Decode + Default>(&mut self, field: &Field) -> SpecResult<T> {
        Ok(self.optional(field)?.unwrap_or_default())
    }
}

/// A group of structural fields sharing one static key table.
pub trait FieldGroup: Sized {
    /// Known keys, in output order.
    const FIELDS: &'static [Field];

    /// Contributes this group's entries.
    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()>;

    /// Decodes this group from the keys it claimed.
    fn read(source: &mut FieldSource) -> SpecResult<Self>;
}

/// Non-structural parts split off before the structural groups are read.
#[derive(Debug, Default)]
pub struct Parts {
    /// `$ref`, always unset for entities that do not support it.
    pub reference: Reference,
    /// Vendor extensions.
    pub extensions: Extensions,
}

/// An entity encoded as one flat JSON object.
pub trait Composed: Sized {
    /// Name used in errors and logs.
    const ENTITY: &'static str;

    /// Whether `$ref` is recognised; otherwise it is an unknown field.
    const REFERENCE: bool = false;

    /// The reference cell, for entities that have one.
    fn reference(&self) -> Option<&Reference> {
        None
    }

    /// The extension bag.
    fn extensions(&self) -> &Extensions;

    /// Writes the structural groups, in order.
    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()>;

    /// Reads the structural groups, in order.
    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self>;

    /// Minimum-content rule, checked after decoding and before encoding.
    fn check(&self) -> SpecResult<()> {
        Ok(())
    }

    /// Decodes from an already parsed JSON value.
    fn from_json_value(value: Value) -> SpecResult<Self> {
        decode_composed(value)
    }

    /// Parses and decodes a JSON document.
    fn from_json_str(text: &str) -> SpecResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        decode_composed(value)
    }

    /// Parses and decodes a YAML document.
    #[cfg(feature = "yaml")]
    fn from_yaml_str(text: &str) -> SpecResult<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        decode_composed(value)
    }

    /// Encodes to a JSON value.
    fn to_json_value(&self) -> SpecResult<Value> {
        encode_composed(self).map(Value::Object)
    }

    /// Encodes to compact JSON text.
    fn to_json_string(&self) -> SpecResult<String> {
        Ok(serde_json::to_string(&self.to_json_value()?)?)
    }

    /// Encodes to indented JSON text.
    fn to_json_string_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value()?)?)
    }
}

/// Flattens `entity` into one object.
pub fn encode_composed<T: Composed>(entity: &T) -> SpecResult<Map<String, Value>> {
    let _level = DepthGuard::enter(T::ENTITY)?;
    entity.check()?;
    let mut out = ObjectWriter::new(T::ENTITY);
    if let Some(reference) = entity.reference() {
        reference.write_to(&mut out)?;
    }
    entity.write_groups(&mut out)?;
    for (key, value) in entity.extensions().iter() {
        out.insert(key, value.clone())?;
    }
    tracing::trace!(entity = T::ENTITY, keys = out.len(), "encoded object");
    Ok(out.finish())
}

/// Rebuilds an entity from one flat object.
pub fn decode_composed<T: Composed>(value: Value) -> SpecResult<T> {
    let _level = DepthGuard::enter(T::ENTITY)?;
    let object = expect_object(value)?;
    tracing::trace!(entity = T::ENTITY, keys = object.len(), "decoding object");

    let (extensions, mut rest) = Extensions::split_from(object);
    let reference = if T::REFERENCE {
        Reference::take_from(&mut rest, T::ENTITY)?
    } else {
        Reference::default()
    };

    let mut input = ObjectReader::new(T::ENTITY, rest);
    let entity = T::read_groups(
        Parts {
            reference,
            extensions,
        },
        &mut input,
    )?;
    input.finish()?;
    entity.check()?;
    Ok(entity)
}

/// Unwraps a JSON object or reports the kind found instead.
pub(crate) fn expect_object(value: Value) -> SpecResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SpecError::MalformedJson {
            path: String::new(),
            detail: format!("expected object, found {}", json_kind(&other)),
        }),
    }
}

/// Implements [`Encode`], [`Decode`] and the serde traits for [`Composed`] entities.
macro_rules! composed_codec {
    ($($entity:ty),+ $(,)?) => {$(
        impl $crate::codec::Encode for $entity {
            fn encode(&self) -> $crate::error::SpecResult<serde_json::Value> {
                $crate::codec::encode_composed(self).map(serde_json::Value::Object)
            }
        }

        impl $crate::codec::Decode for $entity {
            fn decode(value: serde_json::Value) -> $crate::error::SpecResult<Self> {
                $crate::codec::decode_composed(value)
            }
        }

        impl serde::Serialize for $entity {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let object = $crate::codec::encode_composed(self)
                    .map_err(<S::Error as serde::ser::Error>::custom)?;
                serde::Serialize::serialize(&object, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $entity {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::decode_composed(value)
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    )+};
}

pub(crate) use composed_codec;
