//! Attribute type definitions: the value types a structural property can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeIdentity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeTypeDefCategory {
    Primitive,
    Collection,
    EnumDef,
}

impl AttributeTypeDefCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AttributeTypeDefCategory::Primitive => "PrimitiveDef",
            AttributeTypeDefCategory::Collection => "CollectionDef",
            AttributeTypeDefCategory::EnumDef => "EnumDef",
        }
    }
}

impl fmt::Display for AttributeTypeDefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimitiveDefCategory {
    Unknown,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    String,
    Date,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionDefCategory {
    Map,
    Array,
    Struct,
}

impl CollectionDefCategory {
    /// Number of type arguments a collection of this shape takes.
    ///
    /// `Struct` is variadic; its count comes from the argument list.
    pub fn fixed_argument_count(&self) -> Option<usize> {
        match self {
            CollectionDefCategory::Map => Some(2),
            CollectionDefCategory::Array => Some(1),
            CollectionDefCategory::Struct => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveDef {
    pub guid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub primitive_def_category: PrimitiveDefCategory,
}

impl PrimitiveDef {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        category: PrimitiveDefCategory,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            description: None,
            primitive_def_category: category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A parameterized collection, e.g. `map<string,int>`.
///
/// Argument types are referenced by attribute type name; the archive is
/// resolved by name, so primitives must be emitted ahead of collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDef {
    pub guid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub collection_def_category: CollectionDefCategory,
    #[serde(default)]
    pub argument_types: Vec<String>,
}

impl CollectionDef {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        category: CollectionDefCategory,
        argument_types: Vec<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            description: None,
            collection_def_category: category,
            argument_types,
        }
    }

    pub fn argument_count(&self) -> usize {
        self.argument_types.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumElementDef {
    pub ordinal: u32,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub guid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub element_defs: Vec<EnumElementDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<u32>,
}

impl EnumDef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            description: None,
            element_defs: Vec::new(),
            default_value: None,
        }
    }

    /// Append an element with the next ordinal.
    pub fn with_element(mut self, value: impl Into<String>) -> Self {
        let ordinal = self.element_defs.len() as u32;
        self.element_defs.push(EnumElementDef {
            ordinal,
            value: value.into(),
            description: None,
        });
        self
    }

    pub fn with_default_value(mut self, ordinal: u32) -> Self {
        self.default_value = Some(ordinal);
        self
    }
}

/// Any attribute type definition, in the shape the archive type store lists them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "category")]
pub enum AttributeTypeDef {
    #[serde(rename = "PRIMITIVE")]
    Primitive(PrimitiveDef),
    #[serde(rename = "COLLECTION")]
    Collection(CollectionDef),
    #[serde(rename = "ENUM_DEF")]
    Enum(EnumDef),
}

impl AttributeTypeDef {
    pub fn category(&self) -> AttributeTypeDefCategory {
        match self {
            AttributeTypeDef::Primitive(_) => AttributeTypeDefCategory::Primitive,
            AttributeTypeDef::Collection(_) => AttributeTypeDefCategory::Collection,
            AttributeTypeDef::Enum(_) => AttributeTypeDefCategory::EnumDef,
        }
    }
}

impl_identity!(PrimitiveDef, "PrimitiveDef");
impl_identity!(CollectionDef, "CollectionDef");
impl_identity!(EnumDef, "EnumDef");

impl TypeIdentity for AttributeTypeDef {
    fn guid(&self) -> &str {
        match self {
            AttributeTypeDef::Primitive(def) => def.guid(),
            AttributeTypeDef::Collection(def) => def.guid(),
            AttributeTypeDef::Enum(def) => def.guid(),
        }
    }

    fn name(&self) -> &str {
        match self {
            AttributeTypeDef::Primitive(def) => def.name(),
            AttributeTypeDef::Collection(def) => def.name(),
            AttributeTypeDef::Enum(def) => def.name(),
        }
    }
}

impl fmt::Display for AttributeTypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeTypeDef::Primitive(def) => fmt::Display::fmt(def, f),
            AttributeTypeDef::Collection(def) => fmt::Display::fmt(def, f),
            AttributeTypeDef::Enum(def) => fmt::Display::fmt(def, f),
        }
    }
}
