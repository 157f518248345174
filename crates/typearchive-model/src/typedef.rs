//! Structural type definitions (entities, classifications, relationships) and
//! the opaque patches that amend them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeIdentity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDefCategory {
    EntityDef,
    ClassificationDef,
    RelationshipDef,
}

impl TypeDefCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeDefCategory::EntityDef => "EntityDef",
            TypeDefCategory::ClassificationDef => "ClassificationDef",
            TypeDefCategory::RelationshipDef => "RelationshipDef",
        }
    }
}

impl fmt::Display for TypeDefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a structural type by identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefLink {
    pub guid: String,
    pub name: String,
}

impl TypeDefLink {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }

    pub fn to<T: TypeIdentity>(def: &T) -> Self {
        Self::new(def.guid(), def.name())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeCardinality {
    AtMostOne,
    #[default]
    ExactlyOne,
    AnyNumberUnordered,
    AnyNumberOrdered,
    AtLeastOneUnordered,
    AtLeastOneOrdered,
}

/// A named, typed property declared on a structural type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefAttribute {
    pub attribute_name: String,
    /// Name of the attribute type def (primitive, collection or enum).
    pub attribute_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_description: Option<String>,
    #[serde(default)]
    pub cardinality: AttributeCardinality,
    #[serde(default)]
    pub unique: bool,
}

impl TypeDefAttribute {
    pub fn new(attribute_name: impl Into<String>, attribute_type: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type: attribute_type.into(),
            attribute_description: None,
            cardinality: AttributeCardinality::AtMostOne,
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_cardinality(mut self, cardinality: AttributeCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityDef {
    pub guid: String,
    pub name: String,
    pub version: u64,
    pub version_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type: Option<TypeDefLink>,
    #[serde(default)]
    pub properties_definition: Vec<TypeDefAttribute>,
}

impl EntityDef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: 1,
            version_name: "1.0".to_string(),
            description: None,
            super_type: None,
            properties_definition: Vec::new(),
        }
    }

    pub fn with_super_type(mut self, super_type: TypeDefLink) -> Self {
        self.super_type = Some(super_type);
        self
    }

    pub fn with_property(mut self, attribute: TypeDefAttribute) -> Self {
        self.properties_definition.push(attribute);
        self
    }

    pub fn declares(&self, attribute_name: &str) -> bool {
        self.properties_definition
            .iter()
            .any(|a| a.attribute_name == attribute_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDef {
    pub guid: String,
    pub name: String,
    pub version: u64,
    pub version_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type: Option<TypeDefLink>,
    #[serde(default)]
    pub properties_definition: Vec<TypeDefAttribute>,
    /// Entity types this classification may be attached to; empty means any.
    #[serde(default)]
    pub valid_entity_defs: Vec<TypeDefLink>,
    #[serde(default)]
    pub propagatable: bool,
}

impl ClassificationDef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: 1,
            version_name: "1.0".to_string(),
            description: None,
            super_type: None,
            properties_definition: Vec::new(),
            valid_entity_defs: Vec::new(),
            propagatable: false,
        }
    }

    pub fn with_property(mut self, attribute: TypeDefAttribute) -> Self {
        self.properties_definition.push(attribute);
        self
    }

    pub fn with_valid_entity(mut self, entity_type: TypeDefLink) -> Self {
        self.valid_entity_defs.push(entity_type);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipEndCardinality {
    AtMostOne,
    #[default]
    AnyNumber,
}

/// One side of a relationship type.
///
/// `attribute_name` is the reference attribute that the entity type at the
/// *other* end exposes when traversing towards this end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEndDef {
    pub entity_type: TypeDefLink,
    pub attribute_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_description: Option<String>,
    #[serde(default)]
    pub attribute_cardinality: RelationshipEndCardinality,
}

impl RelationshipEndDef {
    pub fn new(entity_type: TypeDefLink, attribute_name: impl Into<String>) -> Self {
        Self {
            entity_type,
            attribute_name: attribute_name.into(),
            attribute_description: None,
            attribute_cardinality: RelationshipEndCardinality::AnyNumber,
        }
    }

    pub fn with_cardinality(mut self, cardinality: RelationshipEndCardinality) -> Self {
        self.attribute_cardinality = cardinality;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropagationRule {
    #[default]
    None,
    OneToTwo,
    TwoToOne,
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDef {
    pub guid: String,
    pub name: String,
    pub version: u64,
    pub version_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties_definition: Vec<TypeDefAttribute>,
    pub end_def1: RelationshipEndDef,
    pub end_def2: RelationshipEndDef,
    #[serde(default)]
    pub propagation_rule: PropagationRule,
}

impl RelationshipDef {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        end_def1: RelationshipEndDef,
        end_def2: RelationshipEndDef,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: 1,
            version_name: "1.0".to_string(),
            description: None,
            properties_definition: Vec::new(),
            end_def1,
            end_def2,
            propagation_rule: PropagationRule::None,
        }
    }

    pub fn with_property(mut self, attribute: TypeDefAttribute) -> Self {
        self.properties_definition.push(attribute);
        self
    }
}

/// Any structural type definition, in the shape the archive type store lists them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "category")]
pub enum TypeDef {
    #[serde(rename = "ENTITY_DEF")]
    Entity(EntityDef),
    #[serde(rename = "CLASSIFICATION_DEF")]
    Classification(ClassificationDef),
    #[serde(rename = "RELATIONSHIP_DEF")]
    Relationship(RelationshipDef),
}

impl TypeDef {
    pub fn category(&self) -> TypeDefCategory {
        match self {
            TypeDef::Entity(_) => TypeDefCategory::EntityDef,
            TypeDef::Classification(_) => TypeDefCategory::ClassificationDef,
            TypeDef::Relationship(_) => TypeDefCategory::RelationshipDef,
        }
    }

    pub fn properties(&self) -> &[TypeDefAttribute] {
        match self {
            TypeDef::Entity(def) => &def.properties_definition,
            TypeDef::Classification(def) => &def.properties_definition,
            TypeDef::Relationship(def) => &def.properties_definition,
        }
    }
}

/// A pre-computed amendment to a type that already exists elsewhere.
///
/// Patches are carried through the archive untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefPatch {
    pub type_def_guid: String,
    pub type_name: String,
    pub apply_to_version: u64,
    pub update_to_version: u64,
    pub new_version_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties_to_add: Vec<TypeDefAttribute>,
}

impl fmt::Display for TypeDefPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypeDefPatch{{type={}, v{}->v{}}}",
            self.type_name, self.apply_to_version, self.update_to_version
        )
    }
}

impl_identity!(EntityDef, "EntityDef");
impl_identity!(ClassificationDef, "ClassificationDef");
impl_identity!(RelationshipDef, "RelationshipDef");

impl TypeIdentity for TypeDef {
    fn guid(&self) -> &str {
        match self {
            TypeDef::Entity(def) => def.guid(),
            TypeDef::Classification(def) => def.guid(),
            TypeDef::Relationship(def) => def.guid(),
        }
    }

    fn name(&self) -> &str {
        match self {
            TypeDef::Entity(def) => def.name(),
            TypeDef::Classification(def) => def.name(),
            TypeDef::Relationship(def) => def.name(),
        }
    }
}
