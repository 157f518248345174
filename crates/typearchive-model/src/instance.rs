//! Seed instance data: entities, their classifications, and relationships.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::typedef::TypeDefCategory;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Draft,
    Proposed,
    Approved,
    #[default]
    Active,
    Deprecated,
    Deleted,
}

/// The type an instance conforms to, copied from its registered definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct InstanceType {
    pub type_def_guid: String,
    pub type_def_name: String,
    pub type_def_category: TypeDefCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PrimitivePropertyValue {
    String(String),
    Int(i64),
    Boolean(bool),
    Float(f64),
    /// Milliseconds since the Unix epoch.
    Date(i64),
}

impl From<&str> for PrimitivePropertyValue {
    fn from(value: &str) -> Self {
        PrimitivePropertyValue::String(value.to_string())
    }
}

impl From<String> for PrimitivePropertyValue {
    fn from(value: String) -> Self {
        PrimitivePropertyValue::String(value)
    }
}

impl From<i64> for PrimitivePropertyValue {
    fn from(value: i64) -> Self {
        PrimitivePropertyValue::Int(value)
    }
}

impl From<bool> for PrimitivePropertyValue {
    fn from(value: bool) -> Self {
        PrimitivePropertyValue::Boolean(value)
    }
}

/// Property values keyed by attribute name. Ordered so archives are stable.
pub type InstanceProperties = BTreeMap<String, PrimitivePropertyValue>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub name: String,
    pub instance_type: InstanceType,
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: InstanceProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetail {
    pub guid: String,
    pub instance_type: InstanceType,
    #[serde(default)]
    pub status: InstanceStatus,
    pub version: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: InstanceProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
}

impl EntityDetail {
    pub fn property(&self, name: &str) -> Option<&PrimitivePropertyValue> {
        self.properties.get(name)
    }

    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.name == name)
    }
}

/// Lightweight reference to an entity from a relationship end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityProxy {
    pub guid: String,
    pub instance_type: InstanceType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub guid: String,
    pub instance_type: InstanceType,
    #[serde(default)]
    pub status: InstanceStatus,
    pub version: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: InstanceProperties,
    pub entity_one_proxy: EntityProxy,
    pub entity_two_proxy: EntityProxy,
}

impl fmt::Display for EntityDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EntityDetail{{type={}, guid={}, properties={}}}",
            self.instance_type.type_def_name,
            self.guid,
            self.properties.len()
        )
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relationship{{type={}, guid={}, end1={}, end2={}}}",
            self.instance_type.type_def_name,
            self.guid,
            self.entity_one_proxy.guid,
            self.entity_two_proxy.guid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary_type() -> InstanceType {
        InstanceType {
            type_def_guid: "t-1".to_string(),
            type_def_name: "Glossary".to_string(),
            type_def_category: TypeDefCategory::EntityDef,
        }
    }

    #[test]
    fn empty_properties_and_classifications_are_not_serialized() {
        let entity = EntityDetail {
            guid: "i-1".to_string(),
            instance_type: glossary_type(),
            status: InstanceStatus::Active,
            version: 1,
            properties: InstanceProperties::new(),
            classifications: Vec::new(),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert!(json.get("properties").is_none());
        assert!(json.get("classifications").is_none());
        assert_eq!(json["status"], "ACTIVE");
    }

    #[test]
    fn property_values_are_tagged() {
        let mut properties = InstanceProperties::new();
        properties.insert("qualifiedName".to_string(), "glossary:demo".into());
        properties.insert("usageCount".to_string(), 3i64.into());

        let json = serde_json::to_value(&properties).unwrap();
        assert_eq!(json["qualifiedName"]["type"], "string");
        assert_eq!(json["qualifiedName"]["value"], "glossary:demo");
        assert_eq!(json["usageCount"]["type"], "int");
    }
}
