//! Builds seed instances from type names already registered in a builder.

use typearchive_model::{
    Classification, EntityDetail, EntityProxy, InstanceProperties, InstanceStatus, InstanceType,
    PrimitivePropertyValue, Relationship, TypeDefCategory, TypeIdentity,
};

use crate::builder::ArchiveBuilder;
use crate::error::Result;

/// Content writers describe instances by type name; the helper resolves the
/// name against the builder so the instance carries the registered type's
/// GUID. Instances come out `Active` at version 1.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveHelper<'a> {
    builder: &'a ArchiveBuilder,
}

impl<'a> ArchiveHelper<'a> {
    pub fn new(builder: &'a ArchiveBuilder) -> Self {
        Self { builder }
    }

    pub fn entity_detail(
        &self,
        type_name: &str,
        guid: impl Into<String>,
        properties: InstanceProperties,
        classifications: Vec<Classification>,
    ) -> Result<EntityDetail> {
        let def = self.builder.get_entity_def(type_name)?;
        Ok(EntityDetail {
            guid: guid.into(),
            instance_type: instance_type(def, TypeDefCategory::EntityDef),
            status: InstanceStatus::Active,
            version: 1,
            properties,
            classifications,
        })
    }

    pub fn classification(
        &self,
        type_name: &str,
        properties: InstanceProperties,
    ) -> Result<Classification> {
        let def = self.builder.get_classification_def(type_name)?;
        Ok(Classification {
            name: def.name.clone(),
            instance_type: instance_type(def, TypeDefCategory::ClassificationDef),
            status: InstanceStatus::Active,
            properties,
        })
    }

    /// `end1` and `end2` become the relationship's first and second entity
    /// proxies. Their types are not checked against the relationship's ends.
    pub fn relationship(
        &self,
        type_name: &str,
        guid: impl Into<String>,
        properties: InstanceProperties,
        end1: &EntityDetail,
        end2: &EntityDetail,
    ) -> Result<Relationship> {
        let def = self.builder.get_relationship_def(type_name)?;
        Ok(Relationship {
            guid: guid.into(),
            instance_type: instance_type(def, TypeDefCategory::RelationshipDef),
            status: InstanceStatus::Active,
            version: 1,
            properties,
            entity_one_proxy: Self::entity_proxy(end1),
            entity_two_proxy: Self::entity_proxy(end2),
        })
    }

    pub fn entity_proxy(entity: &EntityDetail) -> EntityProxy {
        EntityProxy {
            guid: entity.guid.clone(),
            instance_type: entity.instance_type.clone(),
        }
    }

    /// Sets `name` to `value` when there is a value; `None` leaves the
    /// properties as they were.
    pub fn add_string_property(
        properties: &mut InstanceProperties,
        name: &str,
        value: Option<impl Into<String>>,
    ) {
        if let Some(value) = value {
            properties.insert(name.to_string(), PrimitivePropertyValue::String(value.into()));
        }
    }
}

impl ArchiveBuilder {
    pub fn helper(&self) -> ArchiveHelper<'_> {
        ArchiveHelper::new(self)
    }
}

fn instance_type<T: TypeIdentity>(def: &T, category: TypeDefCategory) -> InstanceType {
    InstanceType {
        type_def_guid: def.guid().to_string(),
        type_def_name: def.name().to_string(),
        type_def_category: category,
    }
}
