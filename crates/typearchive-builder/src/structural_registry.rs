//! Entity, classification and relationship type definitions.

use std::collections::HashSet;

use typearchive_model::{ClassificationDef, EntityDef, RelationshipDef, TypeDefAttribute, TypeDefCategory};

use crate::endpoint::{check_endpoints, EndpointAttributeMap};
use crate::error::{ArchiveError, Result};
use crate::index::{lookup, GlobalIndex, OrderedTable};

const ENTITY: &str = TypeDefCategory::EntityDef.as_str();
const CLASSIFICATION: &str = TypeDefCategory::ClassificationDef.as_str();
const RELATIONSHIP: &str = TypeDefCategory::RelationshipDef.as_str();

#[derive(Debug, Clone, Default)]
pub(crate) struct StructuralTypeRegistry {
    entities: OrderedTable<EntityDef>,
    classifications: OrderedTable<ClassificationDef>,
    relationships: OrderedTable<RelationshipDef>,
    endpoint_attributes: EndpointAttributeMap,
}

impl StructuralTypeRegistry {
    pub(crate) fn add_entity_def(&mut self, index: &mut GlobalIndex, def: EntityDef) -> Result<()> {
        tracing::debug!(name = %def.name, guid = %def.guid, "adding EntityDef");
        let rendered = self.entities.check_new(index, &def, ENTITY)?;
        check_unique_attributes(&def.name, &def.properties_definition)?;
        self.entities.commit(index, def, &rendered);
        Ok(())
    }

    pub(crate) fn add_classification_def(
        &mut self,
        index: &mut GlobalIndex,
        def: ClassificationDef,
    ) -> Result<()> {
        tracing::debug!(name = %def.name, guid = %def.guid, "adding ClassificationDef");
        let rendered = self.classifications.check_new(index, &def, CLASSIFICATION)?;
        check_unique_attributes(&def.name, &def.properties_definition)?;
        self.classifications.commit(index, def, &rendered);
        Ok(())
    }

    /// Registers a relationship type once its endpoints resolve and neither
    /// endpoint attribute collides with what the receiving entity type
    /// already exposes.
    pub(crate) fn add_relationship_def(
        &mut self,
        index: &mut GlobalIndex,
        def: RelationshipDef,
    ) -> Result<()> {
        tracing::debug!(
            name = %def.name,
            guid = %def.guid,
            end1 = %def.end_def1.entity_type.name,
            end2 = %def.end_def2.entity_type.name,
            "adding RelationshipDef"
        );
        let rendered = self.relationships.check_new(index, &def, RELATIONSHIP)?;
        let claims = check_endpoints(&def, &self.endpoint_attributes, |name: &str| {
            lookup(&self.entities, name, ENTITY)
        })?;
        check_unique_attributes(&def.name, &def.properties_definition)?;

        self.relationships.commit(index, def, &rendered);
        self.endpoint_attributes.apply(claims);
        Ok(())
    }

    pub(crate) fn get_entity_def(&self, name: &str) -> Result<&EntityDef> {
        lookup(&self.entities, name, ENTITY)
    }

    pub(crate) fn get_classification_def(&self, name: &str) -> Result<&ClassificationDef> {
        lookup(&self.classifications, name, CLASSIFICATION)
    }

    pub(crate) fn get_relationship_def(&self, name: &str) -> Result<&RelationshipDef> {
        lookup(&self.relationships, name, RELATIONSHIP)
    }

    pub(crate) fn entities(&self) -> &[EntityDef] {
        self.entities.as_slice()
    }

    pub(crate) fn classifications(&self) -> &[ClassificationDef] {
        self.classifications.as_slice()
    }

    pub(crate) fn relationships(&self) -> &[RelationshipDef] {
        self.relationships.as_slice()
    }

    pub(crate) fn endpoint_attributes(&self) -> &EndpointAttributeMap {
        &self.endpoint_attributes
    }

    pub(crate) fn len(&self) -> usize {
        self.entities.len() + self.classifications.len() + self.relationships.len()
    }
}

fn check_unique_attributes(type_name: &str, properties: &[TypeDefAttribute]) -> Result<()> {
    let mut seen = HashSet::with_capacity(properties.len());
    for attribute in properties {
        if !seen.insert(attribute.attribute_name.as_str()) {
            return Err(ArchiveError::DuplicateAttribute {
                type_name: type_name.to_string(),
                attribute: attribute.attribute_name.clone(),
            });
        }
    }
    Ok(())
}
