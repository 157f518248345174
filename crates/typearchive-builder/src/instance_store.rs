//! Seed entities and relationships, keyed by instance GUID.

use std::collections::HashMap;

use typearchive_model::{EntityDetail, Relationship};

use crate::error::{ArchiveError, Result};
use crate::index::{GlobalIndex, OrderedTable};
use crate::names::require_name;

const ENTITY: &str = "Entity";
const RELATIONSHIP: &str = "Relationship";

/// Entities and relationships share one instance GUID namespace, which in
/// turn is part of the archive-wide GUID namespace.
#[derive(Debug, Clone, Default)]
pub(crate) struct InstanceStore {
    entities: OrderedTable<EntityDetail>,
    relationships: OrderedTable<Relationship>,
    instance_guids: HashMap<String, String>,
}

impl InstanceStore {
    pub(crate) fn add_entity(&mut self, index: &mut GlobalIndex, entity: EntityDetail) -> Result<()> {
        tracing::debug!(
            guid = %entity.guid,
            type_name = %entity.instance_type.type_def_name,
            "adding entity"
        );
        let rendered = entity.to_string();
        self.check_new(index, &entity.guid, &rendered, ENTITY)?;
        self.record(index, &entity.guid, &rendered);
        self.entities.push(entity.guid.clone(), entity);
        Ok(())
    }

    pub(crate) fn add_relationship(
        &mut self,
        index: &mut GlobalIndex,
        relationship: Relationship,
    ) -> Result<()> {
        tracing::debug!(
            guid = %relationship.guid,
            type_name = %relationship.instance_type.type_def_name,
            "adding relationship"
        );
        let rendered = relationship.to_string();
        self.check_new(index, &relationship.guid, &rendered, RELATIONSHIP)?;
        self.record(index, &relationship.guid, &rendered);
        self.relationships.push(relationship.guid.clone(), relationship);
        Ok(())
    }

    pub(crate) fn get_entity(&self, guid: &str) -> Result<&EntityDetail> {
        find(&self.entities, guid, ENTITY)
    }

    pub(crate) fn get_relationship(&self, guid: &str) -> Result<&Relationship> {
        find(&self.relationships, guid, RELATIONSHIP)
    }

    pub(crate) fn entities(&self) -> &[EntityDetail] {
        self.entities.as_slice()
    }

    pub(crate) fn relationships(&self) -> &[Relationship] {
        self.relationships.as_slice()
    }

    fn check_new(
        &self,
        index: &GlobalIndex,
        guid: &str,
        rendered: &str,
        category: &'static str,
    ) -> Result<()> {
        require_name(guid, category)?;
        if let Some(existing) = self.instance_guids.get(guid) {
            return Err(ArchiveError::DuplicateInstance {
                guid: guid.to_string(),
                category,
                existing: existing.clone(),
                duplicate: rendered.to_string(),
            });
        }
        index.check_guid(guid, rendered)
    }

    fn record(&mut self, index: &mut GlobalIndex, guid: &str, rendered: &str) {
        self.instance_guids
            .insert(guid.to_string(), rendered.to_string());
        index.record_guid(guid, rendered);
    }
}

fn find<'a, T>(table: &'a OrderedTable<T>, guid: &str, category: &'static str) -> Result<&'a T> {
    tracing::debug!(guid, category, "retrieving instance");
    require_name(guid, category)?;
    table.get(guid).ok_or_else(|| ArchiveError::UnknownInstance {
        guid: guid.to_string(),
        category,
    })
}
