//! Turns the registries into a [`TypeArchive`] in load order.
//!
//! ```text
//! attribute types   primitives → collections → enums
//! new type defs     entities → classifications → relationships
//! patches           call order
//! instances         entities → relationships
//! ```
//!
//! A type is always emitted after everything it can reference, so a loader
//! can process the lists front to back.

use typearchive_model::{
    ArchiveInstanceStore, ArchiveTypeStore, AttributeTypeDef, TypeArchive, TypeDef,
};

use crate::builder::ArchiveBuilder;

impl ArchiveBuilder {
    /// Snapshot the current content as an archive.
    ///
    /// Empty lists are left out, and a store is left out when all of its
    /// lists are. The builder is untouched, so calling this again with no
    /// registrations in between returns an equal archive.
    pub fn build(&self) -> TypeArchive {
        let attribute_type_defs: Vec<AttributeTypeDef> = self
            .attributes
            .primitives()
            .iter()
            .cloned()
            .map(AttributeTypeDef::Primitive)
            .chain(self.attributes.collections().iter().cloned().map(AttributeTypeDef::Collection))
            .chain(self.attributes.enums().iter().cloned().map(AttributeTypeDef::Enum))
            .collect();

        let new_type_defs: Vec<TypeDef> = self
            .structural
            .entities()
            .iter()
            .cloned()
            .map(TypeDef::Entity)
            .chain(self.structural.classifications().iter().cloned().map(TypeDef::Classification))
            .chain(self.structural.relationships().iter().cloned().map(TypeDef::Relationship))
            .collect();

        let entities = self.instances.entities().to_vec();
        let relationships = self.instances.relationships().to_vec();

        tracing::debug!(
            archive = %self.properties.archive_name,
            attribute_types = attribute_type_defs.len(),
            type_defs = new_type_defs.len(),
            patches = self.patches.len(),
            entities = entities.len(),
            relationships = relationships.len(),
            guids = self.index.guid_count(),
            "building archive"
        );

        let type_store = ArchiveTypeStore {
            attribute_type_defs: non_empty(attribute_type_defs),
            new_type_defs: non_empty(new_type_defs),
            type_def_patches: non_empty(self.patches.clone()),
        };
        let instance_store = ArchiveInstanceStore {
            entities: non_empty(entities),
            relationships: non_empty(relationships),
        };

        TypeArchive {
            archive_properties: self.properties.clone(),
            archive_type_store: (type_store != ArchiveTypeStore::default()).then_some(type_store),
            archive_instance_store: (instance_store != ArchiveInstanceStore::default())
                .then_some(instance_store),
        }
    }

    /// Number of type definitions registered so far, attribute and structural.
    pub fn type_count(&self) -> usize {
        self.attributes.len() + self.structural.len()
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use typearchive_model::{
        ArchiveProperties, CollectionDef, CollectionDefCategory, EntityDef, EnumDef, PrimitiveDef,
        PrimitiveDefCategory, TypeDefPatch, TypeIdentity,
    };

    use crate::builder::ArchiveBuilder;

    fn patch(type_name: &str) -> TypeDefPatch {
        TypeDefPatch {
            type_def_guid: format!("t-{type_name}"),
            type_name: type_name.to_string(),
            apply_to_version: 1,
            update_to_version: 2,
            new_version_name: "2.0".to_string(),
            description: None,
            properties_to_add: Vec::new(),
        }
    }

    #[test]
    fn empty_builder_emits_header_only() {
        let builder = ArchiveBuilder::new(ArchiveProperties::new("a-1", "Empty"));
        let archive = builder.build();
        assert!(archive.archive_type_store.is_none());
        assert!(archive.archive_instance_store.is_none());
        assert_eq!(archive.archive_properties.archive_name, "Empty");
    }

    #[test]
    fn attribute_types_are_grouped_by_kind() {
        let mut builder = ArchiveBuilder::default();
        builder
            .add_enum_def(EnumDef::new("g-enum", "Level").with_element("LOW"))
            .unwrap();
        builder
            .add_collection_def(CollectionDef::new(
                "g-coll",
                "array<string>",
                CollectionDefCategory::Array,
                vec!["string".to_string()],
            ))
            .unwrap();
        builder
            .add_primitive_def(PrimitiveDef::new("g-prim", "string", PrimitiveDefCategory::String))
            .unwrap();

        let archive = builder.build();
        let names: Vec<_> = archive.attribute_type_defs().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["string", "array<string>", "Level"]);
        assert_eq!(builder.type_count(), 3);
    }

    #[test]
    fn patches_follow_new_types_and_keep_call_order() {
        let mut builder = ArchiveBuilder::default();
        builder.add_type_def_patch(patch("Referenceable"));
        builder.add_entity_def(EntityDef::new("e-1", "Asset")).unwrap();
        builder.add_type_def_patch(patch("Asset"));

        let archive = builder.build();
        let store = archive.archive_type_store.as_ref().unwrap();
        assert!(store.attribute_type_defs.is_none());
        assert_eq!(store.new_type_defs.as_ref().map(Vec::len), Some(1));
        let patched: Vec<_> = archive
            .type_def_patches()
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        assert_eq!(patched, vec!["Referenceable", "Asset"]);
        assert!(archive.archive_instance_store.is_none());
    }
}
