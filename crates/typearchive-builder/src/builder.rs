//! The archive builder facade.

use typearchive_model::{
    ArchiveProperties, ClassificationDef, CollectionDef, EntityDetail, EntityDef, EnumDef,
    PrimitiveDef, Relationship, RelationshipDef, TypeDefPatch,
};

use crate::attribute_registry::AttributeTypeRegistry;
use crate::endpoint::EndpointAttributeMap;
use crate::error::Result;
use crate::index::GlobalIndex;
use crate::instance_store::InstanceStore;
use crate::structural_registry::StructuralTypeRegistry;

/// Collects type definitions and seed instances for one archive, enforcing
/// the archive-wide naming and collision rules as each item arrives.
///
/// A rejected call leaves the builder exactly as it was. Whether to report it
/// or carry on registering the rest of the content is up to the caller.
///
/// ```
/// use typearchive_builder::ArchiveBuilder;
/// use typearchive_model::{ArchiveProperties, PrimitiveDef, PrimitiveDefCategory};
///
/// let mut builder = ArchiveBuilder::new(ArchiveProperties::new("a-1", "CoreTypes"));
/// builder
///     .add_primitive_def(PrimitiveDef::new("p-1", "string", PrimitiveDefCategory::String))
///     .unwrap();
/// assert_eq!(builder.build().attribute_type_defs().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    pub(crate) properties: ArchiveProperties,
    pub(crate) index: GlobalIndex,
    pub(crate) attributes: AttributeTypeRegistry,
    pub(crate) structural: StructuralTypeRegistry,
    pub(crate) instances: InstanceStore,
    pub(crate) patches: Vec<TypeDefPatch>,
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new(ArchiveProperties::default())
    }
}

impl ArchiveBuilder {
    pub fn new(properties: ArchiveProperties) -> Self {
        tracing::debug!(
            archive = %properties.archive_name,
            guid = %properties.archive_guid,
            "creating archive builder"
        );
        Self {
            properties,
            index: GlobalIndex::default(),
            attributes: AttributeTypeRegistry::default(),
            structural: StructuralTypeRegistry::default(),
            instances: InstanceStore::default(),
            patches: Vec::new(),
        }
    }

    pub fn properties(&self) -> &ArchiveProperties {
        &self.properties
    }

    // ========================================================================
    // Attribute types
    // ========================================================================

    pub fn add_primitive_def(&mut self, def: PrimitiveDef) -> Result<()> {
        rejected(self.attributes.add_primitive_def(&mut self.index, def))
    }

    pub fn add_collection_def(&mut self, def: CollectionDef) -> Result<()> {
        rejected(self.attributes.add_collection_def(&mut self.index, def))
    }

    pub fn add_enum_def(&mut self, def: EnumDef) -> Result<()> {
        rejected(self.attributes.add_enum_def(&mut self.index, def))
    }

    pub fn get_primitive_def(&self, name: &str) -> Result<&PrimitiveDef> {
        self.attributes.get_primitive_def(name)
    }

    pub fn get_collection_def(&self, name: &str) -> Result<&CollectionDef> {
        self.attributes.get_collection_def(name)
    }

    pub fn get_enum_def(&self, name: &str) -> Result<&EnumDef> {
        self.attributes.get_enum_def(name)
    }

    // ========================================================================
    // Structural types
    // ========================================================================

    pub fn add_entity_def(&mut self, def: EntityDef) -> Result<()> {
        rejected(self.structural.add_entity_def(&mut self.index, def))
    }

    pub fn add_classification_def(&mut self, def: ClassificationDef) -> Result<()> {
        rejected(self.structural.add_classification_def(&mut self.index, def))
    }

    /// Both endpoint entity types must already be registered.
    pub fn add_relationship_def(&mut self, def: RelationshipDef) -> Result<()> {
        rejected(self.structural.add_relationship_def(&mut self.index, def))
    }

    pub fn get_entity_def(&self, name: &str) -> Result<&EntityDef> {
        self.structural.get_entity_def(name)
    }

    pub fn get_classification_def(&self, name: &str) -> Result<&ClassificationDef> {
        self.structural.get_classification_def(name)
    }

    pub fn get_relationship_def(&self, name: &str) -> Result<&RelationshipDef> {
        self.structural.get_relationship_def(name)
    }

    /// Attribute names that registered relationships expose on `entity_type`,
    /// sorted. Declared properties are not included.
    pub fn endpoint_attributes(&self, entity_type: &str) -> Vec<&str> {
        self.structural.endpoint_attributes().attributes_of(entity_type)
    }

    pub fn endpoint_attribute_map(&self) -> &EndpointAttributeMap {
        self.structural.endpoint_attributes()
    }

    /// Patches are emitted after all new type definitions, in call order.
    /// Their content is not checked against the registries.
    pub fn add_type_def_patch(&mut self, patch: TypeDefPatch) {
        tracing::debug!(patch = %patch, guid = %patch.type_def_guid, "adding TypeDefPatch");
        self.patches.push(patch);
    }

    // ========================================================================
    // Instances
    // ========================================================================

    pub fn add_entity(&mut self, entity: EntityDetail) -> Result<()> {
        rejected(self.instances.add_entity(&mut self.index, entity))
    }

    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<()> {
        rejected(self.instances.add_relationship(&mut self.index, relationship))
    }

    pub fn get_entity(&self, guid: &str) -> Result<&EntityDetail> {
        self.instances.get_entity(guid)
    }

    pub fn get_relationship(&self, guid: &str) -> Result<&Relationship> {
        self.instances.get_relationship(guid)
    }
}

fn rejected<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::debug!(error = %err, "archive content rejected");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use typearchive_model::{PrimitiveDefCategory, RelationshipEndDef, TypeDefLink};

    use crate::error::ArchiveError;

    #[test]
    fn names_are_shared_across_attribute_and_structural_types() {
        let mut builder = ArchiveBuilder::default();
        builder
            .add_primitive_def(PrimitiveDef::new("p-1", "string", PrimitiveDefCategory::String))
            .unwrap();

        let err = builder
            .add_entity_def(EntityDef::new("e-1", "string"))
            .unwrap_err();
        assert!(matches!(err, ArchiveError::DuplicateTypeName { .. }));

        let err = builder
            .add_entity_def(EntityDef::new("p-1", "Asset"))
            .unwrap_err();
        assert!(matches!(err, ArchiveError::DuplicateGuid { .. }));
        assert!(builder.get_entity_def("Asset").is_err());
    }

    #[test]
    fn endpoint_attributes_reflect_registered_relationships() {
        let mut builder = ArchiveBuilder::default();
        let asset = EntityDef::new("e-1", "Asset");
        let person = EntityDef::new("e-2", "Person");
        builder.add_entity_def(asset.clone()).unwrap();
        builder.add_entity_def(person.clone()).unwrap();
        builder
            .add_relationship_def(RelationshipDef::new(
                "r-1",
                "AssetOwnership",
                RelationshipEndDef::new(TypeDefLink::to(&asset), "ownedAssets"),
                RelationshipEndDef::new(TypeDefLink::to(&person), "owners"),
            ))
            .unwrap();

        assert_eq!(builder.endpoint_attributes("Asset"), vec!["owners"]);
        assert_eq!(builder.endpoint_attributes("Person"), vec!["ownedAssets"]);
        assert!(builder.endpoint_attributes("Unrelated").is_empty());
        assert!(!builder.endpoint_attribute_map().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn reject_duplicate_under(level: tracing::Level) -> String {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(log.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut builder = ArchiveBuilder::default();
            let def = PrimitiveDef::new("p-1", "string", PrimitiveDefCategory::String);
            builder.add_primitive_def(def.clone()).unwrap();
            assert!(builder.add_primitive_def(def).is_err());
        });
        log.contents()
    }

    #[test]
    fn rejections_are_reported_at_debug_only() {
        assert!(!reject_duplicate_under(tracing::Level::INFO).contains("archive content rejected"));
        assert!(reject_duplicate_under(tracing::Level::DEBUG).contains("archive content rejected"));
    }
}
