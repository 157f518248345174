//! Primitive, collection and enum attribute type definitions.

use typearchive_model::{AttributeTypeDefCategory, CollectionDef, EnumDef, PrimitiveDef};

use crate::error::Result;
use crate::index::{lookup, GlobalIndex, OrderedTable};

const PRIMITIVE: &str = AttributeTypeDefCategory::Primitive.as_str();
const COLLECTION: &str = AttributeTypeDefCategory::Collection.as_str();
const ENUM: &str = AttributeTypeDefCategory::EnumDef.as_str();

/// One table per attribute type kind, each in registration order.
///
/// The per-kind tables are authoritative for lookups; the [`GlobalIndex`]
/// only exists to catch collisions across kinds.
#[derive(Debug, Clone, Default)]
pub(crate) struct AttributeTypeRegistry {
    primitives: OrderedTable<PrimitiveDef>,
    collections: OrderedTable<CollectionDef>,
    enums: OrderedTable<EnumDef>,
}

impl AttributeTypeRegistry {
    pub(crate) fn add_primitive_def(&mut self, index: &mut GlobalIndex, def: PrimitiveDef) -> Result<()> {
        tracing::debug!(name = %def.name, guid = %def.guid, "adding PrimitiveDef");
        let rendered = self.primitives.check_new(index, &def, PRIMITIVE)?;
        self.primitives.commit(index, def, &rendered);
        Ok(())
    }

    pub(crate) fn add_collection_def(
        &mut self,
        index: &mut GlobalIndex,
        def: CollectionDef,
    ) -> Result<()> {
        tracing::debug!(name = %def.name, guid = %def.guid, "adding CollectionDef");
        let rendered = self.collections.check_new(index, &def, COLLECTION)?;
        self.collections.commit(index, def, &rendered);
        Ok(())
    }

    pub(crate) fn add_enum_def(&mut self, index: &mut GlobalIndex, def: EnumDef) -> Result<()> {
        tracing::debug!(name = %def.name, guid = %def.guid, "adding EnumDef");
        let rendered = self.enums.check_new(index, &def, ENUM)?;
        self.enums.commit(index, def, &rendered);
        Ok(())
    }

    pub(crate) fn get_primitive_def(&self, name: &str) -> Result<&PrimitiveDef> {
        lookup(&self.primitives, name, PRIMITIVE)
    }

    pub(crate) fn get_collection_def(&self, name: &str) -> Result<&CollectionDef> {
        lookup(&self.collections, name, COLLECTION)
    }

    pub(crate) fn get_enum_def(&self, name: &str) -> Result<&EnumDef> {
        lookup(&self.enums, name, ENUM)
    }

    pub(crate) fn primitives(&self) -> &[PrimitiveDef] {
        self.primitives.as_slice()
    }

    pub(crate) fn collections(&self) -> &[CollectionDef] {
        self.collections.as_slice()
    }

    pub(crate) fn enums(&self) -> &[EnumDef] {
        self.enums.as_slice()
    }

    pub(crate) fn len(&self) -> usize {
        self.primitives.len() + self.collections.len() + self.enums.len()
    }
}
