//! Typearchive data model
//!
//! Plain, serde-friendly values describing an open metadata type system and the
//! archive that carries it:
//!
//! ```text
//! TypeArchive
//! ├── ArchiveProperties      (header: identity, originator, dependencies)
//! ├── ArchiveTypeStore       (attribute type defs → new type defs → patches)
//! └── ArchiveInstanceStore   (entities → relationships)
//! ```
//!
//! This crate carries no validation. Uniqueness and collision rules live in
//! `typearchive-builder`, which is the only supported way to assemble a
//! [`TypeArchive`].

/// Implements [`TypeIdentity`] and a compact `Kind{name=.., guid=..}` `Display`
/// for a definition struct with `guid` and `name` fields.
macro_rules! impl_identity {
    ($ty:ty, $label:literal) => {
        impl $crate::TypeIdentity for $ty {
            fn guid(&self) -> &str {
                &self.guid
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{{name={}, guid={}}}", $label, self.name, self.guid)
            }
        }
    };
}

pub mod archive;
pub mod attribute;
pub mod instance;
pub mod typedef;

pub use archive::{ArchiveInstanceStore, ArchiveProperties, ArchiveType, ArchiveTypeStore, TypeArchive};
pub use attribute::{
    AttributeTypeDef, AttributeTypeDefCategory, CollectionDef, CollectionDefCategory, EnumDef,
    EnumElementDef, PrimitiveDef, PrimitiveDefCategory,
};
pub use instance::{
    Classification, EntityDetail, EntityProxy, InstanceProperties, InstanceStatus, InstanceType,
    PrimitivePropertyValue, Relationship,
};
pub use typedef::{
    AttributeCardinality, ClassificationDef, EntityDef, PropagationRule, RelationshipDef,
    RelationshipEndCardinality, RelationshipEndDef, TypeDef, TypeDefAttribute, TypeDefCategory,
    TypeDefLink, TypeDefPatch,
};

/// Identity shared by every definition that can be registered in an archive.
///
/// Attribute type defs and structural type defs live in one flat namespace, so
/// the builder only ever needs these two keys.
pub trait TypeIdentity {
    fn guid(&self) -> &str;
    fn name(&self) -> &str;
}
