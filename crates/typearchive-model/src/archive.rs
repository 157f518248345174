//! The archive value produced by one build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeTypeDef;
use crate::instance::{EntityDetail, Relationship};
use crate::typedef::{TypeDef, TypeDefPatch};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchiveType {
    /// Reusable types and reference data loaded into any repository.
    #[default]
    ContentPack,
    /// Metadata extracted from one repository for import into another.
    MetadataExport,
    /// Full copy of a repository's contents.
    RepositoryBackup,
}

/// Archive header. Also the builder's configuration: everything a build needs
/// that is not a registered definition or instance lives here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveProperties {
    pub archive_guid: String,
    pub archive_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_description: Option<String>,
    #[serde(default)]
    pub archive_type: ArchiveType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_license: Option<String>,
    pub creation_date: DateTime<Utc>,
    /// GUIDs of archives whose types this archive references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on_archives: Vec<String>,
}

impl Default for ArchiveProperties {
    fn default() -> Self {
        Self {
            archive_guid: String::new(),
            archive_name: String::new(),
            archive_description: None,
            archive_type: ArchiveType::ContentPack,
            originator_name: None,
            originator_license: None,
            creation_date: Utc::now(),
            depends_on_archives: Vec::new(),
        }
    }
}

impl ArchiveProperties {
    pub fn new(archive_guid: impl Into<String>, archive_name: impl Into<String>) -> Self {
        Self {
            archive_guid: archive_guid.into(),
            archive_name: archive_name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.archive_description = Some(description.into());
        self
    }

    pub fn with_archive_type(mut self, archive_type: ArchiveType) -> Self {
        self.archive_type = archive_type;
        self
    }

    pub fn with_originator(mut self, name: impl Into<String>) -> Self {
        self.originator_name = Some(name.into());
        self
    }

    pub fn with_originator_license(mut self, license: impl Into<String>) -> Self {
        self.originator_license = Some(license.into());
        self
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = creation_date;
        self
    }

    pub fn depends_on(mut self, archive_guid: impl Into<String>) -> Self {
        self.depends_on_archives.push(archive_guid.into());
        self
    }
}

/// Type definitions in load order. Lists are `None` rather than empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveTypeStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_type_defs: Option<Vec<AttributeTypeDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_type_defs: Option<Vec<TypeDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_def_patches: Option<Vec<TypeDefPatch>>,
}

/// Seed instances in load order. Lists are `None` rather than empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveInstanceStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntityDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeArchive {
    pub archive_properties: ArchiveProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_type_store: Option<ArchiveTypeStore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_instance_store: Option<ArchiveInstanceStore>,
}

impl TypeArchive {
    pub fn attribute_type_defs(&self) -> &[AttributeTypeDef] {
        self.archive_type_store
            .as_ref()
            .and_then(|s| s.attribute_type_defs.as_deref())
            .unwrap_or_default()
    }

    pub fn new_type_defs(&self) -> &[TypeDef] {
        self.archive_type_store
            .as_ref()
            .and_then(|s| s.new_type_defs.as_deref())
            .unwrap_or_default()
    }

    pub fn type_def_patches(&self) -> &[TypeDefPatch] {
        self.archive_type_store
            .as_ref()
            .and_then(|s| s.type_def_patches.as_deref())
            .unwrap_or_default()
    }

    pub fn entities(&self) -> &[EntityDetail] {
        self.archive_instance_store
            .as_ref()
            .and_then(|s| s.entities.as_deref())
            .unwrap_or_default()
    }

    pub fn relationships(&self) -> &[Relationship] {
        self.archive_instance_store
            .as_ref()
            .and_then(|s| s.relationships.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_omits_unset_optional_fields() {
        let props = ArchiveProperties::new("a-1", "CoreTypes")
            .with_originator("Typearchive")
            .depends_on("a-0");
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["archiveGuid"], "a-1");
        assert_eq!(json["archiveType"], "CONTENT_PACK");
        assert_eq!(json["dependsOnArchives"][0], "a-0");
        assert!(json.get("archiveDescription").is_none());
        assert!(json.get("originatorLicense").is_none());
    }

    #[test]
    fn accessors_on_empty_archive_return_empty_slices() {
        let archive = TypeArchive {
            archive_properties: ArchiveProperties::new("a-1", "Empty"),
            archive_type_store: None,
            archive_instance_store: None,
        };
        assert!(archive.attribute_type_defs().is_empty());
        assert!(archive.new_type_defs().is_empty());
        assert!(archive.type_def_patches().is_empty());
        assert!(archive.entities().is_empty());
        assert!(archive.relationships().is_empty());
    }
}
