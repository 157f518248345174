//! Lookup tables shared by the registries.

use std::collections::HashMap;
use std::fmt::Display;

use typearchive_model::TypeIdentity;

use crate::error::{ArchiveError, Result};
use crate::names::{check_type_name, require_name};

/// Keyed table that remembers registration order.
///
/// The key map answers presence/lookup; the vector is what the assembler
/// emits, so archive order always matches call order.
#[derive(Debug, Clone)]
pub(crate) struct OrderedTable<T> {
    positions: HashMap<String, usize>,
    items: Vec<T>,
}

impl<T> Default for OrderedTable<T> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            items: Vec::new(),
        }
    }
}

impl<T> OrderedTable<T> {
    pub(crate) fn get(&self, key: &str) -> Option<&T> {
        self.positions.get(key).map(|&pos| &self.items[pos])
    }

    /// Caller must have checked the key is free.
    pub(crate) fn push(&mut self, key: String, item: T) {
        debug_assert!(!self.positions.contains_key(&key));
        self.positions.insert(key, self.items.len());
        self.items.push(item);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: TypeIdentity + Display> OrderedTable<T> {
    /// Identity checks for a new type definition, most specific first:
    /// malformed name, same name within this kind, GUID anywhere in the
    /// archive, name anywhere in the archive.
    ///
    /// Returns the rendered definition for [`OrderedTable::commit`].
    pub(crate) fn check_new(
        &self,
        index: &GlobalIndex,
        def: &T,
        category: &'static str,
    ) -> Result<String> {
        check_type_name(def.name())?;
        let rendered = def.to_string();
        if let Some(existing) = self.get(def.name()) {
            return Err(ArchiveError::DuplicateName {
                name: def.name().to_string(),
                category,
                existing: existing.to_string(),
                duplicate: rendered,
            });
        }
        index.check_guid(def.guid(), &rendered)?;
        index.check_name(def.name(), &rendered)?;
        Ok(rendered)
    }

    pub(crate) fn commit(&mut self, index: &mut GlobalIndex, def: T, rendered: &str) {
        index.record_type(def.guid(), def.name(), rendered);
        self.push(def.name().to_string(), def);
    }
}

/// Name lookup in one kind's table.
pub(crate) fn lookup<'a, T>(
    table: &'a OrderedTable<T>,
    name: &str,
    category: &'static str,
) -> Result<&'a T> {
    tracing::debug!(name, category, "retrieving type");
    require_name(name, category)?;
    table.get(name).ok_or_else(|| ArchiveError::UnknownType {
        name: name.to_string(),
        category,
    })
}

/// Archive-wide GUID and name indices.
///
/// Every attribute type and structural type shares one name namespace; types
/// and instances share one GUID namespace. Values are the rendered form of
/// whatever owns the key, kept for diagnostics.
#[derive(Debug, Clone, Default)]
pub(crate) struct GlobalIndex {
    by_guid: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl GlobalIndex {
    pub(crate) fn check_guid(&self, guid: &str, duplicate: &str) -> Result<()> {
        match self.by_guid.get(guid) {
            Some(existing) => Err(ArchiveError::DuplicateGuid {
                guid: guid.to_string(),
                existing: existing.clone(),
                duplicate: duplicate.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn check_name(&self, name: &str, duplicate: &str) -> Result<()> {
        match self.by_name.get(name) {
            Some(existing) => Err(ArchiveError::DuplicateTypeName {
                name: name.to_string(),
                existing: existing.clone(),
                duplicate: duplicate.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn record_guid(&mut self, guid: &str, rendered: &str) {
        self.by_guid.insert(guid.to_string(), rendered.to_string());
    }

    pub(crate) fn record_type(&mut self, guid: &str, name: &str, rendered: &str) {
        self.record_guid(guid, rendered);
        self.by_name.insert(name.to_string(), rendered.to_string());
    }

    pub(crate) fn guid_count(&self) -> usize {
        self.by_guid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_table_keeps_insertion_order() {
        let mut table = OrderedTable::default();
        table.push("b".to_string(), 2);
        table.push("a".to_string(), 1);
        table.push("c".to_string(), 3);
        assert_eq!(table.as_slice(), &[2, 1, 3]);
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("z"), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn global_index_reports_existing_owner() {
        let mut index = GlobalIndex::default();
        index.record_type("g-1", "string", "PrimitiveDef{name=string, guid=g-1}");

        let err = index
            .check_guid("g-1", "EnumDef{name=Other, guid=g-1}")
            .unwrap_err();
        assert_eq!(
            err,
            ArchiveError::DuplicateGuid {
                guid: "g-1".to_string(),
                existing: "PrimitiveDef{name=string, guid=g-1}".to_string(),
                duplicate: "EnumDef{name=Other, guid=g-1}".to_string(),
            }
        );
        assert!(index.check_name("string", "x").is_err());
        assert!(index.check_name("int", "x").is_ok());
        assert_eq!(index.guid_count(), 1);
    }

    #[test]
    fn lookup_separates_blank_and_unknown_names() {
        let mut table = OrderedTable::default();
        table.push("Asset".to_string(), 7);

        assert_eq!(lookup(&table, "Asset", "EntityDef"), Ok(&7));
        assert_eq!(
            lookup(&table, "", "EntityDef"),
            Err(ArchiveError::MissingName { category: "EntityDef" })
        );
        assert_eq!(
            lookup(&table, "Schema", "EntityDef"),
            Err(ArchiveError::UnknownType {
                name: "Schema".to_string(),
                category: "EntityDef",
            })
        );
    }
}
