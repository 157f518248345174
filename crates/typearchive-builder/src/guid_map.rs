//! Stable GUIDs across archive regenerations.
//!
//! Content writers derive a readable id for every element they emit
//! (`"GlossaryTerm:demo:Customer"`, say) and ask the map for its GUID. The map
//! is saved next to the writer, so the next run hands out the same GUIDs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveGuidMap {
    path: PathBuf,
    guids: BTreeMap<String, String>,
}

impl ArchiveGuidMap {
    /// Load the map stored at `path`. A missing file is an empty map; a file
    /// that exists but is not a JSON object of strings is an error.
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let guids: BTreeMap<String, String> = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading GUID map {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing GUID map {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = guids.len(), "loaded GUID map");
        Ok(Self { path, guids })
    }

    /// GUID previously handed out for `id`, or a fresh one that is remembered
    /// from now on.
    pub fn guid_for(&mut self, id: &str) -> String {
        self.guids
            .entry(id.to_string())
            .or_insert_with(|| Uuid::new_v4().to_string())
            .clone()
    }

    /// Write the map back. An empty map removes the file instead.
    pub fn save(&self) -> anyhow::Result<()> {
        if self.guids.is_empty() {
            tracing::debug!(path = %self.path.display(), "removing empty GUID map");
            return match std::fs::remove_file(&self.path) {
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err::<(), _>(err)
                    .with_context(|| format!("removing GUID map {}", self.path.display())),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.guids)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing GUID map {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), entries = self.guids.len(), "saved GUID map");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.guids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guids.is_empty()
    }
}
