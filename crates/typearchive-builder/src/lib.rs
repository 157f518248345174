//! Typearchive builder
//!
//! Assembles a self-consistent type system archive from independently
//! authored definitions:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         ArchiveBuilder                           │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  add_*_def ──► attribute registry ─┐                             │
//! │                                    ├──► global name/GUID index   │
//! │  add_*_def ──► structural registry ┤                             │
//! │                   │                │                             │
//! │                   ▼                │                             │
//! │            endpoint checker        │                             │
//! │                                    │                             │
//! │  add_entity ─► instance store ─────┘                             │
//! │                                                                  │
//! │  build() ──► TypeArchive (load order, empty lists omitted)       │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules enforced on every registration
//!
//! - Type names are non-empty and contain no whitespace.
//! - Attribute types and structural types share one name namespace.
//! - Types and instances share one GUID namespace.
//! - No attribute name is visible twice on an entity type, whether declared
//!   or introduced by a relationship endpoint.
//!
//! A rejected registration changes nothing. The builder does no I/O; the
//! [`ArchiveGuidMap`] utility is the only file-backed piece.

mod assembler;
mod attribute_registry;
mod builder;
mod endpoint;
mod error;
mod guid_map;
mod helper;
mod index;
mod instance_store;
mod names;
mod structural_registry;

pub use builder::ArchiveBuilder;
pub use endpoint::EndpointAttributeMap;
pub use error::{ArchiveError, Result};
pub use guid_map::ArchiveGuidMap;
pub use helper::ArchiveHelper;
pub use names::check_type_name;
