//! Relationship endpoint collision checking.
//!
//! Entity types are open: any number of independently authored relationship
//! types may attach to them, and each relationship end adds a reference
//! attribute to the entity at the *opposite* end. Code generated from the type
//! system exposes those as accessors next to the entity's declared properties,
//! so a relationship is only accepted when none of the attribute names it
//! introduces is already visible on the receiving entity type.
//!
//! ```text
//!   R(end1 = A / "owner", end2 = B / "assets")
//!
//!   A  gains  "assets"   (traverse A → B)
//!   B  gains  "owner"    (traverse B → A)
//! ```
//!
//! A relationship whose two ends name the same entity type *and* the same
//! attribute contributes that attribute once. Checks only see relationships
//! registered earlier, so detection follows registration order.

use std::collections::{BTreeSet, HashMap};

use typearchive_model::{EntityDef, RelationshipDef};

use crate::error::{ArchiveError, Result};

/// Per entity type, the attribute names contributed by relationship endpoints
/// so far. Declared properties are not stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointAttributeMap {
    by_entity_type: HashMap<String, BTreeSet<String>>,
}

impl EndpointAttributeMap {
    pub fn contains(&self, entity_type: &str, attribute: &str) -> bool {
        self.by_entity_type
            .get(entity_type)
            .is_some_and(|attrs| attrs.contains(attribute))
    }

    /// Relationship-introduced attribute names on `entity_type`, sorted.
    pub fn attributes_of(&self, entity_type: &str) -> Vec<&str> {
        self.by_entity_type
            .get(entity_type)
            .map(|attrs| attrs.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity_type.is_empty()
    }

    pub(crate) fn apply(&mut self, claims: Vec<EndpointClaim>) {
        for claim in claims {
            self.by_entity_type
                .entry(claim.entity_type)
                .or_default()
                .insert(claim.attribute);
        }
    }
}

/// An attribute a relationship will add to an entity type once accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EndpointClaim {
    pub(crate) entity_type: String,
    pub(crate) other_entity_type: String,
    pub(crate) attribute: String,
}

impl EndpointClaim {
    fn collision(&self, relationship: &str) -> ArchiveError {
        ArchiveError::DuplicateEndpointAttribute {
            relationship: relationship.to_string(),
            entity_type: self.entity_type.clone(),
            other_entity_type: self.other_entity_type.clone(),
            attribute: self.attribute.clone(),
        }
    }
}

/// Work out which attributes `relationship` would add and reject it if any of
/// them is already visible on the receiving entity type.
///
/// `entity_def` resolves an endpoint entity type by name. Nothing is mutated;
/// the caller applies the returned claims once the whole registration passes.
pub(crate) fn check_endpoints<'a, F>(
    relationship: &RelationshipDef,
    accumulated: &EndpointAttributeMap,
    entity_def: F,
) -> Result<Vec<EndpointClaim>>
where
    F: Fn(&str) -> Result<&'a EntityDef>,
{
    let end1 = &relationship.end_def1;
    let end2 = &relationship.end_def2;
    let end1_type = end1.entity_type.name.as_str();
    let end2_type = end2.entity_type.name.as_str();

    let end1_entity = entity_def(end1_type)?;
    let end2_entity = entity_def(end2_type)?;

    let claims = if end1_type == end2_type && end1.attribute_name == end2.attribute_name {
        vec![EndpointClaim {
            entity_type: end1_type.to_string(),
            other_entity_type: end2_type.to_string(),
            attribute: end1.attribute_name.clone(),
        }]
    } else {
        vec![
            EndpointClaim {
                entity_type: end1_type.to_string(),
                other_entity_type: end2_type.to_string(),
                attribute: end2.attribute_name.clone(),
            },
            EndpointClaim {
                entity_type: end2_type.to_string(),
                other_entity_type: end1_type.to_string(),
                attribute: end1.attribute_name.clone(),
            },
        ]
    };

    for claim in &claims {
        if accumulated.contains(&claim.entity_type, &claim.attribute) {
            return Err(claim.collision(&relationship.name));
        }
    }

    for claim in &claims {
        let receiver = if claim.entity_type == end1_type {
            end1_entity
        } else {
            end2_entity
        };
        if receiver.declares(&claim.attribute) {
            return Err(claim.collision(&relationship.name));
        }
    }

    Ok(claims)
}
