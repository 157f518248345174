use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use typearchive_builder::{ArchiveBuilder, ArchiveError};
use typearchive_model::{
    ArchiveProperties, EntityDef, PrimitiveDef, PrimitiveDefCategory, RelationshipDef,
    RelationshipEndDef, TypeDefLink, TypeIdentity,
};

fn fixed_properties() -> ArchiveProperties {
    ArchiveProperties::new("a-prop", "PropertyArchive")
        .with_creation_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

fn type_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-z]{0,3}", 0..24)
}

fn linked_pair(builder: &mut ArchiveBuilder) -> (TypeDefLink, TypeDefLink) {
    let a = EntityDef::new("e-a", "A");
    let b = EntityDef::new("e-b", "B");
    builder.add_entity_def(a.clone()).unwrap();
    builder.add_entity_def(b.clone()).unwrap();
    (TypeDefLink::to(&a), TypeDefLink::to(&b))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn build_is_repeatable(names in type_names()) {
        let mut builder = ArchiveBuilder::new(fixed_properties());
        for (i, name) in names.iter().enumerate() {
            let _ = if i % 2 == 0 {
                builder.add_primitive_def(PrimitiveDef::new(
                    format!("p-{i}"),
                    name.as_str(),
                    PrimitiveDefCategory::String,
                ))
            } else {
                builder.add_entity_def(EntityDef::new(format!("e-{i}"), name.as_str()))
            };
        }

        let first = builder.build();
        let second = builder.build();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_registration_of_a_name_wins(names in type_names()) {
        let mut builder = ArchiveBuilder::new(fixed_properties());
        let mut seen = HashSet::new();
        for (i, name) in names.iter().enumerate() {
            let def = PrimitiveDef::new(format!("p-{i}"), name.as_str(), PrimitiveDefCategory::Int);
            let result = builder.add_primitive_def(def.clone());
            if seen.insert(name.clone()) {
                prop_assert!(result.is_ok());
                prop_assert_eq!(builder.get_primitive_def(name).unwrap(), &def);
            } else {
                let is_duplicate_name = matches!(result, Err(ArchiveError::DuplicateName { .. }));
                prop_assert!(is_duplicate_name);
                prop_assert_ne!(builder.get_primitive_def(name).unwrap().guid(), def.guid());
            }
        }

        let archive = builder.build();
        let emitted: Vec<_> = archive.attribute_type_defs().iter().map(|d| d.name().to_string()).collect();
        let mut expected = Vec::new();
        let mut firsts = HashSet::new();
        for name in &names {
            if firsts.insert(name) {
                expected.push(name.clone());
            }
        }
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn names_stay_unique_across_kinds(names in type_names()) {
        let mut builder = ArchiveBuilder::new(fixed_properties());
        for (i, name) in names.iter().enumerate() {
            let _ = if i % 2 == 0 {
                builder.add_primitive_def(PrimitiveDef::new(
                    format!("p-{i}"),
                    name.as_str(),
                    PrimitiveDefCategory::String,
                ))
            } else {
                builder.add_entity_def(EntityDef::new(format!("e-{i}"), name.as_str()))
            };
        }

        let archive = builder.build();
        let mut emitted = HashSet::new();
        for name in archive
            .attribute_type_defs()
            .iter()
            .map(|d| d.name())
            .chain(archive.new_type_defs().iter().map(|d| d.name()))
        {
            prop_assert!(emitted.insert(name.to_string()), "{} emitted twice", name);
        }
        let distinct: HashSet<_> = names.iter().cloned().collect();
        prop_assert_eq!(emitted, distinct);
    }

    #[test]
    fn second_relationship_collides_when_an_attribute_repeats(
        x1 in "[a-c]",
        y1 in "[a-c]",
        x2 in "[a-c]",
        y2 in "[a-c]",
    ) {
        let mut builder = ArchiveBuilder::new(fixed_properties());
        let (a, b) = linked_pair(&mut builder);
        builder
            .add_relationship_def(RelationshipDef::new(
                "r-1",
                "R1",
                RelationshipEndDef::new(a.clone(), x1.as_str()),
                RelationshipEndDef::new(b.clone(), y1.as_str()),
            ))
            .unwrap();
        let before = builder.endpoint_attribute_map().clone();

        let result = builder.add_relationship_def(RelationshipDef::new(
            "r-2",
            "R2",
            RelationshipEndDef::new(a, x2.as_str()),
            RelationshipEndDef::new(b, y2.as_str()),
        ));

        // A exposes y1, B exposes x1.
        let collides = x2 == x1 || y2 == y1;
        prop_assert_eq!(result.is_err(), collides);
        if collides {
            let is_endpoint_error =
                matches!(result, Err(ArchiveError::DuplicateEndpointAttribute { .. }));
            prop_assert!(is_endpoint_error);
            prop_assert_eq!(builder.endpoint_attribute_map(), &before);
            prop_assert!(builder.get_relationship_def("R2").is_err());
        }
    }
}
