//! Errors raised while registering content into an archive builder.
//!
//! Every variant is a logic error: the caller is describing an internally
//! inconsistent type system, and retrying the same call can never succeed.
//! Variants carry the rendered form of both colliding items so a caller can
//! report the problem without going back to the registries.

pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArchiveError {
    #[error("type name `{name}` is blank or contains whitespace")]
    MalformedName { name: String },

    #[error("no name supplied to look up a {category}")]
    MissingName { category: &'static str },

    #[error("duplicate {category} named `{name}`: {existing} and {duplicate}")]
    DuplicateName {
        name: String,
        category: &'static str,
        existing: String,
        duplicate: String,
    },

    #[error("type name `{name}` is already used by {existing}; cannot add {duplicate}")]
    DuplicateTypeName {
        name: String,
        existing: String,
        duplicate: String,
    },

    #[error("guid `{guid}` is already used by {existing}; cannot add {duplicate}")]
    DuplicateGuid {
        guid: String,
        existing: String,
        duplicate: String,
    },

    #[error("attribute `{attribute}` is declared more than once on type `{type_name}`")]
    DuplicateAttribute { type_name: String, attribute: String },

    #[error(
        "relationship `{relationship}` introduces attribute `{attribute}` on entity type \
         `{entity_type}` (traversing to `{other_entity_type}`), but `{entity_type}` already \
         exposes an attribute with that name"
    )]
    DuplicateEndpointAttribute {
        relationship: String,
        entity_type: String,
        other_entity_type: String,
        attribute: String,
    },

    #[error("duplicate {category} instance with guid `{guid}`: {existing} and {duplicate}")]
    DuplicateInstance {
        guid: String,
        category: &'static str,
        existing: String,
        duplicate: String,
    },

    #[error("no {category} named `{name}` has been added to the archive")]
    UnknownType { name: String, category: &'static str },

    #[error("no {category} instance with guid `{guid}` has been added to the archive")]
    UnknownInstance { guid: String, category: &'static str },
}
