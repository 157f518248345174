use crate::error::{ArchiveError, Result};

/// Type names are used as lookup keys by every archive consumer, so they must
/// be non-empty and free of whitespace.
pub fn check_type_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ArchiveError::MalformedName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Reject an empty lookup key before touching any table.
pub(crate) fn require_name(name: &str, category: &'static str) -> Result<()> {
    if name.is_empty() {
        return Err(ArchiveError::MissingName { category });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_style_names() {
        for name in ["string", "GlossaryTerm", "map<string,int>", "array<Referenceable>"] {
            assert!(check_type_name(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_blank_and_whitespace() {
        for name in ["", "Glossary Term", " string", "tab\there", "line\nbreak", "nb\u{00a0}sp"] {
            assert!(
                matches!(check_type_name(name), Err(ArchiveError::MalformedName { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_lookup_key_is_missing_name() {
        assert_eq!(
            require_name("", "EntityDef"),
            Err(ArchiveError::MissingName { category: "EntityDef" })
        );
        assert!(require_name("Asset", "EntityDef").is_ok());
    }
}
