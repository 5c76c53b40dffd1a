//! Opt-in roster checks.
//!
//! Rendering never calls these on its own; the CLI runs them under `--check`.

use crate::error::{ProvisionError, Result};
use crate::roster::member::MemberRecord;
use std::collections::HashSet;

/// Check a roster, returning the first problem found.
///
/// - identifiers are decimal and unique
/// - display names are non-empty and map to unique symbols
/// - roles are non-empty slugs of lowercase letters, digits and hyphens
pub fn validate_roster(members: &[MemberRecord]) -> Result<()> {
    let mut identifiers = HashSet::new();
    let mut symbols = HashSet::new();

    for member in members {
        member.numeric_identifier()?;

        if !identifiers.insert(member.identifier.as_str()) {
            return Err(ProvisionError::ValidationError(format!(
                "Duplicate identifier: {}",
                member.identifier
            )));
        }

        if member.display_name.trim().is_empty() {
            return Err(ProvisionError::ValidationError(format!(
                "Member {} has an empty display name",
                member.identifier
            )));
        }

        if !symbols.insert(member.symbol()) {
            return Err(ProvisionError::ValidationError(format!(
                "Display name '{}' collides with another member's file names",
                member.display_name
            )));
        }

        validate_role(member)?;
    }

    Ok(())
}

fn validate_role(member: &MemberRecord) -> Result<()> {
    let is_slug = !member.role.is_empty()
        && member
            .role
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

    if is_slug {
        Ok(())
    } else {
        Err(ProvisionError::ValidationError(format!(
            "Member {} has invalid role '{}'",
            member.identifier, member.role
        )))
    }
}
