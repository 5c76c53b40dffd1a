//! Roster and settings files.
//!
//! A roster file is a JSON object holding an optional `members` array and
//! any [`GeneratorConfig`] fields to override:
//!
//! ```json
//! {
//!   "start": 14,
//!   "members": [
//!     { "identifier": "237256", "display_name": "Industrial Metering Company", "role": "energy-data-provider" }
//!   ]
//! }
//! ```

use crate::config::GeneratorConfig;
use crate::error::{ProvisionError, Result};
use crate::roster::builtin::builtin_roster;
use crate::roster::member::MemberRecord;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Contents of a roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterFile {
    /// Members to provision; `None` means the built-in roster.
    #[serde(default)]
    pub members: Option<Vec<MemberRecord>>,

    /// Settings, given at the top level of the file.
    #[serde(flatten)]
    pub settings: GeneratorConfig,
}

impl RosterFile {
    /// Split into settings and the member list, falling back to the built-in roster.
    pub fn into_parts(self) -> (GeneratorConfig, Vec<MemberRecord>) {
        let members = self.members.unwrap_or_else(builtin_roster);
        (self.settings, members)
    }
}

/// Parse roster JSON.
pub fn parse_roster(json: &str) -> Result<RosterFile> {
    if json.trim().is_empty() {
        return Err(ProvisionError::RosterError(
            "Roster file is empty".to_string(),
        ));
    }

    let roster: RosterFile = serde_json::from_str(json)?;
    Ok(roster)
}

/// Read and parse a roster file.
///
/// # Example
///
/// ```rust,no_run
/// use memcert::roster::loader::load_roster_file;
/// use std::path::Path;
///
/// # fn example() -> memcert::error::Result<()> {
/// let (settings, members) = load_roster_file(Path::new("members.json"))?.into_parts();
/// println!("{} members from sequence {}", members.len(), settings.start);
/// # Ok(())
/// # }
/// ```
pub fn load_roster_file(path: &Path) -> Result<RosterFile> {
    let contents = fs::read_to_string(path)?;

    parse_roster(&contents).map_err(|e| match e {
        ProvisionError::RosterError(msg) => {
            ProvisionError::RosterError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_members_and_settings() {
        let roster = parse_roster(
            r#"{
                "start": 14,
                "validity_days": 30,
                "members": [
                    {"identifier": "100", "display_name": "Test Co", "role": "supplier"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(roster.settings.start, 14);
        assert_eq!(roster.settings.validity_days, 30);
        assert_eq!(roster.settings.scheme, "supply");

        let (_, members) = roster.into_parts();
        assert_eq!(members, vec![MemberRecord::new("100", "Test Co", "supplier")]);
    }

    #[test]
    fn test_settings_only_uses_builtin_members() {
        let (settings, members) = parse_roster(r#"{"start": 1}"#).unwrap().into_parts();
        assert_eq!(settings.start, 1);
        assert_eq!(members, builtin_roster());
    }

    #[test]
    fn test_explicit_empty_members() {
        let (_, members) = parse_roster(r#"{"members": []}"#).unwrap().into_parts();
        assert!(members.is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_roster("  \n"),
            Err(ProvisionError::RosterError(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_roster(r#"{"members": [{"identifier": "1"}]}"#),
            Err(ProvisionError::JsonError(_))
        ));
    }
}
