//! Whole-roster script generation.
//!
//! A single pass over the roster folds every member into three sections:
//! command blocks, the roles config, and the signer name list. Nothing is
//! written until the pass has finished, so a failing member leaves the
//! output untouched.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::roster::member::MemberRecord;
use crate::script::commands::render_command_block;
use crate::script::roles::render_roles_stanza;
use crate::script::signers::render_signer_entry;
use std::io::Write;

/// Which part of the generated script to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Command blocks, then roles config, then signer names.
    #[default]
    All,
    Commands,
    Roles,
    Signers,
}

/// The three rendered sections of a provisioning script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedScript {
    /// Concatenated per-member command blocks.
    pub commands: String,

    /// Concatenated `[roles<n>]`/`[role_values<n>]` stanzas.
    pub roles: String,

    /// Concatenated signer name list entries.
    pub signers: String,
}

impl GeneratedScript {
    /// Text for a section. [`Section::All`] joins the three in contract order.
    pub fn section_text(&self, section: Section) -> String {
        match section {
            Section::All => format!("{}{}{}", self.commands, self.roles, self.signers),
            Section::Commands => self.commands.clone(),
            Section::Roles => self.roles.clone(),
            Section::Signers => self.signers.clone(),
        }
    }

    /// Write a section to `out` and flush it.
    pub fn write_to<W: Write>(&self, out: &mut W, section: Section) -> Result<()> {
        match section {
            Section::All => {
                out.write_all(self.commands.as_bytes())?;
                out.write_all(self.roles.as_bytes())?;
                out.write_all(self.signers.as_bytes())?;
            }
            Section::Commands => out.write_all(self.commands.as_bytes())?,
            Section::Roles => out.write_all(self.roles.as_bytes())?,
            Section::Signers => out.write_all(self.signers.as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}

/// Render the provisioning script for a roster.
///
/// Member `k` (0-indexed) gets sequence number `config.start + k`, used in
/// its command block, its `roles<n>` section and its name list entry.
///
/// # Example
///
/// ```
/// use memcert::config::GeneratorConfig;
/// use memcert::roster::builtin::builtin_roster;
/// use memcert::script::generator::generate_script;
///
/// # fn example() -> memcert::error::Result<()> {
/// let script = generate_script(&builtin_roster(), &GeneratorConfig::default())?;
/// assert!(script.signers.starts_with("\"6-industrial-metering-company\",\n"));
/// # Ok(())
/// # }
/// ```
pub fn generate_script(
    members: &[MemberRecord],
    config: &GeneratorConfig,
) -> Result<GeneratedScript> {
    let script = members.iter().enumerate().try_fold(
        GeneratedScript::default(),
        |mut script, (index, member)| -> Result<GeneratedScript> {
            let sequence = u64::from(config.start) + index as u64;
            tracing::debug!(sequence, member = %member.display_name, "rendering member");

            script
                .commands
                .push_str(&render_command_block(member, sequence, config));
            script
                .roles
                .push_str(&render_roles_stanza(member, sequence, config)?);
            script
                .signers
                .push_str(&render_signer_entry(&member.file_stem(sequence)));

            Ok(script)
        },
    )?;

    tracing::info!(members = members.len(), start = config.start, "script generated");
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionError;
    use crate::roster::builtin::builtin_roster;

    #[test]
    fn test_empty_roster() {
        let script = generate_script(&[], &GeneratorConfig::default()).unwrap();
        assert_eq!(script, GeneratedScript::default());
        assert_eq!(script.section_text(Section::All), "");
    }

    #[test]
    fn test_sequence_numbers_follow_position() {
        let config = GeneratorConfig {
            start: 40,
            ..GeneratorConfig::default()
        };
        let script = generate_script(&builtin_roster(), &config).unwrap();

        for (k, member) in builtin_roster().iter().enumerate() {
            let n = 40 + k;
            assert!(script
                .commands
                .contains(&format!("# {}. {} (role: {})\n", n, member.display_name, member.role)));
            assert!(script.roles.contains(&format!("[roles{}]\n", n)));
            assert!(script.signers.contains(&format!("\"{}-{}\",\n", n, member.symbol())));
        }
    }

    #[test]
    fn test_section_counts() {
        let script = generate_script(&builtin_roster(), &GeneratorConfig::default()).unwrap();

        assert_eq!(script.commands.matches("openssl genpkey").count(), 7);
        assert_eq!(script.roles.matches("[roles").count(), 7);
        assert_eq!(script.roles.matches("[role_values").count(), 7);
        assert_eq!(script.signers.lines().count(), 7);
    }

    #[test]
    fn test_failure_produces_nothing() {
        let members = vec![
            MemberRecord::new("1", "Fine Co", "supplier"),
            MemberRecord::new("x1", "Broken Co", "supplier"),
        ];
        let result = generate_script(&members, &GeneratorConfig::default());
        assert!(matches!(result, Err(ProvisionError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_write_to_matches_section_text() {
        let script = generate_script(&builtin_roster(), &GeneratorConfig::default()).unwrap();

        for section in [Section::All, Section::Commands, Section::Roles, Section::Signers] {
            let mut buf = Vec::new();
            script.write_to(&mut buf, section).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), script.section_text(section));
        }
    }

    #[test]
    fn test_write_to_closed_stream() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let script = generate_script(&builtin_roster(), &GeneratorConfig::default()).unwrap();
        let result = script.write_to(&mut Closed, Section::All);
        assert!(matches!(result, Err(ProvisionError::StorageError(_))));
    }
}
