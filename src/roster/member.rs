//! Member records.

use crate::error::{ProvisionError, Result};
use serde::Deserialize;

/// Multiplier applied to a member identifier to obtain its application number.
const APPLICATION_FACTOR: u64 = 7;

/// A trust scheme member to provision a certificate for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    /// Numeric directory identifier, kept verbatim.
    pub identifier: String,

    /// Organisation name as it appears in the certificate subject.
    pub display_name: String,

    /// Role slug within the scheme (e.g. `supplier`).
    pub role: String,
}

impl MemberRecord {
    /// Create a new member record.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            role: role.into(),
        }
    }

    /// Filename-safe form of the display name.
    ///
    /// Lowercases the name and turns each space into a hyphen. Nothing else
    /// is touched, so punctuation survives as-is.
    ///
    /// # Example
    ///
    /// ```
    /// use memcert::roster::member::MemberRecord;
    ///
    /// let member = MemberRecord::new("582373", "Green Bank of London", "financial-service-provider");
    /// assert_eq!(member.symbol(), "green-bank-of-london");
    /// ```
    pub fn symbol(&self) -> String {
        self.display_name.to_lowercase().replace(' ', "-")
    }

    /// Stem shared by every file generated for this member, e.g. `6-industrial-metering-company`.
    pub fn file_stem(&self, sequence: u64) -> String {
        format!("{}-{}", sequence, self.symbol())
    }

    /// Identifier parsed as an integer.
    pub fn numeric_identifier(&self) -> Result<u64> {
        if self.identifier.is_empty() || !self.identifier.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProvisionError::InvalidIdentifier(format!(
                "'{}' ({}) is not a decimal number",
                self.identifier, self.display_name
            )));
        }

        self.identifier.parse::<u64>().map_err(|_| {
            ProvisionError::IdentifierOverflow(format!(
                "'{}' ({}) does not fit in 64 bits",
                self.identifier, self.display_name
            ))
        })
    }

    /// Application number embedded in the application URI: identifier × 7.
    pub fn application_number(&self) -> Result<u64> {
        self.numeric_identifier()?
            .checked_mul(APPLICATION_FACTOR)
            .ok_or_else(|| {
                ProvisionError::IdentifierOverflow(format!(
                    "'{}' ({}) times {} does not fit in 64 bits",
                    self.identifier, self.display_name, APPLICATION_FACTOR
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lowercases_and_hyphenates() {
        let member = MemberRecord::new("1", "Precise Farm Automation Co", "x");
        assert_eq!(member.symbol(), "precise-farm-automation-co");
    }

    #[test]
    fn test_symbol_keeps_punctuation() {
        let member = MemberRecord::new("1", "Smith & Sons, Ltd.", "x");
        assert_eq!(member.symbol(), "smith-&-sons,-ltd.");
    }

    #[test]
    fn test_symbol_replaces_every_space() {
        let member = MemberRecord::new("1", "A  B", "x");
        assert_eq!(member.symbol(), "a--b");
    }

    #[test]
    fn test_file_stem() {
        let member = MemberRecord::new("237256", "Industrial Metering Company", "x");
        assert_eq!(member.file_stem(6), "6-industrial-metering-company");
    }

    #[test]
    fn test_application_number() {
        let member = MemberRecord::new("237256", "Industrial Metering Company", "x");
        assert_eq!(member.application_number().unwrap(), 1660792);
    }

    #[test]
    fn test_application_number_leading_zeros() {
        let member = MemberRecord::new("007", "Bond", "x");
        assert_eq!(member.application_number().unwrap(), 49);
    }

    #[test]
    fn test_non_numeric_identifier() {
        for bad in ["", "12a", "+12", "-5", " 12"] {
            let member = MemberRecord::new(bad, "Name", "x");
            assert!(matches!(
                member.application_number(),
                Err(ProvisionError::InvalidIdentifier(_))
            ));
        }
    }

    #[test]
    fn test_identifier_overflow() {
        let member = MemberRecord::new(u64::MAX.to_string(), "Huge", "x");
        assert!(matches!(
            member.application_number(),
            Err(ProvisionError::IdentifierOverflow(_))
        ));

        let member = MemberRecord::new("99999999999999999999999", "Huger", "x");
        assert!(matches!(
            member.numeric_identifier(),
            Err(ProvisionError::IdentifierOverflow(_))
        ));
    }
}
