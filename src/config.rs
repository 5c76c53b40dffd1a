//! Generator settings.
//!
//! Every literal that ends up in the generated script lives here, with
//! defaults matching the trust scheme's current provisioning layout.

use serde::Deserialize;

/// OID of the extension listing a member's roles.
pub const ROLES_OID: &str = "1.3.6.1.4.1.62329.1.1";

/// OID of the extension carrying the member's application URI.
pub const APPLICATION_OID: &str = "1.3.6.1.4.1.62329.1.2";

/// Settings applied to every member block and stanza.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sequence number given to the first member.
    pub start: u32,

    /// Certificate of the signing issuer, also appended to each bundle.
    pub signing_ca_cert: String,

    /// Private key of the signing issuer.
    pub signing_ca_key: String,

    /// Validity of issued member certificates.
    pub validity_days: u32,

    /// Extension file passed to `openssl x509 -extfile`.
    pub extfile: String,

    /// Subject country (`C=`).
    pub country: String,

    /// Subject state or province (`ST=`).
    pub state: String,

    /// Base URL of the member directory.
    pub directory_url: String,

    /// Base URL of the scheme registry.
    pub registry_url: String,

    /// Scheme name used in application and role URIs.
    pub scheme: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: 6,
            signing_ca_cert: "5-signing-issuer-ca.pem".to_string(),
            signing_ca_key: "5-signing-issuer-key.pem".to_string(),
            validity_days: 365,
            extfile: "../scripts/roles.cnf".to_string(),
            country: "GB".to_string(),
            state: "London".to_string(),
            directory_url: "https://directory.core.trust.ib1.org".to_string(),
            registry_url: "https://registry.core.trust.ib1.org".to_string(),
            scheme: "supply".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Canonical directory URI of a member.
    pub fn member_uri(&self, identifier: &str) -> String {
        format!("{}/member/{}", self.directory_url, identifier)
    }

    /// Application URI derived from a member's application number.
    pub fn application_uri(&self, application: u64) -> String {
        format!(
            "{}/scheme/{}/application/{}",
            self.directory_url, self.scheme, application
        )
    }

    /// Registry URI of a role slug.
    pub fn role_uri(&self, role: &str) -> String {
        format!("{}/scheme/{}/role/{}", self.registry_url, self.scheme, role)
    }
}
