//! Per-member OpenSSL extension stanzas.

use crate::config::{GeneratorConfig, APPLICATION_OID, ROLES_OID};
use crate::error::Result;
use crate::roster::member::MemberRecord;

/// Rule closing each stanza in the config section.
const STANZA_SEPARATOR: &str =
    "# ---------------------------------------------------------------------------";

/// Render the `[roles<sequence>]` and `[role_values<sequence>]` sections for one member.
///
/// `roles<sequence>` is the section the member's `openssl x509 -extensions`
/// refers to. It carries the directory URI as subjectAltName, the role list
/// and the application URI.
///
/// Fails when the identifier cannot produce an application number.
pub fn render_roles_stanza(
    member: &MemberRecord,
    sequence: u64,
    config: &GeneratorConfig,
) -> Result<String> {
    let application = member.application_number()?;

    let mut stanza = String::new();
    stanza.push_str(&format!("[roles{}]\n", sequence));
    stanza.push_str(&format!(
        "subjectAltName = URI:{}\n",
        config.member_uri(&member.identifier)
    ));
    stanza.push_str(&format!(
        "{}=ASN1:SEQUENCE:role_values{}\n",
        ROLES_OID, sequence
    ));
    stanza.push_str(&format!(
        "{}=ASN1:UTF8:{}\n",
        APPLICATION_OID,
        config.application_uri(application)
    ));
    stanza.push('\n');
    stanza.push_str(&format!("[role_values{}]\n", sequence));
    stanza.push_str(&format!(
        "value.1=UTF8:{}\n",
        config.role_uri(&member.role)
    ));
    stanza.push('\n');
    stanza.push_str(STANZA_SEPARATOR);
    stanza.push_str("\n\n");

    Ok(stanza)
}
