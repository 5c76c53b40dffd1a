//! Per-member OpenSSL command blocks.

use crate::config::GeneratorConfig;
use crate::roster::member::MemberRecord;
use crate::script::signers::SignerFiles;

/// Escape forward slashes for use inside an `openssl req -subj` value.
fn escape_subject_value(value: &str) -> String {
    value.replace('/', "\\/")
}

/// Render the shell commands that provision one member's certificate.
///
/// The block generates an EC P-256 key, a CSR whose CN is the member's
/// directory URI, a certificate signed by the signing issuer with the
/// `roles<sequence>` extensions, and a bundle of that certificate followed
/// by the issuer certificate. It ends with a blank line.
///
/// # Example
///
/// ```
/// use memcert::config::GeneratorConfig;
/// use memcert::roster::member::MemberRecord;
/// use memcert::script::commands::render_command_block;
///
/// let member = MemberRecord::new("237256", "Industrial Metering Company", "energy-data-provider");
/// let block = render_command_block(&member, 6, &GeneratorConfig::default());
/// assert!(block.starts_with("# 6. Industrial Metering Company (role: energy-data-provider)\n"));
/// ```
pub fn render_command_block(
    member: &MemberRecord,
    sequence: u64,
    config: &GeneratorConfig,
) -> String {
    let files = SignerFiles::new(member.file_stem(sequence));
    let common_name = escape_subject_value(&config.member_uri(&member.identifier));

    let mut block = String::new();
    block.push_str(&format!(
        "# {}. {} (role: {})\n",
        sequence, member.display_name, member.role
    ));
    block.push_str(&format!(
        "openssl genpkey -algorithm EC -pkeyopt ec_paramgen_curve:P-256 -out {}\n",
        files.key
    ));
    block.push_str(&format!(
        "openssl req -new -key {} -out {} \\\n",
        files.key, files.csr
    ));
    block.push_str(&format!(
        "    -subj \"/C={}/ST={}/O={}/CN={}\"\n",
        config.country, config.state, member.display_name, common_name
    ));
    block.push_str(&format!(
        "openssl x509 -req -in {} -out {} -extfile {} -extensions roles{} \\\n",
        files.csr, files.cert, config.extfile, sequence
    ));
    block.push_str(&format!(
        "    -CA {} -CAkey {} -days {}\n",
        config.signing_ca_cert, config.signing_ca_key, config.validity_days
    ));
    block.push_str(&format!(
        "cat {} {} > {}\n",
        files.cert, config.signing_ca_cert, files.bundle
    ));
    block.push('\n');

    block
}
