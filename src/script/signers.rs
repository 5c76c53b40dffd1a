//! Signer file naming and the signer name list.
//!
//! Every file a member's command block creates hangs off one stem,
//! `<sequence>-<symbol>`. The same stem is what downstream signing code
//! loads as `certs/<stem>-cert-bundle.pem` and `certs/<stem>-key.pem`.

/// Files produced for one member by its command block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerFiles {
    pub stem: String,
    pub key: String,
    pub csr: String,
    pub cert: String,
    pub bundle: String,
}

impl SignerFiles {
    /// Derive all file names from a stem.
    pub fn new(stem: impl Into<String>) -> Self {
        let stem = stem.into();
        Self {
            key: format!("{}-key.pem", stem),
            csr: format!("{}-csr.pem", stem),
            cert: format!("{}-cert.pem", stem),
            bundle: format!("{}-cert-bundle.pem", stem),
            stem,
        }
    }
}

/// One entry of the signer name list: the quoted stem and a trailing comma.
///
/// The comma is kept on every entry, the last one included, so the list
/// can be spliced straight into a list literal.
pub fn render_signer_entry(stem: &str) -> String {
    format!("\"{}\",\n", stem)
}
