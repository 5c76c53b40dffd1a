//! memcert: certificate provisioning scripts for trust scheme members
//!
//! This library renders, for a roster of scheme members, the OpenSSL shell
//! commands that issue each member's certificate, the extension config those
//! commands reference, and the list of signer file stems used downstream.
//!
//! The output stream is, in order:
//!
//! - one command block per member, each ending in a blank line
//! - the `[roles<n>]`/`[role_values<n>]` stanzas for all members
//! - the signer name list, one `"<n>-<symbol>",` line per member
//!
//! Nothing is executed and no files are written; the script is text for a
//! human or another tool to run.
//!
//! # Example
//!
//! ```rust
//! use memcert::config::GeneratorConfig;
//! use memcert::roster::builtin::builtin_roster;
//! use memcert::script::generator::{generate_script, Section};
//!
//! fn example() -> memcert::Result<()> {
//!     let script = generate_script(&builtin_roster(), &GeneratorConfig::default())?;
//!     script.write_to(&mut std::io::stdout().lock(), Section::All)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod script;

// Re-export commonly used types
pub use error::{ProvisionError, Result};
