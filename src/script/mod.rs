//! Provisioning script rendering.
//!
//! This module renders the shell command blocks, the OpenSSL extension
//! config and the signer name list for a roster.

pub mod commands;
pub mod generator;
pub mod roles;
pub mod signers;
