//! Member roster module.
//!
//! This module defines member records, the built-in roster, roster files and
//! the opt-in roster checks.

pub mod builtin;
pub mod loader;
pub mod member;
pub mod validate;
