//! # Mawrid Support
//!
//! Shared text helpers for the Mawrid IoC container:
//! - Rendering resolution chains and dependency trees
//! - Shortening fully qualified type names
//! - "Did you mean?" suggestions for unbound types

pub mod rendering;
