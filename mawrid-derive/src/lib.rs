//! Derive support for Mawrid.
//!
//! Re-exports the `#[derive(Injectable)]` macro.

pub use mawrid_macros::Injectable;
