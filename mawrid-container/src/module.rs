//! Modules: groups of related registrations.
//!
//! Instead of one long registration block, split bindings by area and
//! install each group:
//!
//! ```rust,ignore
//! resolver.install(&PaymentsModule)?;
//! resolver.install(&CheckoutModule)?;
//! ```

use crate::error::Result;
use crate::resolver::Resolver;

/// A named set of bindings installed into a [`Resolver`] in one step.
pub trait Module: Send + Sync {
    /// Registers this module's bindings.
    ///
    /// Called once per [`Resolver::install`]. The first failing registration
    /// aborts the install and is returned as is.
    fn register(&self, resolver: &Resolver) -> Result<()>;

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
