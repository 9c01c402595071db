//! # Mawrid — a minimal IoC container for Rust
//!
//! Bind abstract types to concrete ones, then let the [`Resolver`] build
//! whole object graphs by constructor injection.
//!
//! ```
//! use mawrid::{Injectable, Resolver, implements};
//!
//! trait CreditCard: Send + Sync {
//!     fn charge(&self) -> String;
//! }
//!
//! #[derive(Injectable)]
//! struct Visa;
//!
//! impl CreditCard for Visa {
//!     fn charge(&self) -> String {
//!         "Charging with the Visa!".to_string()
//!     }
//! }
//!
//! implements!(Visa => dyn CreditCard);
//!
//! #[derive(Injectable)]
//! struct Shopper {
//!     card: Box<dyn CreditCard>,
//! }
//!
//! let resolver = Resolver::new();
//! resolver.register::<Shopper, Shopper>()?;
//! resolver.register::<Box<dyn CreditCard>, Visa>()?;
//!
//! let shopper: Shopper = resolver.resolve()?;
//! assert_eq!(shopper.card.charge(), "Charging with the Visa!");
//! # Ok::<(), mawrid::MawridError>(())
//! ```

pub use mawrid_container::*;
pub use mawrid_derive::*;
pub use mawrid_support::*;
