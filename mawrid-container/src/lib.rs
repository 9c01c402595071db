//! Core resolver implementation for Mawrid.

pub mod error;
mod graph;
pub mod key;
pub mod module;
pub mod registry;
pub mod resolver;
pub mod settings;

pub use error::{MawridError, Result};
pub use key::DependencyKey;
pub use module::Module;
pub use registry::{Arguments, Concrete, Constructor, Injectable, Instance};
pub use resolver::{Resolver, prelude};
pub use settings::Settings;
