//! Error types for registration and resolution.
//!
//! Every failure names the types involved and ends with a hint, so a broken
//! binding table can be fixed from the message alone.

use std::fmt;

use mawrid_support::rendering::render_chain;

use crate::key::DependencyKey;

/// Main error type for all Mawrid operations.
#[derive(Debug, thiserror::Error)]
pub enum MawridError {
    /// The abstract type already has a binding.
    #[error("{}", .0)]
    DuplicateBinding(DuplicateBindingError),

    /// A type on the resolution path has no binding.
    #[error("{}", .0)]
    UnresolvedType(UnresolvedTypeError),

    /// The concrete type does not offer exactly one constructor.
    #[error("{}", .0)]
    UnconstructibleType(UnconstructibleTypeError),

    /// The resolution path revisited a type that is still being resolved.
    #[error("{}", .0)]
    CyclicDependency(CyclicDependencyError),

    /// The constructor itself failed, or its arguments did not line up with
    /// the parameters it declared.
    #[error("Failed to construct {key}: {source}")]
    ConstructionFailed {
        key: DependencyKey,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MawridError {
    /// Wraps an arbitrary constructor failure.
    pub fn construction(
        key: DependencyKey,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        MawridError::ConstructionFailed { key, source: source.into() }
    }
}

/// Registering an abstract type that is already bound.
#[derive(Debug)]
pub struct DuplicateBindingError {
    /// The abstract type being registered.
    pub key: DependencyKey,
    /// The concrete type it is already bound to.
    pub existing: DependencyKey,
    /// The concrete type the rejected registration asked for.
    pub rejected: DependencyKey,
}

impl fmt::Display for DuplicateBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate binding: {} is already bound to {}",
            self.key, self.existing
        )?;
        write!(f, "\n  Rejected: {}", self.rejected)?;
        write!(
            f,
            "\n  Hint: Register each abstract type once, or enable allow_override in Settings"
        )
    }
}

/// Resolving a type that has no binding.
#[derive(Debug)]
pub struct UnresolvedTypeError {
    /// The type that could not be resolved.
    pub requested: DependencyKey,
    /// The type whose constructor needed it; `None` for the root request.
    pub required_by: Option<DependencyKey>,
    /// Bound types with similar names.
    pub suggestions: Vec<String>,
}

impl fmt::Display for UnresolvedTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not resolve type {}", self.requested)?;

        if let Some(ref parent) = self.required_by {
            write!(f, "\n  Required by: {parent}")?;
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {suggestion}")?;
            }
        }

        write!(
            f,
            "\n  Hint: Did you forget to call .register::<{}, _>()?",
            self.requested.short_name()
        )
    }
}

/// Why a concrete type cannot be used as a binding target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorProblem {
    /// The descriptor lists no constructor at all.
    Missing,
    /// The descriptor lists more than one; the count is attached.
    Ambiguous(usize),
}

/// Binding a concrete type that does not offer exactly one constructor.
#[derive(Debug)]
pub struct UnconstructibleTypeError {
    /// The concrete type.
    pub concrete: DependencyKey,
    /// The abstract type it was being bound to.
    pub bound_as: DependencyKey,
    pub problem: ConstructorProblem,
}

impl fmt::Display for UnconstructibleTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            ConstructorProblem::Missing => {
                write!(f, "Type {} has no constructor", self.concrete)?;
            }
            ConstructorProblem::Ambiguous(count) => {
                write!(
                    f,
                    "Type {} has {count} constructors, expected exactly one",
                    self.concrete
                )?;
            }
        }
        write!(f, "\n  While binding: {}", self.bound_as)?;
        write!(
            f,
            "\n  Hint: Implement Injectable (or derive it) to give the type a single constructor"
        )
    }
}

/// A resolution path that loops back on itself.
///
/// `chain` starts and ends with the same type, e.g. `[A, B, A]`.
#[derive(Debug)]
pub struct CyclicDependencyError {
    pub chain: Vec<DependencyKey>,
}

impl fmt::Display for CyclicDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.chain.iter().map(DependencyKey::short_name).collect();
        write!(f, "Cyclic dependency detected:\n  {}", render_chain(&names))?;
        write!(
            f,
            "\n  Hint: Break the cycle by removing one of these constructor parameters"
        )
    }
}

/// Convenient Result type for Mawrid operations.
pub type Result<T> = std::result::Result<T, MawridError>;
