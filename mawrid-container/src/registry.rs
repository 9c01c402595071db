//! Constructor descriptors and the binding table.
//!
//! Rust has no runtime constructor reflection, so each concrete type
//! describes its single constructor up front: the ordered list of parameter
//! types plus a factory that consumes the resolved arguments. The
//! [`Injectable`] trait is the typed way to provide that description;
//! [`Concrete`] and [`Constructor`] are the type-erased form stored in the
//! binding table.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{
    ConstructorProblem, DuplicateBindingError, MawridError, Result, UnconstructibleTypeError,
};
use crate::key::DependencyKey;

/// A type-erased resolved value.
pub type Instance = Box<dyn Any + Send + Sync>;

/// Type-erased constructor body.
///
/// Receives the already resolved arguments, in parameter order, and returns
/// the instance to hand out for the abstract type.
///
/// Factories run while the resolver holds its table's read lock, so they
/// must not call back into the resolver: a `register` from inside a factory
/// deadlocks, and a nested `resolve` deadlocks once a writer is queued.
pub type FactoryFn = Arc<dyn Fn(&mut Arguments) -> Result<Instance> + Send + Sync>;

/// A type the resolver can build by constructor injection.
///
/// An implementation describes exactly one constructor: the parameter types
/// it needs, in order, and how to build `Self` from them. Usually derived:
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// struct Shopper {
///     card: Box<dyn CreditCard>,
/// }
/// ```
///
/// Written by hand it looks like this:
///
/// ```
/// use mawrid_container::prelude::*;
///
/// struct Greeting(String);
///
/// impl Injectable for Greeting {
///     fn dependencies() -> Vec<DependencyKey> {
///         vec![DependencyKey::of::<String>()]
///     }
///
///     fn construct(args: &mut Arguments) -> Result<Self> {
///         Ok(Greeting(args.take()?))
///     }
/// }
/// ```
pub trait Injectable: Sized + 'static {
    /// Parameter types of the constructor, in declaration order.
    fn dependencies() -> Vec<DependencyKey>;

    /// Builds the value, taking one argument per declared parameter.
    fn construct(args: &mut Arguments) -> Result<Self>;
}

/// Resolved constructor arguments, consumed front to back.
pub struct Arguments {
    owner: DependencyKey,
    values: std::vec::IntoIter<(DependencyKey, Instance)>,
    taken: usize,
}

impl Arguments {
    pub(crate) fn new(owner: DependencyKey, values: Vec<(DependencyKey, Instance)>) -> Self {
        Self { owner, values: values.into_iter(), taken: 0 }
    }

    /// Takes the next argument as a `T`.
    ///
    /// # Errors
    /// [`MawridError::ConstructionFailed`] when no argument is left, or the
    /// next one is not a `T`.
    pub fn take<T: Send + Sync + 'static>(&mut self) -> Result<T> {
        let position = self.taken;
        let (key, value) = self.values.next().ok_or_else(|| {
            MawridError::construction(
                self.owner,
                format!(
                    "constructor asked for argument #{position} ({}) but only {position} were declared",
                    type_name::<T>()
                ),
            )
        })?;
        self.taken += 1;

        value.downcast::<T>().map(|b| *b).map_err(|_| {
            MawridError::construction(
                self.owner,
                format!(
                    "argument #{position} is {} but the constructor asked for {}",
                    key,
                    type_name::<T>()
                ),
            )
        })
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Fails if the constructor left declared arguments unused.
    pub(crate) fn finish(self) -> Result<()> {
        let left = self.values.len();
        if left > 0 {
            return Err(MawridError::construction(
                self.owner,
                format!(
                    "constructor used {} of {} declared arguments",
                    self.taken,
                    self.taken + left
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("owner", &self.owner)
            .field("taken", &self.taken)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// One constructor of a concrete type.
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<DependencyKey>,
    factory: FactoryFn,
}

impl Constructor {
    /// A constructor taking `parameters` in order.
    ///
    /// `factory` must not call back into the resolver (see [`FactoryFn`]).
    pub fn new(parameters: Vec<DependencyKey>, factory: FactoryFn) -> Self {
        Self { parameters, factory }
    }

    /// The constructor of `C`, producing an `A` through `From`.
    pub fn injectable<A, C>() -> Self
    where
        A: From<C> + Send + Sync + 'static,
        C: Injectable,
    {
        Self::new(
            C::dependencies(),
            Arc::new(|args: &mut Arguments| -> Result<Instance> {
                let concrete = C::construct(args)?;
                Ok(Box::new(A::from(concrete)) as Instance)
            }),
        )
    }

    /// A zero-parameter constructor using `C::default()`.
    pub fn default_of<A, C>() -> Self
    where
        A: From<C> + Send + Sync + 'static,
        C: Default + 'static,
    {
        Self::new(
            Vec::new(),
            Arc::new(|_: &mut Arguments| -> Result<Instance> {
                Ok(Box::new(A::from(C::default())) as Instance)
            }),
        )
    }

    pub fn parameters(&self) -> &[DependencyKey] {
        &self.parameters
    }

    pub(crate) fn invoke(&self, args: &mut Arguments) -> Result<Instance> {
        (self.factory)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Describes a concrete type and the constructors it offers.
///
/// Only descriptors with exactly one constructor can be bound.
#[derive(Debug, Clone)]
pub struct Concrete {
    key: DependencyKey,
    constructors: Vec<Constructor>,
}

impl Concrete {
    /// A descriptor with no constructors yet.
    pub fn new(key: DependencyKey) -> Self {
        Self { key, constructors: Vec::new() }
    }

    /// The descriptor for an [`Injectable`] type bound as `A`.
    pub fn of<A, C>() -> Self
    where
        A: From<C> + Send + Sync + 'static,
        C: Injectable,
    {
        Self::new(DependencyKey::of::<C>()).with_constructor(Constructor::injectable::<A, C>())
    }

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn key(&self) -> DependencyKey {
        self.key
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }
}

/// A registered abstract → concrete mapping.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub abstract_key: DependencyKey,
    pub concrete: DependencyKey,
    pub constructor: Constructor,
}

impl Binding {
    /// Checks that `concrete` has exactly one constructor and builds the binding.
    pub fn new(abstract_key: DependencyKey, concrete: Concrete) -> Result<Self> {
        let Concrete { key, mut constructors } = concrete;

        let problem = match constructors.len() {
            1 => None,
            0 => Some(ConstructorProblem::Missing),
            n => Some(ConstructorProblem::Ambiguous(n)),
        };
        if let Some(problem) = problem {
            return Err(MawridError::UnconstructibleType(UnconstructibleTypeError {
                concrete: key,
                bound_as: abstract_key,
                problem,
            }));
        }

        let constructor = constructors.remove(0);
        Ok(Self { abstract_key, concrete: key, constructor })
    }
}

/// The binding table.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    bindings: HashMap<DependencyKey, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding.
    ///
    /// # Errors
    /// [`MawridError::DuplicateBinding`] if the abstract key is already bound
    /// and `allow_override` is false. The existing binding is kept.
    pub fn insert(&mut self, binding: Binding, allow_override: bool) -> Result<()> {
        let key = binding.abstract_key;

        if let Some(existing) = self.bindings.get(&key) {
            if !allow_override {
                warn!(key = %key, existing = %existing.concrete, "Rejected duplicate binding");
                return Err(MawridError::DuplicateBinding(DuplicateBindingError {
                    key,
                    existing: existing.concrete,
                    rejected: binding.concrete,
                }));
            }
            warn!(key = %key, previous = %existing.concrete, now = %binding.concrete, "Overriding binding");
        }

        debug!(
            key = %key,
            concrete = %binding.concrete,
            parameters = binding.constructor.parameters().len(),
            "Registered binding"
        );
        self.bindings.insert(key, binding);
        Ok(())
    }

    pub fn get(&self, key: &DependencyKey) -> Option<&Binding> {
        self.bindings.get(key)
    }

    pub fn contains(&self, key: &DependencyKey) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn bindings(&self) -> &HashMap<DependencyKey, Binding> {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn keys(&self) -> Vec<DependencyKey> {
        self.bindings.keys().copied().collect()
    }
}
