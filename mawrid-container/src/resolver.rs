//! # The Resolver
//!
//! Maps abstract types to concrete ones and builds instances by recursive
//! constructor injection.
//!
//! ```text
//! register::<A, C>()      A ──► C { constructor(P1, P2, ..) }
//!
//! resolve::<A>()          resolve P1, resolve P2, .. (in order)
//!                         C::construct(P1, P2, ..) ──► A::from(C)
//! ```
//!
//! # Examples
//! ```rust
//! use mawrid_container::prelude::*;
//!
//! trait CreditCard: Send + Sync {
//!     fn charge(&self) -> String;
//! }
//!
//! #[derive(Default)]
//! struct Visa;
//!
//! impl CreditCard for Visa {
//!     fn charge(&self) -> String {
//!         "Charging with the Visa!".into()
//!     }
//! }
//!
//! mawrid_container::implements!(Visa => dyn CreditCard);
//!
//! struct Shopper {
//!     card: Box<dyn CreditCard>,
//! }
//!
//! impl Injectable for Shopper {
//!     fn dependencies() -> Vec<DependencyKey> {
//!         vec![DependencyKey::of::<Box<dyn CreditCard>>()]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> Result<Self> {
//!         Ok(Shopper { card: args.take()? })
//!     }
//! }
//!
//! let resolver = Resolver::new();
//! resolver.register::<Shopper, Shopper>().unwrap();
//! resolver.register_default::<Box<dyn CreditCard>, Visa>().unwrap();
//!
//! let shopper: Shopper = resolver.resolve().unwrap();
//! assert_eq!(shopper.card.charge(), "Charging with the Visa!");
//! ```

use std::any::type_name;
use std::collections::HashSet;
use std::fmt;

use mawrid_support::rendering::{TreeEntry, render_tree, suggest_similar};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{CyclicDependencyError, MawridError, Result, UnresolvedTypeError};
use crate::graph::{DependencyGraph, GraphValidator};
use crate::key::DependencyKey;
use crate::module::Module;
use crate::registry::{Arguments, Binding, Concrete, Constructor, Injectable, Instance, Registry};
use crate::settings::Settings;

/// The IoC container.
///
/// Registration takes the table's write lock; resolutions share the read
/// lock, so a `Resolver` behind an `Arc` can serve many threads once it is
/// populated.
pub struct Resolver {
    registry: RwLock<Registry>,
    settings: Settings,
}

impl Resolver {
    /// An empty resolver with default [`Settings`].
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Registration ──

    /// Binds abstract type `A` to the [`Injectable`] type `C`.
    ///
    /// `A` may be `C` itself (`register::<Shopper, Shopper>()`), or any type
    /// `C` converts into, such as `Box<dyn CreditCard>` (see
    /// [`implements!`](crate::implements)).
    ///
    /// # Errors
    /// [`MawridError::DuplicateBinding`] if `A` is already bound.
    pub fn register<A, C>(&self) -> Result<()>
    where
        A: From<C> + Send + Sync + 'static,
        C: Injectable,
    {
        self.bind(DependencyKey::of::<A>(), Concrete::of::<A, C>())
    }

    /// Binds `A` to `C` built through `C::default()`, a zero-parameter
    /// constructor.
    pub fn register_default<A, C>(&self) -> Result<()>
    where
        A: From<C> + Send + Sync + 'static,
        C: Default + 'static,
    {
        let concrete = Concrete::new(DependencyKey::of::<C>())
            .with_constructor(Constructor::default_of::<A, C>());
        self.bind(DependencyKey::of::<A>(), concrete)
    }

    /// Binds `abstract_key` to a hand-built concrete descriptor.
    ///
    /// The descriptor's constructor must produce a value of the type named by
    /// `abstract_key`; a mismatch surfaces at resolve time as
    /// [`MawridError::ConstructionFailed`].
    ///
    /// # Errors
    /// - [`MawridError::UnconstructibleType`] unless `concrete` has exactly
    ///   one constructor
    /// - [`MawridError::DuplicateBinding`] if `abstract_key` is already bound
    pub fn bind(&self, abstract_key: DependencyKey, concrete: Concrete) -> Result<()> {
        let binding = Binding::new(abstract_key, concrete)?;
        self.registry
            .write()
            .insert(binding, self.settings.allow_override)
    }

    /// Installs every binding of `module`.
    ///
    /// Not atomic: if a registration fails partway, the bindings the module
    /// registered before it stay installed.
    pub fn install(&self, module: &dyn Module) -> Result<()> {
        info!(module = module.name(), "Installing module");
        module.register(self)
    }

    // ── Resolution ──

    /// Builds a fresh `T` with its whole dependency tree.
    ///
    /// # Errors
    /// - [`MawridError::UnresolvedType`] if `T` or any transitive
    ///   dependency has no binding
    /// - [`MawridError::CyclicDependency`] if the tree loops
    /// - [`MawridError::ConstructionFailed`] if a constructor fails
    #[instrument(skip(self), name = "resolve", fields(ty = type_name::<T>()))]
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<T> {
        let key = DependencyKey::of::<T>();
        let instance = self.resolve_key(&key)?;

        instance.downcast::<T>().map(|b| *b).map_err(|_| {
            MawridError::construction(
                key,
                format!("Type mismatch: binding did not produce a {}", type_name::<T>()),
            )
        })
    }

    /// Type-erased [`resolve`](Self::resolve).
    pub fn resolve_key(&self, key: &DependencyKey) -> Result<Instance> {
        let registry = self.registry.read();
        Resolution::new(&registry, self.settings.max_suggestions).resolve(key)
    }

    // ── Inspection ──

    /// Checks the whole binding table for missing bindings and cycles.
    pub fn validate(&self) -> Result<()> {
        let registry = self.registry.read();
        let graph: DependencyGraph = registry
            .bindings()
            .iter()
            .map(|(key, binding)| (*key, binding.constructor.parameters().to_vec()))
            .collect();

        GraphValidator::new(graph, self.settings.max_suggestions).validate()
    }

    /// Renders the tree `resolve::<T>()` would build, without constructing
    /// anything.
    ///
    /// ```text
    /// Shopper
    /// └─ Box<dyn CreditCard> => Visa
    /// ```
    pub fn dependency_tree<T: ?Sized + 'static>(&self) -> Result<String> {
        let registry = self.registry.read();
        let mut entries = Vec::new();
        Resolution::new(&registry, self.settings.max_suggestions).walk(
            &DependencyKey::of::<T>(),
            0,
            &mut entries,
        )?;
        Ok(render_tree(&entries))
    }

    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        self.registry.read().contains(&DependencyKey::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    /// Abstract keys currently bound, in no particular order.
    pub fn registered_keys(&self) -> Vec<DependencyKey> {
        self.registry.read().keys()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registered", &self.len())
            .field("settings", &self.settings)
            .finish()
    }
}

/// One resolution over a locked binding table.
///
/// Tracks the keys on the active path so a revisit is reported as a cycle
/// instead of recursing forever.
struct Resolution<'a> {
    registry: &'a Registry,
    path: Vec<DependencyKey>,
    active: HashSet<DependencyKey>,
    max_suggestions: usize,
}

impl<'a> Resolution<'a> {
    fn new(registry: &'a Registry, max_suggestions: usize) -> Self {
        Self {
            registry,
            path: Vec::new(),
            active: HashSet::new(),
            max_suggestions,
        }
    }

    fn resolve(&mut self, key: &DependencyKey) -> Result<Instance> {
        let binding = self.enter(key)?;
        let parameters = binding.constructor.parameters();

        trace!(key = %key, concrete = %binding.concrete, parameters = parameters.len(), "Resolving");

        let mut values = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            values.push((*parameter, self.resolve(parameter)?));
        }
        self.leave(key);

        let mut args = Arguments::new(binding.concrete, values);
        let instance = binding.constructor.invoke(&mut args)?;
        args.finish()?;

        debug!(key = %key, concrete = %binding.concrete, "Constructed");
        Ok(instance)
    }

    fn walk(&mut self, key: &DependencyKey, depth: usize, entries: &mut Vec<TreeEntry>) -> Result<()> {
        let binding = self.enter(key)?;

        entries.push(TreeEntry {
            depth,
            requested: key.short_name(),
            concrete: (binding.concrete != *key).then(|| binding.concrete.short_name()),
        });
        for parameter in binding.constructor.parameters() {
            self.walk(parameter, depth + 1, entries)?;
        }

        self.leave(key);
        Ok(())
    }

    /// Pushes `key` on the active path and returns its binding.
    fn enter(&mut self, key: &DependencyKey) -> Result<&'a Binding> {
        if self.active.contains(key) {
            let start = self.path.iter().position(|k| k == key).unwrap_or(0);
            let mut chain = self.path[start..].to_vec();
            chain.push(*key);

            warn!(cycle = ?chain, "Cyclic dependency detected");
            return Err(MawridError::CyclicDependency(CyclicDependencyError { chain }));
        }

        let registry = self.registry;
        let binding = registry.get(key).ok_or_else(|| {
            MawridError::UnresolvedType(UnresolvedTypeError {
                requested: *key,
                required_by: self.path.last().copied(),
                suggestions: self.suggestions_for(key),
            })
        })?;

        self.active.insert(*key);
        self.path.push(*key);
        Ok(binding)
    }

    fn leave(&mut self, key: &DependencyKey) {
        self.path.pop();
        self.active.remove(key);
    }

    fn suggestions_for(&self, key: &DependencyKey) -> Vec<String> {
        let names: Vec<&str> = self.registry.bindings().keys().map(|k| k.type_name()).collect();
        suggest_similar(key.type_name(), &names, self.max_suggestions)
    }
}

// ═══════════════════════════════════════════
// Trait-object bindings
// ═══════════════════════════════════════════

/// Lets a concrete type be bound to `Box<dyn Trait>` and `Arc<dyn Trait>`.
///
/// Expands to `From` impls, so it must be invoked in the crate that defines
/// either the concrete type or the trait.
///
/// ```
/// use mawrid_container::implements;
///
/// trait CreditCard: Send + Sync {}
/// struct Visa;
/// impl CreditCard for Visa {}
///
/// implements!(Visa => dyn CreditCard);
///
/// let card: Box<dyn CreditCard> = Box::from(Visa);
/// # let _ = card;
/// ```
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $($abstract:ty),+ $(,)?) => {
        $(
            impl ::core::convert::From<$concrete> for ::std::boxed::Box<$abstract> {
                fn from(value: $concrete) -> Self {
                    ::std::boxed::Box::new(value)
                }
            }

            impl ::core::convert::From<$concrete> for ::std::sync::Arc<$abstract> {
                fn from(value: $concrete) -> Self {
                    ::std::sync::Arc::new(value)
                }
            }
        )+
    };
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Resolver;
    pub use crate::error::{MawridError, Result};
    pub use crate::key::DependencyKey;
    pub use crate::module::Module;
    pub use crate::registry::{Arguments, Concrete, Constructor, Injectable};
    pub use crate::settings::Settings;
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    trait CreditCard: Send + Sync {
        fn charge(&self) -> String;
    }

    #[derive(Default)]
    struct Visa;

    impl CreditCard for Visa {
        fn charge(&self) -> String {
            "Charging with the Visa!".into()
        }
    }

    #[derive(Default)]
    struct MasterCard;

    impl CreditCard for MasterCard {
        fn charge(&self) -> String {
            "Swiping the MasterCard!".into()
        }
    }

    crate::implements!(Visa => dyn CreditCard);
    crate::implements!(MasterCard => dyn CreditCard);

    struct Shopper {
        card: Box<dyn CreditCard>,
    }

    impl Injectable for Shopper {
        fn dependencies() -> Vec<DependencyKey> {
            vec![DependencyKey::of::<Box<dyn CreditCard>>()]
        }

        fn construct(args: &mut Arguments) -> Result<Self> {
            Ok(Shopper { card: args.take()? })
        }
    }

    fn shop() -> Resolver {
        let resolver = Resolver::new();
        resolver.register::<Shopper, Shopper>().unwrap();
        resolver.register_default::<Box<dyn CreditCard>, Visa>().unwrap();
        resolver
    }

    #[test]
    fn resolve_shopper_with_visa() {
        let shopper: Shopper = shop().resolve().unwrap();
        assert_eq!(shopper.card.charge(), "Charging with the Visa!");
    }

    #[test]
    fn resolve_unregistered_root() {
        let resolver = Resolver::new();
        match resolver.resolve::<Shopper>() {
            Err(MawridError::UnresolvedType(e)) => {
                assert_eq!(e.requested, DependencyKey::of::<Shopper>());
                assert!(e.required_by.is_none());
            }
            Err(other) => panic!("Expected UnresolvedType, got: {other:?}"),
            Ok(_) => panic!("Expected UnresolvedType, got a Shopper"),
        }
    }

    #[test]
    fn resolve_missing_dependency_names_it() {
        let resolver = Resolver::new();
        resolver.register::<Shopper, Shopper>().unwrap();

        let err = match resolver.resolve::<Shopper>() {
            Err(MawridError::UnresolvedType(e)) => e,
            Err(other) => panic!("Expected UnresolvedType, got: {other:?}"),
            Ok(_) => panic!("Expected UnresolvedType, got a Shopper"),
        };
        assert_eq!(err.requested, DependencyKey::of::<Box<dyn CreditCard>>());
        assert_eq!(err.required_by, Some(DependencyKey::of::<Shopper>()));
        assert!(err.to_string().contains("CreditCard"));
    }

    #[test]
    fn duplicate_registration_keeps_original() {
        let resolver = shop();
        let err = resolver
            .register_default::<Box<dyn CreditCard>, MasterCard>()
            .unwrap_err();
        assert!(matches!(err, MawridError::DuplicateBinding(_)));

        let shopper: Shopper = resolver.resolve().unwrap();
        assert_eq!(shopper.card.charge(), "Charging with the Visa!");
    }

    #[test]
    fn override_when_allowed() {
        let resolver = Resolver::with_settings(Settings::default().allow_override(true));
        resolver.register::<Shopper, Shopper>().unwrap();
        resolver.register_default::<Box<dyn CreditCard>, Visa>().unwrap();
        resolver.register_default::<Box<dyn CreditCard>, MasterCard>().unwrap();

        let shopper: Shopper = resolver.resolve().unwrap();
        assert_eq!(shopper.card.charge(), "Swiping the MasterCard!");
    }

    #[test]
    fn each_resolve_builds_a_fresh_tree() {
        let calls = Arc::new(AtomicU32::new(0));
        let resolver = Resolver::new();
        let counter = calls.clone();
        resolver
            .bind(
                DependencyKey::of::<u32>(),
                Concrete::new(DependencyKey::of::<u32>()).with_constructor(Constructor::new(
                    vec![],
                    Arc::new(move |_: &mut Arguments| -> Result<Instance> {
                        Ok(Box::new(counter.fetch_add(1, Ordering::SeqCst)) as Instance)
                    }),
                )),
            )
            .unwrap();

        assert_eq!(resolver.resolve::<u32>().unwrap(), 0);
        assert_eq!(resolver.resolve::<u32>().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn parameters_resolve_in_declaration_order() {
        struct First;
        struct Second;
        struct Third;
        struct Pair(First, Second, Third);

        let order = Arc::new(Mutex::new(Vec::new()));
        let resolver = Resolver::new();

        fn leaf<T: Send + Sync + 'static>(
            order: &Arc<Mutex<Vec<&'static str>>>,
            name: &'static str,
            value: fn() -> T,
        ) -> Concrete {
            let order = order.clone();
            Concrete::new(DependencyKey::of::<T>()).with_constructor(Constructor::new(
                vec![],
                Arc::new(move |_: &mut Arguments| -> Result<Instance> {
                    order.lock().push(name);
                    Ok(Box::new(value()) as Instance)
                }),
            ))
        }

        resolver.bind(DependencyKey::of::<Third>(), leaf(&order, "third", || Third)).unwrap();
        resolver.bind(DependencyKey::of::<First>(), leaf(&order, "first", || First)).unwrap();
        resolver.bind(DependencyKey::of::<Second>(), leaf(&order, "second", || Second)).unwrap();
        resolver
            .bind(
                DependencyKey::of::<Pair>(),
                Concrete::new(DependencyKey::of::<Pair>()).with_constructor(Constructor::new(
                    vec![
                        DependencyKey::of::<First>(),
                        DependencyKey::of::<Second>(),
                        DependencyKey::of::<Third>(),
                    ],
                    Arc::new(|args: &mut Arguments| -> Result<Instance> {
                        Ok(Box::new(Pair(args.take()?, args.take()?, args.take()?)) as Instance)
                    }),
                )),
            )
            .unwrap();

        let _pair: Pair = resolver.resolve().unwrap();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    struct Chicken;
    struct Egg;

    impl Injectable for Chicken {
        fn dependencies() -> Vec<DependencyKey> {
            vec![DependencyKey::of::<Egg>()]
        }

        fn construct(args: &mut Arguments) -> Result<Self> {
            let _: Egg = args.take()?;
            Ok(Chicken)
        }
    }

    impl Injectable for Egg {
        fn dependencies() -> Vec<DependencyKey> {
            vec![DependencyKey::of::<Chicken>()]
        }

        fn construct(args: &mut Arguments) -> Result<Self> {
            let _: Chicken = args.take()?;
            Ok(Egg)
        }
    }

    #[test]
    fn cycle_is_reported_not_overflowed() {
        let resolver = Resolver::new();
        resolver.register::<Chicken, Chicken>().unwrap();
        resolver.register::<Egg, Egg>().unwrap();

        match resolver.resolve::<Chicken>() {
            Err(MawridError::CyclicDependency(e)) => {
                assert_eq!(
                    e.chain,
                    vec![
                        DependencyKey::of::<Chicken>(),
                        DependencyKey::of::<Egg>(),
                        DependencyKey::of::<Chicken>(),
                    ]
                );
            }
            Err(other) => panic!("Expected CyclicDependency, got: {other:?}"),
            Ok(_) => panic!("Expected CyclicDependency, got a Chicken"),
        }
        assert!(matches!(resolver.validate(), Err(MawridError::CyclicDependency(_))));
    }

    #[test]
    fn constructor_must_use_declared_arguments() {
        struct Lazy;

        impl Injectable for Lazy {
            fn dependencies() -> Vec<DependencyKey> {
                vec![DependencyKey::of::<u8>()]
            }

            fn construct(_: &mut Arguments) -> Result<Self> {
                Ok(Lazy)
            }
        }

        let resolver = Resolver::new();
        resolver.register_default::<u8, u8>().unwrap();
        resolver.register::<Lazy, Lazy>().unwrap();

        assert!(matches!(
            resolver.resolve::<Lazy>(),
            Err(MawridError::ConstructionFailed { .. })
        ));
    }

    #[test]
    fn factory_error_propagates() {
        let resolver = Resolver::new();
        resolver
            .bind(
                DependencyKey::of::<String>(),
                Concrete::new(DependencyKey::of::<String>()).with_constructor(Constructor::new(
                    vec![],
                    Arc::new(|_: &mut Arguments| -> Result<Instance> {
                        Err(MawridError::construction(DependencyKey::of::<String>(), "offline"))
                    }),
                )),
            )
            .unwrap();

        let err = resolver.resolve::<String>().unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn wrong_instance_type_is_a_construction_failure() {
        let resolver = Resolver::new();
        resolver
            .bind(
                DependencyKey::of::<String>(),
                Concrete::new(DependencyKey::of::<u8>())
                    .with_constructor(Constructor::default_of::<u8, u8>()),
            )
            .unwrap();

        let err = resolver.resolve::<String>().unwrap_err();
        assert!(err.to_string().contains("Type mismatch"));
    }

    #[test]
    fn bind_without_constructor_fails() {
        let resolver = Resolver::new();
        let err = resolver
            .bind(DependencyKey::of::<Visa>(), Concrete::new(DependencyKey::of::<Visa>()))
            .unwrap_err();
        assert!(matches!(err, MawridError::UnconstructibleType(_)));
        assert!(resolver.is_empty());
    }

    #[test]
    fn dependency_tree_shows_bindings() {
        let tree = shop().dependency_tree::<Shopper>().unwrap();
        assert_eq!(tree, "Shopper\n└─ Box<dyn CreditCard> => Visa\n");
    }

    #[test]
    fn dependency_tree_reports_cycle() {
        let resolver = Resolver::new();
        resolver.register::<Chicken, Chicken>().unwrap();
        resolver.register::<Egg, Egg>().unwrap();

        match resolver.dependency_tree::<Chicken>().unwrap_err() {
            MawridError::CyclicDependency(e) => {
                assert_eq!(
                    e.chain,
                    vec![
                        DependencyKey::of::<Chicken>(),
                        DependencyKey::of::<Egg>(),
                        DependencyKey::of::<Chicken>(),
                    ]
                );
            }
            other => panic!("Expected CyclicDependency, got: {other:?}"),
        }
    }

    #[test]
    fn dependency_tree_reports_missing_binding() {
        let resolver = Resolver::new();
        resolver.register::<Shopper, Shopper>().unwrap();

        match resolver.dependency_tree::<Shopper>().unwrap_err() {
            MawridError::UnresolvedType(e) => {
                assert_eq!(e.requested, DependencyKey::of::<Box<dyn CreditCard>>());
                assert_eq!(e.required_by, Some(DependencyKey::of::<Shopper>()));
            }
            other => panic!("Expected UnresolvedType, got: {other:?}"),
        }
    }

    #[test]
    fn suggestions_respect_configured_cap() {
        #[derive(Default)]
        struct ShopperA;
        #[derive(Default)]
        struct ShopperB;
        #[derive(Default)]
        struct ShopperC;

        fn unresolved(resolver: &Resolver) -> UnresolvedTypeError {
            resolver.register_default::<ShopperA, ShopperA>().unwrap();
            resolver.register_default::<ShopperB, ShopperB>().unwrap();
            resolver.register_default::<ShopperC, ShopperC>().unwrap();
            match resolver.resolve::<Shopper>() {
                Err(MawridError::UnresolvedType(e)) => e,
                Err(other) => panic!("Expected UnresolvedType, got: {other:?}"),
                Ok(_) => panic!("Expected UnresolvedType, got a Shopper"),
            }
        }

        let capped = Resolver::with_settings(Settings::default().max_suggestions(1));
        assert_eq!(capped.settings().max_suggestions, 1);
        let err = unresolved(&capped);
        assert_eq!(err.suggestions.len(), 1);
        assert!(err.suggestions[0].contains("Shopper"));

        let uncapped = Resolver::new();
        assert_eq!(unresolved(&uncapped).suggestions.len(), 3);
    }

    #[test]
    fn suggests_other_wrapper_of_same_trait() {
        let resolver = Resolver::new();
        resolver.register_default::<Arc<dyn CreditCard>, Visa>().unwrap();

        match resolver.resolve::<Box<dyn CreditCard>>() {
            Err(MawridError::UnresolvedType(e)) => {
                assert_eq!(e.suggestions.len(), 1);
                assert!(e.suggestions[0].contains("Arc<dyn"));
            }
            Err(other) => panic!("Expected UnresolvedType, got: {other:?}"),
            Ok(_) => panic!("Expected UnresolvedType, got a card"),
        }
    }

    #[test]
    fn validate_reports_missing_binding() {
        let resolver = Resolver::new();
        resolver.register::<Shopper, Shopper>().unwrap();
        assert!(matches!(resolver.validate(), Err(MawridError::UnresolvedType(_))));

        assert!(shop().validate().is_ok());
    }

    #[test]
    fn concurrent_resolution() {
        let resolver = Arc::new(shop());

        std::thread::scope(|s| {
            for _ in 0..4 {
                let resolver = resolver.clone();
                s.spawn(move || {
                    for _ in 0..50 {
                        let shopper: Shopper = resolver.resolve().unwrap();
                        assert_eq!(shopper.card.charge(), "Charging with the Visa!");
                    }
                });
            }
        });
    }

    #[test]
    fn introspection() {
        let resolver = shop();
        assert_eq!(resolver.len(), 2);
        assert!(resolver.is_registered::<Box<dyn CreditCard>>());
        assert!(!resolver.is_registered::<Visa>());
        assert_eq!(resolver.registered_keys().len(), 2);

        let debug = format!("{resolver:?}");
        assert!(debug.contains("Resolver"));
        assert!(debug.contains("registered: 2"));
    }
}
