//! Type identifiers used as binding-table keys.
//!
//! A [`DependencyKey`] is the resolver's handle for a type: the key of a
//! binding, the name of a constructor parameter, and the unit of resolution.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use mawrid_support::rendering::shorten_type_name;

/// Identifies a type in the binding table.
///
/// Equality and hashing use only the [`TypeId`]; the type name is kept for
/// error messages.
///
/// # Examples
/// ```
/// use mawrid_container::key::DependencyKey;
///
/// trait CreditCard {}
///
/// let key = DependencyKey::of::<Box<dyn CreditCard>>();
/// assert!(key.type_name().contains("CreditCard"));
/// assert_eq!(key, DependencyKey::of::<Box<dyn CreditCard>>());
/// ```
#[derive(Clone, Copy)]
pub struct DependencyKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl DependencyKey {
    /// Creates the key for type `T`. `T` may be unsized.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Creates a key from a raw [`TypeId`] and its type name.
    ///
    /// Prefer [`DependencyKey::of`]; this exists for generated code and
    /// hand-built [`Concrete`](crate::registry::Concrete) descriptors.
    #[inline]
    pub fn from_raw(type_id: TypeId, type_name: &'static str) -> Self {
        Self { type_id, type_name }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The fully qualified type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The type name with module paths stripped, e.g. `Box<dyn CreditCard>`.
    pub fn short_name(&self) -> String {
        shorten_type_name(self.type_name)
    }
}

impl PartialEq for DependencyKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for DependencyKey {}

impl Hash for DependencyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DependencyKey({})", self.type_name)
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}
