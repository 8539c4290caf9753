//! The reflection capability the inspection engine depends on.
//!
//! Everything the classifier and extractor learn about a symbol goes through
//! [`ReflectionProvider`]. A live runtime binding, a precomputed metadata
//! table ([`crate::model::ObjectModel`]), or a test double can all serve as
//! the provider.

use std::collections::BTreeSet;

use crate::error::ResolveError;

/// Read-only metadata queries over one namespace and the objects it binds.
pub trait ReflectionProvider {
    /// Opaque reference to a runtime object.
    type Handle: Clone + std::fmt::Debug;

    /// Name of the namespace's own module; the fallback declaring module.
    fn module_name(&self) -> &str;

    /// Provenance note attached to every function record.
    fn implementation_note(&self) -> &str;

    /// Every name the namespace exposes. May be unsorted or contain duplicates.
    fn names(&self) -> Vec<String>;

    /// Resolve a bound name to its object.
    fn lookup(&self, name: &str) -> Result<Self::Handle, ResolveError>;

    /// Whether the object is itself a type/class definition.
    fn is_type(&self, value: &Self::Handle) -> bool;

    /// Whether the object can be invoked.
    fn is_callable(&self, value: &Self::Handle) -> bool;

    /// Whether a type descends from the runtime's universal error root.
    fn is_subtype_of_error(&self, ty: &Self::Handle) -> bool;

    /// Linearized ancestors, the type itself first.
    fn ancestry_of(&self, ty: &Self::Handle) -> Vec<Self::Handle>;

    /// Every attribute name visible on a type, inherited ones included.
    fn list_attributes(&self, ty: &Self::Handle) -> BTreeSet<String>;

    /// Attribute lookup following the type's resolution order.
    fn attribute(&self, ty: &Self::Handle, name: &str) -> Option<Self::Handle>;

    /// Whether the object exposes a documentation attribute at all.
    fn has_documentation(&self, value: &Self::Handle) -> bool;

    /// Cleaned documentation text, `None` when unset.
    fn documentation_of(&self, value: &Self::Handle) -> Option<String>;

    /// Name of the object's runtime type (`type(obj).__name__`).
    fn type_name_of(&self, value: &Self::Handle) -> String;

    /// Declared name of a type (`cls.__name__`).
    fn name_of(&self, ty: &Self::Handle) -> String;

    /// Declaring module attribute, if the object has one.
    fn module_of(&self, value: &Self::Handle) -> Option<String>;

    /// Canonical textual representation (`repr(obj)`).
    fn represent(&self, value: &Self::Handle) -> String;
}
