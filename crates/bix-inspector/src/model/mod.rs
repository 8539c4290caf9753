//! An in-memory object model that stands in for a live runtime.
//!
//! Objects live in an arena addressed by [`ObjectId`]. Types carry their
//! declared bases, their precomputed C3 resolution order, and their own
//! attribute table; everything else is either a callable or a plain value.
//! A namespace maps names onto objects, or marks a name as restricted so that
//! resolving it fails.

mod builder;
pub mod doc;
pub mod mro;

pub use builder::{Member, ModelBuilder, ObjectSpec, TypeSpec, python_str_repr};

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ResolveError;
use crate::provider::ReflectionProvider;

/// Handle to an object inside one [`ObjectModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// State of an object's documentation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Documentation {
    /// The object has no documentation attribute at all.
    Missing,
    /// The attribute exists but holds no text.
    #[default]
    Unset,
    /// Raw, uncleaned documentation text.
    Text(String),
}

impl Documentation {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing | Self::Unset => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeObject {
    pub name: String,
    pub bases: Vec<ObjectId>,
    /// Resolution order, the type itself first.
    pub mro: Vec<ObjectId>,
    /// Attributes defined directly on this type.
    pub attributes: BTreeMap<String, ObjectId>,
}

#[derive(Debug, Clone)]
pub enum ObjectKind {
    Type(TypeObject),
    Callable,
    Value,
}

#[derive(Debug, Clone)]
pub struct Object {
    pub type_name: String,
    pub module: Option<String>,
    pub documentation: Documentation,
    pub repr: String,
    pub kind: ObjectKind,
}

impl Object {
    #[must_use]
    pub const fn as_type(&self) -> Option<&TypeObject> {
        match &self.kind {
            ObjectKind::Type(ty) => Some(ty),
            ObjectKind::Callable | ObjectKind::Value => None,
        }
    }
}

/// What a namespace name is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Bound(ObjectId),
    Restricted { reason: String },
}

#[derive(Debug, Clone)]
pub struct ObjectModel {
    module: String,
    implementation: String,
    objects: Vec<Object>,
    bindings: BTreeMap<String, Binding>,
    error_root: Option<ObjectId>,
}

impl ObjectModel {
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    fn type_object(&self, id: ObjectId) -> Option<&TypeObject> {
        self.object(id).and_then(Object::as_type)
    }

    fn mro(&self, id: ObjectId) -> &[ObjectId] {
        self.type_object(id).map_or(&[], |ty| ty.mro.as_slice())
    }

    /// Inherited documentation for types: the first documented entry in the
    /// resolution order, skipping root types.
    fn inherited_doc(&self, id: ObjectId) -> Option<&str> {
        self.mro(id)
            .iter()
            .filter_map(|&ancestor| self.object(ancestor))
            .filter(|object| object.as_type().is_some_and(|ty| !ty.bases.is_empty()))
            .find_map(|object| object.documentation.as_text())
    }
}

impl ReflectionProvider for ObjectModel {
    type Handle = ObjectId;

    fn module_name(&self) -> &str {
        &self.module
    }

    fn implementation_note(&self) -> &str {
        &self.implementation
    }

    fn names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }

    fn lookup(&self, name: &str) -> Result<ObjectId, ResolveError> {
        match self.bindings.get(name) {
            Some(Binding::Bound(id)) if self.object(*id).is_some() => Ok(*id),
            Some(Binding::Restricted { reason }) => Err(ResolveError::AccessDenied {
                name: name.to_string(),
                reason: reason.clone(),
            }),
            Some(Binding::Bound(_)) | None => Err(ResolveError::Missing {
                name: name.to_string(),
            }),
        }
    }

    fn is_type(&self, value: &ObjectId) -> bool {
        self.type_object(*value).is_some()
    }

    fn is_callable(&self, value: &ObjectId) -> bool {
        self.object(*value).is_some_and(|object| {
            matches!(object.kind, ObjectKind::Type(_) | ObjectKind::Callable)
        })
    }

    fn is_subtype_of_error(&self, ty: &ObjectId) -> bool {
        self.error_root
            .is_some_and(|root| self.mro(*ty).contains(&root))
    }

    fn ancestry_of(&self, ty: &ObjectId) -> Vec<ObjectId> {
        self.mro(*ty).to_vec()
    }

    fn list_attributes(&self, ty: &ObjectId) -> BTreeSet<String> {
        self.mro(*ty)
            .iter()
            .filter_map(|&ancestor| self.type_object(ancestor))
            .flat_map(|ancestor| ancestor.attributes.keys().cloned())
            .collect()
    }

    fn attribute(&self, ty: &ObjectId, name: &str) -> Option<ObjectId> {
        self.mro(*ty)
            .iter()
            .filter_map(|&ancestor| self.type_object(ancestor))
            .find_map(|ancestor| ancestor.attributes.get(name).copied())
    }

    fn has_documentation(&self, value: &ObjectId) -> bool {
        self.object(*value)
            .is_some_and(|object| object.documentation != Documentation::Missing)
    }

    fn documentation_of(&self, value: &ObjectId) -> Option<String> {
        let object = self.object(*value)?;
        let raw = match &object.documentation {
            Documentation::Text(text) => Some(text.as_str()),
            Documentation::Unset if object.as_type().is_some() => self.inherited_doc(*value),
            Documentation::Unset | Documentation::Missing => None,
        }?;
        Some(doc::clean_doc(raw))
    }

    fn type_name_of(&self, value: &ObjectId) -> String {
        self.object(*value)
            .map(|object| object.type_name.clone())
            .unwrap_or_default()
    }

    fn name_of(&self, ty: &ObjectId) -> String {
        match self.object(*ty) {
            Some(Object {
                kind: ObjectKind::Type(ty),
                ..
            }) => ty.name.clone(),
            Some(object) => object.repr.clone(),
            None => String::new(),
        }
    }

    fn module_of(&self, value: &ObjectId) -> Option<String> {
        self.object(*value).and_then(|object| object.module.clone())
    }

    fn represent(&self, value: &ObjectId) -> String {
        self.object(*value)
            .map(|object| object.repr.clone())
            .unwrap_or_default()
    }
}
