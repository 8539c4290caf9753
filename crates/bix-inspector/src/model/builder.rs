//! Incremental construction of an [`ObjectModel`].

use std::collections::{BTreeMap, HashMap};

use super::mro::linearize;
use super::{Binding, Documentation, Object, ObjectId, ObjectKind, ObjectModel, TypeObject};
use crate::error::ModelError;

const DEFAULT_IMPLEMENTATION: &str = "C (CPython interpreter)";

/// Kind of attribute defined directly on a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Instance method (`method_descriptor`).
    Method,
    /// Class method, bound to the class on access.
    ClassMethod,
    /// Static method.
    StaticMethod,
    /// Protocol slot wrapper (`wrapper_descriptor`).
    Slot,
    /// Computed attribute (`getset_descriptor`), not callable.
    Descriptor,
    /// Stored field (`member_descriptor`), not callable.
    Field,
    /// Plain class-level value, not callable.
    Data { type_name: String, repr: String },
}

impl Member {
    fn type_name(&self) -> &str {
        match self {
            Self::Method => "method_descriptor",
            Self::ClassMethod | Self::StaticMethod => "builtin_function_or_method",
            Self::Slot => "wrapper_descriptor",
            Self::Descriptor => "getset_descriptor",
            Self::Field => "member_descriptor",
            Self::Data { type_name, .. } => type_name.as_str(),
        }
    }

    const fn is_callable(&self) -> bool {
        matches!(
            self,
            Self::Method | Self::ClassMethod | Self::StaticMethod | Self::Slot
        )
    }
}

/// Declaration of a type, consumed by [`ModelBuilder::define_type`].
#[derive(Debug, Clone)]
pub struct TypeSpec {
    name: String,
    module: Option<String>,
    metaclass: String,
    bases: Vec<ObjectId>,
    documentation: Documentation,
    members: Vec<(String, Member)>,
}

impl TypeSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            metaclass: "type".to_string(),
            bases: Vec::new(),
            documentation: Documentation::Unset,
            members: Vec::new(),
        }
    }

    /// Declaring module; defaults to the builder's namespace module.
    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    #[must_use]
    pub fn metaclass(mut self, name: impl Into<String>) -> Self {
        self.metaclass = name.into();
        self
    }

    #[must_use]
    pub fn base(mut self, base: ObjectId) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub fn bases(mut self, bases: &[ObjectId]) -> Self {
        self.bases.extend_from_slice(bases);
        self
    }

    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.documentation = Documentation::Text(text.into());
        self
    }

    #[must_use]
    pub fn member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.members.push((name.into(), member));
        self
    }

    #[must_use]
    pub fn methods(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::Method)
    }

    #[must_use]
    pub fn class_methods(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::ClassMethod)
    }

    #[must_use]
    pub fn static_methods(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::StaticMethod)
    }

    #[must_use]
    pub fn slots(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::Slot)
    }

    #[must_use]
    pub fn descriptors(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::Descriptor)
    }

    #[must_use]
    pub fn fields(self, names: &[&str]) -> Self {
        self.members_of(names, &Member::Field)
    }

    /// Class-level value such as `__hash__ = None`.
    #[must_use]
    pub fn data(self, name: &str, type_name: &str, repr: &str) -> Self {
        self.member(
            name,
            Member::Data {
                type_name: type_name.to_string(),
                repr: repr.to_string(),
            },
        )
    }

    fn members_of(mut self, names: &[&str], member: &Member) -> Self {
        self.members
            .extend(names.iter().map(|name| ((*name).to_string(), member.clone())));
        self
    }
}

/// Declaration of a non-type object (function, callable instance, value).
#[derive(Debug, Clone)]
pub struct ObjectSpec {
    type_name: String,
    repr: String,
    module: Option<String>,
    documentation: Documentation,
}

impl ObjectSpec {
    #[must_use]
    pub fn new(type_name: impl Into<String>, repr: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            repr: repr.into(),
            module: None,
            documentation: Documentation::Unset,
        }
    }

    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.documentation = Documentation::Text(text.into());
        self
    }

    #[must_use]
    pub fn documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = documentation;
        self
    }
}

#[derive(Debug)]
pub struct ModelBuilder {
    module: String,
    implementation: String,
    objects: Vec<Object>,
    types_by_name: HashMap<(String, String), ObjectId>,
    bindings: BTreeMap<String, Binding>,
    error_root: Option<ObjectId>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            implementation: DEFAULT_IMPLEMENTATION.to_string(),
            objects: Vec::new(),
            types_by_name: HashMap::new(),
            bindings: BTreeMap::new(),
            error_root: None,
        }
    }

    #[must_use]
    pub fn implementation(mut self, note: impl Into<String>) -> Self {
        self.implementation = note.into();
        self
    }

    /// Define a type, computing its resolution order from already-defined bases.
    pub fn define_type(&mut self, spec: TypeSpec) -> Result<ObjectId, ModelError> {
        let module = spec.module.unwrap_or_else(|| self.module.clone());
        let key = (module.clone(), spec.name.clone());
        if self.types_by_name.contains_key(&key) {
            return Err(ModelError::DuplicateType { name: spec.name });
        }

        let mut base_orders = Vec::with_capacity(spec.bases.len());
        for (index, base) in spec.bases.iter().enumerate() {
            let Some(base_type) = self.objects.get(base.0).and_then(Object::as_type) else {
                return Err(ModelError::UnknownBase {
                    name: spec.name,
                    base: format!("#{}", base.0),
                });
            };
            if spec.bases[..index].contains(base) {
                return Err(ModelError::DuplicateBase {
                    name: spec.name,
                    base: base_type.name.clone(),
                });
            }
            base_orders.push(base_type.mro.clone());
        }

        let id = ObjectId(self.objects.len());
        let Some(mro) = linearize(id, &spec.bases, &base_orders) else {
            let bases = spec
                .bases
                .iter()
                .filter_map(|base| self.objects.get(base.0).and_then(Object::as_type))
                .map(|base| base.name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ModelError::InconsistentHierarchy {
                name: spec.name,
                bases,
            });
        };

        let repr = if module == "builtins" {
            format!("<class '{}'>", spec.name)
        } else {
            format!("<class '{module}.{}'>", spec.name)
        };
        let doc_member = match &spec.documentation {
            Documentation::Text(text) => Member::Data {
                type_name: "str".to_string(),
                repr: python_str_repr(text),
            },
            Documentation::Unset | Documentation::Missing => Member::Data {
                type_name: "NoneType".to_string(),
                repr: "None".to_string(),
            },
        };

        self.objects.push(Object {
            type_name: spec.metaclass,
            module: Some(module.clone()),
            documentation: spec.documentation,
            repr,
            kind: ObjectKind::Type(TypeObject {
                name: spec.name.clone(),
                bases: spec.bases,
                mro,
                attributes: BTreeMap::new(),
            }),
        });

        let mut attributes = BTreeMap::new();
        let declared_doc = spec.members.iter().any(|(name, _)| name == "__doc__");
        let members = spec
            .members
            .into_iter()
            .chain((!declared_doc).then(|| ("__doc__".to_string(), doc_member)));
        for (name, member) in members {
            let member_id = self.push_member(&spec.name, &name, &member);
            attributes.insert(name, member_id);
        }
        if let Some(ObjectKind::Type(ty)) = self.objects.get_mut(id.0).map(|o| &mut o.kind) {
            ty.attributes = attributes;
        }

        self.types_by_name.insert(key, id);
        Ok(id)
    }

    /// Add a callable that is not a type.
    pub fn callable(&mut self, spec: ObjectSpec) -> ObjectId {
        self.push_object(spec, ObjectKind::Callable)
    }

    /// Add a plain, non-callable value.
    pub fn value(&mut self, spec: ObjectSpec) -> ObjectId {
        self.push_object(spec, ObjectKind::Value)
    }

    /// Raw documentation of an existing object, for instances that expose
    /// their type's documentation.
    #[must_use]
    pub fn documentation_of(&self, id: ObjectId) -> Documentation {
        self.objects
            .get(id.0)
            .map(|object| object.documentation.clone())
            .unwrap_or_default()
    }

    /// Find a type defined in the builder's own module by name.
    #[must_use]
    pub fn type_id(&self, name: &str) -> Option<ObjectId> {
        self.type_id_in(&self.module, name)
    }

    #[must_use]
    pub fn type_id_in(&self, module: &str, name: &str) -> Option<ObjectId> {
        self.types_by_name
            .get(&(module.to_string(), name.to_string()))
            .copied()
    }

    /// Bind a namespace name; rebinding replaces the previous binding.
    pub fn bind(&mut self, name: impl Into<String>, id: ObjectId) {
        self.bindings.insert(name.into(), Binding::Bound(id));
    }

    /// Expose a name whose resolution always fails with access denied.
    pub fn restrict(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.bindings.insert(
            name.into(),
            Binding::Restricted {
                reason: reason.into(),
            },
        );
    }

    pub fn set_error_root(&mut self, id: ObjectId) -> Result<(), ModelError> {
        match self.objects.get(id.0) {
            Some(object) if object.as_type().is_some() => {
                self.error_root = Some(id);
                Ok(())
            }
            Some(object) => Err(ModelError::InvalidErrorRoot {
                name: object.repr.clone(),
            }),
            None => Err(ModelError::UnknownObject {
                name: format!("#{}", id.0),
            }),
        }
    }

    #[must_use]
    pub fn build(self) -> ObjectModel {
        ObjectModel {
            module: self.module,
            implementation: self.implementation,
            objects: self.objects,
            bindings: self.bindings,
            error_root: self.error_root,
        }
    }

    fn push_object(&mut self, spec: ObjectSpec, kind: ObjectKind) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(Object {
            type_name: spec.type_name,
            module: spec.module,
            documentation: spec.documentation,
            repr: spec.repr,
            kind,
        });
        id
    }

    fn push_member(&mut self, owner: &str, name: &str, member: &Member) -> ObjectId {
        let repr = match member {
            Member::Method | Member::ClassMethod | Member::StaticMethod => {
                format!("<method '{name}' of '{owner}' objects>")
            }
            Member::Slot => format!("<slot wrapper '{name}' of '{owner}' objects>"),
            Member::Descriptor => format!("<attribute '{name}' of '{owner}' objects>"),
            Member::Field => format!("<member '{name}' of '{owner}' objects>"),
            Member::Data { repr, .. } => repr.clone(),
        };
        let kind = if member.is_callable() {
            ObjectKind::Callable
        } else {
            ObjectKind::Value
        };
        let id = ObjectId(self.objects.len());
        self.objects.push(Object {
            type_name: member.type_name().to_string(),
            module: None,
            documentation: Documentation::Unset,
            repr,
            kind,
        });
        id
    }
}

/// Render a string the way the host runtime's `repr` does: single quotes
/// unless the text contains a single quote and no double quote.
#[must_use]
pub fn python_str_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ReflectionProvider;
    use pretty_assertions::assert_eq;

    fn names(model: &ObjectModel, ids: &[ObjectId]) -> Vec<String> {
        ids.iter().map(|id| model.name_of(id)).collect()
    }

    #[test]
    fn diamond_hierarchy_uses_c3_order() {
        let mut builder = ModelBuilder::new("demo");
        let object = builder.define_type(TypeSpec::new("object")).expect("object");
        let a = builder
            .define_type(TypeSpec::new("A").base(object))
            .expect("A");
        let b = builder.define_type(TypeSpec::new("B").base(a)).expect("B");
        let c = builder.define_type(TypeSpec::new("C").base(a)).expect("C");
        let d = builder
            .define_type(TypeSpec::new("D").bases(&[b, c]))
            .expect("D");
        let model = builder.build();

        assert_eq!(
            names(&model, &model.ancestry_of(&d)),
            vec!["D", "B", "C", "A", "object"]
        );
    }

    #[test]
    fn inconsistent_bases_are_rejected() {
        let mut builder = ModelBuilder::new("demo");
        let object = builder.define_type(TypeSpec::new("object")).expect("object");
        let a = builder
            .define_type(TypeSpec::new("A").base(object))
            .expect("A");
        let b = builder.define_type(TypeSpec::new("B").base(a)).expect("B");

        let error = builder
            .define_type(TypeSpec::new("Bad").bases(&[a, b]))
            .expect_err("A before its subclass B cannot linearize");
        assert_eq!(
            error,
            ModelError::InconsistentHierarchy {
                name: "Bad".into(),
                bases: "A, B".into(),
            }
        );
    }

    #[test]
    fn duplicate_base_and_duplicate_type_are_rejected() {
        let mut builder = ModelBuilder::new("demo");
        let object = builder.define_type(TypeSpec::new("object")).expect("object");
        assert!(matches!(
            builder.define_type(TypeSpec::new("Twice").bases(&[object, object])),
            Err(ModelError::DuplicateBase { .. })
        ));
        assert!(matches!(
            builder.define_type(TypeSpec::new("object")),
            Err(ModelError::DuplicateType { .. })
        ));
    }

    #[test]
    fn members_become_objects_with_callability() {
        let mut builder = ModelBuilder::new("demo");
        let ty = builder
            .define_type(
                TypeSpec::new("thing")
                    .methods(&["run"])
                    .descriptors(&["size"])
                    .data("__hash__", "NoneType", "None"),
            )
            .expect("thing");
        let model = builder.build();

        let run = model.attribute(&ty, "run").expect("run");
        let size = model.attribute(&ty, "size").expect("size");
        let doc = model.attribute(&ty, "__doc__").expect("implicit __doc__");
        assert!(model.is_callable(&run));
        assert_eq!(model.type_name_of(&run), "method_descriptor");
        assert!(!model.is_callable(&size));
        assert_eq!(model.represent(&doc), "None");
        assert!(
            !model.is_callable(&model.attribute(&ty, "__hash__").expect("hash"))
        );
    }

    #[test]
    fn error_root_must_be_a_type() {
        let mut builder = ModelBuilder::new("demo");
        let value = builder.value(ObjectSpec::new("int", "1"));
        assert!(matches!(
            builder.set_error_root(value),
            Err(ModelError::InvalidErrorRoot { .. })
        ));
    }

    #[test]
    fn string_repr_picks_quotes_and_escapes() {
        assert_eq!(python_str_repr("builtins"), "'builtins'");
        assert_eq!(python_str_repr(""), "''");
        assert_eq!(python_str_repr("it's"), "\"it's\"");
        assert_eq!(python_str_repr("a\nb"), "'a\\nb'");
        assert_eq!(python_str_repr("both ' and \""), "'both \\' and \"'");
    }
}
