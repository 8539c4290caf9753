//! Category-specific metadata extraction.

pub mod doc;
pub mod protocol;

use bix_core::enums::Category;
use bix_core::records::{
    CatalogEntry, ConstantRecord, FunctionRecord, OtherRecord, TypeRecord,
};

use crate::provider::ReflectionProvider;

/// Split a type's visible attribute names into public and protocol methods.
///
/// `__dunder__` names are protocol methods whether or not they are callable.
/// Other underscore-prefixed names are dropped. What remains counts as a
/// public method only if the attribute is callable. Both lists are sorted.
pub fn partition_methods<P: ReflectionProvider>(
    provider: &P,
    ty: &P::Handle,
) -> (Vec<String>, Vec<String>) {
    let mut public = Vec::new();
    let mut protocol = Vec::new();
    for name in provider.list_attributes(ty) {
        if name.starts_with('_') {
            if is_dunder(&name) {
                protocol.push(name);
            }
        } else if provider
            .attribute(ty, &name)
            .is_some_and(|attr| provider.is_callable(&attr))
        {
            public.push(name);
        }
    }
    public.sort();
    protocol.sort();
    (public, protocol)
}

fn is_dunder(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

/// Builds records for classified symbols.
#[derive(Debug)]
pub struct MetadataExtractor<'p, P> {
    provider: &'p P,
    doc_max_lines: usize,
}

impl<'p, P: ReflectionProvider> MetadataExtractor<'p, P> {
    #[must_use]
    pub const fn new(provider: &'p P) -> Self {
        Self {
            provider,
            doc_max_lines: doc::DEFAULT_MAX_LINES,
        }
    }

    #[must_use]
    pub const fn with_doc_max_lines(mut self, lines: usize) -> Self {
        self.doc_max_lines = lines;
        self
    }

    /// Build the record the category calls for.
    pub fn extract(&self, name: &str, handle: &P::Handle, category: Category) -> CatalogEntry {
        match category {
            Category::Function => CatalogEntry::Function(self.extract_function(name, handle)),
            Category::Type => CatalogEntry::Type(self.extract_type(name, handle)),
            Category::ExceptionType => {
                CatalogEntry::ExceptionType(self.extract_type(name, handle))
            }
            Category::Constant => CatalogEntry::Constant(self.extract_constant(name, handle)),
            Category::Other => CatalogEntry::Other(self.extract_other(name, handle)),
        }
    }

    pub fn extract_function(&self, name: &str, handle: &P::Handle) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            runtime_type_name: self.provider.type_name_of(handle),
            declaring_module: self.declaring_module(handle),
            is_callable: self.provider.is_callable(handle),
            documentation_summary: self.summary(handle),
            implementation_note: self.provider.implementation_note().to_string(),
            triggered_protocol_method: protocol::triggered_protocol_method(name)
                .map(str::to_string),
        }
    }

    pub fn extract_type(&self, name: &str, handle: &P::Handle) -> TypeRecord {
        let (public_method_names, protocol_method_names) =
            partition_methods(self.provider, handle);
        TypeRecord {
            name: name.to_string(),
            runtime_type_name: self.provider.type_name_of(handle),
            declaring_module: self.declaring_module(handle),
            is_callable: self.provider.is_callable(handle),
            documentation_summary: self.summary(handle),
            ancestry_chain: self
                .provider
                .ancestry_of(handle)
                .iter()
                .map(|ancestor| self.provider.name_of(ancestor))
                .collect(),
            public_method_names,
            protocol_method_names,
        }
    }

    pub fn extract_constant(&self, name: &str, handle: &P::Handle) -> ConstantRecord {
        let documentation_summary = if self.provider.has_documentation(handle) {
            self.summary(handle)
        } else {
            doc::SINGLETON_CONSTANT.to_string()
        };
        ConstantRecord {
            name: name.to_string(),
            literal_value_rendering: self.provider.represent(handle),
            runtime_type_name: self.provider.type_name_of(handle),
            declaring_module: self.provider.module_name().to_string(),
            documentation_summary,
        }
    }

    pub fn extract_other(&self, name: &str, handle: &P::Handle) -> OtherRecord {
        OtherRecord {
            name: name.to_string(),
            runtime_type_name: self.provider.type_name_of(handle),
            literal_value_rendering: self.provider.represent(handle),
        }
    }

    fn summary(&self, handle: &P::Handle) -> String {
        doc::summarize(
            self.provider.documentation_of(handle).as_deref(),
            self.doc_max_lines,
        )
    }

    fn declaring_module(&self, handle: &P::Handle) -> String {
        self.provider
            .module_of(handle)
            .unwrap_or_else(|| self.provider.module_name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;
    use crate::model::{ModelBuilder, ObjectModel, ObjectSpec, TypeSpec};
    use pretty_assertions::assert_eq;

    fn namespace() -> ObjectModel {
        builtins::cpython().expect("embedded table builds")
    }

    #[test]
    fn len_triggers_dunder_len() {
        let model = namespace();
        let len = model.lookup("len").expect("bound");
        let record = MetadataExtractor::new(&model).extract_function("len", &len);
        assert_eq!(record.triggered_protocol_method.as_deref(), Some("__len__"));
        assert_eq!(record.implementation_note, "C (CPython interpreter)");
        assert_eq!(record.declaring_module, "builtins");
        assert_eq!(
            record.documentation_summary,
            "Return the number of items in a container."
        );
        assert!(record.is_callable);
    }

    #[test]
    fn dict_record_lists_public_and_protocol_methods() {
        let model = namespace();
        let dict = model.lookup("dict").expect("bound");
        let record = MetadataExtractor::new(&model).extract_type("dict", &dict);

        assert_eq!(record.ancestry_chain, vec!["dict", "object"]);
        assert_eq!(
            record.public_method_names,
            vec![
                "clear", "copy", "fromkeys", "get", "items", "keys", "pop", "popitem",
                "setdefault", "update", "values"
            ]
        );
        assert_eq!(
            record.protocol_method_names,
            vec![
                "__class__", "__class_getitem__", "__contains__", "__delattr__", "__delitem__",
                "__dir__", "__doc__", "__eq__", "__format__", "__ge__", "__getattribute__",
                "__getitem__", "__getstate__", "__gt__", "__hash__", "__init__",
                "__init_subclass__", "__ior__", "__iter__", "__le__", "__len__", "__lt__",
                "__ne__", "__new__", "__or__", "__reduce__", "__reduce_ex__", "__repr__",
                "__reversed__", "__ror__", "__setattr__", "__setitem__", "__sizeof__", "__str__",
                "__subclasshook__"
            ]
        );
        assert_eq!(record.runtime_type_name, "type");
    }

    #[test]
    fn memoryview_supports_item_assignment() {
        let model = namespace();
        let view = model.lookup("memoryview").expect("bound");
        let record = MetadataExtractor::new(&model).extract_type("memoryview", &view);
        for name in ["__getitem__", "__setitem__", "__delitem__", "__buffer__"] {
            assert!(
                record.protocol_method_names.iter().any(|method| method == name),
                "{name}"
            );
        }
    }

    #[test]
    fn underscore_names_never_reach_public_methods() {
        let mut builder = ModelBuilder::new("demo");
        let object = builder.define_type(TypeSpec::new("object")).expect("object");
        let ty = builder
            .define_type(
                TypeSpec::new("Thing")
                    .base(object)
                    .methods(&["run", "_hidden", "__call__", "_x_"])
                    .descriptors(&["size", "__slots__"]),
            )
            .expect("Thing");
        let model = builder.build();

        let (public, protocol) = partition_methods(&model, &ty);
        assert_eq!(public, vec!["run"]);
        assert_eq!(protocol, vec!["__call__", "__doc__", "__slots__"]);
    }

    #[test]
    fn constant_without_doc_attribute_is_a_singleton() {
        let mut builder = ModelBuilder::new("demo");
        let bare = builder.value(
            ObjectSpec::new("sentinel", "<sentinel>")
                .documentation(crate::model::Documentation::Missing),
        );
        let model = builder.build();

        let record = MetadataExtractor::new(&model).extract_constant("MISSING", &bare);
        assert_eq!(record.documentation_summary, doc::SINGLETON_CONSTANT);
        assert_eq!(record.declaring_module, "demo");
        assert_eq!(record.literal_value_rendering, "<sentinel>");
    }

    #[test]
    fn true_renders_its_literal() {
        let model = namespace();
        let truth = model.lookup("True").expect("bound");
        let record = MetadataExtractor::new(&model).extract_constant("True", &truth);
        assert_eq!(record.literal_value_rendering, "True");
        assert_eq!(record.runtime_type_name, "bool");
        assert_eq!(
            record.documentation_summary,
            "Returns True when the argument is true, False otherwise. \
             The builtins True and False are the only two instances of the class bool. \
             The class bool is a subclass of the class int, and cannot be subclassed."
        );
    }

    #[test]
    fn none_has_doc_attribute_but_no_text() {
        let model = namespace();
        let none = model.lookup("None").expect("bound");
        let record = MetadataExtractor::new(&model).extract_constant("None", &none);
        assert_eq!(record.documentation_summary, doc::NO_DOCUMENTATION);
    }

    #[test]
    fn extract_dispatches_on_category() {
        let model = namespace();
        let spec = model.lookup("__spec__").expect("bound");
        let entry = MetadataExtractor::new(&model).extract("__spec__", &spec, Category::Other);
        let other = entry.as_other().expect("other record");
        assert_eq!(other.runtime_type_name, "ModuleSpec");
        assert!(other.literal_value_rendering.starts_with("ModuleSpec(name='builtins'"));
    }
}
