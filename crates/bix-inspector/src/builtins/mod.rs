//! Precomputed model of the CPython 3.12 `builtins` namespace.
//!
//! The tables mirror what `dir(builtins)` exposes in a standard interpreter
//! started with the `site` module: built-in types with their own attribute
//! tables, the exception hierarchy, built-in functions, the singleton
//! constants, the callables `site` installs, and the module's own dunders.

mod exceptions;
mod functions;
mod types;

use crate::error::ModelError;
use crate::model::{
    Documentation, ModelBuilder, ObjectId, ObjectModel, ObjectSpec, TypeSpec, python_str_repr,
};

use exceptions::ExceptionDef;
use types::TypeDef;

const MODULE: &str = "builtins";
const IMPORTER_MODULE: &str = "_frozen_importlib";

const MODULE_DOC: &str = "Built-in functions, types, exceptions, and other objects.\n\nThis module provides direct access to all 'built-in'\nidentifiers of Python; for example, builtins.len is\nthe full name for the built-in function len().\n\nThis module is not normally accessed explicitly by most\napplications, but can be useful in modules that provide\nobjects with the same name as a built-in value, but in\nwhich the built-in of that name is also needed.";

const IMPORTER_DOC: &str = "Meta path import for built-in modules.\n\n    All methods are either class or static methods to avoid the need to\n    instantiate the class.\n\n    ";

const MODULE_SPEC_DOC: &str = "The specification for a module, used for loading.\n\n    A module's spec is the source for information about the module.  For\n    data associated with the module, including source, use the spec's\n    loader.\n\n    `name` is the absolute name of the module.  `loader` is the loader\n    to use when loading the module.  `parent` is the name of the\n    package the module is in.  The parent is derived from the name.\n    ";

/// Build the model of the CPython 3.12 `builtins` namespace.
pub fn cpython() -> Result<ObjectModel, ModelError> {
    let mut builder = ModelBuilder::new(MODULE);

    let object = builder.define_type(type_spec(&types::OBJECT, &[]))?;
    builder.bind(types::OBJECT.name, object);
    for def in types::TYPES {
        let bases = resolve_bases(&builder, def.name, def.bases)?;
        let id = builder.define_type(type_spec(def, &bases))?;
        builder.bind(def.name, id);
    }

    define_exceptions(&mut builder, object)?;
    define_functions(&mut builder);
    define_constants(&mut builder)?;
    define_module_attributes(&mut builder, object)?;

    Ok(builder.build())
}

fn type_spec(def: &TypeDef, bases: &[ObjectId]) -> TypeSpec {
    let spec = TypeSpec::new(def.name)
        .bases(bases)
        .doc(def.doc)
        .methods(def.methods)
        .class_methods(def.class_methods)
        .static_methods(def.static_methods)
        .slots(def.slots)
        .descriptors(def.descriptors)
        .fields(def.fields);
    if def.unhashable {
        spec.data("__hash__", "NoneType", "None")
    } else {
        spec
    }
}

fn resolve_bases(
    builder: &ModelBuilder,
    name: &str,
    bases: &[&str],
) -> Result<Vec<ObjectId>, ModelError> {
    bases
        .iter()
        .map(|base| {
            builder.type_id(base).ok_or_else(|| ModelError::UnknownBase {
                name: name.to_string(),
                base: (*base).to_string(),
            })
        })
        .collect()
}

fn define_exceptions(builder: &mut ModelBuilder, object: ObjectId) -> Result<(), ModelError> {
    let root = builder.define_type(
        TypeSpec::new(exceptions::ERROR_ROOT)
            .base(object)
            .doc(exceptions::BASE_EXCEPTION_DOC)
            .methods(exceptions::BASE_EXCEPTION_METHODS)
            .slots(exceptions::BASE_EXCEPTION_SLOTS)
            .descriptors(exceptions::BASE_EXCEPTION_DESCRIPTORS)
            .static_methods(&["__new__"]),
    )?;
    builder.bind(exceptions::ERROR_ROOT, root);
    builder.set_error_root(root)?;

    for def in exceptions::EXCEPTIONS {
        let bases = resolve_bases(builder, def.name, def.bases)?;
        let id = builder.define_type(exception_spec(def, &bases))?;
        builder.bind(def.name, id);
    }

    for (alias, target) in exceptions::ALIASES {
        let id = builder
            .type_id(target)
            .ok_or_else(|| ModelError::UnknownObject {
                name: (*target).to_string(),
            })?;
        builder.bind(*alias, id);
    }
    Ok(())
}

fn exception_spec(def: &ExceptionDef, bases: &[ObjectId]) -> TypeSpec {
    let mut spec = TypeSpec::new(def.name)
        .bases(bases)
        .slots(&["__init__"])
        .static_methods(&["__new__"])
        .fields(def.fields);
    if let Some(doc) = def.doc {
        spec = spec.doc(doc);
    }
    if def.name == "BaseExceptionGroup" {
        spec = spec
            .methods(exceptions::GROUP_METHODS)
            .class_methods(&["__class_getitem__"])
            .slots(&["__str__"]);
    }
    if def.name == "ExceptionGroup" {
        spec = spec
            .descriptors(&["__weakref__"])
            .data("__module__", "str", &python_str_repr(MODULE));
    }
    spec
}

fn define_functions(builder: &mut ModelBuilder) {
    for def in functions::FUNCTIONS {
        let id = builder.callable(
            ObjectSpec::new(
                "builtin_function_or_method",
                format!("<built-in function {}>", def.name),
            )
            .module(def.module)
            .doc(def.doc),
        );
        builder.bind(def.name, id);
    }

    for site in functions::SITE_CALLABLES {
        let mut spec = ObjectSpec::new(site.type_name, site.repr).module(functions::SITE_MODULE);
        if let Some(doc) = site.doc {
            spec = spec.doc(doc);
        }
        let id = builder.callable(spec);
        builder.bind(site.name, id);
    }
}

fn define_constants(builder: &mut ModelBuilder) -> Result<(), ModelError> {
    let bool_doc = instance_doc(builder, "bool")?;
    for (name, repr) in [("True", "True"), ("False", "False"), ("__debug__", "True")] {
        let id = builder.value(ObjectSpec::new("bool", repr).documentation(bool_doc.clone()));
        builder.bind(name, id);
    }

    for (name, type_name) in [
        ("None", "NoneType"),
        ("Ellipsis", "ellipsis"),
        ("NotImplemented", "NotImplementedType"),
    ] {
        let id = builder.value(ObjectSpec::new(type_name, name));
        builder.bind(name, id);
    }
    Ok(())
}

fn define_module_attributes(
    builder: &mut ModelBuilder,
    object: ObjectId,
) -> Result<(), ModelError> {
    let str_doc = instance_doc(builder, "str")?;
    for (name, value) in [("__name__", MODULE), ("__doc__", MODULE_DOC), ("__package__", "")] {
        let id = builder.value(
            ObjectSpec::new("str", python_str_repr(value)).documentation(str_doc.clone()),
        );
        builder.bind(name, id);
    }

    let importer = builder.define_type(
        TypeSpec::new("BuiltinImporter")
            .module(IMPORTER_MODULE)
            .base(object)
            .doc(IMPORTER_DOC)
            .class_methods(&[
                "create_module",
                "exec_module",
                "find_spec",
                "get_code",
                "get_source",
                "is_package",
                "load_module",
            ])
            .descriptors(&["__dict__", "__weakref__"])
            .data("__module__", "str", &python_str_repr(IMPORTER_MODULE)),
    )?;
    builder.bind("__loader__", importer);

    let spec = builder.value(
        ObjectSpec::new(
            "ModuleSpec",
            format!(
                "ModuleSpec(name={}, loader=<class '{IMPORTER_MODULE}.BuiltinImporter'>, origin='built-in')",
                python_str_repr(MODULE)
            ),
        )
        .module(IMPORTER_MODULE)
        .doc(MODULE_SPEC_DOC),
    );
    builder.bind("__spec__", spec);
    Ok(())
}

/// Documentation an instance exposes through its type.
fn instance_doc(builder: &ModelBuilder, type_name: &str) -> Result<Documentation, ModelError> {
    builder
        .type_id(type_name)
        .map(|id| builder.documentation_of(id))
        .ok_or_else(|| ModelError::UnknownObject {
            name: type_name.to_string(),
        })
}
