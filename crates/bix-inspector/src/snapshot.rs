//! Namespace snapshots: a serialized symbol table that builds an [`ObjectModel`].
//!
//! A snapshot lets the inspector run against any namespace exported from a
//! live runtime instead of the embedded CPython table. JSON and TOML are both
//! accepted; the format is picked from the file extension.
//!
//! ```json
//! {
//!   "module": "builtins",
//!   "error_root": "BaseException",
//!   "types": [
//!     { "name": "object", "doc": "The root.", "members": { "__init__": "slot" } },
//!     { "name": "BaseException", "bases": ["object"], "members": { "args": "descriptor" } }
//!   ],
//!   "objects": [
//!     { "name": "len", "type_name": "builtin_function_or_method",
//!       "repr": "<built-in function len>", "callable": true }
//!   ],
//!   "bindings": { "object": "object", "BaseException": "BaseException" }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, SnapshotError};
use crate::model::{
    Documentation, Member, ModelBuilder, ObjectId, ObjectModel, ObjectSpec, TypeSpec,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub module: String,
    #[serde(default)]
    pub implementation: Option<String>,
    /// Name of the type every error type descends from.
    #[serde(default)]
    pub error_root: Option<String>,
    /// Types in definition order; bases must appear before their subclasses.
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    /// Non-type objects, each bound under its own name.
    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
    /// Namespace name -> type or object name. Types may be qualified as
    /// `module.Name`.
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
    /// Namespace names whose lookup is denied, with the reason.
    #[serde(default)]
    pub restricted: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub metaclass: Option<String>,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub members: BTreeMap<String, MemberEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Kind(MemberKind),
    Data { type_name: String, repr: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    ClassMethod,
    StaticMethod,
    Slot,
    Descriptor,
    Field,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntry {
    pub name: String,
    pub type_name: String,
    pub repr: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub callable: bool,
    #[serde(default)]
    pub doc: Option<String>,
    /// `false` when the object has no documentation attribute at all.
    #[serde(default = "default_true")]
    pub has_doc: bool,
}

const fn default_true() -> bool {
    true
}

impl From<MemberEntry> for Member {
    fn from(entry: MemberEntry) -> Self {
        match entry {
            MemberEntry::Kind(MemberKind::Method) => Self::Method,
            MemberEntry::Kind(MemberKind::ClassMethod) => Self::ClassMethod,
            MemberEntry::Kind(MemberKind::StaticMethod) => Self::StaticMethod,
            MemberEntry::Kind(MemberKind::Slot) => Self::Slot,
            MemberEntry::Kind(MemberKind::Descriptor) => Self::Descriptor,
            MemberEntry::Kind(MemberKind::Field) => Self::Field,
            MemberEntry::Data { type_name, repr } => Self::Data { type_name, repr },
        }
    }
}

impl Snapshot {
    pub fn from_json_str(input: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_toml_str(input: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(input)?)
    }

    /// Assemble the object model the snapshot describes.
    pub fn into_model(self) -> Result<ObjectModel, ModelError> {
        let mut builder = ModelBuilder::new(self.module.clone());
        if let Some(note) = self.implementation {
            builder = builder.implementation(note);
        }

        let mut types = TypeIndex::new(self.module.clone());
        for entry in self.types {
            let mut spec = TypeSpec::new(entry.name.clone());
            for base in entry.bases {
                let Some(id) = types.get(&base) else {
                    return Err(ModelError::UnknownBase {
                        name: entry.name,
                        base,
                    });
                };
                spec = spec.base(id);
            }
            let module = entry.module.unwrap_or_else(|| types.default_module.clone());
            spec = spec.module(module.clone());
            if let Some(metaclass) = entry.metaclass {
                spec = spec.metaclass(metaclass);
            }
            if let Some(doc) = entry.doc {
                spec = spec.doc(doc);
            }
            for (name, member) in entry.members {
                spec = spec.member(name, member.into());
            }
            let id = builder.define_type(spec)?;
            types.insert(module, entry.name, id);
        }

        let mut objects = HashMap::with_capacity(self.objects.len());
        for entry in self.objects {
            let documentation = match (entry.has_doc, entry.doc) {
                (false, _) => Documentation::Missing,
                (true, Some(text)) => Documentation::Text(text),
                (true, None) => Documentation::Unset,
            };
            let mut spec =
                ObjectSpec::new(entry.type_name, entry.repr).documentation(documentation);
            if let Some(module) = entry.module {
                spec = spec.module(module);
            }
            let id = if entry.callable {
                builder.callable(spec)
            } else {
                builder.value(spec)
            };
            builder.bind(entry.name.clone(), id);
            objects.insert(entry.name, id);
        }

        for (name, target) in self.bindings {
            let id = types
                .get(&target)
                .or_else(|| objects.get(&target).copied())
                .ok_or(ModelError::UnknownObject { name: target })?;
            builder.bind(name, id);
        }

        for (name, reason) in self.restricted {
            builder.restrict(name, reason);
        }

        if let Some(root) = self.error_root {
            let id = types
                .get(&root)
                .ok_or(ModelError::UnknownObject { name: root })?;
            builder.set_error_root(id)?;
        }

        Ok(builder.build())
    }
}

/// Snapshot types keyed by `(module, name)`.
///
/// A reference is looked up in the snapshot's own module first, then as a
/// qualified `module.Name`, then as a bare name that exactly one module
/// defines.
struct TypeIndex {
    default_module: String,
    ids: HashMap<(String, String), ObjectId>,
}

impl TypeIndex {
    fn new(default_module: String) -> Self {
        Self {
            default_module,
            ids: HashMap::new(),
        }
    }

    fn insert(&mut self, module: String, name: String, id: ObjectId) {
        self.ids.insert((module, name), id);
    }

    fn get(&self, reference: &str) -> Option<ObjectId> {
        let key = |module: &str, name: &str| (module.to_string(), name.to_string());
        if let Some(id) = self.ids.get(&key(&self.default_module, reference)) {
            return Some(*id);
        }
        if let Some(id) = reference
            .rsplit_once('.')
            .and_then(|(module, name)| self.ids.get(&key(module, name)))
        {
            return Some(*id);
        }
        let mut matches = self
            .ids
            .iter()
            .filter(|((_, name), _)| name == reference)
            .map(|(_, id)| *id);
        match (matches.next(), matches.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    }
}

/// Load a snapshot file (`.json` or `.toml`) and build its object model.
pub fn load(path: &Path) -> Result<ObjectModel, SnapshotError> {
    let input = std::fs::read_to_string(path)?;
    let snapshot = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Snapshot::from_json_str(&input)?,
        Some("toml") => Snapshot::from_toml_str(&input)?,
        other => {
            return Err(SnapshotError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            ));
        }
    };
    tracing::debug!(
        path = %path.display(),
        types = snapshot.types.len(),
        objects = snapshot.objects.len(),
        "loaded namespace snapshot"
    );
    Ok(snapshot.into_model()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::provider::ReflectionProvider;
    use pretty_assertions::assert_eq;

    const JSON: &str = r#"{
        "module": "toy",
        "error_root": "Oops",
        "types": [
            { "name": "object", "doc": "Root.", "members": { "__init__": "slot", "__repr__": "slot" } },
            { "name": "Oops", "bases": ["object"], "doc": "Something broke.",
              "members": { "args": "descriptor", "with_traceback": "method" } },
            { "name": "Box", "bases": ["object"],
              "members": { "open": "method", "_seal": "method",
                           "__hash__": { "type_name": "NoneType", "repr": "None" } } }
        ],
        "objects": [
            { "name": "shout", "type_name": "builtin_function_or_method",
              "repr": "<built-in function shout>", "callable": true, "doc": "Say it loudly." },
            { "name": "ANSWER", "type_name": "int", "repr": "42", "has_doc": false }
        ],
        "bindings": { "object": "object", "Oops": "Oops", "Box": "Box", "Alias": "Oops" },
        "restricted": { "secret": "not exported" }
    }"#;

    #[test]
    fn json_snapshot_builds_a_usable_model() {
        let model = Snapshot::from_json_str(JSON)
            .expect("parse")
            .into_model()
            .expect("model");

        assert_eq!(model.module_name(), "toy");
        assert_eq!(
            model.names(),
            vec!["ANSWER", "Alias", "Box", "Oops", "object", "secret", "shout"]
        );

        let oops = model.lookup("Oops").expect("bound");
        assert_eq!(model.lookup("Alias"), Ok(oops));
        assert!(model.is_subtype_of_error(&oops));
        assert_eq!(model.represent(&oops), "<class 'toy.Oops'>");

        let answer = model.lookup("ANSWER").expect("bound");
        assert!(!model.has_documentation(&answer));
        assert!(!model.is_callable(&answer));

        let bx = model.lookup("Box").expect("bound");
        let hash = model.attribute(&bx, "__hash__").expect("own __hash__");
        assert_eq!(model.represent(&hash), "None");
        assert!(matches!(
            model.lookup("secret"),
            Err(ResolveError::AccessDenied { .. })
        ));
    }

    #[test]
    fn toml_snapshot_file_loads_by_extension() {
        let file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        std::fs::write(
            file.path(),
            r#"
module = "mini"

[[types]]
name = "object"
doc = "Root."

[[objects]]
name = "ping"
type_name = "builtin_function_or_method"
repr = "<built-in function ping>"
callable = true

[bindings]
object = "object"
"#,
        )
        .expect("write");

        let model = load(file.path()).expect("load");
        assert_eq!(model.names(), vec!["object", "ping"]);
        let ping = model.lookup("ping").expect("bound");
        assert!(model.is_callable(&ping));
        assert_eq!(model.documentation_of(&ping), None);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        std::fs::write(file.path(), "module: nope").expect("write");
        assert!(matches!(
            load(file.path()),
            Err(SnapshotError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn base_must_be_declared_first() {
        let json = r#"{ "module": "m", "types": [ { "name": "Child", "bases": ["Parent"] } ] }"#;
        let error = Snapshot::from_json_str(json)
            .expect("parse")
            .into_model()
            .expect_err("undeclared base");
        assert_eq!(
            error,
            ModelError::UnknownBase {
                name: "Child".into(),
                base: "Parent".into(),
            }
        );
    }

    #[test]
    fn same_type_name_in_two_modules() {
        let json = r#"{
            "module": "m",
            "types": [
                { "name": "object" },
                { "name": "Node", "module": "a", "bases": ["object"] },
                { "name": "Node", "module": "b", "bases": ["object"] },
                { "name": "Leaf", "bases": ["a.Node"] }
            ],
            "bindings": { "ANode": "a.Node", "BNode": "b.Node", "Leaf": "Leaf" }
        }"#;
        let model = Snapshot::from_json_str(json)
            .expect("parse")
            .into_model()
            .expect("model");

        let a = model.lookup("ANode").expect("bound");
        let b = model.lookup("BNode").expect("bound");
        assert_ne!(a, b);
        assert_eq!(model.represent(&a), "<class 'a.Node'>");
        assert_eq!(model.represent(&b), "<class 'b.Node'>");

        let leaf = model.lookup("Leaf").expect("bound");
        let chain: Vec<String> = model
            .ancestry_of(&leaf)
            .iter()
            .map(|id| model.name_of(id))
            .collect();
        assert_eq!(chain, vec!["Leaf", "Node", "object"]);
        assert_eq!(model.ancestry_of(&leaf)[1], a);
    }

    #[test]
    fn bare_name_shared_by_two_modules_is_ambiguous() {
        let json = r#"{
            "module": "m",
            "types": [
                { "name": "Node", "module": "a" },
                { "name": "Node", "module": "b" }
            ],
            "bindings": { "Node": "Node" }
        }"#;
        let error = Snapshot::from_json_str(json)
            .expect("parse")
            .into_model()
            .expect_err("ambiguous");
        assert_eq!(
            error,
            ModelError::UnknownObject {
                name: "Node".into()
            }
        );
    }

    #[test]
    fn duplicate_type_in_one_module_is_rejected() {
        let json = r#"{ "module": "m", "types": [ { "name": "T" }, { "name": "T" } ] }"#;
        let error = Snapshot::from_json_str(json)
            .expect("parse")
            .into_model()
            .expect_err("duplicate");
        assert_eq!(error, ModelError::DuplicateType { name: "T".into() });
    }

    #[test]
    fn bindings_can_alias_objects() {
        let mut snapshot = Snapshot::from_json_str(JSON).expect("parse");
        snapshot.bindings.insert("yell".into(), "shout".into());
        let model = snapshot.into_model().expect("model");
        assert_eq!(model.lookup("yell"), model.lookup("shout"));
        assert!(model.lookup("yell").is_ok());
    }

    #[test]
    fn binding_to_a_missing_type_fails() {
        let json = r#"{ "module": "m", "bindings": { "x": "Ghost" } }"#;
        let error = Snapshot::from_json_str(json)
            .expect("parse")
            .into_model()
            .expect_err("ghost type");
        assert_eq!(
            error,
            ModelError::UnknownObject {
                name: "Ghost".into()
            }
        );
    }
}
