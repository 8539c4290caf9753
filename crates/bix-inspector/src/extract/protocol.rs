//! Built-in operations that dispatch to a protocol method on their operand.

const PROTOCOL_METHODS: [(&str, &str); 20] = [
    ("len", "__len__"),
    ("str", "__str__"),
    ("repr", "__repr__"),
    ("int", "__int__"),
    ("float", "__float__"),
    ("bool", "__bool__"),
    ("bytes", "__bytes__"),
    ("hash", "__hash__"),
    ("iter", "__iter__"),
    ("next", "__next__"),
    ("reversed", "__reversed__"),
    ("abs", "__abs__"),
    ("round", "__round__"),
    ("divmod", "__divmod__"),
    ("pow", "__pow__"),
    ("getattr", "__getattribute__"),
    ("setattr", "__setattr__"),
    ("delattr", "__delattr__"),
    ("dir", "__dir__"),
    ("format", "__format__"),
];

/// The protocol method `name(obj)` looks up on `obj`, if any.
#[must_use]
pub fn triggered_protocol_method(name: &str) -> Option<&'static str> {
    PROTOCOL_METHODS
        .iter()
        .find_map(|&(function, method)| (function == name).then_some(method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_access_maps_to_getattribute() {
        assert_eq!(triggered_protocol_method("getattr"), Some("__getattribute__"));
        assert_eq!(triggered_protocol_method("len"), Some("__len__"));
        assert_eq!(triggered_protocol_method("print"), None);
    }

    #[test]
    fn every_entry_is_a_dunder() {
        for (function, method) in PROTOCOL_METHODS {
            assert!(method.starts_with("__") && method.ends_with("__"), "{function}");
        }
    }
}
