//! Name enumeration and resolution against a [`ReflectionProvider`].

use crate::error::ResolveError;
use crate::provider::ReflectionProvider;

/// A resolved name. Lives only for the duration of one pass.
#[derive(Debug, Clone)]
pub struct Symbol<H> {
    pub name: String,
    pub handle: H,
}

#[derive(Debug)]
pub struct SymbolResolver<'p, P> {
    provider: &'p P,
}

impl<'p, P: ReflectionProvider> SymbolResolver<'p, P> {
    #[must_use]
    pub const fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Every name in the namespace, sorted and deduplicated.
    #[must_use]
    pub fn collect_names(&self) -> Vec<String> {
        let mut names = self.provider.names();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn resolve(&self, name: &str) -> Result<Symbol<P::Handle>, ResolveError> {
        let handle = self.provider.lookup(name)?;
        Ok(Symbol {
            name: name.to_string(),
            handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use pretty_assertions::assert_eq;

    /// Namespace that reports names out of order and twice.
    struct Noisy;

    impl ReflectionProvider for Noisy {
        type Handle = u8;

        fn module_name(&self) -> &str {
            "noisy"
        }
        fn implementation_note(&self) -> &str {
            "test"
        }
        fn names(&self) -> Vec<String> {
            ["zeta", "alpha", "Beta", "alpha", "_private"]
                .map(String::from)
                .to_vec()
        }
        fn lookup(&self, name: &str) -> Result<u8, ResolveError> {
            match name {
                "alpha" => Ok(1),
                "zeta" => Err(ResolveError::AccessDenied {
                    name: name.into(),
                    reason: "guarded".into(),
                }),
                _ => Err(ResolveError::Missing { name: name.into() }),
            }
        }
        fn is_type(&self, _: &u8) -> bool {
            false
        }
        fn is_callable(&self, _: &u8) -> bool {
            false
        }
        fn is_subtype_of_error(&self, _: &u8) -> bool {
            false
        }
        fn ancestry_of(&self, _: &u8) -> Vec<u8> {
            Vec::new()
        }
        fn list_attributes(&self, _: &u8) -> BTreeSet<String> {
            BTreeSet::new()
        }
        fn attribute(&self, _: &u8, _: &str) -> Option<u8> {
            None
        }
        fn has_documentation(&self, _: &u8) -> bool {
            false
        }
        fn documentation_of(&self, _: &u8) -> Option<String> {
            None
        }
        fn type_name_of(&self, _: &u8) -> String {
            "int".into()
        }
        fn name_of(&self, _: &u8) -> String {
            String::new()
        }
        fn module_of(&self, _: &u8) -> Option<String> {
            None
        }
        fn represent(&self, value: &u8) -> String {
            value.to_string()
        }
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let resolver = SymbolResolver::new(&Noisy);
        assert_eq!(
            resolver.collect_names(),
            vec!["Beta", "_private", "alpha", "zeta"]
        );
    }

    #[test]
    fn resolve_passes_through_provider_errors() {
        let resolver = SymbolResolver::new(&Noisy);
        let symbol = resolver.resolve("alpha").expect("bound");
        assert_eq!(symbol.name, "alpha");
        assert_eq!(symbol.handle, 1);

        let denied = resolver.resolve("zeta").expect_err("guarded");
        assert_eq!(denied.name(), "zeta");
        assert!(matches!(
            resolver.resolve("Beta"),
            Err(ResolveError::Missing { .. })
        ));
    }
}
