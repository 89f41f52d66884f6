use std::collections::HashMap;

use crate::error::{PluginError, PluginResult};
use crate::plugin::{PluginConstructor, PluginDescriptor};

/// Immutable index from declared class names to handler constructors.
///
/// Assembled once from a static descriptor list; lookups are exact-string
/// matches. A duplicate class name in the input is a configuration error
/// and fails assembly rather than silently overwriting.
pub struct PluginRegistry {
    index: HashMap<&'static str, PluginConstructor>,
}

impl PluginRegistry {
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = PluginDescriptor>,
    ) -> PluginResult<Self> {
        let mut index = HashMap::new();
        for descriptor in descriptors {
            if index
                .insert(descriptor.class_name, descriptor.construct)
                .is_some()
            {
                return Err(PluginError::DuplicateType(descriptor.class_name.to_string()));
            }
        }
        Ok(Self { index })
    }

    /// Resolves a class name to its constructor, or `None` when the type
    /// is not supported.
    pub fn resolve(&self, class_name: &str) -> Option<PluginConstructor> {
        self.index.get(class_name).copied()
    }

    pub fn is_registered(&self, class_name: &str) -> bool {
        self.index.contains_key(class_name)
    }

    /// All registered class names, sorted for stable iteration.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.index.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use xmltree::Element;

    use super::*;
    use crate::plugin::{PluginContext, PluginHandle, ScmPlugin};

    #[derive(Debug)]
    struct FakeScm {
        element: Element,
    }

    impl ScmPlugin for FakeScm {
        fn class_name(&self) -> &'static str {
            "fake.Scm"
        }

        fn element(&self) -> &Element {
            &self.element
        }
    }

    fn fake_descriptor(class_name: &'static str) -> PluginDescriptor {
        PluginDescriptor {
            class_name,
            construct: |ctx: PluginContext| {
                PluginHandle::Scm(Box::new(FakeScm {
                    element: ctx.element,
                }))
            },
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::from_descriptors([]).unwrap();
        assert_eq!(registry.count(), 0);
        assert!(registry.resolve("anything").is_none());
    }

    #[test]
    fn test_resolution_is_exact_match() {
        let registry = PluginRegistry::from_descriptors([fake_descriptor("fake.Scm")]).unwrap();
        assert!(registry.resolve("fake.Scm").is_some());
        assert!(registry.resolve("fake").is_none());
        assert!(registry.resolve("fake.Scm2").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails_fast() {
        let result = PluginRegistry::from_descriptors([
            fake_descriptor("fake.Scm"),
            fake_descriptor("fake.Scm"),
        ]);
        match result {
            Err(PluginError::DuplicateType(name)) => assert_eq!(name, "fake.Scm"),
            _ => panic!("expected duplicate registration to fail"),
        }
    }
}
