//! Type identification for plugin-backed XML fragments.

use std::fmt;

use xmltree::Element;

/// The identifier Jenkins embeds in an XML element to describe which
/// plugin implementation backs it.
///
/// `class_name` is always derivable; `module_name` and `version` exist only
/// for externally versioned plugins, declared through an attribute of the
/// form `plugin="module-name@version"`. Absence of a module name means the
/// type is a built-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginType {
    module_name: Option<String>,
    version: Option<String>,
    class_name: String,
}

impl PluginType {
    /// Extracts the type identifier from an XML element. Every element
    /// yields at least a class name:
    /// - a `class` attribute is used verbatim when present
    /// - otherwise the element's own tag name is the class name
    pub fn from_element(element: &Element) -> Self {
        let (module_name, version) = match element.attributes.get("plugin") {
            Some(spec) => match spec.split_once('@') {
                Some((module, version)) => (Some(module.to_string()), Some(version.to_string())),
                None => (Some(spec.clone()), None),
            },
            None => (None, None),
        };

        let class_name = element
            .attributes
            .get("class")
            .cloned()
            .unwrap_or_else(|| element.name.clone());

        Self {
            module_name,
            version,
            class_name,
        }
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// True when the element declares no external plugin module, meaning
    /// resolution must not require a version match.
    pub fn is_builtin(&self) -> bool {
        self.module_name.is_none()
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.module_name, &self.version) {
            (Some(module), Some(version)) => {
                write!(f, "{} ({module}@{version})", self.class_name)
            }
            (Some(module), None) => write!(f, "{} ({module})", self.class_name),
            _ => write!(f, "{}", self.class_name),
        }
    }
}
