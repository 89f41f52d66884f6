//! The process-wide plugin registry.
//!
//! Assembled lazily on the first resolution request and stable for the
//! rest of the process, unless [`clear_registry`] drops it for tests or
//! for picking up a freshly extended descriptor set.

use std::sync::{Arc, RwLock};

use jenwire_plugin_api::{PluginDescriptor, PluginRegistry, PluginResult};

static REGISTRY: RwLock<Option<Arc<PluginRegistry>>> = RwLock::new(None);

/// The static table of every implementation this library ships.
pub fn supported() -> Vec<PluginDescriptor> {
    vec![
        crate::allview::descriptor(),
        crate::listview::descriptor(),
        crate::myview::descriptor(),
        crate::statusview::descriptor(),
        crate::nestedview::descriptor(),
        crate::nullscm::descriptor(),
        crate::subversion::descriptor(),
        crate::buildblocker::descriptor(),
        crate::buildtrigger::descriptor(),
        crate::conditionalbuilder::descriptor(),
    ]
}

/// The shared registry instance. Population happens at most once per
/// process; a duplicate class name in [`supported`] fails here rather
/// than at first lookup.
pub fn global() -> PluginResult<Arc<PluginRegistry>> {
    if let Some(registry) = REGISTRY.read().unwrap().as_ref() {
        return Ok(Arc::clone(registry));
    }

    let mut guard = REGISTRY.write().unwrap();
    if let Some(registry) = guard.as_ref() {
        return Ok(Arc::clone(registry));
    }
    let registry = Arc::new(PluginRegistry::from_descriptors(supported())?);
    *guard = Some(Arc::clone(&registry));
    Ok(registry)
}

/// Drops the shared registry so the next resolution re-assembles it from
/// [`supported`].
pub fn clear_registry() {
    *REGISTRY.write().unwrap() = None;
}

#[cfg(test)]
mod tests {
    use jenwire_core::{CacheContext, RestClient};
    use jenwire_plugin_api::create_xml_plugin;
    use xmltree::Element;

    use super::*;

    #[test]
    fn test_every_supported_type_resolves_to_its_own_handler() {
        let expected = [
            "hudson.model.AllView",
            "hudson.model.ListView",
            "hudson.model.MyView",
            "hudson.plugins.status__view.StatusView",
            "hudson.plugins.nested__view.NestedView",
            "hudson.scm.NullSCM",
            "hudson.scm.SubversionSCM",
            "hudson.plugins.buildblocker.BuildBlockerProperty",
            "hudson.plugins.parameterizedtrigger.BuildTrigger",
            "org.jenkinsci.plugins.conditionalbuildstep.ConditionalBuilder",
        ];

        let registry = global().unwrap();
        assert_eq!(registry.count(), expected.len());

        let controller = RestClient::new(
            "http://jenkins/",
            None,
            Arc::new(CacheContext::disabled()),
        )
        .unwrap();
        for class_name in expected {
            let element = Element::parse(format!("<{class_name}/>").as_bytes()).unwrap();
            let handle = create_xml_plugin(&registry, &element, &controller, &controller)
                .unwrap_or_else(|| panic!("{class_name} did not resolve"));
            assert_eq!(handle.class_name(), class_name);
        }
    }

    #[test]
    fn test_population_is_stable_until_cleared() {
        let first = global().unwrap();
        let second = global().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        clear_registry();
        let repopulated = global().unwrap();
        assert_eq!(repopulated.count(), first.count());
    }
}
