//! Resolution of XML fragments to typed plugin handlers.

use jenwire_core::RestClient;
use xmltree::Element;

use crate::plugin::{PluginContext, PluginHandle};
use crate::registry::PluginRegistry;
use crate::xml::PluginType;

/// Instantiates the handler backing an XML element, or returns `None` when
/// no registered implementation supports its type.
///
/// The handler is constructed with a clone of `controller`, which the
/// caller is expected to have re-pointed at the resource the element
/// represents, and a clone of the `root` controller owning the connection. `None` is
/// not an error: call sites where the fragment is optional log and skip
/// it, while sites where support is mandatory convert it to
/// [`PluginError::NotSupported`](crate::error::PluginError::NotSupported).
pub fn create_xml_plugin(
    registry: &PluginRegistry,
    element: &Element,
    controller: &RestClient,
    root: &RestClient,
) -> Option<PluginHandle> {
    let plugin_type = PluginType::from_element(element);
    let construct = registry.resolve(plugin_type.class_name())?;
    Some(construct(PluginContext {
        controller: controller.clone(),
        root: root.clone(),
        element: element.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jenwire_core::CacheContext;
    use xmltree::Element;

    use super::*;
    use crate::plugin::{PluginDescriptor, ScmPlugin};

    #[derive(Debug)]
    struct NullScm {
        element: Element,
    }

    impl ScmPlugin for NullScm {
        fn class_name(&self) -> &'static str {
            "hudson.scm.NullSCM"
        }

        fn element(&self) -> &Element {
            &self.element
        }
    }

    fn registry() -> PluginRegistry {
        PluginRegistry::from_descriptors([PluginDescriptor {
            class_name: "hudson.scm.NullSCM",
            construct: |ctx| {
                PluginHandle::Scm(Box::new(NullScm {
                    element: ctx.element,
                }))
            },
        }])
        .unwrap()
    }

    fn controller() -> RestClient {
        RestClient::new(
            "http://jenkins/job/demo",
            None,
            Arc::new(CacheContext::disabled()),
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_by_class_attribute() {
        let element = Element::parse(r#"<scm class="hudson.scm.NullSCM"/>"#.as_bytes()).unwrap();
        let controller = controller();

        let handle = create_xml_plugin(&registry(), &element, &controller, &controller)
            .expect("type should resolve");
        assert_eq!(handle.class_name(), "hudson.scm.NullSCM");
    }

    #[test]
    fn test_unknown_type_yields_no_handler() {
        let element =
            Element::parse(r#"<scm class="hudson.scm.UnknownSCM"/>"#.as_bytes()).unwrap();
        let controller = controller();

        assert!(create_xml_plugin(&registry(), &element, &controller, &controller).is_none());
    }
}
