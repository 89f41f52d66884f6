//! Interface to the parameterized-trigger publisher plugin.

use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, PublisherPlugin};
use xmltree::Element;

use crate::util::child_text;

pub const CLASS_NAME: &str = "hudson.plugins.parameterizedtrigger.BuildTrigger";

pub struct BuildTrigger {
    element: Element,
}

impl BuildTrigger {
    fn new(ctx: PluginContext) -> Self {
        Self {
            element: ctx.element,
        }
    }

    /// Downstream project names triggered after a build, in configuration
    /// order. Each trigger config stores a comma-separated list.
    pub fn triggered_projects(&self) -> Vec<String> {
        let Some(configs) = self.element.get_child("configs") else {
            return Vec::new();
        };
        configs
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .flat_map(|config| {
                child_text(config, "projects")
                    .split(',')
                    .map(|name| name.trim().to_owned())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl PublisherPlugin for BuildTrigger {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn element(&self) -> &Element {
        &self.element
    }
}

pub(crate) fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        class_name: CLASS_NAME,
        construct: |ctx| PluginHandle::Publisher(Box::new(BuildTrigger::new(ctx))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggered_projects() {
        let xml = r#"
            <hudson.plugins.parameterizedtrigger.BuildTrigger plugin="parameterized-trigger@2.25">
                <configs>
                    <hudson.plugins.parameterizedtrigger.BuildTriggerConfig>
                        <projects>integration-suite, package-installer</projects>
                        <condition>SUCCESS</condition>
                    </hudson.plugins.parameterizedtrigger.BuildTriggerConfig>
                </configs>
            </hudson.plugins.parameterizedtrigger.BuildTrigger>"#;
        let trigger = BuildTrigger {
            element: Element::parse(xml.as_bytes()).unwrap(),
        };

        assert_eq!(
            trigger.triggered_projects(),
            vec!["integration-suite", "package-installer"]
        );
    }
}
