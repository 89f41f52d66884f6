//! Interface to the conditional-buildstep builder plugin.

use jenwire_plugin_api::{BuilderPlugin, PluginContext, PluginDescriptor, PluginHandle};
use xmltree::Element;

pub const CLASS_NAME: &str = "org.jenkinsci.plugins.conditionalbuildstep.ConditionalBuilder";

pub struct ConditionalBuilder {
    element: Element,
}

impl ConditionalBuilder {
    fn new(ctx: PluginContext) -> Self {
        Self {
            element: ctx.element,
        }
    }

    /// Class names of the build steps guarded by the condition.
    pub fn build_steps(&self) -> Vec<String> {
        let Some(builders) = self.element.get_child("conditionalbuilders") else {
            return Vec::new();
        };
        builders
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|step| step.name.clone())
            .collect()
    }
}

impl BuilderPlugin for ConditionalBuilder {
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
        construct: |ctx| PluginHandle::Builder(Box::new(ConditionalBuilder::new(ctx))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_steps() {
        let xml = r#"
            <org.jenkinsci.plugins.conditionalbuildstep.ConditionalBuilder plugin="conditional-buildstep@1.3">
                <conditionalbuilders>
                    <hudson.tasks.Shell>
                        <command>make deploy</command>
                    </hudson.tasks.Shell>
                </conditionalbuilders>
            </org.jenkinsci.plugins.conditionalbuildstep.ConditionalBuilder>"#;
        let builder = ConditionalBuilder {
            element: Element::parse(xml.as_bytes()).unwrap(),
        };

        assert_eq!(builder.build_steps(), vec!["hudson.tasks.Shell"]);
    }
}
