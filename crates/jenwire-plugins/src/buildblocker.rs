//! Interface to the Build Blocker job property plugin.

use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, PropertyPlugin};
use xmltree::Element;

use crate::util::child_text;

pub const CLASS_NAME: &str = "hudson.plugins.buildblocker.BuildBlockerProperty";

pub struct BuildBlockerProperty {
    element: Element,
}

impl BuildBlockerProperty {
    fn new(ctx: PluginContext) -> Self {
        Self {
            element: ctx.element,
        }
    }

    pub fn is_enabled(&self) -> bool {
        child_text(&self.element, "useBuildBlocker").trim() == "true"
    }

    /// Names of the jobs that block this one while they are running. The
    /// configuration stores them whitespace-separated.
    pub fn blocking_jobs(&self) -> Vec<String> {
        child_text(&self.element, "blockingJobs")
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}

impl PropertyPlugin for BuildBlockerProperty {
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
        construct: |ctx| PluginHandle::Property(Box::new(BuildBlockerProperty::new(ctx))),
    }
}
