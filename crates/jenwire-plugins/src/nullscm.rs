//! Interface to the built-in null SCM, used by jobs with no source
//! control configured.

use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ScmPlugin};
use xmltree::Element;

pub const CLASS_NAME: &str = "hudson.scm.NullSCM";

#[derive(Debug)]
pub struct NullScm {
    element: Element,
}

impl NullScm {
    fn new(ctx: PluginContext) -> Self {
        Self {
            element: ctx.element,
        }
    }
}

impl ScmPlugin for NullScm {
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
        construct: |ctx| PluginHandle::Scm(Box::new(NullScm::new(ctx))),
    }
}
