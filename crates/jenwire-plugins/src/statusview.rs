//! Interface to Jenkins views of type `StatusView`.

use jenwire_core::RestClient;
use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ViewPlugin};

pub const CLASS_NAME: &str = "hudson.plugins.status__view.StatusView";

pub struct StatusView {
    controller: RestClient,
}

impl StatusView {
    fn new(ctx: PluginContext) -> Self {
        Self {
            controller: ctx.controller,
        }
    }
}

impl ViewPlugin for StatusView {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn controller(&self) -> &RestClient {
        &self.controller
    }
}

pub(crate) fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        class_name: CLASS_NAME,
        construct: |ctx| PluginHandle::View(Box::new(StatusView::new(ctx))),
    }
}
