//! Interface to the built-in `AllView`, the default "All" tab every
//! Jenkins instance starts with.

use jenwire_core::RestClient;
use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ViewPlugin};

pub const CLASS_NAME: &str = "hudson.model.AllView";

pub struct AllView {
    controller: RestClient,
}

impl AllView {
    fn new(ctx: PluginContext) -> Self {
        Self {
            controller: ctx.controller,
        }
    }
}

impl ViewPlugin for AllView {
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
        construct: |ctx| PluginHandle::View(Box::new(AllView::new(ctx))),
    }
}
