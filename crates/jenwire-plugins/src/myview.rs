//! Interface to Jenkins views of type `MyView`.

use jenwire_core::RestClient;
use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ViewPlugin};

pub const CLASS_NAME: &str = "hudson.model.MyView";

pub struct MyView {
    controller: RestClient,
}

impl MyView {
    fn new(ctx: PluginContext) -> Self {
        Self {
            controller: ctx.controller,
        }
    }
}

impl ViewPlugin for MyView {
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
        construct: |ctx| PluginHandle::View(Box::new(MyView::new(ctx))),
    }
}
