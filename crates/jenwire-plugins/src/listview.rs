//! Interface to Jenkins views of type `ListView`.
//!
//! List views are simple filters that sort jobs on the dashboard; they
//! expose no behavior beyond the generic view operations.

use jenwire_core::RestClient;
use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ViewPlugin};

pub const CLASS_NAME: &str = "hudson.model.ListView";

pub struct ListView {
    controller: RestClient,
}

impl ListView {
    fn new(ctx: PluginContext) -> Self {
        Self {
            controller: ctx.controller,
        }
    }
}

impl ViewPlugin for ListView {
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
        construct: |ctx| PluginHandle::View(Box::new(ListView::new(ctx))),
    }
}
