//! Interface to Jenkins views of type `NestedView`.
//!
//! Views of this type contain other views as sub-views, so this is where
//! the recursive resolution machinery lives: the child listing is fetched
//! fresh on every call and each child is resolved through the shared
//! registry, meaning a nested view three levels deep is reachable through
//! three chained resolutions.

use async_trait::async_trait;
use jenwire_core::{PostData, RestClient};
use jenwire_plugin_api::{
    CompositeView,
    PluginContext,
    PluginDescriptor,
    PluginError,
    PluginHandle,
    PluginResult,
    ViewPlugin,
};
use serde::Deserialize;

use crate::resolve::resolve_view;
use crate::viewxml::ViewXml;

pub const CLASS_NAME: &str = "hudson.plugins.nested__view.NestedView";

pub struct NestedView {
    controller: RestClient,
    root: RestClient,
}

#[derive(Debug, Deserialize)]
struct ViewRef {
    name: String,
    url: String,
}

impl NestedView {
    fn new(ctx: PluginContext) -> Self {
        Self {
            controller: ctx.controller,
            root: ctx.root,
        }
    }

    async fn child_listing(&self) -> PluginResult<Vec<ViewRef>> {
        let data = self.controller.get_api_data().await?;
        let raw = data
            .get("views")
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
        serde_json::from_value(raw).map_err(|error| {
            PluginError::UnexpectedResponse(format!(
                "bad view listing from {}: {error}",
                self.controller.url()
            ))
        })
    }

    async fn resolve_child(&self, url: &str) -> PluginResult<Option<Box<dyn ViewPlugin>>> {
        resolve_view(&self.controller.clone_for(url), &self.root).await
    }

    /// Creates a new sub-view within this nested view and returns its
    /// handler.
    pub async fn create_view(
        &self,
        name: &str,
        class_name: &str,
    ) -> PluginResult<Box<dyn ViewPlugin>> {
        // Tag names escape underscores as "__"; the createView form wants
        // the real class name.
        let mode = class_name.replace("__", "_");
        let fields = vec![
            ("name".to_string(), name.to_string()),
            ("mode".to_string(), mode.clone()),
            ("Submit".to_string(), "OK".to_string()),
            (
                "json".to_string(),
                serde_json::json!({ "name": name, "mode": mode }).to_string(),
            ),
        ];
        self.controller
            .post("createView", PostData::Form(fields))
            .await?;

        for child in self.child_listing().await? {
            if child.name == name {
                if let Some(view) = self.resolve_child(&child.url).await? {
                    return Ok(view);
                }
            }
        }
        Err(PluginError::ViewCreation(format!(
            "{name} under {}",
            self.controller.url()
        )))
    }

    /// Creates a copy of an existing view under this nested view, with the
    /// copied configuration renamed to match.
    pub async fn clone_subview(
        &self,
        existing: &dyn ViewPlugin,
        new_name: &str,
    ) -> PluginResult<Box<dyn ViewPlugin>> {
        let created = self.create_view(new_name, existing.class_name()).await?;
        let mut config = ViewXml::parse(&existing.config_xml().await?)?;
        config.rename(new_name);
        created.set_config_xml(&config.to_xml()?).await?;
        Ok(created)
    }

    /// Moves an existing view under this nested view. The original view
    /// object is obsolete once this returns.
    pub async fn move_view(&self, existing: &dyn ViewPlugin) -> PluginResult<Box<dyn ViewPlugin>> {
        let name = existing.name().await?;
        let moved = self.clone_subview(existing, &name).await?;
        existing.delete().await?;
        Ok(moved)
    }
}

impl ViewPlugin for NestedView {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn controller(&self) -> &RestClient {
        &self.controller
    }

    fn as_composite(&self) -> Option<&dyn CompositeView> {
        Some(self)
    }
}

#[async_trait]
impl CompositeView for NestedView {
    async fn views(&self) -> PluginResult<Vec<Box<dyn ViewPlugin>>> {
        let mut result = Vec::new();
        for child in self.child_listing().await? {
            if let Some(view) = self.resolve_child(&child.url).await? {
                result.push(view);
            }
        }
        Ok(result)
    }

    async fn find_view(&self, name: &str) -> PluginResult<Option<Box<dyn ViewPlugin>>> {
        let children = self.child_listing().await?;

        for child in &children {
            if child.name == name {
                return self.resolve_child(&child.url).await;
            }
        }

        for child in &children {
            if let Some(view) = self.resolve_child(&child.url).await? {
                if let Some(composite) = view.as_composite() {
                    if let Some(found) = composite.find_view(name).await? {
                        return Ok(Some(found));
                    }
                }
            }
        }

        Ok(None)
    }

    async fn has_view(&self, name: &str) -> PluginResult<bool> {
        Ok(self
            .child_listing()
            .await?
            .iter()
            .any(|child| child.name == name))
    }

    async fn all_views(&self) -> PluginResult<Vec<Box<dyn ViewPlugin>>> {
        let direct = self.views().await?;

        let mut result: Vec<Box<dyn ViewPlugin>> = Vec::new();
        for view in &direct {
            if let Some(composite) = view.as_composite() {
                result.extend(composite.all_views().await?);
            }
        }
        result.extend(direct);
        Ok(result)
    }
}

pub(crate) fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        class_name: CLASS_NAME,
        construct: |ctx| PluginHandle::View(Box::new(NestedView::new(ctx))),
    }
}
