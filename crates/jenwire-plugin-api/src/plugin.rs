//! Capability traits and construction plumbing for plugin handlers.
//!
//! Handlers come in a small number of families, one per place Jenkins
//! embeds plugin-typed XML: views, SCM descriptors, and the job
//! property/publisher/builder lists. The registry maps a class name to a
//! constructor producing the appropriate [`PluginHandle`] variant; callers
//! match on the variant instead of downcasting through a class hierarchy.

use async_trait::async_trait;
use jenwire_core::{PostData, RestClient};
use serde_json::Value;
use xmltree::Element;

use crate::error::{PluginError, PluginResult};

/// Everything a handler constructor receives: a controller re-pointed at
/// the resource the XML fragment represents, the controller bound to the
/// server root that owns it, and the owned XML subtree itself.
pub struct PluginContext {
    pub controller: RestClient,
    pub root: RestClient,
    pub element: Element,
}

pub type PluginConstructor = fn(PluginContext) -> PluginHandle;

/// One registrable implementation: the class name it declares and the
/// constructor producing its handler.
pub struct PluginDescriptor {
    pub class_name: &'static str,
    pub construct: PluginConstructor,
}

/// A constructed handler, tagged by family.
pub enum PluginHandle {
    View(Box<dyn ViewPlugin>),
    Scm(Box<dyn ScmPlugin>),
    Property(Box<dyn PropertyPlugin>),
    Publisher(Box<dyn PublisherPlugin>),
    Builder(Box<dyn BuilderPlugin>),
}

impl PluginHandle {
    /// The type identifier the underlying handler declares.
    pub fn class_name(&self) -> &'static str {
        match self {
            PluginHandle::View(p) => p.class_name(),
            PluginHandle::Scm(p) => p.class_name(),
            PluginHandle::Property(p) => p.class_name(),
            PluginHandle::Publisher(p) => p.class_name(),
            PluginHandle::Builder(p) => p.class_name(),
        }
    }

    pub fn into_view(self) -> Option<Box<dyn ViewPlugin>> {
        match self {
            PluginHandle::View(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_scm(self) -> Option<Box<dyn ScmPlugin>> {
        match self {
            PluginHandle::Scm(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_property(self) -> Option<Box<dyn PropertyPlugin>> {
        match self {
            PluginHandle::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_publisher(self) -> Option<Box<dyn PublisherPlugin>> {
        match self {
            PluginHandle::Publisher(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_builder(self) -> Option<Box<dyn BuilderPlugin>> {
        match self {
            PluginHandle::Builder(p) => Some(p),
            _ => None,
        }
    }
}

/// A handler bound to one Jenkins view.
///
/// The provided methods cover the operations every view type shares;
/// implementations override [`as_composite`](ViewPlugin::as_composite)
/// when the view contains other views.
#[async_trait]
pub trait ViewPlugin: Send + Sync {
    /// The type identifier this implementation declares.
    fn class_name(&self) -> &'static str;

    /// The controller bound to this view's URL.
    fn controller(&self) -> &RestClient;

    /// Composite capability, for view types that contain sub-views.
    fn as_composite(&self) -> Option<&dyn CompositeView> {
        None
    }

    /// The display name of this view on the dashboard.
    async fn name(&self) -> PluginResult<String> {
        let data = self.controller().get_api_data().await?;
        data.get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                PluginError::UnexpectedResponse(format!(
                    "view at {} reported no name",
                    self.controller().url()
                ))
            })
    }

    async fn config_xml(&self) -> PluginResult<String> {
        Ok(self.controller().config_xml().await?)
    }

    async fn set_config_xml(&self, new_xml: &str) -> PluginResult<()> {
        Ok(self.controller().set_config_xml(new_xml).await?)
    }

    /// Deletes this view from the dashboard.
    async fn delete(&self) -> PluginResult<()> {
        Ok(self.controller().post("doDelete", PostData::Empty).await?)
    }
}

/// Recursive-search capability for views that contain other views.
#[async_trait]
pub trait CompositeView: Send + Sync {
    /// The views directly contained in this one. The listing is fetched
    /// fresh on every call; only the underlying document cache applies.
    async fn views(&self) -> PluginResult<Vec<Box<dyn ViewPlugin>>>;

    /// Locates a descendant view by name: direct children are matched
    /// first, then each composite child is searched recursively, first
    /// match wins.
    async fn find_view(&self, name: &str) -> PluginResult<Option<Box<dyn ViewPlugin>>>;

    /// Whether a view with the given name exists directly under this one.
    /// Unlike [`find_view`](CompositeView::find_view) this never recurses.
    async fn has_view(&self, name: &str) -> PluginResult<bool>;

    /// Every descendant view, recursively, deepest content first.
    async fn all_views(&self) -> PluginResult<Vec<Box<dyn ViewPlugin>>>;
}

/// A handler for the source-control descriptor of a job.
pub trait ScmPlugin: Send + Sync + std::fmt::Debug {
    fn class_name(&self) -> &'static str;

    /// The raw XML subtree this handler was bound to.
    fn element(&self) -> &Element;
}

/// A handler for one entry of a job's properties list.
pub trait PropertyPlugin: Send + Sync {
    fn class_name(&self) -> &'static str;
    fn element(&self) -> &Element;
}

/// A handler for one entry of a job's post-build publishers list.
pub trait PublisherPlugin: Send + Sync {
    fn class_name(&self) -> &'static str;
    fn element(&self) -> &Element;
}

/// A handler for one entry of a job's builders list.
pub trait BuilderPlugin: Send + Sync {
    fn class_name(&self) -> &'static str;
    fn element(&self) -> &Element;
}
