//! Facade over a resolved view handler.

use jenwire_plugin_api::{CompositeView, ViewPlugin};

use crate::error::Result;
use crate::jenkins::parse_refs;
use crate::job::Job;

/// One Jenkins view, of whatever concrete type resolution produced.
///
/// Views are filters that sort jobs on the dashboard; every job belongs to
/// one or more views. The generic operations live here; type-specific
/// behavior (e.g. recursive search on nested views) is reachable through
/// [`as_composite`](View::as_composite).
pub struct View {
    handle: Box<dyn ViewPlugin>,
}

impl View {
    pub(crate) fn new(handle: Box<dyn ViewPlugin>) -> Self {
        Self { handle }
    }

    /// The type identifier of the underlying view implementation.
    pub fn class_name(&self) -> &'static str {
        self.handle.class_name()
    }

    pub fn url(&self) -> &str {
        self.handle.controller().url()
    }

    /// The display name of this view on the dashboard.
    pub async fn name(&self) -> Result<String> {
        Ok(self.handle.name().await?)
    }

    /// The jobs that meet this view's filter.
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        let controller = self.handle.controller();
        let data = controller.get_api_data().await?;
        Ok(parse_refs(&data, "jobs", controller.url())?
            .into_iter()
            .map(|entry| Job::new(controller.clone_for(&entry.url)))
            .collect())
    }

    pub async fn config_xml(&self) -> Result<String> {
        Ok(self.handle.config_xml().await?)
    }

    pub async fn set_config_xml(&self, new_xml: &str) -> Result<()> {
        Ok(self.handle.set_config_xml(new_xml).await?)
    }

    /// Deletes this view from the dashboard.
    pub async fn delete(&self) -> Result<()> {
        Ok(self.handle.delete().await?)
    }

    /// Recursive-search capability, present on container view types.
    pub fn as_composite(&self) -> Option<&dyn CompositeView> {
        self.handle.as_composite()
    }

    /// The underlying handler, for callers composing with the plugin layer
    /// directly.
    pub fn handle(&self) -> &dyn ViewPlugin {
        self.handle.as_ref()
    }

    /// Deletes every job in this view.
    pub async fn delete_all_jobs(&self) -> Result<()> {
        for job in self.jobs().await? {
            job.delete().await?;
        }
        Ok(())
    }

    /// Disables every job in this view.
    pub async fn disable_all_jobs(&self) -> Result<()> {
        for job in self.jobs().await? {
            job.disable().await?;
        }
        Ok(())
    }

    /// Enables every job in this view.
    pub async fn enable_all_jobs(&self) -> Result<()> {
        for job in self.jobs().await? {
            job.enable().await?;
        }
        Ok(())
    }
}
