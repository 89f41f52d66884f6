//! Facade over one Jenkins job.

use jenwire_core::{PostData, RestClient};
use jenwire_plugin_api::ScmPlugin;
use serde_json::Value;

use crate::build::Build;
use crate::error::{Error, Result};
use crate::jobxml::JobXml;

pub struct Job {
    controller: RestClient,
}

impl Job {
    pub(crate) fn new(controller: RestClient) -> Self {
        Self { controller }
    }

    /// Binds a job facade to an already-pointed controller.
    pub fn from_controller(controller: RestClient) -> Self {
        Self::new(controller)
    }

    pub fn url(&self) -> &str {
        self.controller.url()
    }

    pub fn controller(&self) -> &RestClient {
        &self.controller
    }

    pub async fn name(&self) -> Result<String> {
        let data = self.controller.get_api_data().await?;
        data.get("name")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::UnexpectedResponse(format!(
                    "job at {} reported no name",
                    self.controller.url()
                ))
            })
    }

    pub async fn is_disabled(&self) -> Result<bool> {
        let data = self.controller.get_api_data().await?;
        Ok(data
            .get("disabled")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    pub async fn enable(&self) -> Result<()> {
        Ok(self.controller.post("enable", PostData::Empty).await?)
    }

    pub async fn disable(&self) -> Result<()> {
        Ok(self.controller.post("disable", PostData::Empty).await?)
    }

    pub async fn delete(&self) -> Result<()> {
        Ok(self.controller.post("doDelete", PostData::Empty).await?)
    }

    /// Queues a new build of this job.
    pub async fn start_build(&self) -> Result<()> {
        Ok(self.controller.post("build", PostData::Empty).await?)
    }

    pub async fn config_xml(&self) -> Result<String> {
        Ok(self.controller.config_xml().await?)
    }

    pub async fn set_config_xml(&self, new_xml: &str) -> Result<()> {
        Ok(self.controller.set_config_xml(new_xml).await?)
    }

    /// The parsed configuration document for structured edits.
    pub async fn job_xml(&self) -> Result<JobXml> {
        JobXml::parse(&self.config_xml().await?)
    }

    /// The handler for this job's source-control descriptor. Every job has
    /// one, so an unsupported SCM type is an error here rather than a
    /// skippable absence.
    pub async fn scm(&self) -> Result<Box<dyn ScmPlugin>> {
        self.job_xml().await?.scm(&self.controller)
    }

    /// The most recent build of this job, when one exists.
    pub async fn last_build(&self) -> Result<Option<Build>> {
        let data = self.controller.get_api_data().await?;
        let Some(last) = data.get("lastBuild").filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        let url = last.get("url").and_then(Value::as_str).ok_or_else(|| {
            Error::UnexpectedResponse(format!(
                "lastBuild entry for {} carries no url",
                self.controller.url()
            ))
        })?;
        Ok(Some(Build::new(self.controller.clone_for(url))))
    }

    /// A specific build of this job by number.
    pub fn build(&self, number: u32) -> Build {
        let url = format!("{}{number}", self.controller.url());
        Build::new(self.controller.clone_for(&url))
    }

    /// All recorded builds of this job, most recent first.
    pub async fn builds(&self) -> Result<Vec<Build>> {
        let data = self.controller.get_api_data().await?;
        let raw = data
            .get("builds")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        let entries: Vec<Value> = match raw {
            Value::Array(entries) => entries,
            _ => {
                return Err(Error::UnexpectedResponse(format!(
                    "bad builds listing from {}",
                    self.controller.url()
                )))
            }
        };

        let mut builds = Vec::new();
        for entry in entries {
            let url = entry.get("url").and_then(Value::as_str).ok_or_else(|| {
                Error::UnexpectedResponse(format!(
                    "builds entry for {} carries no url",
                    self.controller.url()
                ))
            })?;
            builds.push(Build::new(self.controller.clone_for(url)));
        }
        Ok(builds)
    }
}
