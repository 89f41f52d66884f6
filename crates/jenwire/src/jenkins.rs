//! Entry point for one Jenkins server connection.

use std::sync::Arc;

use jenwire_core::{ApiData, CacheContext, Credentials, PostData, RestClient};
use jenwire_plugins::resolve_view;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::job::Job;
use crate::view::View;

/// Name/URL pair as returned by Jenkins listings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResourceRef {
    pub name: String,
    pub url: String,
}

pub(crate) fn parse_refs(data: &ApiData, field: &str, url: &str) -> Result<Vec<ResourceRef>> {
    let raw = data
        .get(field)
        .cloned()
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
    serde_json::from_value(raw).map_err(|error| {
        Error::UnexpectedResponse(format!("bad {field} listing from {url}: {error}"))
    })
}

/// Connection to one Jenkins master.
///
/// All entity wrappers handed out by this object share its credentials and
/// its [`CacheContext`], so a flush or clear issued here covers writes made
/// through any of them.
pub struct Jenkins {
    root: RestClient,
}

impl Jenkins {
    /// Connects with caching disabled: every read fetches and every write
    /// posts immediately.
    pub fn connect(url: &str, credentials: Option<Credentials>) -> Result<Self> {
        Self::connect_with_cache(url, credentials, Arc::new(CacheContext::disabled()))
    }

    /// Connects with an explicit cache context, e.g.
    /// `Arc::new(CacheContext::enabled())` for write-back behavior.
    pub fn connect_with_cache(
        url: &str,
        credentials: Option<Credentials>,
        cache: Arc<CacheContext>,
    ) -> Result<Self> {
        Ok(Self {
            root: RestClient::new(url, credentials, cache)?,
        })
    }

    pub fn url(&self) -> &str {
        self.root.url()
    }

    /// The controller bound to the server root, for callers that need
    /// direct access to the IO layer.
    pub fn controller(&self) -> &RestClient {
        &self.root
    }

    /// The Jenkins server version, as reported by the `X-Jenkins` response
    /// header.
    pub async fn version(&self) -> Result<String> {
        let headers = self.root.get_headers("").await?;
        headers
            .get("X-Jenkins")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::UnexpectedResponse("server reported no X-Jenkins version header".to_string())
            })
    }

    async fn view_listing(&self) -> Result<Vec<ResourceRef>> {
        let data = self.root.get_api_data().await?;
        parse_refs(&data, "views", self.root.url())
    }

    /// All views on the dashboard. Views of unsupported types are skipped.
    pub async fn views(&self) -> Result<Vec<View>> {
        let mut result = Vec::new();
        for entry in self.view_listing().await? {
            if let Some(handle) = resolve_view(&self.root.clone_for(&entry.url), &self.root).await?
            {
                result.push(View::new(handle));
            }
        }
        Ok(result)
    }

    /// Locates a view by name anywhere on the dashboard: top-level views
    /// are matched first, then nested views are searched recursively.
    pub async fn find_view(&self, name: &str) -> Result<Option<View>> {
        let listing = self.view_listing().await?;

        for entry in &listing {
            if entry.name == name {
                let handle = resolve_view(&self.root.clone_for(&entry.url), &self.root).await?;
                return Ok(handle.map(View::new));
            }
        }

        for entry in &listing {
            if let Some(handle) =
                resolve_view(&self.root.clone_for(&entry.url), &self.root).await?
            {
                if let Some(composite) = handle.as_composite() {
                    if let Some(found) = composite.find_view(name).await? {
                        return Ok(Some(View::new(found)));
                    }
                }
            }
        }

        Ok(None)
    }

    /// Creates a new top-level view of the given type.
    pub async fn create_view(&self, name: &str, class_name: &str) -> Result<View> {
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
        self.root.post("createView", PostData::Form(fields)).await?;

        for entry in self.view_listing().await? {
            if entry.name == name {
                if let Some(handle) =
                    resolve_view(&self.root.clone_for(&entry.url), &self.root).await?
                {
                    return Ok(View::new(handle));
                }
            }
        }
        Err(Error::ViewCreation(format!("{name} on {}", self.root.url())))
    }

    async fn job_listing(&self) -> Result<Vec<ResourceRef>> {
        let data = self.root.get_api_data().await?;
        parse_refs(&data, "jobs", self.root.url())
    }

    /// All jobs known to the master.
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        Ok(self
            .job_listing()
            .await?
            .into_iter()
            .map(|entry| Job::new(self.root.clone_for(&entry.url)))
            .collect())
    }

    /// Locates a job by name.
    pub async fn find_job(&self, name: &str) -> Result<Option<Job>> {
        Ok(self
            .job_listing()
            .await?
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| Job::new(self.root.clone_for(&entry.url))))
    }

    /// Uploads every pending configuration edit held in the write-back
    /// cache.
    pub async fn flush(&self) -> Result<()> {
        Ok(self.root.flush().await?)
    }

    /// True while the cache holds configuration edits not yet committed to
    /// the server.
    pub fn is_dirty(&self) -> bool {
        self.root.is_dirty()
    }

    /// Discards all cached documents and the plugin registry, so
    /// subsequent reads fetch fresh data and subsequent resolutions
    /// re-scan the implementation set. Flush first to keep pending writes.
    pub fn clear_cache(&self) {
        self.root.cache().clear();
        jenwire_plugins::clear_registry();
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const LIST_CONFIG: &str = "<hudson.model.ListView><name>team</name></hudson.model.ListView>";

    async fn mount_root_listing(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_version_from_response_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).insert_header("X-Jenkins", "2.452.1"))
            .mount(&server)
            .await;

        let jenkins = Jenkins::connect(&server.uri(), None).unwrap();
        assert_eq!(jenkins.version().await.unwrap(), "2.452.1");
    }

    #[tokio::test]
    async fn test_find_view_matches_direct_child() {
        let server = MockServer::start().await;
        let view_url = format!("{}/view/team/", server.uri());
        mount_root_listing(
            &server,
            serde_json::json!({ "views": [{ "name": "team", "url": view_url }] }),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/view/team/config.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LIST_CONFIG))
            .mount(&server)
            .await;

        let jenkins = Jenkins::connect(&server.uri(), None).unwrap();
        let view = jenkins.find_view("team").await.unwrap().expect("view exists");
        assert_eq!(view.class_name(), jenwire_plugins::listview::CLASS_NAME);

        assert!(jenkins.find_view("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_views_skips_unsupported_types() {
        let server = MockServer::start().await;
        mount_root_listing(
            &server,
            serde_json::json!({ "views": [
                { "name": "team", "url": format!("{}/view/team/", server.uri()) },
                { "name": "exotic", "url": format!("{}/view/exotic/", server.uri()) },
            ]}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/view/team/config.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LIST_CONFIG))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/view/exotic/config.xml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<hudson.plugins.categorized__view.CategorizedView/>"),
            )
            .mount(&server)
            .await;

        let jenkins = Jenkins::connect(&server.uri(), None).unwrap();
        let views = jenkins.views().await.unwrap();
        assert_eq!(views.len(), 1);
    }

    #[tokio::test]
    async fn test_find_job() {
        let server = MockServer::start().await;
        mount_root_listing(
            &server,
            serde_json::json!({ "jobs": [
                { "name": "unit-tests", "url": format!("{}/job/unit-tests/", server.uri()) },
            ]}),
        )
        .await;

        let jenkins = Jenkins::connect(&server.uri(), None).unwrap();
        let job = jenkins.find_job("unit-tests").await.unwrap().expect("job exists");
        assert!(job.url().ends_with("/job/unit-tests/"));

        assert!(jenkins.find_job("missing").await.unwrap().is_none());
    }
}
