//! REST controller for direct IO against the Jenkins API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheContext;
use crate::error::{Error, Result};

/// Structured attributes returned by a Jenkins `api/json` endpoint.
pub type ApiData = serde_json::Map<String, Value>;

/// Credentials for authenticated access. Use an API token rather than the
/// account password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// Payload for a POST operation.
#[derive(Debug, Clone)]
pub enum PostData {
    /// Form-encoded fields, e.g. for `createView`.
    Form(Vec<(String, String)>),
    /// A raw XML document, sent as `text/xml`.
    Xml(String),
    /// No body; the URL itself triggers the action.
    Empty,
}

/// Abstraction encapsulating all IO requests for one Jenkins resource.
///
/// A controller is bound to exactly one resource locator. Cloning it with
/// [`clone_for`](RestClient::clone_for) re-points the clone at another
/// resource while preserving credentials and the shared [`CacheContext`].
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    url: String,
    credentials: Option<Credentials>,
    cache: Arc<CacheContext>,
}

fn normalize_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches(['/', '\\']))
}

impl RestClient {
    pub fn new(
        url: &str,
        credentials: Option<Credentials>,
        cache: Arc<CacheContext>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self {
            http,
            url: normalize_url(url),
            credentials,
            cache,
        })
    }

    /// The normalized locator all IO operations on this object target.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn cache(&self) -> &Arc<CacheContext> {
        &self.cache
    }

    /// Creates a copy of this controller bound to a different resource.
    /// Credentials and cache state are shared with the original.
    pub fn clone_for(&self, new_url: &str) -> RestClient {
        RestClient {
            http: self.http.clone(),
            url: normalize_url(new_url),
            credentials: self.credentials.clone(),
            cache: Arc::clone(&self.cache),
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches(['/', '\\']))
    }

    fn username(&self) -> Option<String> {
        self.credentials.as_ref().map(|c| c.username.clone())
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(c) => request.basic_auth(&c.username, Some(&c.token)),
            None => request,
        }
    }

    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                url,
                %status,
                user = self.username().as_deref().unwrap_or("anonymous"),
                "request rejected by server"
            );
            return Err(Error::Http {
                status,
                url: url.to_string(),
                username: self.username(),
            });
        }
        Ok(response)
    }

    /// Gets the raw text served at `path`, relative to this controller's
    /// locator. Pass `""` for the locator itself.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.join(path);
        self.raw_text(&url).await
    }

    async fn raw_text(&self, url: &str) -> Result<String> {
        if let Some(text) = self.cache.text(url) {
            tracing::debug!(url, "text cache hit");
            return Ok(text);
        }
        tracing::debug!(url, "text cache miss");

        let response = self.send(url, self.http.get(url)).await?;
        let text = response.text().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        self.cache.store_text(url, &text);
        Ok(text)
    }

    /// Retrieves the Jenkins attributes for this resource from its
    /// `api/json` endpoint, parsed into a structured mapping. The response
    /// is only ever parsed, never evaluated.
    pub async fn get_api_data(&self) -> Result<ApiData> {
        self.api_data(None).await
    }

    /// Same as [`get_api_data`](RestClient::get_api_data) with extra query
    /// parameters, e.g. `"tree=views[name,url]"`.
    pub async fn get_api_data_with_query(&self, query: &str) -> Result<ApiData> {
        self.api_data(Some(query)).await
    }

    async fn api_data(&self, query: Option<&str>) -> Result<ApiData> {
        let mut url = format!("{}api/json", self.url);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        let text = self.raw_text(&url).await?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| Error::MalformedResponse {
                url: url.clone(),
                source,
            })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(Error::MalformedResponse {
                url,
                source: serde::de::Error::custom("expected a JSON object"),
            }),
        }
    }

    /// Gets the HTTP response headers served at `path`.
    pub async fn get_headers(&self, path: &str) -> Result<HeaderMap> {
        let url = self.join(path);
        if let Some(headers) = self.cache.headers(&url) {
            tracing::debug!(url = %url, "header cache hit");
            return Ok(headers);
        }
        tracing::debug!(url = %url, "header cache miss");

        let response = self.send(&url, self.http.get(&url)).await?;
        let headers = response.headers().clone();
        self.cache.store_headers(&url, &headers);
        Ok(headers)
    }

    /// Sends data to, or triggers an operation via, a Jenkins URL.
    pub async fn post(&self, path: &str, data: PostData) -> Result<()> {
        let url = self.join(path);
        self.post_absolute(&url, data).await
    }

    async fn post_absolute(&self, url: &str, data: PostData) -> Result<()> {
        let request = match data {
            PostData::Form(fields) => self.http.post(url).form(&fields),
            PostData::Xml(body) => self
                .http
                .post(url)
                .header(CONTENT_TYPE, "text/xml")
                .body(body),
            PostData::Empty => self.http.post(url),
        };
        self.send(url, request).await?;
        Ok(())
    }

    /// The `config.xml` document backing this resource. Reads are served
    /// from the write-back cache when a pending edit exists.
    pub async fn config_xml(&self) -> Result<String> {
        if let Some(xml) = self.cache.config(&self.url) {
            tracing::debug!(url = %self.url, "config.xml served from write-back cache");
            return Ok(xml);
        }
        self.get_text("config.xml").await
    }

    /// Replaces the `config.xml` document backing this resource.
    ///
    /// With caching enabled the new document is held locally until
    /// [`flush`](RestClient::flush); otherwise it is posted immediately.
    /// Locators are assumed to identify unique entities: a job reachable
    /// through several view URLs caches once per URL, so keep locators in
    /// their canonical form.
    pub async fn set_config_xml(&self, new_xml: &str) -> Result<()> {
        if self.cache.is_enabled() {
            self.cache.store_config(&self.url, new_xml);
            return Ok(());
        }
        self.post("config.xml", PostData::Xml(new_xml.to_string()))
            .await
    }

    /// Uploads every cached configuration edit to the server.
    ///
    /// The dirty flag is cleared before any network write, so a concurrent
    /// edit during the flush marks the cache dirty again. Documents are
    /// posted independently; failures are collected per locator and
    /// reported together, with the successful entries already committed.
    pub async fn flush(&self) -> Result<()> {
        let Some(pending) = self.cache.take_dirty_snapshot() else {
            tracing::debug!("ignoring clean flush call");
            return Ok(());
        };
        tracing::debug!(documents = pending.len(), "flushing cached configuration");

        let mut failures = std::collections::HashMap::new();
        for (locator, xml) in pending {
            let url = format!("{locator}config.xml");
            if let Err(error) = self.post_absolute(&url, PostData::Xml(xml)).await {
                failures.insert(locator, error);
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Flush { failures })
        }
    }

    /// True while this connection's cache holds configuration edits that
    /// have not been flushed to the server.
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }
}
