//! Facade over one recorded build of a job.

use chrono::{DateTime, Utc};
use jenwire_core::RestClient;
use serde_json::Value;

use crate::error::{Error, Result};

pub struct Build {
    controller: RestClient,
}

impl Build {
    pub(crate) fn new(controller: RestClient) -> Self {
        Self { controller }
    }

    pub fn url(&self) -> &str {
        self.controller.url()
    }

    pub async fn number(&self) -> Result<u32> {
        let data = self.controller.get_api_data().await?;
        data.get("number")
            .and_then(Value::as_u64)
            .map(|number| number as u32)
            .ok_or_else(|| {
                Error::UnexpectedResponse(format!(
                    "build at {} reported no number",
                    self.controller.url()
                ))
            })
    }

    /// True while the build is still running.
    pub async fn is_building(&self) -> Result<bool> {
        let data = self.controller.get_api_data().await?;
        Ok(data
            .get("building")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// The final status string ("SUCCESS", "FAILURE", ...); `None` while
    /// the build is still running.
    pub async fn result(&self) -> Result<Option<String>> {
        let data = self.controller.get_api_data().await?;
        Ok(data
            .get("result")
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    /// The time the build started, from its epoch-millisecond timestamp.
    pub async fn start_time(&self) -> Result<DateTime<Utc>> {
        let data = self.controller.get_api_data().await?;
        data.get("timestamp")
            .and_then(Value::as_i64)
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| {
                Error::UnexpectedResponse(format!(
                    "build at {} reported no usable timestamp",
                    self.controller.url()
                ))
            })
    }

    /// The plain-text console log of this build.
    pub async fn console_output(&self) -> Result<String> {
        Ok(self.controller.get_text("consoleText").await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Datelike, Timelike};
    use jenwire_core::CacheContext;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn build_for(server: &MockServer) -> Build {
        let root =
            RestClient::new(&server.uri(), None, Arc::new(CacheContext::disabled())).unwrap();
        Build::new(root.clone_for(&format!("{}/job/demo/3/", server.uri())))
    }

    async fn mount_api_json(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/job/demo/3/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_number() {
        let server = MockServer::start().await;
        mount_api_json(&server, serde_json::json!({ "number": 3 })).await;
        assert_eq!(build_for(&server).number().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_is_building() {
        let server = MockServer::start().await;
        mount_api_json(&server, serde_json::json!({ "building": true })).await;
        assert!(build_for(&server).is_building().await.unwrap());
    }

    #[tokio::test]
    async fn test_result_while_running_is_none() {
        let server = MockServer::start().await;
        mount_api_json(&server, serde_json::json!({ "building": true, "result": null })).await;
        assert!(build_for(&server).result().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_result_after_completion() {
        let server = MockServer::start().await;
        mount_api_json(&server, serde_json::json!({ "result": "FAILURE" })).await;
        assert_eq!(
            build_for(&server).result().await.unwrap().as_deref(),
            Some("FAILURE")
        );
    }

    #[tokio::test]
    async fn test_start_time() {
        let server = MockServer::start().await;
        // 12:03:17am Nov 30 2013 UTC
        mount_api_json(&server, serde_json::json!({ "timestamp": 1385784197000i64 })).await;

        let start = build_for(&server).start_time().await.unwrap();
        assert_eq!(
            (start.year(), start.month(), start.day()),
            (2013, 11, 30)
        );
        assert_eq!(
            (start.hour(), start.minute(), start.second()),
            (0, 3, 17)
        );
    }

    #[tokio::test]
    async fn test_console_output() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/job/demo/3/consoleText"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Some sample console output"))
            .mount(&server)
            .await;

        assert_eq!(
            build_for(&server).console_output().await.unwrap(),
            "Some sample console output"
        );
    }
}
