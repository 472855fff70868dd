//! Outbound HTTP client wrapper: one reused connection pool per upstream,
//! base URL plus fixed timeout.
//! Used by: handlers::hello, handlers::users, state.

use std::time::Duration;

use crate::error::{Error, Result};

pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            inner,
        })
    }

    /// GET `base_url + path` and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let response = self
            .inner
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// GET `base_url + path` and drop the body. Non-2xx still counts as an
    /// error so callers can record the failure.
    pub async fn fire(&self, path: &str) -> Result<()> {
        let response = self
            .inner
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }
        Ok(())
    }
}
