use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::{
    config::UpstreamConfig,
    upstream::{CatalogClient, RawResultSet, error::UpstreamError},
};

/// Catalog client talking JSON over HTTP to the catalog gateway
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("trackproxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let url = self.endpoint(path);
        debug!("GET {url} {params:?}");

        let response = self.http.get(&url).query(params).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<Value>().map_err(UpstreamError::Decode)
    }
}

impl CatalogClient for HttpCatalogClient {
    fn fetch_radio(
        &self,
        seed_id: &str,
        count: usize,
    ) -> Result<Option<RawResultSet>, UpstreamError> {
        let limit = count.to_string();
        let body = self.get_json("watch_playlist", &[("videoId", seed_id), ("limit", limit.as_str())])?;
        Ok(RawResultSet::from_watch_playlist(body))
    }

    fn search_songs(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Option<RawResultSet>, UpstreamError> {
        let limit = count.to_string();
        let body = self.get_json(
            "search",
            &[("query", query), ("filter", "songs"), ("limit", limit.as_str())],
        )?;
        Ok(RawResultSet::from_search_results(body))
    }
}
