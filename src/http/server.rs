use log::{error, info};
use rouille::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::{
    config::{HttpConfig, LimitsConfig},
    domain::track::Track,
    http::error::ApiError,
    service::TrackService,
};

const SERVICE_NAME: &str = "trackproxy";

pub struct HttpServer {
    service: TrackService,
    limits: LimitsConfig,
    pub config: HttpConfig,
}

impl HttpServer {
    pub fn new(service: TrackService, limits: LimitsConfig, config: HttpConfig) -> Self {
        Self {
            service,
            limits,
            config,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = rouille::router!(request,
            (GET) (/health) => {
                Self::handle_health()
            },
            (GET) (/similar/{video_id: String}) => {
                self.handle_similar(video_id, request)
            },
            (GET) (/search) => {
                self.handle_search(request)
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.raw_url());
    }

    fn handle_health() -> Response {
        Response::json(&HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        })
    }

    fn handle_similar(&self, video_id: String, request: &Request) -> Response {
        match self.similar(video_id, request) {
            Ok(body) => Response::json(&body),
            Err(e) => e.into_response(),
        }
    }

    fn similar(&self, video_id: String, request: &Request) -> Result<SimilarTracksResponse, ApiError> {
        if video_id.is_empty() {
            return Err(ApiError::NotFound("missing video id".into()));
        }
        let limit = self.limits.similar(Self::requested_limit(request)?)?;

        let tracks = self.service.similar_tracks(&video_id, limit).map_err(|e| {
            error!("Error getting similar tracks for {video_id}: {e}");
            ApiError::Internal(format!("Failed to get similar tracks: {e}"))
        })?;

        Ok(SimilarTracksResponse { video_id, tracks })
    }

    fn handle_search(&self, request: &Request) -> Response {
        match self.search(request) {
            Ok(body) => Response::json(&body),
            Err(e) => e.into_response(),
        }
    }

    fn search(&self, request: &Request) -> Result<SearchResponse, ApiError> {
        let query = request
            .get_param("q")
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::BadRequest("missing search query".into()))?;
        let limit = self.limits.search(Self::requested_limit(request)?)?;

        let tracks = self.service.search_tracks(&query, limit).map_err(|e| {
            error!("Error searching for '{query}': {e}");
            ApiError::Internal(format!("Search failed: {e}"))
        })?;

        Ok(SearchResponse { query, tracks })
    }

    /// `limit` query parameter, if the caller gave one
    fn requested_limit(request: &Request) -> Result<Option<usize>, ApiError> {
        request
            .get_param("limit")
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| ApiError::BadRequest(format!("invalid limit: {raw}")))
            })
            .transpose()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarTracksResponse {
    pub video_id: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub tracks: Vec<Track>,
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
