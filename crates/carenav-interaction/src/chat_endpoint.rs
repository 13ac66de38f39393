//! HttpChatEndpoint - JSON client for the B2C chat route.

use async_trait::async_trait;
use carenav_core::config::ClientConfig;
use carenav_core::endpoint::{ChatEndpoint, EndpointError};
use carenav_core::error::CarenavError;
use carenav_core::recommendation::{OutgoingRequest, ServerResponse};
use reqwest::Client;
use tracing::info;

use crate::http::{build_client, map_http_error, post_json};

/// Posts chat turns to `{base_url}{chat_path}`.
#[derive(Clone)]
pub struct HttpChatEndpoint {
    client: Client,
    url: String,
}

impl HttpChatEndpoint {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, CarenavError> {
        Ok(Self::new(
            build_client(config.request_timeout())?,
            config.endpoint_url(&config.chat_path),
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, request: &OutgoingRequest) -> Result<ServerResponse, EndpointError> {
        info!(
            url = %self.url,
            has_position = request.latitude.is_some(),
            selected_center_id = ?request.selected_center_id,
            "dispatching chat turn"
        );

        let (status, body) = post_json(&self.client, &self.url, request).await?;
        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }

        Ok(ServerResponse::from_body(&body))
    }
}
