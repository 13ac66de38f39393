//! HttpReportEndpoint - JSON client for the B2B report routes.

use async_trait::async_trait;
use carenav_core::config::ClientConfig;
use carenav_core::endpoint::{EndpointError, ReportEndpoint};
use carenav_core::error::CarenavError;
use carenav_core::report::{RefineRequest, ReportRequest, ReportResponse};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::http::{build_client, map_http_error, post_json};

/// Posts report drafts to the generate and refine routes.
#[derive(Clone)]
pub struct HttpReportEndpoint {
    client: Client,
    generate_url: String,
    refine_url: String,
}

impl HttpReportEndpoint {
    pub fn new(
        client: Client,
        generate_url: impl Into<String>,
        refine_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            generate_url: generate_url.into(),
            refine_url: refine_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, CarenavError> {
        Ok(Self::new(
            build_client(config.request_timeout())?,
            config.endpoint_url(&config.report_path),
            config.endpoint_url(&config.refine_path),
        ))
    }

    async fn post<T: Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ReportResponse, EndpointError> {
        let (status, text) = post_json(&self.client, url, body).await?;
        if !status.is_success() {
            return Err(map_http_error(status, &text));
        }
        Ok(ReportResponse::from_body(&text))
    }
}

#[async_trait]
impl ReportEndpoint for HttpReportEndpoint {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportResponse, EndpointError> {
        info!(
            district = %request.district,
            year_from = request.year_from,
            year_to = request.year_to,
            "requesting report draft"
        );
        self.post(&self.generate_url, request).await
    }

    async fn refine(&self, request: &RefineRequest) -> Result<ReportResponse, EndpointError> {
        info!(
            instruction_len = request.instruction.chars().count(),
            "requesting report refinement"
        );
        self.post(&self.refine_url, request).await
    }
}
