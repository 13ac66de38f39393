//! Backend collaborators.
//!
//! The core never talks to the network directly; the interaction crate
//! provides HTTP implementations of these traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::recommendation::{OutgoingRequest, ServerResponse};
use crate::report::{RefineRequest, ReportRequest, ReportResponse};

/// Failure talking to a backend endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the `error` field of the JSON body, when one was parseable.
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
}

/// The B2C chat endpoint.
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn send(&self, request: &OutgoingRequest) -> Result<ServerResponse, EndpointError>;
}

/// The B2B report endpoints.
#[async_trait]
pub trait ReportEndpoint: Send + Sync {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportResponse, EndpointError>;

    async fn refine(&self, request: &RefineRequest) -> Result<ReportResponse, EndpointError>;
}
