//! HTTP implementations of the backend collaborators.

pub mod chat_endpoint;
pub mod http;
pub mod report_endpoint;

pub use chat_endpoint::HttpChatEndpoint;
pub use http::build_client;
pub use report_endpoint::HttpReportEndpoint;
