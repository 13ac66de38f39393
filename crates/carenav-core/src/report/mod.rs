//! B2B report drafting form types.

mod model;

pub use model::{
    REPORT_TYPE, RefineRequest, ReportForm, ReportMeta, ReportRequest, ReportResponse,
    ValidationError,
};
