use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The only report type the drafting form produces.
pub const REPORT_TYPE: &str = "취약지역 집중지원";

/// Why a report form or refine request was rejected before dispatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("district is required")]
    MissingDistrict,
    #[error("year range must be present with year_from <= year_to")]
    InvalidYearRange,
    #[error("no generated report to refine")]
    MissingReport,
    #[error("refine instruction is empty")]
    MissingInstruction,
}

impl ValidationError {
    /// Inline guidance shown in the report log.
    pub fn user_message(self) -> &'static str {
        match self {
            ValidationError::MissingDistrict => "자치구를 선택해줘.",
            ValidationError::InvalidYearRange => "연도 범위를 확인해줘. (시작연도 ≤ 종료연도)",
            ValidationError::MissingReport => "먼저 초안을 생성해줘.",
            ValidationError::MissingInstruction => "수정 요청 내용을 입력해줘.",
        }
    }
}

/// Raw form values as the user selected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub district: String,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl ReportForm {
    pub fn new(district: impl Into<String>, year_from: Option<i32>, year_to: Option<i32>) -> Self {
        Self {
            district: district.into(),
            year_from,
            year_to,
        }
    }

    /// Checks the form and builds the request body.
    ///
    /// A zero year counts as "not selected".
    pub fn validate(&self) -> Result<ReportRequest, ValidationError> {
        let district = self.district.trim();
        if district.is_empty() {
            return Err(ValidationError::MissingDistrict);
        }

        let year_from = self.year_from.filter(|year| *year != 0);
        let year_to = self.year_to.filter(|year| *year != 0);
        match (year_from, year_to) {
            (Some(from), Some(to)) if from <= to => Ok(ReportRequest {
                district: district.to_string(),
                year_from: from,
                year_to: to,
                report_type: REPORT_TYPE.to_string(),
            }),
            _ => Err(ValidationError::InvalidYearRange),
        }
    }
}

/// Body posted to the report generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub district: String,
    pub year_from: i32,
    pub year_to: i32,
    pub report_type: String,
}

impl ReportRequest {
    /// The "{district} / {from}~{to} / {type}" line echoed into the log.
    pub fn summary(&self) -> String {
        format!(
            "{} / {}~{} / {}",
            self.district, self.year_from, self.year_to, self.report_type
        )
    }
}

/// Body posted to the report refine endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineRequest {
    pub report: String,
    pub instruction: String,
}

impl RefineRequest {
    pub fn new(report: &str, instruction: &str) -> Result<Self, ValidationError> {
        let report = report.trim();
        let instruction = instruction.trim();
        if report.is_empty() {
            return Err(ValidationError::MissingReport);
        }
        if instruction.is_empty() {
            return Err(ValidationError::MissingInstruction);
        }
        Ok(Self {
            report: report.to_string(),
            instruction: instruction.to_string(),
        })
    }
}

/// Lenient view over a report endpoint response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportResponse {
    report: Option<String>,
    error: Option<String>,
}

impl ReportResponse {
    pub fn from_value(body: Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            report: field("report"),
            error: field("error"),
        }
    }

    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Value>(body)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// What the result header above the report log shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMeta {
    pub district: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub hint: String,
}

impl ReportMeta {
    /// Meta with only a hint line and no selection tag.
    pub fn hint_only(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            ..Self::default()
        }
    }

    pub fn for_request(request: &ReportRequest, hint: impl Into<String>) -> Self {
        Self {
            district: Some(request.district.clone()),
            year_from: Some(request.year_from),
            year_to: Some(request.year_to),
            hint: hint.into(),
        }
    }

    /// Selection tag, empty unless district and both years are set.
    pub fn tag(&self) -> String {
        match (&self.district, self.year_from, self.year_to) {
            (Some(district), Some(from), Some(to)) if !district.is_empty() => {
                format!("{district} / {from}~{to} / {REPORT_TYPE}")
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_builds_request() {
        let request = ReportForm::new(" 강서구 ", Some(2023), Some(2030))
            .validate()
            .unwrap();
        assert_eq!(request.district, "강서구");
        assert_eq!(request.report_type, REPORT_TYPE);
        assert_eq!(request.summary(), "강서구 / 2023~2030 / 취약지역 집중지원");
    }

    #[test]
    fn test_validate_single_year_range() {
        assert!(ReportForm::new("강서구", Some(2025), Some(2025)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_district_first() {
        let err = ReportForm::new("  ", None, None).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingDistrict);
    }

    #[test]
    fn test_validate_rejects_bad_years() {
        for (from, to) in [
            (None, Some(2030)),
            (Some(2023), None),
            (Some(0), Some(2030)),
            (Some(2031), Some(2030)),
        ] {
            assert_eq!(
                ReportForm::new("강서구", from, to).validate(),
                Err(ValidationError::InvalidYearRange),
                "from={from:?} to={to:?}"
            );
        }
    }

    #[test]
    fn test_request_wire_format() {
        let request = ReportForm::new("마포구", Some(2024), Some(2026))
            .validate()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "district": "마포구",
                "year_from": 2024,
                "year_to": 2026,
                "report_type": "취약지역 집중지원"
            })
        );
    }

    #[test]
    fn test_refine_request_requires_both_parts() {
        assert_eq!(
            RefineRequest::new("", "더 짧게"),
            Err(ValidationError::MissingReport)
        );
        assert_eq!(
            RefineRequest::new("보고서", "  "),
            Err(ValidationError::MissingInstruction)
        );
        assert!(RefineRequest::new("보고서", "더 짧게").is_ok());
    }

    #[test]
    fn test_meta_tag_needs_full_selection() {
        assert_eq!(ReportMeta::hint_only("초안 생성 전").tag(), "");

        let request = ReportForm::new("강서구", Some(2023), Some(2030))
            .validate()
            .unwrap();
        let meta = ReportMeta::for_request(&request, "초안 생성 중…");
        assert_eq!(meta.tag(), "강서구 / 2023~2030 / 취약지역 집중지원");
    }

    #[test]
    fn test_report_response_is_lenient() {
        let response = ReportResponse::from_value(json!({ "report": 3, "error": "실패" }));
        assert_eq!(response.report(), None);
        assert_eq!(response.error(), Some("실패"));
        assert_eq!(ReportResponse::from_body("oops"), ReportResponse::default());
    }
}
