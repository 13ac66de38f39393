//! Chat wire types: the outgoing request and the lenient response view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One candidate center from a recommendation response.
///
/// Only `center_id` and `distance_km` are interpreted; everything else
/// (name, district, phone, capacity, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecommendationItem {
    /// Builds an item from one element of a `centers` array.
    ///
    /// Elements that are not objects, or whose fields have unexpected
    /// types, become an item without an identifier so list positions stay
    /// aligned with what the user saw.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let center_id = object.get("center_id").and_then(|id| match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        let distance_km = object.get("distance_km").and_then(Value::as_f64);
        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "center_id" && key.as_str() != "distance_km")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            center_id,
            distance_km,
            extra,
        }
    }

    /// Display name, when the server sent one.
    pub fn center_name(&self) -> Option<&str> {
        self.extra.get("center_name").and_then(Value::as_str)
    }
}

/// The request sent to the chat endpoint for one turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingRequest {
    pub message: String,
    #[serde(rename = "lat", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "lon", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_center_id: Option<String>,
}

impl OutgoingRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Read-only view over a chat endpoint response body.
///
/// Built from raw JSON so that malformed fields degrade to "absent"
/// instead of failing the whole turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerResponse {
    text: Option<String>,
    centers: Option<Value>,
    error: Option<String>,
}

impl ServerResponse {
    /// Wraps a parsed JSON body. Non-object bodies yield an empty response.
    pub fn from_value(body: Value) -> Self {
        let Value::Object(mut object) = body else {
            return Self::default();
        };

        let text = match object.remove("text") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        let error = match object.remove("error") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        Self {
            text,
            centers: object.remove("centers"),
            error,
        }
    }

    /// Parses a raw body; an unparseable body yields an empty response.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Value>(body)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The raw `centers` elements when the field is an array.
    pub fn center_values(&self) -> Option<&[Value]> {
        match &self.centers {
            Some(Value::Array(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// The centers as recommendation items, positions preserved.
    pub fn centers(&self) -> Vec<RecommendationItem> {
        self.center_values()
            .map(|values| values.iter().map(RecommendationItem::from_value).collect())
            .unwrap_or_default()
    }
}
