// UI <-> sandbox message records
//
// Both directions are JSON objects tagged by a kebab-case "type" field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::extractors::Frame;
use crate::host::NodeKind;

/// Messages sent by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    /// Extract the current selection
    GetSelection,
    /// An external analysis pass finished
    AnalysisComplete {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<AnalysisSummary>,
    },
    /// End the plugin session
    Close,
    /// Any other message type; ignored
    #[serde(other)]
    Unknown,
}

impl InboundMessage {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reported finding count, 0 when absent
    pub fn finding_count(&self) -> u64 {
        match self {
            InboundMessage::AnalysisComplete {
                data: Some(AnalysisSummary {
                    finding_count: Some(count),
                }),
            } => *count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(
        default,
        deserialize_with = "count_from_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub finding_count: Option<u64>,
}

/// Any JSON number is a count: fractions truncate, negatives become 0
fn count_from_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map(|n| match n.as_u64() {
        Some(count) => count,
        None => n.as_f64().map_or(0, |value| value.max(0.0) as u64),
    }))
}

/// Messages posted to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    Error { message: String },
    DesignData { data: DesignData },
    /// Basic selection info without recursion (earlier UI builds)
    SelectionData { data: Vec<SelectionSummary> },
}

impl OutboundMessage {
    pub fn error(message: impl Into<String>) -> Self {
        OutboundMessage::Error {
            message: message.into(),
        }
    }

    pub fn design_data(frames: Vec<Frame>) -> Self {
        OutboundMessage::DesignData {
            data: DesignData { frames },
        }
    }

    /// Wire tag of this message
    pub fn type_name(&self) -> &'static str {
        match self {
            OutboundMessage::Error { .. } => "error",
            OutboundMessage::DesignData { .. } => "design-data",
            OutboundMessage::SelectionData { .. } => "selection-data",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignData {
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_inbound_messages() {
        assert_eq!(
            InboundMessage::from_json(r#"{"type": "get-selection"}"#).unwrap(),
            InboundMessage::GetSelection
        );
        assert_eq!(
            InboundMessage::from_json(r#"{"type": "close"}"#).unwrap(),
            InboundMessage::Close
        );

        let done =
            InboundMessage::from_json(r#"{"type": "analysis-complete", "data": {"findingCount": 7}}"#)
                .unwrap();
        assert_eq!(done.finding_count(), 7);
    }

    #[test]
    fn test_finding_count_defaults_to_zero() {
        let bare = InboundMessage::from_json(r#"{"type": "analysis-complete"}"#).unwrap();
        assert_eq!(bare.finding_count(), 0);

        let empty =
            InboundMessage::from_json(r#"{"type": "analysis-complete", "data": {}}"#).unwrap();
        assert_eq!(empty.finding_count(), 0);
    }

    #[test]
    fn test_finding_count_accepts_any_number() {
        let parse = |count: &str| {
            InboundMessage::from_json(&format!(
                r#"{{"type": "analysis-complete", "data": {{"findingCount": {}}}}}"#,
                count
            ))
            .unwrap()
            .finding_count()
        };
        assert_eq!(parse("3.0"), 3);
        assert_eq!(parse("4.9"), 4);
        assert_eq!(parse("-2"), 0);
        assert_eq!(parse("null"), 0);
    }

    #[test]
    fn test_non_numeric_finding_count_is_rejected() {
        let raw = r#"{"type": "analysis-complete", "data": {"findingCount": "3"}}"#;
        assert!(InboundMessage::from_json(raw).is_err());
    }

    #[test]
    fn test_unknown_type_is_not_an_error() {
        let msg = InboundMessage::from_json(r#"{"type": "resize", "width": 400}"#).unwrap();
        assert_eq!(msg, InboundMessage::Unknown);
    }

    #[test]
    fn test_outbound_wire_format() {
        let error = serde_json::to_value(OutboundMessage::error("nope")).unwrap();
        assert_eq!(error, json!({"type": "error", "message": "nope"}));

        let data = serde_json::to_value(OutboundMessage::design_data(vec![])).unwrap();
        assert_eq!(data, json!({"type": "design-data", "data": {"frames": []}}));

        let legacy = OutboundMessage::SelectionData {
            data: vec![SelectionSummary {
                name: "Card".to_string(),
                kind: NodeKind::Frame,
                width: 320.0,
                height: 200.0,
            }],
        };
        assert_eq!(
            serde_json::to_value(&legacy).unwrap(),
            json!({
                "type": "selection-data",
                "data": [{"name": "Card", "type": "FRAME", "width": 320.0, "height": 200.0}]
            })
        );
        assert_eq!(legacy.type_name(), "selection-data");
    }
}
