// Dispatcher - reacts to UI messages one at a time
//
// get-selection      -> design-data (or selection-data), or an error message
// analysis-complete  -> toast with the finding count
// close              -> end the session
// anything else      -> ignored

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::messages::{InboundMessage, OutboundMessage, SelectionSummary};
use crate::extractors::{ExtractionConfig, LayerExtractor, NodeReader};
use crate::host::{HostNode, PluginHost};

pub const NO_SELECTION_MESSAGE: &str = "No frames selected. Please select one or more frames.";
pub const NO_ELIGIBLE_MESSAGE: &str =
    "Please select frames, components, or instances to analyze.";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("malformed UI message: {0}")]
    MalformedMessage(#[source] serde_json::Error),
    #[error("failed to serialize {message_type} message: {source}")]
    Serialize {
        message_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Shape of the reply to `get-selection`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseFormat {
    /// Full recursive extraction of frames, components and instances
    #[default]
    DesignData,
    /// Name, type and size of every selected node (earlier UI builds)
    SelectionData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatcherConfig {
    pub extraction: ExtractionConfig,
    pub response_format: ResponseFormat,
}

pub struct Dispatcher {
    extractor: LayerExtractor,
    response_format: ResponseFormat,
    closed: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            extractor: LayerExtractor::new(config.extraction),
            response_format: config.response_format,
            closed: false,
        }
    }

    /// Whether a `close` message has been handled
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Parse a raw UI message and handle it.
    ///
    /// Malformed JSON is returned to the embedder and nothing is posted to
    /// the UI. Unknown message types are not errors.
    pub fn handle_json<H>(&mut self, host: &mut H, raw: &str) -> Result<(), DispatchError>
    where
        H: PluginHost + ?Sized,
    {
        let message = InboundMessage::from_json(raw).map_err(|e| {
            warn!("Dropping malformed UI message: {}", e);
            DispatchError::MalformedMessage(e)
        })?;
        self.handle(host, message);
        Ok(())
    }

    pub fn handle<H>(&mut self, host: &mut H, message: InboundMessage)
    where
        H: PluginHost + ?Sized,
    {
        if self.closed {
            debug!("Session closed, ignoring {:?}", message);
            return;
        }

        match message {
            InboundMessage::GetSelection => {
                let response = self.respond_to_selection(&host.selection());
                host.post_message(response);
            }
            InboundMessage::AnalysisComplete { .. } => {
                let text = completion_notice(message.finding_count());
                host.notify(&text);
            }
            InboundMessage::Close => {
                debug!("Closing plugin session");
                self.closed = true;
                host.close();
            }
            InboundMessage::Unknown => {
                debug!("Ignoring unknown UI message");
            }
        }
    }

    /// Build the reply to `get-selection` for the given selection
    pub fn respond_to_selection(&self, selection: &[&dyn HostNode]) -> OutboundMessage {
        if selection.is_empty() {
            debug!("get-selection with empty selection");
            return OutboundMessage::error(NO_SELECTION_MESSAGE);
        }

        match self.response_format {
            ResponseFormat::DesignData => self.design_data(selection),
            ResponseFormat::SelectionData => selection_data(selection),
        }
    }

    /// Reply to `get-selection` as wire JSON
    pub fn selection_json(&self, selection: &[&dyn HostNode]) -> Result<String, DispatchError> {
        let message = self.respond_to_selection(selection);
        message.to_json().map_err(|source| DispatchError::Serialize {
            message_type: message.type_name(),
            source,
        })
    }

    fn design_data(&self, selection: &[&dyn HostNode]) -> OutboundMessage {
        let eligible: Vec<&dyn HostNode> = selection
            .iter()
            .copied()
            .filter(|node| node.kind().is_analyzable())
            .collect();

        if eligible.is_empty() {
            debug!(
                "get-selection with {} nodes, none analyzable",
                selection.len()
            );
            return OutboundMessage::error(NO_ELIGIBLE_MESSAGE);
        }

        let frames = self.extractor.assemble_frames(&eligible);
        debug!(
            "Extracted {} frames ({} of {} selected nodes eligible)",
            frames.len(),
            eligible.len(),
            selection.len()
        );
        OutboundMessage::design_data(frames)
    }
}

fn selection_data(selection: &[&dyn HostNode]) -> OutboundMessage {
    let data = selection
        .iter()
        .map(|node| {
            let reader = NodeReader::new(*node);
            SelectionSummary {
                name: node.name().to_string(),
                kind: node.kind().clone(),
                width: reader.width(),
                height: reader.height(),
            }
        })
        .collect();
    OutboundMessage::SelectionData { data }
}

/// Toast text for a finished analysis pass
pub fn completion_notice(finding_count: u64) -> String {
    let noun = if finding_count == 1 {
        "finding"
    } else {
        "findings"
    };
    format!("Analysis complete: {} {}", finding_count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::messages::AnalysisSummary;
    use crate::host::{Document, DocumentNode, MemoryHost, Mixed, NodeKind, Paint, Rgb};
    use serde_json::Value;

    const CARD: &str = include_str!("../../test_samples/documents/card.json");

    fn card_host() -> MemoryHost {
        MemoryHost::new(Document::from_json(CARD).unwrap()).unwrap()
    }

    fn only_message(host: &mut MemoryHost) -> OutboundMessage {
        let mut posted = host.take_posted();
        assert_eq!(posted.len(), 1, "expected exactly one message, got {:?}", posted);
        posted.remove(0)
    }

    #[test]
    fn test_empty_selection_posts_single_error() {
        let mut host = card_host();
        host.select(Vec::<String>::new()).unwrap();

        Dispatcher::default().handle(&mut host, InboundMessage::GetSelection);

        assert_eq!(
            only_message(&mut host),
            OutboundMessage::error(NO_SELECTION_MESSAGE)
        );
    }

    #[test]
    fn test_non_frame_selection_posts_eligibility_error() {
        let mut host = card_host();
        host.select(["1:5"]).unwrap();

        Dispatcher::default().handle(&mut host, InboundMessage::GetSelection);

        assert_eq!(
            only_message(&mut host),
            OutboundMessage::error(NO_ELIGIBLE_MESSAGE)
        );
    }

    #[test]
    fn test_mixed_selection_keeps_only_eligible_nodes_in_order() {
        let mut host = card_host();
        // instance, vector, frame
        host.select(["1:7", "1:5", "1:1"]).unwrap();

        Dispatcher::default().handle(&mut host, InboundMessage::GetSelection);

        match only_message(&mut host) {
            OutboundMessage::DesignData { data } => {
                let ids: Vec<&str> = data.frames.iter().map(|f| f.id.as_str()).collect();
                assert_eq!(ids, vec!["1:7", "1:1"]);
            }
            other => panic!("expected design-data, got {:?}", other),
        }
    }

    #[test]
    fn test_card_extraction_end_to_end() {
        let mut host = card_host();
        Dispatcher::default().handle(&mut host, InboundMessage::GetSelection);

        let json: Value = serde_json::to_value(only_message(&mut host)).unwrap();
        assert_eq!(json["type"], "design-data");

        let frames = json["data"]["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["name"], "Card");
        assert_eq!(frames[0]["width"], 320.0);

        let root = &frames[0]["layers"][0];
        assert_eq!(root["fills"][0]["color"], "#FFFFFF");
        assert_eq!(root["strokes"][0]["color"], "#CCCCCC");
        assert_eq!(root["strokes"][0]["weight"], 1.0);

        // Badge is hidden, so four of the five children remain, in order
        let names: Vec<&str> = root["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Background", "Title", "Body", "Button"]);

        let background = &root["children"][0];
        assert_eq!(background["opacity"], 0.9);
        assert_eq!(background["fills"].as_array().unwrap().len(), 1);
        assert_eq!(background["fills"][0]["color"], "#0000FF");
        assert_eq!(background["fills"][0]["opacity"], 0.5);

        let title = &root["children"][1]["text"];
        assert_eq!(title["content"], "Welcome back");
        assert_eq!(title["fontSize"], 20.0);
        assert_eq!(title["fontFamily"], "Inter");
        assert_eq!(title["fontStyle"], "Bold");
        assert_eq!(title["fillColor"], "#0000FF");

        let body = &root["children"][2];
        assert_eq!(body["text"]["fontSize"], "mixed");
        assert_eq!(body["text"]["fontFamily"], "mixed");
        assert!(body["text"].get("fillColor").is_none());
        assert!(body["fills"].as_array().unwrap().is_empty());

        let button = &root["children"][3];
        assert_eq!(button["strokes"].as_array().unwrap().len(), 1);
        assert_eq!(button["strokes"][0]["weight"], 1.0);
    }

    #[test]
    fn test_frame_with_blue_text_reports_size_and_color() {
        let mut text = DocumentNode::new("2:2", "Label", NodeKind::Text);
        text.characters = Some("Hi".to_string());
        text.font_size = Some(Mixed::Uniform(14.0));
        text.fills = Some(Mixed::Uniform(vec![Paint::solid(Rgb::new(0.0, 0.0, 1.0))]));
        let mut frame = DocumentNode::new("2:1", "Screen", NodeKind::Frame);
        frame.children = Some(vec![text]);

        let mut host = MemoryHost::new(Document {
            nodes: vec![frame],
            selection: vec!["2:1".to_string()],
        })
        .unwrap();

        Dispatcher::default().handle(&mut host, InboundMessage::GetSelection);

        let json: Value = serde_json::to_value(only_message(&mut host)).unwrap();
        let frames = json["data"]["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 1);
        let layers = frames[0]["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 1);
        let children = layers[0]["children"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["text"]["fontSize"], 14.0);
        assert_eq!(children[0]["text"]["fillColor"], "#0000FF");
    }

    #[test]
    fn test_analysis_complete_notifies_with_count() {
        let mut host = card_host();
        let mut dispatcher = Dispatcher::default();

        dispatcher.handle(
            &mut host,
            InboundMessage::AnalysisComplete {
                data: Some(AnalysisSummary {
                    finding_count: Some(3),
                }),
            },
        );
        dispatcher
            .handle_json(&mut host, r#"{"type": "analysis-complete"}"#)
            .unwrap();
        dispatcher
            .handle_json(
                &mut host,
                r#"{"type": "analysis-complete", "data": {"findingCount": 1}}"#,
            )
            .unwrap();

        assert_eq!(
            host.notifications(),
            [
                "Analysis complete: 3 findings".to_string(),
                "Analysis complete: 0 findings".to_string(),
                "Analysis complete: 1 finding".to_string(),
            ]
        );
        assert!(host.posted().is_empty(), "notifications post nothing to the UI");
    }

    #[test]
    fn test_fractional_finding_count_still_notifies() {
        let mut host = card_host();
        Dispatcher::default()
            .handle_json(
                &mut host,
                r#"{"type": "analysis-complete", "data": {"findingCount": 3.0}}"#,
            )
            .unwrap();

        assert_eq!(
            host.notifications(),
            ["Analysis complete: 3 findings".to_string()]
        );
    }

    #[test]
    fn test_close_ends_session_and_ignores_later_messages() {
        let mut host = card_host();
        let mut dispatcher = Dispatcher::default();

        dispatcher.handle_json(&mut host, r#"{"type": "close"}"#).unwrap();
        assert!(host.is_closed());
        assert!(dispatcher.is_closed());

        dispatcher.handle(&mut host, InboundMessage::GetSelection);
        assert!(host.posted().is_empty());
    }

    #[test]
    fn test_unknown_messages_are_ignored() {
        let mut host = card_host();
        let mut dispatcher = Dispatcher::default();

        dispatcher
            .handle_json(&mut host, r#"{"type": "ping"}"#)
            .unwrap();

        assert!(host.posted().is_empty());
        assert!(host.notifications().is_empty());
        assert!(!host.is_closed());
    }

    #[test]
    fn test_malformed_json_is_returned_not_posted() {
        let mut host = card_host();
        let err = Dispatcher::default()
            .handle_json(&mut host, "{not json")
            .unwrap_err();

        assert!(matches!(err, DispatchError::MalformedMessage(_)));
        assert!(host.posted().is_empty());
    }

    #[test]
    fn test_selection_json_is_wire_format() {
        let host = card_host();
        let json = Dispatcher::default()
            .selection_json(&host.selection())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "design-data");
        assert_eq!(value["data"]["frames"][0]["name"], "Card");

        let json = Dispatcher::default().selection_json(&[]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["message"], NO_SELECTION_MESSAGE);
    }

    #[test]
    fn test_serialize_error_names_message_type() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = DispatchError::Serialize {
            message_type: "design-data",
            source,
        };
        assert!(err
            .to_string()
            .starts_with("failed to serialize design-data message"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_selection_data_format_lists_every_node() {
        let mut host = card_host();
        host.select(["1:5", "1:1"]).unwrap();
        let mut dispatcher = Dispatcher::new(DispatcherConfig {
            response_format: ResponseFormat::SelectionData,
            ..Default::default()
        });

        dispatcher.handle(&mut host, InboundMessage::GetSelection);

        match only_message(&mut host) {
            OutboundMessage::SelectionData { data } => {
                assert_eq!(data.len(), 2, "no kind filtering in the basic format");
                assert_eq!(data[0].name, "Arrow");
                assert_eq!(data[0].kind, NodeKind::Vector);
                assert_eq!((data[1].width, data[1].height), (320.0, 200.0));
            }
            other => panic!("expected selection-data, got {:?}", other),
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: DispatcherConfig = serde_json::from_str(
            r#"{"extraction": {"maxDepth": 4}, "responseFormat": "selection-data"}"#,
        )
        .unwrap();
        assert_eq!(config.extraction.max_depth, 4);
        assert_eq!(config.response_format, ResponseFormat::SelectionData);

        let defaults: DispatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, DispatcherConfig::default());
        assert_eq!(defaults.extraction.max_depth, 15);
    }
}
