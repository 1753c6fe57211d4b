//! Analysis request and result records
//!
//! The extracted frames are handed to an external design-review service,
//! which answers with categorized findings. This module only models those
//! payloads; it performs no analysis and no network I/O.

use serde::{Deserialize, Serialize};

use crate::bindings::{AnalysisSummary, InboundMessage};
use crate::extractors::Frame;

/// Payload sent to the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDataRequest {
    pub frames: Vec<Frame>,
    /// Overrides the service's built-in review guidelines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
}

impl DesignDataRequest {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            guidelines: None,
        }
    }

    pub fn with_guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.guidelines = Some(guidelines.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks users or fails accessibility outright
    Critical,
    /// Degrades the experience
    Warning,
    /// Polish
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    MissingStates,
    Accessibility,
    DesignSystem,
    Responsiveness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    /// Names of the frames the finding applies to
    #[serde(default)]
    pub affected_frames: Vec<String>,
}

/// Response from the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub findings: Vec<Finding>,
    pub summary: String,
    pub frames_analyzed: usize,
}

impl AnalysisResult {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    /// Findings that mention the given frame name
    pub fn findings_for_frame<'a>(&'a self, frame_name: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.affected_frames.iter().any(|f| f == frame_name))
    }

    /// The `analysis-complete` message a UI sends after receiving this result
    pub fn completion_message(&self) -> InboundMessage {
        InboundMessage::AnalysisComplete {
            data: Some(AnalysisSummary {
                finding_count: Some(self.finding_count() as u64),
            }),
        }
    }
}
