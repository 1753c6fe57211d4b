// Extracted design records
//
// These are the plain, owned snapshots sent to the UI. Field names follow the
// UI's camelCase wire format; nothing here refers back to host nodes.

use serde::{Deserialize, Serialize};

use crate::host::{Mixed, NodeKind, PaintKind};

/// Deepest layer depth that is still extracted (root = 0)
pub const DEFAULT_MAX_DEPTH: u32 = 15;

/// Configuration for layer extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// Layers deeper than this are omitted along with their subtree
    pub max_depth: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One top-level selected node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Empty when the node itself was excluded, otherwise exactly one root layer
    pub layers: Vec<Layer>,
}

impl Frame {
    /// Total number of extracted layers in this frame
    pub fn layer_count(&self) -> usize {
        self.layers.iter().map(Layer::subtree_len).sum()
    }
}

/// A recursively extracted visual element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub fills: Vec<Fill>,
    pub strokes: Vec<Stroke>,
    pub children: Vec<Layer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextData>,
}

impl Layer {
    /// This layer plus all of its descendants
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Layer::subtree_len).sum::<usize>()
    }

    /// Number of levels below and including this layer
    pub fn subtree_depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Layer::subtree_depth)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    /// `#RRGGBB`, uppercase
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    pub color: String,
    /// Resolved once per node and shared by all of its strokes
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub content: String,
    pub font_size: Mixed<f64>,
    pub font_family: Mixed<String>,
    pub font_style: Mixed<String>,
    /// Color of the first solid fill, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}
