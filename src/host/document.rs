// In-memory host documents
//
// A `Document` is a JSON snapshot of a page as the host plugin API would
// report it: nodes tagged with their host type, optional properties simply
// absent, and "mixed" standing in for non-uniform values. It implements the
// `HostNode` contract so extraction can run outside the editor.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::kind::NodeKind;
use super::mixed::Mixed;
use super::paint::{FontName, Paint};
use super::HostNode;

/// Errors raised while loading or querying a host snapshot
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read document snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("selected node '{0}' does not exist in the document")]
    UnknownNode(String),
}

/// One node of a host snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Mixed<Vec<Paint>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<Mixed<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocumentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Mixed<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<Mixed<FontName>>,
}

impl DocumentNode {
    /// Bare node with only the mandatory properties set
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: None,
            x: None,
            y: None,
            width: None,
            height: None,
            opacity: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            children: None,
            characters: None,
            font_size: None,
            font_name: None,
        }
    }

    /// Depth-first search of this node and its descendants
    pub fn find(&self, id: &str) -> Option<&DocumentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(id))
    }
}

impl HostNode for DocumentNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &NodeKind {
        &self.kind
    }

    fn visible(&self) -> Option<bool> {
        self.visible
    }

    fn x(&self) -> Option<f64> {
        self.x
    }

    fn y(&self) -> Option<f64> {
        self.y
    }

    fn width(&self) -> Option<f64> {
        self.width
    }

    fn height(&self) -> Option<f64> {
        self.height
    }

    fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    fn fills(&self) -> Option<Mixed<&[Paint]>> {
        self.fills
            .as_ref()
            .map(|fills| fills.as_ref().map(|list| list.as_slice()))
    }

    fn strokes(&self) -> Option<&[Paint]> {
        self.strokes.as_deref()
    }

    fn stroke_weight(&self) -> Option<Mixed<f64>> {
        self.stroke_weight
    }

    fn children(&self) -> Option<Vec<&dyn HostNode>> {
        self.children.as_ref().map(|children| {
            children
                .iter()
                .map(|child| child as &dyn HostNode)
                .collect()
        })
    }

    fn characters(&self) -> Option<&str> {
        self.characters.as_deref()
    }

    fn font_size(&self) -> Option<Mixed<f64>> {
        self.font_size
    }

    fn font_name(&self) -> Option<Mixed<&FontName>> {
        self.font_name.as_ref().map(Mixed::as_ref)
    }
}

/// A page snapshot plus the ids selected on it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level nodes of the page, in host order
    #[serde(default)]
    pub nodes: Vec<DocumentNode>,
    /// Ids of the selected nodes, in selection order
    #[serde(default)]
    pub selection: Vec<String>,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, HostError> {
        let json = std::fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&json)?;
        debug!(
            "Loaded document snapshot '{}' ({} top-level nodes, {} selected)",
            path.display(),
            document.nodes.len(),
            document.selection.len()
        );
        Ok(document)
    }

    /// Find a node anywhere in the page by id
    pub fn find(&self, id: &str) -> Option<&DocumentNode> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Selected nodes in selection order; fails on the first dangling id
    pub fn selected_nodes(&self) -> Result<Vec<&DocumentNode>, HostError> {
        self.selection
            .iter()
            .map(|id| {
                self.find(id)
                    .ok_or_else(|| HostError::UnknownNode(id.clone()))
            })
            .collect()
    }
}
