// LayerExtractor - recursive host node to Layer conversion
//
// Extraction never fails. A node either becomes a Layer or is omitted
// entirely (too deep, or hidden); every missing property falls back to the
// defaults documented in reader.rs.

use tracing::{debug, trace};

use super::paints::{extract_fills, extract_strokes};
use super::reader::NodeReader;
use super::text::extract_text;
use super::types::{ExtractionConfig, Layer};
use crate::host::HostNode;

/// Converts host nodes into owned `Layer` snapshots
#[derive(Debug, Clone, Default)]
pub struct LayerExtractor {
    pub config: ExtractionConfig,
}

impl LayerExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract `node` and its visible descendants.
    ///
    /// Returns `None` when `depth` exceeds the configured maximum or the node
    /// is hidden; in both cases the whole subtree is dropped.
    pub fn extract_layer(&self, node: &dyn HostNode, depth: u32) -> Option<Layer> {
        if depth > self.config.max_depth {
            debug!(
                "Depth limit {} exceeded at '{}' ({}), omitting subtree",
                self.config.max_depth,
                node.name(),
                node.id()
            );
            return None;
        }

        let reader = NodeReader::new(node);
        if !reader.is_visible() {
            trace!("Skipping hidden layer '{}' ({})", node.name(), node.id());
            return None;
        }

        let text = if reader.capabilities().text {
            Some(extract_text(&reader))
        } else {
            None
        };

        Some(Layer {
            id: node.id().to_string(),
            name: node.name().to_string(),
            kind: node.kind().clone(),
            visible: true,
            x: reader.x(),
            y: reader.y(),
            width: reader.width(),
            height: reader.height(),
            opacity: reader.opacity(),
            fills: extract_fills(&reader),
            strokes: extract_strokes(&reader),
            children: self.extract_children(&reader, depth),
            text,
        })
    }

    fn extract_children(&self, reader: &NodeReader<'_>, depth: u32) -> Vec<Layer> {
        let child_depth = depth.saturating_add(1);
        reader
            .children()
            .into_iter()
            .filter_map(|child| self.extract_layer(child, child_depth))
            .collect()
    }
}
