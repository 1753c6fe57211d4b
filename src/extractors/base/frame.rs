// Frame assembly for top-level selected nodes

use tracing::debug;

use super::extractor::LayerExtractor;
use super::reader::NodeReader;
use super::types::Frame;
use crate::host::HostNode;

impl LayerExtractor {
    /// Wrap one selected node as a Frame.
    ///
    /// The frame's own id, name and size are always read from the node; its
    /// `layers` hold the node's full extraction as a single root, or nothing
    /// if the node itself was excluded.
    pub fn assemble_frame(&self, node: &dyn HostNode) -> Frame {
        let reader = NodeReader::new(node);
        let layers: Vec<_> = self.extract_layer(node, 0).into_iter().collect();

        let frame = Frame {
            id: node.id().to_string(),
            name: node.name().to_string(),
            width: reader.width(),
            height: reader.height(),
            layers,
        };
        debug!(
            "Assembled frame '{}' ({} layers)",
            frame.name,
            frame.layer_count()
        );
        frame
    }

    /// Assemble each node independently, preserving input order
    pub fn assemble_frames(&self, nodes: &[&dyn HostNode]) -> Vec<Frame> {
        nodes.iter().map(|node| self.assemble_frame(*node)).collect()
    }
}
