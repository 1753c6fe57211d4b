//! Design Extraction Module
//!
//! Converts host visual nodes into plain, serializable records for the
//! analysis UI. The walk is synchronous and read-only; each call produces a
//! fresh snapshot that owns all of its data.
//!
//! # Architecture
//!
//! - `base/` - output types, the capability-aware `NodeReader`, and the
//!   `LayerExtractor` that performs the depth-bounded recursive walk
//!
//! The free functions below use the default configuration (max depth 15).

pub mod base;

use crate::host::HostNode;

// Re-export the public API
pub use base::{
    ExtractionConfig, Fill, Frame, Layer, LayerExtractor, NodeReader, Stroke, TextData,
    DEFAULT_MAX_DEPTH,
};

/// Extract one node at `depth` with the default configuration
pub fn extract_layer(node: &dyn HostNode, depth: u32) -> Option<Layer> {
    LayerExtractor::default().extract_layer(node, depth)
}

/// Assemble one top-level node into a Frame with the default configuration
pub fn assemble_frame(node: &dyn HostNode) -> Frame {
    LayerExtractor::default().assemble_frame(node)
}
