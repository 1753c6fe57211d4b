// API Functions - one-shot entry points for embedders
//
// These skip the message loop: hand over host nodes (or a snapshot) and get
// the UI payload back as JSON.

use anyhow::{Context, Result};
use std::path::Path;

use super::dispatcher::{Dispatcher, DispatcherConfig};
use crate::analysis::DesignDataRequest;
use crate::extractors::{ExtractionConfig, LayerExtractor};
use crate::host::{Document, HostNode, NodeKind};

/// Extract the given top-level nodes into a `design-data`/`error` message
///
/// Applies the same selection rules as the `get-selection` handler.
///
/// Args:
///     nodes: selected host nodes, in selection order
///     config: dispatcher configuration (depth limit, response format)
///
/// Returns:
///     The outbound message serialized as JSON
pub fn extract_selection_json(
    nodes: &[&dyn HostNode],
    config: DispatcherConfig,
) -> Result<String> {
    Dispatcher::new(config)
        .selection_json(nodes)
        .context("Failed to build get-selection reply")
}

/// Extract the selection recorded in a snapshot file
pub fn extract_snapshot_json(path: &Path, config: DispatcherConfig) -> Result<String> {
    let document = Document::load(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    let selected: Vec<&dyn HostNode> = document
        .selected_nodes()?
        .into_iter()
        .map(|node| node as &dyn HostNode)
        .collect();
    extract_selection_json(&selected, config)
}

/// Build the analysis service payload for the analyzable nodes among `nodes`
pub fn design_data_request(
    nodes: &[&dyn HostNode],
    config: ExtractionConfig,
    guidelines: Option<String>,
) -> DesignDataRequest {
    let eligible: Vec<&dyn HostNode> = nodes
        .iter()
        .copied()
        .filter(|node| node.kind().is_analyzable())
        .collect();
    let frames = LayerExtractor::new(config).assemble_frames(&eligible);
    DesignDataRequest { frames, guidelines }
}

/// Host tags of the node kinds a review can be run on
pub fn supported_kinds() -> Vec<String> {
    NodeKind::KNOWN
        .iter()
        .filter(|kind| kind.is_analyzable())
        .map(|kind| kind.to_string())
        .collect()
}
