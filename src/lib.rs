// Design Review Core - selection extraction for the Design Review plugin
//
// Walks the host editor's node tree for the selected frames, components and
// instances, and turns it into plain records the review UI can consume.
// Architecture: host traits in, serializable records out, with a small
// message dispatcher in between.

/// Host application contract and in-memory snapshots
pub mod host;

/// Node tree to record extraction
pub mod extractors;

/// UI message types and dispatcher
pub mod bindings;

/// Analysis service request/response records
pub mod analysis;

/// Shared helpers
pub mod utils;

pub use analysis::{AnalysisResult, DesignDataRequest, Finding, FindingCategory, Severity};
pub use bindings::{
    DispatchError, Dispatcher, DispatcherConfig, InboundMessage, OutboundMessage, ResponseFormat,
};
pub use extractors::{
    assemble_frame, extract_layer, ExtractionConfig, Fill, Frame, Layer, LayerExtractor, Stroke,
    TextData,
};
pub use host::{
    Document, DocumentNode, HostError, HostNode, MemoryHost, Mixed, NodeKind, PluginHost,
};
