// Base extraction building blocks
//
// - types.rs: output records (Frame, Layer, Fill, Stroke, TextData) and ExtractionConfig
// - reader.rs: NodeReader, the single place host defaults are substituted
// - extractor.rs: LayerExtractor and the depth-bounded recursive walk
// - paints.rs / text.rs: per-property extraction
// - frame.rs: Frame assembly for top-level nodes

pub mod extractor;
pub mod frame;
pub mod paints;
pub mod reader;
pub mod text;
pub mod types;

// Re-export key types for external use
pub use extractor::LayerExtractor;
pub use reader::NodeReader;
pub use types::{
    ExtractionConfig, Fill, Frame, Layer, Stroke, TextData, DEFAULT_MAX_DEPTH,
};
