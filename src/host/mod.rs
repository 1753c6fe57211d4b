// Host Application Contract
//
// The design editor owns the node tree, the current selection, and the UI
// channel. Everything the extractor and dispatcher need from it goes through
// the two traits below, so the same extraction code runs against the live
// plugin API and against the in-memory `Document` snapshots used in tests.

pub mod document;
pub mod kind;
pub mod memory;
pub mod mixed;
pub mod paint;

pub use document::{Document, DocumentNode, HostError};
pub use kind::{Capabilities, NodeKind};
pub use memory::MemoryHost;
pub use mixed::Mixed;
pub use paint::{FontName, Paint, PaintKind, Rgb};

use crate::bindings::OutboundMessage;

/// Read access to one host-owned visual node.
///
/// Only `id`, `name` and `kind` are mandatory. Every other read returns
/// `None` when the host does not expose the property for this node; callers
/// should go through [`crate::extractors::NodeReader`], which consults the
/// node kind's [`Capabilities`] and substitutes the documented defaults.
pub trait HostNode {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn kind(&self) -> &NodeKind;

    fn visible(&self) -> Option<bool> {
        None
    }

    fn x(&self) -> Option<f64> {
        None
    }

    fn y(&self) -> Option<f64> {
        None
    }

    fn width(&self) -> Option<f64> {
        None
    }

    fn height(&self) -> Option<f64> {
        None
    }

    fn opacity(&self) -> Option<f64> {
        None
    }

    /// Fill paints, or `Mixed` when the host cannot report a single list
    fn fills(&self) -> Option<Mixed<&[Paint]>> {
        None
    }

    fn strokes(&self) -> Option<&[Paint]> {
        None
    }

    fn stroke_weight(&self) -> Option<Mixed<f64>> {
        None
    }

    /// Direct children in host order
    fn children(&self) -> Option<Vec<&dyn HostNode>> {
        None
    }

    /// Literal text content (text nodes only)
    fn characters(&self) -> Option<&str> {
        None
    }

    fn font_size(&self) -> Option<Mixed<f64>> {
        None
    }

    fn font_name(&self) -> Option<Mixed<&FontName>> {
        None
    }
}

/// The plugin session as seen from the sandbox side.
///
/// The host guarantees exclusive, single-threaded access while a message
/// handler runs, so all methods are plain synchronous calls.
pub trait PluginHost {
    /// Current page selection, in the order the host reports it
    fn selection(&self) -> Vec<&dyn HostNode>;

    /// Send a message to the UI layer
    fn post_message(&mut self, message: OutboundMessage);

    /// Show a transient toast to the user
    fn notify(&mut self, message: &str);

    /// Terminate the plugin session
    fn close(&mut self);
}
