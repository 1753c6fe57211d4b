// Node kinds and their capability descriptors
//
// The host exposes a different property surface per node type: groups have
// no fills, slices have no opacity, only text nodes carry characters. Rather
// than probing each property at the read site, every kind declares up front
// which optional properties it supports.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Element kinds as tagged by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Section,
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    BooleanOperation,
    Slice,
    /// Any tag this crate does not know about, kept verbatim
    Other(String),
}

impl NodeKind {
    /// All kinds with a fixed host tag
    pub const KNOWN: [NodeKind; 15] = [
        NodeKind::Frame,
        NodeKind::Group,
        NodeKind::Component,
        NodeKind::ComponentSet,
        NodeKind::Instance,
        NodeKind::Section,
        NodeKind::Text,
        NodeKind::Rectangle,
        NodeKind::Ellipse,
        NodeKind::Polygon,
        NodeKind::Star,
        NodeKind::Vector,
        NodeKind::Line,
        NodeKind::BooleanOperation,
        NodeKind::Slice,
    ];

    /// Host tag spelling (e.g. "FRAME", "BOOLEAN_OPERATION")
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Other(tag) => tag,
            known => known.known_tag().unwrap_or_default(),
        }
    }

    /// Convert from the host tag. Unknown tags are preserved as `Other`.
    pub fn from_tag(tag: &str) -> Self {
        KIND_BY_TAG
            .get(tag)
            .cloned()
            .unwrap_or_else(|| NodeKind::Other(tag.to_string()))
    }

    /// Kinds a design review can be run on (frame, component, instance)
    pub fn is_analyzable(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::Instance
        )
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            NodeKind::Frame
            | NodeKind::Component
            | NodeKind::ComponentSet
            | NodeKind::Instance
            | NodeKind::BooleanOperation => Capabilities::CONTAINER,
            NodeKind::Group => Capabilities {
                fills: false,
                strokes: false,
                stroke_weight: false,
                ..Capabilities::CONTAINER
            },
            NodeKind::Section => Capabilities {
                opacity: false,
                strokes: false,
                stroke_weight: false,
                ..Capabilities::CONTAINER
            },
            NodeKind::Text => Capabilities {
                text: true,
                ..Capabilities::SHAPE
            },
            NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Vector
            | NodeKind::Line => Capabilities::SHAPE,
            NodeKind::Slice => Capabilities::BARE,
            // Unknown kinds: trust whatever the host exposes, except text
            NodeKind::Other(_) => Capabilities::CONTAINER,
        }
    }
}

static KIND_BY_TAG: Lazy<HashMap<&'static str, NodeKind>> = Lazy::new(|| {
    NodeKind::KNOWN
        .iter()
        .filter_map(|kind| kind.known_tag().map(|tag| (tag, kind.clone())))
        .collect()
});

impl NodeKind {
    fn known_tag(&self) -> Option<&'static str> {
        let tag = match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Section => "SECTION",
            NodeKind::Text => "TEXT",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Vector => "VECTOR",
            NodeKind::Line => "LINE",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Slice => "SLICE",
            NodeKind::Other(_) => return None,
        };
        Some(tag)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(NodeKind::from_tag(&tag))
    }
}

/// Which optional properties a node kind exposes
///
/// `id`, `name` and the kind tag are always present and not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub visibility: bool,
    /// x, y, width, height
    pub geometry: bool,
    pub opacity: bool,
    pub fills: bool,
    pub strokes: bool,
    pub stroke_weight: bool,
    pub children: bool,
    /// characters, font size, font name
    pub text: bool,
}

impl Capabilities {
    pub const CONTAINER: Capabilities = Capabilities {
        visibility: true,
        geometry: true,
        opacity: true,
        fills: true,
        strokes: true,
        stroke_weight: true,
        children: true,
        text: false,
    };

    pub const SHAPE: Capabilities = Capabilities {
        children: false,
        ..Capabilities::CONTAINER
    };

    pub const BARE: Capabilities = Capabilities {
        visibility: true,
        geometry: true,
        opacity: false,
        fills: false,
        strokes: false,
        stroke_weight: false,
        children: false,
        text: false,
    };
}
