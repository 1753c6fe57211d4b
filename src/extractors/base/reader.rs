// NodeReader - capability-aware property access with default substitution
//
// Every optional host property is read through here. A property is only
// consulted when the node kind's capability descriptor lists it; anything
// unsupported, absent, or reported as mixed collapses to the default below.
//
//   visible        true
//   x, y           0
//   width, height  0
//   opacity        1
//   fills/strokes  none (mixed fills also read as none)
//   stroke weight  0 when absent, 1 when mixed
//   characters     ""
//   font size      0
//   font name      empty family and style

use crate::host::{Capabilities, FontName, HostNode, Mixed, Paint};

pub struct NodeReader<'a> {
    node: &'a dyn HostNode,
    capabilities: Capabilities,
}

impl<'a> NodeReader<'a> {
    pub fn new(node: &'a dyn HostNode) -> Self {
        Self {
            node,
            capabilities: node.kind().capabilities(),
        }
    }

    pub fn node(&self) -> &'a dyn HostNode {
        self.node
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_visible(&self) -> bool {
        !self.capabilities.visibility || self.node.visible().unwrap_or(true)
    }

    pub fn x(&self) -> f64 {
        self.geometry(self.node.x())
    }

    pub fn y(&self) -> f64 {
        self.geometry(self.node.y())
    }

    pub fn width(&self) -> f64 {
        self.geometry(self.node.width())
    }

    pub fn height(&self) -> f64 {
        self.geometry(self.node.height())
    }

    fn geometry(&self, value: Option<f64>) -> f64 {
        if self.capabilities.geometry {
            value.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.capabilities.opacity {
            self.node.opacity().unwrap_or(1.0)
        } else {
            1.0
        }
    }

    /// Concrete fill list, or `None` when unsupported, absent, or mixed
    pub fn fills(&self) -> Option<&'a [Paint]> {
        if !self.capabilities.fills {
            return None;
        }
        self.node.fills().and_then(Mixed::uniform)
    }

    pub fn strokes(&self) -> Option<&'a [Paint]> {
        if !self.capabilities.strokes {
            return None;
        }
        self.node.strokes()
    }

    /// One weight for the whole node; never negative
    pub fn stroke_weight(&self) -> f64 {
        if !self.capabilities.stroke_weight {
            return 0.0;
        }
        match self.node.stroke_weight() {
            None => 0.0,
            Some(Mixed::Mixed) => 1.0,
            Some(Mixed::Uniform(weight)) => weight.max(0.0),
        }
    }

    /// Children in host order; empty for leaf kinds
    pub fn children(&self) -> Vec<&'a dyn HostNode> {
        if !self.capabilities.children {
            return Vec::new();
        }
        self.node.children().unwrap_or_default()
    }

    pub fn characters(&self) -> &'a str {
        if !self.capabilities.text {
            return "";
        }
        self.node.characters().unwrap_or_default()
    }

    pub fn font_size(&self) -> Mixed<f64> {
        if !self.capabilities.text {
            return Mixed::Uniform(0.0);
        }
        self.node.font_size().unwrap_or(Mixed::Uniform(0.0))
    }

    pub fn font_name(&self) -> Mixed<FontName> {
        if !self.capabilities.text {
            return Mixed::Uniform(FontName::default());
        }
        match self.node.font_name() {
            Some(name) => name.map(FontName::clone),
            None => Mixed::Uniform(FontName::default()),
        }
    }
}
