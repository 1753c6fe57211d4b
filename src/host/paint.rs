// Paint and font records as the host reports them

use serde::{Deserialize, Serialize};

/// Linear RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Paint kinds - only `Solid` survives extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for PaintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaintKind::Solid => write!(f, "SOLID"),
            PaintKind::GradientLinear => write!(f, "GRADIENT_LINEAR"),
            PaintKind::GradientRadial => write!(f, "GRADIENT_RADIAL"),
            PaintKind::GradientAngular => write!(f, "GRADIENT_ANGULAR"),
            PaintKind::GradientDiamond => write!(f, "GRADIENT_DIAMOND"),
            PaintKind::Image => write!(f, "IMAGE"),
            PaintKind::Video => write!(f, "VIDEO"),
            PaintKind::Other => write!(f, "OTHER"),
        }
    }
}

/// One entry of a node's fills or strokes list
///
/// `color` is only meaningful for solid paints; gradients and images leave
/// it at the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: PaintKind::Solid,
            color,
            opacity: None,
            visible: None,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.kind == PaintKind::Solid
    }

    /// Solid and not explicitly hidden
    pub fn is_visible_solid(&self) -> bool {
        self.is_solid() && self.visible != Some(false)
    }
}

/// Font reference of a text node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}
