// Fill and stroke extraction
//
// Only solid paints survive; gradients, images and hidden paints are dropped
// without affecting the remaining entries.

use tracing::trace;

use super::reader::NodeReader;
use super::types::{Fill, Stroke};
use crate::host::Paint;
use crate::utils::color::rgb_to_hex;

pub fn extract_fills(reader: &NodeReader<'_>) -> Vec<Fill> {
    let Some(fills) = reader.fills() else {
        return Vec::new();
    };

    let extracted: Vec<Fill> = fills
        .iter()
        .filter(|paint| paint.is_visible_solid())
        .map(|paint| Fill {
            kind: paint.kind,
            color: rgb_to_hex(&paint.color),
            opacity: paint.opacity.unwrap_or(1.0),
        })
        .collect();

    log_dropped("fills", reader, fills, extracted.len());
    extracted
}

/// Every stroke carries the node's single resolved weight
pub fn extract_strokes(reader: &NodeReader<'_>) -> Vec<Stroke> {
    let Some(strokes) = reader.strokes() else {
        return Vec::new();
    };
    let weight = reader.stroke_weight();

    let extracted: Vec<Stroke> = strokes
        .iter()
        .filter(|paint| paint.is_visible_solid())
        .map(|paint| Stroke {
            kind: paint.kind,
            color: rgb_to_hex(&paint.color),
            weight,
        })
        .collect();

    log_dropped("strokes", reader, strokes, extracted.len());
    extracted
}

/// Color of the first solid fill in a concrete fill list
pub fn first_solid_fill_color(reader: &NodeReader<'_>) -> Option<String> {
    reader
        .fills()?
        .iter()
        .find(|paint| paint.is_solid())
        .map(|paint| rgb_to_hex(&paint.color))
}

fn log_dropped(what: &str, reader: &NodeReader<'_>, paints: &[Paint], kept: usize) {
    if kept < paints.len() {
        trace!(
            "Dropped {} of {} {} on '{}' (non-solid or hidden)",
            paints.len() - kept,
            paints.len(),
            what,
            reader.node().name()
        );
    }
}
