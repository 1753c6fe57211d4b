// Text payload extraction

use super::paints::first_solid_fill_color;
use super::reader::NodeReader;
use super::types::TextData;
use crate::host::Mixed;

pub fn extract_text(reader: &NodeReader<'_>) -> TextData {
    // A mixed font reference makes both family and style mixed
    let (font_family, font_style) = match reader.font_name() {
        Mixed::Uniform(font) => (Mixed::Uniform(font.family), Mixed::Uniform(font.style)),
        Mixed::Mixed => (Mixed::Mixed, Mixed::Mixed),
    };

    TextData {
        content: reader.characters().to_string(),
        font_size: reader.font_size(),
        font_family,
        font_style,
        fill_color: first_solid_fill_color(reader),
    }
}
