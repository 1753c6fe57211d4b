// Shared utilities

/// Color conversion (RGB -> `#RRGGBB`)
pub mod color;
