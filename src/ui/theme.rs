// ScanScope - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for group header rows (port / host headings).
pub const HEADER_TEXT: Color32 = Color32::from_rgb(96, 165, 250); // Blue 400

/// Colour of the check mark on checked records.
pub const CHECKED_MARK: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Dimmed colour for placeholder field values ("N/A").
pub const PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 230.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const COMMENT_EDIT_WIDTH: f32 = 220.0;
pub const RECORD_INDENT: f32 = 18.0;

/// Column widths for the record tables (monospace-aligned).
pub const LEAD_COL_CHARS: usize = 15;
pub const SERVICE_COL_CHARS: usize = 12;
pub const PRODUCT_COL_CHARS: usize = 20;
pub const VERSION_COL_CHARS: usize = 12;
