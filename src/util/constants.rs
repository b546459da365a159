// ScanScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ScanScope";

/// Application identifier used for config directories.
pub const APP_ID: &str = "ScanScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input limits
// =============================================================================

/// Maximum scan document size in bytes. Nmap output for even very large
/// networks stays far below this; the cap bounds memory for a mis-supplied
/// file (a pcap, a disk image) before any parsing starts.
pub const MAX_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024; // 256 MB

// =============================================================================
// Record fields
// =============================================================================

/// Placeholder substituted for a missing service `product` or `version`
/// attribute. Service `name` is never substituted; an absent name stays
/// absent.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// Maximum length of a record comment in characters. Enforced by the
/// comment editor so the annotation table stays bounded.
pub const MAX_COMMENT_CHARS: usize = 500;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of rows that can be exported in a single operation.
pub const MAX_EXPORT_ROWS: usize = 1_000_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum size of the config file in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB
