// ScanScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Service record (normalised output of parsing)
// =============================================================================

/// One observed open service on one host.
///
/// All fields are scan-derived and immutable after the parse. User
/// annotations (checked flag, comment) live in the app layer's
/// `AnnotationStore`, resolved through [`RecordKey`], so the two grouped
/// views always observe the same annotation for the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    /// Host address as reported by the scan (IP or hostname).
    pub host_address: String,

    /// Numeric port id.
    pub port: u16,

    /// Service name. `None` when the scan did not name the service;
    /// never substituted with a placeholder.
    pub service_name: Option<String>,

    /// Detected product, or "N/A" when the scan did not report one.
    pub product: String,

    /// Detected version, or "N/A" when the scan did not report one.
    pub version: String,
}

impl ServiceRecord {
    /// The `(host, port)` identity shared by both grouped views and the
    /// annotation store.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            host_address: self.host_address.clone(),
            port: self.port,
        }
    }

    /// Service name for display: the reported name, or empty when absent.
    pub fn service_label(&self) -> &str {
        self.service_name.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Record key
// =============================================================================

/// Identity of a service record: the `(host address, port)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub host_address: String,
    pub port: u16,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host_address, self.port)
    }
}

// =============================================================================
// Scan metadata
// =============================================================================

/// Metadata read from the `<nmaprun>` root and `<runstats>` elements.
///
/// Everything here is best-effort: absent or unparseable attributes stay
/// `None` and never fail the parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanInfo {
    /// Scanner name (`scanner` attribute, normally "nmap").
    pub scanner: Option<String>,

    /// Full command line recorded by the scanner (`args` attribute).
    pub args: Option<String>,

    /// Scanner version (`version` attribute).
    pub version: Option<String>,

    /// Scan start time (`start` epoch attribute).
    pub started: Option<DateTime<Utc>>,

    /// Human-readable completion summary from `<runstats><finished>`.
    pub summary: Option<String>,

    /// Elapsed scan seconds from `<runstats><finished>`.
    pub elapsed: Option<f64>,
}

// =============================================================================
// Scan document
// =============================================================================

/// The parsed scan: the flat record vector plus scan metadata.
///
/// Grouped views ([`crate::core::group`]) hold index sequences into
/// `records`, so a record appears exactly once here regardless of how many
/// projections display it.
#[derive(Debug, Clone, Default)]
pub struct ScanDocument {
    /// All service records, in document order.
    pub records: Vec<ServiceRecord>,

    /// Number of `<host>` elements seen, including hosts that contributed
    /// no records.
    pub host_count: usize,

    /// Scanner metadata.
    pub info: ScanInfo,
}
