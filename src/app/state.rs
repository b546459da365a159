// ScanScope - app/state.rs
//
// Application state management. Holds the loaded scan, the two grouped
// views, the annotation store, filter state, and the flattened table rows
// each tab renders. Owned by the eframe::App implementation.

use crate::app::annotations::AnnotationStore;
use crate::core::filter::{self, FilterState};
use crate::core::group::{HostGroupView, PortGroupView};
use crate::core::model::ScanDocument;
use std::path::PathBuf;

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Ports,
    Hosts,
}

/// One row of a flattened group table.
///
/// The tabs render these with `ScrollArea::show_rows`, which needs a flat,
/// indexable row list; group nesting is baked in here rather than in the
/// widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Bold group header: label plus the number of visible records under it.
    Header { label: String, count: usize },

    /// A record row; index into `ScanDocument::records`.
    Record { record_idx: usize },
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The loaded scan (empty until a file is opened).
    pub document: ScanDocument,

    /// Path of the loaded scan, if any.
    pub scan_path: Option<PathBuf>,

    /// Records grouped by port.
    pub port_view: PortGroupView,

    /// Records grouped by host address.
    pub host_view: HostGroupView,

    /// Session annotations keyed by (host, port).
    pub annotations: AnnotationStore,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Raw regex text as typed (kept separately so an invalid pattern can
    /// stay visible in the input while the last good compile applies).
    pub regex_input: String,

    /// Error text for an invalid regex input, shown under the field.
    pub regex_error: Option<String>,

    /// Flattened rows for the Port View tab, filter already applied.
    pub port_rows: Vec<TableRow>,

    /// Flattened rows for the Host View tab, filter already applied.
    pub host_rows: Vec<TableRow>,

    /// Number of records passing the current filter.
    pub visible_records: usize,

    /// Active tab.
    pub active_tab: ViewTab,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the scan summary window.
    pub show_summary: bool,

    /// Whether to show the about window.
    pub show_about: bool,

    /// Path a panel asked to open (picked up by the gui loop).
    pub pending_open: Option<PathBuf>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial, empty state.
    pub fn new(debug_mode: bool) -> Self {
        Self {
            status_message: "Ready. Open a scan via File \u{2192} Open Scan\u{2026}.".to_string(),
            debug_mode,
            ..Default::default()
        }
    }

    /// Install a freshly loaded scan: rebuild both views, drop the previous
    /// session's annotations, and recompute the table rows.
    pub fn install_document(&mut self, path: PathBuf, document: ScanDocument) {
        self.port_view = PortGroupView::build(&document.records);
        self.host_view = HostGroupView::build(&document.records);
        self.annotations.clear();
        self.filter_state = FilterState::default();
        self.regex_input.clear();
        self.regex_error = None;
        self.status_message = format!(
            "Loaded '{}': {} services on {} hosts.",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            document.records.len(),
            document.host_count,
        );
        self.scan_path = Some(path);
        self.document = document;
        self.apply_filters();
    }

    /// Recompute the flattened table rows from the current filter.
    ///
    /// Groups whose records are all filtered out contribute no header.
    pub fn apply_filters(&mut self) {
        let text_lower = self.filter_state.text_search.to_lowercase();
        let records = &self.document.records;
        let annotations = &self.annotations;
        let filter = &self.filter_state;

        let passes = |idx: usize| {
            let record = &records[idx];
            filter::matches_record(record, annotations.checked(&record.key()), filter, &text_lower)
        };

        let mut visible = 0usize;

        self.port_rows.clear();
        for (port, idxs) in self.port_view.iter() {
            let matching: Vec<usize> = idxs.iter().copied().filter(|&i| passes(i)).collect();
            if matching.is_empty() {
                continue;
            }
            visible += matching.len();
            self.port_rows.push(TableRow::Header {
                label: format!("Port {port}"),
                count: matching.len(),
            });
            self.port_rows
                .extend(matching.into_iter().map(|record_idx| TableRow::Record { record_idx }));
        }

        self.host_rows.clear();
        for (host, idxs) in self.host_view.iter() {
            let matching: Vec<usize> = idxs.iter().copied().filter(|&i| passes(i)).collect();
            if matching.is_empty() {
                continue;
            }
            self.host_rows.push(TableRow::Header {
                label: host.to_string(),
                count: matching.len(),
            });
            self.host_rows
                .extend(matching.into_iter().map(|record_idx| TableRow::Record { record_idx }));
        }

        self.visible_records = visible;
    }

    /// The rows for the active tab.
    pub fn active_rows(&self) -> &[TableRow] {
        match self.active_tab {
            ViewTab::Ports => &self.port_rows,
            ViewTab::Hosts => &self.host_rows,
        }
    }

    /// Indices of all records passing the current filter, in host-view
    /// order (the order exports use).
    pub fn visible_record_indices(&self) -> Vec<usize> {
        self.host_rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Record { record_idx } => Some(*record_idx),
                TableRow::Header { .. } => None,
            })
            .collect()
    }

    /// Clear all scan state (document, views, annotations, filters).
    pub fn clear(&mut self) {
        self.document = ScanDocument::default();
        self.scan_path = None;
        self.port_view = PortGroupView::default();
        self.host_view = HostGroupView::default();
        self.annotations.clear();
        self.filter_state = FilterState::default();
        self.regex_input.clear();
        self.regex_error = None;
        self.port_rows.clear();
        self.host_rows.clear();
        self.visible_records = 0;
        self.show_summary = false;
        self.status_message = "Ready.".to_string();
    }
}
