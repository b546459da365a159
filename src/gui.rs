// ScanScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires the tab strip, menu bar, filter sidebar, status bar, and dialog
// windows together, and services deferred open/export actions.

use crate::app::loader;
use crate::app::state::{AppState, ViewTab};
use crate::core::export::{self, ExportRow};
use crate::ui;

/// The ScanScope application.
pub struct ScanScopeApp {
    pub state: AppState,
}

impl ScanScopeApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Load the scan at `path` into the session.
    ///
    /// Runtime failures (unlike the fatal startup path) land in the status
    /// bar so the current scan stays usable.
    fn open_scan(&mut self, path: std::path::PathBuf) {
        match loader::load_scan(&path) {
            Ok(document) => {
                self.state.install_document(path, document);
            }
            Err(e) => {
                tracing::error!(file = %path.display(), error = %e, "Failed to open scan");
                self.state.status_message = format!("Cannot open scan: {e}");
            }
        }
    }

    /// Flatten the currently visible records plus their annotations into
    /// export rows, in host order.
    fn export_rows(&self) -> Vec<ExportRow> {
        self.state
            .visible_record_indices()
            .into_iter()
            .map(|idx| {
                let record = &self.state.document.records[idx];
                let key = record.key();
                ExportRow {
                    host: record.host_address.clone(),
                    port: record.port,
                    service: record.service_label().to_string(),
                    product: record.product.clone(),
                    version: record.version.clone(),
                    checked: self.state.annotations.checked(&key),
                    comment: self.state.annotations.comment(&key).to_string(),
                }
            })
            .collect()
    }

    fn export_csv_dialog(&mut self) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("scan-export.csv")
            .save_file()
        else {
            return;
        };
        let rows = self.export_rows();
        self.state.status_message = match std::fs::File::create(&dest) {
            Ok(f) => match export::export_csv(&rows, f, &dest) {
                Ok(n) => format!("Exported {n} rows to CSV."),
                Err(e) => format!("CSV export failed: {e}"),
            },
            Err(e) => format!("Cannot create file: {e}"),
        };
    }

    fn export_json_dialog(&mut self) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("scan-export.json")
            .save_file()
        else {
            return;
        };
        let rows = self.export_rows();
        self.state.status_message = match std::fs::File::create(&dest) {
            Ok(f) => match export::export_json(&rows, f, &dest) {
                Ok(n) => format!("Exported {n} rows to JSON."),
                Err(e) => format!("JSON export failed: {e}"),
            },
            Err(e) => format!("Cannot create file: {e}"),
        };
    }
}

impl eframe::App for ScanScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A panel (or startup) asked for a scan to be opened.
        if let Some(path) = self.state.pending_open.take() {
            self.open_scan(path);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Scan\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Nmap XML", &["xml"])
                            .pick_file()
                        {
                            self.state.pending_open = Some(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export is meaningful only when something is visible.
                    let has_rows = self.state.visible_records > 0;
                    ui.add_enabled_ui(has_rows, |ui| {
                        if ui.button("Export CSV\u{2026}").clicked() {
                            self.export_csv_dialog();
                            ui.close_menu();
                        }
                        if ui.button("Export JSON\u{2026}").clicked() {
                            self.export_json_dialog();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_scan = self.state.scan_path.is_some();
                    ui.add_enabled_ui(has_scan, |ui| {
                        if ui.button("Scan Summary").clicked() {
                            self.state.show_summary = true;
                            ui.close_menu();
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.document.records.len();
                    if total > 0 {
                        ui.label(format!("{}/{} services", self.state.visible_records, total));
                    }
                    if let Some(ref path) = self.state.scan_path {
                        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                            ui.label(egui::RichText::new(name).weak());
                            ui.separator();
                        }
                    }
                });
            });
        });

        // Left sidebar: filters
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel: tab strip + active grouped table
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.active_tab, ViewTab::Ports, "Port View");
                ui.selectable_value(&mut self.state.active_tab, ViewTab::Hosts, "Host View");
            });
            ui.separator();

            match self.state.active_tab {
                ViewTab::Ports => ui::panels::port_view::render(ui, &mut self.state),
                ViewTab::Hosts => ui::panels::host_view::render(ui, &mut self.state),
            }
        });

        // Dialog windows
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }
}
