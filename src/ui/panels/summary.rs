// ScanScope - ui/panels/summary.rs
//
// Scan summary window: counts plus the scanner metadata read from the
// document root. Opened from View -> Scan Summary.

use crate::app::state::AppState;

/// Render the summary window if requested.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = state.show_summary;
    egui::Window::new("Scan Summary")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("scan_summary_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    if let Some(ref path) = state.scan_path {
                        ui.label("File");
                        ui.label(path.display().to_string());
                        ui.end_row();
                    }

                    ui.label("Hosts");
                    ui.label(state.document.host_count.to_string());
                    ui.end_row();

                    ui.label("Distinct ports");
                    ui.label(state.port_view.group_count().to_string());
                    ui.end_row();

                    ui.label("Services");
                    ui.label(state.document.records.len().to_string());
                    ui.end_row();

                    ui.label("Checked");
                    ui.label(state.annotations.checked_count().to_string());
                    ui.end_row();

                    let info = &state.document.info;
                    if let Some(ref scanner) = info.scanner {
                        ui.label("Scanner");
                        let scanner_line = match info.version {
                            Some(ref v) => format!("{scanner} {v}"),
                            None => scanner.clone(),
                        };
                        ui.label(scanner_line);
                        ui.end_row();
                    }
                    if let Some(started) = info.started {
                        ui.label("Started");
                        ui.label(started.format("%Y-%m-%d %H:%M:%S UTC").to_string());
                        ui.end_row();
                    }
                    if let Some(elapsed) = info.elapsed {
                        ui.label("Elapsed");
                        ui.label(format!("{elapsed:.2} s"));
                        ui.end_row();
                    }
                    if let Some(ref summary) = info.summary {
                        ui.label("Result");
                        ui.label(summary);
                        ui.end_row();
                    }
                });

            if let Some(ref args) = state.document.info.args {
                ui.separator();
                ui.label(egui::RichText::new(args).monospace().small());
            }
        });
    state.show_summary = open;
}
