// ScanScope - ui/panels/host_view.rs
//
// Host View tab: services grouped under bold host headers, hosts in
// lexicographic order. Each child row leads with the port number.

use crate::app::state::AppState;

use super::table::{self, LeadColumn};

/// Render the Host View tab (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.host_rows.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.document.records.is_empty() {
                ui.label(
                    "No scan loaded.\nOpen an Nmap XML file via File \u{2192} Open Scan\u{2026}.",
                );
            } else {
                ui.label("No services match the current filters.");
            }
        });
        return;
    }

    let AppState {
        ref document,
        ref host_rows,
        ref mut annotations,
        ..
    } = *state;

    let changed = table::render_rows(
        ui,
        "host_view",
        host_rows,
        &document.records,
        annotations,
        LeadColumn::Port,
    );

    if changed && state.filter_state.checked_only {
        state.apply_filters();
    }
}
