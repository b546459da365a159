// ScanScope - ui/panels/port_view.rs
//
// Port View tab: services grouped under bold port headers, ports
// ascending. Each child row leads with the host address.

use crate::app::state::AppState;

use super::table::{self, LeadColumn};

/// Render the Port View tab (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.port_rows.is_empty() {
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
        ref port_rows,
        ref mut annotations,
        ..
    } = *state;

    let changed = table::render_rows(
        ui,
        "port_view",
        port_rows,
        &document.records,
        annotations,
        LeadColumn::Host,
    );

    // A checked-only filter must react to the toggle that just happened.
    if changed && state.filter_state.checked_only {
        state.apply_filters();
    }
}
