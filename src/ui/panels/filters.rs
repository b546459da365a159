// ScanScope - ui/panels/filters.rs
//
// Sidebar filter controls: substring search, regex, checked-only.
// All filters are AND-combined; changes re-apply immediately.

use crate::app::state::AppState;

/// Render the filter sidebar section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut filters_changed = false;

    // Substring search over host, port, service, product, version.
    ui.label("Search");
    let search = ui.add(
        egui::TextEdit::singleline(&mut state.filter_state.text_search)
            .hint_text("host, service, product\u{2026}"),
    );
    if search.changed() {
        filters_changed = true;
    }

    ui.add_space(6.0);

    // Regex over the same fields. An invalid pattern keeps the previous
    // compiled regex active and shows the compile error inline.
    ui.label("Regex");
    let regex_edit =
        ui.add(egui::TextEdit::singleline(&mut state.regex_input).hint_text("e.g. OpenSSH [78]"));
    if regex_edit.changed() {
        match state.filter_state.set_regex(&state.regex_input) {
            Ok(()) => {
                state.regex_error = None;
                filters_changed = true;
            }
            Err(e) => {
                state.regex_error = Some(e.to_string());
            }
        }
    }
    if let Some(ref error) = state.regex_error {
        ui.label(
            egui::RichText::new(error)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }

    ui.add_space(6.0);

    if ui
        .checkbox(&mut state.filter_state.checked_only, "Checked only")
        .changed()
    {
        filters_changed = true;
    }

    ui.add_space(8.0);

    let any_active = !state.filter_state.is_empty() || !state.regex_input.is_empty();
    ui.add_enabled_ui(any_active, |ui| {
        if ui.button("Clear filters").clicked() {
            state.filter_state = Default::default();
            state.regex_input.clear();
            state.regex_error = None;
            filters_changed = true;
        }
    });

    ui.separator();
    ui.label(
        egui::RichText::new(format!(
            "{} of {} services visible",
            state.visible_records,
            state.document.records.len()
        ))
        .weak(),
    );
    let checked = state.annotations.checked_count();
    if checked > 0 {
        ui.label(
            egui::RichText::new(format!("\u{2714} {checked} checked"))
                .color(crate::ui::theme::CHECKED_MARK),
        );
    }

    if filters_changed {
        state.apply_filters();
    }
}
