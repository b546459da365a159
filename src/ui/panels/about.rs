// ScanScope - ui/panels/about.rs
//
// About window. Opened from Help -> About.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the about window if requested.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = state.show_about;
    egui::Window::new("About")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading(format!(
                "{} v{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ));
            ui.add_space(4.0);
            ui.label("Desktop viewer for Nmap XML scan output.");
            ui.label("Groups discovered services by port and by host.");
            ui.add_space(4.0);
            ui.label(egui::RichText::new("MIT licensed.").weak());
        });
    state.show_about = open;
}
