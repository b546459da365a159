// ScanScope - ui/panels/table.rs
//
// Shared tree-table rendering for the two grouped views.
//
// Uses egui's `ScrollArea::show_rows` over the pre-flattened row list so
// only visible rows are laid out, giving O(1) rendering cost regardless of
// scan size. Group headers are always expanded, like the original nmap
// viewers this replaces.
//
// Annotation widgets (checkbox, comment editor) bind directly to the
// store entry for the record's (host, port) key; the same entry backs the
// record in the other tab, so edits are shared by construction.

use crate::app::annotations::AnnotationStore;
use crate::app::state::TableRow;
use crate::core::model::ServiceRecord;
use crate::ui::theme;
use crate::util::constants::{FIELD_PLACEHOLDER, MAX_COMMENT_CHARS};
use egui::text::{LayoutJob, TextFormat};

/// Which scan-derived field leads a record row: the grouping key of the
/// *other* view.
#[derive(Debug, Clone, Copy)]
pub(super) enum LeadColumn {
    /// Port View rows lead with the host address.
    Host,
    /// Host View rows lead with the port number.
    Port,
}

/// Render the flattened rows of one tab.
///
/// Returns true when any annotation changed this frame, so the caller can
/// re-apply a checked-only filter.
pub(super) fn render_rows(
    ui: &mut egui::Ui,
    id_salt: &str,
    rows: &[TableRow],
    records: &[ServiceRecord],
    annotations: &mut AnnotationStore,
    lead: LeadColumn,
) -> bool {
    let mut annotation_changed = false;

    egui::ScrollArea::vertical()
        .id_salt(id_salt.to_owned())
        .auto_shrink([false; 2])
        .show_rows(ui, theme::ROW_HEIGHT, rows.len(), |ui, row_range| {
            for row_idx in row_range {
                match &rows[row_idx] {
                    TableRow::Header { label, count } => {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(label)
                                    .strong()
                                    .color(theme::HEADER_TEXT),
                            );
                            let noun = if *count == 1 { "service" } else { "services" };
                            ui.label(egui::RichText::new(format!("({count} {noun})")).weak());
                        });
                    }
                    TableRow::Record { record_idx } => {
                        let Some(record) = records.get(*record_idx) else {
                            continue;
                        };
                        if record_row(ui, record, annotations, lead) {
                            annotation_changed = true;
                        }
                    }
                }
            }
        });

    annotation_changed
}

/// One record row: indent | checkbox | columns | comment editor.
/// Returns true when the row's annotation changed.
fn record_row(
    ui: &mut egui::Ui,
    record: &ServiceRecord,
    annotations: &mut AnnotationStore,
    lead: LeadColumn,
) -> bool {
    let key = record.key();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.add_space(theme::RECORD_INDENT);

        let annotation = annotations.entry(&key);

        let check = ui
            .checkbox(&mut annotation.checked, "")
            .on_hover_text("Mark this service as checked");
        if check.changed() {
            changed = true;
        }

        ui.label(record_columns(ui, record, lead));

        let comment_edit = ui.add(
            egui::TextEdit::singleline(&mut annotation.comment)
                .desired_width(theme::COMMENT_EDIT_WIDTH)
                .char_limit(MAX_COMMENT_CHARS)
                .hint_text("comment"),
        );
        if comment_edit.changed() {
            changed = true;
        }
    });

    changed
}

/// Fixed-width monospace layout for the scan-derived columns; placeholder
/// values render dimmed so real product/version data stands out.
fn record_columns(ui: &egui::Ui, record: &ServiceRecord, lead: LeadColumn) -> LayoutJob {
    let font = egui::FontId::monospace(12.0);
    let body = ui.visuals().text_color();

    let lead_text = match lead {
        LeadColumn::Host => record.host_address.clone(),
        LeadColumn::Port => record.port.to_string(),
    };

    let mut job = LayoutJob::default();
    let mut append = |text: String, width: usize, colour: egui::Color32| {
        job.append(
            &format!("{:<w$}  ", clip(&text, width), w = width),
            0.0,
            TextFormat {
                font_id: font.clone(),
                color: colour,
                ..Default::default()
            },
        );
    };

    append(lead_text, theme::LEAD_COL_CHARS, body);
    append(
        record.service_label().to_string(),
        theme::SERVICE_COL_CHARS,
        body,
    );
    append(
        record.product.clone(),
        theme::PRODUCT_COL_CHARS,
        field_colour(&record.product, body),
    );
    append(
        record.version.clone(),
        theme::VERSION_COL_CHARS,
        field_colour(&record.version, body),
    );

    job
}

fn field_colour(value: &str, body: egui::Color32) -> egui::Color32 {
    if value == FIELD_PLACEHOLDER {
        theme::PLACEHOLDER_TEXT
    } else {
        body
    }
}

/// Right-truncate `s` to `max` characters, marking the cut with an ellipsis.
fn clip(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        s.to_string()
    } else {
        let mut out: String = chars[..max.saturating_sub(1)].iter().collect();
        out.push('\u{2026}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_string_unchanged() {
        assert_eq!(clip("ssh", 12), "ssh");
    }

    #[test]
    fn test_clip_long_string_gets_ellipsis() {
        let clipped = clip("Apache Tomcat/Coyote JSP engine", 20);
        assert_eq!(clipped.chars().count(), 20);
        assert!(clipped.ends_with('\u{2026}'));
    }
}
