//! Untere Aktionsleiste: Punkte löschen, Gesamtzeit, Daten speichern.

use crate::app::{AppIntent, AppState};
use crate::core::format_total_time;

/// Rendert die Aktionsleiste und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    !state.editor.profile.is_empty(),
                    egui::Button::new("Clear Points"),
                )
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }

            ui.separator();

            ui.label(
                egui::RichText::new(format_total_time(state.editor.metrics.total_time)).strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // "Save Data" bleibt aktiv; der Export meldet selbst, wenn es nichts zu speichern gibt
                if ui.button("Save Data").clicked() {
                    events.push(AppIntent::SaveRequested);
                }
            });
        });
    });

    events
}
