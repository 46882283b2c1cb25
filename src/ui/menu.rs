//! Top-Menü (File).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let terrain_label = if state.view.terrain.is_some() {
                    "Change Terrain..."
                } else {
                    "Open Terrain..."
                };
                if ui.button(terrain_label).clicked() {
                    events.push(AppIntent::OpenTerrainRequested);
                    ui.close();
                }

                ui.separator();

                let has_segments = state.editor.metrics.segment_count > 0;

                if ui
                    .add_enabled(has_segments, egui::Button::new("Save Data"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_segments, egui::Button::new("Save As..."))
                    .clicked()
                {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
