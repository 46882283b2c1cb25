//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Points: {} | Segments: {}",
                state.point_count(),
                state.editor.metrics.segment_count
            ));

            ui.separator();

            if let Some(ref terrain_path) = state.ui.terrain_path {
                let filename = terrain_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Terrain: {}", filename));
            } else {
                ui.label("Terrain: None");
            }

            if state.editor.is_dragging() {
                ui.separator();
                ui.label("Dragging");
            }

            if let Some(ref message) = state.ui.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
