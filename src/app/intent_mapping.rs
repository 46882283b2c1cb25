//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPressed { position, speed } => {
            // Eine neue Geste darf erst starten, wenn die alte beendet ist
            let mut commands = Vec::with_capacity(2);
            if state.editor.is_dragging() {
                commands.push(AppCommand::EndDrag);
            }
            commands.push(AppCommand::BeginDragOrAddPoint { position, speed });
            commands
        }
        AppIntent::CanvasDragged { position, speed } => {
            if state.editor.is_dragging() {
                vec![AppCommand::UpdateDrag { position, speed }]
            } else {
                Vec::new()
            }
        }
        AppIntent::CanvasReleased => {
            if state.editor.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::CanvasSecondaryPressed { position, speed } => {
            vec![AppCommand::RemoveNearestPoint {
                position,
                speed,
                threshold: state.options.hit_threshold,
            }]
        }
        AppIntent::ClearRequested => vec![AppCommand::EndDrag, AppCommand::ClearPoints],
        AppIntent::SaveRequested => vec![AppCommand::ExportSegments { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => {
            vec![AppCommand::ExportSegments { path: Some(path) }]
        }
        AppIntent::OpenTerrainRequested => vec![AppCommand::RequestTerrainDialog],
        AppIntent::TerrainFileSelected { path } => vec![AppCommand::LoadTerrain { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
