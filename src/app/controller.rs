//! Application Controller fuer zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Profil-Editing ===
            AppCommand::BeginDragOrAddPoint { position, speed } => {
                handlers::editing::begin_drag_or_add(state, position, speed)
            }
            AppCommand::UpdateDrag { position, speed } => {
                handlers::editing::update_drag(state, position, speed)
            }
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::RemoveNearestPoint {
                position,
                speed,
                threshold,
            } => handlers::editing::remove_nearest(state, position, speed, threshold),
            AppCommand::ClearPoints => handlers::editing::clear(state),

            // === Datei-I/O ===
            AppCommand::ExportSegments { path } => handlers::file_io::export(state, path)?,
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::RequestTerrainDialog => handlers::file_io::request_terrain(state),
            AppCommand::LoadTerrain { path } => handlers::file_io::load_terrain(state, path)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
