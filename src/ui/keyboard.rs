//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let (modifiers, key_o_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
        )
    });
    shortcut_intents(modifiers, key_o_pressed, key_s_pressed)
}

/// Ctrl+O (Terrain öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter)
fn shortcut_intents(modifiers: egui::Modifiers, key_o: bool, key_s: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !modifiers.command {
        return events;
    }

    if key_o {
        events.push(AppIntent::OpenTerrainRequested);
    }

    if key_s && modifiers.shift {
        events.push(AppIntent::SaveAsRequested);
    } else if key_s {
        events.push(AppIntent::SaveRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_require_command_modifier() {
        assert!(shortcut_intents(egui::Modifiers::NONE, true, true).is_empty());
    }

    #[test]
    fn ctrl_s_saves_and_ctrl_shift_s_asks_for_path() {
        assert_eq!(
            shortcut_intents(egui::Modifiers::COMMAND, false, true),
            vec![AppIntent::SaveRequested]
        );

        let shifted = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
        assert_eq!(
            shortcut_intents(shifted, false, true),
            vec![AppIntent::SaveAsRequested]
        );
    }

    #[test]
    fn ctrl_o_opens_terrain() {
        assert_eq!(
            shortcut_intents(egui::Modifiers::COMMAND, true, false),
            vec![AppIntent::OpenTerrainRequested]
        );
    }
}
