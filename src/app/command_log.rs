//! Begrenztes Command-Log fuer Diagnose und Tests.

use super::AppCommand;

/// Speichert ausgefuehrte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fuegt einen ausgefuehrten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, aeltere Eintraege werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        // Motion-Samples wuerden das Log sofort fluten
        if matches!(command, AppCommand::UpdateDrag { .. })
            && matches!(self.entries.last(), Some(AppCommand::UpdateDrag { .. }))
        {
            if let Some(last) = self.entries.last_mut() {
                *last = command.clone();
            }
            return;
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurueck.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurueck, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Eintraege.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
