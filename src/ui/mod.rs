//! UI-Komponenten: Menü, Canvas, Aktionsleiste, Status-Bar, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul erzeugt ausschliesslich `AppIntent`s; der Zustand wird nur
/// ueber den `AppController` veraendert.
pub mod menu;
pub mod status;
pub mod toolbar;

pub use canvas::{plot_rect, render_canvas};
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
