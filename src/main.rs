//! Drive Cycle Editor.
//!
//! Interaktiver Editor für Geschwindigkeitsprofile über einem Höhenprofil;
//! exportiert die Segmente als CSV-Fahrzyklus.

use eframe::egui;
use drive_cycle_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Drive Cycle Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 720.0])
                .with_title("Drive Cycle Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Drive Cycle Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        let terrain_path = editor_options.terrain_path.clone();

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        };

        // Ohne Terrain bleibt der Editor benutzbar (Standard-Distanzachse)
        if let Err(e) = app.controller.handle_intent(
            &mut app.state,
            AppIntent::TerrainFileSelected { path: terrain_path },
        ) {
            log::warn!("Start-Terrain nicht geladen: {:#}", e);
            app.state.ui.status_message = Some(format!("Terrain not loaded: {:#}", e));
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            &self.state.options,
        ));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

            let plot_rect = ui::plot_rect(response.rect);
            let axes = self.state.plot_axes();

            events.extend(
                self.input
                    .collect_canvas_events(ui, &response, plot_rect, &axes),
            );

            ui::render_canvas(&painter, ui.visuals(), plot_rect, &axes, &self.state);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Error: {:#}", e));
            }
        }
    }
}
