//! Canvas-Input-Handling: Maus-Events → AppIntent in Datenkoordinaten.

use super::canvas::plot_viewport;
use super::keyboard;
use crate::app::AppIntent;
use crate::core::PlotAxes;
use glam::Vec2;

/// Bündelt die gemeinsamen Parameter für Canvas-Event-Verarbeitung.
struct CanvasContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    plot_rect: egui::Rect,
    axes: &'a PlotAxes,
}

impl CanvasContext<'_> {
    /// Screen-Position → `(Distanz, Geschwindigkeit)`.
    fn to_data(&self, pos: egui::Pos2) -> (f64, f64) {
        let data = self
            .axes
            .screen_to_speed(Vec2::new(pos.x, pos.y), plot_viewport(self.plot_rect));
        (data.x, data.y)
    }

    /// `true`, wenn die Position im Plotbereich liegt und nicht von einem
    /// anderen Layer (z.B. offenem Menü) verdeckt ist.
    fn accepts(&self, pos: egui::Pos2) -> bool {
        self.plot_rect.contains(pos) && self.response.contains_pointer()
    }
}

/// Verwaltet den Input-Zustand für den Canvas (laufende Links-Geste)
#[derive(Default)]
pub struct InputState {
    /// Linke Taste wurde im Plot gedrückt und noch nicht losgelassen
    primary_gesture: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Links drücken → `CanvasPressed`, Bewegung bei gedrückter Taste →
    /// `CanvasDragged`, Loslassen (oder Zeiger verlässt das Fenster) →
    /// `CanvasReleased`, Rechtsklick → `CanvasSecondaryPressed`.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        plot_rect: egui::Rect,
        axes: &PlotAxes,
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext {
            ui,
            response,
            plot_rect,
            axes,
        };

        let mut events = keyboard::collect_keyboard_intents(ui);

        self.handle_primary_press(&ctx, &mut events);
        self.handle_primary_motion(&ctx, &mut events);
        self.handle_primary_release(&ctx, &mut events);
        handle_secondary_press(&ctx, &mut events);

        events
    }

    fn handle_primary_press(&mut self, ctx: &CanvasContext<'_>, events: &mut Vec<AppIntent>) {
        let press = ctx.ui.input(|i| {
            i.pointer
                .primary_pressed()
                .then(|| i.pointer.press_origin())
                .flatten()
        });
        let Some(origin) = press else {
            return;
        };
        if !ctx.accepts(origin) {
            return;
        }

        let (position, speed) = ctx.to_data(origin);
        events.push(AppIntent::CanvasPressed { position, speed });
        self.primary_gesture = true;
    }

    fn handle_primary_motion(&self, ctx: &CanvasContext<'_>, events: &mut Vec<AppIntent>) {
        if !self.primary_gesture {
            return;
        }
        let motion = ctx.ui.input(|i| {
            (i.pointer.primary_down() && i.pointer.is_moving())
                .then(|| i.pointer.latest_pos())
                .flatten()
        });
        // Bewegung ausserhalb des Plots wird ignoriert, der Drag bleibt aktiv
        if let Some(pos) = motion.filter(|pos| ctx.plot_rect.contains(*pos)) {
            let (position, speed) = ctx.to_data(pos);
            events.push(AppIntent::CanvasDragged { position, speed });
        }
    }

    fn handle_primary_release(&mut self, ctx: &CanvasContext<'_>, events: &mut Vec<AppIntent>) {
        if !self.primary_gesture {
            return;
        }
        let released = ctx.ui.input(|i| {
            i.pointer.primary_released() || !i.pointer.primary_down() || !i.pointer.has_pointer()
        });
        if released {
            events.push(AppIntent::CanvasReleased);
            self.primary_gesture = false;
        }
    }
}

fn handle_secondary_press(ctx: &CanvasContext<'_>, events: &mut Vec<AppIntent>) {
    let press = ctx.ui.input(|i| {
        i.pointer
            .secondary_pressed()
            .then(|| i.pointer.interact_pos())
            .flatten()
    });
    if let Some(pos) = press.filter(|pos| ctx.accepts(*pos)) {
        let (position, speed) = ctx.to_data(pos);
        events.push(AppIntent::CanvasSecondaryPressed { position, speed });
    }
}
