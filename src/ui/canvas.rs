//! Plot-Canvas: Hoehenprofil, Geschwindigkeitskurve, Gitter und Achsenbeschriftung.

use crate::app::AppState;
use crate::core::{AxisRange, PlotAxes, PlotViewport};
use glam::{DVec2, Vec2};

/// Titel ueber dem Plotbereich.
const PLOT_TITLE: &str = "Custom Drive Cycle Generator";

// Raender zwischen Canvas und Plotbereich (Platz fuer Beschriftungen)
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 64.0;
const MARGIN_TOP: f32 = 48.0;
const MARGIN_BOTTOM: f32 = 44.0;

const LABEL_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Plotbereich innerhalb des allokierten Canvas-Rechtecks.
pub fn plot_rect(canvas_rect: egui::Rect) -> egui::Rect {
    let min = canvas_rect.min + egui::vec2(MARGIN_LEFT, MARGIN_TOP);
    let max = canvas_rect.max - egui::vec2(MARGIN_RIGHT, MARGIN_BOTTOM);
    egui::Rect::from_min_max(min, max.max(min))
}

/// Wandelt das Plot-Rechteck in den Viewport der Achsen-Umrechnung.
pub fn plot_viewport(plot_rect: egui::Rect) -> PlotViewport {
    PlotViewport::new(
        Vec2::new(plot_rect.min.x, plot_rect.min.y),
        Vec2::new(plot_rect.width(), plot_rect.height()),
    )
}

/// RGBA-Optionen → egui-Farbe.
fn color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Zeichnet den kompletten Plot in das uebergebene Rechteck.
pub fn render_canvas(
    painter: &egui::Painter,
    visuals: &egui::Visuals,
    plot_rect: egui::Rect,
    axes: &PlotAxes,
    state: &AppState,
) {
    let viewport = plot_viewport(plot_rect);
    let options = &state.options;
    let speed_color = color32(options.speed_color);
    let elevation_color = color32(options.elevation_color);
    let text_color = visuals.text_color();

    painter.rect_filled(plot_rect, 0.0, visuals.extreme_bg_color);

    draw_grid_and_ticks(painter, visuals, plot_rect, axes, state.view.terrain.is_some());

    // Achsentitel
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);
    painter.text(
        egui::pos2(plot_rect.center().x, plot_rect.bottom() + 24.0),
        egui::Align2::CENTER_TOP,
        "Distance (m)",
        font.clone(),
        text_color,
    );
    painter.text(
        plot_rect.left_top() + egui::vec2(0.0, -4.0),
        egui::Align2::LEFT_BOTTOM,
        "Elevation (m)",
        font.clone(),
        elevation_color,
    );
    painter.text(
        plot_rect.right_top() + egui::vec2(0.0, -4.0),
        egui::Align2::RIGHT_BOTTOM,
        "Speed (m/s)",
        font,
        speed_color,
    );
    painter.text(
        egui::pos2(plot_rect.center().x, plot_rect.top() - 22.0),
        egui::Align2::CENTER_BOTTOM,
        PLOT_TITLE,
        egui::FontId::proportional(TITLE_FONT_SIZE),
        text_color,
    );

    let clipped = painter.with_clip_rect(plot_rect);

    // Hoehenprofil (linke Achse)
    if let Some(terrain) = &state.view.terrain {
        let line: Vec<egui::Pos2> = terrain
            .samples()
            .map(|(d, e)| to_pos(axes.elevation_to_screen(DVec2::new(d, e), viewport)))
            .collect();
        clipped.add(egui::Shape::line(
            line,
            egui::Stroke::new(1.5, elevation_color),
        ));
    }

    // Geschwindigkeitsprofil (rechte Achse)
    let points: Vec<egui::Pos2> = state
        .editor
        .profile
        .snapshot()
        .iter()
        .map(|p| to_pos(axes.speed_to_screen(DVec2::new(p.position, p.speed), viewport)))
        .collect();

    if points.len() >= 2 {
        clipped.add(egui::Shape::line(
            points.clone(),
            egui::Stroke::new(1.5, speed_color),
        ));
    }

    let radius = options.point_radius_px;
    for pos in &points {
        clipped.circle_filled(*pos, radius, speed_color);
    }

    if let Some(pos) = state.editor.dragged_index().and_then(|i| points.get(i)) {
        clipped.circle_filled(*pos, radius * 1.5, color32(options.drag_color));
    }

    painter.rect_stroke(
        plot_rect,
        0.0,
        egui::Stroke::new(1.0, visuals.widgets.noninteractive.fg_stroke.color),
        egui::StrokeKind::Inside,
    );

    if state.view.terrain.is_none() {
        painter.text(
            plot_rect.center(),
            egui::Align2::CENTER_CENTER,
            "No terrain loaded. Use File → Open Terrain…",
            egui::FontId::proportional(LABEL_FONT_SIZE),
            visuals.weak_text_color(),
        );
    }
}

/// Gitterlinien entlang der Distanzachse und der jeweils aktiven y-Achse.
fn draw_grid_and_ticks(
    painter: &egui::Painter,
    visuals: &egui::Visuals,
    plot_rect: egui::Rect,
    axes: &PlotAxes,
    has_terrain: bool,
) {
    let grid_stroke = egui::Stroke::new(1.0, visuals.weak_text_color().gamma_multiply(0.3));
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);
    let weak = visuals.weak_text_color();

    for d in axes.distance.ticks(10) {
        let x = axis_to_screen_x(axes.distance, d, plot_rect);
        painter.line_segment(
            [egui::pos2(x, plot_rect.top()), egui::pos2(x, plot_rect.bottom())],
            grid_stroke,
        );
        painter.text(
            egui::pos2(x, plot_rect.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            format_tick(d),
            font.clone(),
            weak,
        );
    }

    // Horizontales Gitter an der Hoehenachse, ohne Terrain an der Geschwindigkeitsachse
    let grid_axis = if has_terrain {
        axes.elevation
    } else {
        axes.speed
    };
    for value in grid_axis.ticks(8) {
        let y = axis_to_screen_y(grid_axis, value, plot_rect);
        painter.line_segment(
            [egui::pos2(plot_rect.left(), y), egui::pos2(plot_rect.right(), y)],
            grid_stroke,
        );
    }

    if has_terrain {
        for e in axes.elevation.ticks(8) {
            let y = axis_to_screen_y(axes.elevation, e, plot_rect);
            painter.text(
                egui::pos2(plot_rect.left() - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format_tick(e),
                font.clone(),
                weak,
            );
        }
    }

    for s in axes.speed.ticks(8) {
        let y = axis_to_screen_y(axes.speed, s, plot_rect);
        painter.text(
            egui::pos2(plot_rect.right() + 6.0, y),
            egui::Align2::LEFT_CENTER,
            format_tick(s),
            font.clone(),
            weak,
        );
    }
}

fn axis_to_screen_x(axis: AxisRange, value: f64, rect: egui::Rect) -> f32 {
    rect.left() + axis.normalize(value) as f32 * rect.width()
}

fn axis_to_screen_y(axis: AxisRange, value: f64, rect: egui::Rect) -> f32 {
    rect.bottom() - axis.normalize(value) as f32 * rect.height()
}

/// Ganze Zahlen ohne Nachkommastellen, sonst eine Stelle.
fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
