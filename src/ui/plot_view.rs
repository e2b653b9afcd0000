//! Zeichnet Kurve und Kontrollpunkte in den Plotbereich.

use glam::Vec2;

use crate::app::AppState;
use crate::core::PlotViewport;
use crate::shared::options;
use crate::shared::CurveScene;

/// Wandelt eine RGBA-Farboption in eine egui-Farbe um.
fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet den Plotbereich und gibt die Response für das Input-Handling
/// zurück. Die Szene kommt vorberechnet aus dem App-Layer; hier fallen
/// keine Geometrie-Entscheidungen mehr.
pub fn render_plot(
    ui: &mut egui::Ui,
    scene: &CurveScene,
    state: &AppState,
    viewport: &PlotViewport,
) -> egui::Response {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;
    let plot_size = Vec2::new(rect.width(), rect.height());

    let to_screen = |world: Vec2| -> egui::Pos2 {
        let local = viewport.world_to_screen(world, plot_size);
        egui::pos2(rect.min.x + local.x, rect.min.y + local.y)
    };

    painter.rect_filled(rect, egui::CornerRadius::ZERO, ui.visuals().extreme_bg_color);

    // Achsen-Null-Linien
    let axis_stroke = egui::Stroke::new(1.0, color32(options::AXIS_COLOR));
    let origin = to_screen(Vec2::ZERO);
    painter.line_segment(
        [
            egui::pos2(rect.min.x, origin.y),
            egui::pos2(rect.max.x, origin.y),
        ],
        axis_stroke,
    );
    painter.line_segment(
        [
            egui::pos2(origin.x, rect.min.y),
            egui::pos2(origin.x, rect.max.y),
        ],
        axis_stroke,
    );

    // Kurven-Polyline (geschlossen: erste == letzte Probe)
    if scene.curve.len() >= 2 {
        let curve_points: Vec<egui::Pos2> = scene.curve.iter().map(|p| to_screen(*p)).collect();
        painter.add(egui::Shape::line(
            curve_points,
            egui::Stroke::new(
                state.options.curve_thickness_px,
                color32(state.options.curve_color),
            ),
        ));
    }

    // Editierbare Kontrollpunkte (der Spiegel-Tail wird nicht gezeichnet)
    let radius = state.options.control_point_radius_px;
    let fill = color32(state.options.control_point_color);
    for point in &scene.control_points {
        let center = to_screen(*point);
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.5, ui.visuals().strong_text_color()),
        );
    }

    response
}
