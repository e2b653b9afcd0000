//! Abbildung zwischen Plot-Pixeln und Weltkoordinaten.

use glam::Vec2;

/// Fester Achsenbereich des Profil-Plots mit Screen↔Welt-Umrechnung.
///
/// Der Editor selbst arbeitet ausschließlich in Weltkoordinaten; diese
/// Abbildung ist der Koordinaten-Kollaborateur des Frontends. Normierte
/// Positionen werden auf `[0, 1]` geklemmt, bevor sie in den Achsenbereich
/// gehoben werden; Drags außerhalb des Plots bleiben dadurch am Rand hängen.
#[derive(Debug, Clone)]
pub struct PlotViewport {
    /// Sichtbarer x-Bereich `[min, max]` in Weltkoordinaten
    pub x_range: [f32; 2],
    /// Sichtbarer y-Bereich `[min, max]` in Weltkoordinaten
    pub y_range: [f32; 2],
}

impl PlotViewport {
    /// Standard-Achsenbereich des Profil-Plots.
    pub fn new() -> Self {
        Self {
            x_range: [-0.4, 0.6],
            y_range: [-0.3, 0.3],
        }
    }

    /// Rechnet eine plot-lokale Pixelposition in Weltkoordinaten um.
    /// Die y-Achse zeigt im Plot nach oben, im Screen nach unten.
    pub fn screen_to_world(&self, local: Vec2, plot_size: Vec2) -> Vec2 {
        let nx = (local.x / plot_size.x).clamp(0.0, 1.0);
        let ny = (1.0 - local.y / plot_size.y).clamp(0.0, 1.0);
        Vec2::new(
            denormalize(nx, self.x_range),
            denormalize(ny, self.y_range),
        )
    }

    /// Rechnet Weltkoordinaten in eine plot-lokale Pixelposition um.
    pub fn world_to_screen(&self, world: Vec2, plot_size: Vec2) -> Vec2 {
        let nx = (world.x - self.x_range[0]) / (self.x_range[1] - self.x_range[0]);
        let ny = (world.y - self.y_range[0]) / (self.y_range[1] - self.y_range[0]);
        Vec2::new(nx * plot_size.x, (1.0 - ny) * plot_size.y)
    }
}

impl Default for PlotViewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Hebt einen normierten Wert in den Achsenbereich.
fn denormalize(value: f32, range: [f32; 2]) -> f32 {
    value * (range[1] - range[0]) + range[0]
}
