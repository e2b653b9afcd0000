//! Render-Payload für das Plot-Frontend.

use glam::Vec2;

/// Vorberechnete Szene: Kurven-Polyline plus editierbare Kontrollpunkte.
///
/// Wird vom App-Layer gebaut, sobald sich der Kurvenzustand ändert
/// (Update-Benachrichtigung über das Dirty-Flag), und vom Frontend ohne
/// weitere Geometrie-Entscheidungen gezeichnet.
#[derive(Debug, Clone, Default)]
pub struct CurveScene {
    /// Abgetastete Kurve als geschlossene Polyline (erster == letzter Punkt)
    pub curve: Vec<Vec2>,
    /// Editierbare Kontrollpunkte in Reihenfolge
    pub control_points: Vec<Vec2>,
}
