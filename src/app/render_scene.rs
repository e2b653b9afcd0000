//! Baut die CurveScene aus dem AppState.

use crate::app::AppState;
use crate::core::sampling;
use crate::shared::CurveScene;

/// Baut die Render-Szene: abgetastete Kurve plus editierbare Kontrollpunkte.
pub fn build(state: &AppState) -> CurveScene {
    CurveScene {
        curve: sampling::sample_curve(&state.spline, state.sample_count),
        control_points: state.spline.editable_points().to_vec(),
    }
}
