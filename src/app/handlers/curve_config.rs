//! Handler für die Kurven-Konfiguration: Abtastrate, Grad, Export.

use crate::app::AppState;
use crate::core::{sampling, BSpline};

/// Setzt die Anzahl der Abtastschritte für die Darstellung.
pub fn set_sample_count(state: &mut AppState, count: usize) {
    state.sample_count = count.max(1);
    state.mark_scene_dirty();
}

/// Baut die Kurve mit neuem Grad aus den editierbaren Punkten neu auf.
///
/// Der Grad ist pro Instanz fix: statt in-place zu mutieren wird das alte
/// Modell verworfen und aus seinen editierbaren Punkten neu konstruiert.
/// Schlägt die Konstruktion fehl, bleibt der bisherige Zustand stehen.
pub fn rebuild_with_degree(state: &mut AppState, degree: usize) {
    if degree == state.spline.degree() {
        return;
    }

    match BSpline::from_editable_points(degree, state.spline.editable_points()) {
        Ok(spline) => {
            state.spline = spline;
            state.mark_scene_dirty();
            log::info!("Kurve mit Grad {} neu aufgebaut", degree);
        }
        Err(e) => log::warn!("Gradwechsel auf {} nicht möglich: {}", degree, e),
    }
}

/// Serialisiert die aktuellen Abtastwerte und stellt sie dem Frontend zur
/// Abholung bereit (Zwischenablage bzw. Übergabe an den Vorhersagedienst).
pub fn export_curve_samples(state: &mut AppState) -> anyhow::Result<()> {
    let points = sampling::sample_curve(&state.spline, state.sample_count);
    let samples = sampling::CurveSamples::from_points(&points);
    let payload = serde_json::to_string(&samples)?;

    state.ui.pending_export = Some(payload);
    state.ui.status_message = Some(format!("{} Abtastpunkte exportiert", points.len()));
    log::info!("Kurve mit {} Abtastpunkten exportiert", points.len());
    Ok(())
}
