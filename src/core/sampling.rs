//! Polyline-Abtastung der Kurve für Darstellung und Export.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::BSpline;

/// Tastet die Kurve mit `n_samples` uniformen Parameterschritten ab.
///
/// Parameterwerte außerhalb des auswertbaren Bereichs werden übersprungen
/// (die offenen Enden des Knotenvektors sind nicht auswertbar). Der Wert an
/// der unteren Bereichsgrenze wird vorn und hinten angefügt, damit die
/// Polyline sichtbar schließt — die Verdopplung ist eine Render-Notwendigkeit,
/// keine Kurveneigenschaft.
pub fn sample_curve(spline: &BSpline, n_samples: usize) -> Vec<Vec2> {
    let n_samples = n_samples.max(1);
    let (low, high) = spline.domain();
    let closing = spline.evaluate(low);

    let mut points = Vec::with_capacity(n_samples + 2);
    points.push(closing);

    let delta = 1.0 / n_samples as f32;
    for i in 0..=n_samples {
        let t = i as f32 * delta;
        if t <= low || t >= high {
            continue;
        }
        points.push(spline.evaluate(t));
    }

    points.push(closing);
    points
}

/// Serialisierbares Abtast-Paket im `{ "x": [...], "y": [...] }`-Format
/// des Vorhersage-Endpunkts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSamples {
    /// x-Koordinaten der Abtastpunkte in Reihenfolge
    pub x: Vec<f32>,
    /// y-Koordinaten der Abtastpunkte in Reihenfolge
    pub y: Vec<f32>,
}

impl CurveSamples {
    /// Zerlegt eine Punktliste in getrennte Koordinaten-Spalten.
    pub fn from_points(points: &[Vec2]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
        }
    }

    /// Anzahl der enthaltenen Abtastpunkte.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Gibt `true` zurück, wenn keine Abtastpunkte enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
