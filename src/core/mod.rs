//! Core-Domänentypen: Spline-Modell, Abtastung, Plot-Viewport.

/// Kurvenmodell der Editier-Session
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - BSpline: Kontrollpunkte, Knotenvektor und De-Boor-Auswertung
/// - CurveSamples: serialisierbares Abtast-Paket für den Export
pub mod sampling;
pub mod spline;
pub mod viewport;

pub use sampling::{sample_curve, CurveSamples};
pub use spline::{BSpline, SplineError};
pub use viewport::PlotViewport;
