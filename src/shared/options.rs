//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Standard-Grad der Kurve beim Start.
pub const DEFAULT_DEGREE: usize = 3;
/// Maximal wählbarer Grad im Frontend.
pub const DEGREE_MAX: usize = 5;
/// Standard-Anzahl der Abtastschritte für die Darstellung.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
/// Minimale Anzahl editierbarer Punkte einer geschlossenen Schleife.
pub const MIN_EDITABLE_POINTS: usize = 3;

// ── Interaktion ─────────────────────────────────────────────────────

/// Auswahl-Schwelle in Welteinheiten (Box-Test pro Achse).
pub const SELECT_THRESHOLD_WORLD: f32 = 0.005;

// ── Plot-Rendering ──────────────────────────────────────────────────

/// Linienstärke der Kurve in Pixeln.
pub const CURVE_THICKNESS_PX: f32 = 2.0;
/// Radius der Kontrollpunkt-Marker in Pixeln.
pub const CONTROL_POINT_RADIUS_PX: f32 = 6.0;
/// Farbe der Kurve (RGBA).
pub const CURVE_COLOR: [f32; 4] = [0.35, 0.55, 0.95, 1.0];
/// Farbe der Kontrollpunkt-Marker (RGBA).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.95, 0.65, 0.2, 1.0];
/// Farbe der Achsen-Null-Linien (RGBA).
pub const AXIS_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `airfoil_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Auswahl-Schwelle in Welteinheiten (Box-Test pro Achse)
    pub select_threshold_world: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Grad der Kurve beim Start
    pub default_degree: usize,
    /// Abtastschritte der Darstellung beim Start
    pub default_sample_count: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke der Kurve in Pixeln
    pub curve_thickness_px: f32,
    /// Radius der Kontrollpunkt-Marker in Pixeln
    pub control_point_radius_px: f32,
    /// Farbe der Kurve (RGBA)
    pub curve_color: [f32; 4],
    /// Farbe der Kontrollpunkt-Marker (RGBA)
    pub control_point_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            select_threshold_world: SELECT_THRESHOLD_WORLD,
            default_degree: DEFAULT_DEGREE,
            default_sample_count: DEFAULT_SAMPLE_COUNT,
            curve_thickness_px: CURVE_THICKNESS_PX,
            control_point_radius_px: CONTROL_POINT_RADIUS_PX,
            curve_color: CURVE_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("airfoil_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("airfoil_spline_editor.toml")
    }
}
