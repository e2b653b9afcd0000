//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::BSpline;
use crate::shared::EditorOptions;

/// Transienter Interaktionszustand des Zeiger-Editors.
///
/// Der Editor besitzt keine Geometrie — alle Kurven-Mutationen werden an
/// das Spline-Modell delegiert. `dragging` ist die Zustandsmaschine:
/// `None` = Idle, `Some(index)` = Dragging.
pub struct EditorInteractionState {
    /// Globales Gate: `false` während ein Dialog/Menü den Fokus besitzt
    pub enabled: bool,
    /// Aktuell gezogener Kontrollpunkt (`None` = Idle)
    pub dragging: Option<usize>,
    /// Latch des Lösch-Modifiers (global verfolgt, nicht plot-gebunden)
    pub delete_modifier_active: bool,
    /// Liegt ein selektierbarer Punkt unter dem Zeiger? (Cursor-Feedback)
    pub hover_active: bool,
}

impl EditorInteractionState {
    /// Erstellt den Standard-Interaktionszustand (freigegeben, Idle).
    pub fn new() -> Self {
        Self {
            enabled: true,
            dragging: None,
            delete_modifier_active: false,
            hover_active: false,
        }
    }
}

impl Default for EditorInteractionState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Info-Dialog angezeigt wird
    pub show_info_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Export bestätigt)
    pub status_message: Option<String>,
    /// Serialisiertes Abtast-Paket, vom Frontend abzuholen (Zwischenablage)
    pub pending_export: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Kurvenmodell der Editier-Session (exklusiver Besitz)
    pub spline: BSpline,
    /// Anzahl der Abtastschritte für die Darstellung
    pub sample_count: usize,
    /// Editor-Interaktions-State
    pub editor: EditorInteractionState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Schwellen, Farben, Defaults)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Frontend, dass die Szene neu gebaut werden muss
    scene_dirty: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit der Referenz-Profilform.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Startzustand mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let spline = BSpline::reference_seed();
        Self {
            spline,
            sample_count: options.default_sample_count.max(1),
            editor: EditorInteractionState::new(),
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
            scene_dirty: true,
        }
    }

    /// Markiert die Szene als veraltet (Update-Benachrichtigung an das
    /// Frontend, das daraufhin Abtastung und Kontrollpunkte neu abholt).
    pub fn mark_scene_dirty(&mut self) {
        self.scene_dirty = true;
    }

    /// Holt das Dirty-Flag ab und setzt es zurück.
    pub fn take_scene_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.scene_dirty, false)
    }

    /// Anzahl der editierbaren Kontrollpunkte (für UI-Anzeige).
    pub fn editable_count(&self) -> usize {
        self.spline.editable_len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
