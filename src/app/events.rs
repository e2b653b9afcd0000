//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen liegen bereits in Weltkoordinaten vor — der Editor
/// sieht nie rohe Pixelpositionen.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste im Plotbereich gedrückt
    PointerPressed { world_pos: Vec2 },
    /// Zeigerbewegung (auf den Plotbereich geklemmt, auch außerhalb gemeldet)
    PointerMoved { world_pos: Vec2 },
    /// Primärtaste losgelassen (unabhängig von der Zeigerposition)
    PointerReleased,
    /// Sekundärklick im Plotbereich → Einfügen oder Löschen
    SecondaryClicked { world_pos: Vec2 },
    /// Lösch-Modifier gedrückt oder losgelassen.
    /// Wird global verfolgt, nicht auf den Plotbereich beschränkt.
    DeleteModifierChanged { active: bool },
    /// Editor sperren/freigeben (Dialog oder Menü besitzt den Fokus)
    EditingEnabledChanged { enabled: bool },
    /// Info-Dialog öffnen
    InfoDialogRequested,
    /// Info-Dialog wurde bestätigt
    InfoDialogDismissed,
    /// Abtastrate der Kurvendarstellung geändert
    SampleCountChanged { count: usize },
    /// Kurvengrad geändert → Modell neu aufbauen
    DegreeChanged { degree: usize },
    /// Abtastwerte als JSON-Payload exportieren
    CurveExportRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag starten, falls ein selektierbarer Punkt im Threshold liegt
    BeginDrag { world_pos: Vec2 },
    /// Gezogenen Kontrollpunkt auf die Weltposition verschieben
    DragTo { world_pos: Vec2 },
    /// Drag beenden (bedingungslos zurück zu Idle)
    EndDrag,
    /// Hover-Flag für Cursor-Feedback neu berechnen
    UpdateHover { world_pos: Vec2 },
    /// Neuen Kontrollpunkt nahe der Klickposition einfügen
    InsertControlPointAt { world_pos: Vec2 },
    /// Nächsten editierbaren Kontrollpunkt löschen (mit Minimum-Guard)
    DeleteNearestControlPoint { world_pos: Vec2 },
    /// Lösch-Modifier-Latch setzen
    SetDeleteModifier { active: bool },
    /// Editor sperren/freigeben
    SetEditingEnabled { enabled: bool },
    /// Info-Dialog öffnen
    OpenInfoDialog,
    /// Info-Dialog schließen
    CloseInfoDialog,
    /// Abtastrate der Darstellung setzen
    SetSampleCount { count: usize },
    /// Kurve mit neuem Grad aus den editierbaren Punkten neu aufbauen
    RebuildWithDegree { degree: usize },
    /// Abtastwerte serialisieren und dem Frontend bereitstellen
    ExportCurveSamples,
}
