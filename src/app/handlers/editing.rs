//! Handler für die Zeiger-Interaktion: Drag, Einfügen, Löschen, Hover.

use glam::Vec2;

use crate::app::AppState;
use crate::shared::pick_geometry;
use crate::shared::MIN_EDITABLE_POINTS;

/// Startet einen Drag, wenn ein selektierbarer Punkt im Box-Threshold liegt.
///
/// First-Match-Wins über die editierbaren Punkte; der Spiegel-Tail nimmt
/// am Hit-Test nicht teil und kann daher nie direkt gezogen werden.
pub fn begin_drag(state: &mut AppState, world_pos: Vec2) {
    let threshold = state.options.select_threshold_world;
    if let Some(index) =
        pick_geometry::hit_test(state.spline.editable_points(), world_pos, threshold)
    {
        state.editor.dragging = Some(index);
        log::debug!("Drag gestartet: Kontrollpunkt {}", index);
    }
}

/// Verschiebt den gezogenen Punkt und signalisiert ein Update.
/// Läuft ungedrosselt für jedes Move-Event.
pub fn drag_to(state: &mut AppState, world_pos: Vec2) {
    let Some(index) = state.editor.dragging else {
        return;
    };

    // Der Index stammt aus dem Hit-Test; verschiebt sich der Bestand
    // währenddessen, schlägt die Verschiebung fehl und der Drag endet.
    if let Err(e) = state.spline.move_control_point(index, world_pos) {
        log::warn!("Drag-Verschiebung fehlgeschlagen: {}", e);
        state.editor.dragging = None;
        return;
    }

    state.mark_scene_dirty();
}

/// Beendet den Drag — bedingungslos zurück zu Idle, auch wenn gar kein
/// Drag lief.
pub fn end_drag(state: &mut AppState) {
    state.editor.dragging = None;
}

/// Berechnet das Hover-Flag für das Cursor-Feedback neu.
pub fn update_hover(state: &mut AppState, world_pos: Vec2) {
    let threshold = state.options.select_threshold_world;
    state.editor.hover_active =
        pick_geometry::hit_test(state.spline.editable_points(), world_pos, threshold).is_some();
}

/// Fügt einen neuen Kontrollpunkt nahe der Klickposition ein.
///
/// Die Einfügeseite bestimmt das Vorzeichen des Skalarprodukts aus
/// Winkelhalbierender am nächsten Punkt und Klick-Vektor
/// (siehe `pick_geometry::insertion_index`).
pub fn insert_control_point(state: &mut AppState, world_pos: Vec2) {
    let editable = state.spline.editable_points();
    let Some(nearest) = pick_geometry::nearest_point(editable, world_pos) else {
        return;
    };
    let insert_at = pick_geometry::insertion_index(editable, nearest, world_pos);

    if let Err(e) = state.spline.add_control_point(world_pos, insert_at) {
        log::warn!("Einfügen fehlgeschlagen: {}", e);
        return;
    }

    log::debug!("Kontrollpunkt an Slot {} eingefügt", insert_at);
    state.mark_scene_dirty();
}

/// Löscht den euklidisch nächsten editierbaren Kontrollpunkt.
///
/// Verweigert am Minimum von [`MIN_EDITABLE_POINTS`] Punkten (kleinste
/// auswertbare geschlossene Schleife).
pub fn delete_nearest_control_point(state: &mut AppState, world_pos: Vec2) {
    if state.spline.editable_len() <= MIN_EDITABLE_POINTS {
        log::debug!(
            "Löschen verweigert: Minimum von {} Punkten erreicht",
            MIN_EDITABLE_POINTS
        );
        return;
    }

    let Some(nearest) = pick_geometry::nearest_point(state.spline.editable_points(), world_pos)
    else {
        return;
    };

    if let Err(e) = state.spline.delete_control_point(nearest) {
        log::warn!("Löschen fehlgeschlagen: {}", e);
        return;
    }

    log::debug!("Kontrollpunkt {} gelöscht", nearest);
    state.mark_scene_dirty();
}

/// Setzt den Lösch-Modifier-Latch.
pub fn set_delete_modifier(state: &mut AppState, active: bool) {
    state.editor.delete_modifier_active = active;
}
