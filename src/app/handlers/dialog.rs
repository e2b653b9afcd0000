//! Handler für Dialoge und die Editor-Freigabe.

use crate::app::AppState;

/// Sperrt oder gibt den Editor frei.
///
/// Ein laufender Drag bleibt beim Sperren eingefroren; das bedingungslose
/// `EndDrag` beim nächsten Loslassen räumt ihn auf.
pub fn set_editing_enabled(state: &mut AppState, enabled: bool) {
    state.editor.enabled = enabled;
    log::debug!(
        "Editor {}",
        if enabled { "freigegeben" } else { "gesperrt" }
    );
}

/// Öffnet den Info-Dialog.
pub fn open_info_dialog(state: &mut AppState) {
    state.ui.show_info_dialog = true;
}

/// Schließt den Info-Dialog.
pub fn close_info_dialog(state: &mut AppState) {
    state.ui.show_info_dialog = false;
}
