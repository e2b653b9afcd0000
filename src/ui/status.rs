//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Kontrollpunkte: {} | Grad: {} | Abtastung: {}",
                state.editable_count(),
                state.spline.degree(),
                state.sample_count
            ));

            ui.separator();

            if state.editor.delete_modifier_active {
                ui.label("Lösch-Modus (Strg)");
                ui.separator();
            }

            if let Some(message) = &state.ui.status_message {
                ui.label(message);
            }
        });
    });
}
