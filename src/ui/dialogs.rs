//! Modale Dialoge.

use crate::app::AppIntent;

/// Zeigt den Info-Dialog als modales Fenster.
///
/// Solange der Dialog offen ist, bleibt der Editor gesperrt; das Intent-
/// Mapping koppelt Öffnen/Schließen an die Freigabe.
pub fn show_info_dialog(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    egui::Window::new("Profil-Editor")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label("Kontrollpunkte mit der linken Maustaste ziehen.");
                ui.label("Rechtsklick fügt einen Punkt nahe der Klickposition ein.");
                ui.label("Strg + Rechtsklick löscht den nächstgelegenen Punkt.");
                ui.add_space(10.0);

                if ui.button("Verstanden").clicked() {
                    events.push(AppIntent::InfoDialogDismissed);
                }
            });
        });

    events
}
