//! Seitenpanel mit Kurven-Einstellungen und Export.

use crate::app::{AppIntent, AppState};
use crate::shared::{DEGREE_MAX, MIN_EDITABLE_POINTS};

/// Rendert das Einstellungs-Panel und gibt die resultierenden Intents zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("settings_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.add_space(4.0);

            let mut degree = state.spline.degree();
            if ui
                .add(egui::Slider::new(&mut degree, 1..=DEGREE_MAX).text("Grad"))
                .changed()
            {
                events.push(AppIntent::DegreeChanged { degree });
            }

            let mut sample_count = state.sample_count;
            if ui
                .add(egui::Slider::new(&mut sample_count, 10..=400).text("Abtastpunkte"))
                .changed()
            {
                events.push(AppIntent::SampleCountChanged {
                    count: sample_count,
                });
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(format!("Kontrollpunkte: {}", state.editable_count()));
            ui.add_space(8.0);

            if ui.button("Abtastung exportieren").clicked() {
                events.push(AppIntent::CurveExportRequested);
            }
            if ui.button("Info").clicked() {
                events.push(AppIntent::InfoDialogRequested);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.label("Linke Taste: Punkt ziehen");
            ui.label("Rechtsklick: Punkt einfügen");
            ui.label("Strg + Rechtsklick: Punkt löschen");
            ui.label(format!("(Minimum: {} Punkte)", MIN_EDITABLE_POINTS));
        });

    events
}
