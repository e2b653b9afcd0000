//! Plot-Input-Handling: Maus-Events und Modifier → AppIntent.

use glam::Vec2;

use crate::app::AppIntent;
use crate::core::PlotViewport;

/// Verwaltet den Input-Zustand für den Plotbereich.
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Zeigerposition (Screen), zur Move-Erkennung
    last_pointer_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Sammelt Plot-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg: Positionen werden
    /// über den [`PlotViewport`] in Weltkoordinaten übersetzt (auf den
    /// Achsenbereich geklemmt), bevor sie den Editor erreichen. Die
    /// Freigabe-Prüfung passiert nicht hier, sondern im Intent-Mapping.
    pub fn collect_plot_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: &PlotViewport,
        delete_modifier_latched: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let plot_rect = response.rect;
        let plot_size = Vec2::new(plot_rect.width(), plot_rect.height());

        let to_world = |pos: egui::Pos2| {
            let local = pos - plot_rect.min;
            viewport.screen_to_world(Vec2::new(local.x, local.y), plot_size)
        };

        // Modifier-Latch: global verfolgt, nur Änderungen werden gemeldet
        let modifier_down = ui.input(|i| i.modifiers.command);
        if modifier_down != delete_modifier_latched {
            events.push(AppIntent::DeleteModifierChanged {
                active: modifier_down,
            });
        }

        // Primärtaste: nur Drücken innerhalb des Plots kann einen Drag starten
        if ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                if plot_rect.contains(pos) {
                    events.push(AppIntent::PointerPressed {
                        world_pos: to_world(pos),
                    });
                }
            }
        }

        // Bewegung: auch außerhalb des Plots melden (geklemmt), damit ein
        // laufender Drag am Rand hängen bleibt statt abzureißen
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            if self.last_pointer_pos != Some(pos) {
                self.last_pointer_pos = Some(pos);
                events.push(AppIntent::PointerMoved {
                    world_pos: to_world(pos),
                });
            }
        }

        // Loslassen: bedingungslos, unabhängig von der Zeigerposition
        if ui.input(|i| i.pointer.primary_released()) {
            events.push(AppIntent::PointerReleased);
        }

        // Sekundärklick im Plot: Einfügen bzw. Löschen
        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::SecondaryClicked {
                    world_pos: to_world(pos),
                });
            }
        }

        events
    }
}
