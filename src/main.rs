//! Airfoil Spline Editor.
//!
//! Interaktiver Editor für geschlossene B-Spline-Profile: Kontrollpunkte
//! ziehen, einfügen und löschen; die Kurve wird fortlaufend neu abgetastet
//! und als geschlossene Polyline dargestellt.

use airfoil_spline_editor::{
    ui, AppController, AppIntent, AppState, CurveScene, EditorOptions, PlotViewport,
};

fn main() -> Result<(), eframe::Error> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Airfoil Spline Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Airfoil Spline Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Airfoil Spline Editor",
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
    )
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    viewport: PlotViewport,
    scene: CurveScene,
}

impl EditorApp {
    fn new() -> Self {
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht angelegt werden: {}", e);
            }
        }

        let mut state = AppState::with_options(editor_options);
        let mut controller = AppController::new();

        // Info-Dialog beim Start: sperrt den Editor bis zur Bestätigung
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::InfoDialogRequested) {
            log::error!("Startup-Intent fehlgeschlagen: {e:#}");
        }

        let scene = controller.build_curve_scene(&state);
        state.take_scene_dirty();

        Self {
            state,
            controller,
            input: ui::InputState::new(),
            viewport: PlotViewport::new(),
            scene,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<AppIntent> = Vec::new();

        events.extend(ui::render_side_panel(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_info_dialog(ctx, self.state.ui.show_info_dialog));

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui::render_plot(ui, &self.scene, &self.state, &self.viewport);
            events.extend(self.input.collect_plot_events(
                ui,
                &response,
                &self.viewport,
                self.state.editor.delete_modifier_active,
            ));
        });

        for intent in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {e:#}");
            }
        }

        // Update-Benachrichtigung: Szene neu abholen, sobald sich der
        // Kurvenzustand geändert hat
        if self.state.take_scene_dirty() {
            self.scene = self.controller.build_curve_scene(&self.state);
        }

        if let Some(payload) = self.state.ui.pending_export.take() {
            ctx.copy_text(payload);
        }

        if self.state.editor.enabled && self.state.editor.hover_active {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }
}
