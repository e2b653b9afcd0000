//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, render_scene};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CurveScene;

/// Orchestriert UI-Events und Command-Ausführung auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Zeiger-Interaktion ===
            AppCommand::BeginDrag { world_pos } => handlers::editing::begin_drag(state, world_pos),
            AppCommand::DragTo { world_pos } => handlers::editing::drag_to(state, world_pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::UpdateHover { world_pos } => {
                handlers::editing::update_hover(state, world_pos)
            }
            AppCommand::InsertControlPointAt { world_pos } => {
                handlers::editing::insert_control_point(state, world_pos)
            }
            AppCommand::DeleteNearestControlPoint { world_pos } => {
                handlers::editing::delete_nearest_control_point(state, world_pos)
            }
            AppCommand::SetDeleteModifier { active } => {
                handlers::editing::set_delete_modifier(state, active)
            }

            // === Kurven-Konfiguration ===
            AppCommand::SetSampleCount { count } => {
                handlers::curve_config::set_sample_count(state, count)
            }
            AppCommand::RebuildWithDegree { degree } => {
                handlers::curve_config::rebuild_with_degree(state, degree)
            }
            AppCommand::ExportCurveSamples => handlers::curve_config::export_curve_samples(state)?,

            // === Dialoge & Freigabe ===
            AppCommand::SetEditingEnabled { enabled } => {
                handlers::dialog::set_editing_enabled(state, enabled)
            }
            AppCommand::OpenInfoDialog => handlers::dialog::open_info_dialog(state),
            AppCommand::CloseInfoDialog => handlers::dialog::close_info_dialog(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_curve_scene(&self, state: &AppState) -> CurveScene {
        render_scene::build(state)
    }
}
