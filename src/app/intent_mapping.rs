//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zeiger-Intents laufen hier durch das `enabled`-Gate: solange ein Dialog
/// oder Menü den Fokus besitzt, werden sie verworfen. `PointerReleased`
/// räumt den Drag bedingungslos auf, und der Modifier-Latch folgt dem
/// globalen Tastenzustand; beide passieren das Gate ungefiltert.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => {
            if !state.editor.enabled {
                return Vec::new();
            }
            vec![AppCommand::BeginDrag { world_pos }]
        }
        AppIntent::PointerMoved { world_pos } => {
            if !state.editor.enabled {
                return Vec::new();
            }
            let mut commands = vec![AppCommand::UpdateHover { world_pos }];
            if state.editor.dragging.is_some() {
                commands.push(AppCommand::DragTo { world_pos });
            }
            commands
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::SecondaryClicked { world_pos } => {
            if !state.editor.enabled {
                return Vec::new();
            }
            if state.editor.delete_modifier_active {
                vec![AppCommand::DeleteNearestControlPoint { world_pos }]
            } else {
                vec![AppCommand::InsertControlPointAt { world_pos }]
            }
        }
        AppIntent::DeleteModifierChanged { active } => {
            vec![AppCommand::SetDeleteModifier { active }]
        }
        AppIntent::EditingEnabledChanged { enabled } => {
            vec![AppCommand::SetEditingEnabled { enabled }]
        }
        AppIntent::InfoDialogRequested => vec![
            AppCommand::OpenInfoDialog,
            AppCommand::SetEditingEnabled { enabled: false },
        ],
        AppIntent::InfoDialogDismissed => vec![
            AppCommand::CloseInfoDialog,
            AppCommand::SetEditingEnabled { enabled: true },
        ],
        AppIntent::SampleCountChanged { count } => vec![AppCommand::SetSampleCount { count }],
        AppIntent::DegreeChanged { degree } => vec![AppCommand::RebuildWithDegree { degree }],
        AppIntent::CurveExportRequested => vec![AppCommand::ExportCurveSamples],
    }
}
