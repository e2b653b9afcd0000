//! Integrationstests für den Zeiger-Editor:
//! - Drag mit Spiegel-Invariante
//! - Einfügen über die Winkelhalbierende
//! - Lösch-Guard, Freigabe-Gate und Export

use airfoil_spline_editor::{AppController, AppIntent, AppState, BSpline, CurveSamples};
use glam::Vec2;

/// Geschlossene Kurve vom Grad 2 mit 3 editierbaren Punkten (Dreieck).
fn closed_degree2() -> BSpline {
    BSpline::new(
        2,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
        ],
        true,
    )
    .expect("Testkurve ist gültig")
}

/// AppState mit eingesetzter Testkurve und abgeräumtem Dirty-Flag.
fn state_with(spline: BSpline) -> AppState {
    let mut state = AppState::new();
    state.spline = spline;
    state.take_scene_dirty();
    state
}

/// Prüft die Schließungs-Invariante: erste `degree` == letzte `degree` Punkte.
fn assert_mirror_tail(spline: &BSpline) {
    let points = spline.control_points();
    let degree = spline.degree();
    for i in 0..degree {
        let tail = points.len() - degree + i;
        assert_eq!(
            points[i], points[tail],
            "Punkt {} muss Spiegelkopie von Punkt {} sein",
            tail, i
        );
    }
}

// ─── Drag ────────────────────────────────────────────────────────────────────

#[test]
fn test_drag_von_punkt_0_spiegelt_auf_den_tail() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(0.0, 0.0),
            },
        )
        .expect("PointerPressed darf nicht fehlschlagen");
    assert_eq!(state.editor.dragging, Some(0), "Punkt 0 muss gegriffen sein");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(0.2, 0.3),
            },
        )
        .expect("PointerMoved darf nicht fehlschlagen");

    // 5 - 2 + 0 = 3: der Spiegelpartner muss mitgezogen werden
    assert_eq!(state.spline.control_points()[0], Vec2::new(0.2, 0.3));
    assert_eq!(state.spline.control_points()[3], Vec2::new(0.2, 0.3));
    assert!(
        state.take_scene_dirty(),
        "Drag muss ein Update signalisieren"
    );

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased darf nicht fehlschlagen");
    assert_eq!(state.editor.dragging, None, "Loslassen muss zu Idle führen");
}

#[test]
fn test_pointer_down_neben_allen_punkten_startet_keinen_drag() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(0.5, 0.5),
            },
        )
        .expect("PointerPressed darf nicht fehlschlagen");

    assert_eq!(state.editor.dragging, None);
    assert!(!state.take_scene_dirty(), "kein Treffer → kein Update");
}

#[test]
fn test_pointer_released_raeumt_auch_ohne_drag_auf() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());
    state.editor.enabled = false;

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased darf nicht fehlschlagen");

    assert_eq!(state.editor.dragging, None);
}

// ─── Freigabe-Gate ───────────────────────────────────────────────────────────

#[test]
fn test_zeiger_events_werden_ohne_freigabe_ignoriert() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditingEnabledChanged { enabled: false },
        )
        .expect("EditingEnabledChanged darf nicht fehlschlagen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(0.0, 0.0),
            },
        )
        .expect("PointerPressed darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                world_pos: Vec2::new(0.5, 0.5),
            },
        )
        .expect("SecondaryClicked darf nicht fehlschlagen");

    assert_eq!(state.editor.dragging, None, "gesperrt → kein Drag");
    assert_eq!(state.editable_count(), 3, "gesperrt → keine Struktur-Edits");
}

#[test]
fn test_modifier_latch_wird_auch_gesperrt_verfolgt() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());
    state.editor.enabled = false;

    controller
        .handle_intent(&mut state, AppIntent::DeleteModifierChanged { active: true })
        .expect("DeleteModifierChanged darf nicht fehlschlagen");

    assert!(state.editor.delete_modifier_active);
}

#[test]
fn test_info_dialog_sperrt_und_gibt_wieder_frei() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(&mut state, AppIntent::InfoDialogRequested)
        .expect("InfoDialogRequested darf nicht fehlschlagen");
    assert!(state.ui.show_info_dialog);
    assert!(!state.editor.enabled);

    controller
        .handle_intent(&mut state, AppIntent::InfoDialogDismissed)
        .expect("InfoDialogDismissed darf nicht fehlschlagen");
    assert!(!state.ui.show_info_dialog);
    assert!(state.editor.enabled);
}

// ─── Einfügen ────────────────────────────────────────────────────────────────

#[test]
fn test_einfuegen_gegen_die_winkelhalbierende_vor_dem_punkt() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    // Nächster Punkt ist B = (1, 0); der Klick liegt der Winkelhalbierenden
    // (0.25, 0.5) entgegen → Einfügen am Slot von B selbst.
    let click = Vec2::new(0.75, -0.5);
    controller
        .handle_intent(&mut state, AppIntent::SecondaryClicked { world_pos: click })
        .expect("SecondaryClicked darf nicht fehlschlagen");

    let editable = state.spline.editable_points();
    assert_eq!(editable.len(), 4);
    assert_eq!(editable[1], click, "neuer Punkt muss vor B liegen");
    assert_eq!(editable[2], Vec2::new(1.0, 0.0));
    assert_mirror_tail(&state.spline);
    assert!(state.take_scene_dirty());
}

#[test]
fn test_einfuegen_mit_der_winkelhalbierenden_nach_dem_punkt() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    // Klick in Richtung der Winkelhalbierenden an B → Einfügen hinter B.
    let click = Vec2::new(1.25, 0.5);
    controller
        .handle_intent(&mut state, AppIntent::SecondaryClicked { world_pos: click })
        .expect("SecondaryClicked darf nicht fehlschlagen");

    let editable = state.spline.editable_points();
    assert_eq!(editable.len(), 4);
    assert_eq!(editable[1], Vec2::new(1.0, 0.0));
    assert_eq!(editable[2], click, "neuer Punkt muss hinter B liegen");
    assert_mirror_tail(&state.spline);
}

// ─── Löschen ─────────────────────────────────────────────────────────────────

#[test]
fn test_loeschen_am_minimum_wird_verweigert() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());
    let points_before = state.spline.control_points().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::DeleteModifierChanged { active: true })
        .expect("DeleteModifierChanged darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                world_pos: Vec2::new(0.5, 1.0),
            },
        )
        .expect("SecondaryClicked darf nicht fehlschlagen");

    assert_eq!(state.editable_count(), 3, "Minimum von 3 Punkten hält");
    assert_eq!(state.spline.control_points(), &points_before[..]);
    assert!(!state.take_scene_dirty(), "Verweigerung → kein Update");
}

#[test]
fn test_loeschen_entfernt_den_naechsten_punkt() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    // Erst auf 4 editierbare Punkte anwachsen, dann nahe der Spitze löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                world_pos: Vec2::new(1.25, 0.5),
            },
        )
        .expect("Einfügen darf nicht fehlschlagen");
    assert_eq!(state.editable_count(), 4);

    controller
        .handle_intent(&mut state, AppIntent::DeleteModifierChanged { active: true })
        .expect("DeleteModifierChanged darf nicht fehlschlagen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                world_pos: Vec2::new(0.52, 1.05),
            },
        )
        .expect("Löschen darf nicht fehlschlagen");

    assert_eq!(state.editable_count(), 3);
    assert!(
        !state
            .spline
            .editable_points()
            .contains(&Vec2::new(0.5, 1.0)),
        "die Dreiecksspitze muss entfernt sein"
    );
    assert_mirror_tail(&state.spline);
}

// ─── Konfiguration & Export ──────────────────────────────────────────────────

#[test]
fn test_gradwechsel_erhaelt_die_editierbaren_punkte() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());
    let editable_before = state.spline.editable_points().to_vec();

    controller
        .handle_intent(&mut state, AppIntent::DegreeChanged { degree: 3 })
        .expect("DegreeChanged darf nicht fehlschlagen");

    assert_eq!(state.spline.degree(), 3);
    assert_eq!(state.spline.editable_points(), &editable_before[..]);
    assert_eq!(
        state.spline.control_points().len(),
        editable_before.len() + 3
    );
    assert_mirror_tail(&state.spline);
    assert!(state.take_scene_dirty());
}

#[test]
fn test_abtastraten_wechsel_signalisiert_update() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(&mut state, AppIntent::SampleCountChanged { count: 250 })
        .expect("SampleCountChanged darf nicht fehlschlagen");

    assert_eq!(state.sample_count, 250);
    assert!(state.take_scene_dirty());
}

#[test]
fn test_export_liefert_geschlossenes_abtast_paket() {
    let mut controller = AppController::new();
    let mut state = state_with(closed_degree2());

    controller
        .handle_intent(&mut state, AppIntent::CurveExportRequested)
        .expect("CurveExportRequested darf nicht fehlschlagen");

    let payload = state
        .ui
        .pending_export
        .take()
        .expect("Export muss ein Paket bereitstellen");
    let samples: CurveSamples = serde_json::from_str(&payload).expect("Payload muss JSON sein");

    assert_eq!(samples.x.len(), samples.y.len());
    assert!(samples.len() >= 2);
    assert_eq!(samples.x.first(), samples.x.last());
    assert_eq!(samples.y.first(), samples.y.last());
    assert!(state.ui.status_message.is_some());
}

// ─── Szene ───────────────────────────────────────────────────────────────────

#[test]
fn test_szene_enthaelt_kurve_und_editierbare_punkte() {
    let controller = AppController::new();
    let state = state_with(closed_degree2());

    let scene = controller.build_curve_scene(&state);

    assert_eq!(scene.control_points.len(), 3);
    assert_eq!(scene.curve.first(), scene.curve.last());
}
