//! Airfoil Spline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorInteractionState, UiState};
pub use core::{sample_curve, BSpline, CurveSamples, PlotViewport, SplineError};
pub use shared::{CurveScene, EditorOptions};
