//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod curve_scene;
pub mod options;
pub mod pick_geometry;

pub use curve_scene::CurveScene;
pub use options::EditorOptions;
pub use options::{
    DEFAULT_DEGREE, DEFAULT_SAMPLE_COUNT, DEGREE_MAX, MIN_EDITABLE_POINTS, SELECT_THRESHOLD_WORLD,
};
