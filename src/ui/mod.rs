//! UI-Komponenten: Plot, Seitenpanel, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
pub mod panel;
pub mod plot_view;
pub mod status;

pub use dialogs::show_info_dialog;
pub use input::InputState;
pub use panel::render_side_panel;
pub use plot_view::render_plot;
pub use status::render_status_bar;
