//! UI components grouped by feature domain.
pub mod assets;

mod title_bar;
mod side_panel;
mod status_bar;
mod preview_panel;
mod export_panel;

pub use title_bar::TitleBar;
pub use side_panel::SidePanel;
pub use status_bar::StatusBar;
pub use preview_panel::PreviewPanel;
pub use export_panel::ExportPanel;
