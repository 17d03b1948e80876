mod content;
mod panel;

pub use content::{ContactLine, ContentTable, Entry, Language, ResumeContent, Section};
pub use panel::{panel_plugin, toggle_panel_on_reveal, ActiveLanguage, PanelVisibility};
