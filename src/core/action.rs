//! Actions that key handlers and commands return to the app

use crate::config::PanelVariant;
use crate::modules::review_dialog::DialogEvent;

/// State changes requested by input handling
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Drive the review dialog
    Review(DialogEvent),

    /// Show a specific lower-left panel
    ShowPanel(PanelVariant),

    /// Flip between the map and trends panels
    TogglePanel,

    /// Write a snapshot of the fixtures to the export directory
    Export,

    /// Open or close the help popup
    ToggleHelp,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
