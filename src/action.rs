//! Action enum - All possible application actions
//!
//! Components turn terminal events into Actions; the App applies them one
//! at a time and may answer with a follow-up Action.

use crate::model::element::ElementId;
use crate::model::filter::FilterField;
use crate::model::layout::GridDirection;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Grid Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the cursor to the next occupied cell
    MoveCursor(GridDirection),
    /// Put the cursor on a specific element
    FocusElement(ElementId),

    // ─────────────────────────────────────────────────────────────────────────
    // Element Detail
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail overlay for the element under the cursor
    OpenDetail,
    /// Open the detail overlay for a specific element
    OpenDetailFor(ElementId),
    /// Close the detail overlay
    CloseDetail,

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────
    /// Add the detailed element (or the focused one) to the comparison
    AddToComparison,
    /// Remove a comparison slot by index
    RemoveFromComparison(usize),
    /// Show or hide the comparison panel
    ToggleComparison,
    /// Hide the comparison panel
    CloseComparison,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Previous option in the current modal
    ModalUp,
    /// Next option in the current modal
    ModalDown,
    /// Scroll the current modal up one line
    ScrollUp,
    /// Scroll the current modal down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode, keeping the query
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,
    /// Clear the search query
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the option picker for one filter field
    OpenFilterPicker(FilterField),
    /// Set a filter field from its string value
    SetFilter(FilterField, String),
    /// Restore the identity filter
    ResetFilters,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::MoveCursor(direction) => write!(f, "MoveCursor({:?})", direction),
            Action::FocusElement(id) => write!(f, "FocusElement({})", id),
            Action::OpenDetail => write!(f, "OpenDetail"),
            Action::OpenDetailFor(id) => write!(f, "OpenDetailFor({})", id),
            Action::CloseDetail => write!(f, "CloseDetail"),
            Action::AddToComparison => write!(f, "AddToComparison"),
            Action::RemoveFromComparison(index) => write!(f, "RemoveFromComparison({})", index),
            Action::ToggleComparison => write!(f, "ToggleComparison"),
            Action::CloseComparison => write!(f, "CloseComparison"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::OpenFilterPicker(field) => write!(f, "OpenFilterPicker({})", field.label()),
            Action::SetFilter(field, value) => write!(f, "SetFilter({}, {})", field.label(), value),
            Action::ResetFilters => write!(f, "ResetFilters"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
        assert_eq!(
            Action::MoveCursor(GridDirection::Left).to_string(),
            "MoveCursor(Left)"
        );
        assert_eq!(
            Action::SetFilter(FilterField::Period, "4".to_string()).to_string(),
            "SetFilter(Period, 4)"
        );
        assert_eq!(Action::SearchInput('x').to_string(), "SearchInput('x')");
    }
}
