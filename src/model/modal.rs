//! Modal stack for overlays drawn above the table

use super::filter::FilterField;

/// An overlay displayed on top of the main screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Property sheet for the session's active element
    ElementDetail { scroll_offset: usize },
    /// Option list for one filter field
    FilterPicker {
        field: FilterField,
        selected_index: usize,
    },
    /// Keyboard shortcut reference
    Help { scroll_offset: usize },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every overlay matching `predicate`
    pub fn remove_where(&mut self, predicate: impl Fn(&Modal) -> bool) {
        self.stack.retain(|modal| !predicate(modal));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}
