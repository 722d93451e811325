//! Selection and comparison session
//!
//! `SessionState` is an immutable value: every transition borrows the
//! current state and returns the next one. The front-end owns exactly one
//! and swaps it on each action.

use super::element::ElementId;
use super::filter::{FilterCriteria, FilterField};

/// Maximum number of elements held for side-by-side comparison
pub const COMPARISON_CAPACITY: usize = 2;

/// Coarse view of what the session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoSelection,
    ViewingDetail,
    Comparing(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    filters: FilterCriteria,
    active_element: Option<ElementId>,
    comparison_slots: Vec<ElementId>,
    comparison_open: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn active_element(&self) -> Option<ElementId> {
        self.active_element
    }

    /// Comparison slots, oldest first
    pub fn comparison_slots(&self) -> &[ElementId] {
        &self.comparison_slots
    }

    pub fn is_comparison_open(&self) -> bool {
        self.comparison_open
    }

    /// Both slots, once two elements have been picked
    pub fn comparison_pair(&self) -> Option<(ElementId, ElementId)> {
        match self.comparison_slots.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.active_element.is_some() {
            SessionPhase::ViewingDetail
        } else if self.comparison_open {
            SessionPhase::Comparing(self.comparison_slots.len())
        } else {
            SessionPhase::NoSelection
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Transitions
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn select_element(&self, id: ElementId) -> Self {
        log::debug!("Select element {}", id);
        Self {
            active_element: Some(id),
            ..self.clone()
        }
    }

    pub fn close_detail(&self) -> Self {
        Self {
            active_element: None,
            ..self.clone()
        }
    }

    /// Append to the comparison, evicting the oldest slot when full
    pub fn add_to_comparison(&self, id: ElementId) -> Self {
        let mut slots = self.comparison_slots.clone();
        if slots.len() >= COMPARISON_CAPACITY {
            let evicted = slots.remove(0);
            log::debug!("Comparison full, evicting element {}", evicted);
        }
        slots.push(id);
        log::debug!("Comparison slots now {:?}", slots);

        Self {
            comparison_slots: slots,
            comparison_open: true,
            ..self.clone()
        }
    }

    /// Remove one slot; an out-of-range index leaves the state unchanged
    pub fn remove_from_comparison(&self, index: usize) -> Self {
        if index >= self.comparison_slots.len() {
            log::debug!(
                "Ignoring removal of comparison slot {} ({} occupied)",
                index,
                self.comparison_slots.len()
            );
            return self.clone();
        }

        let mut slots = self.comparison_slots.clone();
        slots.remove(index);
        let comparison_open = self.comparison_open && !slots.is_empty();

        Self {
            comparison_slots: slots,
            comparison_open,
            ..self.clone()
        }
    }

    pub fn toggle_comparison(&self) -> Self {
        Self {
            comparison_open: !self.comparison_open,
            ..self.clone()
        }
    }

    pub fn close_comparison(&self) -> Self {
        Self {
            comparison_open: false,
            ..self.clone()
        }
    }

    pub fn reset_filters(&self) -> Self {
        self.with_filters(FilterCriteria::identity())
    }

    pub fn with_filters(&self, filters: FilterCriteria) -> Self {
        log::debug!("Filters set to {:?}", filters);
        Self {
            filters,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: &str) -> Self {
        self.with_filters(self.filters.clone().with_search(search))
    }

    pub fn with_filter(&self, field: FilterField, value: &str) -> Self {
        self.with_filters(self.filters.clone().with(field, value))
    }
}
