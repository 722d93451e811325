//! Component trait - Interface for UI components
//!
//! Each component owns its presentation state, turns events into Actions
//! and renders itself. Shared data (catalog, session) is handed in by the
//! App rather than mutated directly by components.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update local state
/// 3. `draw` - Render the component
pub trait Component {
    /// Called once before the first draw
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into an Action without touching state
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into an Action without touching state
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action, optionally returning a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`; no state changes beyond layout caches
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
