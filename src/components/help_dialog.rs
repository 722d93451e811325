//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::OpenHelp {
            self.scroll_offset = 0;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(area, 64, area.height.saturating_sub(4));
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Table Navigation");
    add_shortcut(&mut lines, "h j k l", "Move the cursor");
    add_shortcut(&mut lines, "← ↓ ↑ →", "Move the cursor");
    add_shortcut(&mut lines, "Enter", "Open element details");
    add_shortcut(&mut lines, "Click", "Open details for the clicked element");

    add_section(&mut lines, "Element Details");
    add_shortcut(&mut lines, "a", "Add the element to the comparison");
    add_shortcut(&mut lines, "j / k", "Scroll the property sheet");
    add_shortcut(&mut lines, "Esc", "Close details");

    add_section(&mut lines, "Comparison");
    add_shortcut(&mut lines, "a", "Add the highlighted element");
    add_shortcut(&mut lines, "1 / 2", "Remove the element in that slot");
    add_shortcut(&mut lines, "C", "Show or hide the comparison panel");
    add_shortcut(&mut lines, "Esc", "Close the comparison panel");

    add_section(&mut lines, "Search & Filters");
    add_shortcut(&mut lines, "/", "Search by name, symbol or number");
    add_shortcut(&mut lines, "Enter", "Keep the search and leave input");
    add_shortcut(&mut lines, "Esc", "Clear the search");
    add_shortcut(&mut lines, "f", "Filter by category");
    add_shortcut(&mut lines, "s", "Filter by state");
    add_shortcut(&mut lines, "p", "Filter by period");
    add_shortcut(&mut lines, "g", "Filter by group");
    add_shortcut(&mut lines, "r", "Reset all filters");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_lists_every_filter_key() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for description in [
            "Filter by category",
            "Filter by state",
            "Filter by period",
            "Filter by group",
            "Reset all filters",
        ] {
            assert!(text.contains(description), "missing {}", description);
        }
    }

    #[test]
    fn test_help_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap(), None);
        assert_eq!(dialog.scroll_offset, 1);
        dialog.update(Action::OpenHelp).unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('?'))).unwrap(),
            Some(Action::CloseModal)
        );
    }
}
