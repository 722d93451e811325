//! Filter picker dialog component
//!
//! Lists the options of one filter clause and hands the chosen value back.

use crate::action::Action;
use crate::component::Component;
use crate::model::filter::FilterField;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct FilterPickerDialog {
    pub field: FilterField,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Value currently applied for `field`
    pub current_value: String,
}

impl Default for FilterPickerDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPickerDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            field: FilterField::Category,
            selected_index: 0,
            list_state,
            current_value: "all".to_string(),
        }
    }

    /// Point the picker at `field`, preselecting the active value
    pub fn set_field(&mut self, field: FilterField, current_value: &str) {
        self.field = field;
        self.current_value = current_value.to_string();
        self.selected_index = field
            .options()
            .iter()
            .position(|o| o.value == current_value)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    pub fn selected_value(&self) -> Option<&'static str> {
        self.field
            .options()
            .get(self.selected_index)
            .map(|o| o.value)
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.field.options().len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for FilterPickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter => self
                .selected_value()
                .map(|value| Action::SetFilter(self.field, value.to_string())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let options = self.field.options();
        let popup_height = (options.len() as u16 + 8).min(area.height.saturating_sub(2));
        let popup_area = crate::components::centered_popup(area, 40, popup_height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!("Current: {}", self.field.label_for(&self.current_value)),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Filter by {} ", self.field.label()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = options
            .iter()
            .map(|option| {
                let is_current = option.value == self.current_value;
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        option.label,
                        if is_current {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Apply  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_set_field_preselects_current_value() {
        let mut dialog = FilterPickerDialog::new();
        dialog.set_field(FilterField::State, "liquid");
        assert_eq!(dialog.selected_value(), Some("liquid"));

        dialog.set_field(FilterField::Period, "bogus");
        assert_eq!(dialog.selected_value(), Some("all"));
    }

    #[test]
    fn test_enter_sets_filter() {
        let mut dialog = FilterPickerDialog::new();
        dialog.set_field(FilterField::Category, "all");
        dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();

        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SetFilter(FilterField::Category, "metal".to_string()))
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut dialog = FilterPickerDialog::new();
        dialog.set_field(FilterField::State, "all");
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.selected_index, 0);

        for _ in 0..10 {
            dialog.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(dialog.selected_value(), Some("gas"));
    }
}
