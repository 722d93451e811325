//! Element detail dialog
//!
//! Full property sheet for one element, drawn as an overlay above the table.

use crate::action::Action;
use crate::component::Component;
use crate::components::legend::category_color;
use crate::model::element::{Element, State};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

const DIALOG_WIDTH: u16 = 72;
const LABEL_WIDTH: usize = 24;

#[derive(Default)]
pub struct ElementDetailDialog {
    pub scroll_offset: usize,
    content: Vec<Line<'static>>,
    title: String,
    accent: Option<Color>,
}

impl ElementDetailDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the sheet for `element`; `compared` marks it as already in a slot
    pub fn set_element(&mut self, element: &Element, compared: bool) {
        self.title = format!(" {} ", element.name);
        self.accent = Some(category_color(element.category));
        self.content = build_detail_content(element, compared);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:width$}", label, width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len())),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn or_unknown(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| "Unknown".to_string())
}

fn state_icon(state: State) -> &'static str {
    match state {
        State::Solid => "■",
        State::Liquid => "≈",
        State::Gas => "○",
    }
}

/// Lines of the property sheet
pub fn build_detail_content(element: &Element, compared: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("  {}  ", element.symbol),
            Style::default()
                .fg(Color::Black)
                .bg(category_color(element.category))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            element.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", element.category.name()),
            Style::default().fg(category_color(element.category)),
        ),
    ])];

    lines.extend(section("Basic Information"));
    lines.push(field("Atomic Number", element.id.to_string()));
    lines.push(field("Atomic Mass", format!("{} u", element.formatted_mass(4))));
    lines.push(field("Period", element.period.to_string()));
    lines.push(field("Group", element.formatted_group()));
    lines.push(field(
        "Phase at STP",
        format!("{} {}", state_icon(element.state), element.state.name()),
    ));
    lines.push(field(
        "Density",
        element
            .formatted_density()
            .unwrap_or_else(|| "Unknown".to_string()),
    ));

    lines.extend(section("Atomic Properties"));
    lines.push(field(
        "Electron Configuration",
        if element.electron_config.is_empty() {
            "Unknown".to_string()
        } else {
            element.electron_config_display()
        },
    ));
    lines.push(field(
        "Electronegativity",
        element
            .electronegativity
            .map(|v| format!("{:.2} (Pauling scale)", v))
            .unwrap_or_else(|| "Not applicable".to_string()),
    ));
    lines.push(field(
        "Ionization Energy",
        or_unknown(element.ionization_energy, |v| format!("{} kJ/mol", v)),
    ));

    lines.extend(section("Thermal Properties"));
    lines.push(field(
        "Melting Point",
        or_unknown(element.melting_point, |v| format!("{}°C", v)),
    ));
    lines.push(field(
        "Boiling Point",
        or_unknown(element.boiling_point, |v| format!("{}°C", v)),
    ));

    if !element.description.is_empty() {
        lines.extend(section("Description"));
        lines.push(Line::from(Span::styled(
            format!("  {}", element.description),
            Style::default().fg(Color::Gray),
        )));
    }

    if compared {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  ◆ In comparison",
            Style::default().fg(Color::Magenta),
        )));
    }

    lines
}

impl Component for ElementDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseDetail),
            KeyCode::Char('a') => Some(Action::AddToComparison),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_down(),
            Action::ScrollUp => self.scroll_up(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (self.content.len() as u16 + 5).min(area.height.saturating_sub(2));
        let popup_area = crate::components::centered_popup(area, DIALOG_WIDTH, height);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        let accent = self.accent.unwrap_or(Color::Cyan);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let max_scroll = self.content.len().saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(self.title.clone())
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        if self.content.len() > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                chunks[0].inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " a ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Add to Comparison  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Scroll  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_detail_content_for_iron() {
        let catalog = Catalog::load().unwrap();
        let content = text(&build_detail_content(catalog.get(26).unwrap(), false));

        assert!(content.contains("Iron"));
        assert!(content.contains("Transition Metal"));
        assert!(content.contains("55.8450 u"));
        assert!(content.contains("1.83 (Pauling scale)"));
        assert!(content.contains("3d⁶"));
        assert!(!content.contains("In comparison"));
    }

    #[test]
    fn test_detail_content_missing_values() {
        let catalog = Catalog::load().unwrap();
        let helium = text(&build_detail_content(catalog.get(2).unwrap(), true));
        assert!(helium.contains("Not applicable"));
        assert!(helium.contains("In comparison"));

        let lanthanum = text(&build_detail_content(catalog.get(57).unwrap(), false));
        assert!(lanthanum.contains("n/a"));
    }

    #[test]
    fn test_detail_keys() {
        let mut dialog = ElementDetailDialog::new();
        let key = |code| KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseDetail)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::AddToComparison)
        );

        dialog.update(Action::ScrollDown).unwrap();
        dialog.update(Action::ScrollDown).unwrap();
        dialog.update(Action::ScrollUp).unwrap();
        assert_eq!(dialog.scroll_offset, 1);
    }
}
