//! Comparison panel component
//!
//! Shows the two comparison slots and, once both are filled, a table of
//! property differences going from the first element to the second.

use crate::action::Action;
use crate::component::Component;
use crate::components::legend::category_color;
use crate::model::compare::{compare_all, ComparisonRow, Direction as DiffDirection};
use crate::model::element::Element;
use crate::model::session::COMPARISON_CAPACITY;
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

#[derive(Default)]
pub struct ComparisonPanel {
    /// Slot contents, oldest first
    elements: Vec<Element>,
}

impl ComparisonPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Property rows, available once both slots are filled
    pub fn rows(&self) -> Option<Vec<ComparisonRow>> {
        match self.elements.as_slice() {
            [first, second] => Some(compare_all(first, second)),
            _ => None,
        }
    }

    fn slot_lines(&self) -> Vec<Line<'static>> {
        (0..COMPARISON_CAPACITY)
            .flat_map(|index| {
                let key = Span::styled(
                    format!(" {} ", index + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                );
                match self.elements.get(index) {
                    Some(element) => vec![
                        Line::from(vec![
                            key,
                            Span::styled(
                                format!(" {} ", element.symbol),
                                Style::default()
                                    .fg(Color::Black)
                                    .bg(category_color(element.category))
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!(" {}", element.name),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!(
                                "     {} · #{} · {} u · {}",
                                element.category.name(),
                                element.id,
                                element.formatted_mass(3),
                                element.state.name()
                            ),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ],
                    None => vec![
                        Line::from(vec![
                            key,
                            Span::styled(
                                " Select an element to compare",
                                Style::default()
                                    .fg(Color::DarkGray)
                                    .add_modifier(Modifier::ITALIC),
                            ),
                        ]),
                        Line::from(""),
                    ],
                }
            })
            .collect()
    }
}

fn diff_color(direction: Option<DiffDirection>) -> Color {
    match direction {
        Some(DiffDirection::Increase) => Color::Green,
        Some(DiffDirection::Decrease) => Color::Red,
        Some(DiffDirection::Equal) => Color::Blue,
        None => Color::DarkGray,
    }
}

fn format_cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

impl Component for ComparisonPanel {
    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(
                " Element Comparison ({}/{}) ",
                self.elements.len(),
                COMPARISON_CAPACITY
            ))
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(COMPARISON_CAPACITY as u16 * 2 + 1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.slot_lines()), chunks[0]);

        match (self.rows(), self.elements.as_slice()) {
            (Some(rows), [first, second]) => {
                let header = Row::new(vec![
                    Cell::from("Property"),
                    Cell::from(first.symbol.clone()),
                    Cell::from(second.symbol.clone()),
                    Cell::from("Change"),
                ])
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );

                let table_rows: Vec<Row> = rows
                    .iter()
                    .map(|row| {
                        let label = if row.property.unit().is_empty() {
                            row.property.label().to_string()
                        } else {
                            format!("{} {}", row.property.label(), row.property.unit())
                        };
                        Row::new(vec![
                            Cell::from(label).style(Style::default().fg(Color::Gray)),
                            Cell::from(format_cell(row.first)),
                            Cell::from(format_cell(row.second)),
                            Cell::from(row.diff_text()).style(
                                Style::default()
                                    .fg(diff_color(row.diff.map(|d| d.direction)))
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ])
                    })
                    .collect();

                let table = Table::new(
                    table_rows,
                    [
                        Constraint::Length(17),
                        Constraint::Length(8),
                        Constraint::Length(8),
                        Constraint::Min(7),
                    ],
                )
                .header(header)
                .column_spacing(1);
                frame.render_widget(table, chunks[1]);
            }
            _ => {
                let hint = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Pick two elements to see how their",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::styled(
                        "properties differ.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .wrap(Wrap { trim: true });
                frame.render_widget(hint, chunks[1]);
            }
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" a ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("Add "),
            Span::styled(" 1/2 ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("Remove "),
            Span::styled(" C/Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Close"),
        ]));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
