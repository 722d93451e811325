//! Category colour key

use crate::model::element::Category;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Swatches per legend row
const PER_ROW: usize = 5;

/// Background colour of a category's cells
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Alkali => Color::Rgb(244, 91, 105),
        Category::Alkaline => Color::Rgb(255, 159, 67),
        Category::Transition => Color::Rgb(254, 202, 87),
        Category::PostTransition => Color::Rgb(72, 219, 251),
        Category::Lanthanide => Color::Rgb(255, 107, 129),
        Category::Actinide => Color::Rgb(199, 125, 255),
        Category::Metalloid => Color::Rgb(29, 209, 161),
        Category::Nonmetal => Color::Rgb(84, 160, 255),
        Category::Halogen => Color::Rgb(16, 172, 132),
        Category::NobleGas => Color::Rgb(155, 89, 182),
    }
}

pub fn render_legend(frame: &mut Frame, area: Rect) {
    let categories = Category::all();
    let column_width = (area.width.saturating_sub(2) as usize / PER_ROW).max(1);

    let lines: Vec<Line> = categories
        .chunks(PER_ROW)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|category| {
                    let name = category.name();
                    let padding = column_width.saturating_sub(name.chars().count() + 3);
                    [
                        Span::styled("■ ", Style::default().fg(category_color(*category))),
                        Span::styled(name, Style::default().fg(Color::White)),
                        Span::raw(" ".repeat(padding + 1)),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Element Categories ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(paragraph, area);
}
