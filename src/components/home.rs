//! Home component - the periodic table screen
//!
//! Draws the header, filter bar, legend, element grid, comparison panel and
//! status/help bars. Owns the grid cursor, the search input mode and a
//! visibility cache keyed by the filter criteria it was computed for.

use crate::action::Action;
use crate::component::Component;
use crate::components::legend::{category_color, render_legend};
use crate::components::{calculate_main_layout, ComparisonPanel};
use crate::model::catalog::Catalog;
use crate::model::element::{Category, Element, ElementId, Series};
use crate::model::filter::{self, FilterCriteria, FilterField};
use crate::model::layout::{
    GridDirection, GridLayout, VisualCell, MAIN_COLUMNS, MAIN_ROWS, PLACEHOLDERS, VISUAL_ROWS,
};
use crate::model::session::{SessionState, COMPARISON_CAPACITY};
use crate::model::ui::InputMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIN_CELL_WIDTH: u16 = 3;
const MAX_CELL_WIDTH: u16 = 9;
const MAX_CELL_HEIGHT: u16 = 3;
/// Blank rows between period 7 and the lanthanide strip
const STRIP_GAP: u16 = 1;

// ═══════════════════════════════════════════════════════════════════════════════
// Grid Geometry
// ═══════════════════════════════════════════════════════════════════════════════

/// Maps visual grid cells to terminal rectangles and back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    origin_x: u16,
    origin_y: u16,
    cell_width: u16,
    cell_height: u16,
}

impl GridGeometry {
    /// Largest cells that fit the whole table into `area`, centred horizontally
    pub fn fit(area: Rect) -> Self {
        let cell_width = (area.width / MAIN_COLUMNS as u16).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
        let cell_height = (area.height.saturating_sub(STRIP_GAP) / VISUAL_ROWS as u16)
            .clamp(1, MAX_CELL_HEIGHT);
        let grid_width = cell_width * MAIN_COLUMNS as u16;

        Self {
            origin_x: area.x + area.width.saturating_sub(grid_width) / 2,
            origin_y: area.y,
            cell_width,
            cell_height,
        }
    }

    fn row_y(&self, row: u8) -> u16 {
        let gap = if row >= MAIN_ROWS { STRIP_GAP } else { 0 };
        self.origin_y + row as u16 * self.cell_height + gap
    }

    pub fn cell_rect(&self, cell: VisualCell) -> Rect {
        Rect::new(
            self.origin_x + (cell.column as u16 - 1) * self.cell_width,
            self.row_y(cell.row),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Cell under a terminal coordinate, occupied or not
    pub fn hit(&self, x: u16, y: u16) -> Option<VisualCell> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let column = (x - self.origin_x) / self.cell_width + 1;
        if column > MAIN_COLUMNS as u16 {
            return None;
        }
        (0..VISUAL_ROWS)
            .find(|&row| {
                let top = self.row_y(row);
                y >= top && y < top + self.cell_height
            })
            .map(|row| VisualCell {
                row,
                column: column as u8,
            })
    }
}

/// Truncate `text` to `width` terminal columns, ending in an ellipsis when cut
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeComponent {
    /// Element under the grid cursor
    pub cursor: ElementId,

    /// Whether keys go to the grid or the search box
    pub input_mode: InputMode,

    layout: GridLayout,

    /// Geometry of the last drawn grid, for mouse hit-testing
    geometry: Option<GridGeometry>,

    visible: HashSet<ElementId>,

    /// Criteria `visible` was computed for
    visibility_key: Option<FilterCriteria>,
}

impl HomeComponent {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            cursor: 1,
            input_mode: InputMode::Grid,
            layout,
            geometry: None,
            visible: HashSet::new(),
            visibility_key: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────────────────────

    pub fn move_cursor(&mut self, direction: GridDirection) {
        self.cursor = self.layout.step(self.cursor, direction);
    }

    pub fn focus(&mut self, id: ElementId) {
        if self.layout.position_of(id).is_some() {
            self.cursor = id;
        }
    }

    /// Element drawn at a terminal coordinate in the last frame
    pub fn element_at_point(&self, x: u16, y: u16) -> Option<ElementId> {
        let cell = self.geometry?.hit(x, y)?;
        self.layout.element_at_visual(cell)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search Mode
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn exit_search_mode(&mut self) {
        self.input_mode = InputMode::Grid;
    }

    pub fn is_searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visibility
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute visibility if the criteria changed since the last call
    pub fn refresh_visibility(&mut self, catalog: &Catalog, criteria: &FilterCriteria) {
        if self.visibility_key.as_ref() == Some(criteria) {
            return;
        }
        self.visible = filter::apply(catalog.elements(), criteria)
            .into_iter()
            .map(|e| e.id)
            .collect();
        self.visibility_key = Some(criteria.clone());
        log::debug!("Filter matched {} elements", self.visible.len());
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.visible.contains(&id)
    }

    pub fn match_count(&self) -> usize {
        self.visible.len()
    }
}

/// Key that opens the picker for a filter field
pub fn filter_key(field: FilterField) -> char {
    match field {
        FilterField::Category => 'f',
        FilterField::State => 's',
        FilterField::Period => 'p',
        FilterField::Group => 'g',
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(GridDirection::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(GridDirection::Right)),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(GridDirection::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(GridDirection::Down)),

            // Detail and comparison
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char('a') => Some(Action::AddToComparison),
            KeyCode::Char('1') => Some(Action::RemoveFromComparison(0)),
            KeyCode::Char('2') => Some(Action::RemoveFromComparison(1)),
            KeyCode::Char('C') => Some(Action::ToggleComparison),
            KeyCode::Esc => Some(Action::CloseComparison),

            // Filters
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenFilterPicker(FilterField::Category)),
            KeyCode::Char('s') => Some(Action::OpenFilterPicker(FilterField::State)),
            KeyCode::Char('p') => Some(Action::OpenFilterPicker(FilterField::Period)),
            KeyCode::Char('g') => Some(Action::OpenFilterPicker(FilterField::Group)),
            KeyCode::Char('r') => Some(Action::ResetFilters),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let target = self.element_at_point(mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => target.map(Action::OpenDetailFor),
            // Hovering moves the cursor so the status bar follows the pointer
            MouseEventKind::Moved => target
                .filter(|id| *id != self.cursor)
                .map(Action::FocusElement),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub catalog: &'a Catalog,
    pub session: &'a SessionState,
    pub show_legend: bool,
    pub dim_filtered: bool,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    comparison: &mut ComparisonPanel,
    ctx: &HomeRenderContext,
) -> Result<()> {
    home.refresh_visibility(ctx.catalog, ctx.session.filters());

    let layout = calculate_main_layout(area, ctx.show_legend, ctx.session.is_comparison_open());

    render_header(frame, layout.header, ctx);
    render_filter_bar(frame, layout.filters, home, ctx.session.filters());
    if let Some(legend_area) = layout.legend {
        render_legend(frame, legend_area);
    }
    render_grid(frame, layout.grid, home, ctx);

    if let Some(comparison_area) = layout.comparison {
        let slots: Vec<Element> = ctx
            .session
            .comparison_slots()
            .iter()
            .filter_map(|id| ctx.catalog.get(*id).cloned())
            .collect();
        comparison.set_elements(slots);
        comparison.draw(frame, comparison_area)?;
    }

    render_status_bar(frame, layout.status, home, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ⚛ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "Periodic Table of Elements",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, area);

    let slots = ctx.session.comparison_slots().len();
    let compare_style = if ctx.session.is_comparison_open() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Magenta)
    };
    let compare = Paragraph::new(Line::from(vec![
        Span::styled(" C ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" Compare Elements ({}/{}) ", slots, COMPARISON_CAPACITY),
            compare_style,
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(compare, area);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, criteria: &FilterCriteria) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let active_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let idle_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" / ", key_style),
        Span::raw("Search: "),
    ];
    if home.is_searching() {
        spans.push(Span::styled(
            format!("{}▏", criteria.search),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
    } else if criteria.search.is_empty() {
        spans.push(Span::styled("name or symbol", idle_style));
    } else {
        spans.push(Span::styled(criteria.search.clone(), active_style));
    }
    spans.push(Span::raw("  "));

    for field in FilterField::all() {
        let value = criteria.value(field);
        spans.push(Span::styled(format!(" {} ", filter_key(field)), key_style));
        spans.push(Span::raw(format!("{}: ", field.label())));
        spans.push(Span::styled(
            field.label_for(&value),
            if value == "all" { idle_style } else { active_style },
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(" r ", key_style));
    spans.push(Span::raw("Reset"));

    let border_color = if home.is_searching() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Filters "),
    );
    frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let total = ctx.catalog.len();
    let title = if ctx.session.filters().is_identity() {
        format!(" Elements ({}) ", total)
    } else {
        format!(" Elements ({} of {}) ", home.match_count(), total)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let geometry = GridGeometry::fit(inner);
    home.geometry = Some(geometry);

    let slots = ctx.session.comparison_slots();

    for element in ctx.catalog.elements() {
        let Some(position) = home.layout.position_of(element.id) else {
            continue;
        };
        let rect = geometry.cell_rect(position.visual()).intersection(inner);
        if rect.is_empty() {
            continue;
        }

        let visible = home.is_visible(element.id);
        if !visible && !ctx.dim_filtered {
            continue;
        }

        let mut style = if visible {
            Style::default()
                .fg(Color::Black)
                .bg(category_color(element.category))
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Rgb(38, 38, 38))
        };
        if element.id == home.cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        if slots.contains(&element.id) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let cell = Paragraph::new(cell_lines(element, rect.width, rect.height))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(cell, rect);
    }

    for placeholder in PLACEHOLDERS {
        let rect = geometry
            .cell_rect(placeholder.position.visual())
            .intersection(inner);
        if rect.is_empty() {
            continue;
        }
        let category = match placeholder.series {
            Series::Lanthanide => Category::Lanthanide,
            Series::Actinide => Category::Actinide,
        };
        let label = Paragraph::new(Line::from(fit_width(
            placeholder.label(),
            rect.width as usize,
        )))
        .style(Style::default().fg(category_color(category)))
        .alignment(Alignment::Center);
        frame.render_widget(label, rect);
    }
}

/// Text for one element cell, using as many lines as the cell is tall
fn cell_lines(element: &Element, width: u16, height: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let symbol = Line::from(Span::styled(
        fit_width(&element.symbol, width),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let number = Line::from(fit_width(&element.id.to_string(), width));

    match height {
        0 => Vec::new(),
        1 => vec![symbol],
        2 => vec![symbol, number],
        _ => vec![number, symbol, Line::from(fit_width(&element.name, width))],
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &HomeRenderContext) {
    let mut spans = vec![];

    if let Some(element) = ctx.catalog.get(home.cursor) {
        spans.push(Span::styled(
            format!(" {} ", element.symbol),
            Style::default()
                .fg(Color::Black)
                .bg(category_color(element.category))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {} ", element.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(
                "#{} · {} · {} u · Period {} · Group {}",
                element.id,
                element.category.name(),
                element.formatted_mass(3),
                element.period,
                element.formatted_group()
            ),
            Style::default().fg(Color::DarkGray),
        ));
        if !home.is_visible(element.id) {
            spans.push(Span::styled(" (filtered)", Style::default().fg(Color::DarkGray)));
        }
    }

    // Error message if present
    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let help_spans = if home.is_searching() {
        vec![
            key(" Enter ", Color::Green),
            Span::raw("Done  "),
            key(" Esc ", Color::Yellow),
            Span::raw("Clear  "),
            key(" Backspace ", Color::Cyan),
            Span::raw("Delete"),
        ]
    } else {
        vec![
            key(" q ", Color::Yellow),
            Span::raw("Quit "),
            key(" ←↓↑→ ", Color::Cyan),
            Span::raw("Move "),
            key(" Enter ", Color::Green),
            Span::raw("Details "),
            key(" a ", Color::Magenta),
            Span::raw("Compare "),
            key(" 1/2 ", Color::Magenta),
            Span::raw("Remove "),
            key(" / ", Color::Cyan),
            Span::raw("Search "),
            key(" f/s/p/g ", Color::Cyan),
            Span::raw("Filter "),
            key(" ? ", Color::White),
            Span::raw("Help"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
