//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the comparison panel when it is open
const COMPARISON_WIDTH: u16 = 46;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub filters: Rect,
    pub legend: Option<Rect>,
    pub grid: Rect,
    pub comparison: Option<Rect>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_legend: bool, show_comparison: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(3)];
    if show_legend {
        constraints.push(Constraint::Length(4));
    }
    constraints.extend([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (legend, body, status, help) = if show_legend {
        (Some(chunks[2]), chunks[3], chunks[4], chunks[5])
    } else {
        (None, chunks[2], chunks[3], chunks[4])
    };

    // Grid on the left, comparison panel docked on the right
    let (grid, comparison) = if show_comparison {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(COMPARISON_WIDTH)])
            .split(body);
        (body_chunks[0], Some(body_chunks[1]))
    } else {
        (body, None)
    };

    MainLayout {
        header: chunks[0],
        filters: chunks[1],
        legend,
        grid,
        comparison,
        status,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_popup(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_popup(area, 60, 20), Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_main_layout_optional_regions() {
        let area = Rect::new(0, 0, 160, 50);

        let full = calculate_main_layout(area, true, true);
        assert!(full.legend.is_some());
        assert_eq!(full.comparison.map(|r| r.width), Some(COMPARISON_WIDTH));
        assert_eq!(full.grid.width, 160 - COMPARISON_WIDTH);
        assert_eq!(full.help.y, 49);

        let bare = calculate_main_layout(area, false, false);
        assert!(bare.legend.is_none());
        assert!(bare.comparison.is_none());
        assert_eq!(bare.grid.width, 160);
        assert_eq!(bare.grid.height, 50 - 1 - 3 - 1 - 1);
    }
}
