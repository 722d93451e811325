//! Periodic-table grid layout
//!
//! Maps an element's (period, group) coordinates to a display cell. The
//! lanthanide and actinide series are lifted out of the main grid onto two
//! independent 15-column strips; the main grid keeps a placeholder for each
//! at group 3. Layout never depends on filter state.

use super::catalog::Catalog;
use super::element::{Element, ElementId, Series};
use std::collections::HashMap;

pub const MAIN_COLUMNS: u8 = 18;
pub const MAIN_ROWS: u8 = 7;
pub const STRIP_COLUMNS: u8 = 15;

/// Group slot in the main grid that the f-block series overflow from
pub const SERIES_ANCHOR_GROUP: u8 = 3;

/// Subtracted from a series member's nominal column to get its strip column
pub const SERIES_COLUMN_OFFSET: u8 = 3;

/// Which grid a cell lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strip {
    Main,
    Lanthanide,
    Actinide,
}

impl From<Series> for Strip {
    fn from(series: Series) -> Self {
        match series {
            Series::Lanthanide => Strip::Lanthanide,
            Series::Actinide => Strip::Actinide,
        }
    }
}

/// A 1-based cell on one of the strips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub strip: Strip,
    pub column: u8,
    pub row: u8,
}

impl Position {
    pub fn main(column: u8, row: u8) -> Self {
        Self {
            strip: Strip::Main,
            column,
            row,
        }
    }

    /// Where the cell sits when all three strips are drawn as one picture.
    ///
    /// Visual rows 0-6 are periods 1-7, row 7 the lanthanide strip and row 8
    /// the actinide strip. Strip columns line up under main columns 4-18.
    pub fn visual(&self) -> VisualCell {
        match self.strip {
            Strip::Main => VisualCell {
                row: self.row - 1,
                column: self.column,
            },
            Strip::Lanthanide => VisualCell {
                row: MAIN_ROWS,
                column: self.column + SERIES_COLUMN_OFFSET,
            },
            Strip::Actinide => VisualCell {
                row: MAIN_ROWS + 1,
                column: self.column + SERIES_COLUMN_OFFSET,
            },
        }
    }
}

/// Row/column in the combined on-screen picture (row 0-based, column 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualCell {
    pub row: u8,
    pub column: u8,
}

/// Total number of visual rows (7 periods plus two strips)
pub const VISUAL_ROWS: u8 = MAIN_ROWS + 2;

/// Static annotation marking where a series was lifted out of the main grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub position: Position,
    pub series: Series,
}

impl Placeholder {
    pub fn label(&self) -> &'static str {
        self.series.range_label()
    }
}

pub const PLACEHOLDERS: [Placeholder; 2] = [
    Placeholder {
        position: Position {
            strip: Strip::Main,
            column: SERIES_ANCHOR_GROUP,
            row: 6,
        },
        series: Series::Lanthanide,
    },
    Placeholder {
        position: Position {
            strip: Strip::Main,
            column: SERIES_ANCHOR_GROUP,
            row: 7,
        },
        series: Series::Actinide,
    },
];

/// Resolve the display cell of an element
pub fn resolve_position(element: &Element) -> Position {
    match element.series() {
        Some(series) => {
            // Series members continue rightward from the group-3 slot
            let nominal_column = element.id - series.first_id() + SERIES_ANCHOR_GROUP + 1;
            Position {
                strip: series.into(),
                column: nominal_column - SERIES_COLUMN_OFFSET,
                row: 1,
            }
        }
        None => Position::main(
            element.group.unwrap_or(SERIES_ANCHOR_GROUP),
            element.period,
        ),
    }
}

/// Cursor movement across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Resolved positions for a whole catalog, with reverse lookup
#[derive(Debug, Clone)]
pub struct GridLayout {
    positions: HashMap<ElementId, Position>,
    occupants: HashMap<VisualCell, ElementId>,
}

impl GridLayout {
    pub fn build(catalog: &Catalog) -> Self {
        let mut positions = HashMap::new();
        let mut occupants = HashMap::new();

        for element in catalog.elements() {
            let position = resolve_position(element);
            positions.insert(element.id, position);
            occupants.insert(position.visual(), element.id);
        }

        Self {
            positions,
            occupants,
        }
    }

    pub fn position_of(&self, id: ElementId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    pub fn element_at(&self, position: Position) -> Option<ElementId> {
        self.element_at_visual(position.visual())
    }

    pub fn element_at_visual(&self, cell: VisualCell) -> Option<ElementId> {
        self.occupants.get(&cell).copied()
    }

    /// Next occupied cell from `from` in `direction`; stays put at an edge
    pub fn step(&self, from: ElementId, direction: GridDirection) -> ElementId {
        let Some(current) = self.position_of(from).map(|p| p.visual()) else {
            return from;
        };

        let target = match direction {
            GridDirection::Left => self.nearest_in_row(current.row, |col| col < current.column, true),
            GridDirection::Right => {
                self.nearest_in_row(current.row, |col| col > current.column, false)
            }
            GridDirection::Up => (0..current.row)
                .rev()
                .find_map(|row| self.closest_in_row(row, current.column)),
            GridDirection::Down => (current.row + 1..VISUAL_ROWS)
                .find_map(|row| self.closest_in_row(row, current.column)),
        };

        target.unwrap_or(from)
    }

    fn nearest_in_row(
        &self,
        row: u8,
        accept: impl Fn(u8) -> bool,
        from_right: bool,
    ) -> Option<ElementId> {
        let mut columns: Vec<u8> = (1..=MAIN_COLUMNS).filter(|c| accept(*c)).collect();
        if from_right {
            columns.reverse();
        }
        columns
            .into_iter()
            .find_map(|column| self.element_at_visual(VisualCell { row, column }))
    }

    /// Occupant of `row` closest to `column`, preferring the left on ties
    fn closest_in_row(&self, row: u8, column: u8) -> Option<ElementId> {
        (1..=MAIN_COLUMNS)
            .filter_map(|c| {
                self.element_at_visual(VisualCell { row, column: c })
                    .map(|id| (c.abs_diff(column), c, id))
            })
            .min_by_key(|(distance, c, _)| (*distance, *c))
            .map(|(_, _, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog should be valid")
    }

    #[test]
    fn test_main_grid_uses_period_and_group() {
        let catalog = catalog();
        for element in catalog.elements().iter().filter(|e| e.series().is_none()) {
            let position = resolve_position(element);
            assert_eq!(position.strip, Strip::Main, "{}", element);
            assert_eq!(position.row, element.period, "{}", element);
            assert_eq!(Some(position.column), element.group, "{}", element);
        }
    }

    #[test]
    fn test_lanthanides_fill_their_own_strip() {
        let catalog = catalog();
        let columns: Vec<u8> = (57..=71)
            .map(|id| {
                let position = resolve_position(catalog.get(id).unwrap());
                assert_eq!(position.strip, Strip::Lanthanide);
                assert_eq!(position.row, 1);
                position.column
            })
            .collect();
        assert_eq!(columns, (1..=STRIP_COLUMNS).collect::<Vec<_>>());
    }

    #[test]
    fn test_actinides_fill_their_own_strip() {
        let catalog = catalog();
        let columns: Vec<u8> = (89..=103)
            .map(|id| {
                let position = resolve_position(catalog.get(id).unwrap());
                assert_eq!(position.strip, Strip::Actinide);
                assert_eq!(position.row, 1);
                position.column
            })
            .collect();
        assert_eq!(columns, (1..=STRIP_COLUMNS).collect::<Vec<_>>());
    }

    #[test]
    fn test_layout_is_total_and_collision_free() {
        let catalog = catalog();
        let layout = GridLayout::build(&catalog);
        for element in catalog.elements() {
            let position = layout.position_of(element.id).unwrap();
            assert_eq!(layout.element_at(position), Some(element.id));
        }
    }

    #[test]
    fn test_placeholders_occupy_empty_group_three_cells() {
        let catalog = catalog();
        let layout = GridLayout::build(&catalog);

        assert_eq!(PLACEHOLDERS[0].position, Position::main(3, 6));
        assert_eq!(PLACEHOLDERS[0].label(), "57-71");
        assert_eq!(PLACEHOLDERS[1].position, Position::main(3, 7));
        assert_eq!(PLACEHOLDERS[1].label(), "89-103");

        for placeholder in PLACEHOLDERS {
            assert_eq!(layout.element_at(placeholder.position), None);
        }
    }

    #[test]
    fn test_step_skips_gaps_within_a_row() {
        let catalog = catalog();
        let layout = GridLayout::build(&catalog);

        // Hydrogen to helium across the empty first period
        assert_eq!(layout.step(1, GridDirection::Right), 2);
        assert_eq!(layout.step(2, GridDirection::Left), 1);
        // Beryllium to boron across the d-block gap
        assert_eq!(layout.step(4, GridDirection::Right), 5);
        // Barium jumps over the lanthanide placeholder to hafnium
        assert_eq!(layout.step(56, GridDirection::Right), 72);
    }

    #[test]
    fn test_step_stays_put_at_edges() {
        let catalog = catalog();
        let layout = GridLayout::build(&catalog);

        assert_eq!(layout.step(1, GridDirection::Up), 1);
        assert_eq!(layout.step(1, GridDirection::Left), 1);
        assert_eq!(layout.step(118, GridDirection::Right), 118);
        assert_eq!(layout.step(103, GridDirection::Down), 103);
    }

    #[test]
    fn test_step_moves_between_rows_and_strips() {
        let catalog = catalog();
        let layout = GridLayout::build(&catalog);

        // Iron straight down to ruthenium
        assert_eq!(layout.step(26, GridDirection::Down), 44);
        // Period 3 has no group 8; aluminium (13) is closer than magnesium (2)
        assert_eq!(layout.step(26, GridDirection::Up), 13);
        // From francium down onto the lanthanide strip, nearest column first
        assert_eq!(layout.step(87, GridDirection::Down), 57);
        // Lanthanum down to actinium, straight below
        assert_eq!(layout.step(57, GridDirection::Down), 89);
        // Lanthanum sits under group 4, so up lands on rutherfordium
        assert_eq!(layout.step(57, GridDirection::Up), 104);
    }
}
