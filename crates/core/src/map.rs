//! Map module - the fixed tile grid the rays march through
//!
//! The map is a W×H grid where each cell is either a wall or open floor.
//! Uses a flat vector in row-major order: `index(x, y) = y * W + x`.
//! Coordinates: x grows to the right, y grows downward.

use thiserror::Error;

use crate::types::CellKind;

/// Errors raised while building a map from a text layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map layout has no rows")]
    Empty,

    #[error("map row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, MapError>;

/// Default level: a 16×28 room bordered by walls.
pub const DEFAULT_LAYOUT: [&str; 28] = [
    "################",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

/// Immutable tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl GameMap {
    /// Build a map from text rows (`#` wall, `.` open).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(MapError::Empty),
        };
        if expected == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != expected {
                return Err(MapError::RaggedRow {
                    row: y,
                    width,
                    expected,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind =
                    CellKind::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, x, y })?;
                cells.push(kind);
            }
        }

        Ok(Self {
            width: expected,
            height: rows.len(),
            cells,
        })
    }

    /// The built-in level.
    pub fn default_level() -> Self {
        // The layout is a compile-time literal; every row is the same width.
        Self::from_rows(&DEFAULT_LAYOUT).unwrap_or_else(|_| Self::open_room(16, 28))
    }

    /// An all-open room of the given size bordered by walls.
    pub fn open_room(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                cells.push(if border {
                    CellKind::Wall
                } else {
                    CellKind::Open
                });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Get cell at integer position (x, y).
    /// Returns None if out of bounds.
    pub fn get(&self, x: i64, y: i64) -> Option<CellKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell containing the real-valued point (px, py).
    pub fn cell_at(&self, px: f64, py: f64) -> Option<CellKind> {
        self.get(px.floor() as i64, py.floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_dimensions() {
        let map = GameMap::default_level();
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 28);
        assert_eq!(map.cells().len(), 16 * 28);
        assert_eq!(map.get(0, 0), Some(CellKind::Wall));
        assert_eq!(map.get(8, 8), Some(CellKind::Open));
        assert_eq!(map.get(15, 27), Some(CellKind::Wall));
    }

    #[test]
    fn test_row_major_indexing() {
        let map = GameMap::from_rows(&["#..", "..#"]).unwrap();
        assert_eq!(map.cells()[0], CellKind::Wall);
        assert_eq!(map.cells()[5], CellKind::Wall);
        assert_eq!(map.get(2, 1), Some(CellKind::Wall));
        assert_eq!(map.get(2, 0), Some(CellKind::Open));
    }

    #[test]
    fn test_out_of_bounds_has_no_cell() {
        let map = GameMap::open_room(4, 4);
        assert_eq!(map.get(-1, 0), None);
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 4), None);
    }

    #[test]
    fn test_layout_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(GameMap::from_rows(&empty), Err(MapError::Empty));
        assert_eq!(
            GameMap::from_rows(&["###", "##"]),
            Err(MapError::RaggedRow {
                row: 1,
                width: 2,
                expected: 3
            })
        );
        assert_eq!(
            GameMap::from_rows(&["#x#"]),
            Err(MapError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 0
            })
        );
    }

    #[test]
    fn test_cell_at_floors_coordinates() {
        let map = GameMap::open_room(4, 4);
        assert_eq!(map.cell_at(1.9, 1.1), Some(CellKind::Open));
        assert_eq!(map.cell_at(0.5, 1.5), Some(CellKind::Wall));
        assert_eq!(map.cell_at(-0.1, 1.5), None);
    }
}
