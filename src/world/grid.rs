//! Static cell map the caster marches through.
//!
//! Storage is row-major with row 0 at the *top* of the text map, while the
//! caster's virtual space has +Y pointing up.  `is_wall_at` does the flip.

use std::{fs, io, path::Path};

use thiserror::Error;

/// Built-in 16×16 level, row 0 = north.
pub const DEFAULT_MAP: [&str; 16] = [
    "1111111111111111",
    "1000000000000001",
    "1001111100000001",
    "1001000101010101",
    "1001001100000001",
    "1001000100000001",
    "1000000000000001",
    "1000000000000001",
    "1000000000000001",
    "1001100111111001",
    "1001000000001001",
    "1001110000001001",
    "1001000000001001",
    "1001111111101001",
    "1000000000000001",
    "1111111111111111",
];

/// Smallest map that still has an interior cell.
const MIN_SIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Cell::Wall),
            '0' => Some(Cell::Empty),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Things that can go wrong while loading a map.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("map contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col} (only '0' and '1' allowed)")]
    BadCell { row: usize, col: usize, ch: char },

    #[error("map is {rows}x{cols}, needs at least 3x3")]
    TooSmall { rows: usize, cols: usize },

    /// Outer ring has a hole – a ray could march forever.
    #[error("border cell at row {row}, column {col} is not a wall")]
    OpenBorder { row: usize, col: usize },
}

/// Immutable wall/empty grid, guaranteed to be closed by a wall ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GridWorld {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Parse a text map: one line per row, `'1'` = wall, `'0'` = empty.
    /// Leading/trailing whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(MapError::BadCell { row, col, ch })?;
                cells.push(cell);
            }
        }

        let world = Self {
            rows: rows.len(),
            cols,
            cells,
        };
        world.check_border()?;
        Ok(world)
    }

    /// Load a map file in the same text format as [`GridWorld::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The built-in level.
    pub fn default_map() -> Result<Self, MapError> {
        Self::from_rows(&DEFAULT_MAP)
    }

    /// `rows × cols` map with walls on the outer ring only.
    pub fn open(rows: usize, cols: usize) -> Result<Self, MapError> {
        let lines: Vec<String> = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                            '1'
                        } else {
                            '0'
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&lines)
    }

    fn check_border(&self) -> Result<(), MapError> {
        if self.rows < MIN_SIDE || self.cols < MIN_SIDE {
            return Err(MapError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let ring = (0..self.cols)
            .flat_map(|c| [(0, c), (self.rows - 1, c)])
            .chain((1..self.rows - 1).flat_map(|r| [(r, 0), (r, self.cols - 1)]));
        for (row, col) in ring {
            if !self.cells[row * self.cols + col].is_wall() {
                return Err(MapError::OpenBorder { row, col });
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell in storage coordinates. Out-of-range indices are clamped to the
    /// nearest edge cell instead of failing.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        let row = row.min(self.rows - 1);
        let col = col.min(self.cols - 1);
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_wall()
    }

    /// Wall test in virtual cell coordinates (+Y up, may be negative or past
    /// the far edge; both are clamped).
    #[inline]
    pub fn is_wall_at(&self, cell_x: i64, cell_y: i64) -> bool {
        let cx = cell_x.clamp(0, self.cols as i64 - 1) as usize;
        let cy = cell_y.clamp(0, self.rows as i64 - 1) as usize;
        self.is_wall(self.rows - 1 - cy, cx)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
