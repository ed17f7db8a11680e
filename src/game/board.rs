use super::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    First,
    Second,
}

/// A board coordinate: column `x`, row `y`, both in `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

/// A square grid of cells, size fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    /// Create a new all-empty board.
    pub fn new(size: usize) -> Self {
        Self::filled(size, Cell::Empty)
    }

    /// Create a `size x size` board with every cell set to `cell`.
    pub fn filled(size: usize, cell: Cell) -> Self {
        Board {
            cells: vec![cell; size * size],
            size,
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a position. Panics if out of range.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.y * self.size + pos.x]
    }

    /// Whether a position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.y * self.size + pos.x] = cell;
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Iterate over every empty cell, row by row.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &c)| (c == Cell::Empty).then(|| Position::new(i % size, i / size)))
    }

    /// Check whether some row or column contains `match_len` consecutive
    /// cells equal to `cell`.
    ///
    /// One O(size²) sweep: each pass over index `i` walks row `i` and
    /// column `i` simultaneously with running counters, returning the
    /// instant either counter reaches `match_len`. Runs starting mid-row
    /// are covered because the counter resets on mismatch rather than
    /// re-anchoring on window boundaries.
    pub fn check_lines(&self, cell: Cell, match_len: usize) -> bool {
        for i in 0..self.size {
            let mut row_run = 0;
            let mut col_run = 0;
            for j in 0..self.size {
                row_run = if self.get(Position::new(j, i)) == cell {
                    row_run + 1
                } else {
                    0
                };
                if row_run == match_len {
                    return true;
                }

                col_run = if self.get(Position::new(i, j)) == cell {
                    col_run + 1
                } else {
                    0
                };
                if col_run == match_len {
                    return true;
                }
            }
        }
        false
    }

    /// Check whether some diagonal (either orientation) contains
    /// `match_len` consecutive cells equal to `cell`.
    ///
    /// Every `match_len`-sized window with top-left corner in
    /// `[0, size - match_len]²` is a candidate anchor; each anchor walks
    /// the main diagonal and the anti-diagonal of its window, bailing out
    /// early once both orientations have failed.
    pub fn check_diagonals(&self, cell: Cell, match_len: usize) -> bool {
        if match_len > self.size {
            return false;
        }
        for i in 0..=self.size - match_len {
            for j in 0..=self.size - match_len {
                let mut main_diag = true;
                let mut anti_diag = true;

                for k in 0..match_len {
                    if self.get(Position::new(j + k, i + k)) != cell {
                        main_diag = false;
                    }
                    if self.get(Position::new(j + match_len - 1 - k, i + k)) != cell {
                        anti_diag = false;
                    }
                    if !main_diag && !anti_diag {
                        break;
                    }
                }

                if main_diag || anti_diag {
                    return true;
                }
            }
        }
        false
    }

    /// Check whether `side`'s mark has `match_len` in a row, column, or
    /// diagonal.
    pub fn check_match(&self, side: Side, match_len: usize) -> bool {
        let cell = side.to_cell();
        self.check_lines(cell, match_len) || self.check_diagonals(cell, match_len)
    }
}
