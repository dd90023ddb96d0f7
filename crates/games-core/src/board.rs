use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A coordinate on a square board. Rows and columns are 1-indexed.
///
/// Cells are handed out by the board that owns the coordinate space; there is
/// no public constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// A move direction. Row numbers grow downward: `Down` is row + 1,
/// `Up` is row - 1, `Right` is col + 1, `Left` is col - 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn all() -> &'static [Direction] {
        &[
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {width}x{width} board")]
    OutOfRange {
        row: usize,
        col: usize,
        width: usize,
    },
}

/// A fixed-size square grid of cells. The cell set is determined entirely by
/// the width and never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareBoard {
    width: usize,
}

impl SquareBoard {
    pub fn new(width: usize) -> Self {
        SquareBoard { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn in_range(&self, i: usize, j: usize) -> bool {
        (1..=self.width).contains(&i) && (1..=self.width).contains(&j)
    }

    /// Get the cell at (i, j), or `BoardError::OutOfRange` if either
    /// coordinate falls outside `[1, width]`.
    pub fn cell_at(&self, i: usize, j: usize) -> Result<Cell, BoardError> {
        if self.in_range(i, j) {
            Ok(Cell::new(i, j))
        } else {
            Err(BoardError::OutOfRange {
                row: i,
                col: j,
                width: self.width,
            })
        }
    }

    /// Non-failing variant of `cell_at`.
    pub fn cell_at_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        self.in_range(i, j).then(|| Cell::new(i, j))
    }

    /// All width² cells in row-major order.
    pub fn all_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.width * self.width);
        for i in 1..=self.width {
            for j in 1..=self.width {
                cells.push(Cell::new(i, j));
            }
        }
        cells
    }

    /// Cells along row `i` for the given column indices, in the order the
    /// indices are produced. Indices outside `[1, width]` (including `i`
    /// itself) are clipped out, so a descending range like `(1..=w).rev()`
    /// yields the row right-to-left without any post-processing.
    pub fn row_cells<I>(&self, i: usize, cols: I) -> Vec<Cell>
    where
        I: IntoIterator<Item = usize>,
    {
        if !(1..=self.width).contains(&i) {
            return Vec::new();
        }
        cols.into_iter()
            .filter(|&j| (1..=self.width).contains(&j))
            .map(|j| Cell::new(i, j))
            .collect()
    }

    /// Cells along column `j` for the given row indices; see `row_cells`.
    pub fn column_cells<I>(&self, rows: I, j: usize) -> Vec<Cell>
    where
        I: IntoIterator<Item = usize>,
    {
        if !(1..=self.width).contains(&j) {
            return Vec::new();
        }
        rows.into_iter()
            .filter(|&i| (1..=self.width).contains(&i))
            .map(|i| Cell::new(i, j))
            .collect()
    }

    /// The cell one step from `cell` in `direction`, or `None` if that step
    /// leaves the board.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (i, j) = match direction {
            Direction::Up => (cell.row.checked_sub(1)?, cell.col),
            Direction::Down => (cell.row + 1, cell.col),
            Direction::Left => (cell.row, cell.col.checked_sub(1)?),
            Direction::Right => (cell.row, cell.col + 1),
        };
        self.cell_at_or_none(i, j)
    }

    /// The `index`-th line of cells perpendicular to `direction`, ordered so
    /// that the front of the line is the edge tiles slide toward. `Left` and
    /// `Right` give row `index` (ascending and descending columns), `Up` and
    /// `Down` give column `index` (ascending and descending rows).
    pub fn line_in_direction(&self, index: usize, direction: Direction) -> Vec<Cell> {
        match direction {
            Direction::Left => self.row_cells(index, 1..=self.width),
            Direction::Right => self.row_cells(index, (1..=self.width).rev()),
            Direction::Up => self.column_cells(1..=self.width, index),
            Direction::Down => self.column_cells((1..=self.width).rev(), index),
        }
    }
}

/// A `SquareBoard` with one mutable value slot per cell. Slots start empty;
/// the slot set itself never grows or shrinks.
#[derive(Clone, Debug)]
pub struct GameBoard<T> {
    board: SquareBoard,
    values: Vec<Option<T>>,
}

impl<T> GameBoard<T> {
    pub fn new(width: usize) -> Self {
        let mut values = Vec::with_capacity(width * width);
        values.resize_with(width * width, || None);
        GameBoard {
            board: SquareBoard::new(width),
            values,
        }
    }

    /// Dense index of a cell's slot. A cell from a board of a different
    /// width is a programming error, not a user error.
    fn slot(&self, cell: Cell) -> usize {
        assert!(
            self.board.in_range(cell.row, cell.col),
            "cell ({}, {}) does not belong to this {}x{} board",
            cell.row,
            cell.col,
            self.board.width,
            self.board.width,
        );
        (cell.row - 1) * self.board.width + (cell.col - 1)
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.values[self.slot(cell)].as_ref()
    }

    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        let slot = self.slot(cell);
        self.values[slot] = value;
    }

    /// Cells whose current value satisfies the predicate, in row-major order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Cell>
    where
        P: Fn(Option<&T>) -> bool,
    {
        self.all_cells()
            .into_iter()
            .filter(|&cell| predicate(self.get(cell)))
            .collect()
    }

    /// First cell (row-major) whose value satisfies the predicate.
    pub fn find<P>(&self, predicate: P) -> Option<Cell>
    where
        P: Fn(Option<&T>) -> bool,
    {
        self.all_cells()
            .into_iter()
            .find(|&cell| predicate(self.get(cell)))
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(Option<&T>) -> bool,
    {
        self.values.iter().any(|v| predicate(v.as_ref()))
    }

    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(Option<&T>) -> bool,
    {
        self.values.iter().all(|v| predicate(v.as_ref()))
    }

    // Read contract of the underlying SquareBoard.

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn cell_at(&self, i: usize, j: usize) -> Result<Cell, BoardError> {
        self.board.cell_at(i, j)
    }

    pub fn cell_at_or_none(&self, i: usize, j: usize) -> Option<Cell> {
        self.board.cell_at_or_none(i, j)
    }

    pub fn all_cells(&self) -> Vec<Cell> {
        self.board.all_cells()
    }

    pub fn row_cells<I>(&self, i: usize, cols: I) -> Vec<Cell>
    where
        I: IntoIterator<Item = usize>,
    {
        self.board.row_cells(i, cols)
    }

    pub fn column_cells<I>(&self, rows: I, j: usize) -> Vec<Cell>
    where
        I: IntoIterator<Item = usize>,
    {
        self.board.column_cells(rows, j)
    }

    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.board.neighbor(cell, direction)
    }

    pub fn line_in_direction(&self, index: usize, direction: Direction) -> Vec<Cell> {
        self.board.line_in_direction(index, direction)
    }
}
