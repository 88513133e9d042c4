//! Grid module - owns the maze cells
//!
//! The grid is a `width x height` rectangle stored as a flat row-major vector.
//! Dimensions are fixed when the grid is created.
//! Coordinates: `(col, row)` with `col` in `0..width` (left to right) and
//! `row` in `0..height` (top to bottom).

use crate::types::{Cell, Position};

/// The maze grid - flat array storage, row-major (`row * width + col`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with `Cell::Empty`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.col >= self.width || pos.row >= self.height {
            return None;
        }
        Some(pos.row * self.width + pos.col)
    }

    /// `(width, height)` in cells
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid. Callers only pass positions that
    /// were already validated against the grid dimensions.
    pub fn at(&self, pos: Position) -> Cell {
        match self.index(pos) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "position ({}, {}) outside {}x{} grid",
                pos.col, pos.row, self.width, self.height
            ),
        }
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        match self.index(pos) {
            Some(idx) => self.cells[idx] = cell,
            None => panic!(
                "position ({}, {}) outside {}x{} grid",
                pos.col, pos.row, self.width, self.height
            ),
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `chunks` rejects a zero chunk size; a zero-width grid has no rows to show.
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells currently holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index(Position::new(3, 0)), Some(3));
        assert_eq!(grid.index(Position::new(0, 1)), Some(4));
        assert_eq!(grid.index(Position::new(3, 2)), Some(11));
        assert_eq!(grid.index(Position::new(4, 0)), None);
        assert_eq!(grid.index(Position::new(0, 3)), None);
    }

    #[test]
    fn test_grid_set_and_at() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(2, 1), Cell::Goal);
        assert_eq!(grid.at(Position::new(2, 1)), Cell::Goal);
        assert_eq!(grid.cells()[5], Cell::Goal);
        assert_eq!(grid.count(Cell::Goal), 1);
        assert_eq!(grid.count(Cell::Empty), 5);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 grid")]
    fn test_grid_at_out_of_bounds_panics() {
        let grid = Grid::new(3, 2);
        grid.at(Position::new(3, 0));
    }

    #[test]
    #[should_panic]
    fn test_grid_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(0, 2), Cell::Wall);
    }

    #[test]
    fn test_grid_rows_are_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(1, 0), Cell::Wall);
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Empty, Cell::Wall]);
        assert_eq!(rows[1], &[Cell::Empty, Cell::Empty]);
    }
}
