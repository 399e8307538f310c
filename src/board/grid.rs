//! The battlefield grid.
//!
//! Cells are stored row-major in a persistent `im::Vector`, so cloning a
//! board for the next state is O(1) and never aliases mutation into the
//! previous snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Unit, UnitId};
use crate::core::PlayerId;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Fixed-size grid holding at most one unit per cell.
///
/// ```
/// use grid_ccg::board::{Board, Position};
///
/// let board = Board::new(5, 7);
/// assert!(board.is_empty(Position::new(2, 3)));
/// assert_eq!(board.offset(Position::new(0, 0), -1, 0), None);
/// assert_eq!(board.offset(Position::new(0, 0), 1, 1), Some(Position::new(1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Option<Unit>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(None).take(rows * cols).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Shift a position, returning `None` if the result leaves the board.
    #[must_use]
    pub fn offset(&self, pos: Position, d_row: isize, d_col: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(d_row)?;
        let col = pos.col.checked_add_signed(d_col)?;
        let shifted = Position::new(row, col);
        self.contains(shifted).then_some(shifted)
    }

    /// The unit at a cell, if any. Off-board positions hold nothing.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Unit> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(self.index(pos)).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Whether the cell still holds the unit with this ID.
    #[must_use]
    pub fn holds(&self, pos: Position, id: UnitId) -> bool {
        self.get(pos).is_some_and(|u| u.id == id)
    }

    /// Write a unit into a cell, replacing whatever was there.
    ///
    /// Callers check occupancy first; the board itself does not refuse.
    pub fn set(&mut self, pos: Position, unit: Unit) {
        debug_assert!(self.contains(pos), "position {pos} off board");
        let idx = self.index(pos);
        self.cells.set(idx, Some(unit));
    }

    /// Empty a cell, returning its previous occupant.
    pub fn take(&mut self, pos: Position) -> Option<Unit> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.cells.set(idx, None)
    }

    /// Move the occupant of `from` into `to`.
    pub fn move_unit(&mut self, from: Position, to: Position) {
        if let Some(unit) = self.take(from) {
            self.set(to, unit);
        }
    }

    /// Every occupied cell in row-major order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|u| (Position::new(i / cols, i % cols), u)))
    }

    /// Snapshot of a player's units in combat processing order.
    ///
    /// Player 0's front line (highest row) goes first, player 1's front
    /// line (lowest row) goes first, so a unit never steps into a cell a
    /// friendly unit behind it has yet to leave.
    #[must_use]
    pub fn units_in_processing_order(&self, player: PlayerId) -> Vec<(Position, Unit)> {
        let mut units: Vec<(Position, Unit)> = self
            .units()
            .filter(|(_, u)| u.owner == player)
            .map(|(pos, u)| (pos, u.clone()))
            .collect();

        if player == PlayerId::FIRST {
            units.sort_by(|a, b| b.0.row.cmp(&a.0.row));
        } else {
            units.sort_by(|a, b| a.0.row.cmp(&b.0.row));
        }
        units
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
