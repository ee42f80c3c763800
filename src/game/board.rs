use crate::error::GameError;

use super::Player;

/// Smallest number of rows or columns that still admits a four-in-a-row.
pub const MIN_DIMENSION: usize = 4;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate. Row 0 is the top, the last row is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A `rows x cols` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column used for the centre-control bonus
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    /// Whether `(row, col)` lies on the board. Takes signed coordinates so
    /// that direction walks can step past the edges.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Lowest empty row in `col`, scanning up from the floor.
    /// `None` when the column is full or off the board.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column still accepts a piece
    pub fn has_room(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col).is_empty()
    }

    /// Columns with room, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.has_room(col)).collect()
    }

    /// Set a cell. The row must come from [`Board::lowest_empty_row`]; gravity
    /// is not re-checked here since the search calls this in its inner loop.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row * self.cols + col] = player.to_cell();
    }

    /// Clear a cell (undo and search backtracking)
    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = Cell::Empty;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull)?;
        self.place(row, col, player);
        Ok(row)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterate over every occupied cell with its owner
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.player()
                .map(|player| (Position::new(idx / self.cols, idx % self.cols), player))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(GameError::InvalidDimensions { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 2),
            Err(GameError::InvalidDimensions { rows: 6, cols: 2 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_default_is_six_by_seven() {
        let board = Board::default();
        assert_eq!((board.rows(), board.cols()), (6, 7));
        assert_eq!(board.center_column(), 3);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_lowest_empty_row_follows_gravity() {
        let mut board = Board::new(5, 4).unwrap();
        assert_eq!(board.lowest_empty_row(2), Some(4));
        for expected in (0..5).rev() {
            assert_eq!(board.lowest_empty_row(2), Some(expected));
            board.drop_piece(2, Player::Red).unwrap();
        }
        assert_eq!(board.lowest_empty_row(2), None);
        assert_eq!(board.lowest_empty_row(9), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..6 {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(!board.has_room(0));
        assert_eq!(board.drop_piece(0, Player::Yellow), Err(MoveError::ColumnFull));
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, Player::Red), Err(MoveError::InvalidColumn));
        assert!(!board.has_room(7));
    }

    #[test]
    fn test_place_then_remove_restores_board() {
        let mut board = Board::default();
        board.drop_piece(3, Player::Red).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        let before = board.clone();

        let row = board.lowest_empty_row(3).unwrap();
        board.place(row, 3, Player::Yellow);
        assert_ne!(board, before);
        board.remove(row, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5).unwrap();
        for col in 0..5 {
            for _ in 0..4 {
                assert!(!board.is_full());
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());

        board.clear();
        assert_eq!(board, Board::new(4, 5).unwrap());
    }

    #[test]
    fn test_occupied_reports_owner_and_position() {
        let mut board = Board::default();
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        let occupied: Vec<_> = board.occupied().collect();
        assert_eq!(
            occupied,
            vec![
                (Position::new(4, 1), Player::Yellow),
                (Position::new(5, 1), Player::Red),
            ]
        );
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::default();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(5, 6));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(6, 0));
        assert!(!board.in_bounds(0, 7));
    }
}
