use std::fmt;

use crate::{error::BoardError, COLS, ROWS, WINDOW_LEN};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The opposing player's piece. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::PlayerOne => 'X',
            Piece::PlayerTwo => 'O',
            Piece::Empty => ' ',
        }
    }
}

/// A contiguous run of cells along a row, column or diagonal
pub type Window = [Piece; WINDOW_LEN];

// (row step, column step): horizontal, vertical, down-right, up-right
const ORIENTATIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// The number of distinct windows on the board, over all four orientations
pub const WINDOW_COUNT: usize = ROWS * (COLS - WINDOW_LEN + 1)
    + COLS * (ROWS - WINDOW_LEN + 1)
    + 2 * (ROWS - WINDOW_LEN + 1) * (COLS - WINDOW_LEN + 1);

/// The playable columns of a board, each paired with its landing row
///
/// Yields columns in ascending order.
#[derive(Clone, Debug)]
pub struct MoveList {
    size: usize,
    // (column, landing row), stored highest column first and popped from the back
    moves: [(usize, usize); COLS],
}

impl MoveList {
    fn new() -> Self {
        Self {
            size: 0,
            moves: [(0, 0); COLS],
        }
    }

    fn push(&mut self, column: usize, row: usize) {
        self.moves[self.size] = (column, row);
        self.size += 1;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The column at `index`, counting in ascending column order
    pub fn column(&self, index: usize) -> Option<usize> {
        if index < self.size {
            Some(self.moves[self.size - 1 - index].0)
        } else {
            None
        }
    }
}

impl Iterator for MoveList {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self.size {
            0 => None,
            _ => {
                self.size -= 1;
                Some(self.moves[self.size])
            }
        }
    }
}

/// A 6x7 Connect 4 grid
///
/// Row 0 is the top of the board. Pieces fall to the highest-indexed empty
/// row of their column, so the empty cells of a column always form a block
/// starting at row 0.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; COLS]; ROWS],
        }
    }

    pub fn from_rows(cells: [[Piece; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Builds a board from a string of 1-indexed columns, alternating players
    /// starting with `PlayerOne`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut piece = Piece::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    board.play(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(BoardError::Unparsable(column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[row][column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, piece: Piece) {
        self.cells[row][column] = piece;
    }

    pub fn rows(&self) -> &[[Piece; COLS]; ROWS] {
        &self.cells
    }

    pub fn playable(&self, column: usize) -> bool {
        column < COLS && self.cells[0][column].is_empty()
    }

    // bottom-most empty row of the column
    fn open_row(&self, column: usize) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Playable columns with their landing rows, ascending by column
    pub fn open_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for column in (0..COLS).rev().filter(|&column| self.playable(column)) {
            if let Some(row) = self.open_row(column) {
                moves.push(column, row);
            }
        }
        moves
    }

    /// Columns whose top row is still empty, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        self.open_moves().map(|(column, _)| column).collect()
    }

    /// The row a piece dropped into `column` would settle in
    pub fn landing_row(&self, column: usize) -> Result<usize, BoardError> {
        if column >= COLS {
            return Err(BoardError::InvalidColumn { column });
        }
        self.open_row(column)
            .ok_or(BoardError::ColumnFull { column })
    }

    /// Drops `piece` into `column`, returning the row it landed in
    pub fn play(&mut self, column: usize, piece: Piece) -> Result<usize, BoardError> {
        debug_assert!(!piece.is_empty(), "cannot play an empty piece");
        let row = self.landing_row(column)?;
        self.cells[row][column] = piece;
        Ok(row)
    }

    /// A copy of the board with `piece` dropped into `column`
    pub fn with_move(&self, column: usize, piece: Piece) -> Result<Self, BoardError> {
        let mut next = *self;
        next.play(column, piece)?;
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.open_moves().is_empty()
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    fn window_at(&self, row: usize, column: usize, (row_step, column_step): (isize, isize)) -> Option<Window> {
        let span = WINDOW_LEN as isize - 1;
        let last_row = row as isize + row_step * span;
        let last_column = column as isize + column_step * span;
        if last_row < 0 || last_row >= ROWS as isize || last_column < 0 || last_column >= COLS as isize {
            return None;
        }

        let mut window = [Piece::Empty; WINDOW_LEN];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (column as isize + column_step * i as isize) as usize;
            *cell = self.cells[r][c];
        }
        Some(window)
    }

    /// Every window of every orientation: horizontal, vertical, down-right
    /// and up-right, from all start positions where a full window fits
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        ORIENTATIONS.into_iter().flat_map(move |orientation| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |column| self.window_at(row, column, orientation))
            })
        })
    }

    /// Checks whether `piece` has four in a row anywhere on the board
    pub fn has_four_in_row(&self, piece: Piece) -> bool {
        if piece.is_empty() {
            return false;
        }
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == piece))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            write!(f, "|")?;
            for cell in row.iter() {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(2 * COLS + 1))?;
        for column in 1..=COLS {
            write!(f, " {}", column)?;
        }
        writeln!(f, " ")
    }
}
