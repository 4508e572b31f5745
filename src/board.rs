//! N×N tic-tac-toe board with an occupied-cell counter.
//!
//! Cells are addressed as `(x, y)` with both coordinates in `[0, N)`. A
//! *column* is the set of cells sharing one `x`, a *row* the set sharing one
//! `y`. Storage is `cells[x][y]`, and the search scans `x` outer, `y` inner.
//!
//! A line only counts as a win when **every** cell in it carries the same
//! mark. On 3x3 this is ordinary three-in-a-row; on larger boards it is the
//! stricter whole-line rule, not k-in-a-row.
//!
//! The board is mutated in place by the search: each [`Board::set_for_player`]
//! must be matched by a [`Board::clear`] on the same cell, otherwise the
//! occupied counter drifts and [`Board::is_full`] lies.

use std::fmt;

use derive_more::{Display, Error};

use crate::constants::{MARK_EMPTY, MARK_P1, MARK_P2};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, marked `X`.
    One,
    /// Moves second, marked `O`.
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Render mark for this player.
    pub fn mark(self) -> char {
        match self {
            Player::One => MARK_P1,
            Player::Two => MARK_P2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player one ({})", self.mark()),
            Player::Two => write!(f, "player two ({})", self.mark()),
        }
    }
}

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn mark(self) -> char {
        match self {
            Cell::Empty => MARK_EMPTY,
            Cell::PlayerOne => MARK_P1,
            Cell::PlayerTwo => MARK_P2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A cell coordinate.
///
/// Also addressable by a 1-based linear id, `id = x * N + y + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: usize,
    pub y: usize,
}

impl Move {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert a 1-based linear id into a coordinate on an `N`x`N` board.
    pub fn from_id<const N: usize>(id: usize) -> Result<Self, MoveError> {
        if id == 0 || id > N * N {
            return Err(MoveError::InvalidId { id, size: N });
        }
        Ok(Self {
            x: (id - 1) / N,
            y: (id - 1) % N,
        })
    }

    /// 1-based linear id of this coordinate on an `N`x`N` board.
    pub fn to_id<const N: usize>(self) -> usize {
        self.x * N + self.y + 1
    }

    /// True if both coordinates fall inside an `N`x`N` board.
    pub fn in_bounds<const N: usize>(self) -> bool {
        self.x < N && self.y < N
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rejection of a move supplied from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate lies outside the board.
    #[display("invalid position ({x}, {y}) on a {size}x{size} board")]
    OutOfRange { x: usize, y: usize, size: usize },
    /// Linear id outside `1..=N*N`.
    #[display("invalid field id {id}, expected 1..={}", size * size)]
    InvalidId { id: usize, size: usize },
    /// Cell already holds a mark.
    #[display("field ({x}, {y}) is already taken")]
    Occupied { x: usize, y: usize },
}

/// Fixed-size N×N board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
    /// Number of non-empty cells.
    occupied: usize,
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Board<N> {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
            occupied: 0,
        }
    }

    pub fn size(&self) -> usize {
        N
    }

    /// Number of cells, i.e. the deepest a search can go from an empty board.
    pub fn max_depth(&self) -> usize {
        N * N
    }

    pub fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[x][y]
    }

    #[inline]
    pub fn is_field_empty(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied >= N * N
    }

    /// Place `player`'s mark on an empty cell.
    #[inline]
    pub fn set_for_player(&mut self, player: Player, x: usize, y: usize) {
        debug_assert!(self.is_field_empty(x, y), "({x}, {y}) is not empty");
        self.cells[x][y] = player.into();
        self.occupied += 1;
    }

    /// Place `player`'s mark on the cell with 1-based linear id `id`.
    pub fn set_for_player_id(&mut self, player: Player, id: usize) {
        debug_assert!((1..=N * N).contains(&id), "field id {id} out of range");
        self.set_for_player(player, (id - 1) / N, (id - 1) % N);
    }

    /// Empty a cell previously filled by [`set_for_player`](Self::set_for_player).
    #[inline]
    pub fn clear(&mut self, x: usize, y: usize) {
        debug_assert!(!self.is_field_empty(x, y), "({x}, {y}) is already empty");
        self.cells[x][y] = Cell::Empty;
        self.occupied -= 1;
    }

    /// Checked placement for moves that come from outside the engine.
    pub fn try_play(&mut self, player: Player, mv: Move) -> Result<(), MoveError> {
        if !mv.in_bounds::<N>() {
            return Err(MoveError::OutOfRange {
                x: mv.x,
                y: mv.y,
                size: self.size(),
            });
        }
        if !self.is_field_empty(mv.x, mv.y) {
            return Err(MoveError::Occupied { x: mv.x, y: mv.y });
        }
        self.set_for_player(player, mv.x, mv.y);
        Ok(())
    }

    /// Iterate over empty cells in scan order.
    pub fn empty_fields(&self) -> impl Iterator<Item = Move> + '_ {
        (0..N)
            .flat_map(|x| (0..N).map(move |y| Move::new(x, y)))
            .filter(|mv| self.is_field_empty(mv.x, mv.y))
    }

    /// True if the board shows a completed line.
    pub fn is_game_end(&self) -> bool {
        self.is_win_in_column() || self.is_win_in_row() || self.is_win_in_diagonal()
    }

    /// Some fixed-`x` line holds a single mark throughout.
    pub fn is_win_in_column(&self) -> bool {
        self.cells.iter().any(|column| {
            let first = column[0];
            !first.is_empty() && column[1..].iter().all(|&c| c == first)
        })
    }

    /// Some fixed-`y` line holds a single mark throughout.
    pub fn is_win_in_row(&self) -> bool {
        (0..N).any(|y| {
            let first = self.cells[0][y];
            !first.is_empty() && self.cells[1..].iter().all(|column| column[y] == first)
        })
    }

    /// Either main diagonal holds a single mark throughout.
    pub fn is_win_in_diagonal(&self) -> bool {
        let main = self.cells[0][0];
        if !main.is_empty() && (1..N).all(|i| self.cells[i][i] == main) {
            return true;
        }

        let anti = self.cells[0][N - 1];
        !anti.is_empty() && (1..N).all(|i| self.cells[i][N - 1 - i] == anti)
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                write!(f, " | {}", self.get(x, y).mark())?;
            }
            writeln!(f, " | ")?;
        }
        Ok(())
    }
}
