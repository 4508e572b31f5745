//! Turn-taking driver around the board and the search.
//!
//! [`TicTacToe`] owns the single [`Board`] of a game, tracks whose turn it is
//! and records the moves played. Engine moves come from
//! [`minimax::best_move`](crate::minimax::best_move); moves supplied from
//! outside go through the checked [`Board::try_play`] path.

use std::io::{self, Write};

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use crate::board::{Board, Move, MoveError, Player};
use crate::minimax;

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    #[display("{_0} wins")]
    Win(Player),
    #[display("draw")]
    Draw,
}

/// Errors raised while driving a game.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// The supplied move was rejected.
    #[display("{_0}")]
    Move(MoveError),
    /// A move was submitted after the game ended.
    #[display("game is already over")]
    GameOver,
    /// Writing the board failed.
    #[display("failed to write board: {_0}")]
    Io(io::Error),
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

/// A single game on an N×N board.
#[derive(Debug, Clone)]
pub struct TicTacToe<const N: usize> {
    board: Board<N>,
    to_move: Player,
    history: Vec<Move>,
}

impl<const N: usize> Default for TicTacToe<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TicTacToe<N> {
    /// New game on an empty board with player one to move.
    pub fn new() -> Self {
        Self::with_first(Player::One)
    }

    /// New game on an empty board with `first` to move.
    pub fn with_first(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::with_capacity(N * N),
        }
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once a line is complete or the board is full.
    pub fn is_over(&self) -> bool {
        self.board.is_game_end() || self.board.is_full()
    }

    /// Result of a finished game, `None` while it is still running.
    ///
    /// A completed line always belongs to whoever moved last.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.board.is_game_end() {
            Some(Outcome::Win(self.to_move.opponent()))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Play an externally supplied move for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.board.try_play(self.to_move, mv)?;
        self.advance(mv);
        Ok(())
    }

    /// Let the engine choose and play a move for the side to move.
    ///
    /// Returns `None` without touching the board if the game is over.
    pub fn play_best(&mut self) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let mv = minimax::best_move(&mut self.board, self.to_move)?;
        self.board.set_for_player(self.to_move, mv.x, mv.y);
        self.advance(mv);
        Some(mv)
    }

    /// Engine plays both sides from the current position until the game ends.
    ///
    /// The board is written to `out` before the first move and after every move.
    #[instrument(level = "info", skip_all)]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome, GameError> {
        write!(out, "{}", self.board)?;

        while let Some(mv) = self.play_best() {
            debug!(%mv, "engine move");
            writeln!(out)?;
            write!(out, "{}", self.board)?;
        }

        writeln!(out, "\nGame over")?;

        // play_best only stops once the board is terminal.
        let outcome = self.outcome().unwrap_or(Outcome::Draw);
        info!(%outcome, moves = self.history.len(), "game finished");
        Ok(outcome)
    }

    /// Open with a human move for player one at `(x, y)`, then let the engine
    /// finish the game.
    pub fn run_from<W: Write>(
        &mut self,
        x: usize,
        y: usize,
        out: &mut W,
    ) -> Result<Outcome, GameError> {
        let mv = Move::new(x, y);
        if !mv.in_bounds::<N>() {
            return Err(MoveError::OutOfRange { x, y, size: N }.into());
        }
        self.play(mv)?;
        self.run(out)
    }

    fn advance(&mut self, mv: Move) {
        self.history.push(mv);
        self.to_move = self.to_move.opponent();
    }
}
