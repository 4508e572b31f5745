//! Exhaustive minimax search.
//!
//! The search walks every continuation down to a terminal position, placing
//! and retracting marks on the caller's [`Board`] rather than copying it.
//! There is no pruning, no transposition table and no heuristic evaluation:
//! an empty 3x3 board costs roughly 550k nodes, and each extra cell multiplies
//! that by the branching factor, so only tiny boards (or nearly full larger
//! ones) are practical.
//!
//! ## Scores
//!
//! A won position is scored from the side to move:
//! - player one to move means player two just completed a line: `+(N² - depth)`
//! - player two to move means player one just completed a line: `-(N² - depth)`
//!
//! Positive values favour player two, negative values favour player one, and
//! shallower wins carry a larger magnitude. A full board without a line is 0.
//! Player one minimizes, player two maximizes.

use tracing::{debug, instrument};

use crate::board::{Board, Move, Player};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move.
    pub mv: Move,
    /// Raw minimax score of the position after `mv` (positive favours player two).
    pub score: i32,
    /// Nodes visited while searching.
    pub nodes: u64,
}

/// Minimax searcher holding exclusive access to a board for one search.
pub struct Minimax<'a, const N: usize> {
    board: &'a mut Board<N>,
    nodes: u64,
}

impl<'a, const N: usize> Minimax<'a, N> {
    pub fn new(board: &'a mut Board<N>) -> Self {
        Self { board, nodes: 0 }
    }

    /// Nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for `to_move`.
    ///
    /// Empty cells are tried in scan order (`x` outer, `y` inner) and the first
    /// strictly better candidate wins ties. Candidates are compared from the
    /// mover's point of view, so both players maximize here.
    ///
    /// Returns `None` if the position is already terminal: a completed line
    /// or a full board.
    pub fn best_move(&mut self, to_move: Player) -> Option<SearchResult> {
        if self.board.is_game_end() {
            return None;
        }

        let mut best: Option<(Move, i32)> = None;

        for x in 0..N {
            for y in 0..N {
                if !self.board.is_field_empty(x, y) {
                    continue;
                }
                let score = self.probe(to_move, x, y, 0);
                let better = match best {
                    Some((_, best_score)) => {
                        for_mover(to_move, score) > for_mover(to_move, best_score)
                    }
                    None => true,
                };
                if better {
                    best = Some((Move::new(x, y), score));
                }
            }
        }

        best.map(|(mv, score)| SearchResult {
            mv,
            score,
            nodes: self.nodes,
        })
    }

    /// Score the current position with `to_move` to play, `depth` plies below
    /// the search root.
    ///
    /// `depth` must not exceed `N²`.
    pub fn minimax(&mut self, depth: usize, to_move: Player) -> i32 {
        debug_assert!(
            depth <= self.board.max_depth(),
            "depth {depth} exceeds {} cells",
            self.board.max_depth()
        );
        self.nodes += 1;

        if self.board.is_game_end() {
            let remaining = (self.board.max_depth() - depth) as i32;
            return match to_move {
                Player::One => remaining,
                Player::Two => -remaining,
            };
        }
        if self.board.is_full() {
            return 0;
        }

        let mut best = match to_move {
            Player::One => i32::MAX,
            Player::Two => i32::MIN,
        };
        for x in 0..N {
            for y in 0..N {
                if !self.board.is_field_empty(x, y) {
                    continue;
                }
                let score = self.probe(to_move, x, y, depth + 1);
                best = match to_move {
                    Player::One => best.min(score),
                    Player::Two => best.max(score),
                };
            }
        }
        best
    }

    /// Place `player` on `(x, y)`, score the reply and take the mark back.
    #[inline]
    fn probe(&mut self, player: Player, x: usize, y: usize, depth: usize) -> i32 {
        self.board.set_for_player(player, x, y);
        let score = self.minimax(depth, player.opponent());
        self.board.clear(x, y);
        score
    }
}

/// Flip a raw score so that larger is better for `player`.
#[inline]
fn for_mover(player: Player, score: i32) -> i32 {
    match player {
        Player::One => -score,
        Player::Two => score,
    }
}

/// Compute the best move for `to_move` on `board`.
///
/// The board is left exactly as it was passed in.
#[instrument(level = "debug", skip(board))]
pub fn best_move<const N: usize>(board: &mut Board<N>, to_move: Player) -> Option<Move> {
    let result = Minimax::new(board).best_move(to_move)?;
    debug!(
        mv = %result.mv,
        score = result.score,
        nodes = result.nodes,
        "search finished"
    );
    Some(result.mv)
}
