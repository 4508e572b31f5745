//! Minimax-TTT: optimal N×N tic-tac-toe by exhaustive minimax.
//!
//! The engine searches every continuation to a terminal position, mutating a
//! single board in place and undoing each trial move, and returns the move
//! that is best under perfect play from both sides.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimension, render marks, console commands
//! - [`board`] - Board state, moves and win detection
//! - [`minimax`] - Full-depth minimax search
//! - [`game`] - Turn-taking driver
//! - [`console`] - Text protocol for playing against the engine
//!
//! ## Example
//!
//! ```
//! use minimax_ttt::board::{Board, Player};
//! use minimax_ttt::minimax::best_move;
//!
//! let mut board = Board::<3>::new();
//! board.set_for_player(Player::One, 1, 1);
//!
//! let reply = best_move(&mut board, Player::Two).unwrap();
//! println!("Best reply: {reply}");
//! assert_eq!(board.occupied(), 1);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod minimax;
