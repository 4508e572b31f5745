//! Integration tests for the board and the minimax search.
//!
//! Positions are built by placing marks directly, then checked against
//! hand-verified scores and moves.

use minimax_ttt::board::{Board, Cell, Move, Player};
use minimax_ttt::minimax::{Minimax, best_move};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place player one's marks, then player two's.
fn setpos<const N: usize>(ones: &[(usize, usize)], twos: &[(usize, usize)]) -> Board<N> {
    let mut board = Board::new();
    for &(x, y) in ones {
        board.set_for_player(Player::One, x, y);
    }
    for &(x, y) in twos {
        board.set_for_player(Player::Two, x, y);
    }
    board
}

/// Snapshot of everything the search relies on.
fn summary<const N: usize>(board: &Board<N>) -> (usize, bool, bool, bool, bool, bool) {
    (
        board.occupied(),
        board.is_full(),
        board.is_win_in_row(),
        board.is_win_in_column(),
        board.is_win_in_diagonal(),
        board.is_game_end(),
    )
}

// =============================================================================
// Board tests
// =============================================================================

#[test]
fn test_all_x_top_row_ends_game() {
    // The top printed line is y = 0.
    let board: Board<3> = setpos(&[(0, 0), (1, 0), (2, 0)], &[]);
    assert!(board.is_game_end());
    assert_eq!(board.to_string().lines().next(), Some(" | X | X | X | "));
}

#[test]
fn test_mixed_lines_do_not_end_game() {
    let board: Board<3> = setpos(&[(0, 0), (2, 0), (1, 1)], &[(1, 0), (2, 2)]);
    assert!(!board.is_game_end());

    let board: Board<3> = setpos(&[(0, 0), (1, 0)], &[]);
    assert!(!board.is_game_end());
}

#[test]
fn test_set_then_clear_is_identity() {
    let base: Board<3> = setpos(&[(0, 0), (0, 1)], &[(1, 1)]);
    for player in [Player::One, Player::Two] {
        for mv in base.empty_fields() {
            let mut board = base.clone();
            board.set_for_player(player, mv.x, mv.y);
            board.clear(mv.x, mv.y);
            assert_eq!(summary(&board), summary(&base), "{player} at {mv}");
            assert_eq!(board, base);
        }
    }
}

#[test]
fn test_linear_id_and_coordinates_agree() {
    for id in 1..=16 {
        let mv = Move::from_id::<4>(id).unwrap();
        let mut by_id = Board::<4>::new();
        by_id.set_for_player_id(Player::One, id);
        let mut by_xy = Board::<4>::new();
        by_xy.set_for_player(Player::One, mv.x, mv.y);
        assert_eq!(by_id, by_xy);
        assert_eq!(mv.to_id::<4>(), id);
    }
}

// =============================================================================
// Search tests
// =============================================================================

#[test]
fn test_perfect_play_from_empty_board_is_draw() {
    let mut board = Board::<3>::new();
    assert_eq!(Minimax::new(&mut board).minimax(0, Player::One), 0);
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_best_move_is_always_empty_cell() {
    // Every position reachable after two plies.
    for first in 1..=9 {
        for second in 1..=9 {
            if first == second {
                continue;
            }
            let mut board = Board::<3>::new();
            board.set_for_player_id(Player::One, first);
            board.set_for_player_id(Player::Two, second);
            let before = board.clone();

            let mv = best_move(&mut board, Player::One).expect("position has empty cells");
            assert!(
                before.is_field_empty(mv.x, mv.y),
                "{mv} is taken after {first}, {second}"
            );
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_best_move_is_deterministic() {
    let mut board: Board<3> = setpos(&[(1, 1)], &[]);
    let first = best_move(&mut board, Player::Two);
    for _ in 0..3 {
        assert_eq!(best_move(&mut board, Player::Two), first);
    }
    assert_eq!(first, Some(Move::new(0, 0)));
}

#[test]
fn test_first_move_on_empty_board_is_first_cell() {
    // Every opening draws, so the scan-order tie-break picks (0, 0).
    let mut board = Board::<3>::new();
    let result = Minimax::new(&mut board).best_move(Player::One).unwrap();
    assert_eq!(result.mv, Move::new(0, 0));
    assert_eq!(result.score, 0);
}

#[test]
fn test_score_scales_with_depth() {
    // X to move completes column x = 0; the win lands one ply below `depth`.
    let mut board: Board<3> = setpos(&[(0, 0), (0, 1)], &[(1, 0), (1, 1)]);
    for depth in 0..4 {
        let score = Minimax::new(&mut board).minimax(depth, Player::One);
        assert_eq!(score, -(9 - (depth as i32 + 1)));
    }
}

#[test]
fn test_prefers_faster_win() {
    // X can win at once on (2, 2) via the diagonal.
    let mut board: Board<3> = setpos(&[(0, 0), (1, 1)], &[(0, 1), (1, 0)]);
    let result = Minimax::new(&mut board).best_move(Player::One).unwrap();
    assert_eq!(result.mv, Move::new(2, 2));
    assert_eq!(result.score, -9);
}

#[test]
fn test_full_board_has_no_move() {
    let mut board: Board<3> = setpos(
        &[(0, 0), (0, 1), (1, 2), (2, 0), (2, 2)],
        &[(0, 2), (1, 0), (1, 1), (2, 1)],
    );
    assert_eq!(best_move(&mut board, Player::One), None);
}

#[test]
fn test_4x4_near_full_board() {
    // X holds three of the main diagonal; (3, 3) completes the whole line.
    let mut board: Board<4> = setpos(
        &[(0, 0), (0, 2), (1, 1), (2, 1), (2, 2), (3, 0)],
        &[(0, 1), (0, 3), (1, 0), (1, 2), (2, 0), (3, 1)],
    );
    assert_eq!(board.occupied(), 12);
    assert!(!board.is_game_end());

    let result = Minimax::new(&mut board).best_move(Player::One).unwrap();
    assert_eq!(result.mv, Move::new(3, 3));
    assert_eq!(result.score, -16);
    assert_eq!(board.get(3, 3), Cell::Empty);
    assert_eq!(board.occupied(), 12);
}
