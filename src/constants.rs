//! Constants for board dimensions, rendering marks and the console protocol.
//!
//! The engine searches every position to a terminal state, so the default
//! board is the classic 3x3. Larger boards are representable through the
//! const-generic [`Board`](crate::board::Board) but are only searchable from
//! positions with a handful of empty cells left.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) used by the binary and the console.
pub const N: usize = 3;

/// Number of cells on the default board, which is also the maximum search depth.
pub const CELLS: usize = N * N;

// =============================================================================
// Rendering
// =============================================================================

/// Mark printed for player one.
pub const MARK_P1: char = 'X';

/// Mark printed for player two.
pub const MARK_P2: char = 'O';

/// Mark printed for an empty cell.
pub const MARK_EMPTY: char = ' ';

// =============================================================================
// Console Protocol
// =============================================================================

/// Engine name reported by the `name` command.
pub const ENGINE_NAME: &str = "minimax-ttt";

/// The list of known console commands.
pub const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "quit",
    "showboard",
    "status",
    "version",
];
