//! Line-oriented console protocol for playing against the engine.
//!
//! Every request is one line: an optional numeric id, a command and its
//! arguments. Responses start with `=` on success or `?` on failure, followed
//! by the id (if any) and the response text, and end with a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Start a new game, player one to move
//! - `play <id>` / `play <x> <y>` - Play a move for the side to move
//! - `genmove` - Let the engine move for the side to move
//! - `showboard` - Render the board
//! - `status` - Report the side to move or the result
//!
//! ## Example
//!
//! ```
//! use minimax_ttt::console::ConsoleEngine;
//!
//! let mut engine = ConsoleEngine::new();
//! let mut out = Vec::new();
//! engine.run_with("play 5\ngenmove\nquit\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("= (0, 0)"));
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::Move;
use crate::constants::{ENGINE_NAME, KNOWN_COMMANDS, N};
use crate::game::TicTacToe;

/// Console session state.
pub struct ConsoleEngine {
    game: TicTacToe<N>,
}

impl Default for ConsoleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleEngine {
    pub fn new() -> Self {
        Self {
            game: TicTacToe::new(),
        }
    }

    /// Current game.
    pub fn game(&self) -> &TicTacToe<N> {
        &self.game
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout)
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(out, "{prefix}{id_str} {message}\n")?;
            out.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional leading numeric id from the command.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    /// Parse `<id>` or `<x> <y>` into a move.
    fn parse_move(args: &[&str]) -> Result<Move, String> {
        match args {
            [id] => {
                let id = id
                    .parse::<usize>()
                    .map_err(|_| format!("invalid field id: {id}"))?;
                Move::from_id::<N>(id).map_err(|e| e.to_string())
            }
            [x, y] => {
                let x = x
                    .parse::<usize>()
                    .map_err(|_| format!("invalid coordinate: {x}"))?;
                let y = y
                    .parse::<usize>()
                    .map_err(|_| format!("invalid coordinate: {y}"))?;
                Ok(Move::new(x, y))
            }
            [] => Err("missing argument".to_string()),
            _ => Err("too many arguments".to_string()),
        }
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game = TicTacToe::new();
                (true, String::new())
            }

            "play" => {
                let mv = match Self::parse_move(args) {
                    Ok(mv) => mv,
                    Err(msg) => return (false, msg),
                };
                match self.game.play(mv) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => match self.game.play_best() {
                Some(mv) => (true, mv.to_string()),
                None => (false, "game is already over".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.game.board())),

            "status" => match self.game.outcome() {
                Some(outcome) => (true, outcome.to_string()),
                None => (true, format!("{} to move", self.game.to_move())),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
