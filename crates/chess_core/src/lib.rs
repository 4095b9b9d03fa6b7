pub mod attacks;
pub mod board;
pub mod castling;
pub mod descriptor;
pub mod en_passant;
pub mod error;
pub mod executor;
pub mod fen;
pub mod movegen;
pub mod outcome;
pub mod perft;
pub mod state;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use castling::can_castle;
pub use descriptor::*;
pub use en_passant::*;
pub use error::*;
pub use executor::{Scoped, UndoRecord, apply, undo};
pub use movegen::*;
pub use outcome::*;
pub use perft::perft;
pub use state::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the best move; positive favours the Player, negative the Computer
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was cut short by a limit
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Choose a move for `side`.
    ///
    /// `state` may be mutated during the search but is restored before this
    /// returns.
    fn search(&mut self, state: &mut GameState, side: Side, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
