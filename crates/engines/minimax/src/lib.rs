//! Minimax Chess Engine
//!
//! Fixed-depth minimax over the signed material score, with a caller policy
//! that decides when the Computer resigns or steers for a stalemate.

pub mod config;
mod eval;
pub mod policy;
mod search;

use chess_core::{
    Engine, GameState, Move, SearchLimits, SearchResult, Side, has_legal_move, in_check,
    legal_moves,
};
use tracing::info;

pub use config::{ConfigError, EngineConfig};
pub use eval::{evaluate, mate_score};
pub use policy::{ResignPolicy, Stance};
pub use search::{SearchOutcome, choose_move, pick_best_move, score_moves};

/// What the engine does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Play { mv: Move, score: i32 },
    Resign { score: i32 },
    /// The side to move has no legal move; the game is already over.
    NoMoves,
}

/// Minimax engine configured from an [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    policy: ResignPolicy,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        let policy = ResignPolicy::from_config(&config);
        Self {
            config,
            policy,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches for the side to move and applies the resignation policy.
    ///
    /// Does not play the move; `state` is unchanged on return.
    pub fn respond(&mut self, state: &mut GameState) -> Response {
        let side = state.side_to_move;
        let limits = self.config.limits();
        let result = self.search(state, side, &limits);
        let Some(mv) = result.best_move else {
            return Response::NoMoves;
        };

        match self.policy.judge(side, result.score) {
            Stance::Resign => {
                info!(%side, score = result.score, "resigning lost position");
                Response::Resign {
                    score: result.score,
                }
            }
            Stance::PreferDraw => match stalemating_move(state, side) {
                Some(draw) => {
                    info!(%side, mv = %draw, score = result.score, "steering for stalemate");
                    Response::Play {
                        mv: draw,
                        score: self.policy.baseline,
                    }
                }
                None => Response::Play {
                    mv,
                    score: result.score,
                },
            },
            Stance::Play => Response::Play {
                mv,
                score: result.score,
            },
        }
    }
}

/// First legal move of `side` that leaves the opponent stalemated.
pub fn stalemating_move(state: &mut GameState, side: Side) -> Option<Move> {
    let opponent = side.other();
    legal_moves(state, side).into_iter().find(|&mv| {
        let mut after = state.scoped(mv);
        !in_check(&after.board, opponent) && !has_legal_move(&mut after, opponent)
    })
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &mut GameState, side: Side, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = pick_best_move(
            state,
            side,
            limits,
            &self.config.piece_values,
            &mut self.nodes,
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
