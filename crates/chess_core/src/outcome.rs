use crate::movegen::legal_moves_into;
use crate::state::{GameResult, GameState};
use crate::types::Side;

/// How a game ends when the side to move has no legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Side },
    Stalemate,
}

impl From<Outcome> for GameResult {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Checkmate { winner } => GameResult::Checkmate { winner },
            Outcome::Stalemate => GameResult::Stalemate,
        }
    }
}

/// `None` while the side to move still has a legal move.
pub fn outcome(state: &GameState) -> Option<Outcome> {
    let mut tmp = state.clone();
    let mut moves = Vec::with_capacity(64);
    let side = state.side_to_move;
    legal_moves_into(&mut tmp, side, &mut moves);
    if !moves.is_empty() {
        return None;
    }
    Some(if state.in_check(side) {
        Outcome::Checkmate {
            winner: side.other(),
        }
    } else {
        Outcome::Stalemate
    })
}
