//! Fixed-depth minimax over the shared game state.
//!
//! The Player maximizes and the Computer minimizes a single score. Every move
//! tried is applied through a scoped guard on the one `GameState`, so the
//! position is back to where it started whenever a call returns, including
//! when a limit cuts the search short.

use chess_core::{
    GameState, Move, PieceValues, SearchLimits, Side, has_legal_move, in_check, legal_moves_into,
};
use tracing::{debug, trace};

use crate::eval::{evaluate, mate_score};

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found with its score (None if `side` has no legal move)
    pub best_move: Option<(Move, i32)>,
    /// True if a limit stopped the search before every root move was scored
    pub stopped: bool,
}

/// True if `score` is strictly better for `side` than `best`. Ties keep the
/// move found first.
#[inline]
fn improves(side: Side, score: i32, best: i32) -> bool {
    match side {
        Side::Player => score > best,
        Side::Computer => score < best,
    }
}

/// Best move for `side` looking `depth` plies ahead, with no other limit.
///
/// Returns `None` when `side` has no legal move. `state` is restored before
/// this returns.
pub fn choose_move(
    state: &mut GameState,
    side: Side,
    depth: u8,
    values: &PieceValues,
) -> Option<(Move, i32)> {
    let mut nodes = 0;
    pick_best_move(state, side, &SearchLimits::depth(depth), values, &mut nodes).best_move
}

/// Searches every legal root move of `side` and returns the best with its
/// score.
///
/// When a node or time budget in `limits` runs out, the search unwinds and
/// reports the best root move whose subtree was finished. If none was, the
/// first legal move is returned with the static evaluation of the position.
pub fn pick_best_move(
    state: &mut GameState,
    side: Side,
    limits: &SearchLimits,
    values: &PieceValues,
    nodes: &mut u64,
) -> SearchOutcome {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, side, &mut moves);

    let Some(&first) = moves.first() else {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    };

    let mut best: Option<(Move, i32)> = None;
    let mut stopped = false;

    for mv in moves {
        let (score, was_stopped) = {
            let mut child = state.scoped(mv);
            *nodes += 1;
            minimax(
                &mut child,
                side.other(),
                limits.depth.saturating_sub(1),
                values,
                limits,
                nodes,
            )
        };

        if was_stopped {
            stopped = true;
            break;
        }

        trace!(%mv, score, "root move");
        if best.is_none_or(|(_, b)| improves(side, score, b)) {
            best = Some((mv, score));
        }
    }

    let best_move = best.unwrap_or_else(|| (first, evaluate(&state.board, values)));
    debug!(
        %side,
        depth = limits.depth,
        nodes = *nodes,
        stopped,
        best = %best_move.0,
        score = best_move.1,
        "search finished"
    );

    SearchOutcome {
        best_move: Some(best_move),
        stopped,
    }
}

/// Every legal move of `side` paired with its minimax score, in generation
/// order.
pub fn score_moves(
    state: &mut GameState,
    side: Side,
    depth: u8,
    values: &PieceValues,
) -> Vec<(Move, i32)> {
    let limits = SearchLimits::depth(depth);
    let mut nodes = 0;
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, side, &mut moves);

    moves
        .into_iter()
        .map(|mv| {
            let mut child = state.scoped(mv);
            let (score, _) = minimax(
                &mut child,
                side.other(),
                depth.saturating_sub(1),
                values,
                &limits,
                &mut nodes,
            );
            (mv, score)
        })
        .collect()
}

/// Recursive minimax. `side` is the side to move at this node.
///
/// Returns (score, stopped) where stopped indicates the search was aborted by
/// a limit and the score must be discarded.
fn minimax(
    state: &mut GameState,
    side: Side,
    depth: u8,
    values: &PieceValues,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> (i32, bool) {
    if limits.exhausted(*nodes) {
        return (0, true);
    }

    if depth == 0 {
        if has_legal_move(state, side) {
            return (evaluate(&state.board, values), false);
        }
        return (terminal_score(state, side, values), false);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, side, &mut moves);

    if moves.is_empty() {
        return (terminal_score(state, side, values), false);
    }

    let mut best: Option<i32> = None;

    for mv in moves {
        let mut child = state.scoped(mv);
        *nodes += 1;

        let (score, stopped) = minimax(&mut child, side.other(), depth - 1, values, limits, nodes);
        if stopped {
            return (0, true);
        }

        if best.is_none_or(|b| improves(side, score, b)) {
            best = Some(score);
        }
    }

    (best.unwrap_or(0), false)
}

/// Score of a node where `side` has no legal move. A stalemate is level
/// material, which on this scale is the kings-only baseline.
fn terminal_score(state: &GameState, side: Side, values: &PieceValues) -> i32 {
    if in_check(&state.board, side) {
        mate_score(&state.board, values, side)
    } else {
        values.baseline()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
