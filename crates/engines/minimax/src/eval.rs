//! Material evaluation on a single signed scale.

use chess_core::{Board, PieceValues, Side};

/// Sum of the signed values of every piece on the board, kings included.
///
/// Positive favours the Player, negative the Computer. With both kings on
/// the board the result is offset by [`PieceValues::baseline`].
pub fn evaluate(board: &Board, values: &PieceValues) -> i32 {
    board.material(values)
}

/// Score of a position in which `mated` has no legal move and is in check:
/// the material on the board with the mated king counted as already taken.
pub fn mate_score(board: &Board, values: &PieceValues, mated: Side) -> i32 {
    evaluate(board, values) - values.king(mated)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
