use crate::{movegen::legal_moves_into, state::GameState, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, always
/// moving for the side to move. The state is restored before returning.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        let side = state.side_to_move;
        legal_moves_into(state, side, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut child = state.scoped(mv);
            nodes += inner(&mut child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}
