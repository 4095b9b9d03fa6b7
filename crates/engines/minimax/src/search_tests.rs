use super::*;
use chess_core::{PieceKind, Square, legal_moves};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_pawn_takes_hanging_queen_at_depth_one() {
    // Computer pawn d5 can take the Player queen on e4.
    let mut state = GameState::from_fen("k7/8/8/3p4/4Q3/8/8/7K b - - 0 1").unwrap();
    let values = PieceValues::default();

    let scored = score_moves(&mut state, Side::Computer, 1, &values);
    let (capture, capture_score) = scored
        .iter()
        .copied()
        .find(|(m, _)| m.from == sq("d5") && m.to == sq("e4"))
        .unwrap();
    assert_eq!(capture.capture.map(|p| p.kind), Some(PieceKind::Queen));
    assert_eq!(capture_score, -2600);
    for &(mv, score) in scored.iter().filter(|(m, _)| !m.is_capture()) {
        assert!(capture_score < score, "{mv} scored {score}");
    }

    let (best, score) = choose_move(&mut state, Side::Computer, 1, &values).unwrap();
    assert_eq!(best, capture);
    assert_eq!(score, capture_score);
}

#[test]
fn test_player_finds_back_rank_mate() {
    let mut state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1").unwrap();
    let values = PieceValues::default();
    let (best, score) = choose_move(&mut state, Side::Player, 1, &values).unwrap();
    assert_eq!((best.from, best.to), (sq("d1"), sq("d8")));
    // Material after the move, with the Computer king's sentinel removed.
    assert_eq!(score, (-2500 + 500 - 300) + 7500);
}

#[test]
fn test_computer_finds_back_rank_mate() {
    let mut state = GameState::from_fen("3r2k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let values = PieceValues::default();
    let (best, score) = choose_move(&mut state, Side::Computer, 1, &values).unwrap();
    assert_eq!((best.from, best.to), (sq("d8"), sq("d1")));
    assert_eq!(score, (-2500 - 500 + 300) - 5000);
}

#[test]
fn test_stalemating_move_scores_baseline() {
    let mut state = GameState::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    let values = PieceValues::default();
    let scored = score_moves(&mut state, Side::Player, 1, &values);
    let (_, stalemate) = scored
        .iter()
        .copied()
        .find(|(m, _)| m.from == sq("b5") && m.to == sq("b6"))
        .unwrap();
    assert_eq!(stalemate, values.baseline());
    // Keeping the queen on the board still scores better for the Player.
    assert!(scored.iter().any(|&(_, s)| s > stalemate));
}

#[test]
fn test_no_move_when_side_has_none() {
    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let values = PieceValues::default();
    assert_eq!(choose_move(&mut state, Side::Computer, 3, &values), None);
}

#[test]
fn test_ties_go_to_first_generated_move() {
    let mut state = GameState::new();
    let values = PieceValues::default();
    let first = legal_moves(&state, Side::Player)[0];
    let (best, score) = choose_move(&mut state, Side::Player, 1, &values).unwrap();
    assert_eq!(best, first);
    assert_eq!(score, values.baseline());
}

#[test]
fn test_search_restores_state() {
    let mut state =
        GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let before = state.clone();
    let values = PieceValues::default();
    choose_move(&mut state, Side::Player, 2, &values).unwrap();
    assert_eq!(state, before);
}

#[test]
fn test_computer_saves_attacked_queen() {
    // The Computer queen on d4 is attacked by the pawn on e3; taking the
    // pawn is the only line that keeps the queen two plies out.
    let mut state = GameState::from_fen("k7/8/8/8/3q4/4P3/8/7K b - - 0 1").unwrap();
    let values = PieceValues::default();
    let (best, score) = choose_move(&mut state, Side::Computer, 2, &values).unwrap();
    assert_eq!((best.from, best.to), (sq("d4"), sq("e3")));
    assert_eq!(score, -2500 - 900);
}

#[test]
fn test_node_limit_stops_and_falls_back() {
    let mut state = GameState::new();
    let before = state.clone();
    let values = PieceValues::default();
    let limits = SearchLimits::depth(4).with_node_limit(50);
    let mut nodes = 0;
    limits.start();
    let outcome = pick_best_move(&mut state, Side::Player, &limits, &values, &mut nodes);

    assert!(outcome.stopped);
    let (mv, score) = outcome.best_move.unwrap();
    assert_eq!(mv, legal_moves(&before, Side::Player)[0]);
    assert_eq!(score, values.baseline());
    assert_eq!(state, before);
}

#[test]
fn test_stopped_flag_from_outside_halts_search() {
    let mut state = GameState::new();
    let limits = SearchLimits::depth(6);
    limits.start();
    limits.time_control.stop();
    let mut nodes = 0;
    let outcome = pick_best_move(
        &mut state,
        Side::Computer,
        &limits,
        &PieceValues::default(),
        &mut nodes,
    );
    assert!(outcome.stopped);
    assert!(outcome.best_move.is_some());
    assert_eq!(state, GameState::new());
}
