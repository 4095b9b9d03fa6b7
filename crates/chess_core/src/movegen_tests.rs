use super::*;
use crate::attacks::in_check;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find(moves: &[Move], from: &str, to: &str) -> Option<Move> {
    moves
        .iter()
        .copied()
        .find(|m| m.from == sq(from) && m.to == sq(to))
}

#[test]
fn test_startpos_moves() {
    let state = GameState::new();
    let moves = legal_moves(&state, Side::Player);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    let doubles = moves
        .iter()
        .filter(|m| m.kind == MoveKind::PawnDoubleAdvance)
        .count();
    assert_eq!(doubles, 8);
}

#[test]
fn test_startpos_computer_moves() {
    let state = GameState::new();
    assert_eq!(legal_moves(&state, Side::Computer).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    let state =
        GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&state, Side::Player);
    assert_eq!(moves.len(), 48);
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
}

#[test]
fn test_slider_stops_at_own_piece_and_captures_enemy() {
    // Rook a1, own pawn a3, enemy knight d1.
    let state = GameState::from_fen("4k3/8/8/8/8/P7/8/R2nK3 w - - 0 1").unwrap();
    let moves = pseudo_legal_moves(&state, Side::Player);
    assert!(find(&moves, "a1", "a2").is_some());
    assert!(find(&moves, "a1", "a3").is_none());
    let capture = find(&moves, "a1", "d1").unwrap();
    assert_eq!(
        capture.capture,
        Some(Piece::new(Side::Computer, PieceKind::Knight))
    );
    assert!(find(&moves, "a1", "e1").is_none());
}

#[test]
fn test_knight_in_corner() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    let knight_moves: Vec<_> = pseudo_legal_moves(&state, Side::Player)
        .into_iter()
        .filter(|m| m.piece == PieceKind::Knight)
        .collect();
    assert_eq!(knight_moves.len(), 2);
}

#[test]
fn test_pawn_promotion_defaults_to_queen() {
    let state = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&state, Side::Player);
    let push = find(&moves, "a7", "a8").unwrap();
    assert_eq!(push.kind, MoveKind::Promotion(PieceKind::Queen));
    let capture = find(&moves, "a7", "b8").unwrap();
    assert_eq!(capture.kind, MoveKind::Promotion(PieceKind::Queen));
    assert!(capture.is_capture());
}

#[test]
fn test_computer_pawn_promotes_on_rank_one() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/6p1/K7 b - - 0 1").unwrap();
    let moves = legal_moves(&state, Side::Computer);
    let push = find(&moves, "g2", "g1").unwrap();
    assert_eq!(push.promotion(), Some(PieceKind::Queen));
}

#[test]
fn test_double_push_needs_both_squares_empty() {
    let state = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let moves = pseudo_legal_moves(&state, Side::Player);
    assert!(find(&moves, "e2", "e3").is_some());
    assert!(find(&moves, "e2", "e4").is_none());
}

#[test]
fn test_castling_candidates_follow_rights_only() {
    // f1 is attacked, so kingside is proposed but not legal.
    let state = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let pseudo = pseudo_legal_moves(&state, Side::Player);
    assert!(pseudo.iter().any(|m| m.kind == MoveKind::CastleKingside));
    let legal = legal_moves(&state, Side::Player);
    assert!(!legal.iter().any(|m| m.kind == MoveKind::CastleKingside));
    assert!(legal.iter().any(|m| m.kind == MoveKind::CastleQueenside));

    let no_rights = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    assert!(
        pseudo_legal_moves(&no_rights, Side::Player)
            .iter()
            .all(|m| m.castle_wing().is_none())
    );
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    // Bishop e2 pinned by rook e8 against king e1.
    let state = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&state, Side::Player);
    assert!(moves.iter().all(|m| m.piece != PieceKind::Bishop));
}

#[test]
fn test_legal_moves_never_leave_king_in_check() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ];
    for fen in fens {
        let mut state = GameState::from_fen(fen).unwrap();
        let side = state.side_to_move;
        for mv in legal_moves(&state, side) {
            let after = state.scoped(mv);
            assert!(!in_check(&after.board, side), "{mv} leaves king in check in {fen}");
        }
    }
}

#[test]
fn test_legal_moves_into_restores_state() {
    let mut state =
        GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let before = state.clone();
    let mut out = Vec::new();
    legal_moves_into(&mut state, Side::Player, &mut out);
    assert_eq!(state, before);
}

#[test]
fn test_has_legal_move_matches_full_generation() {
    let mut stalemate = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!has_legal_move(&mut stalemate, Side::Computer));
    let mut start = GameState::new();
    assert!(has_legal_move(&mut start, Side::Player));
    assert_eq!(start, GameState::new());
}

#[test]
fn test_en_passant_needs_opposing_pawn() {
    let mut state = GameState::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1").unwrap();
    // Recorded double advance with nothing on the square.
    state.en_passant.set(Side::Computer, sq("d5"));
    let moves = legal_moves(&state, Side::Player);
    assert!(moves.iter().all(|m| m.kind != MoveKind::EnPassantCapture));

    // A White pawn there is not a victim either.
    state
        .board
        .set(sq("d5"), Some(Piece::new(Side::Player, PieceKind::Pawn)));
    let moves = legal_moves(&state, Side::Player);
    assert!(moves.iter().all(|m| m.kind != MoveKind::EnPassantCapture));

    state
        .board
        .set(sq("d5"), Some(Piece::new(Side::Computer, PieceKind::Pawn)));
    let ep = find(&legal_moves(&state, Side::Player), "e5", "d6").unwrap();
    assert_eq!(ep.kind, MoveKind::EnPassantCapture);
}
