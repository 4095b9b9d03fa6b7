use super::*;
use crate::error::{CastlingError, EnPassantError};
use crate::state::GameResult;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_resolve_by_destination_and_piece() {
    let mut state = GameState::new();
    let desc = MoveDescriptor::to(sq("f3")).with_piece(PieceKind::Knight);
    let mv = resolve(&mut state, &desc).unwrap();
    assert_eq!(mv.from, sq("g1"));
    assert_eq!(state, GameState::new());
}

#[test]
fn test_resolve_reports_ambiguity() {
    // Both rooks can reach d1.
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    state.board.set(sq("e1"), None);
    state
        .board
        .set(sq("e2"), Some(Piece::new(Side::Player, PieceKind::King)));
    let desc = MoveDescriptor::to(sq("d1")).with_piece(PieceKind::Rook);
    assert_eq!(
        resolve(&mut state, &desc),
        Err(MoveError::Ambiguous {
            to: sq("d1"),
            count: 2
        })
    );

    let mut by_file = desc;
    by_file.from_file = Some(0);
    assert_eq!(resolve(&mut state, &by_file).unwrap().from, sq("a1"));
}

#[test]
fn test_resolve_rejects_unreachable_square() {
    let mut state = GameState::new();
    let desc = MoveDescriptor::from_to(sq("e2"), sq("e5"));
    assert_eq!(
        resolve(&mut state, &desc),
        Err(MoveError::NoSuchMove(sq("e5")))
    );
}

#[test]
fn test_resolve_rejects_self_check() {
    let mut state = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let before = state.clone();
    let desc = MoveDescriptor::from_to(sq("e2"), sq("d3"));
    assert_eq!(
        resolve(&mut state, &desc),
        Err(MoveError::LeavesKingInCheck)
    );
    assert_eq!(state, before);
}

#[test]
fn test_resolve_promotion_choice() {
    let mut state = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let default = resolve(&mut state, &MoveDescriptor::from_to(sq("a7"), sq("a8"))).unwrap();
    assert_eq!(default.promotion(), Some(PieceKind::Queen));

    let knight = MoveDescriptor::from_to(sq("a7"), sq("a8")).with_promotion(PieceKind::Knight);
    assert_eq!(
        resolve(&mut state, &knight).unwrap().promotion(),
        Some(PieceKind::Knight)
    );

    let king = MoveDescriptor::from_to(sq("a7"), sq("a8")).with_promotion(PieceKind::King);
    assert_eq!(
        resolve(&mut state, &king),
        Err(MoveError::InvalidPromotion(PieceKind::King))
    );
}

#[test]
fn test_castling_refusal_names_reason() {
    let mut state = GameState::from_fen("r3k2r/8/b7/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let desc = MoveDescriptor::castle(Side::Player, Wing::Kingside);
    assert_eq!(
        resolve(&mut state, &desc),
        Err(MoveError::Castling(CastlingError::ThroughCheck))
    );

    let mut moved = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").unwrap();
    assert_eq!(
        resolve(&mut moved, &desc),
        Err(MoveError::Castling(CastlingError::KingOrRookMoved))
    );
}

#[test]
fn test_en_passant_refusal_names_reason() {
    let mut late = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").unwrap();
    let desc = MoveDescriptor::from_to(sq("e5"), sq("d6"));
    assert_eq!(
        resolve(&mut late, &desc),
        Err(MoveError::EnPassant(EnPassantError::NoDoubleAdvance))
    );

    let mut pinned = GameState::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1").unwrap();
    assert_eq!(
        resolve(&mut pinned, &desc),
        Err(MoveError::EnPassant(EnPassantError::DiscoveredCheck))
    );
}

#[test]
fn test_play_reports_check_and_mate() {
    // Fool's mate.
    let mut state = GameState::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        let played = play(&mut state, &MoveDescriptor::from_to(sq(from), sq(to))).unwrap();
        assert!(!played.gives_check);
        assert_eq!(played.outcome, None);
    }
    let mate = play(&mut state, &MoveDescriptor::from_to(sq("d8"), sq("h4"))).unwrap();
    assert!(mate.gives_check);
    assert_eq!(
        mate.outcome,
        Some(Outcome::Checkmate {
            winner: Side::Computer
        })
    );
    assert_eq!(
        state.result,
        GameResult::Checkmate {
            winner: Side::Computer
        }
    );

    let after = state.clone();
    assert_eq!(
        play(&mut state, &MoveDescriptor::to(sq("e3"))),
        Err(MoveError::GameOver)
    );
    assert_eq!(state, after);
}
