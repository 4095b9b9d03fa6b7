use super::*;

#[test]
fn test_standard_material_is_kings_only() {
    let values = PieceValues::default();
    assert_eq!(Board::standard().material(&values), values.baseline());
}

#[test]
fn test_snapshot_is_rank_major() {
    let grid = Board::standard().snapshot();
    assert_eq!(
        grid[0][4],
        Some(Piece::new(Side::Player, PieceKind::King))
    );
    assert_eq!(
        grid[7][3],
        Some(Piece::new(Side::Computer, PieceKind::Queen))
    );
    assert!(grid[3].iter().all(Option::is_none));
}

#[test]
fn test_display_diagram() {
    let text = Board::standard().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[4], "4 . . . . . . . .");
    assert_eq!(lines[7], "1 R N B Q K B N R");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_take_empties_square() {
    let mut board = Board::standard();
    let e2: Square = "e2".parse().unwrap();
    assert_eq!(board.take(e2).map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(board.is_empty(e2));
    assert_eq!(board.king_square(Side::Computer), "e8".parse().ok());
}
