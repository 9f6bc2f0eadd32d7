use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_startpos_enumeration_order() {
    // Origins a1..h8, targets ascending: the b1 knight comes first,
    // then the g1 knight, then pawns a2..h2.
    let pos = Position::startpos();
    let uci: Vec<String> = legal_moves(&pos).iter().map(|m| m.to_string()).collect();
    assert_eq!(
        &uci[..6],
        &["b1a3", "b1c3", "g1f3", "g1h3", "a2a3", "a2a4"]
    );
    assert_eq!(uci.last().map(String::as_str), Some("h2h4"));
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    assert_eq!(legal_moves(&pos).len(), 48);
}

#[test]
fn test_promotion_order() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let promos: Vec<String> = legal_moves(&pos)
        .iter()
        .filter(|m| m.promo.is_some())
        .map(|m| m.to_string())
        .collect();
    assert_eq!(promos, vec!["e7e8q", "e7e8r", "e7e8b", "e7e8n"]);
}

#[test]
fn test_no_castling_through_check() {
    // Black rook on f8 covers f1
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(!moves.iter().any(|m| m.is_castle && m.to == 6));
    assert!(moves.iter().any(|m| m.is_castle && m.to == 2));
}

#[test]
fn test_en_passant_generated() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().any(|m| m.is_en_passant && m.to_string() == "e5d6"));
}

#[test]
fn test_has_legal_move() {
    assert!(has_legal_move(&Position::startpos()));
    let stalemate = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert!(!has_legal_move(&stalemate));
}
