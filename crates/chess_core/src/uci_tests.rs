use super::*;

#[test]
fn test_move_display() {
    assert_eq!(Move::new(12, 28).to_string(), "e2e4");
    assert_eq!(Move::promotion(52, 60, PieceKind::Queen).to_string(), "e7e8q");
}

#[test]
fn test_parse_uci_move_sets_flags() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1g1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_parse_uci_move_errors() {
    let pos = Position::startpos();
    assert_eq!(
        parse_uci_move(&pos, "e2"),
        Err(UciError::MalformedMove("e2".to_string()))
    );
    assert_eq!(
        parse_uci_move(&pos, "e2e5"),
        Err(UciError::IllegalMove("e2e5".to_string()))
    );
    assert!(matches!(
        parse_uci_move(&pos, "e2e4k"),
        Err(UciError::MalformedMove(_))
    ));
}

#[test]
fn test_set_position_startpos_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
    assert_eq!(pos.ply(), 3);
}

#[test]
fn test_set_position_fen() {
    let mut pos = Position::startpos();
    let args = ["fen", "4k3/8/8/8/8/8/4P3/4K3", "w", "-", "-", "0", "1", "moves", "e2e4"];
    set_position_from_uci(&mut pos, &args).unwrap();
    assert_eq!(pos.to_fen(), "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
}

#[test]
fn test_set_position_error_leaves_position() {
    let mut pos = Position::startpos();
    let before = pos.to_fen();
    let result = set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e2e4"]);
    assert!(matches!(result, Err(UciError::IllegalMove(_))));
    assert_eq!(pos.to_fen(), before);

    assert!(matches!(
        set_position_from_uci(&mut pos, &["kiwipete"]),
        Err(UciError::UnknownSetup(_))
    ));
}
