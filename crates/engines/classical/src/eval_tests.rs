use super::*;
use chess_core::Position;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

#[test]
fn startpos_is_balanced_for_every_evaluator() {
    let start = Position::startpos();
    for evaluator in Evaluator::ALL {
        assert_eq!(evaluator.evaluate(&start), 0, "{evaluator}");
    }
}

#[test]
fn material_counts_without_king() {
    // White has an extra rook
    let p = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(Evaluator::Material.evaluate(&p), 500);
    let p = pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(Evaluator::Material.evaluate(&p), 0);
}

#[test]
fn black_material_is_negative() {
    let p = pos("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(Evaluator::Material.evaluate(&p), -900);
}

#[test]
fn positional_adds_table_bonus() {
    // White knight on a1 (-50), nothing else besides the kings
    let p = pos("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert_eq!(Evaluator::Positional.evaluate(&p), 300 - 50);
    // Black knight on h8 mirrors to a1
    let p = pos("4k2n/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(Evaluator::Positional.evaluate(&p), -(300 - 50));
}

#[test]
fn checkmate_overrides_material() {
    // Fool's mate: material is level
    let mated_white = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    for evaluator in Evaluator::ALL {
        assert_eq!(evaluator.evaluate(&mated_white), -MATE_SCORE);
    }

    // Black mated by a back-rank rook although Black has more material
    let mated_black = pos("R5k1/5ppp/8/8/8/8/ppp5/6K1 b - - 0 1");
    assert!(mated_black.is_checkmate());
    assert_eq!(Evaluator::Full.evaluate(&mated_black), MATE_SCORE);
}

#[test]
fn undefended_queen_scores_lower_than_defended() {
    // Black pawn on e6 attacks the white queen on d5; only in the second
    // position does the e4 pawn defend it.
    let hanging = pos("4k3/8/4p3/3Q4/8/8/P7/4K3 b - - 0 1");
    let defended = pos("4k3/8/4p3/3Q4/4P3/8/8/4K3 b - - 0 1");

    let queen = Piece::new(Color::White, PieceKind::Queen);
    assert!(is_hanging(&hanging, queen, 35));
    assert!(!is_hanging(&defended, queen, 35));

    let h = Evaluator::Full.breakdown(&hanging);
    let d = Evaluator::Full.breakdown(&defended);
    assert_eq!(h.material, d.material);
    assert!(Evaluator::Full.evaluate(&hanging) < Evaluator::Full.evaluate(&defended));
    assert!(h.safety < d.safety);
}

#[test]
fn equal_attackers_and_defenders_is_safe() {
    // Knight on d4 attacked by the c5 pawn and defended by the c3 pawn
    let p = pos("4k3/8/8/2p5/3N4/2P5/8/4K3 w - - 0 1");
    let knight = Piece::new(Color::White, PieceKind::Knight);
    assert!(!is_hanging(&p, knight, 27));
}

#[test]
fn hanging_piece_cancels_its_material() {
    // Lone white rook on a4 attacked by the black rook on a8, no defenders;
    // the black rook is attacked back and undefended as well.
    let p = pos("r3k3/8/8/8/R7/8/8/4K3 w - - 0 1");
    let b = Evaluator::Full.breakdown(&p);
    assert_eq!(b.material, 0);
    assert_eq!(b.positional, 0);
    assert_eq!(b.safety, 0);

    // Defend the white rook with the king on b3: only Black's rook hangs
    let p = pos("r3k3/8/8/8/R7/1K6/8/8 w - - 0 1");
    let b = Evaluator::Full.breakdown(&p);
    assert_eq!(b.safety, 500);
    assert_eq!(b.positional, pst::ROOK[24]);
}

#[test]
fn mate_score_dominates_every_reachable_sum() {
    // At most fifteen non-king pieces a side, each worth at most a queen,
    // each carrying at most a queen's worth of bonus or penalty.
    let max_value = PieceKind::ALL.into_iter().map(piece_value).max().unwrap();
    let per_piece = max_value + max_value.max(pst::max_abs_bonus());
    assert!(2 * 15 * per_piece < MATE_SCORE);
}

#[test]
fn king_is_worth_nothing() {
    assert_eq!(piece_value(PieceKind::King), 0);
}

#[test]
fn evaluator_parses_case_insensitively() {
    assert_eq!("FULL".parse::<Evaluator>(), Ok(Evaluator::Full));
    assert_eq!("material".parse::<Evaluator>(), Ok(Evaluator::Material));
    assert_eq!(" Positional ".parse::<Evaluator>(), Ok(Evaluator::Positional));
    assert!("deep".parse::<Evaluator>().is_err());
    assert_eq!(Evaluator::default(), Evaluator::Full);
}
