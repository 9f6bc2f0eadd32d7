use chess_core::{legal_moves, Engine, Position};
use classical_engine::{ClassicalEngine, Evaluator, SearchConfig};

/// Plays a short game against itself; every chosen move must be legal and
/// the search must hand the position back unchanged each turn.
#[test]
fn short_self_play_game_stays_legal() {
    let mut engine = ClassicalEngine::new(SearchConfig {
        depth: 2,
        ..SearchConfig::default()
    });
    let mut pos = Position::startpos();

    for _ in 0..12 {
        let before = pos.to_fen();
        let result = engine.choose_move(&mut pos, 2);
        assert_eq!(pos.to_fen(), before);

        let Some(mv) = result.best_move else {
            assert!(pos.is_game_over());
            break;
        };
        assert!(legal_moves(&pos).contains(&mv), "{mv} illegal in {before}");
        pos.push(mv);
    }
}

#[test]
fn takes_a_free_queen() {
    // Knight on c3 can capture the undefended queen on d5
    let mut pos = Position::from_fen("4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1").unwrap();
    for evaluator in Evaluator::ALL {
        let mut engine = ClassicalEngine::new(SearchConfig {
            evaluator,
            ..SearchConfig::default()
        });
        let result = engine.choose_move(&mut pos, 3);
        assert_eq!(
            result.best_move.map(|m| m.to_string()).as_deref(),
            Some("c3d5"),
            "{evaluator}"
        );
        assert!(result.score > 0);
    }
}

#[test]
fn deeper_search_visits_more_nodes() {
    let mut engine = ClassicalEngine::default();
    let mut pos = Position::startpos();
    let shallow = engine.choose_move(&mut pos, 1);
    let deep = engine.choose_move(&mut pos, 2);
    assert!(deep.nodes > shallow.nodes);
    assert_eq!(shallow.depth, 1);
    assert_eq!(deep.depth, 2);
}
