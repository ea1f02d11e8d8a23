use chessboard::scenarios::{self, ScenarioSpec};
use chessboard::PieceCensus;

#[test]
fn builtin_names_resolve() {
    let names = scenarios::available_names();
    assert_eq!(names.len(), 12);
    for name in &names {
        assert_eq!(&scenarios::by_name(name).unwrap().name, name);
    }
    assert!(scenarios::by_name("queens_9x9").is_none());
}

#[test]
fn small_builtins_have_known_counts() {
    for (name, want) in [
        ("kings_rook_3x3", 4),
        ("rooks_knights_4x4", 8),
        ("queens_1x1", 1),
        ("queens_2x2", 0),
        ("queens_5x5", 10),
        ("family_5x5", 8),
    ] {
        let report = scenarios::by_name(name).unwrap().run().unwrap();
        assert_eq!(report.solutions, want, "{name}");
        assert_eq!(report.scenario.name, name);
    }
}

#[test]
fn parses_json_scenario_lists() {
    let text = r#"[
        {"name": "tiny", "length": 3, "height": 3, "pieces": {"king": 2, "rook": 1}},
        {"name": "empty", "length": 2, "height": 2, "pieces": {}}
    ]"#;
    let specs = scenarios::from_json(text).unwrap();
    assert_eq!(
        specs[0],
        ScenarioSpec::new("tiny", 3, 3, PieceCensus::new().with_kings(2).with_rooks(1))
    );
    assert_eq!(specs[0].run().unwrap().solutions, 4);
    assert!(specs[1].run().is_err());
}

#[test]
fn unknown_piece_kinds_are_rejected_in_files() {
    let text = r#"[{"name": "x", "length": 3, "height": 3, "pieces": {"pawn": 1}}]"#;
    assert!(scenarios::from_json(text).is_err());
}

#[test]
fn reports_serialize_flat() {
    let report = scenarios::by_name("queens_4x4").unwrap().run().unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["name"], "queens_4x4");
    assert_eq!(value["length"], 4);
    assert_eq!(value["pieces"]["queen"], 4);
    assert_eq!(value["solutions"], 2);
    assert!(value["execution_time"].is_object());
}
