//! Tests for playing custom case files loaded from JSON.

use quest_core::testing::{play_transcript, TestHarness};
use quest_core::{
    CaseFile, ClueIndex, GameSession, LayoutError, SessionConfig, SessionError, Verdict,
};

const COTTAGE: &str = r#"{
    "title": "Cottage",
    "buckets": 3,
    "mansion": {
        "name": "Porch",
        "clue": "Muddy boots",
        "left": {
            "name": "Kitchen",
            "clue": "Broken cup",
            "right": { "name": "Pantry", "clue": "muddy boots" }
        },
        "right": { "name": "Shed", "clue": "" }
    },
    "evidence": [
        { "clue": "Muddy boots", "suspect": "Gardener" },
        { "clue": "Broken cup", "suspect": "Cook" },
        { "clue": "muddy boots", "suspect": "Gardener" }
    ]
}"#;

#[test]
fn test_load_cottage() {
    let case = CaseFile::from_json(COTTAGE).unwrap();
    assert_eq!(case.buckets, 3);
    assert_eq!(case.mansion.room_count(), 4);

    let index = ClueIndex::from_case(&case).unwrap();
    assert_eq!(index.bucket_count(), 3);
    assert_eq!(index.lookup("Broken cup"), Some("Cook"));
    assert_eq!(index.suspects(), vec!["Cook", "Gardener"]);
}

#[test]
fn test_case_sensitive_clues_are_distinct() {
    let mut harness = TestHarness::with_case(CaseFile::from_json(COTTAGE).unwrap());
    harness.script(&["e", "d", "s"]);
    harness.assert_clues(&["Broken cup", "Muddy boots", "muddy boots"]);
    assert_eq!(harness.accuse("Gardener").verdict, Verdict::Sufficient);
    assert_eq!(harness.accuse("Cook").verdict, Verdict::Weak);
}

#[test]
fn test_empty_clue_room_shows_no_clue() {
    let config = SessionConfig::new().with_case(CaseFile::from_json(COTTAGE).unwrap());
    let (_, output) = play_transcript(config, ["d", "s", "Gardener"]).unwrap();
    assert!(output.contains("You are in: Shed"));
    assert!(output.contains("There is no clue in this room."));
    assert!(output.contains("Clues pointing to 'Gardener': 1"));
}

#[test]
fn test_duplicate_room_names_are_rejected() {
    let json = r#"{
        "title": "Mirror House",
        "mansion": {
            "name": "Hall",
            "left": { "name": "Hall" }
        }
    }"#;
    assert!(matches!(
        CaseFile::from_json(json),
        Err(LayoutError::DuplicateRoom(name)) if name == "Hall"
    ));
}

#[test]
fn test_session_rejects_invalid_case() {
    let case = CaseFile::mansion().with_buckets(0);
    let result = GameSession::new(SessionConfig::new().with_case(case));
    assert!(matches!(result, Err(SessionError::Layout(LayoutError::NoBuckets))));
}
