use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;
use word_master::core::types::MatchKind;
use word_master::{GameConfig, GameService, SessionStatus};

/// Unit vectors at the given angle from "ocean".
fn write_vectors(dir: &Path) {
    let angles = [
        ("ocean", 0.0),
        ("sea", 10.0),
        ("water", 25.0),
        ("waves", 30.0),
        ("beach", 35.0),
        ("coast", 40.0),
        ("shore", 45.0),
        ("sand", 66.0),
        ("forest", 100.0),
        ("river", 80.0),
        ("desert", 150.0),
        ("mountain", 120.0),
    ];
    let table: serde_json::Map<String, serde_json::Value> = angles
        .iter()
        .map(|&(word, degrees): &(&str, f64)| {
            let r = degrees.to_radians();
            (word.to_string(), serde_json::json!([r.cos(), r.sin()]))
        })
        .collect();
    std::fs::write(dir.join("vectors.json"), serde_json::Value::Object(table).to_string()).unwrap();
}

fn service(dir: &TempDir, targets: &[&str]) -> GameService {
    write_vectors(dir.path());
    std::fs::write(dir.path().join("daily-words.json"), serde_json::json!({ "words": targets }).to_string()).unwrap();

    let mut config = GameConfig::default();
    config.paths.vectors = dir.path().join("vectors.json");
    config.paths.targets = dir.path().join("daily-words.json");
    config.paths.data_dir = dir.path().join("state");
    GameService::from_config(config).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn near_miss_then_perfect_reaches_full_score() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir, &["ocean"]);
    let mut session = service.start_session("ada", day()).unwrap();
    assert_eq!(session.target(), "ocean");

    let sand = service.play_guess("ada", &mut session, "sand").unwrap();
    assert_eq!((sand.score, sand.kind), (Some(50), MatchKind::Similarity));
    let sea = service.play_guess("ada", &mut session, "sea").unwrap();
    assert_eq!(sea.score, Some(100));

    let points: Vec<u32> = session.guesses().iter().map(|g| g.points_awarded).collect();
    assert_eq!(points, vec![25, 975]);
    assert_eq!(session.status(), SessionStatus::Won);
    assert_eq!(session.state().guesses_used, 2);

    let breakdown = session.breakdown().unwrap();
    assert_eq!((breakdown.base_score, breakdown.hints_deduction, breakdown.final_score), (1000, 0, 1000));
}

#[test]
fn one_paid_hint_then_perfect_scores_750() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir, &["ocean"]);
    let mut session = service.start_session("bo", day()).unwrap();

    let hint = service.reveal_hint(&mut session).unwrap();
    assert!(hint.starts_with("This is a large body of water"));
    assert_eq!(session.state().hints_revealed, 1);

    service.play_guess("bo", &mut session, "Ocean").unwrap();
    let breakdown = session.breakdown().unwrap();
    assert_eq!((breakdown.base_score, breakdown.hints_deduction, breakdown.final_score), (750, 0, 750));
    assert_eq!(service.player_stats("bo").total_score, 750);
    assert_eq!(service.player_stats("bo").high_score, 750);
}

#[test]
fn hint_words_are_near_misses_not_wins() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir, &["ocean"]);
    let target = service.target_word("2024-03-15").unwrap();
    assert_eq!(target.hints[0], "Think about these related words: water, waves, beach, coast, shore");

    let response = service.score("shore", "ocean").unwrap();
    assert_eq!(response.score, Some(90));
    assert_eq!(response.emoji, "💡");
}

#[test]
fn repeated_target_request_leaves_ledger_untouched() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir, &["ocean", "river", "forest"]);
    let first = service.target_word("2024-03-15").unwrap();
    let ledger_path = dir.path().join("state").join("ledger.json");
    let before = std::fs::read_to_string(&ledger_path).unwrap();

    let second = service.target_word("2024-03-15").unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read_to_string(&ledger_path).unwrap(), before);
}

#[test]
fn consecutive_days_cover_the_pool_before_repeating() {
    let dir = TempDir::new().unwrap();
    let pool = ["ocean", "river", "forest", "desert", "mountain"];
    let service = service(&dir, &pool);

    let mut seen = HashSet::new();
    for offset in 0..pool.len() as u64 {
        let date = day() + chrono::Days::new(offset);
        let word = service.target_word(&date.format("%Y-%m-%d").to_string()).unwrap().word;
        assert!(seen.insert(word));
    }
    assert_eq!(seen.len(), pool.len());
}

#[test]
fn leaderboards_follow_finished_games() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir, &["ocean"]);
    let mut session = service.start_session("ada", day()).unwrap();
    for guess in ["river", "desert", "mountain"] {
        service.play_guess("ada", &mut session, guess).unwrap();
    }
    assert_eq!(session.status(), SessionStatus::Lost);

    let boards = service.leaderboards();
    assert_eq!(boards.monthly.len(), 1);
    assert_eq!(boards.monthly[0].name, "ada");
    assert_eq!(boards.monthly[0].total_score, 30);

    // a finished day cannot be replayed
    let again = service.start_session("ada", day()).unwrap();
    assert!(again.is_finished());
    assert_eq!(service.player_stats("ada").games_played, 1);
}
