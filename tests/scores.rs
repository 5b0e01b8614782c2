use std::fs;
use std::path::PathBuf;

use pipe_runner::scores::{BOARD_SIZE, JsonScoreStore, MemoryScoreStore, ScoreStore};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pipe-runner-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("scores.json")
}

#[test]
fn board_keeps_the_best_ten_sorted() {
    let mut store = MemoryScoreStore::default();
    for (i, score) in [5, 50, 1, 300, 20, 7, 90, 90, 2, 60, 11, 400].into_iter().enumerate() {
        store.submit(&format!("p{i}"), score).unwrap();
    }
    let scores: Vec<_> = store.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![400, 300, 90, 90, 60, 50, 20, 11, 7, 5]);
    assert_eq!(scores.len(), BOARD_SIZE);
    // Ties keep the earlier entry first
    assert_eq!(store.entries()[2].nick, "p6");
    assert_eq!(store.best().unwrap().nick, "p11");
}

#[test]
fn json_store_persists_between_opens() {
    let path = scratch("persist");
    {
        let mut store = JsonScoreStore::open(&path);
        assert!(store.best().is_none());
        store.submit("ana", 120).unwrap();
        store.submit("bia", 340).unwrap();
    }
    let mut store = JsonScoreStore::open(&path);
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.best().unwrap().nick, "bia");
    assert!(!path.with_extension("json.tmp").exists());

    // Saving over an existing board keeps what was there
    store.submit("caio", 200).unwrap();
    let store = JsonScoreStore::open(&path);
    let nicks: Vec<_> = store.entries().iter().map(|e| e.nick.as_str()).collect();
    assert_eq!(nicks, vec!["bia", "caio", "ana"]);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_loads_empty() {
    let path = scratch("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    let mut store = JsonScoreStore::open(&path);
    assert!(store.entries().is_empty());
    store.submit("ana", 1).unwrap();
    assert_eq!(JsonScoreStore::open(&path).entries().len(), 1);
}
