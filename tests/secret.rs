use pipe_runner::secret::{Key, SecretCode, SecretCodes, Skin};

fn word(s: &str) -> Vec<Key> {
    s.chars().map(Key::Char).collect()
}

fn konami() -> Vec<Key> {
    let mut keys = vec![
        Key::Up,
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Left,
        Key::Right,
    ];
    keys.extend(word("ba"));
    keys
}

fn feed_all(codes: &mut SecretCodes, keys: &[Key]) -> Vec<Skin> {
    keys.iter().filter_map(|&k| codes.feed(k)).collect()
}

#[test]
fn each_code_fires_its_skin() {
    let mut codes = SecretCodes::default();
    assert_eq!(feed_all(&mut codes, &konami()), vec![Skin::Wario]);
    assert_eq!(feed_all(&mut codes, &word("roberto")), vec![Skin::Roberto]);
    assert_eq!(feed_all(&mut codes, &word("palmeiras")), vec![Skin::Matheus]);
    assert_eq!(feed_all(&mut codes, &word("sonic")), vec![Skin::Sonic]);
}

#[test]
fn code_resets_after_firing() {
    let mut code = SecretCode::new(word("roberto"), Skin::Roberto);
    let fired: Vec<_> = word("robertoroberto").into_iter().filter_map(|k| code.feed(k)).collect();
    assert_eq!(fired.len(), 2);
    assert_eq!(code.position(), 0);
}

#[test]
fn mismatch_resets_progress() {
    let mut code = SecretCode::new(word("sonic"), Skin::Sonic);
    for k in word("sox") {
        assert_eq!(code.feed(k), None);
    }
    assert_eq!(code.position(), 0);
    let fired: Vec<_> = word("sonic").into_iter().filter_map(|k| code.feed(k)).collect();
    assert_eq!(fired, vec![Skin::Sonic]);
}

#[test]
fn mismatch_on_first_key_restarts_at_one() {
    let mut code = SecretCode::new(word("roberto"), Skin::Roberto);
    code.feed(Key::Char('r'));
    code.feed(Key::Char('o'));
    code.feed(Key::Char('r'));
    assert_eq!(code.position(), 1);
    let fired: Vec<_> = word("oberto").into_iter().filter_map(|k| code.feed(k)).collect();
    assert_eq!(fired, vec![Skin::Roberto]);
}

#[test]
fn repeated_prefix_is_not_recovered() {
    // ↑ ↑ ↑ ↓ ↓ ← → ← → b a: the third ↑ restarts at 1 and the ↓ that
    // follows breaks the match.
    let mut keys = vec![Key::Up];
    keys.extend(konami());
    let mut code = SecretCode::new(konami(), Skin::Wario);
    let fired: Vec<_> = keys.into_iter().filter_map(|k| code.feed(k)).collect();
    assert!(fired.is_empty());
}

#[test]
fn codes_progress_independently() {
    let mut codes = SecretCodes::default();
    // "son" advances sonic; "palmeiras" in between must not disturb it
    // beyond the usual reset on mismatch.
    assert!(feed_all(&mut codes, &word("son")).is_empty());
    assert_eq!(feed_all(&mut codes, &word("palmeiras")), vec![Skin::Matheus]);
    assert_eq!(feed_all(&mut codes, &word("sonic")), vec![Skin::Sonic]);
}
