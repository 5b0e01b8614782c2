//! Secret key sequences that swap the player's sprite.
//!
//! Each recognizer is a single counter over its pattern. On a mismatch the
//! counter drops to 0, or to 1 when the key happens to be the pattern's first
//! key. There is no full failure function, so a pattern with a repeated
//! prefix (Konami's `↑ ↑`) misses when typed with an extra leading key:
//! `↑ ↑ ↑ ↓ ↓ ← → ← → b a` does not fire.

use crate::character::Palette;
use crate::render::Rgb;

/// A raw key as seen by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// Sprites only reachable through a secret code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Wario,
    Roberto,
    Matheus,
    Sonic,
}

impl Skin {
    pub fn faces_left(self) -> bool {
        matches!(self, Skin::Wario)
    }

    pub fn palette(self) -> Palette {
        let (body, accent, detail) = match self {
            Skin::Wario => (Rgb(245, 215, 40), Rgb(120, 40, 150), Rgb(250, 200, 160)),
            Skin::Roberto => (Rgb(90, 90, 90), Rgb(200, 200, 200), Rgb(230, 190, 150)),
            Skin::Matheus => (Rgb(0, 110, 60), Rgb(255, 255, 255), Rgb(230, 190, 150)),
            Skin::Sonic => (Rgb(30, 80, 220), Rgb(250, 210, 160), Rgb(220, 30, 30)),
        };
        Palette { body, accent, detail }
    }
}

const KONAMI: &[Key] = &[
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

fn chars(word: &str) -> Vec<Key> {
    word.chars().map(Key::Char).collect()
}

/// One streaming recognizer.
#[derive(Debug, Clone)]
pub struct SecretCode {
    pattern: Vec<Key>,
    position: usize,
    skin: Skin,
}

impl SecretCode {
    pub fn new(pattern: Vec<Key>, skin: Skin) -> Self {
        Self {
            pattern,
            position: 0,
            skin,
        }
    }

    /// Feeds one key; returns the skin when the full pattern was just typed.
    pub fn feed(&mut self, key: Key) -> Option<Skin> {
        if self.pattern.is_empty() {
            return None;
        }
        if key == self.pattern[self.position] {
            self.position += 1;
            if self.position == self.pattern.len() {
                self.position = 0;
                return Some(self.skin);
            }
        } else {
            self.position = usize::from(key == self.pattern[0]);
        }
        None
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// The four codes of the game, each matched independently.
#[derive(Debug, Clone)]
pub struct SecretCodes {
    codes: [SecretCode; 4],
}

impl Default for SecretCodes {
    fn default() -> Self {
        Self {
            codes: [
                SecretCode::new(KONAMI.to_vec(), Skin::Wario),
                SecretCode::new(chars("roberto"), Skin::Roberto),
                SecretCode::new(chars("palmeiras"), Skin::Matheus),
                SecretCode::new(chars("sonic"), Skin::Sonic),
            ],
        }
    }
}

impl SecretCodes {
    /// Feeds every recognizer; the last one to fire wins.
    pub fn feed(&mut self, key: Key) -> Option<Skin> {
        let mut fired = None;
        for code in &mut self.codes {
            if let Some(skin) = code.feed(key) {
                fired = Some(skin);
            }
        }
        fired
    }
}
