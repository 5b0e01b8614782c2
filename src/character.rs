//! The selectable roster.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::warn;

use crate::render::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Character {
    #[default]
    Mario,
    Sonic,
    Megaman,
    Link,
    Goku,
    Jotaro,
    Hollow,
    Hornet,
}

/// Colors used to draw a character: body, accent, and detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub body: Rgb,
    pub accent: Rgb,
    pub detail: Rgb,
}

impl Character {
    /// Parses a roster id, falling back to the default character.
    pub fn from_id(id: &str) -> Self {
        match Character::from_str(id.trim()) {
            Ok(c) => c,
            Err(_) => {
                warn!(id, "Unrecognized character, using the default");
                Character::default()
            }
        }
    }

    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Whether the sprite is mirrored to face left.
    pub fn faces_left(self) -> bool {
        matches!(self, Character::Hollow | Character::Hornet)
    }

    pub fn palette(self) -> Palette {
        let (body, accent, detail) = match self {
            Character::Mario => (Rgb(220, 40, 30), Rgb(40, 70, 200), Rgb(250, 200, 160)),
            Character::Sonic => (Rgb(30, 80, 220), Rgb(250, 210, 160), Rgb(220, 30, 30)),
            Character::Megaman => (Rgb(40, 150, 240), Rgb(20, 80, 200), Rgb(250, 210, 170)),
            Character::Link => (Rgb(60, 170, 60), Rgb(140, 90, 40), Rgb(250, 210, 160)),
            Character::Goku => (Rgb(240, 130, 30), Rgb(30, 50, 150), Rgb(20, 20, 20)),
            Character::Jotaro => (Rgb(30, 30, 60), Rgb(220, 190, 60), Rgb(240, 200, 170)),
            Character::Hollow => (Rgb(30, 30, 40), Rgb(245, 245, 245), Rgb(0, 0, 0)),
            Character::Hornet => (Rgb(190, 30, 40), Rgb(245, 245, 245), Rgb(60, 20, 30)),
        };
        Palette { body, accent, detail }
    }

    pub fn next(self) -> Self {
        let all: Vec<_> = Character::iter().collect();
        let i = all.iter().position(|&c| c == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all: Vec<_> = Character::iter().collect();
        let i = all.iter().position(|&c| c == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}
