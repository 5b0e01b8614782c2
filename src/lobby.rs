//! The start screen: nickname entry and character selection.

use tracing::warn;

use crate::audio::{Audio, Sfx};
use crate::character::Character;
use crate::error::{GameError, GameResult};

/// Longest nickname the lobby accepts.
pub const MAX_NICK: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct Lobby {
    nick: String,
    character: Character,
    prompt: Option<String>,
}

impl Lobby {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            ..Self::default()
        }
    }

    pub fn type_char(&mut self, c: char) {
        if !c.is_control() && self.nick.chars().count() < MAX_NICK {
            self.nick.push(c);
            self.prompt = None;
        }
    }

    pub fn backspace(&mut self) {
        self.nick.pop();
    }

    pub fn next_character(&mut self, audio: &mut dyn Audio) {
        self.select(self.character.next(), audio);
    }

    pub fn prev_character(&mut self, audio: &mut dyn Audio) {
        self.select(self.character.prev(), audio);
    }

    fn select(&mut self, character: Character, audio: &mut dyn Audio) {
        audio.play(Sfx::Select);
        self.character = character;
    }

    /// The trimmed nickname and chosen character, or an error prompt when the
    /// nickname is blank.
    pub fn submit(&mut self) -> GameResult<(String, Character)> {
        let nick = self.nick.trim();
        if nick.is_empty() {
            let err = GameError::EmptyNickname;
            warn!("Rejected start: {err}");
            self.prompt = Some(err.to_string());
            return Err(err);
        }
        Ok((nick.to_string(), self.character))
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn character(&self) -> Character {
        self.character
    }

    /// Message blocking the start, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}
