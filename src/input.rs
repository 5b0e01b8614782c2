//! Translation from terminal key events to game keys and app commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::secret::Key;

/// What a key press asks of the app, beyond feeding the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Continue,
    Restart,
    /// A key for the session (jump and secret codes).
    Play(Key),
    Ignore,
}

pub fn key_of(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Interprets a key while a session is on screen. `paused` is true while the
/// continue prompt or the game-over screen is showing. Only keys that cannot
/// appear in a secret code are taken for continue and restart.
pub fn command(event: KeyEvent, paused: bool) -> Command {
    if event.kind == KeyEventKind::Release {
        return Command::Ignore;
    }
    if event.code == KeyCode::Esc
        || (event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c'))
    {
        return Command::Quit;
    }
    if paused {
        match event.code {
            KeyCode::Enter => return Command::Continue,
            KeyCode::Tab => return Command::Restart,
            _ => {}
        }
    }
    Command::Play(key_of(event.code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_reach_the_game_while_running() {
        assert_eq!(command(press(KeyCode::Char('R')), false), Command::Play(Key::Char('R')));
        assert_eq!(command(press(KeyCode::Char('c')), false), Command::Play(Key::Char('c')));
    }

    #[test]
    fn paused_screen_takes_continue_and_restart() {
        assert_eq!(command(press(KeyCode::Enter), true), Command::Continue);
        assert_eq!(command(press(KeyCode::Tab), true), Command::Restart);
        assert_eq!(command(press(KeyCode::Esc), true), Command::Quit);
    }

    #[test]
    fn paused_letters_still_reach_the_game() {
        for c in "roberto sonic CR".chars() {
            assert_eq!(command(press(KeyCode::Char(c)), true), Command::Play(Key::Char(c)));
        }
    }
}
