//! World entities: pure data plus the motion each one owns.

use std::time::Duration;

use bitflags::bitflags;

use crate::character::Character;
use crate::constants::*;
use crate::secret::Skin;

bitflags! {
    /// Theme transitions reached this session. Flags are only ever inserted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Themes: u8 {
        const AFTERNOON = 1 << 0;
        const NIGHT = 1 << 1;
        const INFERNO = 1 << 2;
    }
}

/// What the player sprite currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Look {
    Character(Character),
    Secret(Skin),
    /// Shown after losing a life, until the player continues.
    Fainted,
    GameOver(Character),
}

// ── Player ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Player {
    pub bottom: f64,
    pub look: Look,
    pub flipped: bool,
    jump_started: Option<Duration>,
}

impl Player {
    pub fn new(character: Character) -> Self {
        Self {
            bottom: 0.0,
            look: Look::Character(character),
            flipped: character.faces_left(),
            jump_started: None,
        }
    }

    pub fn left(&self) -> f64 {
        PLAYER_LEFT
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_started.is_some()
    }

    /// Starts a jump unless one is already in progress.
    pub fn jump(&mut self, now: Duration) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.jump_started = Some(now);
        true
    }

    /// Updates `bottom` along the jump arc; lands after `JUMP_DURATION`.
    pub fn step(&mut self, now: Duration) {
        let Some(started) = self.jump_started else {
            self.bottom = 0.0;
            return;
        };
        let elapsed = now.saturating_sub(started);
        if elapsed >= JUMP_DURATION {
            self.jump_started = None;
            self.bottom = 0.0;
            return;
        }
        let t = elapsed.as_secs_f64() / JUMP_DURATION.as_secs_f64();
        self.bottom = JUMP_HEIGHT * jump_arc(t);
    }

    pub fn set_look(&mut self, look: Look, flipped: bool) {
        self.look = look;
        self.flipped = flipped;
    }
}

/// Rise over the first 40%, hang until 60%, fall over the rest.
fn jump_arc(t: f64) -> f64 {
    if t < 0.4 {
        t / 0.4
    } else if t < 0.6 {
        1.0
    } else {
        ((1.0 - t) / 0.4).max(0.0)
    }
}

// ── Obstacles ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Pipe,
    Bullet,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub left: f64,
    pub visible: bool,
    pub running: bool,
}

impl Obstacle {
    pub fn pipe() -> Self {
        Self {
            kind: ObstacleKind::Pipe,
            left: OBSTACLE_SPAWN,
            visible: true,
            running: false,
        }
    }

    /// The bullet stays hidden until something reveals it.
    pub fn bullet() -> Self {
        Self {
            kind: ObstacleKind::Bullet,
            left: OBSTACLE_SPAWN,
            visible: false,
            running: false,
        }
    }

    /// One full pass, spawn to off-screen, takes `speed` seconds.
    pub fn velocity(speed: f64) -> f64 {
        (OBSTACLE_SPAWN + OBSTACLE_WIDTH) / speed
    }

    pub fn step(&mut self, dt: Duration, speed: f64) {
        if !self.running {
            return;
        }
        self.left -= Self::velocity(speed) * dt.as_secs_f64();
        if self.left <= -OBSTACLE_WIDTH {
            self.left = OBSTACLE_SPAWN;
        }
    }

    pub fn reset(&mut self) {
        self.left = OBSTACLE_SPAWN;
    }

    /// Whether this obstacle hits a player standing at `player_bottom`.
    pub fn threatens(&self, player_bottom: f64) -> bool {
        self.visible && self.left > 0.0 && self.left <= DANGER_ZONE && player_bottom < OBSTACLE_HEIGHT
    }
}

// ── Coins ───────────────────────────────────────────────────────────────────

const COIN_SPEED: f64 = (BOARD_WIDTH + COIN_SIZE) / 4.0;

#[derive(Debug, Clone)]
pub struct Coin {
    pub left: f64,
    pub bottom: f64,
    pub age: Duration,
}

impl Coin {
    pub fn new(bottom: f64) -> Self {
        Self {
            left: BOARD_WIDTH,
            bottom,
            age: Duration::ZERO,
        }
    }

    pub fn step(&mut self, dt: Duration) {
        self.left -= COIN_SPEED * dt.as_secs_f64();
        self.age += dt;
    }

    pub fn expired(&self) -> bool {
        self.age >= COIN_LIFETIME
    }
}

/// Axis-aligned overlap between the player box and a coin.
pub fn overlaps(player_left: f64, player_bottom: f64, coin: &Coin) -> bool {
    player_left < coin.left + COIN_SIZE
        && player_left + PLAYER_SIZE > coin.left
        && player_bottom < coin.bottom + COIN_SIZE
        && player_bottom + PLAYER_SIZE > coin.bottom
}

// ── Embers ──────────────────────────────────────────────────────────────────

/// A rising spark of the inferno theme. Purely visual.
#[derive(Debug, Clone, Copy)]
pub struct Ember {
    /// Horizontal position as a fraction of the board width.
    pub left_fraction: f64,
    /// Seconds before this ember starts rising.
    pub delay: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_peaks_and_lands() {
        let mut p = Player::new(Character::Mario);
        assert!(p.jump(Duration::ZERO));
        assert!(!p.jump(Duration::from_millis(100)));
        p.step(Duration::from_millis(250));
        assert_eq!(p.bottom, JUMP_HEIGHT);
        p.step(Duration::from_millis(500));
        assert_eq!(p.bottom, 0.0);
        assert!(!p.is_jumping());
    }

    #[test]
    fn obstacle_wraps_back_to_spawn() {
        let mut o = Obstacle::pipe();
        o.running = true;
        o.step(Duration::from_secs(2), 2.0);
        assert_eq!(o.left, OBSTACLE_SPAWN);
    }
}
