//! Timing, scoring and world geometry for the runner.
//!
//! World coordinates are in "board pixels": `left` grows to the right from the
//! player's edge, `bottom` grows upward from the ground line.

use std::time::Duration;

// ── Timing ──────────────────────────────────────────────────────────────────

/// Period of the score/progression tick.
pub const SCORE_TICK: Duration = Duration::from_millis(100);
/// Period of the collision tick, which is also the physics step.
pub const COLLISION_TICK: Duration = Duration::from_millis(10);

pub const JUMP_DURATION: Duration = Duration::from_millis(500);
pub const INVULNERABILITY: Duration = Duration::from_millis(500);
pub const COIN_LIFETIME: Duration = Duration::from_millis(4000);

// ── Speed (seconds per obstacle pass) ──────────────────────────────────────

pub const INITIAL_SPEED: f64 = 2.0;
pub const SPEED_FLOOR: f64 = 1.5;
pub const SPEED_STEP: f64 = 0.001;
pub const INFERNO_SPEED: f64 = 1.0;

// ── Progression ─────────────────────────────────────────────────────────────

pub const AFTERNOON_AT: u32 = 500;
pub const NIGHT_AT: u32 = 1000;
pub const INFERNO_AT: u32 = 1500;

/// A coin spawns whenever the score lands on a positive multiple of this.
pub const COIN_EVERY: u32 = 50;
pub const COIN_VALUE: u32 = 10;
pub const COINS_PER_LIFE: u32 = 10;
pub const COIN_MIN_BOTTOM: f64 = 80.0;
pub const COIN_MAX_BOTTOM: f64 = 200.0;

pub const EMBER_COUNT: usize = 50;
pub const STARTING_LIVES: u32 = 3;

// ── Geometry ────────────────────────────────────────────────────────────────

pub const BOARD_WIDTH: f64 = 800.0;
pub const BOARD_HEIGHT: f64 = 400.0;

pub const PLAYER_LEFT: f64 = 0.0;
pub const PLAYER_SIZE: f64 = 120.0;
pub const JUMP_HEIGHT: f64 = 180.0;

pub const COIN_SIZE: f64 = 40.0;

pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const OBSTACLE_HEIGHT: f64 = 80.0;
/// Right edge of the zone in which an obstacle can hit the player.
pub const DANGER_ZONE: f64 = 120.0;
/// Obstacles re-enter from just past the right edge of the board.
pub const OBSTACLE_SPAWN: f64 = BOARD_WIDTH;
