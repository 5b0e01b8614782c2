//! One play session: score, lives, themes, entities and the two timers that
//! drive them.
//!
//! Time only moves through [`Session::advance`]. Physics runs in
//! `COLLISION_TICK` steps; after each step the due score and collision ticks
//! run. Once the session is [`Phase::Dead`] nothing moves again.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::audio::{Audio, Sfx, Track};
use crate::character::Character;
use crate::constants::*;
use crate::entities::{Coin, Ember, Look, Obstacle, Player, Themes, overlaps};
use crate::scores::{ScoreEntry, ScoreStore};
use crate::secret::{Key, SecretCodes};
use crate::settings::Settings;
use crate::timer::{Due, Tick, Timeout, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    /// Hit an obstacle with a life to spare; the world is paused until the
    /// player chooses to continue.
    AwaitingContinue,
    Dead,
}

pub struct Session {
    nick: String,
    character: Character,
    bullet_from_afternoon: bool,

    now: Duration,
    pending: Duration,
    phase: Phase,
    timers: Option<Timers>,
    invulnerable: Timeout,

    score: u32,
    final_score: Option<u32>,
    lives: u32,
    coins_collected: u32,
    extra_lives: u32,
    speed: f64,
    themes: Themes,
    track: Track,

    player: Player,
    pipe: Obstacle,
    bullet: Obstacle,
    coins: Vec<Coin>,
    embers: Vec<Ember>,
    codes: SecretCodes,

    rng: StdRng,
    audio: Box<dyn Audio>,
    scores: Box<dyn ScoreStore>,
}

impl Session {
    pub fn new(
        nick: impl Into<String>,
        character: Character,
        settings: &Settings,
        rng: StdRng,
        audio: Box<dyn Audio>,
        scores: Box<dyn ScoreStore>,
    ) -> Self {
        Self {
            nick: nick.into(),
            character,
            bullet_from_afternoon: settings.bullet_from_afternoon,
            now: Duration::ZERO,
            pending: Duration::ZERO,
            phase: Phase::NotStarted,
            timers: None,
            invulnerable: Timeout::default(),
            score: 0,
            final_score: None,
            lives: settings.starting_lives,
            coins_collected: 0,
            extra_lives: 0,
            speed: INITIAL_SPEED,
            themes: Themes::empty(),
            track: Track::Overworld,
            player: Player::new(character),
            pipe: Obstacle::pipe(),
            bullet: Obstacle::bullet(),
            coins: Vec::new(),
            embers: Vec::new(),
            codes: SecretCodes::default(),
            rng,
            audio,
            scores,
        }
    }

    /// Hands the collaborators back for the next session.
    pub fn into_services(self) -> (Box<dyn Audio>, Box<dyn ScoreStore>) {
        (self.audio, self.scores)
    }

    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.speed = INITIAL_SPEED;
        self.pipe.running = true;
        self.bullet.running = true;
        self.audio.play_track(self.track);
        self.timers = Some(Timers::start(self.now));
        self.phase = Phase::Running;
        info!(nick = %self.nick, character = %self.character, lives = self.lives, "Session started");
    }

    // ── Time ────────────────────────────────────────────────────────────────

    /// Moves simulated time forward by `dt`. Leftovers shorter than one
    /// physics step carry over to the next call.
    pub fn advance(&mut self, dt: Duration) {
        self.pending += dt;
        while self.pending >= COLLISION_TICK {
            self.pending -= COLLISION_TICK;
            self.step();
        }
    }

    fn step(&mut self) {
        if matches!(self.phase, Phase::NotStarted | Phase::Dead) {
            return;
        }
        self.now += COLLISION_TICK;

        if self.invulnerable.poll(self.now) {
            debug!("Invulnerability over");
        }
        self.player.step(self.now);
        self.pipe.step(COLLISION_TICK, self.speed);
        self.bullet.step(COLLISION_TICK, self.speed);
        for coin in &mut self.coins {
            coin.step(COLLISION_TICK);
        }
        self.coins.retain(|c| !c.expired());

        let ticks = match self.timers.as_mut() {
            Some(timers) => timers.due(self.now),
            None => Due::default(),
        };
        for tick in ticks {
            match tick {
                Tick::Collision => self.tick_collision(),
                Tick::Score => self.tick_score(),
            }
        }
    }

    // ── Score & progression ─────────────────────────────────────────────────

    pub fn tick_score(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.score += 1;
        self.ramp_speed();
        self.check_themes();
        if self.score % COIN_EVERY == 0 {
            self.spawn_coin();
        }
    }

    fn ramp_speed(&mut self) {
        if self.score > 0 && !self.themes.contains(Themes::INFERNO) && self.speed > SPEED_FLOOR {
            let next = (self.speed - SPEED_STEP).max(SPEED_FLOOR);
            self.speed = (next * 1000.0).round() / 1000.0;
        }
    }

    fn check_themes(&mut self) {
        if self.score >= AFTERNOON_AT && !self.themes.contains(Themes::AFTERNOON) {
            self.themes.insert(Themes::AFTERNOON);
            self.switch_track(Track::Afternoon);
            if self.bullet_from_afternoon {
                self.bullet.visible = true;
            }
            info!(score = self.score, "Afternoon");
        }
        if self.score >= NIGHT_AT && !self.themes.contains(Themes::NIGHT) {
            self.themes.insert(Themes::NIGHT);
            self.switch_track(Track::Night);
            info!(score = self.score, "Night");
        }
        if self.score >= INFERNO_AT && !self.themes.contains(Themes::INFERNO) {
            self.themes.insert(Themes::INFERNO);
            self.speed = INFERNO_SPEED;
            self.switch_track(Track::Inferno);
            for _ in 0..EMBER_COUNT {
                let ember = Ember {
                    left_fraction: self.rng.random::<f64>(),
                    delay: self.rng.random_range(0.0..3.0),
                };
                self.embers.push(ember);
            }
            info!(score = self.score, "Inferno");
        }
    }

    fn switch_track(&mut self, track: Track) {
        self.track = track;
        self.audio.play_track(track);
    }

    /// Spawns a coin at a random height.
    pub fn spawn_coin(&mut self) {
        let bottom = self.rng.random_range(COIN_MIN_BOTTOM..COIN_MAX_BOTTOM);
        self.place_coin(Coin::new(bottom));
    }

    pub fn place_coin(&mut self, coin: Coin) {
        debug!(bottom = coin.bottom, left = coin.left, "Coin spawned");
        self.coins.push(coin);
    }

    // ── Collisions ──────────────────────────────────────────────────────────

    pub fn tick_collision(&mut self) {
        if self.phase != Phase::Running || self.is_invulnerable() {
            return;
        }
        self.audio.play_track(self.track);

        let (left, bottom) = (self.player.left(), self.player.bottom);
        let before = self.coins.len();
        self.coins.retain(|c| !overlaps(left, bottom, c));
        for _ in self.coins.len()..before {
            self.collect_coin();
        }

        if self.pipe.threatens(bottom) || self.bullet.threatens(bottom) {
            self.hit();
        }
    }

    fn collect_coin(&mut self) {
        self.audio.play(Sfx::Coin);
        self.score += COIN_VALUE;
        self.coins_collected += 1;
        debug!(coins = self.coins_collected, "Coin collected");
        if self.coins_collected % COINS_PER_LIFE == 0 {
            self.lives += 1;
            self.extra_lives += 1;
            info!(lives = self.lives, "Extra life");
        }
    }

    fn hit(&mut self) {
        self.pipe.running = false;
        self.bullet.running = false;
        if self.lives > 0 {
            self.lose_life();
            self.phase = Phase::AwaitingContinue;
        } else {
            self.die();
        }
    }

    fn lose_life(&mut self) {
        self.lives -= 1;
        self.player.set_look(Look::Fainted, self.player.flipped);
        info!(lives = self.lives, score = self.score, "Life lost");
    }

    // ── Transitions ─────────────────────────────────────────────────────────

    /// Continues after a lost life. Returns `false` if there was nothing to
    /// continue from.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::AwaitingContinue {
            return false;
        }
        self.pipe.reset();
        self.pipe.running = true;
        self.bullet.reset();
        self.bullet.running = true;
        self.phase = Phase::Running;
        self.activate_invulnerability();
        self.audio.play(Sfx::Select);
        self.player
            .set_look(Look::Character(self.character), self.character.faces_left());
        info!(lives = self.lives, "Continue");
        true
    }

    /// Ends the session. Safe to call more than once; only the first call
    /// records the score.
    pub fn die(&mut self) {
        if !matches!(self.phase, Phase::Running | Phase::AwaitingContinue) {
            return;
        }
        self.pipe.running = false;
        self.bullet.running = false;
        self.phase = Phase::Dead;
        self.player
            .set_look(Look::GameOver(self.character), self.player.flipped);
        if let Some(timers) = &self.timers {
            timers.cancel();
        }
        self.final_score = Some(self.score);
        self.audio.stop_music();
        self.audio.play(Sfx::Death);
        if let Err(e) = self.scores.submit(&self.nick, self.score) {
            error!("Could not save score: {e}");
        }
        info!(nick = %self.nick, score = self.score, "Game over");
    }

    /// Suppresses collisions for `INVULNERABILITY`. Calling it again restarts
    /// the window.
    pub fn activate_invulnerability(&mut self) {
        self.invulnerable.arm(self.now, INVULNERABILITY);
    }

    // ── Input ───────────────────────────────────────────────────────────────

    pub fn key(&mut self, key: Key) {
        if !matches!(self.phase, Phase::Running | Phase::AwaitingContinue) {
            return;
        }
        self.jump();
        if let Some(skin) = self.codes.feed(key) {
            self.player.set_look(Look::Secret(skin), skin.faces_left());
            info!(?skin, "Secret code");
        }
    }

    pub fn jump(&mut self) {
        if self.player.jump(self.now) {
            self.audio.play(Sfx::Jump);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn character(&self) -> Character {
        self.character
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::AwaitingContinue | Phase::Dead)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable.is_armed()
    }

    pub fn timers_cancelled(&self) -> bool {
        self.timers.as_ref().is_some_and(Timers::is_cancelled)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.scores.best()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn extra_lives_granted(&self) -> u32 {
        self.extra_lives
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn themes(&self) -> Themes {
        self.themes
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pipe(&self) -> &Obstacle {
        &self.pipe
    }

    pub fn bullet(&self) -> &Obstacle {
        &self.bullet
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }
}
