#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pipe_runner::audio::{Audio, Sfx, Track};
use pipe_runner::character::Character;
use pipe_runner::error::GameResult;
use pipe_runner::scores::{MemoryScoreStore, ScoreEntry, ScoreStore};
use pipe_runner::session::Session;
use pipe_runner::settings::Settings;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Played {
    Sfx(Sfx),
    Track(Track),
    Stop,
}

/// Audio that remembers what it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<Played>>>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, sfx: Sfx) {
        self.log.borrow_mut().push(Played::Sfx(sfx));
    }

    fn play_track(&mut self, track: Track) {
        let mut log = self.log.borrow_mut();
        let current = log.iter().rev().find_map(|p| match p {
            Played::Track(t) => Some(Some(*t)),
            Played::Stop => Some(None),
            Played::Sfx(_) => None,
        });
        if current != Some(Some(track)) {
            log.push(Played::Track(track));
        }
    }

    fn stop_music(&mut self) {
        self.log.borrow_mut().push(Played::Stop);
    }
}

impl RecordingAudio {
    pub fn count(&self, played: &Played) -> usize {
        self.log.borrow().iter().filter(|p| *p == played).count()
    }
}

/// A memory store shared with the test so submissions can be inspected.
#[derive(Clone, Default)]
pub struct SharedScores {
    pub inner: Rc<RefCell<MemoryScoreStore>>,
    pub submissions: Rc<RefCell<Vec<(String, u32)>>>,
}

impl ScoreStore for SharedScores {
    fn submit(&mut self, nick: &str, score: u32) -> GameResult<()> {
        self.submissions.borrow_mut().push((nick.to_string(), score));
        self.inner.borrow_mut().submit(nick, score)
    }

    fn best(&self) -> Option<&ScoreEntry> {
        None
    }
}

pub struct Harness {
    pub session: Session,
    pub audio: RecordingAudio,
    pub scores: SharedScores,
}

pub fn settings_with_lives(lives: u32) -> Settings {
    Settings {
        starting_lives: lives,
        ..Settings::default()
    }
}

/// A session that has not been started yet.
pub fn idle_harness(settings: Settings) -> Harness {
    let audio = RecordingAudio::default();
    let scores = SharedScores::default();
    let session = Session::new(
        "tester",
        Character::Mario,
        &settings,
        StdRng::seed_from_u64(42),
        Box::new(audio.clone()),
        Box::new(scores.clone()),
    );
    Harness {
        session,
        audio,
        scores,
    }
}

pub fn harness(settings: Settings) -> Harness {
    let mut h = idle_harness(settings);
    h.session.start();
    h
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
