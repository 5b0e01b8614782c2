use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Stdout, stdout};
use std::time::{Duration, Instant};
use tracing::info;

use pipe_runner::audio::{self, Audio};
use pipe_runner::character::Character;
use pipe_runner::error::GameResult;
use pipe_runner::input::{self, Command};
use pipe_runner::lobby::Lobby;
use pipe_runner::logging;
use pipe_runner::render::{self, PixelBuf};
use pipe_runner::scores::{JsonScoreStore, ScoreStore};
use pipe_runner::session::Session;
use pipe_runner::settings::{Paths, Settings};

const FRAME: Duration = Duration::from_millis(33); // ~30 fps

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Restart,
    Quit,
}

fn main() -> GameResult<()> {
    let paths = Paths::locate()?;
    logging::init(&paths.log)?;
    let settings = Settings::load(&paths.settings);
    let audio = audio::open(settings.muted);
    let scores: Box<dyn ScoreStore> = Box::new(JsonScoreStore::open(&paths.scores));

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let result = run(&mut out, &settings, audio, scores);

    execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    info!("Bye");
    result
}

fn run(
    out: &mut Stdout,
    settings: &Settings,
    mut audio: Box<dyn Audio>,
    mut scores: Box<dyn ScoreStore>,
) -> GameResult<()> {
    let (cols, rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);

    loop {
        let Some((nick, character)) = lobby(out, &mut buf, settings, audio.as_mut())? else {
            return Ok(());
        };
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut session = Session::new(nick, character, settings, rng, audio, scores);
        session.start();
        let outcome = play(out, &mut buf, &mut session)?;
        (audio, scores) = session.into_services();
        audio.stop_music();
        if outcome == Outcome::Quit {
            return Ok(());
        }
    }
}

fn resize(buf: &mut PixelBuf, cols: u16, rows: u16) {
    buf.resize(cols as usize, rows as usize * 2);
}

fn pace(frame_start: Instant) {
    let elapsed = frame_start.elapsed();
    if elapsed < FRAME {
        std::thread::sleep(FRAME - elapsed);
    }
}

fn present(out: &mut Stdout, buf: &PixelBuf, lines: &[(String, render::Rgb)]) -> io::Result<()> {
    buf.render(out)?;
    if !lines.is_empty() {
        let (cols, rows) = terminal::size()?;
        render::print_lines(out, lines, cols, rows)?;
    }
    Ok(())
}

/// Runs the start screen until a valid nick is entered or the player quits.
fn lobby(
    out: &mut Stdout,
    buf: &mut PixelBuf,
    settings: &Settings,
    audio: &mut dyn Audio,
) -> GameResult<Option<(String, Character)>> {
    let mut lobby = Lobby::new(settings.character());
    let opened = Instant::now();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Enter => {
                        if let Ok(entry) = lobby.submit() {
                            return Ok(Some(entry));
                        }
                    }
                    KeyCode::Backspace => lobby.backspace(),
                    KeyCode::Left => lobby.prev_character(audio),
                    KeyCode::Right => lobby.next_character(audio),
                    KeyCode::Char(c) => lobby.type_char(c),
                    _ => {}
                },
                Event::Resize(c, r) => resize(buf, c, r),
                _ => {}
            }
        }

        render::draw_lobby(buf, &lobby, opened.elapsed().as_secs_f64());
        present(out, buf, &render::lobby_lines(&lobby))?;
        pace(frame_start);
    }
}

/// Plays one session until the player restarts or quits.
fn play(out: &mut Stdout, buf: &mut PixelBuf, session: &mut Session) -> GameResult<Outcome> {
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match input::command(key, session.is_paused()) {
                    Command::Quit => return Ok(Outcome::Quit),
                    Command::Restart => return Ok(Outcome::Restart),
                    Command::Continue => {
                        session.resume();
                    }
                    Command::Play(k) => session.key(k),
                    Command::Ignore => {}
                },
                Event::Resize(c, r) => resize(buf, c, r),
                _ => {}
            }
        }

        // Update
        let now = Instant::now();
        session.advance(now - last);
        last = now;

        // Render
        render::draw_session(buf, session);
        present(out, buf, &render::session_lines(session))?;

        pace(frame_start);
    }
}
