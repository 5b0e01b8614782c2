//! Drawing. Everything here reads game state and never changes it.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use crate::character::{Character, Palette};
use crate::constants::*;
use crate::entities::{Look, Obstacle, ObstacleKind, Themes};
use crate::lobby::Lobby;
use crate::session::{Phase, Session};

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    const fn halved(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }

    fn term(self) -> CColor {
        CColor::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const BRICK: Rgb = Rgb(190, 95, 40);
const BRICK_DARK: Rgb = Rgb(150, 70, 30);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const COIN: Rgb = Rgb(245, 200, 40);
const COIN_HI: Rgb = Rgb(255, 240, 150);
const BULLET: Rgb = Rgb(25, 25, 25);
const EMBER: Rgb = Rgb(255, 140, 30);
const HEART: Rgb = Rgb(230, 40, 60);
const GHOST: Rgb = Rgb(200, 210, 230);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);
const PANEL: Rgb = Rgb(220, 195, 120);

/// Sky gradient (top, bottom) and hill colors (far, near) of a theme.
struct Scenery {
    sky_top: Rgb,
    sky_bot: Rgb,
    hill_far: Rgb,
    hill_near: Rgb,
}

fn scenery(themes: Themes) -> Scenery {
    if themes.contains(Themes::INFERNO) {
        Scenery {
            sky_top: Rgb(40, 0, 0),
            sky_bot: Rgb(140, 30, 10),
            hill_far: Rgb(90, 20, 10),
            hill_near: Rgb(60, 10, 5),
        }
    } else if themes.contains(Themes::NIGHT) {
        Scenery {
            sky_top: Rgb(5, 10, 40),
            sky_bot: Rgb(30, 40, 90),
            hill_far: Rgb(30, 60, 40),
            hill_near: Rgb(20, 45, 30),
        }
    } else if themes.contains(Themes::AFTERNOON) {
        Scenery {
            sky_top: Rgb(250, 130, 80),
            sky_bot: Rgb(255, 200, 120),
            hill_far: Rgb(140, 150, 60),
            hill_near: Rgb(110, 130, 45),
        }
    } else {
        Scenery {
            sky_top: Rgb(90, 150, 250),
            sky_bot: Rgb(190, 225, 250),
            hill_far: Rgb(120, 195, 75),
            hill_near: Rgb(95, 175, 55),
        }
    }
}

// ── Pixel buffer with half-block rendering ──────────────────────────────────

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SHADOW; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SHADOW);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    fn dim(&mut self) {
        for c in &mut self.px {
            *c = c.halved();
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(top.term()))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(top.term()))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(bot.term()))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

/// Prints text lines centered on the screen, on top of the last frame.
pub fn print_lines(out: &mut impl Write, lines: &[(String, Rgb)], cols: u16, rows: u16) -> io::Result<()> {
    let top = (rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        let x = (cols / 2).saturating_sub(text.chars().count() as u16 / 2);
        queue!(
            out,
            cursor::MoveTo(x, top + i as u16),
            style::SetBackgroundColor(SHADOW.term()),
            style::SetForegroundColor(color.term()),
            style::Print(text),
        )?;
    }
    queue!(out, style::ResetColor)?;
    out.flush()
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32;
                let py = y + row as i32;
                buf.set(px + 1, py + 1, SHADOW);
                buf.set(px, py, fg);
            }
        }
    }
}

/// Draws `n` starting at `x` (left-aligned) or centered on it.
fn draw_number(buf: &mut PixelBuf, x: i32, y: i32, n: u32, fg: Rgb, centered: bool) {
    let s = n.to_string();
    let total_w = s.len() as i32 * 4 - 1; // 3px per digit + 1px spacing
    let start_x = if centered { x - total_w / 2 } else { x };
    for (i, ch) in s.bytes().enumerate() {
        draw_digit(buf, start_x + i as i32 * 4, y, ch - b'0', fg);
    }
}

fn pseudo_rand(seed: u64) -> f64 {
    let x = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let bits = (x >> 33) ^ x;
    (bits % 1000) as f64 / 1000.0
}

// ── World to screen ─────────────────────────────────────────────────────────

/// Maps board coordinates onto the pixel buffer.
#[derive(Clone, Copy)]
struct View {
    pw: i32,
    ph: i32,
    sky_h: i32,
    sx: f64,
    sy: f64,
    shake: i32,
}

impl View {
    fn new(buf: &PixelBuf, shake: i32) -> Self {
        let ground_h = (buf.h as f64 * 0.15).max(4.0) as i32;
        let sky_h = buf.h as i32 - ground_h;
        Self {
            pw: buf.w as i32,
            ph: buf.h as i32,
            sky_h,
            // The board is a bit wider than the player's lane; leave a margin
            sx: buf.w as f64 / (BOARD_WIDTH + 40.0),
            sy: sky_h as f64 / BOARD_HEIGHT,
            shake,
        }
    }

    /// Screen rectangle `(x, y, w, h)` of a board box.
    fn rect(&self, left: f64, bottom: f64, w: f64, h: f64) -> (i32, i32, i32, i32) {
        let x = ((left + 20.0) * self.sx) as i32 + self.shake;
        let y = self.sky_h - ((bottom + h) * self.sy) as i32;
        (x, y, ((w * self.sx) as i32).max(1), ((h * self.sy) as i32).max(1))
    }
}

// ── Scenery ─────────────────────────────────────────────────────────────────

fn draw_sky(buf: &mut PixelBuf, view: View, s: &Scenery) {
    for y in 0..view.sky_h {
        let t = (y as u32 * 256 / view.sky_h.max(1) as u32) as u16;
        let c = Rgb::lerp(s.sky_top, s.sky_bot, t);
        for x in 0..view.pw {
            buf.set(x, y, c);
        }
    }
}

fn draw_stars(buf: &mut PixelBuf, view: View, t: f64, twinkle: bool) {
    let count = (view.pw * view.sky_h / 120).max(8) as u64;
    for i in 0..count {
        let x = (pseudo_rand(i * 2 + 1) * view.pw as f64) as i32;
        let y = (pseudo_rand(i * 2 + 2) * view.sky_h as f64 * 0.6) as i32;
        let glow = if twinkle {
            ((t * std::f64::consts::TAU / 5.0 + i as f64).sin() * 0.5 + 0.5) * 255.0
        } else {
            160.0
        };
        let g = glow as u8;
        buf.set(x, y, Rgb(g, g, g.saturating_add(30)));
    }
}

fn draw_hills(buf: &mut PixelBuf, view: View, s: &Scenery, scroll: f64) {
    let base = view.sky_h;
    let scale = view.ph as f64 / 48.0;
    for x in 0..view.pw {
        let fx = (x as f64 + scroll * 0.2) * 0.04;
        let h = (fx.sin() * 6.0 + (fx * 1.7).sin() * 3.0) * scale;
        let top = base - h as i32 - (4.0 * scale) as i32;
        for y in top..base {
            buf.set(x, y, s.hill_far);
        }
    }
    for x in 0..view.pw {
        let fx = (x as f64 + scroll * 0.4) * 0.06;
        let h = (fx.sin() * 4.0 + (fx * 2.3).sin() * 2.0) * scale;
        let top = base - h as i32 - (2.0 * scale) as i32;
        for y in top..base {
            buf.set(x, y, s.hill_near);
        }
    }
}

/// Drifting clouds; ghasts once the inferno starts.
fn draw_clouds(buf: &mut PixelBuf, view: View, t: f64, ghasts: bool) {
    let w = (view.pw / 10).max(6);
    let h = (w / 2).max(3);
    for i in 0..3 {
        let span = (view.pw + w * 2) as f64;
        let x = view.pw - ((t * 6.0 + i as f64 * span / 3.0) % span) as i32 + w;
        let y = view.sky_h / 8 + i * h;
        if ghasts {
            buf.fill_rect(x, y, h * 2, h * 2, WHITE);
            buf.fill_rect(x + h / 2, y + h / 2, 1, 1, SHADOW);
            buf.fill_rect(x + h + h / 2, y + h / 2, 1, 1, SHADOW);
            buf.fill_rect(x + h / 2, y + h + h / 3, h, 1, SHADOW);
        } else {
            buf.fill_rect(x, y + h / 2, w, h / 2 + 1, WHITE);
            buf.fill_rect(x + w / 4, y, w / 2, h, WHITE);
        }
    }
}

fn draw_ground(buf: &mut PixelBuf, view: View, scroll: f64, inferno: bool) {
    let gy = view.sky_h;
    let (grass, grass_light) = if inferno {
        (Rgb(120, 30, 10), Rgb(160, 50, 20))
    } else {
        (GRASS, GRASS_LIGHT)
    };
    for x in 0..view.pw {
        let alt = ((x as f64 + scroll) as i32 / 3) % 2 == 0;
        buf.set(x, gy, if alt { grass } else { grass_light });
        buf.set(x, gy + 1, grass);
    }
    for y in (gy + 2)..view.ph {
        for x in 0..view.pw {
            let mortar = (y - gy) % 4 == 0 || ((x as f64 + scroll) as i32 + (y - gy) / 4 * 3) % 8 == 0;
            buf.set(x, y, if mortar { BRICK_DARK } else { BRICK });
        }
    }
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

// ── Entities ────────────────────────────────────────────────────────────────

fn draw_obstacle(buf: &mut PixelBuf, view: View, o: &Obstacle) {
    if !o.visible {
        return;
    }
    match o.kind {
        ObstacleKind::Pipe => {
            let (x, y, w, h) = view.rect(o.left, 0.0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
            let cap_h = (h / 5).max(2);
            let cap_extra = (w / 8).max(1);
            for dx in 0..w {
                let c = pipe_shade(dx, w);
                for dy in cap_h..h {
                    buf.set(x + dx, y + dy, c);
                }
            }
            for dx in -cap_extra..(w + cap_extra) {
                let c = pipe_shade(dx + cap_extra, w + cap_extra * 2);
                for dy in 0..cap_h {
                    buf.set(x + dx, y + dy, c);
                }
                buf.set(x + dx, y, CAP_DARK);
                buf.set(x + dx, y + cap_h - 1, CAP_DARK);
            }
        }
        ObstacleKind::Bullet => {
            let (x, y, w, h) = view.rect(o.left, 20.0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT / 2.0);
            buf.fill_rect(x + h / 2, y, w - h / 2, h, BULLET);
            buf.fill_rect(x, y + h / 4, h / 2, h / 2, BULLET);
            buf.set(x + h / 2 + 1, y + 1, WHITE);
        }
    }
}

fn draw_coins(buf: &mut PixelBuf, view: View, session: &Session) {
    for coin in session.coins() {
        let (x, y, w, h) = view.rect(coin.left, coin.bottom, COIN_SIZE, COIN_SIZE);
        buf.fill_rect(x, y + 1, w, (h - 2).max(1), COIN);
        buf.fill_rect(x + 1, y, (w - 2).max(1), h, COIN);
        buf.set(x + w / 2, y + h / 3, COIN_HI);
    }
}

/// Draws one part of a sprite, given as fractions of its box, mirroring when
/// `flipped`.
#[allow(clippy::too_many_arguments)]
fn part(buf: &mut PixelBuf, rect: (i32, i32, i32, i32), flipped: bool, fx0: f64, fy0: f64, fx1: f64, fy1: f64, c: Rgb) {
    let (x, y, w, h) = rect;
    let (fx0, fx1) = if flipped { (1.0 - fx1, 1.0 - fx0) } else { (fx0, fx1) };
    let x0 = x + (fx0 * w as f64) as i32;
    let x1 = x + ((fx1 * w as f64) as i32).max((fx0 * w as f64) as i32 + 1);
    let y0 = y + (fy0 * h as f64) as i32;
    let y1 = y + ((fy1 * h as f64) as i32).max((fy0 * h as f64) as i32 + 1);
    buf.fill_rect(x0, y0, x1 - x0, y1 - y0, c);
}

fn draw_figure(buf: &mut PixelBuf, rect: (i32, i32, i32, i32), flipped: bool, p: Palette, dead: bool) {
    part(buf, rect, flipped, 0.30, 0.05, 0.80, 0.40, p.detail); // head
    part(buf, rect, flipped, 0.25, 0.00, 0.85, 0.12, p.body); // hat / hair
    if dead {
        part(buf, rect, flipped, 0.62, 0.18, 0.74, 0.28, SHADOW);
    } else {
        part(buf, rect, flipped, 0.66, 0.18, 0.72, 0.26, SHADOW); // eye
    }
    part(buf, rect, flipped, 0.20, 0.40, 0.80, 0.75, p.body); // torso
    part(buf, rect, flipped, 0.80, 0.45, 0.92, 0.60, p.detail); // hand
    part(buf, rect, flipped, 0.25, 0.75, 0.45, 1.00, p.accent); // legs
    part(buf, rect, flipped, 0.55, 0.75, 0.75, 1.00, p.accent);
}

fn draw_player(buf: &mut PixelBuf, view: View, session: &Session) {
    // Blink while invulnerable
    if session.is_invulnerable() && session.now().as_millis() / 50 % 2 == 0 {
        return;
    }
    let player = session.player();
    let rect = view.rect(player.left(), player.bottom, PLAYER_SIZE, PLAYER_SIZE);
    match player.look {
        Look::Character(c) => draw_figure(buf, rect, player.flipped, c.palette(), false),
        Look::Secret(skin) => draw_figure(buf, rect, player.flipped, skin.palette(), false),
        Look::GameOver(c) => {
            let p = c.palette();
            let grey = Palette {
                body: p.body.halved(),
                accent: p.accent.halved(),
                detail: p.detail.halved(),
            };
            draw_figure(buf, rect, player.flipped, grey, true);
        }
        Look::Fainted => {
            // A pale ghost
            part(buf, rect, player.flipped, 0.20, 0.10, 0.80, 0.90, GHOST);
            part(buf, rect, player.flipped, 0.20, 0.90, 0.35, 1.00, GHOST);
            part(buf, rect, player.flipped, 0.65, 0.90, 0.80, 1.00, GHOST);
            part(buf, rect, player.flipped, 0.35, 0.30, 0.45, 0.45, SHADOW);
            part(buf, rect, player.flipped, 0.55, 0.30, 0.65, 0.45, SHADOW);
        }
    }
}

fn draw_embers(buf: &mut PixelBuf, view: View, session: &Session, t: f64) {
    for ember in session.embers() {
        if t < ember.delay {
            continue;
        }
        let rise = ((t - ember.delay) % 3.0) / 3.0;
        let x = (ember.left_fraction * view.pw as f64) as i32 + view.shake;
        let y = view.sky_h - (rise * view.sky_h as f64) as i32;
        buf.set(x, y, EMBER);
    }
}

fn draw_hud(buf: &mut PixelBuf, view: View, session: &Session) {
    draw_number(buf, view.pw / 2, 2, session.score(), WHITE, true);
    for i in 0..session.lives().min(20) as i32 {
        let x = 2 + i * 5;
        buf.fill_rect(x, 3, 1, 1, HEART);
        buf.fill_rect(x + 2, 3, 1, 1, HEART);
        buf.fill_rect(x, 4, 3, 1, HEART);
        buf.fill_rect(x + 1, 5, 1, 1, HEART);
    }
    let coins = session.coins_collected();
    let digits = coins.to_string().len() as i32;
    let x = view.pw - 2 - digits * 4 - 4;
    buf.fill_rect(x, 3, 3, 3, COIN);
    draw_number(buf, x + 5, 2, coins, COIN, false);
}

// ── Scenes ──────────────────────────────────────────────────────────────────

/// Draws the world of `session` into `buf`.
pub fn draw_session(buf: &mut PixelBuf, session: &Session) {
    let t = session.now().as_secs_f64();
    let themes = session.themes();
    let inferno = themes.contains(Themes::INFERNO);
    let shake = if inferno && session.phase() != Phase::Dead {
        ((t * 40.0).sin() * 1.5) as i32
    } else {
        0
    };
    let view = View::new(buf, shake);
    let s = scenery(themes);
    // Scenery scrolls with the pipe speed
    let scroll = t * Obstacle::velocity(session.speed()) * view.sx;

    draw_sky(buf, view, &s);
    if themes.contains(Themes::AFTERNOON) {
        draw_stars(buf, view, t, themes.contains(Themes::NIGHT));
    }
    draw_clouds(buf, view, t, inferno);
    draw_hills(buf, view, &s, scroll);
    draw_obstacle(buf, view, session.pipe());
    draw_obstacle(buf, view, session.bullet());
    draw_ground(buf, view, scroll, inferno);
    draw_coins(buf, view, session);
    draw_player(buf, view, session);
    if inferno {
        draw_embers(buf, view, session, t);
    }
    draw_hud(buf, view, session);

    if session.is_paused() {
        buf.dim();
    }
}

/// Text shown over the world, if any.
pub fn session_lines(session: &Session) -> Vec<(String, Rgb)> {
    match session.phase() {
        Phase::AwaitingContinue => vec![
            (format!(" Ouch! {} lives left ", session.lives()), WHITE),
            (" [Enter] Continue   [Tab] Restart ".to_string(), PANEL),
        ],
        Phase::Dead => {
            let mut lines = vec![
                (" GAME OVER ".to_string(), HEART),
                (format!(" {}: {} ", session.nick(), session.final_score().unwrap_or(0)), WHITE),
            ];
            if let Some(best) = session.best() {
                lines.push((format!(" Best: {} by {} ", best.score, best.nick), COIN));
            }
            lines.push((" [Tab] Play again   [Esc] Quit ".to_string(), PANEL));
            lines
        }
        _ => Vec::new(),
    }
}

/// Draws the start screen backdrop with the selected character.
pub fn draw_lobby(buf: &mut PixelBuf, lobby: &Lobby, t: f64) {
    let view = View::new(buf, 0);
    let s = scenery(Themes::empty());
    draw_sky(buf, view, &s);
    draw_clouds(buf, view, t, false);
    draw_hills(buf, view, &s, t * 20.0);
    draw_ground(buf, view, t * 20.0, false);
    let c = lobby.character();
    let rect = view.rect(BOARD_WIDTH / 2.0 - PLAYER_SIZE / 2.0, 0.0, PLAYER_SIZE, PLAYER_SIZE);
    draw_figure(buf, rect, c.faces_left(), c.palette(), false);
}

pub fn lobby_lines(lobby: &Lobby) -> Vec<(String, Rgb)> {
    let mut lines = vec![
        (" PIPE RUNNER ".to_string(), COIN),
        (format!(" Nick: {}_ ", lobby.nick()), WHITE),
        (format!(" < {} > ", character_label(lobby.character())), PANEL),
        (" type a nick, arrows pick, Enter starts ".to_string(), GHOST),
    ];
    if let Some(prompt) = lobby.prompt() {
        lines.push((format!(" {prompt} "), HEART));
    }
    lines
}

fn character_label(c: Character) -> String {
    c.id().to_uppercase()
}
