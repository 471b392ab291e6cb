//! Game views: map rule-engine state onto a framebuffer.
//!
//! The logical play field is centered on the physical screen; everything a
//! game draws goes through the frame origin so the games themselves never
//! see physical coordinates.

use crate::core::{GameObject, PongGame, SnakeGame, ZombieGame};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{
    BLOCK_SYMBOL, DOT_SYMBOL, SNAKE_FRAME_HEIGHT, SNAKE_FRAME_WIDTH, ZOMBIES_FRAME_HEIGHT,
    ZOMBIES_FRAME_WIDTH,
};
use crossterm::style::Color;

/// Physical terminal dimensions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left screen cell `(row, col)` of a centered logical frame.
///
/// May be negative when the terminal is smaller than the frame; drawing
/// clamps per cell.
pub fn frame_origin(vp: Viewport, frame_w: i32, frame_h: i32) -> (i32, i32) {
    (
        vp.height as i32 / 2 - frame_h / 2,
        vp.width as i32 / 2 - frame_w / 2,
    )
}

/// Put one glyph at frame-local coordinates.
fn put_in_frame(fb: &mut FrameBuffer, origin: (i32, i32), row: i32, col: i32, ch: char, style: CellStyle) {
    let y = origin.0 + row;
    let x = origin.1 + col;
    if y < 0 || x < 0 || y > u16::MAX as i32 || x > u16::MAX as i32 {
        return;
    }
    fb.put_char(x as u16, y as u16, ch, style);
}

/// Draw a game object through the frame origin.
fn draw_object(fb: &mut FrameBuffer, origin: (i32, i32), obj: &GameObject, style: CellStyle) {
    for (p, ch) in obj.glyphs() {
        put_in_frame(fb, origin, p.row, p.col, ch, style);
    }
}

/// Hollow border one cell outside the logical frame.
fn draw_frame_border(fb: &mut FrameBuffer, origin: (i32, i32), frame_w: i32, frame_h: i32) {
    let style = CellStyle::default();
    for c in -1..=frame_w {
        put_in_frame(fb, origin, -1, c, BLOCK_SYMBOL, style);
        put_in_frame(fb, origin, frame_h, c, BLOCK_SYMBOL, style);
    }
    for r in 0..frame_h {
        put_in_frame(fb, origin, r, -1, BLOCK_SYMBOL, style);
        put_in_frame(fb, origin, r, frame_w, BLOCK_SYMBOL, style);
    }
}

fn draw_score(fb: &mut FrameBuffer, score: u32) {
    fb.put_str(0, 0, &format!("Score: {score}"), CellStyle::default());
}

/// Pong view: absolute coordinates, no border, pause label in the middle.
pub fn draw_pong(game: &PongGame, vp: Viewport, fb: &mut FrameBuffer) {
    fb.resize(vp.width, vp.height);
    fb.clear();

    let origin = (0, 0);
    draw_object(fb, origin, game.left_paddle(), CellStyle::default());
    draw_object(fb, origin, game.right_paddle(), CellStyle::default());
    draw_object(fb, origin, game.ball(), CellStyle::fg(Color::Yellow));

    if game.is_paused() {
        fb.put_text_centered(vp.height / 2, "Paused", CellStyle::default());
    }
}

/// Snake view: centered bordered frame, body, apple, and score line.
pub fn draw_snake(game: &SnakeGame, vp: Viewport, fb: &mut FrameBuffer) {
    fb.resize(vp.width, vp.height);
    fb.clear();

    let origin = frame_origin(vp, SNAKE_FRAME_WIDTH, SNAKE_FRAME_HEIGHT);
    draw_score(fb, game.score());
    draw_frame_border(fb, origin, SNAKE_FRAME_WIDTH, SNAKE_FRAME_HEIGHT);

    for p in game.body() {
        put_in_frame(fb, origin, p.row, p.col, BLOCK_SYMBOL, CellStyle::fg(Color::Green));
    }
    let apple = game.apple();
    put_in_frame(fb, origin, apple.row, apple.col, DOT_SYMBOL, CellStyle::fg(Color::Red));
}

/// Zombie-shooter view: centered bordered frame, player, zombies, bullets.
pub fn draw_zombies(game: &ZombieGame, vp: Viewport, fb: &mut FrameBuffer) {
    fb.resize(vp.width, vp.height);
    fb.clear();

    let origin = frame_origin(vp, ZOMBIES_FRAME_WIDTH, ZOMBIES_FRAME_HEIGHT);
    draw_score(fb, game.score());
    draw_frame_border(fb, origin, ZOMBIES_FRAME_WIDTH, ZOMBIES_FRAME_HEIGHT);

    draw_object(fb, origin, game.player(), CellStyle::fg(Color::Cyan));
    for z in game.zombies() {
        draw_object(fb, origin, z, CellStyle::fg(Color::Red));
    }
    for b in game.bullets() {
        draw_object(fb, origin, b, CellStyle::fg(Color::Yellow));
    }
}
