//! Pong rules - two paddles, one ball, first miss loses.

use crate::object::GameObject;
use crate::types::{
    InputCommand, BALL_VEL_COL, BALL_VEL_ROW, BLOCK_SYMBOL, DOT_SYMBOL, PADDLE_HEIGHT,
};

/// Which side won the rally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The left paddle (player one, `w`/`s`).
    Left,
    /// The right paddle (player two, arrow keys).
    Right,
}

/// Pong plays on the full terminal, captured once at startup; the frame is
/// not recomputed when the terminal resizes mid-game.
#[derive(Debug, Clone)]
pub struct PongGame {
    frame_w: i32,
    frame_h: i32,
    left_paddle: GameObject,
    right_paddle: GameObject,
    ball: GameObject,
    paused: bool,
}

impl PongGame {
    pub fn new(frame_w: i32, frame_h: i32) -> Self {
        let paddle_top = frame_h / 2 - PADDLE_HEIGHT / 2;
        Self {
            frame_w,
            frame_h,
            left_paddle: GameObject::rect(paddle_top, 0, 1, PADDLE_HEIGHT, BLOCK_SYMBOL),
            right_paddle: GameObject::rect(paddle_top, frame_w - 1, 1, PADDLE_HEIGHT, BLOCK_SYMBOL),
            ball: GameObject::cell(
                frame_h / 2,
                frame_w / 2,
                DOT_SYMBOL,
                BALL_VEL_ROW,
                BALL_VEL_COL,
            ),
            paused: false,
        }
    }

    /// Apply one decoded command. Commands for other games are ignored.
    pub fn handle_command(&mut self, cmd: InputCommand) {
        match cmd {
            InputCommand::MoveUp => Self::move_paddle(&mut self.left_paddle, -1, self.frame_h),
            InputCommand::MoveDown => Self::move_paddle(&mut self.left_paddle, 1, self.frame_h),
            InputCommand::PlayerTwoUp => {
                Self::move_paddle(&mut self.right_paddle, -1, self.frame_h)
            }
            InputCommand::PlayerTwoDown => {
                Self::move_paddle(&mut self.right_paddle, 1, self.frame_h)
            }
            InputCommand::TogglePause => self.paused = !self.paused,
            _ => {}
        }
    }

    /// Bounds-gated paddle movement: up only while above row 0 is free, down
    /// only while the paddle's bottom stays inside the frame.
    fn move_paddle(paddle: &mut GameObject, dir: i32, frame_h: i32) {
        let top = paddle.points[0].row;
        if dir < 0 && top <= 0 {
            return;
        }
        if dir > 0 && top + PADDLE_HEIGHT >= frame_h {
            return;
        }
        paddle.translate(dir, 0);
    }

    /// One simulation step: move the ball, then bounce off walls and paddles.
    pub fn tick(&mut self) {
        if self.paused || self.is_over() {
            return;
        }

        self.ball.step();

        // Vertical walls reflect the row velocity one tick before the exit.
        let next_row = self.ball.points[0].row + self.ball.vel_row;
        if next_row < 0 || next_row >= self.frame_h {
            self.ball.vel_row = -self.ball.vel_row;
        }

        if self.hits_paddle(&self.left_paddle) || self.hits_paddle(&self.right_paddle) {
            self.ball.vel_col = -self.ball.vel_col;
        }
    }

    /// Direction-aware paddle collision: the ball must be moving toward the
    /// paddle's column and its row must lie within the paddle span.
    fn hits_paddle(&self, paddle: &GameObject) -> bool {
        let ball = self.ball.points[0];
        let paddle_top = paddle.points[0].row;
        let paddle_col = paddle.points[0].col;

        let crosses_column = if ball.col < paddle_col {
            ball.col + self.ball.vel_col >= paddle_col
        } else {
            ball.col + self.ball.vel_col <= paddle_col
        };

        crosses_column && ball.row >= paddle_top && ball.row < paddle_top + PADDLE_HEIGHT
    }

    /// The side that won, if the ball has left the frame horizontally.
    ///
    /// A ball past the left edge means the left paddle missed, so the right
    /// player wins, and vice versa. No draw is possible.
    pub fn winner(&self) -> Option<Winner> {
        let col = self.ball.points[0].col;
        if col < 0 {
            Some(Winner::Right)
        } else if col >= self.frame_w {
            Some(Winner::Left)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ball(&self) -> &GameObject {
        &self.ball
    }

    pub fn left_paddle(&self) -> &GameObject {
        &self.left_paddle
    }

    pub fn right_paddle(&self) -> &GameObject {
        &self.right_paddle
    }

    pub fn frame_size(&self) -> (i32, i32) {
        (self.frame_w, self.frame_h)
    }
}
