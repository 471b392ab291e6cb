//! Snake rules - growth, self-collision, and apple placement.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::{InputCommand, Point, SNAKE_FRAME_HEIGHT, SNAKE_FRAME_WIDTH};

/// The starting column of the snake body.
const START_COL: i32 = 3;

/// Snake on a fixed 30x20 frame.
///
/// The body is ordered tail first, head last. Self-collision is checked
/// against the body after the tail trim, so moving into the cell the tail
/// vacates on the same tick is legal.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    body: VecDeque<Point>,
    vel_row: i32,
    vel_col: i32,
    apple: Point,
    score: u32,
    paused: bool,
    over: bool,
    rng: SimpleRng,
}

impl SnakeGame {
    pub fn new(seed: u32) -> Self {
        // Five cells pointing up, head on top.
        let body = (0..5).map(|i| Point::new(9 - i, START_COL)).collect();
        Self {
            body,
            vel_row: -1,
            vel_col: 0,
            apple: Point::new(10, 10),
            score: 0,
            paused: false,
            over: false,
            rng: SimpleRng::new(seed),
        }
    }

    /// Apply one decoded command.
    ///
    /// A direction that would reverse the current velocity outright is
    /// ignored; a 180-degree turn would always be an instant self-collision.
    pub fn handle_command(&mut self, cmd: InputCommand) {
        match cmd {
            InputCommand::MoveUp if self.vel_row != 1 => {
                self.vel_row = -1;
                self.vel_col = 0;
            }
            InputCommand::MoveDown if self.vel_row != -1 => {
                self.vel_row = 1;
                self.vel_col = 0;
            }
            InputCommand::MoveLeft if self.vel_col != 1 => {
                self.vel_row = 0;
                self.vel_col = -1;
            }
            InputCommand::MoveRight if self.vel_col != -1 => {
                self.vel_row = 0;
                self.vel_col = 1;
            }
            InputCommand::TogglePause => self.paused = !self.paused,
            _ => {}
        }
    }

    /// One simulation step: advance the head, grow or trim, then check the
    /// terminal conditions.
    pub fn tick(&mut self) {
        if self.paused || self.over {
            return;
        }
        let Some(head) = self.body.back().copied() else {
            return;
        };

        let new_head = head.offset(self.vel_row, self.vel_col);
        self.body.push_back(new_head);

        if new_head == self.apple {
            // Consumed: keep the tail for a net growth of one cell.
            self.score += 1;
            self.relocate_apple();
        } else {
            self.body.pop_front();
        }

        if self.hits_wall(new_head) || self.eats_itself(new_head) {
            self.over = true;
        }
    }

    fn hits_wall(&self, head: Point) -> bool {
        head.row < 0
            || head.row >= SNAKE_FRAME_HEIGHT
            || head.col < 0
            || head.col >= SNAKE_FRAME_WIDTH
    }

    /// Head against every post-trim body cell except the head itself.
    fn eats_itself(&self, head: Point) -> bool {
        self.body
            .iter()
            .take(self.body.len().saturating_sub(1))
            .any(|&p| p == head)
    }

    /// Rejection-sample a fresh apple cell that no body cell covers.
    ///
    /// The frame always has free cells, so this terminates.
    fn relocate_apple(&mut self) {
        loop {
            let candidate = Point::new(
                self.rng.next_range(SNAKE_FRAME_HEIGHT as u32) as i32,
                self.rng.next_range(SNAKE_FRAME_WIDTH as u32) as i32,
            );
            if !self.body.contains(&candidate) {
                self.apple = candidate;
                return;
            }
        }
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Option<Point> {
        self.body.back().copied()
    }

    pub fn apple(&self) -> Point {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}
