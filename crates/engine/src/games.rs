//! `Game` implementations wiring the rule engines to their views.

use std::time::Duration;

use term_arcade_core::{PongGame, SnakeGame, Winner, ZombieGame};
use term_arcade_term::{view, FrameBuffer, Viewport};
use term_arcade_types::{InputCommand, PONG_TICK_MS, SNAKE_TICK_MS, ZOMBIES_TICK_MS};

use crate::Game;

impl Game for PongGame {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(PONG_TICK_MS)
    }

    fn handle_command(&mut self, cmd: InputCommand) {
        PongGame::handle_command(self, cmd);
    }

    fn tick(&mut self) {
        PongGame::tick(self);
    }

    fn render(&self, vp: Viewport, fb: &mut FrameBuffer) {
        view::draw_pong(self, vp, fb);
    }

    fn is_over(&self) -> bool {
        PongGame::is_over(self)
    }

    fn end_lines(&self) -> Vec<String> {
        let winner = match self.winner() {
            Some(Winner::Left) => "Player 1",
            Some(Winner::Right) => "Player 2",
            None => "Nobody",
        };
        vec![
            format!("{winner} won the game!"),
            String::from("Press Enter to exit"),
        ]
    }
}

impl Game for SnakeGame {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(SNAKE_TICK_MS)
    }

    fn handle_command(&mut self, cmd: InputCommand) {
        SnakeGame::handle_command(self, cmd);
    }

    fn tick(&mut self) {
        SnakeGame::tick(self);
    }

    fn render(&self, vp: Viewport, fb: &mut FrameBuffer) {
        view::draw_snake(self, vp, fb);
    }

    fn is_over(&self) -> bool {
        SnakeGame::is_over(self)
    }

    fn end_lines(&self) -> Vec<String> {
        vec![
            String::from("Game Over"),
            format!("Your score is {}", self.score()),
            String::from("Press Enter to quit"),
        ]
    }
}

impl Game for ZombieGame {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(ZOMBIES_TICK_MS)
    }

    fn handle_command(&mut self, cmd: InputCommand) {
        ZombieGame::handle_command(self, cmd);
    }

    fn tick(&mut self) {
        ZombieGame::tick(self);
    }

    fn render(&self, vp: Viewport, fb: &mut FrameBuffer) {
        view::draw_zombies(self, vp, fb);
    }

    fn is_over(&self) -> bool {
        ZombieGame::is_over(self)
    }

    fn end_lines(&self) -> Vec<String> {
        vec![
            String::from("Game Over"),
            format!("Your score is {}", self.score()),
            String::from("Press Enter to quit"),
        ]
    }
}
