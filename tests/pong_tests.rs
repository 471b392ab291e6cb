//! Pong rule tests through the public API.

use term_arcade::core::{PongGame, Winner};
use term_arcade::types::{InputCommand, PADDLE_HEIGHT};

#[test]
fn test_untouched_ball_exits_right_and_left_player_wins() {
    // 20x12 frame: ball starts at (6, 10) with velocity (1, 2) and misses
    // the static right paddle (rows 4..8) on its way out.
    let mut game = PongGame::new(20, 12);

    for tick in 1..=4 {
        game.tick();
        assert!(!game.is_over(), "still in flight at tick {tick}");
    }
    game.tick();
    assert_eq!(game.winner(), Some(Winner::Left));
    assert!(game.is_over());
}

#[test]
fn test_moved_paddle_returns_the_ball() {
    // Same frame, but the right paddle drops to meet the ball: after four
    // ticks the ball is at (10, 18) heading for column 19.
    let mut game = PongGame::new(20, 12);
    for _ in 0..6 {
        game.handle_command(InputCommand::PlayerTwoDown);
    }

    for _ in 0..4 {
        game.tick();
    }
    assert!(!game.is_over());

    game.tick();
    assert!(!game.is_over(), "paddle bounce keeps the ball in play");
    game.tick();
    assert!(!game.is_over());
}

#[test]
fn test_paddles_stop_at_the_frame_edges() {
    let mut game = PongGame::new(20, 12);

    for _ in 0..30 {
        game.handle_command(InputCommand::MoveUp);
        game.handle_command(InputCommand::PlayerTwoDown);
    }
    assert_eq!(game.left_paddle().points[0].row, 0);
    assert_eq!(game.right_paddle().points[0].row, 12 - PADDLE_HEIGHT);
}

#[test]
fn test_pause_stops_and_resumes_the_rally() {
    let mut game = PongGame::new(20, 12);
    let start = game.ball().points[0];

    game.handle_command(InputCommand::TogglePause);
    assert!(game.is_paused());
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.ball().points[0], start);

    game.handle_command(InputCommand::TogglePause);
    game.tick();
    assert_ne!(game.ball().points[0], start);
}
