//! Snake rule tests through the public API.

use term_arcade::core::SnakeGame;
use term_arcade::types::{InputCommand, Point};

#[test]
fn test_snake_starts_with_five_cells_heading_up() {
    let game = SnakeGame::new(1);
    let body: Vec<Point> = game.body().collect();
    assert_eq!(body.len(), 5);
    assert_eq!(game.head(), Some(Point::new(5, 3)));
    assert_eq!(body[0], Point::new(9, 3), "tail comes first");
    assert_eq!(game.apple(), Point::new(10, 10));
}

#[test]
fn test_length_is_constant_without_apples() {
    let mut game = SnakeGame::new(1);
    for _ in 0..3 {
        game.tick();
    }
    assert_eq!(game.body().count(), 5);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_snake_dies_on_the_top_wall() {
    let mut game = SnakeGame::new(1);

    // Head starts at row 5 moving up; row 0 is the last valid cell.
    for tick in 1..=5 {
        game.tick();
        assert!(!game.is_over(), "alive at tick {tick}");
    }
    game.tick();
    assert!(game.is_over());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_eating_the_apple_grows_and_scores() {
    let mut game = SnakeGame::new(1);

    // Steer from (5, 3) to the apple at (10, 10): right 7, then down 5.
    game.handle_command(InputCommand::MoveRight);
    for _ in 0..7 {
        game.tick();
    }
    assert_eq!(game.head(), Some(Point::new(5, 10)));

    game.handle_command(InputCommand::MoveDown);
    for _ in 0..4 {
        game.tick();
    }
    assert_eq!(game.score(), 0);

    game.tick();
    assert_eq!(game.head(), Some(Point::new(10, 10)));
    assert_eq!(game.score(), 1);
    assert_eq!(game.body().count(), 6, "tail kept on the growth tick");
    assert!(!game.is_over());

    // The apple moved somewhere free.
    let apple = game.apple();
    assert_ne!(apple, Point::new(10, 10));
    assert!(game.body().all(|p| p != apple));
}

#[test]
fn test_reversal_is_rejected() {
    let mut game = SnakeGame::new(1);

    // Moving up; an immediate down command must be ignored.
    game.handle_command(InputCommand::MoveDown);
    game.tick();
    assert_eq!(game.head(), Some(Point::new(4, 3)));

    // A perpendicular turn is accepted.
    game.handle_command(InputCommand::MoveLeft);
    game.tick();
    assert_eq!(game.head(), Some(Point::new(4, 2)));

    // Now moving left; an immediate right command must be ignored.
    game.handle_command(InputCommand::MoveRight);
    game.tick();
    assert_eq!(game.head(), Some(Point::new(4, 1)));
}

#[test]
fn test_tight_turn_into_own_body_ends_the_game() {
    let mut game = SnakeGame::new(1);

    game.handle_command(InputCommand::MoveRight);
    game.tick();
    game.handle_command(InputCommand::MoveDown);
    game.tick();
    assert!(!game.is_over());

    // Turning back left lands on a cell the body still occupies.
    game.handle_command(InputCommand::MoveLeft);
    game.tick();
    assert!(game.is_over());
}

#[test]
fn test_pause_freezes_the_snake() {
    let mut game = SnakeGame::new(1);
    game.handle_command(InputCommand::TogglePause);
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.head(), Some(Point::new(5, 3)));
    assert!(!game.is_over());

    game.handle_command(InputCommand::TogglePause);
    game.tick();
    assert_eq!(game.head(), Some(Point::new(4, 3)));
}
