use maze_chase::entity::pacman::Player;
use maze_chase::events::PlayerEvent;
use maze_chase::map::{direction::Direction, food::FoodLayer, food::FoodType, Maze};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{maze_from, tile};

const OPEN_MAZE: [&str; 5] = ["#####", "#   #", "#   #", "#   #", "#####"];

fn empty_food() -> FoodLayer {
    FoodLayer::new(vec![vec![FoodType::None; 5]; 5]).unwrap()
}

#[test]
fn test_reverse_applies_immediately() {
    let maze = maze_from(&OPEN_MAZE);
    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);
    assert_eq!(player.direction(), Direction::Left);

    player.set_dir(Direction::Right);

    assert_eq!(player.direction(), Direction::Right);
    assert_eq!(player.input_dir(), None);
}

#[test]
fn test_blocked_player_does_not_move() {
    let maze = maze_from(&OPEN_MAZE);
    let mut food = empty_food();
    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);

    assert_eq!(player.update(0.1, &maze, &mut food), None);
    assert_eq!(player.pixel(), Maze::tile_center(tile(1, 1)));
    assert_that(&player.is_moving()).is_false();
}

#[test]
fn test_buffered_turn_at_center() {
    let maze = maze_from(&OPEN_MAZE);
    let mut food = empty_food();
    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);

    player.set_dir(Direction::Down);
    assert_eq!(player.input_dir(), Some(Direction::Down));

    player.update(0.1, &maze, &mut food);
    assert_eq!(player.direction(), Direction::Down);
    assert_eq!(player.tile(), tile(1, 2));
    assert_that(&player.is_moving()).is_true();
}

#[test]
fn test_illegal_turn_is_dropped() {
    let maze = maze_from(&OPEN_MAZE);
    let mut food = empty_food();
    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);

    player.set_dir(Direction::Up);
    player.update(0.1, &maze, &mut food);

    assert_eq!(player.direction(), Direction::Left);
    assert_eq!(player.input_dir(), None);
}

#[test]
fn test_buffered_turn_waits_for_center() {
    let maze = maze_from(&OPEN_MAZE);
    let mut food = empty_food();
    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);
    player.set_dir(Direction::Right);
    player.update(0.05, &maze, &mut food);

    player.set_dir(Direction::Down);
    player.update(0.05, &maze, &mut food);
    assert_eq!(player.direction(), Direction::Right);
    assert_eq!(player.input_dir(), Some(Direction::Down));
    assert_eq!(player.tile(), tile(2, 1));

    player.update(0.1, &maze, &mut food);
    assert_eq!(player.direction(), Direction::Down);
    assert_eq!(player.pixel(), Maze::tile_center(tile(2, 1)));
}

#[test]
fn test_power_up_lifecycle() {
    let maze = maze_from(&OPEN_MAZE);
    let mut grid = vec![vec![FoodType::None; 5]; 5];
    grid[1][2] = FoodType::Special;
    grid[1][3] = FoodType::Normal;
    let mut food = FoodLayer::new(grid).unwrap();

    let mut player = Player::new(&maze, tile(1, 1), 80.0, 6.0);
    player.set_dir(Direction::Right);

    assert_eq!(player.update(0.1, &maze, &mut food), Some(PlayerEvent::PowerUp));
    assert_that(&player.is_power_up_active()).is_true();
    assert_eq!(player.power_up_remaining(), 6.0);
    assert_eq!(food.remaining(), 1);

    // stutter frame, timer still runs
    let pixel = player.pixel();
    assert_eq!(player.update(1.0, &maze, &mut food), None);
    assert_eq!(player.pixel(), pixel);
    assert_eq!(player.power_up_remaining(), 5.0);

    assert_eq!(player.update(5.0, &maze, &mut food), Some(PlayerEvent::PowerUpEnd));
    assert_that(&player.is_power_up_active()).is_false();
    assert_eq!(player.power_up_remaining(), 0.0);

    // expiry is reported once
    assert_eq!(player.update(0.01, &maze, &mut food), None);
}

#[test]
fn test_new_power_up_beats_expiry() {
    let maze = maze_from(&OPEN_MAZE);
    let mut grid = vec![vec![FoodType::None; 5]; 5];
    grid[1][2] = FoodType::Special;
    grid[1][3] = FoodType::Special;
    let mut food = FoodLayer::new(grid).unwrap();

    let mut player = Player::new(&maze, tile(1, 1), 80.0, 0.05);
    player.set_dir(Direction::Right);

    assert_eq!(player.update(0.1, &maze, &mut food), Some(PlayerEvent::PowerUp));
    assert_eq!(player.update(0.01, &maze, &mut food), None);

    // the first power-up runs out during this update, then the second pellet is eaten
    assert_eq!(player.update(0.2, &maze, &mut food), Some(PlayerEvent::PowerUp));
    assert_that(&player.is_power_up_active()).is_true();
    assert_eq!(player.tile(), tile(3, 1));
}
