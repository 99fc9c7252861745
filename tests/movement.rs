use glam::Vec2;
use maze_chase::constants::TILE_SIZE;
use maze_chase::entity::Mover;
use maze_chase::map::{direction::Direction, Maze};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{maze_from, tile};

const TUNNEL_MAZE: [&str; 3] = ["#######", "       ", "#######"];
const OPEN_MAZE: [&str; 5] = ["#####", "#   #", "#   #", "#   #", "#####"];

#[test]
fn test_spawn_centers_on_tile() {
    let maze = maze_from(&OPEN_MAZE);
    let mover = Mover::spawn(&maze, tile(2, 3), Direction::Left, 80.0);

    assert_eq!(mover.tile(), tile(2, 3));
    assert_eq!(mover.prev_tile(), tile(2, 3));
    assert_eq!(mover.pixel(), Maze::tile_center(tile(2, 3)));
    assert_that(&mover.is_on_tile_center()).is_true();
}

#[test]
fn test_spawn_on_wall_falls_back() {
    let maze = maze_from(&OPEN_MAZE);
    let mover = Mover::spawn(&maze, tile(0, 0), Direction::Left, 80.0);

    assert_eq!(mover.tile(), tile(1, 1));

    let off_grid = Mover::spawn(&maze, tile(-3, 9), Direction::Left, 80.0);
    assert_eq!(off_grid.tile(), tile(1, 1));
}

#[test]
fn test_advance_stops_on_next_center() {
    let maze = maze_from(&OPEN_MAZE);
    let mut mover = Mover::spawn(&maze, tile(1, 1), Direction::Right, 80.0);

    let moved = mover.advance(6.0, &maze);
    assert_eq!(moved, 6.0);
    assert_eq!(mover.tile(), tile(1, 1));
    assert_that(&mover.is_on_tile_center()).is_false();

    let moved = mover.advance(100.0, &maze);
    assert_eq!(moved, TILE_SIZE - 6.0);
    assert_eq!(mover.tile(), tile(2, 1));
    assert_eq!(mover.pixel(), Maze::tile_center(tile(2, 1)));
}

#[test]
fn test_advance_blocked_by_wall() {
    let maze = maze_from(&OPEN_MAZE);
    let mut mover = Mover::spawn(&maze, tile(1, 1), Direction::Up, 80.0);

    assert_eq!(mover.advance(5.0, &maze), 0.0);
    assert_eq!(mover.pixel(), Maze::tile_center(tile(1, 1)));

    mover.direction = Direction::Left;
    assert_eq!(mover.advance(5.0, &maze), 0.0);
    mover.direction = Direction::Down;
    assert_eq!(mover.advance(5.0, &maze), 5.0);
}

#[test]
fn test_advance_wraps_through_tunnel() {
    let maze = maze_from(&TUNNEL_MAZE);
    let mut mover = Mover::spawn(&maze, tile(0, 1), Direction::Left, 80.0);

    let moved = mover.advance(100.0, &maze);
    assert_eq!(moved, TILE_SIZE);
    assert_eq!(mover.tile(), tile(6, 1));
    assert_eq!(mover.pixel(), Maze::tile_center(tile(6, 1)));

    mover.direction = Direction::Right;
    mover.advance(100.0, &maze);
    assert_eq!(mover.tile(), tile(0, 1));
}

#[test]
fn test_translate_wraps_partial_steps() {
    let maze = maze_from(&TUNNEL_MAZE);
    let mut mover = Mover::spawn(&maze, tile(0, 1), Direction::Left, 80.0);

    mover.translate(12.0, &maze);
    assert_eq!(mover.tile(), tile(6, 1));
    assert_eq!(mover.pixel().x, 7.0 * TILE_SIZE - 4.0);

    mover.direction = Direction::Right;
    mover.translate(4.0, &maze);
    assert_eq!(mover.pixel().x, 0.0);
    assert_eq!(mover.tile(), tile(0, 1));
}

#[test]
fn test_tile_always_within_bounds() {
    let maze = maze_from(&TUNNEL_MAZE);
    let mut mover = Mover::spawn(&maze, tile(3, 1), Direction::Left, 80.0);
    let steps = [0.5, 3.0, 17.0, 40.0, 111.0, 0.01, 8.0, 64.0, 250.0];

    for (i, distance) in steps.iter().cycle().take(200).enumerate() {
        mover.direction = Direction::DIRECTIONS[i % 4];
        mover.translate(*distance, &maze);

        let t = mover.tile();
        assert_that(&t.x).is_greater_than_or_equal_to(0);
        assert_that(&t.x).is_less_than(maze.width() as i32);
        assert_that(&t.y).is_greater_than_or_equal_to(0);
        assert_that(&t.y).is_less_than(maze.height() as i32);
        assert_eq!(t, Maze::pixel_to_tile(mover.pixel()));
    }
}

#[test]
fn test_move_by_uses_speed() {
    let maze = maze_from(&OPEN_MAZE);
    let mut mover = Mover::spawn(&maze, tile(1, 2), Direction::Right, 60.0);

    mover.move_by(0.1, &maze);
    assert_eq!(mover.pixel(), Maze::tile_center(tile(1, 2)) + Vec2::new(6.0, 0.0));
}

#[test]
fn test_is_on_tile_center_epsilon() {
    let maze = maze_from(&OPEN_MAZE);
    let mut mover = Mover::spawn(&maze, tile(2, 2), Direction::Right, 80.0);
    let center = Maze::tile_center(tile(2, 2));

    mover.set_pixel(center + Vec2::new(0.75, 0.0), &maze);
    assert_that(&mover.is_on_tile_center()).is_true();

    mover.set_pixel(center + Vec2::new(1.5, 0.0), &maze);
    assert_that(&mover.is_on_tile_center()).is_false();

    mover.snap_to_center();
    assert_eq!(mover.pixel(), center);
}

#[test]
fn test_snap_cross_axis() {
    let maze = maze_from(&OPEN_MAZE);
    let mut mover = Mover::spawn(&maze, tile(2, 2), Direction::Up, 80.0);
    let center = Maze::tile_center(tile(2, 2));

    mover.set_pixel(center + Vec2::new(0.5, -0.5), &maze);
    mover.snap_cross_axis();
    assert_eq!(mover.pixel(), center + Vec2::new(0.0, -0.5));
}

#[test]
fn test_collides_with_range() {
    let maze = maze_from(&OPEN_MAZE);
    let a = Mover::spawn(&maze, tile(1, 1), Direction::Right, 80.0);
    let mut b = Mover::spawn(&maze, tile(2, 1), Direction::Left, 80.0);

    assert_that(&a.collides_with(&b, 8.0)).is_false();

    b.set_pixel(a.pixel() + Vec2::new(8.0, 0.0), &maze);
    assert_that(&a.collides_with(&b, 8.0)).is_true();

    b.set_pixel(a.pixel() + Vec2::new(4.0, 9.0), &maze);
    assert_that(&a.collides_with(&b, 8.0)).is_false();
}

#[test]
fn test_crossed_paths() {
    let maze = maze_from(&OPEN_MAZE);
    let mut a = Mover::spawn(&maze, tile(1, 1), Direction::Right, 80.0);
    let mut b = Mover::spawn(&maze, tile(2, 1), Direction::Left, 80.0);
    a.begin_tick();
    b.begin_tick();

    a.advance(16.0, &maze);
    b.advance(16.0, &maze);

    assert_eq!(a.tile(), tile(2, 1));
    assert_eq!(b.tile(), tile(1, 1));
    assert_that(&a.crossed_paths(&b)).is_true();
    assert_that(&b.crossed_paths(&a)).is_true();

    a.begin_tick();
    b.begin_tick();
    assert_that(&a.crossed_paths(&b)).is_false();
}
