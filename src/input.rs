use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::{Direction, TickInput};

pub const RESTART_KEY: KeyCode = KeyCode::Space;

// Checked in this order when several keys go down in the same frame
const DIRECTION_KEYS: [KeyCode; 8] = [
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Up,
    KeyCode::W,
];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        _ => None,
    }
}

/// First pressed direction that does not reverse `heading`, so a reversed key
/// pressed together with a perpendicular one still yields the turn.
pub fn pick_turn(
    pressed: impl IntoIterator<Item = KeyCode>,
    heading: Direction,
) -> Option<Direction> {
    pressed
        .into_iter()
        .filter_map(direction_for_key)
        .find(|direction| !heading.is_opposite(*direction))
}

/// Reads this frame's key presses for a snake currently moving along `heading`.
pub fn poll(heading: Direction) -> TickInput {
    let pressed = DIRECTION_KEYS.into_iter().filter(|key| is_key_pressed(*key));
    TickInput {
        turn: pick_turn(pressed, heading),
        restart: is_key_pressed(RESTART_KEY),
    }
}
