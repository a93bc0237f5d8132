//! Draws a [`Snapshot`] with macroquad shapes and text. No game logic here.

use macroquad::prelude::*;

use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, Rgba, Snapshot};

// Palette
const BACKGROUND: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0);
const GAME_OVER_BACKGROUND: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const SNAKE_HEAD: Color = Color::new(0.0, 1.0, 0.0, 1.0); // bright green
const SNAKE_BODY: Color = Color::new(0.0, 150.0 / 255.0, 0.0, 150.0 / 255.0);
const FOOD: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const TEXT: Color = WHITE;

const GAME_OVER_MESSAGE: &str = "Game Over! Press Space to restart";
const FONT_SIZE: f32 = 20.0;

pub fn draw(snapshot: &Snapshot<'_>) {
    clear_background(if snapshot.game_over {
        GAME_OVER_BACKGROUND
    } else {
        BACKGROUND
    });

    let segment = (CELL_SIZE - 1) as f32;
    for (i, cell) in snapshot.snake.iter().enumerate() {
        let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        draw_rectangle(cell.x as f32, cell.y as f32, segment, segment, color);
    }

    draw_rectangle(
        snapshot.food.x as f32,
        snapshot.food.y as f32,
        CELL_SIZE as f32,
        CELL_SIZE as f32,
        FOOD,
    );

    draw_text(&format!("Score: {}", snapshot.score), 10.0, 20.0, FONT_SIZE, TEXT);

    if snapshot.game_over {
        let size = measure_text(GAME_OVER_MESSAGE, None, FONT_SIZE as u16, 1.0);
        draw_text(
            GAME_OVER_MESSAGE,
            (BOARD_WIDTH as f32 - size.width) * 0.5,
            BOARD_HEIGHT as f32 * 0.5,
            FONT_SIZE,
            TEXT,
        );
    }

    for p in snapshot.particles {
        draw_rectangle(p.x, p.y, p.size, p.size, to_color(p.color));
    }
}

fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}
