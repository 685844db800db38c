use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Texture2D, Vector2};

use crate::config::SCREEN_WIDTH;

/// Blits a texture stretched over the entity's rectangle.
pub(super) fn draw_sprite(d: &mut RaylibDrawHandle, texture: &Texture2D, dest: Rectangle) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: texture.width as f32,
        height: texture.height as f32,
    };
    d.draw_texture_pro(texture, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
}

pub(super) fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    y: i32,
    size: i32,
    color: Color,
) {
    let width = d.measure_text(text, size);
    d.draw_text(text, (SCREEN_WIDTH - width) / 2, y, size, color);
}
