use raylib::prelude::{Rectangle, Vector2};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
    }
}

/// Rectangle with its center at (cx, cy).
pub fn rect_centered(cx: f32, cy: f32, size: (f32, f32)) -> Rectangle {
    rect(cx - size.0 / 2.0, cy - size.1 / 2.0, size.0, size.1)
}

pub fn rect_center(r: &Rectangle) -> Vector2 {
    vec2(r.x + r.width / 2.0, r.y + r.height / 2.0)
}

/// Per-frame displacement, rounded so positions stay on whole pixels at
/// every frame rate.
pub fn paced(speed: f32, step: f32) -> f32 {
    (speed * step).round()
}
