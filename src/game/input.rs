use raylib::prelude::{KeyboardKey, RaylibHandle};

/// Keyboard state snapshot taken once per frame. The simulation only ever
/// sees this struct, never the raylib handle, so tests can drive it with
/// synthetic input.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Confirm key on the score screen.
    pub accept: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn sample(rl: &RaylibHandle) -> Self {
        Self {
            up: rl.is_key_down(KeyboardKey::KEY_UP),
            down: rl.is_key_down(KeyboardKey::KEY_DOWN),
            left: rl.is_key_down(KeyboardKey::KEY_LEFT),
            right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
            fire: rl.is_key_down(KeyboardKey::KEY_SPACE),
            accept: rl.is_key_pressed(KeyboardKey::KEY_ENTER),
            quit: rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
        }
    }
}
