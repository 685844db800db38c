mod helpers;
mod score;
mod world;

use raylib::prelude::RaylibDrawHandle;

use crate::assets::Assets;

use super::{Game, ScreenState};

impl Game {
    pub fn draw(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        match self.state {
            ScreenState::Playing => self.draw_world(d, assets),
            ScreenState::ScoreScreen => self.draw_score_screen(d),
        }
    }
}
