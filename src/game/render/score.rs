use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

use crate::config::SCREEN_HEIGHT;

use super::helpers::draw_text_centered;
use super::Game;

impl Game {
    pub(super) fn draw_score_screen(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);
        let white = Color::new(255, 255, 255, 255);

        let banner = if self.won { "YOU WIN" } else { "GAME OVER" };
        draw_text_centered(d, banner, SCREEN_HEIGHT / 2 - 50, 32, white);

        let score_line = format!("Score: {}", self.final_score);
        draw_text_centered(d, &score_line, SCREEN_HEIGHT / 2 + 50, 32, white);

        draw_text_centered(d, "Press enter to continue", SCREEN_HEIGHT - 48, 32, white);
    }
}
