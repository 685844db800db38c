use crate::config::STEP_REFERENCE_MS;
use crate::math::rect_center;

use super::input::FrameInput;
use super::{Game, ScreenState};

impl Game {
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        if input.quit {
            self.running = false;
            return;
        }
        match self.state {
            ScreenState::Playing => self.update_playing(dt, input),
            ScreenState::ScoreScreen => {
                if input.accept {
                    self.state = ScreenState::Playing;
                }
            }
        }
    }

    fn update_playing(&mut self, dt: f32, input: &FrameInput) {
        // Frame-rate-independent displacement scale; 25 ms of wall clock is
        // one unit of movement.
        let step = dt * 1000.0 / STEP_REFERENCE_MS;

        self.run_spawners(dt);

        self.player
            .advance(input, step, dt, &mut self.bullets, &mut self.audio_cues);

        self.enemies.retain_mut(|enemy| !enemy.advance(step));
        self.clouds.retain_mut(|cloud| !cloud.advance(step));
        self.bullets.retain_mut(|bullet| !bullet.advance(step));
        self.attacks.retain_mut(|attack| !attack.advance(step));
        self.explosions.retain_mut(|explosion| !explosion.advance(dt));
        self.powerups.retain_mut(|powerup| !powerup.advance(dt));
        for gunner in &mut self.gunners {
            gunner.advance(step);
        }

        let player_center_y = rect_center(&self.player.rect).y;
        if let Some(boss) = self.boss.as_mut() {
            if let Some(attack) = boss.advance(step, dt, player_center_y) {
                self.attacks.push(attack);
            }
        }

        self.resolve_collisions();
    }
}
