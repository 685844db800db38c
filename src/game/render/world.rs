use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

use crate::assets::Assets;
use crate::config::BOSS_HEALTH;
use crate::entities::{Boss, PowerupKind};

use super::helpers::draw_sprite;
use super::Game;

const SKY_BLUE: Color = Color {
    r: 135,
    g: 206,
    b: 250,
    a: 255,
};

impl Game {
    pub(super) fn draw_world(&self, d: &mut RaylibDrawHandle, assets: &Assets) {
        d.clear_background(SKY_BLUE);

        for cloud in &self.clouds {
            draw_sprite(d, &assets.cloud, cloud.rect);
        }
        for enemy in &self.enemies {
            draw_sprite(d, &assets.missile, enemy.rect);
        }
        for gunner in &self.gunners {
            draw_sprite(d, &assets.gunner, gunner.rect);
        }
        if let Some(boss) = &self.boss {
            draw_sprite(d, &assets.boss, boss.rect);
            draw_boss_health(d, boss);
        }
        for attack in &self.attacks {
            draw_sprite(d, &assets.boss_missile, attack.rect);
        }
        for bullet in &self.bullets {
            draw_sprite(d, &assets.bullet, bullet.rect);
        }
        for powerup in &self.powerups {
            let texture = match powerup.kind {
                PowerupKind::Hp => &assets.powerup_hp,
                PowerupKind::Dmg => &assets.powerup_dmg,
            };
            draw_sprite(d, texture, powerup.rect);
        }
        draw_sprite(d, &assets.jet, self.player.rect);
        for explosion in &self.explosions {
            draw_sprite(d, &assets.explosion, explosion.rect);
        }

        let hud = format!("HP: {}   Score: {}", self.player.health, self.player.score);
        d.draw_text(&hud, 12, 10, 20, Color::new(20, 24, 28, 255));
    }
}

fn draw_boss_health(d: &mut RaylibDrawHandle, boss: &Boss) {
    let pct = (boss.health as f32 / BOSS_HEALTH as f32).clamp(0.0, 1.0);
    let bar_w = boss.rect.width;
    let bar_h = 8.0;
    let x = boss.rect.x;
    let y = boss.rect.y - bar_h - 6.0;
    d.draw_rectangle(
        x as i32,
        y as i32,
        bar_w as i32,
        bar_h as i32,
        Color::new(10, 10, 10, 200),
    );
    d.draw_rectangle(
        (x + 1.0) as i32,
        (y + 1.0) as i32,
        ((bar_w - 2.0) * pct) as i32,
        (bar_h - 2.0) as i32,
        Color::new(224, 70, 70, 255),
    );
}
