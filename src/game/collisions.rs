//! Pairwise rectangle-overlap resolution. Each pair has its own removal
//! policy; within a frame all pairs are resolved, and the order among
//! simultaneous hits follows set order and is not part of the contract.

use rand::Rng;
use raylib::prelude::Vector2;

use crate::config::{
    HIT_EXPLOSION_LIFETIME, KILL_EXPLOSION_LIFETIME, KILL_SCORE, POWERUP_DROP_ROLL,
};
use crate::entities::{Explosion, Powerup, PowerupKind};
use crate::math::rect_center;

use super::{AudioCue, Game};

impl Game {
    pub(super) fn resolve_collisions(&mut self) {
        let mut lost = false;

        // Player vs enemies: every overlapping enemy is consumed, the player
        // loses one point of health per frame regardless of how many hit.
        let player_rect = self.player.rect;
        let before = self.enemies.len();
        self.enemies
            .retain(|enemy| !enemy.rect.check_collision_recs(&player_rect));
        if self.enemies.len() < before {
            self.damage_player();
        }

        // Player vs boss attacks, same policy.
        let before = self.attacks.len();
        self.attacks
            .retain(|attack| !attack.rect.check_collision_recs(&player_rect));
        if self.attacks.len() < before {
            self.damage_player();
        }

        // Player vs gunners: contact is lethal outright.
        let before = self.gunners.len();
        self.gunners
            .retain(|gunner| !gunner.rect.check_collision_recs(&player_rect));
        let downed = (before - self.gunners.len()) as u32;
        if downed > 0 {
            self.gunner_count = self.gunner_count.saturating_sub(downed);
            lost = true;
        }

        // Player vs boss: lethal contact, boss persists.
        if let Some(boss) = &self.boss {
            if boss.rect.check_collision_recs(&player_rect) {
                lost = true;
            }
        }

        // Bullets vs enemies: both sides removed; each spent bullet scores
        // once and may drop a power-up.
        let mut kill_points = Vec::new();
        {
            let enemies = &mut self.enemies;
            self.bullets.retain(|bullet| {
                let mut hit = false;
                enemies.retain(|enemy| {
                    if bullet.rect.check_collision_recs(&enemy.rect) {
                        hit = true;
                        false
                    } else {
                        true
                    }
                });
                if hit {
                    kill_points.push(rect_center(&bullet.rect));
                }
                !hit
            });
        }
        for point in kill_points {
            self.score_kill(point);
            self.roll_powerup_drop(point);
        }

        // Bullets vs gunners: both removed, tally kept in step.
        let mut kill_points = Vec::new();
        {
            let gunners = &mut self.gunners;
            self.bullets.retain(|bullet| {
                let mut hit = false;
                gunners.retain(|gunner| {
                    if bullet.rect.check_collision_recs(&gunner.rect) {
                        hit = true;
                        false
                    } else {
                        true
                    }
                });
                if hit {
                    kill_points.push(rect_center(&bullet.rect));
                }
                !hit
            });
        }
        for point in kill_points {
            self.gunner_count = self.gunner_count.saturating_sub(1);
            self.score_kill(point);
        }

        // Bullets vs boss: the bullet is always the one consumed; the boss
        // only ever leaves through its health reaching zero.
        let mut boss_down = false;
        let mut hit_points = Vec::new();
        if let Some(boss) = &mut self.boss {
            let boss_rect = boss.rect;
            self.bullets.retain(|bullet| {
                if bullet.rect.check_collision_recs(&boss_rect) {
                    hit_points.push(rect_center(&bullet.rect));
                    false
                } else {
                    true
                }
            });
            boss.health = (boss.health - hit_points.len() as i32).max(0);
            if boss.health == 0 {
                boss_down = true;
            }
        }
        for point in hit_points {
            self.explosions
                .push(Explosion::new(point, HIT_EXPLOSION_LIFETIME));
        }

        // Player vs power-ups: consumed on pickup, effect moves to the player.
        {
            let player = &mut self.player;
            self.powerups.retain(|powerup| {
                if powerup.rect.check_collision_recs(&player.rect) {
                    player.apply_powerup(powerup.kind);
                    false
                } else {
                    true
                }
            });
        }

        self.maybe_spawn_boss();

        if self.player.health <= 0 {
            lost = true;
        }
        // A frame where the boss falls and the player dies counts as a loss.
        if lost {
            self.end_round(false);
        } else if boss_down {
            self.end_round(true);
        }
    }

    fn damage_player(&mut self) {
        self.player.take_hit();
        self.audio_cues.push(AudioCue::Collision);
        self.explosions.push(Explosion::new(
            rect_center(&self.player.rect),
            HIT_EXPLOSION_LIFETIME,
        ));
    }

    fn score_kill(&mut self, point: Vector2) {
        self.player.score += KILL_SCORE;
        self.explosions
            .push(Explosion::new(point, KILL_EXPLOSION_LIFETIME));
    }

    fn roll_powerup_drop(&mut self, point: Vector2) {
        if self.rng.random_range(1..=10) >= POWERUP_DROP_ROLL {
            let kind = if self.rng.random_range(0..2) == 0 {
                PowerupKind::Hp
            } else {
                PowerupKind::Dmg
            };
            self.powerups.push(Powerup::drop_at(point, kind));
        }
    }
}
