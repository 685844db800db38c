use crate::config::{
    BOSS_TRIGGER_SCORE, CLOUD_SPAWN_INTERVAL, ENEMY_SPAWN_INTERVAL, GUNNER_SPAWN_INTERVAL,
    MAX_GUNNERS,
};
use crate::entities::{Boss, Cloud, Enemy, Gunner};

use super::Game;

impl Game {
    /// Runs the wall-clock spawners. Each timer is independent and checked
    /// once per frame; a missed gunner window (cap reached) is skipped, not
    /// queued.
    pub fn run_spawners(&mut self, dt: f32) {
        self.enemy_timer -= dt;
        if self.enemy_timer <= 0.0 {
            self.enemy_timer += ENEMY_SPAWN_INTERVAL;
            self.enemies.push(Enemy::spawn(&mut self.rng));
        }

        self.cloud_timer -= dt;
        if self.cloud_timer <= 0.0 {
            self.cloud_timer += CLOUD_SPAWN_INTERVAL;
            self.clouds.push(Cloud::spawn(&mut self.rng));
        }

        self.gunner_timer -= dt;
        if self.gunner_timer <= 0.0 {
            self.gunner_timer += GUNNER_SPAWN_INTERVAL;
            if self.gunner_count < MAX_GUNNERS {
                self.gunners.push(Gunner::spawn(&mut self.rng));
                self.gunner_count += 1;
            }
        }
    }

    /// One-shot boss spawn, checked after every score change. The trigger is
    /// an exact match so later scores never re-arm it.
    pub(super) fn maybe_spawn_boss(&mut self) {
        if !self.boss_spawned && self.boss.is_none() && self.player.score == BOSS_TRIGGER_SCORE {
            self.boss = Some(Boss::spawn());
            self.boss_spawned = true;
        }
    }
}
