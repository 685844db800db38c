mod collisions;
pub mod input;
mod render;
mod spawn;
mod update;

use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{
    BOSS_KILL_BONUS, CLOUD_SPAWN_INTERVAL, ENEMY_SPAWN_INTERVAL, GUNNER_SPAWN_INTERVAL,
};
use crate::entities::{Attack, Boss, Bullet, Cloud, Enemy, Explosion, Gunner, Player, Powerup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Playing,
    ScoreScreen,
}

/// Sound requests raised by the simulation during a frame; the main loop
/// drains them against the loaded sounds, so updates stay device-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    EngineUp,
    EngineDown,
    Collision,
    StopEngines,
}

pub struct Game {
    pub state: ScreenState,
    pub running: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub clouds: Vec<Cloud>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub gunners: Vec<Gunner>,
    pub attacks: Vec<Attack>,
    pub powerups: Vec<Powerup>,
    pub boss: Option<Boss>,
    /// Live gunner tally, maintained on spawn and death rather than
    /// recounted from the set.
    pub gunner_count: u32,
    /// Latches after the one-shot boss spawn; cleared on boss death or reset.
    pub boss_spawned: bool,
    pub final_score: u32,
    pub won: bool,
    pub audio_cues: Vec<AudioCue>,
    pub(crate) rng: SmallRng,
    enemy_timer: f32,
    cloud_timer: f32,
    gunner_timer: f32,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: ScreenState::Playing,
            running: true,
            player: Player::new(),
            enemies: Vec::new(),
            clouds: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            gunners: Vec::new(),
            attacks: Vec::new(),
            powerups: Vec::new(),
            boss: None,
            gunner_count: 0,
            boss_spawned: false,
            final_score: 0,
            won: false,
            audio_cues: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            enemy_timer: ENEMY_SPAWN_INTERVAL,
            cloud_timer: CLOUD_SPAWN_INTERVAL,
            gunner_timer: GUNNER_SPAWN_INTERVAL,
        }
    }

    /// Ends the round and hands control to the score screen. Every transient
    /// set is emptied and the player is rebuilt from scratch; only the final
    /// score and the won flag survive for display.
    pub(crate) fn end_round(&mut self, won: bool) {
        self.audio_cues.push(AudioCue::StopEngines);
        self.audio_cues.push(AudioCue::Collision);

        if won {
            self.player.score += BOSS_KILL_BONUS;
        }
        self.final_score = self.player.score;
        self.won = won;

        self.enemies.clear();
        self.clouds.clear();
        self.bullets.clear();
        self.explosions.clear();
        self.gunners.clear();
        self.attacks.clear();
        self.powerups.clear();
        self.boss = None;
        self.boss_spawned = false;
        self.gunner_count = 0;
        self.enemy_timer = ENEMY_SPAWN_INTERVAL;
        self.cloud_timer = CLOUD_SPAWN_INTERVAL;
        self.gunner_timer = GUNNER_SPAWN_INTERVAL;

        self.player = Player::new();
        self.state = ScreenState::ScoreScreen;
    }
}
