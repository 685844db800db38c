//! Every gameplay tunable in one place.

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

pub const PLAY_FPS: u32 = 60;
pub const SCORE_SCREEN_FPS: u32 = 10;

/// Reference frame duration for the step factor: displacement per frame is
/// `round(speed * elapsed_ms / STEP_REFERENCE_MS)`.
pub const STEP_REFERENCE_MS: f32 = 25.0;

pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_START_HEALTH: i32 = 3;
pub const PLAYER_SIZE: (f32, f32) = (90.0, 55.0);

pub const BASE_SHOOT_COOLDOWN: f32 = 1.0;
pub const RAPID_SHOOT_COOLDOWN: f32 = 0.3;
pub const RAPID_DURATION: f32 = 4.0;

pub const BULLET_SPEED: f32 = 5.0;
pub const BULLET_SIZE: (f32, f32) = (26.0, 10.0);

pub const ENEMY_MIN_SPEED: i32 = 5;
pub const ENEMY_MAX_SPEED: i32 = 20;
pub const ENEMY_SIZE: (f32, f32) = (50.0, 20.0);

pub const CLOUD_SPEED: f32 = 5.0;
pub const CLOUD_SIZE: (f32, f32) = (140.0, 80.0);

/// Off-screen spawn band: center x lands this far past the right edge.
pub const SPAWN_MARGIN_MIN: i32 = 20;
pub const SPAWN_MARGIN_MAX: i32 = 100;

pub const ENEMY_SPAWN_INTERVAL: f32 = 0.25;
pub const CLOUD_SPAWN_INTERVAL: f32 = 1.0;
pub const GUNNER_SPAWN_INTERVAL: f32 = 5.0;
pub const MAX_GUNNERS: u32 = 6;

pub const GUNNER_SPEED: f32 = 10.0;
pub const GUNNER_HOLD_X: f32 = 550.0;
pub const GUNNER_SIZE: (f32, f32) = (80.0, 60.0);

pub const BOSS_SPEED: f32 = 5.0;
pub const BOSS_HOLD_X: f32 = 600.0;
pub const BOSS_SIZE: (f32, f32) = (150.0, 120.0);
pub const BOSS_HEALTH: i32 = 10;
pub const BOSS_ATTACK_COOLDOWN: f32 = 3.0;
/// The boss patrols a band slightly wider than the screen, so it may
/// overshoot the visible edges before turning around.
pub const BOSS_BAND_TOP: f32 = -50.0;
pub const BOSS_BAND_BOTTOM: f32 = 650.0;
pub const BOSS_TRIGGER_SCORE: u32 = 10;
pub const BOSS_KILL_BONUS: u32 = 500;

pub const ATTACK_SPEED: f32 = 7.0;
pub const ATTACK_SIZE: (f32, f32) = (30.0, 12.0);

pub const KILL_SCORE: u32 = 10;

pub const HIT_EXPLOSION_LIFETIME: f32 = 0.25;
pub const KILL_EXPLOSION_LIFETIME: f32 = 0.5;
pub const EXPLOSION_SIZE: (f32, f32) = (60.0, 60.0);

pub const POWERUP_LIFETIME: f32 = 10.0;
pub const POWERUP_SIZE: (f32, f32) = (40.0, 40.0);
/// Drop roll: uniform in 1..=10, a power-up drops on 9 or 10.
pub const POWERUP_DROP_ROLL: i32 = 9;

pub const SOUND_VOLUME: f32 = 0.5;
