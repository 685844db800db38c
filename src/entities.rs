//! Entity types and their per-frame movement rules.
//!
//! Every kind owns an axis-aligned rectangle and an `advance` rule; `advance`
//! returns `true` when the entity's exit condition fired, so callers can drop
//! it with `retain_mut` on the same frame. Displacement is scaled by the
//! per-frame step factor and rounded, keeping speed stable across frame
//! rates without sub-pixel drift.

use rand::{rngs::SmallRng, Rng};
use raylib::prelude::{Rectangle, Vector2};

use crate::config::{
    ATTACK_SIZE, ATTACK_SPEED, BASE_SHOOT_COOLDOWN, BOSS_ATTACK_COOLDOWN, BOSS_BAND_BOTTOM,
    BOSS_BAND_TOP, BOSS_HEALTH, BOSS_HOLD_X, BOSS_SIZE, BOSS_SPEED, BULLET_SIZE, BULLET_SPEED,
    CLOUD_SIZE, CLOUD_SPEED, ENEMY_MAX_SPEED, ENEMY_MIN_SPEED, ENEMY_SIZE, EXPLOSION_SIZE,
    GUNNER_HOLD_X, GUNNER_SIZE, GUNNER_SPEED, PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_HEALTH,
    POWERUP_LIFETIME, POWERUP_SIZE, RAPID_DURATION, RAPID_SHOOT_COOLDOWN, SCREEN_HEIGHT,
    SCREEN_WIDTH, SPAWN_MARGIN_MAX, SPAWN_MARGIN_MIN,
};
use crate::game::input::FrameInput;
use crate::game::AudioCue;
use crate::math::{paced, rect, rect_centered, vec2};

/// Center point for enemies, clouds, and gunners: just past the right edge,
/// anywhere on the vertical span.
fn offscreen_spawn_center(rng: &mut SmallRng) -> Vector2 {
    vec2(
        rng.random_range(SCREEN_WIDTH + SPAWN_MARGIN_MIN..=SCREEN_WIDTH + SPAWN_MARGIN_MAX) as f32,
        rng.random_range(0..=SCREEN_HEIGHT) as f32,
    )
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rectangle,
    pub health: i32,
    pub score: u32,
    /// Seconds until the next shot is allowed.
    pub bullet_timer: f32,
    /// Cooldown applied after each shot; lowered while a DMG power-up is live.
    pub cooldown_duration: f32,
    /// Remaining DMG power-up time; at zero the cooldown duration reverts.
    pub rapid_timer: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: rect(0.0, 0.0, PLAYER_SIZE.0, PLAYER_SIZE.1),
            health: PLAYER_START_HEALTH,
            score: 0,
            bullet_timer: BASE_SHOOT_COOLDOWN,
            cooldown_duration: BASE_SHOOT_COOLDOWN,
            rapid_timer: 0.0,
        }
    }

    pub fn advance(
        &mut self,
        input: &FrameInput,
        step: f32,
        dt: f32,
        bullets: &mut Vec<Bullet>,
        cues: &mut Vec<AudioCue>,
    ) {
        let pace = paced(PLAYER_SPEED, step);
        if input.up {
            self.rect.y -= pace;
            cues.push(AudioCue::EngineUp);
        }
        if input.down {
            self.rect.y += pace;
            cues.push(AudioCue::EngineDown);
        }
        if input.left {
            self.rect.x -= pace;
        }
        if input.right {
            self.rect.x += pace;
        }
        self.clamp_to_screen();

        if input.fire {
            self.shoot(bullets);
        }

        self.bullet_timer = (self.bullet_timer - dt).max(0.0);
        if self.rapid_timer > 0.0 {
            self.rapid_timer = (self.rapid_timer - dt).max(0.0);
            if self.rapid_timer == 0.0 {
                self.cooldown_duration = BASE_SHOOT_COOLDOWN;
            }
        }
    }

    /// Emits a bullet from the jet's nose unless the cooldown is still
    /// running.
    pub fn shoot(&mut self, bullets: &mut Vec<Bullet>) {
        if self.bullet_timer > 0.0 {
            return;
        }
        self.bullet_timer = self.cooldown_duration;
        let nose = vec2(
            self.rect.x + self.rect.width,
            self.rect.y + self.rect.height / 2.0,
        );
        bullets.push(Bullet::new(nose, BULLET_SPEED));
    }

    pub fn apply_powerup(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Hp => self.health += 1,
            PowerupKind::Dmg => {
                self.cooldown_duration = RAPID_SHOOT_COOLDOWN;
                self.bullet_timer = 0.0;
                self.rapid_timer = RAPID_DURATION;
            }
        }
    }

    pub fn take_hit(&mut self) {
        self.health = (self.health - 1).max(0);
    }

    // The top and bottom comparisons are edge-inclusive while left and right
    // are strict; longstanding behavior, kept as-is.
    fn clamp_to_screen(&mut self) {
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.x + self.rect.width > SCREEN_WIDTH as f32 {
            self.rect.x = SCREEN_WIDTH as f32 - self.rect.width;
        }
        if self.rect.y <= 0.0 {
            self.rect.y = 0.0;
        } else if self.rect.y + self.rect.height >= SCREEN_HEIGHT as f32 {
            self.rect.y = SCREEN_HEIGHT as f32 - self.rect.height;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rectangle,
    pub speed: f32,
}

impl Enemy {
    pub fn spawn(rng: &mut SmallRng) -> Self {
        let center = offscreen_spawn_center(rng);
        Self {
            rect: rect_centered(center.x, center.y, ENEMY_SIZE),
            speed: rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED) as f32,
        }
    }

    pub fn advance(&mut self, step: f32) -> bool {
        self.rect.x -= paced(self.speed, step);
        self.rect.x + self.rect.width < 0.0
    }
}

#[derive(Clone, Debug)]
pub struct Cloud {
    pub rect: Rectangle,
}

impl Cloud {
    pub fn spawn(rng: &mut SmallRng) -> Self {
        let center = offscreen_spawn_center(rng);
        Self {
            rect: rect_centered(center.x, center.y, CLOUD_SIZE),
        }
    }

    pub fn advance(&mut self, step: f32) -> bool {
        self.rect.x -= paced(CLOUD_SPEED, step);
        self.rect.x + self.rect.width < 0.0
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rectangle,
    pub velocity: f32,
}

impl Bullet {
    pub fn new(center: Vector2, velocity: f32) -> Self {
        Self {
            rect: rect_centered(center.x, center.y, BULLET_SIZE),
            velocity,
        }
    }

    pub fn advance(&mut self, step: f32) -> bool {
        self.rect.x += paced(self.velocity, step);
        self.rect.x > SCREEN_WIDTH as f32
    }
}

/// Ranged shot fired by the boss; travels leftward.
#[derive(Clone, Debug)]
pub struct Attack {
    pub rect: Rectangle,
    pub velocity: f32,
}

impl Attack {
    pub fn aimed_at(x: f32, target_y: f32) -> Self {
        Self {
            rect: rect_centered(x, target_y, ATTACK_SIZE),
            velocity: -ATTACK_SPEED,
        }
    }

    pub fn advance(&mut self, step: f32) -> bool {
        self.rect.x += paced(self.velocity, step);
        self.rect.x + self.rect.width < 0.0
    }
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub rect: Rectangle,
    pub lifetime: f32,
}

impl Explosion {
    pub fn new(center: Vector2, lifetime: f32) -> Self {
        Self {
            rect: rect_centered(center.x, center.y, EXPLOSION_SIZE),
            lifetime,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.lifetime = (self.lifetime - dt).max(0.0);
        self.lifetime <= 0.0
    }
}

/// Mid-field enemy that flies in from the right, parks at a fixed column,
/// and sweeps up and down between the screen edges.
#[derive(Clone, Debug)]
pub struct Gunner {
    pub rect: Rectangle,
    pub rising: bool,
}

impl Gunner {
    pub fn spawn(rng: &mut SmallRng) -> Self {
        let center = offscreen_spawn_center(rng);
        Self {
            rect: rect_centered(center.x, center.y, GUNNER_SIZE),
            rising: false,
        }
    }

    pub fn advance(&mut self, step: f32) {
        if self.rect.x > GUNNER_HOLD_X {
            self.rect.x = (self.rect.x - paced(GUNNER_SPEED, step)).max(GUNNER_HOLD_X);
        } else {
            if self.rect.y + self.rect.height >= SCREEN_HEIGHT as f32 {
                self.rising = true;
            }
            if self.rect.y <= 0.0 {
                self.rising = false;
            }
            let pace = paced(GUNNER_SPEED, step);
            self.rect.y += if self.rising { -pace } else { pace };
        }

        if self.rect.y <= 0.0 {
            self.rect.y = 0.0;
        } else if self.rect.y + self.rect.height >= SCREEN_HEIGHT as f32 {
            self.rect.y = SCREEN_HEIGHT as f32 - self.rect.height;
        }
    }
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub rect: Rectangle,
    pub health: i32,
    pub rising: bool,
    /// Seconds until the next ranged attack.
    pub attack_timer: f32,
}

impl Boss {
    pub fn spawn() -> Self {
        Self {
            rect: rect_centered(
                (SCREEN_WIDTH + SPAWN_MARGIN_MAX) as f32,
                SCREEN_HEIGHT as f32 / 2.0,
                BOSS_SIZE,
            ),
            health: BOSS_HEALTH,
            rising: false,
            attack_timer: BOSS_ATTACK_COOLDOWN,
        }
    }

    /// Moves the boss and counts down its attack cooldown; at zero, emits an
    /// attack lined up with the player's current vertical position.
    pub fn advance(&mut self, step: f32, dt: f32, player_center_y: f32) -> Option<Attack> {
        if self.rect.x > BOSS_HOLD_X {
            self.rect.x = (self.rect.x - paced(BOSS_SPEED, step)).max(BOSS_HOLD_X);
        } else {
            // Patrol band is wider than the screen; no clamping here.
            if self.rect.y + self.rect.height >= BOSS_BAND_BOTTOM {
                self.rising = true;
            }
            if self.rect.y <= BOSS_BAND_TOP {
                self.rising = false;
            }
            let pace = paced(BOSS_SPEED, step);
            self.rect.y += if self.rising { -pace } else { pace };
        }

        self.attack_timer = (self.attack_timer - dt).max(0.0);
        if self.attack_timer == 0.0 {
            self.attack_timer = BOSS_ATTACK_COOLDOWN;
            return Some(Attack::aimed_at(self.rect.x, player_center_y));
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupKind {
    /// Restores one point of health on pickup.
    Hp,
    /// Shortens the shoot cooldown for a few seconds.
    Dmg,
}

#[derive(Clone, Debug)]
pub struct Powerup {
    pub rect: Rectangle,
    pub kind: PowerupKind,
    pub lifetime: f32,
}

impl Powerup {
    pub fn drop_at(center: Vector2, kind: PowerupKind) -> Self {
        Self {
            rect: rect_centered(center.x, center.y, POWERUP_SIZE),
            kind,
            lifetime: POWERUP_LIFETIME,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.lifetime = (self.lifetime - dt).max(0.0);
        self.lifetime <= 0.0
    }
}
