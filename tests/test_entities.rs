use rand::rngs::SmallRng;
use rand::SeedableRng;

use skyraid::config::*;
use skyraid::entities::*;
use skyraid::game::input::FrameInput;
use skyraid::math::{rect, rect_center, vec2};

fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_moves_left_by_rounded_speed_times_step() {
    let mut enemy = Enemy {
        rect: rect(400.0, 300.0, 50.0, 20.0),
        speed: 10.0,
    };
    let removed = enemy.advance(1.0);
    assert_eq!(enemy.rect.x, 390.0);
    assert!(!removed);
}

#[test]
fn enemy_removed_once_right_edge_passes_left_screen_edge() {
    let mut enemy = Enemy {
        rect: rect(-45.0, 300.0, 50.0, 20.0),
        speed: 10.0,
    };
    // right edge at 5, one more advance pushes it past 0
    assert!(enemy.advance(1.0));
}

#[test]
fn enemy_spawns_offscreen_right_with_bounded_speed() {
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let enemy = Enemy::spawn(&mut rng);
        let center = rect_center(&enemy.rect);
        assert!(center.x >= 820.0 && center.x <= 900.0);
        assert!(center.y >= 0.0 && center.y <= 600.0);
        assert!(enemy.speed >= 5.0 && enemy.speed <= 20.0);
    }
}

// ── Cloud / Bullet / Attack ───────────────────────────────────────────────────

#[test]
fn cloud_drifts_left_at_constant_speed() {
    let mut cloud = Cloud {
        rect: rect(400.0, 100.0, 140.0, 80.0),
    };
    assert!(!cloud.advance(1.0));
    assert_eq!(cloud.rect.x, 395.0);
}

#[test]
fn bullet_travels_right_and_leaves_at_screen_width() {
    let mut bullet = Bullet::new(vec2(790.0, 300.0), BULLET_SPEED);
    // left edge starts at 777; two fast frames push it past 800
    assert!(!bullet.advance(4.0));
    assert!(bullet.advance(4.0));
}

#[test]
fn attack_travels_left_and_leaves_at_zero() {
    let mut attack = Attack::aimed_at(30.0, 300.0);
    assert!(attack.velocity < 0.0);
    let x_before = attack.rect.x;
    assert!(!attack.advance(1.0));
    assert!(attack.rect.x < x_before);
    assert!(attack.advance(10.0));
}

// ── Explosion / Powerup lifetimes ─────────────────────────────────────────────

#[test]
fn explosion_expires_after_lifetime_and_never_goes_negative() {
    let mut explosion = Explosion::new(vec2(100.0, 100.0), 0.25);
    assert!(!explosion.advance(0.1));
    assert!(explosion.advance(0.5));
    assert_eq!(explosion.lifetime, 0.0);
}

#[test]
fn powerup_expires_after_lifetime() {
    let mut powerup = Powerup::drop_at(vec2(100.0, 100.0), PowerupKind::Hp);
    assert!(!powerup.advance(POWERUP_LIFETIME - 0.5));
    assert!(powerup.advance(1.0));
    assert_eq!(powerup.lifetime, 0.0);
}

// ── Player movement & clamps ──────────────────────────────────────────────────

#[test]
fn player_moves_five_per_axis_at_unit_step() {
    let mut player = Player::new();
    player.rect.x = 100.0;
    player.rect.y = 100.0;
    let input = FrameInput {
        down: true,
        right: true,
        ..Default::default()
    };
    let mut bullets = Vec::new();
    let mut cues = Vec::new();
    player.advance(&input, 1.0, 1.0 / 60.0, &mut bullets, &mut cues);
    assert_eq!(player.rect.x, 105.0);
    assert_eq!(player.rect.y, 105.0);
}

#[test]
fn player_clamped_at_left_and_top() {
    let mut player = Player::new();
    let input = FrameInput {
        up: true,
        left: true,
        ..Default::default()
    };
    let mut bullets = Vec::new();
    let mut cues = Vec::new();
    player.advance(&input, 1.0, 1.0 / 60.0, &mut bullets, &mut cues);
    assert_eq!(player.rect.x, 0.0);
    assert_eq!(player.rect.y, 0.0);
}

#[test]
fn player_clamped_at_right_and_bottom() {
    let mut player = Player::new();
    player.rect.x = 800.0 - player.rect.width - 2.0;
    player.rect.y = 600.0 - player.rect.height - 2.0;
    let input = FrameInput {
        down: true,
        right: true,
        ..Default::default()
    };
    let mut bullets = Vec::new();
    let mut cues = Vec::new();
    player.advance(&input, 1.0, 1.0 / 60.0, &mut bullets, &mut cues);
    assert_eq!(player.rect.x, 800.0 - player.rect.width);
    assert_eq!(player.rect.y, 600.0 - player.rect.height);
}

#[test]
fn vertical_movement_raises_engine_cues() {
    let mut player = Player::new();
    player.rect.y = 300.0;
    let mut bullets = Vec::new();
    let mut cues = Vec::new();
    let input = FrameInput {
        up: true,
        ..Default::default()
    };
    player.advance(&input, 1.0, 1.0 / 60.0, &mut bullets, &mut cues);
    assert_eq!(cues, vec![skyraid::game::AudioCue::EngineUp]);
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn shoot_is_gated_by_cooldown() {
    let mut player = Player::new();
    let mut bullets = Vec::new();
    // fresh player starts on cooldown
    player.shoot(&mut bullets);
    assert!(bullets.is_empty());

    player.bullet_timer = 0.0;
    player.shoot(&mut bullets);
    assert_eq!(bullets.len(), 1);
    assert_eq!(player.bullet_timer, player.cooldown_duration);

    // immediately gated again
    player.shoot(&mut bullets);
    assert_eq!(bullets.len(), 1);
}

#[test]
fn shot_leaves_the_jets_nose_moving_right() {
    let mut player = Player::new();
    player.rect.x = 100.0;
    player.rect.y = 200.0;
    player.bullet_timer = 0.0;
    let mut bullets = Vec::new();
    player.shoot(&mut bullets);
    let center = rect_center(&bullets[0].rect);
    assert_eq!(center.x, player.rect.x + player.rect.width);
    assert_eq!(center.y, player.rect.y + player.rect.height / 2.0);
    assert!(bullets[0].velocity > 0.0);
}

#[test]
fn take_hit_clamps_health_at_zero() {
    let mut player = Player::new();
    player.health = 1;
    player.take_hit();
    assert_eq!(player.health, 0);
    player.take_hit();
    assert_eq!(player.health, 0);
}

// ── Power-up effects on the player ────────────────────────────────────────────

#[test]
fn hp_powerup_heals_one_point() {
    let mut player = Player::new();
    player.health = 2;
    player.apply_powerup(PowerupKind::Hp);
    assert_eq!(player.health, 3);
}

#[test]
fn dmg_powerup_shortens_cooldown_and_clears_pending_timer() {
    let mut player = Player::new();
    assert!(player.bullet_timer > 0.0);
    player.apply_powerup(PowerupKind::Dmg);
    assert_eq!(player.cooldown_duration, RAPID_SHOOT_COOLDOWN);
    assert_eq!(player.bullet_timer, 0.0);
    assert_eq!(player.rapid_timer, RAPID_DURATION);
}

#[test]
fn dmg_powerup_reverts_after_four_simulated_seconds() {
    let mut player = Player::new();
    player.apply_powerup(PowerupKind::Dmg);

    let dt = 1.0 / 60.0;
    let input = FrameInput::default();
    let mut bullets = Vec::new();
    let mut cues = Vec::new();

    // 200 ticks (~3.3 s): still boosted
    for _ in 0..200 {
        player.advance(&input, 1.0, dt, &mut bullets, &mut cues);
    }
    assert_eq!(player.cooldown_duration, RAPID_SHOOT_COOLDOWN);

    // past 4 s total: reverted to the baseline
    for _ in 0..50 {
        player.advance(&input, 1.0, dt, &mut bullets, &mut cues);
    }
    assert_eq!(player.cooldown_duration, BASE_SHOOT_COOLDOWN);
    assert_eq!(player.rapid_timer, 0.0);
}

// ── Gunner ────────────────────────────────────────────────────────────────────

#[test]
fn gunner_enters_to_hold_column_before_oscillating() {
    let mut gunner = Gunner {
        rect: rect(556.0, 300.0, 80.0, 60.0),
        rising: false,
    };
    gunner.advance(1.0);
    assert_eq!(gunner.rect.x, GUNNER_HOLD_X);
    assert_eq!(gunner.rect.y, 300.0); // no vertical motion while entering

    gunner.advance(1.0);
    assert_eq!(gunner.rect.y, 310.0); // now sweeping down
}

#[test]
fn gunner_turns_around_at_screen_edges() {
    let mut gunner = Gunner {
        rect: rect(GUNNER_HOLD_X, 540.0, 80.0, 60.0),
        rising: false,
    };
    // bottom edge is exactly at 600: flips to rising and moves up
    gunner.advance(1.0);
    assert!(gunner.rising);
    assert_eq!(gunner.rect.y, 530.0);

    gunner.rect.y = 0.0;
    gunner.advance(1.0);
    assert!(!gunner.rising);
    assert_eq!(gunner.rect.y, 10.0);
}

#[test]
fn gunner_stays_inside_screen_bounds() {
    let mut gunner = Gunner {
        rect: rect(GUNNER_HOLD_X, 300.0, 80.0, 60.0),
        rising: false,
    };
    for _ in 0..500 {
        gunner.advance(1.7);
        assert!(gunner.rect.y >= 0.0);
        assert!(gunner.rect.y + gunner.rect.height <= 600.0);
    }
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_enters_to_hold_column() {
    let mut boss = Boss::spawn();
    for _ in 0..200 {
        boss.advance(1.0, 1.0 / 60.0, 300.0);
    }
    assert_eq!(boss.rect.x, BOSS_HOLD_X);
}

#[test]
fn boss_attack_fires_on_cooldown_aimed_at_player() {
    let mut boss = Boss::spawn();
    let attack = boss.advance(0.0, BOSS_ATTACK_COOLDOWN, 123.0);
    let attack = attack.expect("cooldown elapsed");
    assert_eq!(rect_center(&attack.rect).y, 123.0);
    assert_eq!(boss.attack_timer, BOSS_ATTACK_COOLDOWN);

    // cooldown rearmed, no attack on the next tick
    assert!(boss.advance(0.0, 0.1, 123.0).is_none());
}

#[test]
fn boss_patrols_the_loose_band_beyond_the_screen() {
    let mut boss = Boss::spawn();
    boss.rect.x = BOSS_HOLD_X;
    let mut lowest: f32 = f32::MAX;
    let mut highest: f32 = f32::MIN;
    for _ in 0..2000 {
        boss.advance(1.0, 0.001, 300.0);
        lowest = lowest.min(boss.rect.y);
        highest = highest.max(boss.rect.y + boss.rect.height);
    }
    // overshoot past the visible screen is allowed, up to the band edges
    assert!(lowest < 0.0);
    assert!(highest > 600.0);
    assert!(lowest >= BOSS_BAND_TOP - BOSS_SPEED);
    assert!(highest <= BOSS_BAND_BOTTOM + BOSS_SPEED);
}
