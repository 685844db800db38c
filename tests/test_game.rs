use skyraid::config::*;
use skyraid::entities::{Boss, Bullet, Enemy, Gunner, Powerup, PowerupKind};
use skyraid::game::input::FrameInput;
use skyraid::game::{AudioCue, Game, ScreenState};
use skyraid::math::{rect, vec2};

/// Small enough that no spawner fires and rounded displacement is zero, so a
/// single update only runs collision resolution on hand-placed entities.
const TINY_DT: f32 = 1.0e-6;

fn game() -> Game {
    Game::new(42)
}

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy {
        rect: rect(x, y, ENEMY_SIZE.0, ENEMY_SIZE.1),
        speed: 10.0,
    }
}

fn bullet_at(x: f32, y: f32) -> Bullet {
    Bullet::new(vec2(x, y), BULLET_SPEED)
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_game_starts_playing_with_empty_sets() {
    let g = game();
    assert_eq!(g.state, ScreenState::Playing);
    assert!(g.running);
    assert_eq!(g.player.health, PLAYER_START_HEALTH);
    assert_eq!(g.player.score, 0);
    assert!(g.enemies.is_empty());
    assert!(g.clouds.is_empty());
    assert!(g.bullets.is_empty());
    assert!(g.gunners.is_empty());
    assert!(g.boss.is_none());
    assert_eq!(g.gunner_count, 0);
}

// ── Spawners ──────────────────────────────────────────────────────────────────

#[test]
fn enemy_and_cloud_spawn_on_their_intervals() {
    let mut g = game();
    g.run_spawners(ENEMY_SPAWN_INTERVAL);
    assert_eq!(g.enemies.len(), 1);
    assert!(g.clouds.is_empty());

    for _ in 0..3 {
        g.run_spawners(ENEMY_SPAWN_INTERVAL);
    }
    assert_eq!(g.enemies.len(), 4);
    assert_eq!(g.clouds.len(), 1); // one full second elapsed
}

#[test]
fn gunner_count_never_exceeds_the_cap() {
    let mut g = game();
    for _ in 0..100 {
        g.run_spawners(1.0);
        assert!(g.gunner_count <= MAX_GUNNERS);
    }
    assert_eq!(g.gunner_count, MAX_GUNNERS);
    assert_eq!(g.gunners.len(), MAX_GUNNERS as usize);
}

// ── Bullet kills, scoring, boss trigger ───────────────────────────────────────

#[test]
fn bullet_kill_scores_and_spawns_explosion() {
    let mut g = game();
    g.enemies.push(enemy_at(400.0, 300.0));
    g.bullets.push(bullet_at(410.0, 305.0));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.enemies.is_empty());
    assert!(g.bullets.is_empty());
    assert_eq!(g.player.score, KILL_SCORE);
    assert_eq!(g.explosions.len(), 1);
}

#[test]
fn boss_spawns_exactly_once_when_score_hits_the_trigger() {
    let mut g = game();
    g.enemies.push(enemy_at(400.0, 300.0));
    g.bullets.push(bullet_at(410.0, 305.0));
    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.player.score, BOSS_TRIGGER_SCORE);
    assert!(g.boss.is_some());
    assert!(g.boss_spawned);

    // a second kill moves the score past the trigger; no second boss
    let first_boss_health = g.boss.as_ref().unwrap().health;
    g.enemies.push(enemy_at(200.0, 100.0));
    g.bullets.push(bullet_at(210.0, 105.0));
    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.player.score, 2 * KILL_SCORE);
    assert!(g.boss.is_some());
    assert_eq!(g.boss.as_ref().unwrap().health, first_boss_health);
}

#[test]
fn gunner_kill_keeps_the_live_tally_in_step() {
    let mut g = game();
    g.gunners.push(Gunner {
        rect: rect(550.0, 300.0, GUNNER_SIZE.0, GUNNER_SIZE.1),
        rising: false,
    });
    g.gunner_count = 1;
    g.bullets.push(bullet_at(560.0, 310.0));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.gunners.is_empty());
    assert_eq!(g.gunner_count, 0);
    assert_eq!(g.player.score, KILL_SCORE);
}

// ── Boss damage ───────────────────────────────────────────────────────────────

#[test]
fn bullet_hit_removes_the_bullet_never_the_boss() {
    let mut g = game();
    g.boss = Some(Boss::spawn());
    g.boss.as_mut().unwrap().rect = rect(600.0, 200.0, BOSS_SIZE.0, BOSS_SIZE.1);
    g.boss_spawned = true;
    g.bullets.push(bullet_at(620.0, 250.0));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.bullets.is_empty());
    let boss = g.boss.as_ref().expect("boss persists");
    assert_eq!(boss.health, BOSS_HEALTH - 1);
}

#[test]
fn felling_the_boss_wins_the_round_with_a_bonus() {
    let mut g = game();
    g.player.score = 40;
    let mut boss = Boss::spawn();
    boss.rect = rect(600.0, 200.0, BOSS_SIZE.0, BOSS_SIZE.1);
    boss.health = 1;
    g.boss = Some(boss);
    g.boss_spawned = true;
    g.bullets.push(bullet_at(620.0, 250.0));

    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.state, ScreenState::ScoreScreen);
    assert!(g.won);
    assert_eq!(g.final_score, 40 + BOSS_KILL_BONUS);
    assert!(g.boss.is_none());
    assert!(!g.boss_spawned);
}

// ── Player damage and loss transitions ────────────────────────────────────────

#[test]
fn enemy_contact_costs_one_health_and_consumes_the_enemy() {
    let mut g = game();
    g.enemies.push(enemy_at(10.0, 10.0)); // overlaps the fresh player at (0,0)

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.enemies.is_empty());
    assert_eq!(g.player.health, PLAYER_START_HEALTH - 1);
    assert_eq!(g.state, ScreenState::Playing);
    assert_eq!(g.explosions.len(), 1);
    assert!(g.audio_cues.contains(&AudioCue::Collision));
}

#[test]
fn running_out_of_health_ends_the_round() {
    let mut g = game();
    g.player.health = 1;
    g.enemies.push(enemy_at(10.0, 10.0));

    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.state, ScreenState::ScoreScreen);
    assert!(!g.won);
    assert_eq!(g.final_score, 0);
    assert!(g.audio_cues.contains(&AudioCue::StopEngines));
}

#[test]
fn gunner_contact_is_lethal_regardless_of_health() {
    let mut g = game();
    g.gunners.push(Gunner {
        rect: rect(10.0, 10.0, GUNNER_SIZE.0, GUNNER_SIZE.1),
        rising: false,
    });
    g.gunner_count = 1;

    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.state, ScreenState::ScoreScreen);
    assert!(!g.won);
}

#[test]
fn boss_contact_is_lethal_and_boss_survives_to_be_cleared_by_reset() {
    let mut g = game();
    let mut boss = Boss::spawn();
    boss.rect = rect(10.0, 10.0, BOSS_SIZE.0, BOSS_SIZE.1);
    g.boss = Some(boss);
    g.boss_spawned = true;

    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.state, ScreenState::ScoreScreen);
    // reset cleared the boss along with everything else
    assert!(g.boss.is_none());
    assert!(!g.boss_spawned);
}

// ── Round trip through the score screen ───────────────────────────────────────

#[test]
fn score_screen_round_trip_yields_a_fresh_round() {
    let mut g = game();
    g.player.health = 1;
    g.player.score = 70;
    g.gunner_count = 3;
    g.enemies.push(enemy_at(10.0, 10.0));
    g.clouds.push(skyraid::entities::Cloud {
        rect: rect(300.0, 300.0, CLOUD_SIZE.0, CLOUD_SIZE.1),
    });

    g.update(TINY_DT, &FrameInput::default());
    assert_eq!(g.state, ScreenState::ScoreScreen);
    assert_eq!(g.final_score, 70);

    let accept = FrameInput {
        accept: true,
        ..Default::default()
    };
    g.update(TINY_DT, &accept);

    assert_eq!(g.state, ScreenState::Playing);
    assert_eq!(g.player.health, PLAYER_START_HEALTH);
    assert_eq!(g.player.score, 0);
    assert!(g.enemies.is_empty());
    assert!(g.clouds.is_empty());
    assert!(g.bullets.is_empty());
    assert!(g.explosions.is_empty());
    assert!(g.gunners.is_empty());
    assert!(g.attacks.is_empty());
    assert!(g.powerups.is_empty());
    assert!(g.boss.is_none());
    assert_eq!(g.gunner_count, 0);
}

#[test]
fn quit_input_stops_the_game_from_either_state() {
    let mut g = game();
    let quit = FrameInput {
        quit: true,
        ..Default::default()
    };
    g.update(TINY_DT, &quit);
    assert!(!g.running);
}

// ── Power-up pickup ───────────────────────────────────────────────────────────

#[test]
fn dmg_powerup_pickup_boosts_fire_rate() {
    let mut g = game();
    g.powerups
        .push(Powerup::drop_at(vec2(20.0, 20.0), PowerupKind::Dmg));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.powerups.is_empty());
    assert_eq!(g.player.cooldown_duration, RAPID_SHOOT_COOLDOWN);
    assert_eq!(g.player.bullet_timer, 0.0);
    assert_eq!(g.player.rapid_timer, RAPID_DURATION);
}

#[test]
fn hp_powerup_pickup_heals() {
    let mut g = game();
    g.player.health = 2;
    g.powerups
        .push(Powerup::drop_at(vec2(20.0, 20.0), PowerupKind::Hp));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.powerups.is_empty());
    assert_eq!(g.player.health, 3);
}

// ── Boss attacks reach the player ─────────────────────────────────────────────

#[test]
fn boss_attack_lands_in_the_attack_set() {
    let mut g = game();
    let mut boss = Boss::spawn();
    boss.rect = rect(600.0, 200.0, BOSS_SIZE.0, BOSS_SIZE.1);
    boss.attack_timer = TINY_DT / 2.0;
    g.boss = Some(boss);
    g.boss_spawned = true;

    g.update(TINY_DT, &FrameInput::default());

    assert_eq!(g.attacks.len(), 1);
    assert_eq!(
        g.boss.as_ref().unwrap().attack_timer,
        BOSS_ATTACK_COOLDOWN
    );
}

#[test]
fn attack_contact_damages_and_consumes_the_attack() {
    let mut g = game();
    g.attacks
        .push(skyraid::entities::Attack::aimed_at(20.0, 20.0));

    g.update(TINY_DT, &FrameInput::default());

    assert!(g.attacks.is_empty());
    assert_eq!(g.player.health, PLAYER_START_HEALTH - 1);
}
