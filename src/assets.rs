//! Texture and sound loading. Asset failures are fatal: the loaders return
//! an error that `main` reports before exiting.

use raylib::prelude::*;
use thiserror::Error;

use crate::config::SOUND_VOLUME;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture '{path}': {details}")]
    Texture { path: String, details: String },

    #[error("failed to load sound '{path}': {details}")]
    Sound { path: String, details: String },

    #[error("failed to initialize audio device: {0}")]
    AudioDevice(String),
}

pub struct Assets {
    pub jet: Texture2D,
    pub missile: Texture2D,
    pub cloud: Texture2D,
    pub bullet: Texture2D,
    pub explosion: Texture2D,
    pub gunner: Texture2D,
    pub boss: Texture2D,
    pub boss_missile: Texture2D,
    pub powerup_hp: Texture2D,
    pub powerup_dmg: Texture2D,
}

impl Assets {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self, AssetError> {
        Ok(Self {
            jet: texture(rl, thread, "assets/jet.png")?,
            missile: texture(rl, thread, "assets/missile.png")?,
            cloud: texture(rl, thread, "assets/cloud.png")?,
            bullet: texture(rl, thread, "assets/player_missile.png")?,
            explosion: texture(rl, thread, "assets/explosion.png")?,
            gunner: texture(rl, thread, "assets/gunner.png")?,
            boss: texture(rl, thread, "assets/boss.png")?,
            boss_missile: texture(rl, thread, "assets/boss_missile.png")?,
            powerup_hp: texture(rl, thread, "assets/powerup_hp.png")?,
            powerup_dmg: texture(rl, thread, "assets/powerup_dmg.png")?,
        })
    }
}

fn texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &str,
) -> Result<Texture2D, AssetError> {
    rl.load_texture(thread, path).map_err(|details| AssetError::Texture {
        path: path.to_string(),
        details,
    })
}

pub struct SoundBank<'aud> {
    pub music: Music<'aud>,
    pub engine_up: Sound<'aud>,
    pub engine_down: Sound<'aud>,
    pub collision: Sound<'aud>,
}

impl<'aud> SoundBank<'aud> {
    pub fn load(audio: &'aud RaylibAudio) -> Result<Self, AssetError> {
        let engine_up = sound(audio, "assets/rising_putter.ogg")?;
        let engine_down = sound(audio, "assets/falling_putter.ogg")?;
        let collision = sound(audio, "assets/collision.ogg")?;
        engine_up.set_volume(SOUND_VOLUME);
        engine_down.set_volume(SOUND_VOLUME);
        collision.set_volume(SOUND_VOLUME);

        let music = audio
            .new_music("assets/music.mp3")
            .map_err(|err| AssetError::Sound {
                path: "assets/music.mp3".to_string(),
                details: err.to_string(),
            })?;

        Ok(Self {
            music,
            engine_up,
            engine_down,
            collision,
        })
    }
}

fn sound<'aud>(audio: &'aud RaylibAudio, path: &str) -> Result<Sound<'aud>, AssetError> {
    audio.new_sound(path).map_err(|err| AssetError::Sound {
        path: path.to_string(),
        details: err.to_string(),
    })
}
