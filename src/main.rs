use std::time::{SystemTime, UNIX_EPOCH};

use raylib::prelude::*;

use skyraid::assets::{AssetError, Assets, SoundBank};
use skyraid::config::{PLAY_FPS, SCORE_SCREEN_FPS, SCREEN_HEIGHT, SCREEN_WIDTH};
use skyraid::game::input::FrameInput;
use skyraid::game::{AudioCue, Game, ScreenState};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let debug_frame = args.iter().any(|arg| arg == "--render-frame");
    let seed = parse_seed(&args).unwrap_or_else(system_seed);

    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .title("Sky Raid")
        .build();
    rl.set_target_fps(PLAY_FPS);

    let assets = match Assets::load(&mut rl, &thread) {
        Ok(assets) => assets,
        Err(err) => {
            eprintln!("skyraid: {err}");
            std::process::exit(1);
        }
    };

    let audio = match RaylibAudio::init_audio_device()
        .map_err(|err| AssetError::AudioDevice(err.to_string()))
    {
        Ok(audio) => audio,
        Err(err) => {
            eprintln!("skyraid: {err}");
            std::process::exit(1);
        }
    };
    let sounds = match SoundBank::load(&audio) {
        Ok(sounds) => sounds,
        Err(err) => {
            eprintln!("skyraid: {err}");
            std::process::exit(1);
        }
    };
    sounds.music.play_stream();

    let mut game = Game::new(seed);

    if debug_frame {
        game.update(1.0 / PLAY_FPS as f32, &FrameInput::default());
        {
            let mut d = rl.begin_drawing(&thread);
            game.draw(&mut d, &assets);
        }
        rl.take_screenshot(&thread, "debug_frame.png");
        return;
    }

    let mut target_fps = PLAY_FPS;
    while game.running && !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let input = FrameInput::sample(&rl);
        game.update(dt, &input);

        sounds.music.update_stream();
        play_cues(&mut game, &sounds);

        // The score screen idles at a lower frame rate than play.
        let wanted = match game.state {
            ScreenState::Playing => PLAY_FPS,
            ScreenState::ScoreScreen => SCORE_SCREEN_FPS,
        };
        if wanted != target_fps {
            rl.set_target_fps(wanted);
            target_fps = wanted;
        }

        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d, &assets);
    }
}

fn play_cues(game: &mut Game, sounds: &SoundBank) {
    for cue in game.audio_cues.drain(..) {
        match cue {
            AudioCue::EngineUp => {
                if !sounds.engine_up.is_playing() {
                    sounds.engine_up.play();
                }
            }
            AudioCue::EngineDown => {
                if !sounds.engine_down.is_playing() {
                    sounds.engine_down.play();
                }
            }
            AudioCue::Collision => sounds.collision.play(),
            AudioCue::StopEngines => {
                sounds.engine_up.stop();
                sounds.engine_down.stop();
            }
        }
    }
}

fn parse_seed(args: &[String]) -> Option<u64> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            return iter.next().and_then(|value| value.parse().ok());
        }
    }
    None
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
