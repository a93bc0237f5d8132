use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, info, warn};
use macroquad::prelude::*;
use macroquad::input::{is_quit_requested, prevent_quit};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use snake_arcade::audio::{AudioDispatcher, MacroquadSink, SoundBank};
use snake_arcade::config::{SETTINGS_FILE, Settings};
use snake_arcade::game::{BOARD_HEIGHT, BOARD_WIDTH, GameState};
use snake_arcade::{input, render};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Game".to_owned(),
        window_width: BOARD_WIDTH,
        window_height: BOARD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (settings, settings_error) = match Settings::load(Path::new(SETTINGS_FILE)) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    if let Err(err) = TermLogger::init(
        settings.level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {err}");
    }
    if let Some(err) = settings_error {
        warn!("{err}, using default settings");
    }

    if let Err(err) = run(settings).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> Result<()> {
    let bank = SoundBank::load(&settings.assets)
        .await
        .context("cannot start without sound assets")?;
    let mut audio = AudioDispatcher::new(MacroquadSink::new(bank), settings.volume);
    audio.start_music();

    let mut game = GameState::new();
    info!("starting snake on a {BOARD_WIDTH}x{BOARD_HEIGHT} board");

    // Let the loop stop the music before the window goes away
    prevent_quit();

    loop {
        if is_quit_requested() {
            break;
        }

        let input = input::poll(game.direction());
        let elapsed = Duration::from_secs_f32(get_frame_time());
        let result = game.advance(input, elapsed);
        audio.dispatch(&result);
        render::draw(&game.snapshot());

        next_frame().await;
    }

    audio.stop_music();
    info!("exiting with score {}", game.score());
    Ok(())
}
