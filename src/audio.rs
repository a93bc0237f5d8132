//! Sound effects and background music driven by simulation events.
//!
//! The simulation never plays sounds itself. Each frame the driver hands the
//! [`TickResult`] to an [`AudioDispatcher`], which forwards the matching clips
//! to an [`AudioSink`]. macroquad mixes playback on its own audio thread, so
//! none of this blocks the frame loop.

use log::{debug, info, warn};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};
use macroquad::file::load_file;

use crate::config::{AssetPaths, Volumes};
use crate::error::{AssetError, AudioError};
use crate::game::TickResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Eat,
    GameOver,
    Background,
}

/// Anything that can play the three game clips.
pub trait AudioSink {
    fn play(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError>;
    fn play_looped(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError>;
    fn stop(&mut self, clip: Clip);
}

/// The decoded clips, loaded once at startup.
pub struct SoundBank {
    eat: Sound,
    game_over: Sound,
    background: Sound,
}

impl SoundBank {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let bank = Self {
            eat: load_clip(&paths.eat).await?,
            game_over: load_clip(&paths.game_over).await?,
            background: load_clip(&paths.background).await?,
        };
        info!("loaded sound assets");
        Ok(bank)
    }

    fn get(&self, clip: Clip) -> &Sound {
        match clip {
            Clip::Eat => &self.eat,
            Clip::GameOver => &self.game_over,
            Clip::Background => &self.background,
        }
    }
}

async fn load_clip(path: &str) -> Result<Sound, AssetError> {
    let bytes = load_file(path).await.map_err(|err| AssetError::Read {
        path: path.to_owned(),
        reason: err.to_string(),
    })?;
    let sound = load_sound_from_bytes(&bytes)
        .await
        .map_err(|err| AssetError::Decode {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;
    debug!("decoded {path} ({} bytes)", bytes.len());
    Ok(sound)
}

/// Plays clips through macroquad's mixer.
pub struct MacroquadSink {
    bank: SoundBank,
}

impl MacroquadSink {
    pub fn new(bank: SoundBank) -> Self {
        Self { bank }
    }
}

impl AudioSink for MacroquadSink {
    fn play(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError> {
        audio::play_sound(
            self.bank.get(clip),
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
        Ok(())
    }

    fn play_looped(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError> {
        audio::play_sound(
            self.bank.get(clip),
            PlaySoundParams {
                looped: true,
                volume,
            },
        );
        Ok(())
    }

    fn stop(&mut self, clip: Clip) {
        audio::stop_sound(self.bank.get(clip));
    }
}

/// Turns simulation events into playback requests.
///
/// A failed playback is logged and dropped; it never reaches the game.
pub struct AudioDispatcher<S: AudioSink> {
    sink: S,
    volumes: Volumes,
    music_playing: bool,
}

impl<S: AudioSink> AudioDispatcher<S> {
    pub fn new(sink: S, volumes: Volumes) -> Self {
        Self {
            sink,
            volumes,
            music_playing: false,
        }
    }

    pub fn dispatch(&mut self, result: &TickResult) {
        if result.ate_food {
            self.play(Clip::Eat, self.volumes.eat);
        }
        if result.game_over_triggered {
            self.play(Clip::GameOver, self.volumes.game_over);
        }
    }

    /// Starts the background track, looping until [`stop_music`](Self::stop_music).
    pub fn start_music(&mut self) {
        if self.music_playing {
            return;
        }
        match self
            .sink
            .play_looped(Clip::Background, self.volumes.music)
        {
            Ok(()) => self.music_playing = true,
            Err(err) => warn!("background music not started: {err}"),
        }
    }

    pub fn stop_music(&mut self) {
        if self.music_playing {
            self.sink.stop(Clip::Background);
            self.music_playing = false;
            debug!("background music stopped");
        }
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn play(&mut self, clip: Clip, volume: f32) {
        if let Err(err) = self.sink.play(clip, volume) {
            warn!("{err}");
        }
    }
}

impl<S: AudioSink> Drop for AudioDispatcher<S> {
    fn drop(&mut self) {
        self.stop_music();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play(Clip, f32),
        Loop(Clip, f32),
        Stop(Clip),
    }

    #[derive(Default, Clone)]
    struct RecordingSink {
        calls: Rc<RefCell<Vec<Call>>>,
        failing: Option<Clip>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError> {
            if self.failing == Some(clip) {
                return Err(AudioError::Playback {
                    clip,
                    reason: "corrupt buffer".to_owned(),
                });
            }
            self.calls.borrow_mut().push(Call::Play(clip, volume));
            Ok(())
        }

        fn play_looped(&mut self, clip: Clip, volume: f32) -> Result<(), AudioError> {
            if self.failing == Some(clip) {
                return Err(AudioError::Playback {
                    clip,
                    reason: "decoder error".to_owned(),
                });
            }
            self.calls.borrow_mut().push(Call::Loop(clip, volume));
            Ok(())
        }

        fn stop(&mut self, clip: Clip) {
            self.calls.borrow_mut().push(Call::Stop(clip));
        }
    }

    fn calls(dispatcher: &AudioDispatcher<RecordingSink>) -> Vec<Call> {
        dispatcher.sink().calls.borrow().clone()
    }

    #[test]
    fn test_events_map_to_clips() {
        let mut dispatcher = AudioDispatcher::new(RecordingSink::default(), Volumes::default());

        dispatcher.dispatch(&TickResult::default());
        assert!(calls(&dispatcher).is_empty());

        dispatcher.dispatch(&TickResult {
            moved: true,
            ate_food: true,
            ..Default::default()
        });
        dispatcher.dispatch(&TickResult {
            game_over_triggered: true,
            ..Default::default()
        });

        assert_eq!(
            calls(&dispatcher),
            vec![Call::Play(Clip::Eat, 0.1), Call::Play(Clip::GameOver, 1.0)]
        );
    }

    #[test]
    fn test_failed_playback_is_not_fatal() {
        let sink = RecordingSink {
            failing: Some(Clip::Eat),
            ..Default::default()
        };
        let mut dispatcher = AudioDispatcher::new(sink, Volumes::default());

        dispatcher.dispatch(&TickResult {
            ate_food: true,
            ..Default::default()
        });
        dispatcher.dispatch(&TickResult {
            game_over_triggered: true,
            ..Default::default()
        });

        assert_eq!(calls(&dispatcher), vec![Call::Play(Clip::GameOver, 1.0)]);
    }

    #[test]
    fn test_music_start_and_stop() {
        let mut dispatcher = AudioDispatcher::new(RecordingSink::default(), Volumes::default());

        dispatcher.start_music();
        dispatcher.start_music();
        assert!(dispatcher.is_music_playing());
        dispatcher.stop_music();
        dispatcher.stop_music();
        assert!(!dispatcher.is_music_playing());

        assert_eq!(
            calls(&dispatcher),
            vec![Call::Loop(Clip::Background, 0.1), Call::Stop(Clip::Background)]
        );
    }

    #[test]
    fn test_music_stops_on_drop() {
        let sink = RecordingSink::default();
        let log = Rc::clone(&sink.calls);
        {
            let mut dispatcher = AudioDispatcher::new(sink, Volumes::default());
            dispatcher.start_music();
        }
        assert_eq!(log.borrow().last(), Some(&Call::Stop(Clip::Background)));
    }

    #[test]
    fn test_music_failure_leaves_it_stopped() {
        let sink = RecordingSink {
            failing: Some(Clip::Background),
            ..Default::default()
        };
        let mut dispatcher = AudioDispatcher::new(sink, Volumes::default());

        dispatcher.start_music();

        assert!(!dispatcher.is_music_playing());
        assert!(calls(&dispatcher).is_empty());
    }
}
