use thiserror::Error;

use crate::audio::Clip;

/// Startup failure while reading or decoding a sound asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sound asset `{path}`: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to decode sound asset `{path}`: {reason}")]
    Decode { path: String, reason: String },
}

/// A single playback attempt that could not be carried out.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("playback of {clip:?} failed: {reason}")]
    Playback { clip: Clip, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a snake needs at least one segment")]
    EmptySnake,
}
