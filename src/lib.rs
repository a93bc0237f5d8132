//! Snake arcade game built on macroquad.
//!
//! The simulation (`game`) has no I/O of its own: the frame driver feeds it
//! input and elapsed time, then hands the resulting events to `audio` and the
//! snapshot to `render`.

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
