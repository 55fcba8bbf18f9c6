//! Host runtime around the core game
//!
//! The core owns no timer and performs no I/O. This crate supplies the
//! collaborators it needs: a cancellable gravity clock, an advisory audio
//! output with a mute switch, environment configuration, and the session that
//! serializes every stimulus into the game.

pub mod audio;
pub mod clock;
pub mod config;
pub mod session;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use audio::{AudioOutput, AudioSink, NullAudio, TerminalBell};
pub use clock::GravityClock;
pub use config::EngineConfig;
pub use session::{Session, Stimulus};
