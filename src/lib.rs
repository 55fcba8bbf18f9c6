//! Blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use `blocktris::{core, engine,
//! input, term, types}`. The implementation lives in dedicated crates under
//! `crates/`.

pub mod logging;

pub use blocktris_core as core;
pub use blocktris_engine as engine;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;

use blocktris_engine::Stimulus;
use blocktris_input::HostAction;

/// Translate a mapped key into the stimulus the session understands.
pub fn stimulus_for(action: HostAction) -> Stimulus {
    match action {
        HostAction::Command(command) => Stimulus::Command(command),
        HostAction::PlayPause => Stimulus::PlayPause,
        HostAction::ToggleMute => Stimulus::ToggleMute,
        HostAction::Restart => Stimulus::Start,
    }
}
