//! Web-surface adapter over `wry`.
//!
//! Owns the embedded page webview, mirrors the engine's navigation
//! state (loading flag, synthesized progress, back/forward history),
//! and emits ordered [`SurfaceSignal`]s into a queue the event loop
//! drains. The state machine itself is pure and lives in [`state`];
//! the wry shell in [`surface`] only wires callbacks and executes
//! engine commands.

pub mod history;
pub mod signal;
pub mod state;
pub mod surface;

pub use history::NavHistory;
pub use signal::SurfaceSignal;
pub use state::{
    EngineCommand, SurfaceState, PROGRESS_COMMIT, PROGRESS_DONE, PROGRESS_START, PROGRESS_TITLE,
};
pub use surface::{PageSurface, SurfaceOptions};
