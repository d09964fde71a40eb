//=========================================================================
// Core Systems
//
// Single-threaded stage systems driven by a per-frame tick.
//
// Responsibilities:
// - Interactable hover/grab lifecycle gated by owning tasks
// - Level activation/completion and scene-graph visibility
// - Deferred work scheduled in ticks
// - Lifecycle event emission
//
// Notes:
// All mutation happens on the thread that owns the stage. The only value
// that crosses threads is the lifecycle event stream (see `events`).
//
//=========================================================================

pub mod error;
pub mod events;
pub mod globals;
pub mod interaction;
pub mod level;
pub mod scene;
pub mod scheduler;

//=== Re-exports ==========================================================

pub use error::{SceneError, StageError};
pub use globals::{StageContext, StageSystems};
