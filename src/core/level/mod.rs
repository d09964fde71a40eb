//=========================================================================
// Level System
//=========================================================================
//
// Level activation/completion lifecycle and prompt sequencing.
//
// Architecture:
//   LevelManager
//     ├─ levels: Vec<Level>         (config + subtree root + is_active)
//     └─ active: Option<LevelId>    (at most one active level)
//
// Flow:
//   TransitionQueue → process_transitions() → activate() / complete()
//
//=========================================================================

//=== Module Declarations =================================================

mod definition;
mod level_manager;
mod prompt;
mod transition_queue;

//=== Public API ==========================================================

pub use definition::{Level, LevelConfig, LevelId};
pub use level_manager::LevelManager;
pub use prompt::{PromptBoard, PromptId, PromptService, PromptState};
pub use transition_queue::{LevelTransition, TransitionQueue};
