//=========================================================================
// Stage State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   StageSystems: LevelManager + InteractableRegistry + Scheduler
//   StageContext: SceneGraph + TransitionQueue + collaborators
//
//=========================================================================

//=== Module Declarations =================================================

mod stage_context;
mod stage_systems;

//=== Public API ==========================================================

pub use stage_context::{StageContext, DEFAULT_PLAYER_TAG, DEFAULT_SPAWN_TAG};
pub use stage_systems::StageSystems;
