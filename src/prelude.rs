//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Stage runtime
pub use crate::stage::{Stage, StageBuilder};

// Errors
pub use crate::core::error::{SceneError, StageError};

// Events
pub use crate::core::events::{ChannelEventSink, EventKind, EventSink, LevelEvent};

// Interaction
pub use crate::core::interaction::{
    Hand, HandDevice, InteractableBody, InteractableConfig, InteractableController, InteractableId,
    Material, MaterialLibrary, Task, TaskHandle,
};

// Levels and prompts
pub use crate::core::level::{LevelConfig, LevelId, LevelTransition, PromptBoard, PromptId, PromptService};

// Scene
pub use crate::core::scene::{ComponentKind, NodeId, SceneGraph, SceneNode, Switch, Toggle, Transform};
