//=========================================================================
// Stage Context
//=========================================================================
//
// Shared data the systems operate on:
// - scene: the scene graph levels show and hide
// - level_transitions: queued level changes, applied at tick boundaries
// - prompts / events: external collaborators
// - exit flag: raised when a terminal level is reached
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::events::EventSink;
use crate::core::level::{PromptService, TransitionQueue};
use crate::core::scene::SceneGraph;

//=== Constants ===========================================================

/// Tag looked up for the player node by default.
pub const DEFAULT_PLAYER_TAG: &str = "Player";

/// Tag looked up for the spawn point by default.
pub const DEFAULT_SPAWN_TAG: &str = "SpawnPoint";

//=== StageContext ========================================================

/// Data shared by the stage systems.
pub struct StageContext {
    /// Scene graph of the stage.
    pub scene: SceneGraph,

    /// Level changes requested during the current tick.
    pub level_transitions: TransitionQueue,

    pub(crate) prompts: Box<dyn PromptService>,
    pub(crate) events: Box<dyn EventSink>,
    pub(crate) player_tag: String,
    pub(crate) spawn_tag: String,
    exit_requested: bool,
}

impl StageContext {
    pub(crate) fn new(
        scene: SceneGraph,
        prompts: Box<dyn PromptService>,
        events: Box<dyn EventSink>,
    ) -> Self {
        Self {
            scene,
            level_transitions: TransitionQueue::new(),
            prompts,
            events,
            player_tag: DEFAULT_PLAYER_TAG.to_string(),
            spawn_tag: DEFAULT_SPAWN_TAG.to_string(),
            exit_requested: false,
        }
    }

    pub(crate) fn with_tags(mut self, player_tag: String, spawn_tag: String) -> Self {
        self.player_tag = player_tag;
        self.spawn_tag = spawn_tag;
        self
    }

    /// Signals that the experience has ended and the application should quit.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether a terminal level has raised the exit flag.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
