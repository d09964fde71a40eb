//=========================================================================
// Aetheric Stage
//
// Runtime facade that owns the stage systems and their shared context.
//
// Architecture:
// ```text
//     StageBuilder  ──build()──>  Stage  ──start()──>  tick() ... teardown()
//         │                         │
//         ├─ with_scene()           ├─ StageSystems (levels, interactables,
//         ├─ with_prompts()         │                scheduler)
//         ├─ with_material_library()└─ StageContext (scene, transitions,
//         ├─ with_event_capacity()                   prompts, events)
//         └─ with_player_tag() / with_spawn_tag()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::error::{SceneError, StageError};
use crate::core::events::{ChannelEventSink, LevelEvent, NullEventSink};
use crate::core::globals::{StageContext, StageSystems, DEFAULT_PLAYER_TAG, DEFAULT_SPAWN_TAG};
use crate::core::interaction::{
    InteractableController, InteractableId, MaterialLibrary, StaticMaterialLibrary,
};
use crate::core::level::{LevelConfig, LevelId, LevelTransition, PromptBoard, PromptService};
use crate::core::scene::{NodeId, SceneGraph};

//=== StageBuilder ========================================================

/// Builder for configuring and constructing a [`Stage`].
///
/// # Default Values
///
/// - **Event capacity**: 256 records
/// - **Player tag**: `"Player"`
/// - **Spawn tag**: `"SpawnPoint"`
/// - **Materials**: library with the default highlight and hover hues
/// - **Prompts**: an empty [`PromptBoard`]
/// - **Scene**: empty
pub struct StageBuilder {
    event_capacity: usize,
    player_tag: String,
    spawn_tag: String,
    materials: Box<dyn MaterialLibrary>,
    prompts: Box<dyn PromptService>,
    scene: SceneGraph,
}

impl StageBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            event_capacity: 256,
            player_tag: DEFAULT_PLAYER_TAG.to_string(),
            spawn_tag: DEFAULT_SPAWN_TAG.to_string(),
            materials: Box::new(StaticMaterialLibrary::with_defaults()),
            prompts: Box::new(PromptBoard::new()),
            scene: SceneGraph::new(),
        }
    }

    /// Sets how many lifecycle events may wait for a subscriber before new
    /// ones are dropped. See [`Stage::subscribe_events`].
    ///
    /// Default: 256
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Event capacity must be positive");
        self.event_capacity = capacity;
        self
    }

    /// Sets the tag that identifies the player node.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty.
    pub fn with_player_tag(mut self, tag: &str) -> Self {
        assert!(!tag.is_empty(), "Player tag must not be empty");
        self.player_tag = tag.to_string();
        self
    }

    /// Sets the tag that identifies the spawn point node.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty.
    pub fn with_spawn_tag(mut self, tag: &str) -> Self {
        assert!(!tag.is_empty(), "Spawn tag must not be empty");
        self.spawn_tag = tag.to_string();
        self
    }

    /// Sets the library used to load default materials for interactables
    /// that leave highlight or hover unset.
    pub fn with_material_library(mut self, materials: Box<dyn MaterialLibrary>) -> Self {
        self.materials = materials;
        self
    }

    /// Sets the prompt service levels activate and resolve.
    pub fn with_prompts(mut self, prompts: Box<dyn PromptService>) -> Self {
        self.prompts = prompts;
        self
    }

    /// Sets the scene graph the stage operates on.
    pub fn with_scene(mut self, scene: SceneGraph) -> Self {
        self.scene = scene;
        self
    }

    /// Builds the stage. Nothing is shown or activated until
    /// [`Stage::start`].
    ///
    /// Lifecycle events are discarded until a consumer calls
    /// [`Stage::subscribe_events`].
    pub fn build(self) -> Stage {
        info!(
            "Building stage (events: {}, player: {}, spawn: {})",
            self.event_capacity, self.player_tag, self.spawn_tag
        );

        let context = StageContext::new(self.scene, self.prompts, Box::new(NullEventSink))
            .with_tags(self.player_tag, self.spawn_tag);

        Stage {
            systems: StageSystems::new(),
            context,
            materials: self.materials,
            event_capacity: self.event_capacity,
            started: false,
        }
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Stage ===============================================================

/// A running stage: levels, interactables and the scene they act on.
pub struct Stage {
    systems: StageSystems,
    context: StageContext,
    materials: Box<dyn MaterialLibrary>,
    event_capacity: usize,
    started: bool,
}

impl Stage {
    //--- Setup ------------------------------------------------------------

    /// Returns the scene graph.
    pub fn scene(&self) -> &SceneGraph {
        &self.context.scene
    }

    /// Returns the scene graph for adding nodes or editing components.
    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.context.scene
    }

    /// Registers a level whose subtree starts at `root`.
    ///
    /// # Errors
    ///
    /// Fails with [`SceneError::UnknownNode`] if `root` is not in the scene.
    pub fn register_level(&mut self, config: LevelConfig, root: NodeId) -> Result<LevelId, StageError> {
        if self.context.scene.get(root).is_none() {
            return Err(SceneError::UnknownNode(root).into());
        }
        Ok(self.systems.levels.register(config, root))
    }

    /// Registers an interactable.
    ///
    /// Controllers registered after [`start`](Self::start) are started
    /// right away, so their default materials are loaded as well.
    pub fn register_interactable(&mut self, mut controller: InteractableController) -> InteractableId {
        if self.started {
            controller.start(self.materials.as_ref());
        }
        self.systems.interactables.register(controller)
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts interactables (default materials, highlight), hides every
    /// level and activates the first one.
    pub fn start(&mut self) -> Result<(), StageError> {
        info!(
            "Starting stage ({} level(s), {} interactable(s))",
            self.systems.levels.len(),
            self.systems.interactables.len()
        );

        self.started = true;
        self.systems.interactables.start_all(self.materials.as_ref());
        self.systems.levels.start(&mut self.context)
    }

    /// Runs one frame: deferred work, interactable updates, then queued
    /// level transitions.
    pub fn tick(&mut self) -> Result<(), StageError> {
        self.systems.update(&mut self.context)
    }

    /// Clears the active-level slot. The stage can be started again.
    pub fn teardown(&mut self) {
        info!("Tearing down stage");
        self.systems.levels.teardown();
    }

    //--- Levels -----------------------------------------------------------

    /// Activates a level immediately. See [`LevelManager::activate`].
    ///
    /// [`LevelManager::activate`]: crate::core::level::LevelManager::activate
    pub fn activate_level(&mut self, id: LevelId) -> Result<(), StageError> {
        self.systems.levels.activate(id, &mut self.context)
    }

    /// Completes a level immediately: fails all pending prompts and hides
    /// the level's subtree.
    pub fn complete_level(&mut self, id: LevelId) -> Result<(), StageError> {
        self.systems.levels.complete(id, &mut self.context)
    }

    /// Queues a level change for the end of the next tick.
    pub fn request_transition(&mut self, transition: LevelTransition) {
        self.context.level_transitions.push(transition);
    }

    /// The level holding the active slot, if any.
    pub fn active_level(&self) -> Option<LevelId> {
        self.systems.levels.active_level()
    }

    /// Whether the level's subtree is currently shown.
    pub fn is_level_active(&self, id: LevelId) -> Result<bool, StageError> {
        Ok(self.systems.levels.get(id)?.is_active())
    }

    /// Whether a terminal level has ended the experience.
    pub fn exit_requested(&self) -> bool {
        self.context.exit_requested()
    }

    //--- Interactables ----------------------------------------------------

    /// Returns a registered interactable.
    pub fn interactable(&self, id: InteractableId) -> Result<&InteractableController, StageError> {
        self.systems.interactables.get(id)
    }

    /// Returns a registered interactable for feeding it hand input.
    pub fn interactable_mut(&mut self, id: InteractableId) -> Result<&mut InteractableController, StageError> {
        self.systems.interactables.get_mut(id)
    }

    /// Schedules a highlight announcement for an interactable.
    pub fn announce(&mut self, id: InteractableId, delay_ticks: u32) -> Result<(), StageError> {
        let controller = self.systems.interactables.get(id)?;
        controller.activate(delay_ticks, &mut self.systems.scheduler);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.systems.scheduler.tick()
    }

    /// Starts streaming lifecycle events and returns the only receiver.
    ///
    /// The receiver can be moved to another thread. Subscribing again
    /// replaces the stream; the previous receiver sees it close. Dropping
    /// the receiver closes the stream and later events are discarded.
    pub fn subscribe_events(&mut self) -> Receiver<LevelEvent> {
        let (sink, receiver) = ChannelEventSink::bounded(self.event_capacity);
        self.context.events = Box::new(sink);
        receiver
    }

    /// Shared stage data.
    pub fn context(&self) -> &StageContext {
        &self.context
    }

    /// Shared stage data, mutable (e.g. to queue transitions).
    pub fn context_mut(&mut self) -> &mut StageContext {
        &mut self.context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
