//=========================================================================
// Level Manager
//=========================================================================
//
// Owns every level and the single active-level slot.
//
// Levels are registered once and referenced by `LevelId`. The slot is
// written only by `activate` and cleared only by `teardown`; every other
// caller reads it through `active_level`.
//
// Flow:
//   activate(L) → complete(previous) → slot = L → show subtree
//               → entry prompt (or exit) → place player → events
//   complete(L) → fail all pending prompts → hide subtree → event
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Level, LevelConfig, LevelId, LevelTransition};
use crate::core::error::{SceneError, StageError};
use crate::core::events::EventKind;
use crate::core::globals::StageContext;
use crate::core::scene::NodeId;

//=== LevelManager ========================================================

/// Registered levels plus the single active-level slot.
#[derive(Debug, Default)]
pub struct LevelManager {
    levels: Vec<Level>,
    active: Option<LevelId>,
}

impl LevelManager {
    //--- Construction -----------------------------------------------------

    /// Manager with no levels and an empty slot.
    pub fn new() -> Self {
        Self { levels: Vec::new(), active: None }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a level rooted at `root`.
    pub fn register(&mut self, config: LevelConfig, root: NodeId) -> LevelId {
        let id = LevelId(self.levels.len());
        debug!("Registered level {} as {:?}", config.name, id);
        self.levels.push(Level::new(config, root));
        id
    }

    /// Looks up a registered level.
    pub fn get(&self, id: LevelId) -> Result<&Level, StageError> {
        self.levels.get(id.0).ok_or(StageError::UnknownLevel(id))
    }

    /// Number of registered levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when no level is registered.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The level holding the active slot, if any.
    ///
    /// A completed level keeps the slot until another level activates.
    pub fn active_level(&self) -> Option<LevelId> {
        self.active
    }

    //--- Lifecycle --------------------------------------------------------

    /// Hides every level, then activates the first level.
    ///
    /// Only the first level flagged `is_first_level` (in registration
    /// order) is activated; further flags are reported and ignored.
    pub fn start(&mut self, context: &mut StageContext) -> Result<(), StageError> {
        for level in &mut self.levels {
            level.set_visibility_of_all_children(&mut context.scene, false);
        }

        let mut first_levels = self
            .levels
            .iter()
            .enumerate()
            .filter(|(_, level)| level.is_first_level())
            .map(|(index, _)| LevelId(index));

        let Some(first) = first_levels.next() else {
            debug!("No first level flagged, waiting for an explicit activation");
            return Ok(());
        };

        for extra in first_levels {
            warn!(
                "Level {} is also flagged as first level, ignoring",
                self.levels[extra.0].name()
            );
        }

        self.activate(first, context)
    }

    /// Makes `id` the active level.
    ///
    /// A different level holding the slot is completed first. A level
    /// without an entry prompt ends the experience: the exit flag is raised
    /// and activation carries on.
    ///
    /// # Errors
    ///
    /// Fails when the level is unknown or when the player or spawn point
    /// cannot be found exactly once. Both are unrecoverable for a stage.
    pub fn activate(&mut self, id: LevelId, context: &mut StageContext) -> Result<(), StageError> {
        self.get(id)?;

        if let Some(previous) = self.active.filter(|&previous| previous != id) {
            self.complete(previous, context)?;
            context.events.log(EventKind::LevelUnloaded, self.levels[previous.0].name());
        }

        self.active = Some(id);

        let level = &mut self.levels[id.0];
        level.set_visibility_of_all_children(&mut context.scene, true);
        info!("Active level is now {}", level.name());

        match level.entry_prompt() {
            Some(prompt) => context.prompts.activate(prompt),
            None => {
                warn!("{} has no entry prompt, treating it as the end of the experience", level.name());
                context.request_exit();
            }
        }

        Self::place_player(context)?;

        let name = self.levels[id.0].name();
        context.events.log(EventKind::LevelLoaded, name);
        context.events.log(EventKind::LevelStarted, name);
        Ok(())
    }

    /// Completes `id`: fails every pending prompt, hides the subtree.
    pub fn complete(&mut self, id: LevelId, context: &mut StageContext) -> Result<(), StageError> {
        let level = self.levels.get_mut(id.0).ok_or(StageError::UnknownLevel(id))?;

        context.prompts.resolve_all();
        level.set_visibility_of_all_children(&mut context.scene, false);

        info!("Level {} completed", level.name());
        context.events.log(EventKind::LevelCompleted, level.name());
        Ok(())
    }

    /// Clears the active slot.
    pub fn teardown(&mut self) {
        self.active = None;
    }

    //--- Transition Processing --------------------------------------------

    /// Applies every queued level transition in FIFO order.
    ///
    /// Unknown levels are reported and skipped.
    pub fn process_transitions(&mut self, context: &mut StageContext) -> Result<(), StageError> {
        for transition in context.level_transitions.take() {
            debug!("Processing {:?}", transition);

            let result = match transition {
                LevelTransition::Activate(id) => self.activate(id, context),
                LevelTransition::Complete(id) => self.complete(id, context),
            };

            match result {
                Err(StageError::UnknownLevel(id)) => {
                    warn!("Skipping {:?}: level {:?} not registered", transition, id)
                }
                other => other?,
            }
        }
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Moves the player onto the spawn point's ground-plane position and
    /// orientation. Height is kept.
    fn place_player(context: &mut StageContext) -> Result<(), StageError> {
        let player = context.scene.find_unique_by_tag(&context.player_tag)?;
        let spawn = context.scene.find_unique_by_tag(&context.spawn_tag)?;

        let spawn_transform = context
            .scene
            .get(spawn)
            .map(|node| node.transform)
            .ok_or(SceneError::UnknownNode(spawn))?;

        let node = context
            .scene
            .get_mut(player)
            .ok_or(SceneError::UnknownNode(player))?;

        let height = node.transform.position.y;
        node.transform.position = Vec3::new(
            spawn_transform.position.x,
            height,
            spawn_transform.position.z,
        );
        node.transform.rotation = spawn_transform.rotation;
        Ok(())
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::EventSink;
    use crate::core::level::{PromptBoard, PromptService, PromptState};
    use crate::core::scene::{ComponentKind, SceneGraph, SceneNode, Switch, SwitchProbe, Transform};
    use glam::Quat;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingSink {
        events: Rc<RefCell<Vec<(EventKind, String)>>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<(EventKind, String)> {
            std::mem::take(&mut *self.events.borrow_mut())
        }
    }

    impl EventSink for RecordingSink {
        fn log(&self, kind: EventKind, subject: &str) {
            self.events.borrow_mut().push((kind, subject.to_string()));
        }
    }

    struct Fixture {
        context: StageContext,
        manager: LevelManager,
        board: PromptBoard,
        sink: RecordingSink,
        a: LevelId,
        b: LevelId,
        a_renderer: SwitchProbe,
        b_renderer: SwitchProbe,
        player: NodeId,
    }

    fn spawn_rotation() -> Quat {
        Quat::from_rotation_y(1.0)
    }

    /// Level A (first, prompt "intro") and terminal level B.
    fn fixture() -> Fixture {
        let mut scene = SceneGraph::new();
        let player = scene.add_root(
            SceneNode::new("player")
                .with_tag("Player")
                .with_transform(Transform::from_position(Vec3::new(1.0, 1.7, 2.0))),
        );
        scene.add_root(
            SceneNode::new("spawn")
                .with_tag("SpawnPoint")
                .with_transform(Transform::new(Vec3::new(5.0, 0.0, -3.0), spawn_rotation())),
        );

        let a_switch = Switch::new(true);
        let a_renderer = a_switch.probe();
        let a_root = scene.add_root(SceneNode::new("A").with_component(ComponentKind::Renderer, a_switch));
        let b_switch = Switch::new(true);
        let b_renderer = b_switch.probe();
        let b_root = scene.add_root(SceneNode::new("B").with_component(ComponentKind::Renderer, b_switch));

        let board = PromptBoard::new();
        let intro = board.add("intro");
        let sink = RecordingSink::default();
        let context = StageContext::new(scene, Box::new(board.clone()), Box::new(sink.clone()));

        let mut manager = LevelManager::new();
        let a = manager.register(LevelConfig::new("A").with_entry_prompt(intro).first_level(), a_root);
        let b = manager.register(LevelConfig::new("B"), b_root);

        Fixture { context, manager, board, sink, a, b, a_renderer, b_renderer, player }
    }

    #[test]
    fn start_hides_all_and_activates_first_level() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();

        assert_eq!(f.manager.active_level(), Some(f.a));
        assert!(f.manager.get(f.a).unwrap().is_active());
        assert!(!f.manager.get(f.b).unwrap().is_active());
        assert!(f.a_renderer.is_enabled());
        assert!(!f.b_renderer.is_enabled());
        assert_eq!(f.board.pending().len(), 1);
        assert!(!f.context.exit_requested());
    }

    #[test]
    fn activating_completes_previous_level_first() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();
        f.sink.take();

        f.manager.activate(f.b, &mut f.context).unwrap();

        assert_eq!(f.manager.active_level(), Some(f.b));
        assert!(!f.manager.get(f.a).unwrap().is_active());
        assert!(!f.a_renderer.is_enabled());
        assert!(f.b_renderer.is_enabled());
        assert_eq!(
            f.sink.take(),
            vec![
                (EventKind::LevelCompleted, "A".to_string()),
                (EventKind::LevelUnloaded, "A".to_string()),
                (EventKind::LevelLoaded, "B".to_string()),
                (EventKind::LevelStarted, "B".to_string()),
            ]
        );
    }

    #[test]
    fn terminal_level_requests_exit() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();
        let intro = f.board.pending()[0];

        f.manager.complete(f.a, &mut f.context).unwrap();
        f.manager.activate(f.b, &mut f.context).unwrap();

        assert_eq!(f.board.state(intro), Some(PromptState::Failed));
        assert!(f.context.exit_requested());
        assert_eq!(f.manager.active_level(), Some(f.b));
    }

    #[test]
    fn complete_fails_prompts_from_anywhere() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();
        let unrelated = f.board.add("unrelated");
        let mut handle = f.board.clone();
        handle.activate(unrelated);

        f.manager.complete(f.b, &mut f.context).unwrap();

        assert!(f.board.pending().is_empty());
        assert_eq!(f.board.state(unrelated), Some(PromptState::Failed));
        // completing B leaves A's subtree and the slot alone
        assert!(f.a_renderer.is_enabled());
        assert_eq!(f.manager.active_level(), Some(f.a));
    }

    #[test]
    fn player_keeps_height_and_takes_spawn_placement() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();

        let transform = f.context.scene.get(f.player).unwrap().transform;
        assert_eq!(transform.position, Vec3::new(5.0, 1.7, -3.0));
        assert_eq!(transform.rotation, spawn_rotation());
    }

    #[test]
    fn missing_spawn_point_is_fatal() {
        let mut f = fixture();
        f.context.spawn_tag = "Nowhere".to_string();

        let err = f.manager.activate(f.a, &mut f.context).unwrap_err();
        assert_eq!(err, StageError::Scene(SceneError::TagNotFound("Nowhere".into())));
    }

    #[test]
    fn reactivating_active_level_does_not_complete_it() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();
        f.sink.take();

        f.manager.activate(f.a, &mut f.context).unwrap();

        let kinds: Vec<_> = f.sink.take().into_iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![EventKind::LevelLoaded, EventKind::LevelStarted]);
    }

    #[test]
    fn queued_transitions_apply_in_order_and_skip_unknown() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();

        f.context.level_transitions.push(LevelTransition::Activate(LevelId(42)));
        f.context.level_transitions.push(LevelTransition::Activate(f.b));
        f.manager.process_transitions(&mut f.context).unwrap();

        assert_eq!(f.manager.active_level(), Some(f.b));
        assert!(f.context.level_transitions.is_empty());
    }

    #[test]
    fn teardown_clears_slot() {
        let mut f = fixture();
        f.manager.start(&mut f.context).unwrap();
        f.manager.teardown();
        assert_eq!(f.manager.active_level(), None);
    }
}
