//=========================================================================
// Interactable Controller
//=========================================================================
//
// Per-object hover/grab state machine.
//
// Flow:
//   hand input → on_hover_* / on_*_hand → [task active?] → Task + body
//
// Every transition is gated on the owning task reporting itself active.
// When gated out, nothing changes: no material swap, no task callback,
// no hover flag update. The controller never decides gameplay; it only
// forwards semantic events to its task and drives the body's visuals.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Hand, InteractableConfig, InteractableId, Material, MaterialLibrary, TaskHandle};
use crate::core::scheduler::{Deferred, Scheduler};

//=== InteractableBody ====================================================

/// The underlying interactable object: highlight rendering and physical
/// attachment, as provided by the engine's interaction system.
pub trait InteractableBody {
    /// Base hover-begin hook (applies the current highlight).
    fn hover_begin(&mut self, hand: &Hand);

    /// Base hover-end hook (clears the current highlight).
    fn hover_end(&mut self, hand: &Hand);

    /// Physically attaches the object to the hand.
    fn attach(&mut self, hand: &Hand);

    /// Physically detaches the object from the hand.
    fn detach(&mut self, hand: &Hand);

    /// Sets the material used for highlighting.
    fn set_highlight_material(&mut self, material: &Material);

    /// Per-frame hover re-evaluation.
    fn update(&mut self) {}
}

//=== InteractableController ==============================================

/// Hover and grab state machine for one interactable object.
pub struct InteractableController {
    id: InteractableId,
    name: String,
    config: InteractableConfig,
    is_actually_hovering: bool,
    task: TaskHandle,
    body: Box<dyn InteractableBody>,
}

impl InteractableController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller. Nothing is applied to the body until [`start`](Self::start).
    pub fn new(
        name: impl Into<String>,
        task: TaskHandle,
        body: Box<dyn InteractableBody>,
        config: InteractableConfig,
    ) -> Self {
        Self {
            id: InteractableId::UNASSIGNED,
            name: name.into(),
            config,
            is_actually_hovering: false,
            task,
            body,
        }
    }

    pub(crate) fn assign_id(&mut self, id: InteractableId) {
        self.id = id;
    }

    /// First activation: loads unset default materials and shows the
    /// highlight.
    pub fn start(&mut self, library: &dyn MaterialLibrary) {
        self.config.fill_defaults(library);
        self.change_material(self.config.highlight.clone());
    }

    //--- Queries ----------------------------------------------------------

    /// Id assigned at registration.
    pub fn id(&self) -> InteractableId {
        self.id
    }

    /// Name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the last gated hover transition was a begin.
    pub fn is_actually_hovering(&self) -> bool {
        self.is_actually_hovering
    }

    /// Material setup, with defaults filled in once started.
    pub fn config(&self) -> &InteractableConfig {
        &self.config
    }

    /// Owning gameplay task.
    pub fn task(&self) -> &TaskHandle {
        &self.task
    }

    //--- Per-tick ---------------------------------------------------------

    /// Runs the body's hover re-evaluation, only while the task is active.
    pub fn update(&mut self) {
        if self.task.is_active() {
            self.body.update();
        }
    }

    //--- Announcement -----------------------------------------------------

    /// Schedules a highlight announcement `delay_ticks` from now.
    ///
    /// A delay of zero still waits for the next tick.
    pub fn activate(&self, delay_ticks: u32, scheduler: &mut Scheduler) {
        debug!("{}: announcement scheduled in {} tick(s)", self.name, delay_ticks);
        scheduler.schedule(delay_ticks, Deferred::Announce(self.id));
    }

    /// Deferred half of [`activate`](Self::activate). Silently dropped if
    /// the task went inactive while waiting.
    ///
    /// Returns whether the announcement was applied.
    pub(crate) fn announce(&mut self) -> bool {
        if !self.task.is_active() {
            debug!("{}: announcement dropped, task inactive", self.name);
            return false;
        }

        self.change_material(self.config.highlight.clone());
        self.body.hover_begin(&Hand::Placeholder);
        true
    }

    //--- Hover ------------------------------------------------------------

    /// A hand started hovering. Ignored while the task is inactive.
    pub fn on_hover_begin(&mut self, hand: &Hand) {
        if !self.task.is_active() {
            return;
        }
        self.apply_hover_begin(hand);
    }

    /// A hand stopped hovering. Ignored while the task is inactive.
    pub fn on_hover_end(&mut self, hand: &Hand) {
        if !self.task.is_active() {
            return;
        }
        self.apply_hover_end(hand);
    }

    fn apply_hover_begin(&mut self, hand: &Hand) {
        hand.show_grab_hint();

        self.is_actually_hovering = true;
        self.task.enter_hover(hand);

        // end-then-begin forces the body to pick up the new material
        self.body.hover_end(hand);
        self.change_material(self.config.hover.clone());
        self.body.hover_begin(hand);

        debug!("{}: hover begin ({:?})", self.name, hand);
    }

    fn apply_hover_end(&mut self, hand: &Hand) {
        self.is_actually_hovering = false;
        self.task.exit_hover(hand);

        self.body.hover_end(hand);
        self.change_material(self.config.highlight.clone());
        self.body.hover_begin(hand);

        debug!("{}: hover end ({:?})", self.name, hand);
    }

    //--- Grab -------------------------------------------------------------

    /// A hand grabbed the object. Only movable tasks attach the body.
    pub fn on_attached_to_hand(&mut self, hand: &Hand) {
        if !self.task.is_active() {
            return;
        }

        self.task.grab(hand, false);
        self.change_material(self.config.grab.clone());

        if self.task.is_movable() {
            self.body.attach(hand);
        }
        debug!("{}: grabbed ({:?})", self.name, hand);
    }

    /// A hand let go. Restores the highlight material.
    pub fn on_detached_from_hand(&mut self, hand: &Hand) {
        if !self.task.is_active() {
            return;
        }

        self.task.release(hand, false);
        self.change_material(self.config.highlight.clone());

        if self.task.is_movable() {
            self.body.detach(hand);
        }
        debug!("{}: dropped ({:?})", self.name, hand);
    }

    /// Ends any interaction without real input (timeouts, cancellation).
    pub fn force_resolve_as_unsuccessful(&mut self) {
        self.on_detached_from_hand(&Hand::Placeholder);
    }

    //--- Debug Entry Points -----------------------------------------------

    /// Hover begin with a placeholder hand, ignoring task activity.
    pub fn debug_enter_hover(&mut self) {
        self.apply_hover_begin(&Hand::Placeholder);
    }

    /// Hover end with a placeholder hand, ignoring task activity.
    pub fn debug_exit_hover(&mut self) {
        self.apply_hover_end(&Hand::Placeholder);
    }

    /// Forced grab on the task; still requires the task to be active.
    pub fn debug_grab(&mut self) {
        if self.task.is_active() {
            self.task.grab(&Hand::Placeholder, true);
        }
    }

    /// Forced drop on the task; still requires the task to be active.
    pub fn debug_drop(&mut self) {
        if self.task.is_active() {
            self.task.release(&Hand::Placeholder, true);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn change_material(&mut self, material: Option<Material>) {
        if let Some(material) = material {
            self.body.set_highlight_material(&material);
        }
    }
}

impl std::fmt::Debug for InteractableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractableController")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("is_actually_hovering", &self.is_actually_hovering)
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interaction::testing::{BodyCall, RecordingBody, RecordingTask, TaskCall};
    use crate::core::interaction::{HandDevice, StaticMaterialLibrary, DEFAULT_HIGHLIGHT};
    use std::cell::Cell;
    use std::rc::Rc;

    struct HintHand {
        hints: Cell<u32>,
    }

    impl HandDevice for HintHand {
        fn label(&self) -> &str {
            "right"
        }

        fn show_grab_hint(&self) {
            self.hints.set(self.hints.get() + 1);
        }
    }

    fn materials() -> InteractableConfig {
        InteractableConfig::new()
            .with_highlight(Material::named("highlight"))
            .with_hover(Material::named("hover"))
            .with_grab(Material::named("grab"))
    }

    fn controller(task: &Rc<RecordingTask>, config: InteractableConfig) -> (InteractableController, RecordingBody) {
        let body = RecordingBody::default();
        let controller = InteractableController::new("lever", task.clone(), Box::new(body.clone()), config);
        (controller, body)
    }

    #[test]
    fn start_loads_defaults_and_applies_highlight() {
        let task = RecordingTask::active();
        let (mut c, body) = controller(&task, InteractableConfig::new());

        c.start(&StaticMaterialLibrary::with_defaults());

        assert_eq!(body.calls(), vec![BodyCall::Material(DEFAULT_HIGHLIGHT.into())]);
        assert!(c.config().grab.is_none());
    }

    #[test]
    fn hover_begin_notifies_task_and_reapplies_material() {
        let task = RecordingTask::active();
        let (mut c, body) = controller(&task, materials());
        let device = Rc::new(HintHand { hints: Cell::new(0) });
        let hand = Hand::device(device.clone());

        c.on_hover_begin(&hand);

        assert!(c.is_actually_hovering());
        assert_eq!(device.hints.get(), 1);
        assert_eq!(task.calls(), vec![TaskCall::EnterHover]);
        assert_eq!(
            body.calls(),
            vec![
                BodyCall::HoverEnd,
                BodyCall::Material("hover".into()),
                BodyCall::HoverBegin,
            ]
        );
    }

    #[test]
    fn hover_end_restores_highlight() {
        let task = RecordingTask::active();
        let (mut c, body) = controller(&task, materials());

        c.on_hover_begin(&Hand::Placeholder);
        body.clear();
        c.on_hover_end(&Hand::Placeholder);

        assert!(!c.is_actually_hovering());
        assert_eq!(task.calls(), vec![TaskCall::EnterHover, TaskCall::ExitHover]);
        assert_eq!(
            body.calls(),
            vec![
                BodyCall::HoverEnd,
                BodyCall::Material("highlight".into()),
                BodyCall::HoverBegin,
            ]
        );
    }

    #[test]
    fn hovering_tracks_last_gated_transition() {
        let task = RecordingTask::active();
        let (mut c, _) = controller(&task, materials());

        c.on_hover_begin(&Hand::Placeholder);
        task.set_active(false);
        c.on_hover_end(&Hand::Placeholder);
        assert!(c.is_actually_hovering());

        task.set_active(true);
        c.on_hover_end(&Hand::Placeholder);
        assert!(!c.is_actually_hovering());

        task.set_active(false);
        c.on_hover_begin(&Hand::Placeholder);
        assert!(!c.is_actually_hovering());
    }

    #[test]
    fn inactive_task_blocks_every_transition() {
        let task = RecordingTask::inactive();
        let (mut c, body) = controller(&task, materials());

        c.on_hover_begin(&Hand::Placeholder);
        c.on_hover_end(&Hand::Placeholder);
        c.on_attached_to_hand(&Hand::Placeholder);
        c.on_detached_from_hand(&Hand::Placeholder);
        c.force_resolve_as_unsuccessful();

        assert!(task.calls().is_empty());
        assert!(body.calls().is_empty());
        assert!(!c.is_actually_hovering());
    }

    #[test]
    fn inactive_task_shows_no_grab_hint() {
        let task = RecordingTask::inactive();
        let (mut c, body) = controller(&task, materials());
        let device = Rc::new(HintHand { hints: Cell::new(0) });
        let hand = Hand::device(device.clone());

        c.on_hover_begin(&hand);
        c.on_hover_end(&hand);
        c.on_attached_to_hand(&hand);
        c.on_detached_from_hand(&hand);

        assert_eq!(device.hints.get(), 0);
        assert!(task.calls().is_empty());
        assert!(body.calls().is_empty());

        task.set_active(true);
        c.on_hover_begin(&hand);
        assert_eq!(device.hints.get(), 1);
    }

    #[test]
    fn grab_attaches_only_when_movable() {
        let task = RecordingTask::active();
        let (mut c, body) = controller(&task, materials());

        c.on_attached_to_hand(&Hand::Placeholder);
        assert_eq!(task.calls(), vec![TaskCall::Grab { forced: false }]);
        assert_eq!(body.calls(), vec![BodyCall::Material("grab".into())]);

        task.set_movable(true);
        body.clear();
        c.on_attached_to_hand(&Hand::Placeholder);
        assert_eq!(body.calls(), vec![BodyCall::Material("grab".into()), BodyCall::Attach]);
    }

    #[test]
    fn drop_restores_highlight_and_detaches_when_movable() {
        let task = RecordingTask::active();
        task.set_movable(true);
        let (mut c, body) = controller(&task, materials());

        c.on_detached_from_hand(&Hand::Placeholder);

        assert_eq!(task.calls(), vec![TaskCall::Release { forced: false }]);
        assert_eq!(body.calls(), vec![BodyCall::Material("highlight".into()), BodyCall::Detach]);
    }

    #[test]
    fn unset_grab_material_is_left_alone() {
        let task = RecordingTask::active();
        let (mut c, body) = controller(&task, InteractableConfig::new());

        c.on_attached_to_hand(&Hand::Placeholder);

        assert_eq!(task.calls(), vec![TaskCall::Grab { forced: false }]);
        assert!(body.calls().is_empty());
    }

    #[test]
    fn force_resolve_drops_with_placeholder() {
        let task = RecordingTask::active();
        let (mut c, _) = controller(&task, materials());

        c.force_resolve_as_unsuccessful();

        assert_eq!(task.calls(), vec![TaskCall::Release { forced: false }]);
    }

    #[test]
    fn debug_hover_ignores_task_activity() {
        let task = RecordingTask::inactive();
        let (mut c, _) = controller(&task, materials());

        c.debug_enter_hover();
        assert!(c.is_actually_hovering());
        c.debug_exit_hover();
        assert!(!c.is_actually_hovering());
        assert_eq!(task.calls(), vec![TaskCall::EnterHover, TaskCall::ExitHover]);
    }

    #[test]
    fn debug_grab_and_drop_are_forced_but_gated() {
        let task = RecordingTask::inactive();
        let (mut c, body) = controller(&task, materials());

        c.debug_grab();
        c.debug_drop();
        assert!(task.calls().is_empty());

        task.set_active(true);
        c.debug_grab();
        c.debug_drop();
        assert_eq!(
            task.calls(),
            vec![TaskCall::Grab { forced: true }, TaskCall::Release { forced: true }]
        );
        assert!(body.calls().is_empty());
    }

    #[test]
    fn announce_rechecks_task() {
        let task = RecordingTask::inactive();
        let (mut c, body) = controller(&task, materials());

        assert!(!c.announce());
        assert!(body.calls().is_empty());

        task.set_active(true);
        assert!(c.announce());
        assert_eq!(body.calls(), vec![BodyCall::Material("highlight".into()), BodyCall::HoverBegin]);
        assert!(task.calls().is_empty());
    }

    #[test]
    fn update_is_frozen_while_inactive() {
        let task = RecordingTask::inactive();
        let (mut c, body) = controller(&task, materials());

        c.update();
        assert!(body.calls().is_empty());

        task.set_active(true);
        c.update();
        assert_eq!(body.calls(), vec![BodyCall::Update]);
    }
}
