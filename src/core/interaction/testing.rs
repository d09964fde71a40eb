//=========================================================================
// Recording Fakes
//=========================================================================
//
// Test doubles for the task and body collaborators. Both record every
// call they receive so tests can assert on exact sequences.
//
//=========================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Hand, InteractableBody, Material, Task};

//=== RecordingTask =======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TaskCall {
    EnterHover,
    ExitHover,
    Grab { forced: bool },
    Release { forced: bool },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingTask {
    active: Cell<bool>,
    movable: Cell<bool>,
    hide_until_active: Cell<bool>,
    calls: RefCell<Vec<TaskCall>>,
}

impl RecordingTask {
    pub(crate) fn active() -> Rc<Self> {
        let task = Self::default();
        task.active.set(true);
        Rc::new(task)
    }

    pub(crate) fn inactive() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn hidden_until_active() -> Rc<Self> {
        let task = Self::default();
        task.hide_until_active.set(true);
        Rc::new(task)
    }

    pub(crate) fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    pub(crate) fn set_movable(&self, movable: bool) {
        self.movable.set(movable);
    }

    pub(crate) fn calls(&self) -> Vec<TaskCall> {
        self.calls.borrow().clone()
    }
}

impl Task for RecordingTask {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn is_movable(&self) -> bool {
        self.movable.get()
    }

    fn hide_until_active(&self) -> bool {
        self.hide_until_active.get()
    }

    fn enter_hover(&self, _hand: &Hand) {
        self.calls.borrow_mut().push(TaskCall::EnterHover);
    }

    fn exit_hover(&self, _hand: &Hand) {
        self.calls.borrow_mut().push(TaskCall::ExitHover);
    }

    fn grab(&self, _hand: &Hand, forced: bool) {
        self.calls.borrow_mut().push(TaskCall::Grab { forced });
    }

    fn release(&self, _hand: &Hand, forced: bool) {
        self.calls.borrow_mut().push(TaskCall::Release { forced });
    }
}

//=== RecordingBody =======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyCall {
    HoverBegin,
    HoverEnd,
    Attach,
    Detach,
    Material(String),
    Update,
}

/// Clones share one call log.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingBody {
    calls: Rc<RefCell<Vec<BodyCall>>>,
}

impl RecordingBody {
    pub(crate) fn calls(&self) -> Vec<BodyCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn push(&self, call: BodyCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl InteractableBody for RecordingBody {
    fn hover_begin(&mut self, _hand: &Hand) {
        self.push(BodyCall::HoverBegin);
    }

    fn hover_end(&mut self, _hand: &Hand) {
        self.push(BodyCall::HoverEnd);
    }

    fn attach(&mut self, _hand: &Hand) {
        self.push(BodyCall::Attach);
    }

    fn detach(&mut self, _hand: &Hand) {
        self.push(BodyCall::Detach);
    }

    fn set_highlight_material(&mut self, material: &Material) {
        self.push(BodyCall::Material(material.name().to_string()));
    }

    fn update(&mut self) {
        self.push(BodyCall::Update);
    }
}
