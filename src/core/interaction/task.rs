//=========================================================================
// Task Contract
//=========================================================================
//
// The gameplay task that owns one or more interactables.
//
// Tasks live outside the stage. Interactables hold a shared handle to
// their owning task and consult it before every transition; all methods
// take `&self` so a task can be reached from several interactables and
// from the scene graph at once (use interior mutability for task state).
//
//=========================================================================

use std::fmt::Debug;
use std::rc::Rc;

use super::Hand;

/// Shared, non-owning reference to a task.
pub type TaskHandle = Rc<dyn Task>;

/// Gameplay unit that decides whether its interactables are live.
pub trait Task: Debug {
    /// Whether interactables owned by this task currently react to input.
    fn is_active(&self) -> bool;

    /// Whether grabbing physically attaches the object to the hand.
    fn is_movable(&self) -> bool;

    /// Whether the task's node stays hidden when its level becomes visible.
    fn hide_until_active(&self) -> bool {
        false
    }

    fn enter_hover(&self, hand: &Hand);

    fn exit_hover(&self, hand: &Hand);

    /// `forced` is set for programmatic grabs that bypass hand input.
    fn grab(&self, hand: &Hand, forced: bool);

    /// The held object was dropped.
    ///
    /// `forced` is set for programmatic drops that bypass hand input.
    fn release(&self, hand: &Hand, forced: bool);
}
