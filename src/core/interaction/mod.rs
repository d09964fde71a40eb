//=========================================================================
// Interaction System
//=========================================================================
//
// Hover/grab lifecycle of interactable objects, gated by their owning task.
//
// Architecture:
//   InteractableRegistry
//     └─ InteractableController
//          ├─ task: TaskHandle            (external, shared)
//          ├─ body: Box<dyn InteractableBody> (engine object)
//          └─ config: InteractableConfig  (materials)
//
//=========================================================================

//=== Module Declarations =================================================

mod controller;
mod hand;
mod material;
mod registry;
mod task;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use controller::{InteractableBody, InteractableController};
pub use hand::{Hand, HandDevice};
pub use material::{
    InteractableConfig, Material, MaterialLibrary, StaticMaterialLibrary, DEFAULT_HIGHLIGHT,
    DEFAULT_HOVER,
};
pub use registry::{InteractableId, InteractableRegistry};
pub use task::{Task, TaskHandle};
