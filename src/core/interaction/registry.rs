//=========================================================================
// Interactable Registry
//=========================================================================
//
// Owns every interactable controller of a stage and addresses them by
// `InteractableId`, so deferred commands can refer to a controller
// without holding a borrow across ticks.
//
//=========================================================================

use log::debug;

use super::{InteractableController, MaterialLibrary};
use crate::core::error::StageError;

//=== InteractableId ======================================================

/// Handle to a registered interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractableId(pub(crate) usize);

impl InteractableId {
    pub(crate) const UNASSIGNED: InteractableId = InteractableId(usize::MAX);
}

//=== InteractableRegistry ================================================

/// Owns every interactable controller of a stage.
#[derive(Debug, Default)]
pub struct InteractableRegistry {
    controllers: Vec<InteractableController>,
}

impl InteractableRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a controller and assigns its id.
    pub fn register(&mut self, mut controller: InteractableController) -> InteractableId {
        let id = InteractableId(self.controllers.len());
        controller.assign_id(id);
        debug!("Registered interactable {:?} as {:?}", controller.name(), id);
        self.controllers.push(controller);
        id
    }

    /// Looks up a controller, failing with
    /// [`StageError::UnknownInteractable`] for ids this registry never issued.
    pub fn get(&self, id: InteractableId) -> Result<&InteractableController, StageError> {
        self.controllers.get(id.0).ok_or(StageError::UnknownInteractable(id))
    }

    /// Mutable lookup, same failure as [`get`](Self::get).
    pub fn get_mut(&mut self, id: InteractableId) -> Result<&mut InteractableController, StageError> {
        self.controllers.get_mut(id.0).ok_or(StageError::UnknownInteractable(id))
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Controllers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &InteractableController> {
        self.controllers.iter()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Loads default materials and applies the highlight on every controller.
    pub fn start_all(&mut self, library: &dyn MaterialLibrary) {
        for controller in &mut self.controllers {
            controller.start(library);
        }
    }

    /// Per-tick update of every controller.
    pub fn update_all(&mut self) {
        for controller in &mut self.controllers {
            controller.update();
        }
    }
}

//=== Tests ===============================================================
