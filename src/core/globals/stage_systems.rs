//=========================================================================
// Stage Systems
//=========================================================================
//
// Container for the systems with logic: level manager, interactable
// registry and scheduler. Systems operate on StageContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::StageContext;
use crate::core::error::StageError;
use crate::core::interaction::InteractableRegistry;
use crate::core::level::LevelManager;
use crate::core::scheduler::{Deferred, Scheduler};

//=== StageSystems ========================================================

/// Stage logic, run once per tick by [`update`](Self::update).
#[derive(Debug, Default)]
pub struct StageSystems {
    pub levels: LevelManager,
    pub interactables: InteractableRegistry,
    pub scheduler: Scheduler,
}

impl StageSystems {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Deferred work**: advances the scheduler and runs due commands
    /// 2. **Interactables**: per-frame update, gated by task activity
    /// 3. **Transitions**: applies queued level changes
    pub(crate) fn update(&mut self, context: &mut StageContext) -> Result<(), StageError> {
        for command in self.scheduler.advance() {
            self.run_deferred(command);
        }

        self.interactables.update_all();

        self.levels.process_transitions(context)
    }

    fn run_deferred(&mut self, command: Deferred) {
        match command {
            Deferred::Announce(id) => match self.interactables.get_mut(id) {
                Ok(controller) => {
                    controller.announce();
                }
                Err(err) => warn!("Dropping deferred announcement: {}", err),
            },
        }
    }
}
