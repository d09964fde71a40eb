//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for level transitions.
//
// Tasks and prompt handlers request level changes here while gameplay
// runs. The stage applies them at the tick boundary, in FIFO order.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::LevelId;

//=== LevelTransition =====================================================

/// A requested level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTransition {
    /// Makes the level active, completing whichever level held the slot.
    Activate(LevelId),

    /// Completes the level: fails outstanding prompts, hides its subtree.
    Complete(LevelId),
}

//=== TransitionQueue =====================================================

/// FIFO of level transitions waiting for the next tick boundary.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<LevelTransition>,
}

impl TransitionQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition for the next tick boundary.
    pub fn push(&mut self, transition: LevelTransition) {
        self.queue.push(transition);
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued transitions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions, leaving the queue empty.
    pub fn take(&mut self) -> Vec<LevelTransition> {
        std::mem::take(&mut self.queue)
    }
}

//=== Tests ===============================================================
