//=========================================================================
// Scheduler
//=========================================================================
//
// Tick counter plus a queue of deferred commands.
//
// Flow:
//   schedule(delay, cmd) → pending (due tick)
//   advance()            → tick += 1 → due commands (FIFO)
//
// Commands never run synchronously from `schedule`, even with a zero
// delay; they are always handed out by a later `advance`. There is no
// cancellation: a command re-checks its own guard when it runs.
//
//=========================================================================

use crate::core::interaction::InteractableId;

//=== Deferred ============================================================

/// Work scheduled for a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Highlight announcement of an interactable.
    Announce(InteractableId),
}

//=== Scheduler ===========================================================

/// Tick counter with deferred commands.
#[derive(Debug, Default)]
pub struct Scheduler {
    tick: u64,
    pending: Vec<(u64, Deferred)>,
}

impl Scheduler {
    /// Scheduler at tick zero with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick number. Starts at zero.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Queues `command` to run `delay_ticks` ticks from now (at least one).
    pub fn schedule(&mut self, delay_ticks: u32, command: Deferred) {
        let due = self.tick + u64::from(delay_ticks.max(1));
        self.pending.push((due, command));
    }

    /// Moves to the next tick and returns every command now due, in the
    /// order they were scheduled.
    pub fn advance(&mut self) -> Vec<Deferred> {
        self.tick += 1;
        let now = self.tick;

        let mut due = Vec::new();
        self.pending.retain(|&(at, command)| {
            if at <= now {
                due.push(command);
                false
            } else {
                true
            }
        });
        due
    }

    /// Commands still waiting for their tick.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

//=== Tests ===============================================================
