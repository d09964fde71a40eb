//=========================================================================
// Prompts
//=========================================================================
//
// Narrative units a level starts and the system-wide sweep that fails
// every outstanding one.
//
// `PromptService` is the contract the level manager calls into.
// `PromptBoard` is a shared in-memory implementation: clones refer to the
// same board, so gameplay code can keep a handle after the stage owns one.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

//=== PromptId ============================================================

/// Handle to a prompt owned by a [`PromptService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PromptId(pub u32);

//=== PromptService Trait =================================================

/// Gameplay prompts a level starts and fails.
pub trait PromptService {
    /// Starts a prompt.
    fn activate(&mut self, id: PromptId);

    /// Forces every unresolved prompt, anywhere, to an unsuccessful end.
    fn resolve_all(&mut self);
}

//=== PromptState =========================================================

/// Lifecycle of one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// Not yet activated.
    Dormant,
    Pending,
    Succeeded,
    Failed,
}

impl PromptState {
    /// True once succeeded or failed.
    pub fn is_resolved(self) -> bool {
        matches!(self, PromptState::Succeeded | PromptState::Failed)
    }
}

//=== PromptBoard =========================================================

#[derive(Debug)]
struct PromptEntry {
    name: String,
    state: PromptState,
}

/// In-memory prompt service. Clones share the same board.
#[derive(Debug, Clone, Default)]
pub struct PromptBoard {
    entries: Rc<RefCell<Vec<PromptEntry>>>,
}

impl PromptBoard {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dormant prompt.
    pub fn add(&self, name: impl Into<String>) -> PromptId {
        let mut entries = self.entries.borrow_mut();
        let id = PromptId(entries.len() as u32);
        entries.push(PromptEntry { name: name.into(), state: PromptState::Dormant });
        id
    }

    /// Current state, or `None` if the board never issued `id`.
    pub fn state(&self, id: PromptId) -> Option<PromptState> {
        self.entries.borrow().get(id.0 as usize).map(|entry| entry.state)
    }

    /// Name given at [`add`](Self::add).
    pub fn name(&self, id: PromptId) -> Option<String> {
        self.entries.borrow().get(id.0 as usize).map(|entry| entry.name.clone())
    }

    /// Resolves a pending prompt. Returns false if it was not pending.
    pub fn resolve(&self, id: PromptId, success: bool) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.get_mut(id.0 as usize) {
            Some(entry) if entry.state == PromptState::Pending => {
                entry.state = if success { PromptState::Succeeded } else { PromptState::Failed };
                true
            }
            _ => false,
        }
    }

    /// Ids of all prompts currently pending.
    pub fn pending(&self) -> Vec<PromptId> {
        self.entries
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.state == PromptState::Pending)
            .map(|(index, _)| PromptId(index as u32))
            .collect()
    }
}

impl PromptService for PromptBoard {
    fn activate(&mut self, id: PromptId) {
        if let Some(entry) = self.entries.borrow_mut().get_mut(id.0 as usize) {
            debug!("Prompt {} activated", entry.name);
            entry.state = PromptState::Pending;
        }
    }

    fn resolve_all(&mut self) {
        for entry in self.entries.borrow_mut().iter_mut() {
            if entry.state == PromptState::Pending {
                debug!("Prompt {} resolved as unsuccessful", entry.name);
                entry.state = PromptState::Failed;
            }
        }
    }
}

//=== Tests ===============================================================
