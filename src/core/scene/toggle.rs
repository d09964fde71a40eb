//=========================================================================
// Component Toggles
//=========================================================================
//
// Abstract enable/visible capability for engine components attached to
// a scene node (renderers, colliders, lights, canvases).
//
// The stage never depends on concrete engine types. Embedders wrap their
// own components behind `Toggle`; `Switch` is the in-memory version used
// by headless stages and tests.
//
//=========================================================================

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

//=== Toggle Trait ========================================================

/// A component that can be switched on or off.
pub trait Toggle: Debug {
    /// Requests the component to become enabled (visible) or disabled.
    ///
    /// Best effort: an engine component that is already gone may ignore it.
    fn set_enabled(&mut self, enabled: bool);

    /// Current enabled state as last observed.
    fn is_enabled(&self) -> bool;
}

//=== ComponentKind =======================================================

/// The component slots a scene node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Renderer,
    Collider,
    Light,
    Canvas,
}

//=== Switch ==============================================================

/// Plain in-memory toggle.
///
/// The state lives behind a shared cell so callers can keep a [`SwitchProbe`]
/// to observe it after the switch has been handed to the scene graph.
#[derive(Debug, Clone, Default)]
pub struct Switch {
    state: Rc<Cell<bool>>,
}

impl Switch {
    /// New switch in the given state.
    pub fn new(enabled: bool) -> Self {
        Self { state: Rc::new(Cell::new(enabled)) }
    }

    /// Returns a read-only view onto this switch's state.
    pub fn probe(&self) -> SwitchProbe {
        SwitchProbe { state: Rc::clone(&self.state) }
    }
}

impl Toggle for Switch {
    fn set_enabled(&mut self, enabled: bool) {
        self.state.set(enabled);
    }

    fn is_enabled(&self) -> bool {
        self.state.get()
    }
}

/// Observer half of a [`Switch`].
#[derive(Debug, Clone)]
pub struct SwitchProbe {
    state: Rc<Cell<bool>>,
}

impl SwitchProbe {
    /// Current state of the observed switch.
    pub fn is_enabled(&self) -> bool {
        self.state.get()
    }
}

//=== Tests ===============================================================
