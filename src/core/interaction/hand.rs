//=========================================================================
// Hands
//=========================================================================
//
// Opaque interaction-side handles passed through hover and grab calls.
//
// A hand is either backed by a tracked device or a placeholder. Placeholder
// hands drive programmatic announcements, forced resolutions and debug
// tooling; they carry no physical state and ignore hint requests.
//
//=========================================================================

use std::fmt;
use std::rc::Rc;

//=== HandDevice ==========================================================

/// Interaction-side services of a tracked hand.
pub trait HandDevice {
    /// Stable label for logs.
    fn label(&self) -> &str;

    /// Shows the "you can grab this" hint. Best effort.
    fn show_grab_hint(&self);
}

//=== Hand ================================================================

/// The hand behind an interaction event.
#[derive(Clone)]
pub enum Hand {
    Device(Rc<dyn HandDevice>),
    Placeholder,
}

impl Hand {
    /// Wraps a tracked device.
    pub fn device(device: Rc<dyn HandDevice>) -> Self {
        Hand::Device(device)
    }

    /// True for hands synthesized by the stage.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Hand::Placeholder)
    }

    /// Requests a grab hint; placeholder hands drop the request.
    pub fn show_grab_hint(&self) {
        if let Hand::Device(device) = self {
            device.show_grab_hint();
        }
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Device(device) => f.debug_tuple("Device").field(&device.label()).finish(),
            Hand::Placeholder => f.write_str("Placeholder"),
        }
    }
}

//=== Tests ===============================================================
