//=========================================================================
// Scene System
//=========================================================================
//
// Engine-agnostic view of the scene graph the stage operates on.
//
// Architecture:
//   SceneGraph
//     └─ SceneNode (tag, transform, component toggles, task, target flag)
//
// Levels walk subtrees of this graph to propagate visibility; the level
// manager looks up the player and spawn point by tag.
//
//=========================================================================

//=== Module Declarations =================================================

mod graph;
mod toggle;

//=== Public API ==========================================================

pub use graph::{NodeId, SceneGraph, SceneNode, Transform};
pub use toggle::{ComponentKind, Switch, SwitchProbe, Toggle};
