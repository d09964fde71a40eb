//=========================================================================
// Stage Errors
//=========================================================================
//
// Failures that leave the stage unable to proceed.
//
// Gating (inactive owning task) and unset materials are normal flow and
// never surface here. A level without an entry prompt is a terminal
// signal, reported through the exit flag rather than as an error.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::interaction::InteractableId;
use crate::core::level::LevelId;
use crate::core::scene::NodeId;

//=== SceneError ==========================================================

/// Scene graph lookup failures.
///
/// Tag lookups for the player and spawn point are hard dependencies: a
/// stage that cannot find exactly one of each cannot place the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no scene node tagged `{0}`")]
    TagNotFound(String),

    #[error("expected exactly one scene node tagged `{tag}`, found {count}")]
    TagNotUnique { tag: String, count: usize },

    #[error("scene node {0:?} does not exist")]
    UnknownNode(NodeId),
}

//=== StageError ==========================================================

/// Errors returned by stage-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("level {0:?} is not registered")]
    UnknownLevel(LevelId),

    #[error("interactable {0:?} is not registered")]
    UnknownInteractable(InteractableId),
}

//=== Tests ===============================================================
