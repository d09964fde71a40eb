//=========================================================================
// Level
//=========================================================================
//
// A scene subtree with a visibility lifecycle and an entry prompt.
//
// Visibility is pushed down the subtree depth-first. Nodes that expose an
// interaction target, or whose task hides until active, are
// "keep-disabled": their renderer and collider end up off after the walk,
// and the flag is handed down to every descendant by value. Canvases and
// lights always follow the requested visibility.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::PromptId;
use crate::core::scene::{ComponentKind, NodeId, SceneGraph};

//=== LevelId =============================================================

/// Handle to a level registered with a [`LevelManager`](super::LevelManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(pub(crate) usize);

//=== LevelConfig =========================================================

/// Authoring data for one level.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    pub name: String,
    /// First prompt started on activation. A level without one is terminal.
    pub entry_prompt: Option<PromptId>,
    /// Activates on stage start.
    pub is_first_level: bool,
}

impl LevelConfig {
    /// Config for a non-first level without an entry prompt.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entry_prompt: None, is_first_level: false }
    }

    /// Sets the prompt started when the level activates.
    pub fn with_entry_prompt(mut self, prompt: PromptId) -> Self {
        self.entry_prompt = Some(prompt);
        self
    }

    /// Marks the level to activate on stage start.
    pub fn first_level(mut self) -> Self {
        self.is_first_level = true;
        self
    }
}

//=== Level ===============================================================

/// A level: a scene subtree shown and hidden as one unit.
#[derive(Debug)]
pub struct Level {
    config: LevelConfig,
    root: NodeId,
    is_active: bool,
}

impl Level {
    /// Creates an inactive level over the subtree at `root`.
    pub fn new(config: LevelConfig, root: NodeId) -> Self {
        Self { config, root, is_active: false }
    }

    /// Display name, also the subject of lifecycle events.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Root of the level's subtree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// `None` marks the terminal level.
    pub fn entry_prompt(&self) -> Option<PromptId> {
        self.config.entry_prompt
    }

    /// Whether the level activates on stage start.
    pub fn is_first_level(&self) -> bool {
        self.config.is_first_level
    }

    /// Mirrors the last visibility pushed to the subtree.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Shows or hides the whole subtree and records the result in
    /// [`is_active`](Self::is_active).
    pub fn set_visibility_of_all_children(&mut self, scene: &mut SceneGraph, visible: bool) {
        self.is_active = visible;
        set_visibility_recursively(scene, self.root, visible, false);
    }
}

//=== Visibility Walk =====================================================

fn set_visibility_recursively(scene: &mut SceneGraph, id: NodeId, visible: bool, inherited: bool) {
    let Some(node) = scene.get_mut(id) else {
        return;
    };

    let is_target = node.interaction_target;
    let keep_disabled = inherited || is_target || node.hides_until_active();

    // hiding always applies; showing skips interaction targets under keep-disabled
    if !keep_disabled || !is_target || !visible {
        node.set_component(ComponentKind::Renderer, visible);
        node.set_component(ComponentKind::Collider, visible);
        node.set_component(ComponentKind::Light, visible);
    }

    let children = node.children().to_vec();
    for child in children {
        set_visibility_recursively(scene, child, visible, keep_disabled);
    }

    let Some(node) = scene.get_mut(id) else {
        return;
    };

    if keep_disabled {
        node.set_component(ComponentKind::Renderer, false);
        node.set_component(ComponentKind::Collider, false);
    }

    node.set_component(ComponentKind::Canvas, visible);
    node.set_component(ComponentKind::Light, visible);
}

//=== Tests ===============================================================
