//=========================================================================
// Scene Graph
//=========================================================================
//
// Arena-backed tree of scene nodes.
//
// Architecture:
//   SceneGraph
//     └─ nodes: Vec<SceneNode>   (indexed by NodeId)
//          ├─ parent / children
//          ├─ tag, transform
//          ├─ renderer / collider / light / canvas : Option<Box<dyn Toggle>>
//          └─ interaction_target, task
//
// Nodes are never removed; a stage's graph lives as long as the stage.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};

//=== Internal Dependencies ===============================================

use super::toggle::{ComponentKind, Toggle};
use crate::core::error::SceneError;
use crate::core::interaction::TaskHandle;

//=== NodeId ==============================================================

/// Index of a node inside its [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

//=== Transform ===========================================================

/// World-space placement of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    /// Placement at `position` facing `rotation`.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Placement at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self { position, rotation: Quat::IDENTITY }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Quat::IDENTITY }
    }
}

//=== SceneNode ===========================================================

/// A single object in the scene.
#[derive(Debug, Default)]
pub struct SceneNode {
    pub name: String,
    pub tag: Option<String>,
    pub transform: Transform,

    pub renderer: Option<Box<dyn Toggle>>,
    pub collider: Option<Box<dyn Toggle>>,
    pub light: Option<Box<dyn Toggle>>,
    pub canvas: Option<Box<dyn Toggle>>,

    /// Node exposes an interaction target and must not be shown by
    /// level-wide visibility changes.
    pub interaction_target: bool,

    /// Owning gameplay task, if this node carries one.
    pub task: Option<TaskHandle>,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Untagged node at the origin with no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Sets the tag used by [`SceneGraph::find_unique_by_tag`].
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the world-space placement.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Fills one component slot, replacing what was there.
    pub fn with_component(mut self, kind: ComponentKind, toggle: impl Toggle + 'static) -> Self {
        *self.slot_mut(kind) = Some(Box::new(toggle));
        self
    }

    /// Marks the node as an interaction target.
    pub fn with_interaction_target(mut self) -> Self {
        self.interaction_target = true;
        self
    }

    /// Attaches the owning gameplay task.
    pub fn with_task(mut self, task: TaskHandle) -> Self {
        self.task = Some(task);
        self
    }

    /// `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node's own task asks to stay hidden until activated.
    pub fn hides_until_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| task.hide_until_active())
    }

    /// Component in `kind`'s slot, if present.
    pub fn component(&self, kind: ComponentKind) -> Option<&dyn Toggle> {
        match kind {
            ComponentKind::Renderer => self.renderer.as_deref(),
            ComponentKind::Collider => self.collider.as_deref(),
            ComponentKind::Light => self.light.as_deref(),
            ComponentKind::Canvas => self.canvas.as_deref(),
        }
    }

    /// Sets a component's state if the node has one; missing slots are ignored.
    pub fn set_component(&mut self, kind: ComponentKind, enabled: bool) {
        if let Some(toggle) = self.slot_mut(kind) {
            toggle.set_enabled(enabled);
        }
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> &mut Option<Box<dyn Toggle>> {
        match kind {
            ComponentKind::Renderer => &mut self.renderer,
            ComponentKind::Collider => &mut self.collider,
            ComponentKind::Light => &mut self.light,
            ComponentKind::Canvas => &mut self.canvas,
        }
    }
}

//=== SceneGraph ==========================================================

/// Owns every node of a stage.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    //--- Construction -----------------------------------------------------

    /// Adds a root node (no parent).
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::UnknownNode(parent));
        }

        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    //--- Access -----------------------------------------------------------

    /// Returns the node, or `None` for an id from another graph.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes, roots and children alike.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    //--- Lookup -----------------------------------------------------------

    /// Finds the single node carrying `tag`.
    ///
    /// Zero or several matches are both errors.
    pub fn find_unique_by_tag(&self, tag: &str) -> Result<NodeId, SceneError> {
        let mut matches = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.tag.as_deref() == Some(tag))
            .map(|(index, _)| NodeId(index));

        match (matches.next(), matches.count()) {
            (None, _) => Err(SceneError::TagNotFound(tag.to_string())),
            (Some(id), 0) => Ok(id),
            (Some(_), rest) => Err(SceneError::TagNotUnique {
                tag: tag.to_string(),
                count: rest + 1,
            }),
        }
    }
}

//=== Tests ===============================================================
