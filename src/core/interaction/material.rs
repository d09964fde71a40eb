//=========================================================================
// Materials
//=========================================================================
//
// Opaque material handles and the named-resource lookup used to fill in
// defaults for interactables that were not configured explicitly.
//
//=========================================================================

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

//=== Constants ===========================================================

/// Resource loaded for `highlight` when none is configured.
pub const DEFAULT_HIGHLIGHT: &str = "YellowHue";

/// Resource loaded for `hover` when none is configured.
pub const DEFAULT_HOVER: &str = "GreenHue";

//=== Material ============================================================

/// Handle to an engine material. Cheap to clone.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Material(Rc<str>);

impl Material {
    /// Handle for the resource called `name`.
    pub fn named(name: &str) -> Self {
        Material(Rc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.0)
    }
}

//=== MaterialLibrary =====================================================

/// Named-resource lookup for materials.
pub trait MaterialLibrary {
    /// Returns `None` when no resource of that name exists.
    fn load(&self, name: &str) -> Option<Material>;
}

/// Library backed by a fixed set of names.
#[derive(Debug, Default)]
pub struct StaticMaterialLibrary {
    materials: HashMap<String, Material>,
}

impl StaticMaterialLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library that knows the two default hues.
    pub fn with_defaults() -> Self {
        Self::new().with(DEFAULT_HIGHLIGHT).with(DEFAULT_HOVER)
    }

    /// Adds a known resource name.
    pub fn with(mut self, name: &str) -> Self {
        self.materials.insert(name.to_string(), Material::named(name));
        self
    }
}

impl MaterialLibrary for StaticMaterialLibrary {
    fn load(&self, name: &str) -> Option<Material> {
        self.materials.get(name).cloned()
    }
}

//=== InteractableConfig ==================================================

/// Material setup for one interactable. Unset slots are filled from the
/// library on start (highlight and hover only).
#[derive(Debug, Clone, Default)]
pub struct InteractableConfig {
    pub highlight: Option<Material>,
    pub hover: Option<Material>,
    pub grab: Option<Material>,
}

impl InteractableConfig {
    /// All slots unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Material while idle and highlighted.
    pub fn with_highlight(mut self, material: Material) -> Self {
        self.highlight = Some(material);
        self
    }

    /// Material while a hand hovers.
    pub fn with_hover(mut self, material: Material) -> Self {
        self.hover = Some(material);
        self
    }

    /// Material while held. No default.
    pub fn with_grab(mut self, material: Material) -> Self {
        self.grab = Some(material);
        self
    }

    /// Loads the default highlight and hover materials for unset slots.
    pub(crate) fn fill_defaults(&mut self, library: &dyn MaterialLibrary) {
        if self.highlight.is_none() {
            self.highlight = library.load(DEFAULT_HIGHLIGHT);
        }
        if self.hover.is_none() {
            self.hover = library.load(DEFAULT_HOVER);
        }
    }
}

//=== Tests ===============================================================
