slotmap::new_key_type! {
    /// Unique identifier for a wall type in the document.
    pub struct WallTypeId;
}

/// Family of construction a wall type belongs to.
///
/// Only `Basic` types carry an editable layer structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    Basic,
    Curtain,
    Stacked,
}

/// Role a layer plays within a wall assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFunction {
    Structure,
    Substrate,
    Insulation,
    Finish,
    Membrane,
}

/// One layer of a wall type's compound structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallLayer {
    /// What the layer does in the assembly.
    pub function: LayerFunction,
    /// Layer width in feet.
    pub width: f64,
}

impl WallLayer {
    /// Creates a new layer.
    #[must_use]
    pub fn new(function: LayerFunction, width: f64) -> Self {
        Self { function, width }
    }
}

/// Data associated with a wall type.
#[derive(Debug, Clone)]
pub struct WallTypeData {
    /// Type name, unique within the document.
    pub name: String,
    /// Construction family.
    pub kind: WallKind,
    /// Compound structure, outermost layer first.
    pub layers: Vec<WallLayer>,
}

impl WallTypeData {
    /// Creates a new wall type.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: WallKind, layers: Vec<WallLayer>) -> Self {
        Self {
            name: name.into(),
            kind,
            layers,
        }
    }

    /// Total assembly width in feet.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.layers.iter().map(|layer| layer.width).sum()
    }
}
