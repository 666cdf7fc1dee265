use bevy::prelude::Entity;
use scene::MaterialId;

/// Read/write access to the live material of renderable surfaces.
pub trait SurfaceAccess {
    /// `None` when the entity has no renderable surface or no material bound.
    fn material(&self, entity: Entity) -> Option<MaterialId>;
    fn set_material(&mut self, entity: Entity, material: MaterialId);
}

/// Swaps a target's material between its original and a highlight material.
///
/// The original is captured once, on first activation, and children receive
/// the same swap as the owner (direct children only).
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    material: Option<MaterialId>,
    original: Option<MaterialId>,
    captured: bool,
    apply_to_children: bool,
    active: bool,
}

impl Highlighter {
    pub fn new(material: Option<MaterialId>, apply_to_children: bool) -> Self {
        Self {
            material,
            apply_to_children,
            ..Default::default()
        }
    }

    pub fn material(&self) -> Option<MaterialId> {
        self.material
    }

    pub fn set_material(&mut self, material: Option<MaterialId>) {
        self.material = material;
    }

    pub fn original(&self) -> Option<MaterialId> {
        self.original
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remembers the owner's current material. Later calls are ignored.
    pub fn capture(&mut self, owner: Entity, surfaces: &impl SurfaceAccess) {
        if self.captured {
            return;
        }
        self.original = surfaces.material(owner);
        self.captured = true;
    }

    /// Returns false, leaving state untouched, when there is nothing to swap.
    pub fn set(
        &mut self,
        on: bool,
        owner: Entity,
        children: &[Entity],
        surfaces: &mut impl SurfaceAccess,
    ) -> bool {
        if surfaces.material(owner).is_none() {
            return false;
        }
        let (Some(original), Some(highlight)) = (self.original, self.material) else {
            return false;
        };

        let next = if on { highlight } else { original };
        self.apply(next, owner, children, surfaces);
        self.active = on;
        true
    }

    /// Puts the original back regardless of the current highlight state.
    pub fn restore(&mut self, owner: Entity, children: &[Entity], surfaces: &mut impl SurfaceAccess) {
        if let Some(original) = self.original {
            if surfaces.material(owner).is_some() {
                self.apply(original, owner, children, surfaces);
            }
        }
        self.active = false;
    }

    fn apply(
        &self,
        material: MaterialId,
        owner: Entity,
        children: &[Entity],
        surfaces: &mut impl SurfaceAccess,
    ) {
        surfaces.set_material(owner, material);
        if !self.apply_to_children {
            return;
        }
        for &child in children {
            if surfaces.material(child).is_some() {
                surfaces.set_material(child, material);
            }
        }
    }
}
