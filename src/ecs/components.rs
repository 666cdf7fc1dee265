use bevy::prelude::*;
use scene::{MaterialId, Shape};

use crate::interaction::SurfaceAccess;

/// World-space volume the pointer ray is tested against.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: Shape,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }
}

/// Visible surface with the material it is currently drawn with.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderable {
    pub material: Option<MaterialId>,
}

impl Renderable {
    pub fn new(material: MaterialId) -> Self {
        Self {
            material: Some(material),
        }
    }

    /// A surface with no material bound yet.
    pub fn bare() -> Self {
        Self::default()
    }
}

impl<'w, 's, 'a> SurfaceAccess for Query<'w, 's, &'a mut Renderable> {
    fn material(&self, entity: Entity) -> Option<MaterialId> {
        self.get(entity).ok().and_then(|surface| surface.material)
    }

    fn set_material(&mut self, entity: Entity, material: MaterialId) {
        if let Ok(mut surface) = self.get_mut(entity) {
            surface.material = Some(material);
        }
    }
}
