use std::collections::HashMap;

use bevy::prelude::*;
use scene::{Camera, MaterialLibrary};

use crate::interaction::{FrameInput, OverlayPanel};

/// Camera the pointer ray is cast through. Absent means no camera.
#[derive(Resource, Debug, Clone)]
pub struct ActiveCamera(pub Camera);

/// Pointer sample and nearest hit for the current frame, shared by every target.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerRaycast {
    pub frame: FrameInput,
}

/// UI modes owned elsewhere, mirrored into the debug overlay.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalFlags {
    pub dialogue_open: bool,
    pub results_open: bool,
}

#[derive(Resource, Debug, Default)]
pub struct Materials(pub MaterialLibrary);

/// Latest debug panel per target that shows one.
#[derive(Resource, Debug, Default)]
pub struct DebugOverlays {
    pub panels: HashMap<Entity, OverlayPanel>,
}

impl DebugOverlays {
    pub fn get(&self, entity: Entity) -> Option<&OverlayPanel> {
        self.panels.get(&entity)
    }
}
