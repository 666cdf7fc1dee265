use bevy::prelude::{Entity, Message};
use glam::Vec3;

// === Outbound ===

/// Written on every frame a target is hovered, not only on entry.
#[derive(Debug, Clone, Copy, PartialEq, Message)]
pub struct TargetHoverEvent {
    pub entity: Entity,
}

/// Written once when the hover owner loses the pointer to empty space.
#[derive(Debug, Clone, Copy, PartialEq, Message)]
pub struct TargetExitEvent {
    pub entity: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Message)]
pub struct TargetClickEvent {
    pub entity: Entity,
    /// World-space hit point; `None` for scripted clicks.
    pub point: Option<Vec3>,
    pub scripted: bool,
}

// === Inbound ===

#[derive(Debug, Clone, Copy, PartialEq, Message)]
pub enum InteractionRequest {
    SetClickable { entity: Entity, clickable: bool },
    SetHighlighted { entity: Entity, on: bool },
    TriggerClick { entity: Entity },
    /// Applies to every registered target.
    SetAllClickable { active: bool },
    SetBlocked { entity: Entity, blocked: bool },
    /// Detaches or re-attaches a target without removing the component.
    SetEnabled { entity: Entity, enabled: bool },
}
