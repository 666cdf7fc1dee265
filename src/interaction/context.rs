use std::collections::HashSet;

use bevy::prelude::*;

/// Shared interaction state: the set of enabled targets and the single
/// hover slot.
#[derive(Resource, Debug, Default)]
pub struct InteractionContext {
    hover_owner: Option<Entity>,
    registry: HashSet<Entity>,
}

impl InteractionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the entity was already registered.
    pub fn register(&mut self, entity: Entity) -> bool {
        self.registry.insert(entity)
    }

    /// Leaves the hover slot untouched; a disabled owner keeps it until a
    /// later exit or [`InteractionContext::forget`].
    pub fn unregister(&mut self, entity: Entity) -> bool {
        self.registry.remove(&entity)
    }

    /// Drops every trace of a despawned entity, including the hover slot.
    pub fn forget(&mut self, entity: Entity) {
        self.registry.remove(&entity);
        if self.hover_owner == Some(entity) {
            self.hover_owner = None;
        }
    }

    pub fn is_registered(&self, entity: Entity) -> bool {
        self.registry.contains(&entity)
    }

    pub fn members(&self) -> impl Iterator<Item = Entity> + '_ {
        self.registry.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn hover_owner(&self) -> Option<Entity> {
        self.hover_owner
    }

    pub fn is_any_hovered(&self) -> bool {
        self.hover_owner.is_some()
    }

    pub(crate) fn claim_hover(&mut self, entity: Entity) {
        self.hover_owner = Some(entity);
    }

    pub(crate) fn clear_hover(&mut self) {
        self.hover_owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_never_duplicates() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut ctx = InteractionContext::new();

        assert!(ctx.register(a));
        assert!(!ctx.register(a));
        assert_eq!(ctx.len(), 1);
        assert!(ctx.unregister(a));
        assert!(!ctx.unregister(a));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_unregister_keeps_hover_but_forget_clears_it() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut ctx = InteractionContext::new();
        ctx.register(a);
        ctx.claim_hover(a);

        ctx.unregister(a);
        assert_eq!(ctx.hover_owner(), Some(a));

        ctx.forget(a);
        assert!(!ctx.is_any_hovered());
    }
}
