use std::fmt;
use std::sync::Arc;

use bevy::prelude::Entity;

/// Listener invoked with the entity that fired the notification.
pub type Notification = Arc<dyn Fn(Entity) + Send + Sync>;

/// Ordered listeners. Empty slots are kept so indices stay stable for
/// whoever authored the list, and are skipped on invoke.
#[derive(Clone, Default)]
pub struct NotificationList {
    entries: Vec<Option<Notification>>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.entries.push(Some(Arc::new(listener)));
        self
    }

    pub fn push_empty(&mut self) -> &mut Self {
        self.entries.push(None);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Calls every listener in registration order and returns how many ran.
    pub fn invoke(&self, source: Entity) -> usize {
        // Iterate a snapshot so listeners may not disturb the walk.
        let snapshot: Vec<Notification> = self.entries.iter().flatten().cloned().collect();
        for listener in &snapshot {
            listener(source);
        }
        snapshot.len()
    }
}

impl fmt::Debug for NotificationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationList")
            .field("len", &self.entries.len())
            .field("empty_slots", &self.entries.iter().filter(|e| e.is_none()).count())
            .finish()
    }
}

#[derive(Clone, Default, Debug)]
pub struct Notifications {
    pub click: NotificationList,
    pub enter: NotificationList,
    pub exit: NotificationList,
}
