use std::collections::HashMap;

use bevy::prelude::*;
use tracing::debug;

use crate::interaction::AnimationSink;

/// Parameter store read by the animation graph of an entity.
///
/// Bools hold their value until overwritten. Triggers queue up until the
/// graph consumes them; `fired` keeps a running count per trigger name.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParams {
    bools: HashMap<String, bool>,
    pending: Vec<String>,
    fired: HashMap<String, u32>,
}

impl AnimatorParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn is_trigger_pending(&self, name: &str) -> bool {
        self.pending.iter().any(|pending| pending == name)
    }

    pub fn trigger_count(&self, name: &str) -> u32 {
        self.fired.get(name).copied().unwrap_or(0)
    }

    /// Removes one pending pulse of `name`.
    pub fn consume_trigger(&mut self, name: &str) -> bool {
        match self.pending.iter().position(|pending| pending == name) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl AnimationSink for AnimatorParams {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.pending.push(name.to_string());
        *self.fired.entry(name.to_string()).or_default() += 1;
    }
}

/// Plays queued triggers. Stands in for the animation graph: each pulse is
/// consumed the frame it was raised.
pub fn settle_animator_triggers(mut query: Query<(Entity, Option<&Name>, &mut AnimatorParams)>) {
    for (entity, name, mut params) in query.iter_mut() {
        if params.pending.is_empty() {
            continue;
        }
        let played = params.bypass_change_detection().take_pending();
        for trigger in played {
            debug!(?entity, name = name.map(Name::as_str), %trigger, "animation trigger played");
        }
    }
}
