//! Scripted pointer playback for the demo binary.
//!
//! Each app update consumes one step: the cursor moves, the primary button
//! is pressed or released, and an optional action is forwarded.

use std::collections::HashMap;

use bevy::input::ButtonInput;
use bevy::prelude::*;
use glam::Vec2;
use pointer_input::{CursorPosition, PointerBindings};
use tracing::info;

use crate::events::InteractionRequest;
use crate::resources::ModalFlags;
use crate::scene_file::{SceneDescription, ScriptAction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEffect {
    Request(InteractionRequest),
    DialogueOpen(bool),
    ResultsOpen(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScriptStep {
    pub pointer: Option<Vec2>,
    pub press: bool,
    pub effect: Option<ScriptEffect>,
}

#[derive(Resource, Debug, Default)]
pub struct PointerScript {
    steps: Vec<ScriptStep>,
    next: usize,
}

impl PointerScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps, next: 0 }
    }

    /// Expands repeated frames and resolves object names against `spawned`.
    pub fn resolve(
        scene: &SceneDescription,
        spawned: &HashMap<String, Entity>,
    ) -> anyhow::Result<Self> {
        let lookup = |name: &str| {
            spawned
                .get(name)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("object {name:?} was not spawned"))
        };

        let mut steps = Vec::new();
        for frame in &scene.script {
            let pointer = match (&frame.point_at, frame.pointer) {
                (Some(name), _) => Some(scene.screen_point_of(name).ok_or_else(|| {
                    anyhow::anyhow!("cannot point at {name:?}: no camera or no shape")
                })?),
                (None, Some([x, y])) => Some(Vec2::new(x, y)),
                (None, None) => None,
            };
            let effect = match &frame.action {
                None => None,
                Some(action) => Some(match action {
                    ScriptAction::TriggerClick { target } => {
                        ScriptEffect::Request(InteractionRequest::TriggerClick {
                            entity: lookup(target)?,
                        })
                    }
                    ScriptAction::SetClickable { target, clickable } => {
                        ScriptEffect::Request(InteractionRequest::SetClickable {
                            entity: lookup(target)?,
                            clickable: *clickable,
                        })
                    }
                    ScriptAction::SetAllClickable { active } => {
                        ScriptEffect::Request(InteractionRequest::SetAllClickable { active: *active })
                    }
                    ScriptAction::SetBlocked { target, blocked } => {
                        ScriptEffect::Request(InteractionRequest::SetBlocked {
                            entity: lookup(target)?,
                            blocked: *blocked,
                        })
                    }
                    ScriptAction::SetEnabled { target, enabled } => {
                        ScriptEffect::Request(InteractionRequest::SetEnabled {
                            entity: lookup(target)?,
                            enabled: *enabled,
                        })
                    }
                    ScriptAction::SetHighlighted { target, on } => {
                        ScriptEffect::Request(InteractionRequest::SetHighlighted {
                            entity: lookup(target)?,
                            on: *on,
                        })
                    }
                    ScriptAction::DialogueOpen { open } => ScriptEffect::DialogueOpen(*open),
                    ScriptAction::ResultsOpen { open } => ScriptEffect::ResultsOpen(*open),
                }),
            };

            // Press and action happen on the first repetition only.
            steps.push(ScriptStep {
                pointer,
                press: frame.press,
                effect,
            });
            for _ in 1..frame.frames {
                steps.push(ScriptStep {
                    pointer,
                    ..Default::default()
                });
            }
        }
        Ok(Self::new(steps))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    fn advance(&mut self) -> Option<ScriptStep> {
        let step = self.steps.get(self.next).copied();
        if step.is_some() {
            self.next += 1;
        }
        step
    }
}

pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerScript>()
            .add_systems(PreUpdate, play_pointer_script);
    }
}

fn play_pointer_script(
    mut script: ResMut<PointerScript>,
    bindings: Res<PointerBindings>,
    mut cursor: ResMut<CursorPosition>,
    mut buttons: ResMut<ButtonInput<MouseButton>>,
    mut flags: ResMut<ModalFlags>,
    mut requests: MessageWriter<InteractionRequest>,
) {
    // Last frame's press becomes a hold, then a release.
    buttons.release(bindings.primary);
    buttons.clear();

    let Some(step) = script.advance() else {
        return;
    };

    if let Some(position) = step.pointer {
        cursor.x = position.x;
        cursor.y = position.y;
    }
    if step.press {
        buttons.press(bindings.primary);
    }
    match step.effect {
        Some(ScriptEffect::Request(request)) => {
            info!(?request, "script request");
            requests.write(request);
        }
        Some(ScriptEffect::DialogueOpen(open)) => flags.dialogue_open = open,
        Some(ScriptEffect::ResultsOpen(open)) => flags.results_open = open,
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_expands_frames() {
        let scene = SceneDescription::parse(
            r#"
            [camera]
            name = "Main Camera"
            width = 800
            height = 600
            position = [0.0, 0.0, 10.0]

            [[objects]]
            name = "Chest"
            shape = { sphere = { center = [0.0, 0.0, 0.0], radius = 1.0 } }
            interactive = true

            [[script]]
            point_at = "Chest"
            press = true
            frames = 3
            action = { kind = "trigger_click", target = "Chest" }

            [[script]]
            pointer = [5.0, 5.0]
            "#,
        )
        .unwrap();
        let chest = World::new().spawn_empty().id();
        let spawned = HashMap::from([("Chest".to_string(), chest)]);

        let mut script = PointerScript::resolve(&scene, &spawned).unwrap();
        assert_eq!(script.len(), 4);

        let first = script.advance().unwrap();
        assert!(first.press);
        assert_eq!(
            first.effect,
            Some(ScriptEffect::Request(InteractionRequest::TriggerClick { entity: chest }))
        );
        let held = script.advance().unwrap();
        assert!(!held.press);
        assert!(held.effect.is_none());
        assert_eq!(held.pointer, first.pointer);

        script.advance();
        assert_eq!(script.advance().unwrap().pointer, Some(Vec2::new(5.0, 5.0)));
        assert!(script.is_finished());
    }
}
