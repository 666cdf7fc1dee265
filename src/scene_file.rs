//! Scene description files
//!
//! A scene file lists the camera, the objects to spawn and an optional
//! pointer script for the demo binary:
//!
//! ```toml
//! [camera]
//! name = "Main Camera"
//! width = 800
//! height = 600
//! position = [0.0, 0.0, 10.0]
//!
//! [[objects]]
//! name = "Chest"
//! material = "wood"
//! shape = { sphere = { center = [0.0, 0.0, 0.0], radius = 1.0 } }
//! target = { enable_highlight = true, highlight_material = "glow" }
//!
//! [[script]]
//! point_at = "Chest"
//! press = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use bevy::prelude::*;
use glam::{Vec2, Vec3};
use scene::{Camera, Shape};
use serde::Deserialize;
use target_types::TargetConfig;
use tracing::info;

use crate::ecs::animation::AnimatorParams;
use crate::ecs::components::{Collider, Renderable};
use crate::interaction::InteractiveTarget;
use crate::resources::{ActiveCamera, Materials, ModalFlags};

#[derive(Deserialize, Debug, Clone)]
pub struct SceneDescription {
    pub camera: Option<CameraDef>,
    #[serde(default)]
    pub flags: FlagsDef,
    #[serde(default)]
    pub playback: PlaybackDef,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub script: Vec<ScriptFrame>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraDef {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
    #[serde(default = "default_fov")]
    pub fov_y_degrees: f32,
}

fn default_fov() -> f32 {
    60.0
}

impl CameraDef {
    pub fn to_camera(&self) -> Camera {
        let mut camera = Camera::new(self.name.clone(), self.width, self.height)
            .looking_at(Vec3::from(self.position), Vec3::from(self.target));
        camera.fov_y = self.fov_y_degrees.to_radians();
        camera
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct FlagsDef {
    pub dialogue_open: bool,
    pub results_open: bool,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct PlaybackDef {
    pub frame_secs: f32,
}

impl Default for PlaybackDef {
    fn default() -> Self {
        Self { frame_secs: 0.1 }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ObjectDef {
    pub name: String,
    pub shape: Option<ShapeDef>,
    pub material: Option<String>,
    /// Makes the object a target using the settings' default config.
    #[serde(default)]
    pub interactive: bool,
    /// Own config; implies `interactive`.
    pub target: Option<TargetConfig>,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub children: Vec<ObjectDef>,
}

impl ObjectDef {
    fn walk<'a>(&'a self, out: &mut Vec<&'a ObjectDef>) {
        out.push(self);
        for child in &self.children {
            child.walk(out);
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ShapeDef {
    Sphere { center: [f32; 3], radius: f32 },
    Cuboid { center: [f32; 3], half_extents: [f32; 3] },
}

impl ShapeDef {
    pub fn to_shape(self) -> Shape {
        match self {
            ShapeDef::Sphere { center, radius } => Shape::sphere(Vec3::from(center), radius),
            ShapeDef::Cuboid {
                center,
                half_extents,
            } => Shape::cuboid(Vec3::from(center), Vec3::from(half_extents)),
        }
    }
}

/// One step of the pointer script. `frames` repeats it.
#[derive(Deserialize, Debug, Clone)]
pub struct ScriptFrame {
    #[serde(default = "one")]
    pub frames: u32,
    /// Pixel position, top-left origin.
    pub pointer: Option<[f32; 2]>,
    /// Object whose shape center the pointer moves to.
    pub point_at: Option<String>,
    #[serde(default)]
    pub press: bool,
    pub action: Option<ScriptAction>,
}

fn one() -> u32 {
    1
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptAction {
    TriggerClick { target: String },
    SetClickable { target: String, clickable: bool },
    SetAllClickable { active: bool },
    SetBlocked { target: String, blocked: bool },
    SetEnabled { target: String, enabled: bool },
    SetHighlighted { target: String, on: bool },
    DialogueOpen { open: bool },
    ResultsOpen { open: bool },
}

impl ScriptAction {
    pub fn target_name(&self) -> Option<&str> {
        match self {
            ScriptAction::TriggerClick { target }
            | ScriptAction::SetClickable { target, .. }
            | ScriptAction::SetBlocked { target, .. }
            | ScriptAction::SetEnabled { target, .. }
            | ScriptAction::SetHighlighted { target, .. } => Some(target),
            ScriptAction::SetAllClickable { .. }
            | ScriptAction::DialogueOpen { .. }
            | ScriptAction::ResultsOpen { .. } => None,
        }
    }
}

impl SceneDescription {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let scene = Self::parse(&content).with_context(|| format!("loading {}", path.display()))?;
        info!(
            "Loaded scene {:?}: {} objects, {} script steps",
            path,
            scene.objects.len(),
            scene.script.len()
        );
        Ok(scene)
    }

    /// Parses and checks that every name the script refers to exists.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let scene: SceneDescription = toml::from_str(content).context("parsing scene")?;
        let known = scene.object_names();

        for (index, frame) in scene.script.iter().enumerate() {
            let referenced = frame
                .point_at
                .as_deref()
                .into_iter()
                .chain(frame.action.as_ref().and_then(ScriptAction::target_name));
            for name in referenced {
                if !known.contains(&name) {
                    bail!("script step {index} refers to unknown object {name:?}");
                }
            }
        }
        let frame_secs = scene.playback.frame_secs;
        if !(frame_secs.is_finite() && frame_secs > 0.0) {
            bail!("playback.frame_secs must be a positive number, got {frame_secs}");
        }
        Ok(scene)
    }

    pub fn objects(&self) -> Vec<&ObjectDef> {
        let mut out = Vec::new();
        for object in &self.objects {
            object.walk(&mut out);
        }
        out
    }

    fn object_names(&self) -> Vec<&str> {
        self.objects().into_iter().map(|o| o.name.as_str()).collect()
    }

    /// Spawns camera, flags and objects. Returns the entity of every object
    /// by name; later duplicates shadow earlier ones.
    pub fn spawn_into(
        &self,
        world: &mut World,
        defaults: &TargetConfig,
    ) -> HashMap<String, Entity> {
        if let Some(camera) = &self.camera {
            world.insert_resource(ActiveCamera(camera.to_camera()));
        }
        world.insert_resource(ModalFlags {
            dialogue_open: self.flags.dialogue_open,
            results_open: self.flags.results_open,
        });
        world.init_resource::<Materials>();

        let mut spawned = HashMap::new();
        for object in &self.objects {
            spawn_object(world, object, None, defaults, &mut spawned);
        }
        spawned
    }

    /// Screen position of an object's shape center through the scene camera.
    pub fn screen_point_of(&self, name: &str) -> Option<Vec2> {
        let camera = self.camera.as_ref()?.to_camera();
        let object = self.objects().into_iter().find(|o| o.name == name)?;
        let shape = object.shape?.to_shape();
        Some(camera.world_to_screen(shape.center()))
    }
}

fn spawn_object(
    world: &mut World,
    object: &ObjectDef,
    parent: Option<Entity>,
    defaults: &TargetConfig,
    spawned: &mut HashMap<String, Entity>,
) {
    let material = object
        .material
        .as_deref()
        .map(|name| world.resource_mut::<Materials>().0.intern(name));
    if let Some(config) = object.target.as_ref().or(defaults_if(object.interactive, defaults)) {
        if let Some(name) = &config.highlight_material {
            world.resource_mut::<Materials>().0.intern(name);
        }
    }

    let mut entity = world.spawn((
        Name::new(object.name.clone()),
        Renderable { material },
    ));
    if let Some(shape) = object.shape {
        entity.insert(Collider::new(shape.to_shape()));
    }
    if let Some(parent) = parent {
        entity.insert(ChildOf(parent));
    }
    if let Some(config) = object.target.as_ref().or(defaults_if(object.interactive, defaults)) {
        entity.insert(InteractiveTarget::new(config.clone()));
    }
    if object.animated {
        entity.insert(AnimatorParams::new());
    }
    let id = entity.id();
    spawned.insert(object.name.clone(), id);

    for child in &object.children {
        spawn_object(world, child, Some(id), defaults, spawned);
    }
}

fn defaults_if(interactive: bool, defaults: &TargetConfig) -> Option<&TargetConfig> {
    interactive.then_some(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
        [camera]
        name = "Main Camera"
        width = 800
        height = 600
        position = [0.0, 0.0, 10.0]

        [[objects]]
        name = "Chest"
        material = "wood"
        shape = { sphere = { center = [0.0, 0.0, 0.0], radius = 1.0 } }
        target = { enable_highlight = true, highlight_material = "glow", apply_to_children = true }

        [[objects.children]]
        name = "Lid"
        material = "brass"

        [[objects]]
        name = "Wall"
        shape = { cuboid = { center = [0.0, 0.0, -5.0], half_extents = [10.0, 10.0, 0.5] } }

        [[script]]
        point_at = "Chest"
        frames = 3

        [[script]]
        press = true
        action = { kind = "set_all_clickable", active = false }
    "#;

    #[test]
    fn test_parse_nested_objects() {
        let scene = SceneDescription::parse(SCENE).unwrap();
        let names: Vec<_> = scene.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Chest", "Lid", "Wall"]);
        assert_eq!(scene.script[0].frames, 3);
        assert_eq!(scene.script[1].frames, 1);
        assert_eq!(
            scene.script[1].action,
            Some(ScriptAction::SetAllClickable { active: false })
        );
        assert_eq!(scene.playback.frame_secs, 0.1);
    }

    #[test]
    fn test_unknown_script_target_is_rejected() {
        let bad = r#"
            [[script]]
            action = { kind = "trigger_click", target = "Ghost" }
        "#;
        let err = SceneDescription::parse(bad).unwrap_err();
        assert!(format!("{err:#}").contains("Ghost"));
    }

    #[test]
    fn test_frame_secs_must_be_positive_and_finite() {
        for value in ["0.0", "-0.5", "nan", "inf"] {
            let content = format!("[playback]\nframe_secs = {value}\n");
            let err = SceneDescription::parse(&content).unwrap_err();
            assert!(format!("{err:#}").contains("frame_secs"), "{value}");
        }
        assert!(SceneDescription::parse("[playback]\nframe_secs = 0.05\n").is_ok());
    }

    #[test]
    fn test_screen_point_of_center_object() {
        let scene = SceneDescription::parse(SCENE).unwrap();
        let point = scene.screen_point_of("Chest").unwrap();
        assert!((point - Vec2::new(400.0, 300.0)).length() < 1e-3);
        assert!(scene.screen_point_of("Lid").is_none());
    }

    #[test]
    fn test_spawn_into_world() {
        let scene = SceneDescription::parse(SCENE).unwrap();
        let mut world = World::new();
        let spawned = scene.spawn_into(&mut world, &TargetConfig::default());

        let chest = spawned["Chest"];
        let lid = spawned["Lid"];
        assert!(world.get::<InteractiveTarget>(chest).is_some());
        assert!(world.get::<Collider>(chest).is_some());
        assert!(world.get::<InteractiveTarget>(spawned["Wall"]).is_none());
        assert_eq!(world.get::<ChildOf>(lid).map(|c| c.parent()), Some(chest));

        let materials = &world.resource::<Materials>().0;
        assert!(materials.get("glow").is_some());
        assert_eq!(
            world.get::<Renderable>(lid).and_then(|r| r.material),
            materials.get("brass")
        );
        assert_eq!(world.resource::<ActiveCamera>().0.name, "Main Camera");
    }
}
