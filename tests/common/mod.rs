#![allow(dead_code)]

use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clickables::ecs::animation::AnimatorParams;
use clickables::ecs::components::{Collider, Renderable};
use clickables::ecs::interaction::any_hovered;
use clickables::ecs::{InteractionPlugin, InteractionSet};
use clickables::events::{InteractionRequest, TargetClickEvent, TargetExitEvent, TargetHoverEvent};
use clickables::settings::Settings;
use clickables::{
    ActiveCamera, CoreEventsPlugin, DebugOverlays, InteractionContext, InteractiveTarget,
    Materials,
};
use glam::{Vec2, Vec3};
use pointer_input::CursorPosition;
use scene::{MaterialId, Shape};
use std::time::Duration;

/// Messages written by the interaction systems, in arrival order.
#[derive(Resource, Default, Debug)]
pub struct Recorded {
    pub hovers: Vec<Entity>,
    pub exits: Vec<Entity>,
    pub clicks: Vec<TargetClickEvent>,
    /// Frames that ended with some target in the hover slot.
    pub hovered_frames: u32,
}

fn count_hovered_frames(mut recorded: ResMut<Recorded>) {
    recorded.hovered_frames += 1;
}

fn record_messages(
    mut hovers: MessageReader<TargetHoverEvent>,
    mut exits: MessageReader<TargetExitEvent>,
    mut clicks: MessageReader<TargetClickEvent>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.hovers.extend(hovers.read().map(|e| e.entity));
    recorded.exits.extend(exits.read().map(|e| e.entity));
    recorded.clicks.extend(clicks.read().copied());
}

/// Headless app with a camera at (0, 0, 10) looking at the origin over an
/// 800x600 viewport. Time only moves through [`TestScene::advance_time`].
pub struct TestScene {
    app: App,
    camera: scene::Camera,
}

impl TestScene {
    pub fn new() -> Self {
        let camera = scene::Camera::new("Main Camera", 800.0, 600.0);

        let mut app = App::new();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        app.add_plugins(MinimalPlugins)
            .add_plugins((CoreEventsPlugin, InteractionPlugin));
        // Virtual time clamps large steps unless told otherwise.
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_max_delta(Duration::from_secs(60));

        app.insert_resource(Settings::default())
            .insert_resource(ActiveCamera(camera.clone()))
            .init_resource::<Recorded>()
            .add_systems(
                Update,
                (
                    record_messages,
                    count_hovered_frames.run_if(any_hovered),
                )
                    .after(InteractionSet::Overlay),
            );

        app.finish();
        app.cleanup();

        Self { app, camera }
    }

    pub fn material(&mut self, name: &str) -> MaterialId {
        self.app.world_mut().resource_mut::<Materials>().0.intern(name)
    }

    /// Spawns an interactive object. It attaches on the next update.
    pub fn spawn_target(
        &mut self,
        name: &str,
        shape: Shape,
        material: &str,
        target: InteractiveTarget,
    ) -> Entity {
        let material = self.material(material);
        self.app
            .world_mut()
            .spawn((
                Name::new(name.to_string()),
                Collider::new(shape),
                Renderable::new(material),
                target,
            ))
            .id()
    }

    pub fn spawn_animated_target(
        &mut self,
        name: &str,
        shape: Shape,
        material: &str,
        target: InteractiveTarget,
    ) -> Entity {
        let entity = self.spawn_target(name, shape, material, target);
        self.app
            .world_mut()
            .entity_mut(entity)
            .insert(AnimatorParams::new());
        entity
    }

    pub fn spawn_target_without_collider(
        &mut self,
        name: &str,
        material: &str,
        target: InteractiveTarget,
    ) -> Entity {
        let material = self.material(material);
        self.app
            .world_mut()
            .spawn((Name::new(name.to_string()), Renderable::new(material), target))
            .id()
    }

    /// Collider with no interactive target, such as a wall.
    pub fn spawn_prop(&mut self, name: &str, shape: Shape) -> Entity {
        self.app
            .world_mut()
            .spawn((Name::new(name.to_string()), Collider::new(shape)))
            .id()
    }

    pub fn spawn_child(&mut self, parent: Entity, name: &str, material: &str) -> Entity {
        let material = self.material(material);
        self.app
            .world_mut()
            .spawn((
                Name::new(name.to_string()),
                Renderable::new(material),
                ChildOf(parent),
            ))
            .id()
    }

    /// Strips the target component, leaving the entity alive.
    pub fn remove_target(&mut self, entity: Entity) {
        self.app
            .world_mut()
            .entity_mut(entity)
            .remove::<InteractiveTarget>();
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().despawn(entity);
    }

    pub fn point_at(&mut self, world: Vec3) {
        let screen = self.camera.world_to_screen(world);
        self.set_cursor(screen);
    }

    /// Top-left corner, where the test scenes keep nothing.
    pub fn point_away(&mut self) {
        self.set_cursor(Vec2::new(1.0, 1.0));
    }

    fn set_cursor(&mut self, screen: Vec2) {
        let mut cursor = self.app.world_mut().resource_mut::<CursorPosition>();
        cursor.x = screen.x;
        cursor.y = screen.y;
    }

    /// Presses the primary button for the next update only.
    pub fn press(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
    }

    pub fn request(&mut self, request: InteractionRequest) {
        self.app
            .world_mut()
            .resource_mut::<Messages<InteractionRequest>>()
            .write(request);
    }

    pub fn remove_camera(&mut self) {
        self.app.world_mut().remove_resource::<ActiveCamera>();
    }

    pub fn set_results_open(&mut self, open: bool) {
        self.app
            .world_mut()
            .resource_mut::<clickables::ModalFlags>()
            .results_open = open;
    }

    pub fn update(&mut self) {
        self.app.update();
        let mut buttons = self
            .app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>();
        buttons.release_all();
        buttons.clear();
    }

    pub fn advance_time(&mut self, duration: Duration) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(duration));
        self.update();
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    }

    pub fn target(&self, entity: Entity) -> &InteractiveTarget {
        self.app
            .world()
            .get::<InteractiveTarget>(entity)
            .expect("entity has no InteractiveTarget")
    }

    pub fn animator(&self, entity: Entity) -> &AnimatorParams {
        self.app
            .world()
            .get::<AnimatorParams>(entity)
            .expect("entity has no AnimatorParams")
    }

    pub fn material_of(&self, entity: Entity) -> Option<MaterialId> {
        self.app
            .world()
            .get::<Renderable>(entity)
            .and_then(|surface| surface.material)
    }

    pub fn context(&self) -> &InteractionContext {
        self.app.world().resource::<InteractionContext>()
    }

    pub fn recorded(&self) -> &Recorded {
        self.app.world().resource::<Recorded>()
    }

    pub fn overlay(&self, entity: Entity) -> Option<String> {
        self.app
            .world()
            .resource::<DebugOverlays>()
            .get(entity)
            .map(|panel| panel.to_string())
    }
}
