use bevy::prelude::*;
use glam::{Vec2, Vec3};
use pointer_input::PointerSnapshot;
use scene::{MaterialId, MaterialLibrary};
use target_types::TargetConfig;
use tracing::{debug, info, warn};

use super::animation::AnimationSink;
use super::context::InteractionContext;
use super::highlight::{Highlighter, SurfaceAccess};
use super::notify::Notifications;

/// How long the recently-clicked flag stays up after a click.
pub const CLICK_WINDOW_SECS: f32 = 2.0;

/// Hit name recorded when the pointer ray hits nothing.
pub const NO_HIT_NAME: &str = "Nothing";

/// Nearest surface under the pointer this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHit {
    pub entity: Entity,
    /// Interactive target owning the hit collider, if any.
    pub target: Option<Entity>,
    pub name: String,
    pub distance: f32,
    pub point: Vec3,
}

/// Everything a target needs to know about the current frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub pointer: PointerSnapshot,
    pub has_camera: bool,
    pub hit: Option<FrameHit>,
}

impl FrameInput {
    pub fn hit_target(&self) -> Option<Entity> {
        self.hit.as_ref().and_then(|hit| hit.target)
    }
}

/// Collaborators owned by the host for the duration of one call.
pub struct Host<'a, S> {
    pub surfaces: &'a mut S,
    pub children: &'a [Entity],
    pub animator: Option<&'a mut dyn AnimationSink>,
}

impl<'a, S: SurfaceAccess> Host<'a, S> {
    pub fn new(surfaces: &'a mut S, children: &'a [Entity]) -> Self {
        Self {
            surfaces,
            children,
            animator: None,
        }
    }

    pub fn with_animator(mut self, animator: Option<&'a mut dyn AnimationSink>) -> Self {
        self.animator = animator;
        self
    }
}

/// What happened during one tick, for the driver to forward as messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub hovered: bool,
    pub entered: bool,
    pub exited: bool,
    pub clicked: bool,
}

/// Snapshot of the last ray cast, kept for the debug overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Diagnostics {
    pub last_raycast_hit: bool,
    pub last_hit_name: String,
    pub last_hit_distance: f32,
    pub has_collider: bool,
    pub has_camera: bool,
    pub pointer: Vec2,
}

/// A clickable object: hover and click state machine plus its feedback.
#[derive(Component, Debug)]
pub struct InteractiveTarget {
    config: TargetConfig,
    pub notifications: Notifications,
    clickable: bool,
    globally_blocked: bool,
    highlighter: Highlighter,
    is_hovered: bool,
    was_recently_clicked: bool,
    click_time: f32,
    total_click_count: u32,
    last_click_position: Vec3,
    diagnostics: Diagnostics,
    collider_warned: bool,
}

impl InteractiveTarget {
    pub fn new(config: TargetConfig) -> Self {
        let highlighter = Highlighter::new(None, config.apply_to_children);
        Self {
            config,
            notifications: Notifications::default(),
            clickable: true,
            globally_blocked: false,
            highlighter,
            is_hovered: false,
            was_recently_clicked: false,
            click_time: 0.0,
            total_click_count: 0,
            last_click_position: Vec3::ZERO,
            diagnostics: Diagnostics::default(),
            collider_warned: false,
        }
    }

    pub fn with_highlight_material(mut self, material: MaterialId) -> Self {
        self.highlighter.set_material(Some(material));
        self
    }

    pub fn on_click<F>(mut self, listener: F) -> Self
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.notifications.click.push(listener);
        self
    }

    pub fn on_enter<F>(mut self, listener: F) -> Self
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.notifications.enter.push(listener);
        self
    }

    pub fn on_exit<F>(mut self, listener: F) -> Self
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.notifications.exit.push(listener);
        self
    }

    // === Lifecycle ===

    /// Registers the target and captures what it needs from the host. The
    /// original material is only captured on the first attach.
    pub fn attach(
        &mut self,
        me: Entity,
        ctx: &mut InteractionContext,
        has_camera: bool,
        has_collider: bool,
        materials: &MaterialLibrary,
        surfaces: &impl SurfaceAccess,
    ) -> bool {
        if self.highlighter.material().is_none() {
            if let Some(name) = &self.config.highlight_material {
                match materials.get(name) {
                    Some(id) => self.highlighter.set_material(Some(id)),
                    None => warn!(?me, material = %name, "highlight material not found"),
                }
            }
        }
        self.highlighter.capture(me, surfaces);

        self.diagnostics.has_camera = has_camera;
        self.diagnostics.has_collider = has_collider;
        if !has_collider && !self.collider_warned {
            warn!(?me, "{}: no collider found, ray casts will never hit it", self.label());
            self.collider_warned = true;
        }

        let added = ctx.register(me);
        if added {
            info!(?me, name = self.label(), "interactive target attached");
        }
        added
    }

    /// Restores the original material on self (and children when configured)
    /// and leaves the registry.
    pub fn detach(
        &mut self,
        me: Entity,
        ctx: &mut InteractionContext,
        children: &[Entity],
        surfaces: &mut impl SurfaceAccess,
    ) -> bool {
        self.highlighter.restore(me, children, surfaces);
        let removed = ctx.unregister(me);
        if removed {
            info!(?me, name = self.label(), "interactive target detached");
        }
        removed
    }

    // === Per-frame ===

    pub fn tick<S: SurfaceAccess>(
        &mut self,
        me: Entity,
        ctx: &mut InteractionContext,
        frame: &FrameInput,
        host: &mut Host<'_, S>,
    ) -> TickReport {
        let now = frame.pointer.time;
        let mut report = TickReport::default();

        self.expire_click(now);
        self.diagnostics.has_camera = frame.has_camera;
        self.diagnostics.pointer = frame.pointer.position;

        if self.globally_blocked {
            if self.highlighter.is_active() {
                self.set_highlighted(false, me, host);
            }
            return report;
        }
        if !frame.has_camera || !self.clickable {
            return report;
        }

        match &frame.hit {
            Some(hit) => {
                self.diagnostics.last_raycast_hit = true;
                self.diagnostics.last_hit_name = hit.name.clone();
                self.diagnostics.last_hit_distance = hit.distance;
            }
            None => {
                self.diagnostics.last_raycast_hit = false;
                self.diagnostics.last_hit_name = NO_HIT_NAME.to_string();
                self.diagnostics.last_hit_distance = 0.0;
            }
        }

        let hit_target = frame.hit_target();
        let hit_this = hit_target == Some(me);
        self.is_hovered = hit_this;
        report.hovered = hit_this;

        if hit_this {
            // Enter listeners run on every hovered frame, not only on entry.
            self.notifications.enter.invoke(me);
            report.entered = true;
            if ctx.hover_owner() != Some(me) {
                ctx.claim_hover(me);
            }
        } else if ctx.hover_owner() == Some(me) && hit_target.is_none() {
            // Moving straight onto another target leaves the slot to that
            // target and fires no exit here.
            self.notifications.exit.invoke(me);
            ctx.clear_hover();
            report.exited = true;
        }

        if frame.pointer.primary_down && hit_this {
            self.click(me, now, host);
            if let Some(hit) = &frame.hit {
                self.last_click_position = hit.point;
            }
            report.clicked = true;
        }

        if self.config.enable_highlight {
            if hit_this && !self.highlighter.is_active() {
                self.set_highlighted(true, me, host);
            } else if !hit_this && self.highlighter.is_active() {
                self.set_highlighted(false, me, host);
            }
        }

        if self.config.enable_animation {
            self.push_mouse_over(hit_this, host);
        }

        report
    }

    // === Public operations ===

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    pub fn set_globally_blocked(&mut self, blocked: bool) {
        self.globally_blocked = blocked;
    }

    /// Returns false when there is no surface or material to swap.
    pub fn set_highlighted<S: SurfaceAccess>(
        &mut self,
        on: bool,
        me: Entity,
        host: &mut Host<'_, S>,
    ) -> bool {
        self.highlighter.set(on, me, host.children, &mut *host.surfaces)
    }

    /// Same as a pointer click except that the last click position keeps its
    /// previous value.
    pub fn trigger_click<S: SurfaceAccess>(&mut self, me: Entity, now: f32, host: &mut Host<'_, S>) {
        self.click(me, now, host);
    }

    // === State ===

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    pub fn description(&self) -> &str {
        &self.config.description
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_globally_blocked(&self) -> bool {
        self.globally_blocked
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighter.is_active()
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Flag as of the last tick or click.
    pub fn was_recently_clicked(&self) -> bool {
        self.was_recently_clicked
    }

    /// Exact check over `[click_time, click_time + CLICK_WINDOW_SECS)`.
    pub fn is_recently_clicked_at(&self, now: f32) -> bool {
        self.was_recently_clicked && now >= self.click_time && now - self.click_time < CLICK_WINDOW_SECS
    }

    pub fn click_time(&self) -> f32 {
        self.click_time
    }

    pub fn total_click_count(&self) -> u32 {
        self.total_click_count
    }

    pub fn last_click_position(&self) -> Vec3 {
        self.last_click_position
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn label(&self) -> &str {
        if self.config.description.is_empty() {
            "interactive target"
        } else {
            &self.config.description
        }
    }

    fn expire_click(&mut self, now: f32) {
        if self.was_recently_clicked && now - self.click_time >= CLICK_WINDOW_SECS {
            self.was_recently_clicked = false;
        }
    }

    fn click<S: SurfaceAccess>(&mut self, me: Entity, now: f32, host: &mut Host<'_, S>) {
        if self.config.enable_animation {
            if let Some(animator) = host.animator.as_deref_mut() {
                animator.set_trigger(&self.config.animation_params.clicked);
                animator.set_bool(&self.config.animation_params.mouse_over, false);
            }
        }

        let fired = self.notifications.click.invoke(me);
        self.was_recently_clicked = true;
        self.click_time = now;
        self.total_click_count += 1;

        if self.config.debug_log {
            debug!(?me, name = self.label(), fired, total = self.total_click_count, "clicked");
        }
    }

    fn push_mouse_over<S: SurfaceAccess>(&mut self, over: bool, host: &mut Host<'_, S>) {
        let Some(animator) = host.animator.as_deref_mut() else {
            return;
        };
        if self.config.debug_log {
            debug!(name = self.label(), over, "mouse-over animation");
        }
        animator.set_bool(&self.config.animation_params.mouse_over, over);
    }
}
