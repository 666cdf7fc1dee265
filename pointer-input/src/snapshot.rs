use bevy::input::ButtonInput;
use bevy::input::mouse::MouseButton;
use bevy::prelude::Resource;
use glam::Vec2;

use crate::PointerBindings;

/// Pointer position in window pixels, origin at the top-left corner.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

impl CursorPosition {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    pub position: Vec2,
    /// Primary button went down this frame.
    pub primary_down: bool,
    /// Seconds since startup.
    pub time: f32,
}

impl PointerSnapshot {
    pub fn capture(
        cursor: &CursorPosition,
        buttons: &ButtonInput<MouseButton>,
        bindings: &PointerBindings,
        time: f32,
    ) -> Self {
        Self {
            position: cursor.as_vec2(),
            primary_down: buttons.just_pressed(bindings.primary),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_uses_primary_edge() {
        let cursor = CursorPosition { x: 12.0, y: 34.0 };
        let bindings = PointerBindings::default();
        let mut buttons = ButtonInput::<MouseButton>::default();

        buttons.press(MouseButton::Right);
        let snapshot = PointerSnapshot::capture(&cursor, &buttons, &bindings, 1.5);
        assert!(!snapshot.primary_down);
        assert_eq!(snapshot.position, Vec2::new(12.0, 34.0));
        assert_eq!(snapshot.time, 1.5);

        buttons.press(MouseButton::Left);
        assert!(PointerSnapshot::capture(&cursor, &buttons, &bindings, 1.6).primary_down);

        // Held, not pressed this frame.
        buttons.clear();
        assert!(!PointerSnapshot::capture(&cursor, &buttons, &bindings, 1.7).primary_down);
    }
}
