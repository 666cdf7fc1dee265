//! Per-object pointer interaction.
//!
//! The types here hold no ECS queries of their own. The systems in
//! [`crate::ecs::systems`] gather one [`FrameInput`] per frame and hand each
//! registered [`InteractiveTarget`] the collaborators it needs through [`Host`].

mod animation;
mod context;
mod highlight;
mod notify;
mod overlay;
mod target;

pub use animation::AnimationSink;
pub use context::InteractionContext;
pub use highlight::{Highlighter, SurfaceAccess};
pub use notify::{Notification, NotificationList, Notifications};
pub use overlay::{OverlayInputs, OverlayLine, OverlayPanel, OverlayTone};
pub use target::{
    CLICK_WINDOW_SECS, Diagnostics, FrameHit, FrameInput, Host, InteractiveTarget, NO_HIT_NAME,
    TickReport,
};
