mod bindings;
mod snapshot;

pub use bindings::{PointerBindings, mouse_button_from_label, mouse_button_label};
pub use snapshot::{CursorPosition, PointerSnapshot};
