mod target;

pub use target::{AnimationParamNames, TargetConfig};
