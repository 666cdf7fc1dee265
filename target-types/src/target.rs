use serde::{Deserialize, Serialize};

pub const DEFAULT_MOUSE_OVER_PARAM: &str = "isMouseOver";
pub const DEFAULT_CLICKED_PARAM: &str = "isClicked";

/// Names of the animator parameters driven by an interactive target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationParamNames {
    /// Bool parameter, true while the pointer rests on the object.
    pub mouse_over: String,
    /// Trigger parameter, pulsed on click.
    pub clicked: String,
}

impl Default for AnimationParamNames {
    fn default() -> Self {
        Self {
            mouse_over: DEFAULT_MOUSE_OVER_PARAM.to_string(),
            clicked: DEFAULT_CLICKED_PARAM.to_string(),
        }
    }
}

/// Authoring-time configuration of one interactive target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TargetConfig {
    pub enable_highlight: bool,
    pub enable_animation: bool,
    /// Material name, resolved against the material library on attach.
    pub highlight_material: Option<String>,
    pub apply_to_children: bool,
    pub description: String,
    pub animation_params: AnimationParamNames,
    pub show_debug_overlay: bool,
    pub debug_log: bool,
}

impl TargetConfig {
    pub fn with_highlight(mut self, material: impl Into<String>) -> Self {
        self.enable_highlight = true;
        self.highlight_material = Some(material.into());
        self
    }

    pub fn with_animation(mut self) -> Self {
        self.enable_animation = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TargetConfig = toml::from_str(
            r#"
            enable_highlight = true
            highlight_material = "glow"
            "#,
        )
        .unwrap();

        assert!(config.enable_highlight);
        assert_eq!(config.highlight_material.as_deref(), Some("glow"));
        assert!(!config.apply_to_children);
        assert_eq!(config.animation_params.mouse_over, "isMouseOver");
        assert_eq!(config.animation_params.clicked, "isClicked");
    }

    #[test]
    fn test_custom_param_names() {
        let config: TargetConfig = toml::from_str(
            r#"
            enable_animation = true
            [animation_params]
            clicked = "pressed"
            "#,
        )
        .unwrap();

        assert_eq!(config.animation_params.mouse_over, "isMouseOver");
        assert_eq!(config.animation_params.clicked, "pressed");
    }
}
