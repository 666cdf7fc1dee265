use std::fmt;

use super::target::InteractiveTarget;

/// Colour hint for an overlay line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTone {
    Normal,
    Good,
    Bad,
    Warn,
    Alert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub tone: OverlayTone,
}

impl OverlayLine {
    fn new(text: String, tone: OverlayTone) -> Self {
        Self { text, tone }
    }
}

/// Host-side facts the overlay shows next to the target's own state.
#[derive(Debug, Clone, Default)]
pub struct OverlayInputs<'a> {
    pub object_name: &'a str,
    pub camera_name: Option<&'a str>,
    pub object_active: bool,
    pub dialogue_open: bool,
    pub results_open: bool,
    pub hover_owner_name: Option<&'a str>,
    pub now: f32,
}

/// Read-only diagnostic view of one target.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPanel {
    pub title: String,
    pub lines: Vec<OverlayLine>,
}

impl OverlayPanel {
    pub fn build(target: &InteractiveTarget, inputs: &OverlayInputs<'_>) -> Self {
        use OverlayTone::*;

        let diag = target.diagnostics();
        let mut lines = Vec::with_capacity(14);
        let mut push = |text: String, tone| lines.push(OverlayLine::new(text, tone));

        push(
            format!("Camera: {}", inputs.camera_name.unwrap_or("NULL")),
            if inputs.camera_name.is_some() { Good } else { Bad },
        );
        push(
            format!("Has Collider: {}", diag.has_collider),
            if diag.has_collider { Good } else { Bad },
        );
        push(format!("Object Active: {}", inputs.object_active), Normal);
        push(format!("Dialogue Open: {}", inputs.dialogue_open), Normal);
        push(format!("Results Open: {}", inputs.results_open), Normal);
        push(
            format!("Hover Owner: {}", inputs.hover_owner_name.unwrap_or("None")),
            Normal,
        );
        push(
            format!("Raycast Hit: {}", diag.last_raycast_hit),
            if diag.last_raycast_hit { Good } else { Warn },
        );
        let hit_name = if diag.last_hit_name.is_empty() { "-" } else { diag.last_hit_name.as_str() };
        push(format!("Hit Object: {hit_name}"), Normal);
        if diag.last_raycast_hit {
            push(format!("Hit Distance: {:.2}", diag.last_hit_distance), Normal);
        }
        push(
            format!("Mouse Pos: ({:.1}, {:.1})", diag.pointer.x, diag.pointer.y),
            Normal,
        );
        if target.is_hovered() {
            push("Mouse Over: ON OBJECT".to_string(), Good);
        } else {
            push("Mouse Over: NOT ON OBJECT".to_string(), Normal);
        }
        if target.was_recently_clicked() {
            push(
                format!("Click Status: CLICKED ({:.1}s ago)", inputs.now - target.click_time()),
                Alert,
            );
        } else {
            push("Click Status: NOT CLICKED".to_string(), Normal);
        }
        push(format!("Total Clicks: {}", target.total_click_count()), Normal);
        if target.total_click_count() > 0 {
            let p = target.last_click_position();
            push(format!("Last Click Pos: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z), Normal);
        }

        Self {
            title: format!("Debug Info - {}", inputs.object_name),
            lines,
        }
    }
}

impl fmt::Display for OverlayPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n{}", line.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use target_types::TargetConfig;

    #[test]
    fn test_fresh_target_panel() {
        let target = InteractiveTarget::new(TargetConfig::default());
        let panel = OverlayPanel::build(
            &target,
            &OverlayInputs {
                object_name: "Chest",
                object_active: true,
                ..Default::default()
            },
        );

        insta::assert_snapshot!(panel.to_string(), @r"
        Debug Info - Chest
        Camera: NULL
        Has Collider: false
        Object Active: true
        Dialogue Open: false
        Results Open: false
        Hover Owner: None
        Raycast Hit: false
        Hit Object: -
        Mouse Pos: (0.0, 0.0)
        Mouse Over: NOT ON OBJECT
        Click Status: NOT CLICKED
        Total Clicks: 0
        ");
        assert_eq!(panel.lines[0].tone, OverlayTone::Bad);
        assert_eq!(panel.lines[6].tone, OverlayTone::Warn);
    }
}
