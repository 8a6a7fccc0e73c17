use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event payload forwarded untouched to the events collaborator.
pub type Payload = serde_json::Map<String, Value>;

fn default_span() -> u32 {
    1
}

fn default_settings() -> Value {
    Value::Object(Default::default())
}

fn default_enabled() -> bool {
    true
}

/// Placement of a widget on the user's dashboard grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetPosition {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_span")]
    pub width: u32,
    #[serde(default = "default_span")]
    pub height: u32,
}

impl Default for WidgetPosition {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_span(),
            height: default_span(),
        }
    }
}

/// Per-user configuration of a single widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetConfig {
    pub widget_id: String,
    pub user_id: String,
    #[serde(default)]
    pub position: WidgetPosition,
    #[serde(default = "default_settings")]
    pub settings: Value,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl WidgetConfig {
    pub fn new(widget_id: &str, user_id: &str) -> Self {
        Self {
            widget_id: widget_id.to_string(),
            user_id: user_id.to_string(),
            position: WidgetPosition::default(),
            settings: default_settings(),
            enabled: default_enabled(),
        }
    }

    pub fn with_position(mut self, position: WidgetPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }
}
