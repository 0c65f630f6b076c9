use serde::Deserialize;

use crate::timer::DEFAULT_PERIOD_MS;

/// localStorage key holding the JSON configuration.
pub const CONFIG_KEY: &str = "pt_timer_config";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Render through the yew `TimeDisplay` component.
    #[default]
    Component,
    /// Write straight into an existing page element.
    Element,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub element_id: String,
    pub period_ms: u32,
    pub mode: DisplayMode,
    pub log_level: String,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            element_id: "timer".to_string(),
            period_ms: DEFAULT_PERIOD_MS,
            mode: DisplayMode::Component,
            log_level: "info".to_string(),
        }
    }
}

impl TimerConfig {
    /// Malformed input yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", CONFIG_KEY, e);
                Self::default()
            }
        }
    }

    /// Reads the configuration from localStorage, if present.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    fn normalized(mut self) -> Self {
        if self.period_ms == 0 {
            self.period_ms = DEFAULT_PERIOD_MS;
        }
        if self.element_id.trim().is_empty() {
            self.element_id = Self::default().element_id;
        }
        self
    }
}
