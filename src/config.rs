//! Widget Configuration
//!
//! Values fixed at startup and provided to components via context.

use log::LevelFilter;

/// Location used when the form is submitted with an empty location field
pub const DEFAULT_PLACEHOLDER_LOCATION: &str = "Anywhere";

/// Records the list starts with: (text, location)
const DEFAULT_SEED: &[(&str, &str)] = &[("Pick up dog", "Goomer")];

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub title: String,
    pub placeholder_location: String,
    pub seed: Vec<(String, String)>,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            placeholder_location: DEFAULT_PLACEHOLDER_LOCATION.to_string(),
            seed: DEFAULT_SEED
                .iter()
                .map(|(text, location)| (text.to_string(), location.to_string()))
                .collect(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

/// Get the widget config from context
pub fn use_widget_config() -> WidgetConfig {
    leptos::prelude::expect_context::<WidgetConfig>()
}
