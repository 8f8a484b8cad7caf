use serde::{Deserialize, Serialize};

/// Record fields the UI does not expose.
///
/// [`super::from_ui_config`] fills them from [`HiddenFields::default`]; pass an
/// explicit value to [`super::from_ui_config_with`] to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HiddenFields {
    pub split_distance: u8,
    pub follow_recoil: bool,
    pub split_size_ratio: f64,
    pub inner_split_alpha: f64,
    pub outer_split_alpha: f64,
    pub deployed_weapon_gap_enabled: bool,
    pub alpha_enabled: bool,
    pub min_distance: f64,
}

impl Default for HiddenFields {
    fn default() -> Self {
        Self {
            split_distance: 7,
            follow_recoil: false,
            split_size_ratio: 0.3,
            inner_split_alpha: 1.0,
            outer_split_alpha: 0.5,
            deployed_weapon_gap_enabled: false,
            alpha_enabled: true,
            min_distance: 0.0,
        }
    }
}
