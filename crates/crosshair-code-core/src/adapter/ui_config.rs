use serde::{Deserialize, Serialize};

use super::{HiddenFields, Rgb, Shape};
use crate::record::{Crosshair, PresetColor, CUSTOM_COLOR_INDEX};

/// `fixedCrosshairGap` used when a UI config does not carry one.
pub const DEFAULT_FIXED_CROSSHAIR_GAP: f64 = 3.0;

fn default_fixed_crosshair_gap() -> f64 {
    DEFAULT_FIXED_CROSSHAIR_GAP
}

/// Presentation-side crosshair configuration.
///
/// Every field is required; there is no implicit default configuration.
/// `fixed_crosshair_gap` has no UI control and is carried only so that a
/// decoded record survives the trip through the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub color: Rgb,
    pub size: f64,
    pub thickness: f64,
    pub gap: f64,
    pub outline: bool,
    pub outline_thickness: f64,
    pub center_dot: bool,
    pub shape: Shape,
    pub alpha: u8,
    #[serde(default = "default_fixed_crosshair_gap")]
    pub fixed_crosshair_gap: f64,
}

impl UiConfig {
    /// Whether the four crosshair lines have any length to draw.
    pub fn draws_lines(&self) -> bool {
        self.size > 0.0
    }
}

/// Projects a record onto the UI configuration. Never fails.
pub fn to_ui_config(crosshair: &Crosshair) -> UiConfig {
    UiConfig {
        color: Rgb::from(crosshair.rgb()),
        size: crosshair.size,
        thickness: crosshair.thickness,
        gap: crosshair.gap,
        outline: crosshair.outline_enabled,
        outline_thickness: crosshair.outline_thickness,
        center_dot: crosshair.center_dot_enabled,
        shape: Shape::from_record(crosshair.style, crosshair.t_style_enabled),
        alpha: crosshair.alpha,
        fixed_crosshair_gap: crosshair.fixed_crosshair_gap,
    }
}

/// Builds a record from a UI configuration using the default hidden fields.
pub fn from_ui_config(config: &UiConfig) -> Crosshair {
    from_ui_config_with(config, &HiddenFields::default())
}

/// Builds a record from a UI configuration and explicit hidden fields.
///
/// A colour equal to a preset triple selects that preset index; anything else
/// is stored as a custom colour.
pub fn from_ui_config_with(config: &UiConfig, hidden: &HiddenFields) -> Crosshair {
    let (style, t_style_enabled) = config.shape.to_record();
    let color_index = PresetColor::matching(config.color.to_array())
        .map(PresetColor::index)
        .unwrap_or(CUSTOM_COLOR_INDEX);

    Crosshair {
        gap: config.gap,
        outline_thickness: config.outline_thickness,
        red: config.color.red,
        green: config.color.green,
        blue: config.color.blue,
        alpha: config.alpha,
        split_distance: hidden.split_distance,
        follow_recoil: hidden.follow_recoil,
        fixed_crosshair_gap: config.fixed_crosshair_gap,
        color_index,
        outline_enabled: config.outline,
        inner_split_alpha: hidden.inner_split_alpha,
        outer_split_alpha: hidden.outer_split_alpha,
        split_size_ratio: hidden.split_size_ratio,
        thickness: config.thickness,
        style: style.raw(),
        center_dot_enabled: config.center_dot,
        deployed_weapon_gap_enabled: hidden.deployed_weapon_gap_enabled,
        alpha_enabled: hidden.alpha_enabled,
        t_style_enabled,
        size: config.size,
        min_distance: hidden.min_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UiConfig {
        UiConfig {
            color: Rgb::new(0, 255, 0),
            size: 2.5,
            thickness: 0.5,
            gap: -1.0,
            outline: true,
            outline_thickness: 1.0,
            center_dot: false,
            shape: Shape::ClassicStatic,
            alpha: 200,
            fixed_crosshair_gap: DEFAULT_FIXED_CROSSHAIR_GAP,
        }
    }

    #[test]
    fn hidden_defaults_are_applied() {
        let record = from_ui_config(&sample());
        assert_eq!(record.split_distance, 7);
        assert!(!record.follow_recoil);
        assert_eq!(record.split_size_ratio, 0.3);
        assert_eq!(record.inner_split_alpha, 1.0);
        assert_eq!(record.outer_split_alpha, 0.5);
        assert!(!record.deployed_weapon_gap_enabled);
        assert!(record.alpha_enabled);
        assert_eq!(record.min_distance, 0.0);
        assert_eq!(record.fixed_crosshair_gap, 3.0);
    }

    #[test]
    fn explicit_hidden_fields_win() {
        let hidden = HiddenFields {
            split_distance: 3,
            follow_recoil: true,
            ..HiddenFields::default()
        };
        let record = from_ui_config_with(&sample(), &hidden);
        assert_eq!(record.split_distance, 3);
        assert!(record.follow_recoil);
    }

    #[test]
    fn preset_and_custom_color_indices() {
        let mut config = sample();
        assert_eq!(from_ui_config(&config).color_index, 1);
        config.color = Rgb::new(0, 255, 1);
        assert_eq!(from_ui_config(&config).color_index, CUSTOM_COLOR_INDEX);
    }

    #[test]
    fn shape_drives_style_and_t_flag() {
        let mut config = sample();
        config.shape = Shape::T;
        let record = from_ui_config(&config);
        assert_eq!((record.style, record.t_style_enabled), (3, true));
        config.shape = Shape::Classic;
        let record = from_ui_config(&config);
        assert_eq!((record.style, record.t_style_enabled), (3, false));
        config.shape = Shape::ClassicStatic;
        let record = from_ui_config(&config);
        assert_eq!((record.style, record.t_style_enabled), (4, false));
    }

    #[test]
    fn zero_size_draws_no_lines() {
        let mut config = sample();
        assert!(config.draws_lines());
        config.size = 0.0;
        assert!(!config.draws_lines());
    }
}
