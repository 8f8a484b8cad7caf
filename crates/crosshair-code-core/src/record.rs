//! The decoded crosshair record and the enumerations packed into it.

use serde::{Deserialize, Serialize};

/// Colour index meaning "use the record's own RGB bytes".
pub const CUSTOM_COLOR_INDEX: u8 = 5;

/// RGB used when the colour index is one of the reserved values (6 or 7).
pub const FALLBACK_COLOR: [u8; 3] = [0, 255, 0];

/// RGB triples selected by colour indices 0 through 4.
pub const PRESET_COLORS: [[u8; 3]; 5] = [
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [0, 255, 255],
];

/// One of the five built-in crosshair colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetColor {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
    Cyan = 4,
}

impl PresetColor {
    pub const ALL: [PresetColor; 5] = [
        PresetColor::Red,
        PresetColor::Green,
        PresetColor::Yellow,
        PresetColor::Blue,
        PresetColor::Cyan,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Finds the preset whose triple equals `rgb` exactly.
    pub fn matching(rgb: [u8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.rgb() == rgb)
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn rgb(self) -> [u8; 3] {
        PRESET_COLORS[self as usize]
    }
}

/// Crosshair drawing mode stored in the 3-bit style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Default = 0,
    DefaultStatic = 1,
    Classic = 2,
    ClassicDynamic = 3,
    ClassicStatic = 4,
    Legacy = 5,
}

impl Style {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Style::Default),
            1 => Some(Style::DefaultStatic),
            2 => Some(Style::Classic),
            3 => Some(Style::ClassicDynamic),
            4 => Some(Style::ClassicStatic),
            5 => Some(Style::Legacy),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// A fully decoded crosshair configuration.
///
/// Fixed-point fields hold the value after division by ten (`gap = -1.5` is the
/// raw byte `-15`). `style` and `color_index` keep the raw 3-bit value so that
/// reserved values survive a round trip; use [`Crosshair::style_kind`] and
/// [`Crosshair::preset_color`] for the named view.
///
/// The RGB channels are authoritative only when `color_index` is
/// [`CUSTOM_COLOR_INDEX`]; for any other index the decoder substitutes the
/// preset (or fallback) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crosshair {
    pub gap: f64,
    pub outline_thickness: f64,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub split_distance: u8,
    pub follow_recoil: bool,
    pub fixed_crosshair_gap: f64,
    pub color_index: u8,
    pub outline_enabled: bool,
    pub inner_split_alpha: f64,
    pub outer_split_alpha: f64,
    pub split_size_ratio: f64,
    pub thickness: f64,
    pub style: u8,
    pub center_dot_enabled: bool,
    pub deployed_weapon_gap_enabled: bool,
    pub alpha_enabled: bool,
    pub t_style_enabled: bool,
    /// Line length, also known as `length`.
    #[serde(alias = "length")]
    pub size: f64,
    /// Not part of the share code; always 0 after decoding.
    pub min_distance: f64,
}

impl Crosshair {
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn set_rgb(&mut self, [red, green, blue]: [u8; 3]) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    /// Synonym for [`Crosshair::size`].
    pub fn length(&self) -> f64 {
        self.size
    }

    pub fn style_kind(&self) -> Option<Style> {
        Style::from_raw(self.style)
    }

    pub fn preset_color(&self) -> Option<PresetColor> {
        PresetColor::from_index(self.color_index)
    }

    pub fn uses_custom_color(&self) -> bool {
        self.color_index == CUSTOM_COLOR_INDEX
    }
}
