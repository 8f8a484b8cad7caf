//! Console command text derived from a crosshair record.

use std::fmt;

use crate::record::Crosshair;

/// A single `key "value"` console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleCommand {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConsoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.key, self.value)
    }
}

/// The console variables reproducing `crosshair`, in a fixed order.
pub fn console_command_list(crosshair: &Crosshair) -> Vec<ConsoleCommand> {
    let c = crosshair;
    let entries: [(&'static str, String); 21] = [
        ("cl_crosshairgap", number(c.gap)),
        ("cl_crosshair_outlinethickness", number(c.outline_thickness)),
        ("cl_crosshaircolor_r", c.red.to_string()),
        ("cl_crosshaircolor_g", c.green.to_string()),
        ("cl_crosshaircolor_b", c.blue.to_string()),
        ("cl_crosshairalpha", c.alpha.to_string()),
        ("cl_crosshair_dynamic_splitdist", c.split_distance.to_string()),
        ("cl_crosshair_recoil", switch(c.follow_recoil)),
        ("cl_fixedcrosshairgap", number(c.fixed_crosshair_gap)),
        ("cl_crosshaircolor", c.color_index.to_string()),
        ("cl_crosshair_drawoutline", switch(c.outline_enabled)),
        ("cl_crosshair_dynamic_splitalpha_innermod", number(c.inner_split_alpha)),
        ("cl_crosshair_dynamic_splitalpha_outermod", number(c.outer_split_alpha)),
        ("cl_crosshair_dynamic_maxdist_splitratio", number(c.split_size_ratio)),
        ("cl_crosshairthickness", number(c.thickness)),
        ("cl_crosshairdot", switch(c.center_dot_enabled)),
        ("cl_crosshairgap_useweaponvalue", switch(c.deployed_weapon_gap_enabled)),
        ("cl_crosshairusealpha", switch(c.alpha_enabled)),
        ("cl_crosshair_t", switch(c.t_style_enabled)),
        ("cl_crosshairstyle", c.style.to_string()),
        ("cl_crosshairsize", number(c.size)),
    ];

    entries
        .into_iter()
        .map(|(key, value)| ConsoleCommand { key, value })
        .collect()
}

/// [`console_command_list`] rendered as `key "value"` strings.
pub fn console_commands(crosshair: &Crosshair) -> Vec<String> {
    console_command_list(crosshair)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// All commands joined by newlines, ready for the clipboard.
pub fn console_script(crosshair: &Crosshair) -> String {
    console_commands(crosshair).join("\n")
}

/// Shortest decimal form: `3`, `0.5`, `-1.5`.
fn number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}

fn switch(on: bool) -> String {
    (if on { "1" } else { "0" }).to_string()
}
