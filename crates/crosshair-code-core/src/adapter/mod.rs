//! Record <-> UI configuration mapping.

mod color;
mod error;
mod hidden;
mod shape;
mod ui_config;

pub use color::Rgb;
pub use error::AdapterError;
pub use hidden::HiddenFields;
pub use shape::Shape;
pub use ui_config::{
    from_ui_config, from_ui_config_with, to_ui_config, UiConfig, DEFAULT_FIXED_CROSSHAIR_GAP,
};
