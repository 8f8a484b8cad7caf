use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AdapterError;
use crate::record::Style;

/// Crosshair shape as presented by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    #[serde(rename = "classic static")]
    ClassicStatic,
    #[serde(rename = "classic")]
    Classic,
    #[serde(rename = "t", alias = "t-style")]
    T,
}

impl Shape {
    /// Precedence: the t-style flag wins, then `ClassicStatic` for style 4,
    /// `Classic` for styles 2 and 3, and `ClassicStatic` for everything else.
    pub fn from_record(style: u8, t_style_enabled: bool) -> Self {
        if t_style_enabled {
            return Shape::T;
        }
        match Style::from_raw(style) {
            Some(Style::ClassicStatic) => Shape::ClassicStatic,
            Some(Style::Classic | Style::ClassicDynamic) => Shape::Classic,
            _ => Shape::ClassicStatic,
        }
    }

    /// Returns the `(style, t_style_enabled)` pair stored in the record.
    pub fn to_record(self) -> (Style, bool) {
        match self {
            Shape::T => (Style::ClassicDynamic, true),
            Shape::Classic => (Style::ClassicDynamic, false),
            Shape::ClassicStatic => (Style::ClassicStatic, false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::ClassicStatic => "classic static",
            Shape::Classic => "classic",
            Shape::T => "t",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic static" => Ok(Shape::ClassicStatic),
            "classic" => Ok(Shape::Classic),
            "t" | "t-style" => Ok(Shape::T),
            other => Err(AdapterError::UnknownShape(other.to_string())),
        }
    }
}
