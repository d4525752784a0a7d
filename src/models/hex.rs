//! Model a color written in hexadecimal notation.

use crate::color::{Component, Model};
use crate::models::ColorModel;

/// A color written in hexadecimal notation (`#rgb`, `#rgba`, `#rrggbb` or
/// `#rrggbbaa`). The RGB components are kept next to the literal the color
/// was written with, so an unmodified color can be written back as is.
#[derive(Clone, Debug, PartialEq)]
pub struct Hex {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
    /// The hex literal, including the leading `#`.
    pub literal: String,
}

impl Hex {
    /// Create a new hex color from its components and literal.
    pub fn new(
        red: Component,
        green: Component,
        blue: Component,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            literal: literal.into(),
        }
    }

    /// The hex digits of the literal, without the leading `#`.
    pub fn digits(&self) -> &str {
        self.literal.trim_start_matches('#')
    }

    /// Returns true if the literal uses a single digit per component.
    pub fn is_short(&self) -> bool {
        matches!(self.digits().len(), 3 | 4)
    }
}

impl From<Hex> for Model {
    fn from(value: Hex) -> Self {
        Model::Hex(value)
    }
}

impl ColorModel for Hex {
    const FUNCTION: &'static str = "hex";
}
