//! Formatting preferences attached to a [`Color`]. They are only read when
//! the color is written back to CSS.

use std::fmt::{self, Write};

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// The set of formatting preferences of a [`Color`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Format : u8 {
        /// Write hex colors with one digit per component when possible.
        const SHORT_HEX = 1 << 0;
        /// Always write the alpha component.
        const ALPHA = 1 << 1;
        /// Write RGB components as percentages instead of bytes.
        const INT_TO_PERCENT = 1 << 2;
        /// Write hues with the `deg` unit.
        const HUE_TO_DEGREES = 1 << 3;
    }
}

const TOKENS: [(Format, &str); 4] = [
    (Format::SHORT_HEX, "shortHex"),
    (Format::ALPHA, "alpha"),
    (Format::INT_TO_PERCENT, "intToPercent"),
    (Format::HUE_TO_DEGREES, "hueToDegrees"),
];

impl Format {
    /// The name of a single formatting preference.
    pub fn token(&self) -> Option<&'static str> {
        TOKENS
            .iter()
            .find(|(format, _)| format == self)
            .map(|(_, token)| *token)
    }

    /// The names of all the preferences in the set.
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(|f| f.token())
    }
}

/// Lists the token names of the set, separated by spaces.
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl Color {
    /// Return a copy of this color with the given formatting preferences
    /// added. Preferences that are already set stay set.
    pub fn with_format(&self, format: Format) -> Self {
        Self {
            format: self.format | format,
            ..self.clone()
        }
    }
}

/// Prefer the 3 or 4 digit hex notation.
pub fn short_hex(color: &Color) -> Color {
    color.with_format(Format::SHORT_HEX)
}

/// Always include the alpha component in the output.
pub fn include_alpha(color: &Color) -> Color {
    color.with_format(Format::ALPHA)
}

/// Write RGB components as percentages.
pub fn int_to_percent(color: &Color) -> Color {
    color.with_format(Format::INT_TO_PERCENT)
}

/// Write hues in degrees.
pub fn hue_to_degrees(color: &Color) -> Color {
    color.with_format(Format::HUE_TO_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    fn color() -> Color {
        Color::new(Rgb::new(0.2, 0.2, 0.2), 1.0)
    }

    #[test]
    fn adding_a_format_is_idempotent() {
        let c = short_hex(&short_hex(&short_hex(&color())));
        assert_eq!(c.format, Format::SHORT_HEX);
        assert_eq!(c.format.iter().count(), 1);
    }

    #[test]
    fn formats_commute() {
        let a = int_to_percent(&include_alpha(&color()));
        let b = include_alpha(&int_to_percent(&color()));
        assert_eq!(a, b);
        assert_eq!(a.format, Format::ALPHA | Format::INT_TO_PERCENT);
    }

    #[test]
    fn the_source_color_is_not_modified() {
        let source = color();
        let formatted = hue_to_degrees(&source);
        assert_eq!(source.format, Format::empty());
        assert_eq!(formatted.format, Format::HUE_TO_DEGREES);
        assert_eq!(formatted.model, source.model);
        assert_eq!(formatted.alpha, source.alpha);
    }

    #[test]
    fn token_names() {
        assert_eq!(Format::SHORT_HEX.token(), Some("shortHex"));
        assert_eq!(Format::ALPHA.token(), Some("alpha"));
        assert_eq!(Format::INT_TO_PERCENT.token(), Some("intToPercent"));
        assert_eq!(Format::HUE_TO_DEGREES.token(), Some("hueToDegrees"));
        assert_eq!((Format::ALPHA | Format::SHORT_HEX).token(), None);
    }

    #[test]
    fn all_token_names() {
        let tokens: Vec<_> = (Format::SHORT_HEX | Format::HUE_TO_DEGREES)
            .tokens()
            .collect();
        assert_eq!(tokens, vec!["shortHex", "hueToDegrees"]);
    }

    #[test]
    fn display_lists_tokens() {
        assert_eq!(Format::empty().to_string(), "");
        assert_eq!(
            (Format::INT_TO_PERCENT | Format::ALPHA).to_string(),
            "alpha intToPercent"
        );
        assert_eq!(
            int_to_percent(&short_hex(&color())).format.to_string(),
            "shortHex intToPercent"
        );
    }
}
