//! Write colors back to CSS text, honoring the formatting preferences that
//! are attached to them.

use std::fmt::Write;

use crate::{
    color::{Color, Component, Flags, Model},
    error::SerializeError,
    format::Format,
    math::{
        byte_to_hex_pair, clamp_precision, clamp_unit, first_digit, hex_pair_is_doubled,
        normalize_hue, remap_linear, PRECISION,
    },
    models::{Hex, Hsl, Rgb},
};

/// Types that can be written as CSS.
pub trait ToCss {
    /// Write the CSS representation of `self` to `dest`.
    fn to_css<W: Write>(&self, dest: &mut W) -> Result<(), SerializeError>;

    /// Return the CSS representation of `self` as a new string.
    fn to_css_string(&self) -> Result<String, SerializeError> {
        let mut s = String::new();
        self.to_css(&mut s)?;
        Ok(s)
    }
}

impl ToCss for Color {
    fn to_css<W: Write>(&self, dest: &mut W) -> Result<(), SerializeError> {
        match self.model {
            Model::Hex(ref hex) => write_hex(hex, self.alpha, self.format, dest),
            Model::Rgb(ref rgb) => write_rgb(rgb, self, dest),
            Model::Hsl(ref hsl) => write_hsl(hsl, self, dest),
            _ => {
                let function = self.function();
                log::debug!("no css output for {function} color [{}]", self.format);
                Err(SerializeError::Unsupported { function })
            }
        }
    }
}

/// Write the color as a CSS string.
///
/// ```rust
/// use tincture::{include_alpha, make_string, parse};
/// let color = parse("rgb(10, 20, 30)").unwrap();
/// assert_eq!(make_string(&include_alpha(&color)).unwrap(), "rgba(10, 20, 30, 1)");
/// ```
pub fn make_string(color: &Color) -> Result<String, SerializeError> {
    color.to_css_string()
}

/// The hex pairs for the red, green and blue channels. Taken from the
/// literal when it is well formed, otherwise from the components.
fn channel_pairs(hex: &Hex) -> Vec<String> {
    let digits = hex.digits().to_ascii_lowercase();
    let valid = digits.bytes().all(|b| b.is_ascii_hexdigit());

    if valid && hex.is_short() {
        digits
            .chars()
            .take(3)
            .map(|c| c.to_string().repeat(2))
            .collect()
    } else if valid && matches!(digits.len(), 6 | 8) {
        (0..3).map(|i| digits[i * 2..i * 2 + 2].to_string()).collect()
    } else {
        [hex.red, hex.green, hex.blue]
            .into_iter()
            .map(byte_to_hex_pair)
            .collect()
    }
}

fn write_hex<W: Write>(
    hex: &Hex,
    alpha: Component,
    format: Format,
    dest: &mut W,
) -> Result<(), SerializeError> {
    let mut pairs = channel_pairs(hex);
    if format.contains(Format::ALPHA) {
        pairs.push(byte_to_hex_pair(alpha));
    }

    dest.write_char('#')?;

    let collapse =
        format.contains(Format::SHORT_HEX) && pairs.iter().all(|pair| hex_pair_is_doubled(pair));
    for pair in &pairs {
        if collapse {
            dest.write_char(first_digit(pair))?;
        } else {
            dest.write_str(pair)?;
        }
    }

    Ok(())
}

fn write_alpha<W: Write>(alpha: Component, dest: &mut W) -> Result<(), SerializeError> {
    write!(dest, ", {}", clamp_precision(clamp_unit(alpha), PRECISION))?;
    Ok(())
}

fn write_rgb<W: Write>(rgb: &Rgb, color: &Color, dest: &mut W) -> Result<(), SerializeError> {
    let with_alpha =
        color.format.contains(Format::ALPHA) || color.flags.contains(Flags::ALPHA_FUNCTION);

    dest.write_str(if with_alpha { "rgba(" } else { "rgb(" })?;

    let to_byte = remap_linear(0.0, 1.0, 0.0, 255.0);
    for (index, value) in [rgb.red, rgb.green, rgb.blue].into_iter().enumerate() {
        if index > 0 {
            dest.write_str(", ")?;
        }
        let value = clamp_unit(value);
        if color.format.contains(Format::INT_TO_PERCENT) {
            write!(dest, "{}%", (value * 100.0).round())?;
        } else {
            write!(dest, "{}", to_byte(value))?;
        }
    }

    if with_alpha {
        write_alpha(color.alpha, dest)?;
    }

    dest.write_char(')')?;
    Ok(())
}

fn write_hsl<W: Write>(hsl: &Hsl, color: &Color, dest: &mut W) -> Result<(), SerializeError> {
    let with_alpha =
        color.format.contains(Format::ALPHA) || color.flags.contains(Flags::ALPHA_FUNCTION);

    dest.write_str(if with_alpha { "hsla(" } else { "hsl(" })?;

    // Hues above a full turn are already in degrees.
    let degrees = if hsl.hue > 1.0 {
        normalize_hue(hsl.hue)
    } else {
        hsl.hue * 360.0
    };
    write!(dest, "{}", degrees.round())?;
    if color.format.contains(Format::HUE_TO_DEGREES) {
        dest.write_str("deg")?;
    }

    for value in [hsl.saturation, hsl.lightness] {
        write!(dest, ", {}%", (clamp_unit(value) * 100.0).round())?;
    }

    if with_alpha {
        write_alpha(color.alpha, dest)?;
    }

    dest.write_char(')')?;
    Ok(())
}
