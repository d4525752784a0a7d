//! Each color notation is modeled with its own type. Conversions are
//! implemented on the models and always create a new model.
//!
//! Conversions on a [`Color`] accept a color in any notation. If the color is
//! not in the notation a conversion starts from, it is first converted to
//! RGB. The alpha component and the formatting preferences are carried over
//! to the new color.
//!
//! ```rust
//! use tincture::{make_string, parse, rgb_to_hex, rgb_to_hsl, hsl_to_rgb};
//! let color = rgb_to_hex(hsl_to_rgb(rgb_to_hsl(parse("rgb(255, 0, 0)"))));
//! assert_eq!(make_string(&color.unwrap()).unwrap(), "#ff0000");
//! ```

use crate::{
    color::{Color, Component, Components, Model},
    math::{byte_to_hex_pair, clamp_precision, clamp_unit, PRECISION},
    models::{ColorModel, DeviceCmyk, Gray, Hex, Hsl, Hwb, Lab, Lch, Rgb, D50, D65},
    parser::ParseResult,
};

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    /// Components above 1 are read as bytes.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&self.to_components().map(util::byte_scale_to_unit));
        Hsl::new(hue, saturation, lightness).map(|v| clamp_precision(v, PRECISION))
    }

    /// Convert a color specified in the sRGB color space to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        let Components(hue, whiteness, blackness) =
            util::rgb_to_hwb(&self.to_components().map(util::byte_scale_to_unit));
        Hwb::new(hue, whiteness, blackness).map(|v| clamp_precision(v, PRECISION))
    }

    /// Convert a color specified in the sRGB color space to the hexadecimal
    /// notation.
    pub fn to_hex(&self) -> Hex {
        let literal = format!(
            "#{}{}{}",
            byte_to_hex_pair(self.red),
            byte_to_hex_pair(self.green),
            byte_to_hex_pair(self.blue)
        );
        Hex::new(self.red, self.green, self.blue, literal)
    }

    /// Convert a color specified in the sRGB color space to the CIE-Lab color
    /// space.
    pub fn to_lab(&self) -> Lab {
        Lab::from_xyz(&self.to_xyz().transfer::<D50>())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness));
        Rgb::new(red, green, blue).map(|v| clamp_precision(v, PRECISION))
    }

    /// Convert this color from the HSL notation to the hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hwb_to_rgb(&Components(self.hue, self.whiteness, self.blackness));
        Rgb::new(red, green, blue).map(|v| clamp_precision(v, PRECISION))
    }
}

impl Lab {
    /// Convert this color from the CIE-Lab color space to the sRGB color
    /// space. Components outside of the sRGB gamut are clamped.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_xyz(&self.to_xyz().transfer::<D65>()).map(clamp_unit)
    }
}

impl Lch {
    /// Convert this color from the LCH form to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        self.to_rectangular().to_rgb()
    }
}

impl Gray {
    /// Convert this shade of gray to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        self.to_lab().to_rgb()
    }
}

impl DeviceCmyk {
    /// Convert this color to the sRGB color space with the naive CMYK
    /// transform.
    pub fn to_rgb(&self) -> Rgb {
        let black = self.black;
        let channel = |v: Component| 1.0 - (v * (1.0 - black) + black).min(1.0);
        Rgb::new(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        )
    }
}

impl Hex {
    /// The sRGB components of the hex color.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

impl Model {
    /// Convert the model to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Model::Rgb(rgb) => rgb.clone(),
            Model::Hsl(hsl) => hsl.to_rgb(),
            Model::Hwb(hwb) => hwb.to_rgb(),
            Model::Lab(lab) => lab.to_rgb(),
            Model::Lch(lch) => lch.to_rgb(),
            Model::DeviceCmyk(cmyk) => cmyk.to_rgb(),
            Model::Gray(gray) => gray.to_rgb(),
            Model::Hex(hex) => hex.to_rgb(),
        }
    }

    fn to_lab(&self) -> Lab {
        match self {
            Model::Lab(lab) => lab.clone(),
            Model::Lch(lch) => lch.to_rectangular(),
            Model::Gray(gray) => gray.to_lab(),
            model => model.to_rgb().to_lab(),
        }
    }
}

impl Color {
    fn convert_to<M: ColorModel>(&self, convert: impl FnOnce(&Model) -> M) -> Color {
        log::trace!(
            "converting {} color to {} [{}]",
            self.function(),
            M::FUNCTION,
            self.format
        );
        self.derive(convert(&self.model))
    }

    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Color {
        match self.model {
            Model::Rgb(_) => self.clone(),
            _ => self.convert_to(Model::to_rgb),
        }
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Color {
        match self.model {
            Model::Hsl(_) => self.clone(),
            _ => self.convert_to(|model| model.to_rgb().to_hsl()),
        }
    }

    /// Convert this color to the HWB notation.
    pub fn to_hwb(&self) -> Color {
        match self.model {
            Model::Hwb(_) => self.clone(),
            _ => self.convert_to(|model| model.to_rgb().to_hwb()),
        }
    }

    /// Convert this color to the hexadecimal notation.
    pub fn to_hex(&self) -> Color {
        match self.model {
            Model::Hex(_) => self.clone(),
            _ => self.convert_to(|model| model.to_rgb().to_hex()),
        }
    }

    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Color {
        match self.model {
            Model::Lab(_) => self.clone(),
            _ => self.convert_to(Model::to_lab),
        }
    }

    /// Convert this color to the LCH form of the CIE-Lab color space.
    pub fn to_lch(&self) -> Color {
        match self.model {
            Model::Lch(_) => self.clone(),
            _ => self.convert_to(|model| model.to_lab().to_polar()),
        }
    }
}

/// Convert a parsed color to the HSL notation.
pub fn rgb_to_hsl(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_hsl())
}

/// Convert a parsed color to the RGB notation.
pub fn hsl_to_rgb(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_rgb())
}

/// Convert a parsed color to the hexadecimal notation.
pub fn rgb_to_hex(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_hex())
}

/// Convert a parsed color to the hexadecimal notation, through RGB.
pub fn hsl_to_hex(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_rgb().to_hex())
}

/// Convert a parsed color to the CIE-Lab color space.
pub fn rgb_to_lab(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_lab())
}

/// Convert a parsed color to the RGB notation.
pub fn lab_to_rgb(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_rgb())
}

/// Convert a parsed color to the RGB notation.
pub fn hex_to_rgb(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_rgb())
}

/// Convert a parsed color to the HWB notation.
pub fn rgb_to_hwb(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_hwb())
}

/// Convert a parsed color to the RGB notation.
pub fn hwb_to_rgb(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_rgb())
}

/// Convert a parsed color to the LCH form of the CIE-Lab color space.
pub fn lab_to_lch(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_lch())
}

/// Convert a parsed color to the CIE-Lab color space.
pub fn lch_to_lab(result: ParseResult) -> ParseResult {
    result.map(|color| color.to_lab())
}

mod util {
    use crate::{
        color::{Component, Components},
        math::normalize_hue_fraction,
    };

    /// Components above 1 are assumed to be in the `0..=255` range.
    pub fn byte_scale_to_unit(value: Component) -> Component {
        if value > 1.0 {
            value / 255.0
        } else {
            value
        }
    }

    /// Calculate one RGB component for a hue.
    /// <http://www.easyrgb.com/index.php?X=MATH&H=19#text19>
    fn hue_to_rgb(t1: Component, t2: Component, hue: Component) -> Component {
        let hue = if hue < 0.0 {
            hue + 1.0
        } else if hue > 1.0 {
            hue - 1.0
        } else {
            hue
        };

        if 6.0 * hue < 1.0 {
            t1 + (t2 - t1) * 6.0 * hue
        } else if 2.0 * hue < 1.0 {
            t2
        } else if 3.0 * hue < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            t1
        }
    }

    /// Convert from HSL notation to RGB notation. The hue is a fraction of a
    /// turn, values above 1 are read as degrees.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let hue = if hue > 1.0 {
            normalize_hue_fraction(hue)
        } else {
            hue
        };

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let t2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let t1 = 2.0 * lightness - t2;

        Components(
            hue_to_rgb(t1, t2, hue + 1.0 / 3.0),
            hue_to_rgb(t1, t2, hue),
            hue_to_rgb(t1, t2, hue - 1.0 / 3.0),
        )
    }

    /// Convert from RGB notation to HSL notation. All values are in the
    /// `0..=1` range, the hue as a fraction of a turn.
    /// <http://www.easyrgb.com/index.php?X=MATH&H=18#text18>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        // Achromatic.
        if delta == 0.0 {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let distance = |channel: Component| ((max - channel) / 6.0 + delta / 2.0) / delta;
        let (dr, dg, db) = (distance(red), distance(green), distance(blue));

        let hue = if red == max {
            db - dg
        } else if green == max {
            1.0 / 3.0 + dr - db
        } else {
            2.0 / 3.0 + dg - dr
        };

        let hue = if hue < 0.0 {
            hue + 1.0
        } else if hue > 1.0 {
            hue - 1.0
        } else {
            hue
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from RGB notation to HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn rgb_to_hwb(from: &Components) -> Components {
        let Components(hue, _, _) = rgb_to_hsl(from);

        let Components(red, green, blue) = *from;
        let whiteness = red.min(green).min(blue);
        let blackness = 1.0 - red.max(green).max(blue);

        Components(hue, whiteness, blackness)
    }

    /// Convert from HWB notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(from: &Components) -> Components {
        let Components(hue, whiteness, blackness) = *from;

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Components(gray, gray, gray);
        }

        let rgb = hsl_to_rgb(&Components(hue, 1.0, 0.5));
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
    }
}
