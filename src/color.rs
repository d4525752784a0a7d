//! A [`Color`] represents a color that was specified in any of the supported
//! CSS color notations.

use bitflags::bitflags;

use crate::format::Format;
use crate::models::{ColorModel, DeviceCmyk, Gray, Hex, Hsl, Hwb, Lab, Lch, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent three components of a color, used for matrix math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Details about the source syntax of a [`Color`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags : u8 {
        /// Set when the color was written with an alpha qualified function
        /// name, `rgba(...)` or `hsla(...)`.
        const ALPHA_FUNCTION = 1 << 0;
    }
}

/// The notation a [`Color`] is specified in, along with its components.
#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    /// `rgb()` / `rgba()`
    Rgb(Rgb),
    /// `hsl()` / `hsla()`
    Hsl(Hsl),
    /// `hwb()`
    Hwb(Hwb),
    /// `lab()`
    Lab(Lab),
    /// `lch()`
    Lch(Lch),
    /// `device-cmyk()`
    DeviceCmyk(DeviceCmyk),
    /// `gray()`
    Gray(Gray),
    /// `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
    Hex(Hex),
}

impl Model {
    /// The name of the CSS function for this model, without any alpha
    /// qualification.
    pub fn function(&self) -> &'static str {
        match self {
            Model::Rgb(_) => Rgb::FUNCTION,
            Model::Hsl(_) => Hsl::FUNCTION,
            Model::Hwb(_) => Hwb::FUNCTION,
            Model::Lab(_) => Lab::FUNCTION,
            Model::Lch(_) => Lch::FUNCTION,
            Model::DeviceCmyk(_) => DeviceCmyk::FUNCTION,
            Model::Gray(_) => Gray::FUNCTION,
            Model::Hex(_) => Hex::FUNCTION,
        }
    }
}

/// A color in one of the supported notations, with an alpha component and
/// the formatting preferences used when writing it back to CSS.
///
/// Colors are values. Conversions and format changes never modify a color,
/// they return a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The notation and components of the color.
    pub model: Model,
    /// The alpha component of the color, in the range `0..=1`.
    pub alpha: Component,
    /// Formatting preferences used when serializing the color.
    pub format: Format,
    /// Details about the source syntax of the color.
    pub flags: Flags,
}

impl Color {
    /// Create a new [`Color`] with no formatting preferences.
    /// ```rust
    /// use tincture::{models::Rgb, Color};
    /// let c = Color::new(Rgb::new(1.0, 0.5, 0.0), 1.0);
    /// assert_eq!(c.function(), "rgb");
    /// ```
    pub fn new(model: impl Into<Model>, alpha: Component) -> Self {
        Self {
            model: model.into(),
            alpha,
            format: Format::empty(),
            flags: Flags::empty(),
        }
    }

    /// Return a copy of this color with the given flags added.
    pub fn with_flags(&self, flags: Flags) -> Self {
        Self {
            flags: self.flags | flags,
            ..self.clone()
        }
    }

    /// Return a new color with a different model, keeping the alpha component
    /// and formatting preferences. Source syntax flags are not carried over.
    pub(crate) fn derive(&self, model: impl Into<Model>) -> Self {
        Self {
            model: model.into(),
            alpha: self.alpha,
            format: self.format,
            flags: Flags::empty(),
        }
    }

    /// The CSS function name this color is written with, including the
    /// alpha qualification of the source syntax.
    pub fn function(&self) -> &'static str {
        let qualified = self.flags.contains(Flags::ALPHA_FUNCTION);
        match self.model {
            Model::Rgb(_) if qualified => "rgba",
            Model::Hsl(_) if qualified => "hsla",
            ref model => model.function(),
        }
    }
}
