//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, as a fraction of a full turn.
        /// Values above 1 are read as degrees by the conversions.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorModel;

    #[test]
    fn function_name() {
        assert_eq!(Hsl::FUNCTION, "hsl");
    }

    #[test]
    fn map_components() {
        let hsl = Hsl::new(0.25, 0.5, 0.75).map(|v| v * 2.0);
        assert_eq!(hsl, Hsl::new(0.5, 1.0, 1.5));
    }
}
