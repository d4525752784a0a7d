//! Model a color with the HWB notation in the sRGB color space.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, as a fraction of a full turn.
        hue: Component,
        /// The whiteness component of the color.
        whiteness: Component,
        /// The blackness component of the color.
        blackness: Component,
    }
}
