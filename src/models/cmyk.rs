//! Model a color specified with device dependent CMYK components.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the `device-cmyk()` notation. Each component is
    /// in the range `0..=1`.
    pub struct DeviceCmyk {
        /// The cyan component of the color.
        cyan: Component,
        /// The magenta component of the color.
        magenta: Component,
        /// The yellow component of the color.
        yellow: Component,
        /// The black component of the color.
        black: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorModel;

    #[test]
    fn kebab_case_function_name() {
        assert_eq!(DeviceCmyk::FUNCTION, "device-cmyk");
    }
}
