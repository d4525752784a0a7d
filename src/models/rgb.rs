//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::XyzD65,
};

tincture_macros::gen_model! {
    /// A color specified with the RGB notation in the sRGB color space. Each
    /// component is in the range `0..=1`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    pub(crate) fn to_components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    /// Remove the sRGB gamma encoding from the components.
    pub(crate) fn to_linear_light(&self) -> Components {
        self.to_components().map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    /// Apply the sRGB gamma encoding to linear light components.
    pub(crate) fn from_linear_light(linear: Components) -> Self {
        let Components(red, green, blue) = linear.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        });

        Self::new(red, green, blue)
    }

    pub(crate) fn to_xyz(&self) -> XyzD65 {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_linear_light()).into()
    }

    pub(crate) fn from_xyz(xyz: &XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Self::from_linear_light(transform(&FROM_XYZ, xyz.to_components()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.red, 0.1);
        assert_eq!(rgb.green, 0.2);
        assert_eq!(rgb.blue, 0.3);
    }

    #[test]
    fn gamma_round_trip() {
        let rgb = Rgb::new(0.823529, 0.411765, 0.01);
        let linear = rgb.to_linear_light();
        assert_component_eq!(linear.0, 0.644480);
        assert_component_eq!(linear.1, 0.141263);
        assert_component_eq!(linear.2, 0.01 / 12.92);

        let back = Rgb::from_linear_light(linear);
        assert_component_eq!(back.red, rgb.red);
        assert_component_eq!(back.green, rgb.green);
        assert_component_eq!(back.blue, rgb.blue);
    }

    #[test]
    fn to_xyz_d65() {
        let xyz = Rgb::new(0.823529, 0.411765, 0.117647).to_xyz();
        assert_component_eq!(xyz.x, 0.318634);
        assert_component_eq!(xyz.y, 0.239006);
        assert_component_eq!(xyz.z, 0.041637);
    }
}
