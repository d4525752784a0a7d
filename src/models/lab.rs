//! Models for the CIE-Lab color space in its rectangular (Lab) and polar
//! (LCH) forms, and the gray notation which is a Lab color without chroma.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue},
    models::xyz::{WhitePoint, XyzD50, D50},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tincture_macros::gen_model! {
    /// A color specified in the CIE-Lab color space with the rectangular
    /// orthogonal form.
    pub struct Lab {
        /// The lightness component, in the range `0..=100`.
        lightness: Component,
        /// The a component.
        a: Component,
        /// The b component.
        b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }

    pub(crate) fn to_xyz(&self) -> XyzD50 {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        XyzD50::new(
            x * D50::WHITE_POINT.0,
            y * D50::WHITE_POINT.1,
            z * D50::WHITE_POINT.2,
        )
    }

    pub(crate) fn from_xyz(xyz: &XyzD50) -> Self {
        let adapted = Components(
            xyz.x / D50::WHITE_POINT.0,
            xyz.y / D50::WHITE_POINT.1,
            xyz.z / D50::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

tincture_macros::gen_model! {
    /// A color specified in the CIE-Lab color space with the cylindrical
    /// polar form.
    pub struct Lch {
        /// The lightness component, in the range `0..=100`.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component, in degrees.
        hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

tincture_macros::gen_model! {
    /// A shade of gray, specified by its CIE-Lab lightness.
    pub struct Gray {
        /// The lightness, in the range `0..=1`.
        lightness: Component,
    }
}

impl Gray {
    /// The CIE-Lab color with the lightness of this gray.
    pub fn to_lab(&self) -> Lab {
        Lab::new(self.lightness * 100.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn converting_to_polar_should_set_hue_to_zero_for_small_a_b_values() {
        let lab = Lab::new(50.0, 0.0, 0.0);
        let polar = lab.to_polar();

        assert_eq!(polar.chroma, 0.0);
        assert_eq!(polar.hue, 0.0);
    }

    #[test]
    fn polar_round_trip() {
        let lab = Lab::new(56.6293, 39.23708, 57.553769);
        let lch = lab.to_polar();
        assert_component_eq!(lch.chroma, 69.65619, epsilon = 1.0e-3);
        assert_component_eq!(lch.hue, 55.715927, epsilon = 1.0e-3);

        let back = lch.to_rectangular();
        assert_component_eq!(back.lightness, lab.lightness);
        assert_component_eq!(back.a, lab.a, epsilon = 1.0e-3);
        assert_component_eq!(back.b, lab.b, epsilon = 1.0e-3);
    }

    #[test]
    fn negative_hues_are_wrapped() {
        let lch = Lab::new(50.0, 10.0, -10.0).to_polar();
        assert_component_eq!(lch.hue, 315.0, epsilon = 1.0e-3);
    }

    #[test]
    fn xyz_round_trip() {
        let lab = Lab::new(56.6293, 39.23708, 57.553769);
        let back = Lab::from_xyz(&lab.to_xyz());
        assert_component_eq!(back.lightness, lab.lightness, epsilon = 1.0e-3);
        assert_component_eq!(back.a, lab.a, epsilon = 1.0e-3);
        assert_component_eq!(back.b, lab.b, epsilon = 1.0e-3);
    }

    #[test]
    fn dark_colors_use_the_linear_segment() {
        let lab = Lab::new(2.0, 1.0, -1.0);
        let back = Lab::from_xyz(&lab.to_xyz());
        assert_component_eq!(back.lightness, 2.0, epsilon = 1.0e-3);
        assert_component_eq!(back.a, 1.0, epsilon = 1.0e-3);
        assert_component_eq!(back.b, -1.0, epsilon = 1.0e-3);
    }

    #[test]
    fn gray_is_lab_without_chroma() {
        assert_eq!(Gray::new(0.5).to_lab(), Lab::new(50.0, 0.0, 0.0));
    }
}
