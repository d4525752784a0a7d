//! Model a color in the CIE-XYZ color space. Only used as an intermediate
//! step when converting between RGB and CIE-Lab.

use std::marker::PhantomData;

use crate::color::{Component, Components};
use crate::math::{transform, transform_3x3, Transform};

/// A reference white point.
pub trait WhitePoint {
    /// The XYZ components of the white point.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Debug)]
pub struct D50;

impl WhitePoint for D50 {
    const WHITE_POINT: Components = Components(0.9642, 1.0, 0.8249);
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Chromatic adaptation from one white point to another.
pub trait TransferWhitePoint<To: WhitePoint>: WhitePoint {
    /// The Bradford transform that adapts colors to the `To` white point.
    const TRANSFORM: Transform;
}

impl TransferWhitePoint<D50> for D65 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TRANSFORM: Transform = transform_3x3(
         1.0479298208405488,    0.029627815688159344, -0.009243058152591178,
         0.022946793341019088,  0.990434484573249,     0.015055144896577895,
        -0.05019222954313557,  -0.01707382502938514,   0.7518742899580008,
    );
}

impl TransferWhitePoint<D65> for D50 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TRANSFORM: Transform = transform_3x3(
         0.9554734527042182,   -0.028369706963208136,  0.012314001688319899,
        -0.023098536874261423,  1.0099954580058226,   -0.020507696433477912,
         0.0632593086610217,    0.021041398966943008,  1.3303659366080753,
    );
}

/// A color in the CIE-XYZ color space with a specified white point reference.
#[derive(Clone, Debug)]
pub struct Xyz<W: WhitePoint> {
    pub x: Component,
    pub y: Component,
    pub z: Component,
    _w: PhantomData<W>,
}

impl<W: WhitePoint> Xyz<W> {
    pub fn new(x: Component, y: Component, z: Component) -> Self {
        Self {
            x,
            y,
            z,
            _w: PhantomData,
        }
    }

    pub fn to_components(&self) -> Components {
        Components(self.x, self.y, self.z)
    }

    /// Adapt the color to another white point.
    pub fn transfer<To: WhitePoint>(&self) -> Xyz<To>
    where
        W: TransferWhitePoint<To>,
    {
        transform(&<W as TransferWhitePoint<To>>::TRANSFORM, self.to_components()).into()
    }
}

impl<W: WhitePoint> From<Components> for Xyz<W> {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

/// A color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

/// A color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn bradford_maps_white_points() {
        let d50 = XyzD65::from(D65::WHITE_POINT).transfer::<D50>();
        assert_component_eq!(d50.x, 0.9643, epsilon = 1.0e-3);
        assert_component_eq!(d50.y, 1.0, epsilon = 1.0e-3);
        assert_component_eq!(d50.z, 0.8251, epsilon = 1.0e-3);
    }

    #[test]
    fn transfer_round_trip() {
        let xyz = XyzD65::new(0.318634, 0.239006, 0.041637);
        let back = xyz.transfer::<D50>().transfer::<D65>();
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }
}
