//! Models are structs that hold the components of a color in one notation.
//! They are wrapped by [`Model`] inside a [`Color`].

use crate::color::Model;

mod cmyk;
mod hex;
mod hsl;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::*;
pub use hex::*;
pub use hsl::*;
pub use hwb::*;
pub use lab::*;
pub use rgb::*;

pub(crate) use xyz::{D50, D65};

/// A trait implemented for all color models that can be wrapped in a
/// [`Color`].
pub trait ColorModel: Into<Model> {
    /// The name of the CSS function colors in this model are written with.
    const FUNCTION: &'static str;
}
