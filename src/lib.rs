//! tincture parses CSS colors, converts them between color notations and
//! writes them back to CSS with configurable formatting.
//!
//! ```rust
//! use tincture::{make_string, parse, rgb_to_hex, short_hex};
//!
//! let hex = rgb_to_hex(parse("rgb(51, 51, 51)")).unwrap();
//! assert_eq!(make_string(&hex).unwrap(), "#333333");
//! assert_eq!(make_string(&short_hex(&hex)).unwrap(), "#333");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod math;
pub mod models;
mod parser;
mod serialize;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Flags, Model};
pub use convert::{
    hex_to_rgb, hsl_to_hex, hsl_to_rgb, hwb_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab,
    rgb_to_hex, rgb_to_hsl, rgb_to_hwb, rgb_to_lab,
};
pub use error::{ParseError, Position, SerializeError, Span};
pub use format::{hue_to_degrees, include_alpha, int_to_percent, short_hex, Format};
pub use parser::{parse, ParseResult};
pub use serialize::{make_string, ToCss};
