//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::{Float, NumCast};

use crate::color::{Component, Components};

/// The number of decimal places the conversions round their results to.
pub const PRECISION: i32 = 2;

/// A matrix used to transform color components.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a transform that only uses the upper-left 3x3 part of the matrix.
/// Values are given column by column.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Round `value` to `decimals` decimal places. Ties are rounded away from
/// zero.
pub fn clamp_precision<T: Float>(value: T, decimals: i32) -> T {
    if !value.is_finite() {
        return value;
    }

    let Some(factor) = <T as NumCast>::from(10.0_f64.powi(decimals)) else {
        return value;
    };

    (value * factor).round() / factor
}

/// Return a function that maps a value from the `old_min..old_max` range to
/// the `new_min..new_max` range, rounded to the nearest integer.
pub fn remap_linear(
    old_min: Component,
    old_max: Component,
    new_min: Component,
    new_max: Component,
) -> impl Fn(Component) -> Component {
    move |value| {
        let old_range = old_max - old_min;
        let new_range = new_max - new_min;
        (((value - old_min) * new_range) / old_range + new_min).round()
    }
}

/// Clamp a value to the unit range. NaN becomes 0.
pub fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Encode a unit range value as a pair of lowercase hex digits. Values
/// outside the range are clamped, NaN is encoded as `"00"`.
pub fn byte_to_hex_pair(value: Component) -> String {
    if value.is_nan() {
        return "00".to_string();
    }

    let byte = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    hex::encode([byte])
}

/// Decode a pair of hex digits to a value in the unit range.
pub fn hex_pair_to_unit(pair: &str) -> Option<Component> {
    let [byte]: [u8; 1] = hex::decode(pair).ok()?.try_into().ok()?;
    Some(byte as Component / 255.0)
}

/// Returns true if both digits of the hex pair are the same, meaning the
/// pair can be written with a single digit.
pub fn hex_pair_is_doubled(pair: &str) -> bool {
    match pair.as_bytes() {
        [first, second] => first.eq_ignore_ascii_case(second),
        _ => false,
    }
}

/// The digit that represents a doubled hex pair.
pub fn first_digit(pair: &str) -> char {
    pair.chars().next().unwrap_or('0')
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Wrap a hue in degrees into the `0..360` range.
pub fn normalize_hue(degrees: Component) -> Component {
    if degrees.is_nan() {
        return 0.0;
    }
    degrees.rem_euclid(360.0)
}

/// Convert a hue in degrees to a fraction of a full turn in the `0..1` range.
pub fn normalize_hue_fraction(degrees: Component) -> Component {
    normalize_hue(degrees) / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_precision_rounds_ties_away_from_zero() {
        assert_eq!(clamp_precision(0.125_f64, 2), 0.13);
        assert_eq!(clamp_precision(-0.125_f64, 2), -0.13);
        assert_eq!(clamp_precision(0.5_f64, 0), 1.0);
        assert_eq!(clamp_precision(-0.5_f64, 0), -1.0);
        assert_eq!(clamp_precision(0.333333_f64, 2), 0.33);
        assert_eq!(clamp_precision(0.666666_f64, 3), 0.667);
    }

    #[test]
    fn clamp_precision_leaves_non_finite_values() {
        assert!(clamp_precision(Component::NAN, 2).is_nan());
        assert_eq!(
            clamp_precision(Component::INFINITY, 2),
            Component::INFINITY
        );
    }

    #[test]
    fn remap_percent_to_byte() {
        let to_byte = remap_linear(0.0, 1.0, 0.0, 255.0);
        assert_eq!(to_byte(0.0), 0.0);
        assert_eq!(to_byte(1.0), 255.0);
        assert_eq!(to_byte(0.5), 128.0);
        assert_eq!(to_byte(10.0 / 255.0), 10.0);

        let to_unit_percent = remap_linear(0.0, 255.0, 0.0, 100.0);
        assert_eq!(to_unit_percent(255.0), 100.0);
        assert_eq!(to_unit_percent(51.0), 20.0);
    }

    #[test]
    fn hex_pairs() {
        assert_eq!(byte_to_hex_pair(0.0), "00");
        assert_eq!(byte_to_hex_pair(1.0), "ff");
        assert_eq!(byte_to_hex_pair(0.2), "33");
        assert_eq!(byte_to_hex_pair(171.0 / 255.0), "ab");
        assert_eq!(byte_to_hex_pair(2.0), "ff");
        assert_eq!(byte_to_hex_pair(-1.0), "00");
        assert_eq!(byte_to_hex_pair(Component::NAN), "00");
    }

    #[test]
    fn decode_hex_pairs() {
        assert_eq!(hex_pair_to_unit("ff"), Some(1.0));
        assert_eq!(hex_pair_to_unit("00"), Some(0.0));
        assert_eq!(hex_pair_to_unit("AB"), Some(171.0 / 255.0));
        assert_eq!(hex_pair_to_unit("g0"), None);
        assert_eq!(hex_pair_to_unit("abc"), None);
    }

    #[test]
    fn doubled_pairs() {
        assert!(hex_pair_is_doubled("33"));
        assert!(hex_pair_is_doubled("aA"));
        assert!(!hex_pair_is_doubled("34"));
        assert!(!hex_pair_is_doubled("3"));
        assert_eq!(first_digit("33"), '3');
        assert_eq!(first_digit(""), '0');
    }

    #[test]
    fn hues() {
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue_fraction(90.0), 0.25);
        assert_eq!(normalize_hue_fraction(Component::NAN), 0.0);
    }

    #[test]
    fn transform_with_identity() {
        const IDENTITY: Transform = transform_3x3(
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert_eq!(
            transform(&IDENTITY, Components(0.1, 0.2, 0.3)),
            Components(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn transform_columns() {
        // Columns are (1, 2, 3), (0, 1, 0), (0, 0, 1), so x feeds into y and z.
        const M: Transform = transform_3x3(
            1.0, 2.0, 3.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert_eq!(transform(&M, Components(1.0, 0.0, 0.0)), Components(1.0, 2.0, 3.0));
    }
}
