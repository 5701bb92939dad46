//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Map an 8-bit channel into the `0.0..=1.0` range.
pub fn normalize(channel: u8) -> Component {
    channel as Component / 255.0
}

/// Map a value in the `0.0..=1.0` range to the nearest 8-bit channel. Values
/// outside the range saturate.
pub fn to_channel(value: Component) -> u8 {
    (value * 255.0).round() as u8
}

/// Round `value` to a number of decimal places, halfway cases away from
/// zero.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    let ten = T::one() + T::one() + T::one() + T::one() + T::one();
    let factor = (ten + ten).powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }

    #[test]
    fn channels_saturate() {
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(1.5), 255);
        assert_eq!(to_channel(-0.2), 0);
        assert_eq!(to_channel(normalize(128)), 128);
    }

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(round_to(49.8039_f64, 1), 49.8);
        assert_eq!(round_to(85.7143_f64, 1), 85.7);
        assert_eq!(round_to(0.05_f64 + 0.0001, 1), 0.1);
        assert_eq!(round_to(100.0_f64, 1), 100.0);
    }
}
