//! Support for computing WCAG 2.x contrast.

use crate::core::conversion::to_unit;
use crate::Float;

/// Compute the relative luminance of the given sRGB channels.
///
/// This function implements the WCAG 2.x definition, including its slightly
/// off linearization threshold of 0.03928. The result ranges from 0 for
/// black to 1 for white.
pub(crate) fn relative_luminance(channels: &[u16; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [r, g, b] = to_unit(channels);
    Float::mul_add(
        0.0722,
        linearize(b),
        Float::mul_add(0.2126, linearize(r), 0.7152 * linearize(g)),
    )
}

/// Compute the WCAG 2.x contrast ratio between the two relative luminances.
///
/// The ratio is symmetric in its arguments and ranges from 1 for identical
/// luminances to 21 for black against white.
pub(crate) fn to_contrast_ratio(lum1: Float, lum2: Float) -> Float {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);

    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod test {
    use super::{relative_luminance, to_contrast_ratio};
    use crate::core::equality::assert_within;

    #[test]
    fn test_relative_luminance() {
        let white = relative_luminance(&[0xffff, 0xffff, 0xffff]);
        let black = relative_luminance(&[0, 0, 0]);
        assert_within!(white, 1.0, 1e-9);
        assert_within!(black, 0.0, 1e-9);

        // The green channel dominates luminance.
        let green = relative_luminance(&[0, 0xffff, 0]);
        let blue = relative_luminance(&[0, 0, 0xffff]);
        assert!(green > 5.0 * blue);
    }

    #[test]
    fn test_contrast_ratio() {
        let white = relative_luminance(&[0xffff, 0xffff, 0xffff]);
        let black = relative_luminance(&[0, 0, 0]);

        assert_within!(to_contrast_ratio(white, black), 21.0, 1e-9);
        assert_within!(to_contrast_ratio(black, white), 21.0, 1e-9);
        assert_within!(to_contrast_ratio(white, white), 1.0, 1e-9);
    }
}
