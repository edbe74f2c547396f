//! The composite transforms between sRGB channels and color space triples.
//!
//! The functions in this module assemble the hops of the conversion module
//! into full paths and fix the public coordinate contract: hues are degrees
//! in 0..360, LCh chroma is clamped to 0..=100, and HSL as well as HSLuv
//! express saturation and lightness as percentages. Writing a triple back
//! always gamut-clips and quantizes, so every color remains a valid sRGB
//! color no matter the coordinates.

use crate::core::conversion::{
    from_unit, hsl_to_srgb, hsluv_to_lchuv, lab_to_lch, lab_to_xyz, lch_to_lab, lchuv_to_hsluv,
    lchuv_to_luv, linear_srgb_to_srgb, linear_srgb_to_xyz, luv_to_lchuv, luv_to_xyz, srgb_to_hsl,
    srgb_to_linear_srgb, to_unit, xyz_to_lab, xyz_to_linear_srgb, xyz_to_luv,
};
use crate::core::gamut::clip;
use crate::core::space::{ColorSpace, WhitePoint};
use crate::Float;

/// Normalize a hue in degrees to the 0..360 range, mapping the not-a-number
/// hue of achromatic colors to zero.
fn normalize_hue(degrees: Float) -> Float {
    if degrees.is_nan() {
        0.0
    } else {
        degrees.rem_euclid(360.0)
    }
}

/// Read the given sRGB channels as a triple in the given color space.
///
/// The white point only matters for Lab and LCh; HSL and HSLuv are defined
/// over sRGB and hence relative to D65.
pub(crate) fn to_triple(space: ColorSpace, white: &WhitePoint, channels: &[u16; 3]) -> [Float; 3] {
    let srgb = to_unit(channels);

    match space {
        ColorSpace::Lab => {
            xyz_to_lab(&linear_srgb_to_xyz(&srgb_to_linear_srgb(&srgb)), white)
        }
        ColorSpace::Lch => {
            let [l, c, h] = lab_to_lch(&xyz_to_lab(
                &linear_srgb_to_xyz(&srgb_to_linear_srgb(&srgb)),
                white,
            ));
            [l, c.clamp(0.0, 100.0), normalize_hue(h.to_degrees())]
        }
        ColorSpace::Hsl => {
            let [h, s, l] = srgb_to_hsl(&srgb);
            [normalize_hue(h), s * 100.0, l * 100.0]
        }
        ColorSpace::Hsluv => {
            let [h, s, l] = lchuv_to_hsluv(&luv_to_lchuv(&xyz_to_luv(&linear_srgb_to_xyz(
                &srgb_to_linear_srgb(&srgb),
            ))));
            [normalize_hue(h.to_degrees()), s, l]
        }
    }
}

/// Write the given triple in the given color space back to sRGB channels.
///
/// Out-of-gamut results are clipped to the sRGB cube before quantization.
pub(crate) fn from_triple(space: ColorSpace, white: &WhitePoint, triple: &[Float; 3]) -> [u16; 3] {
    let srgb = match space {
        ColorSpace::Lab => {
            linear_srgb_to_srgb(&xyz_to_linear_srgb(&lab_to_xyz(triple, white)))
        }
        ColorSpace::Lch => {
            let lab = lch_to_lab(&[triple[0], triple[1], triple[2].to_radians()]);
            linear_srgb_to_srgb(&xyz_to_linear_srgb(&lab_to_xyz(&lab, white)))
        }
        ColorSpace::Hsl => hsl_to_srgb(&[triple[0], triple[1] / 100.0, triple[2] / 100.0]),
        ColorSpace::Hsluv => {
            let lchuv = hsluv_to_lchuv(&[triple[0].to_radians(), triple[1], triple[2]]);
            linear_srgb_to_srgb(&xyz_to_linear_srgb(&luv_to_xyz(&lchuv_to_luv(&lchuv))))
        }
    };

    from_unit(&clip(&srgb))
}

// ====================================================================================================================

/// A new value for one channel of a color space triple.
///
/// Channel updates come in two flavors, setting the channel to a constant
/// and mapping the current value through a function. The [`From`]
/// implementation covers the former, so most call sites just pass a number:
///
/// ```
/// # use tinct::{ChannelValue, Color, ColorSpace};
/// # use tinct::error::ColorFormatError;
/// let coral: Color = "#ff7f50".parse()?;
/// let muted = coral.map_channel(ColorSpace::Lch, 1, 30.0);
/// let rotated = coral.map_channel(ColorSpace::Lch, 2, ChannelValue::with(|h| h + 30.0));
/// # assert_ne!(muted, rotated);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub enum ChannelValue {
    /// Replace the channel with this value.
    Constant(Float),
    /// Replace the channel with the result of applying this function to its
    /// current value.
    Function(Box<dyn Fn(Float) -> Float>),
}

impl ChannelValue {
    /// Create a channel update from the given function.
    pub fn with(update: impl Fn(Float) -> Float + 'static) -> Self {
        Self::Function(Box::new(update))
    }

    /// Apply this channel update to the current value.
    pub(crate) fn apply(&self, current: Float) -> Float {
        match *self {
            Self::Constant(value) => value,
            Self::Function(ref update) => update(current),
        }
    }
}

impl From<Float> for ChannelValue {
    fn from(value: Float) -> Self {
        Self::Constant(value)
    }
}

impl core::fmt::Debug for ChannelValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Constant(value) => f.debug_tuple("Constant").field(&value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{from_triple, to_triple, ChannelValue};
    use crate::core::equality::assert_within;
    use crate::core::space::{ColorSpace, WhitePoint};

    #[test]
    fn test_coordinate_contract() {
        let coral = [0xffff, 0x7f7f, 0x5050];
        let d65 = WhitePoint::D65;

        for space in [
            ColorSpace::Lab,
            ColorSpace::Lch,
            ColorSpace::Hsl,
            ColorSpace::Hsluv,
        ] {
            let triple = to_triple(space, &d65, &coral);
            if let Some(index) = space.hue_index() {
                assert!((0.0..360.0).contains(&triple[index]));
            }

            // Every triple quantizes back to the same channels.
            assert_eq!(from_triple(space, &d65, &triple), coral);
        }
    }

    #[test]
    fn test_achromatic_hue() {
        let gray = [0x8080, 0x8080, 0x8080];
        let hsl = to_triple(ColorSpace::Hsl, &WhitePoint::D65, &gray);
        assert_within!(hsl[0], 0.0, 1e-9);
        assert_within!(hsl[1], 0.0, 1e-9);
    }

    #[test]
    fn test_gamut_clipping() {
        // A Lab triple far outside the sRGB gamut still yields a valid color.
        let channels = from_triple(ColorSpace::Lab, &WhitePoint::D65, &[150.0, 200.0, -200.0]);
        let lab = to_triple(ColorSpace::Lab, &WhitePoint::D65, &channels);
        assert!(lab[0] <= 100.0 + 1e-6);
    }

    #[test]
    fn test_channel_value() {
        let constant = ChannelValue::from(42.0);
        assert_within!(constant.apply(7.0), 42.0, 1e-12);

        let function = ChannelValue::with(|value| value * 2.0);
        assert_within!(function.apply(7.0), 14.0, 1e-12);
    }
}
